use log::info;

use crate::actors::Placement;
use crate::error::LineError;
use crate::line::Line;

pub const RESTING_SCALE: f64 = 0.5;
pub const HOVER_SCALE: f64 = 0.6;
pub const OUTLINE_WIDTH: f64 = 0.1;

/// How a renderer should draw an actor's mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub scale: f64,
    pub outline: bool,
}

impl Highlight {
    pub fn for_state(hovered: bool) -> Self {
        if hovered {
            Highlight {
                scale: HOVER_SCALE,
                outline: true,
            }
        } else {
            Highlight {
                scale: RESTING_SCALE,
                outline: false,
            }
        }
    }

    pub fn outline_width(&self) -> f64 {
        if self.outline {
            OUTLINE_WIDTH
        } else {
            0.0
        }
    }
}

/// Callbacks the rendering side fires when the pointer enters or leaves an actor's mesh.
pub trait HoverHandler {
    fn on_pointer_over(&mut self, placement: &Placement);
    fn on_pointer_out(&mut self, placement: &Placement);
}

pub fn rank_message(placement: &Placement) -> String {
    format!("{} is number {} in line", placement.name, placement.rank)
}

/// Logs each actor's place in line when it is hovered.
#[derive(Debug, Default)]
pub struct RankAnnouncer {
    last: Option<String>,
}

impl RankAnnouncer {
    pub fn new() -> Self {
        RankAnnouncer::default()
    }

    pub fn last_announcement(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl HoverHandler for RankAnnouncer {
    fn on_pointer_over(&mut self, placement: &Placement) {
        let message = rank_message(placement);
        info!("{}", message);
        self.last = Some(message);
    }

    fn on_pointer_out(&mut self, _placement: &Placement) {}
}

/// Tracks which actor is under the pointer and forwards transitions to a handler.
///
/// Ranks are read from the line at event time, so an actor that moved up
/// reports its new place.
#[derive(Debug, Default)]
pub struct HoverTracker {
    hovered: Option<String>,
}

impl HoverTracker {
    pub fn new() -> Self {
        HoverTracker::default()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn highlight(&self, name: &str) -> Highlight {
        Highlight::for_state(self.hovered.as_deref() == Some(name.trim()))
    }

    /// Highlight for an actor that must be in `line`.
    pub fn highlight_in(&self, line: &Line, name: &str) -> Result<Highlight, LineError> {
        let placement = line.placement(name)?;
        Ok(self.highlight(&placement.name))
    }

    /// Hovers `name` and returns where it stands now. Re-hovering the same actor
    /// fires no handler events but still reports its current placement.
    pub fn pointer_over<H: HoverHandler>(
        &mut self,
        line: &Line,
        name: &str,
        handler: &mut H,
    ) -> Result<Placement, LineError> {
        let placement = line.placement(name)?;
        if self.hovered.as_deref() == Some(placement.name.as_str()) {
            return Ok(placement);
        }

        self.pointer_out(line, handler);
        handler.on_pointer_over(&placement);
        self.hovered = Some(placement.name.clone());
        Ok(placement)
    }

    /// Hovers `name` and returns its rank message as of the current line.
    pub fn announce_over(
        &mut self,
        line: &Line,
        name: &str,
        announcer: &mut RankAnnouncer,
    ) -> Result<String, LineError> {
        let placement = self.pointer_over(line, name, announcer)?;
        Ok(rank_message(&placement))
    }

    /// Clears the hover. An actor that has since left the line is dropped silently.
    pub fn pointer_out<H: HoverHandler>(&mut self, line: &Line, handler: &mut H) {
        if let Some(previous) = self.hovered.take() {
            if let Ok(placement) = line.placement(&previous) {
                handler.on_pointer_out(&placement);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl HoverHandler for Recorder {
        fn on_pointer_over(&mut self, placement: &Placement) {
            self.events.push(format!("over {}", placement.name));
        }

        fn on_pointer_out(&mut self, placement: &Placement) {
            self.events.push(format!("out {}", placement.name));
        }
    }

    fn line() -> Line {
        let mut line = Line::new();
        for name in ["steve", "carl", "rachel"] {
            line.add_new_actor(name).unwrap();
        }
        line.update_location_of_all_actors().unwrap();
        line
    }

    #[test]
    fn announces_one_based_rank() {
        let line = line();
        let mut tracker = HoverTracker::new();
        let mut announcer = RankAnnouncer::new();

        tracker.pointer_over(&line, "carl", &mut announcer).unwrap();
        assert_eq!(announcer.last_announcement(), Some("carl is number 2 in line"));
    }

    #[test]
    fn moving_between_actors_emits_out_then_over() {
        let line = line();
        let mut tracker = HoverTracker::new();
        let mut recorder = Recorder::default();

        tracker.pointer_over(&line, "steve", &mut recorder).unwrap();
        tracker.pointer_over(&line, "steve", &mut recorder).unwrap();
        tracker.pointer_over(&line, "rachel", &mut recorder).unwrap();
        tracker.pointer_out(&line, &mut recorder);

        assert_eq!(
            recorder.events,
            vec!["over steve", "out steve", "over rachel", "out rachel"]
        );
        assert_eq!(tracker.hovered(), None);
    }

    #[test]
    fn unknown_actor_keeps_current_hover() {
        let line = line();
        let mut tracker = HoverTracker::new();
        let mut recorder = Recorder::default();

        tracker.pointer_over(&line, "steve", &mut recorder).unwrap();
        let err = tracker.pointer_over(&line, "nobody", &mut recorder).unwrap_err();
        assert_eq!(err, LineError::NotFound("nobody".to_string()));
        assert_eq!(tracker.hovered(), Some("steve"));
    }

    #[test]
    fn rehovering_reports_current_rank() {
        let mut line = line();
        let mut tracker = HoverTracker::new();
        let mut announcer = RankAnnouncer::new();

        let message = tracker.announce_over(&line, "rachel", &mut announcer).unwrap();
        assert_eq!(message, "rachel is number 3 in line");

        line.remove_actor("steve").unwrap();
        line.update_location_of_all_actors().unwrap();

        let message = tracker.announce_over(&line, "rachel", &mut announcer).unwrap();
        assert_eq!(message, "rachel is number 2 in line");
        assert_eq!(tracker.hovered(), Some("rachel"));
        assert_eq!(
            tracker.pointer_over(&line, "rachel", &mut announcer).unwrap().rank,
            2
        );
    }

    #[test]
    fn highlight_in_requires_membership() {
        let line = line();
        let mut tracker = HoverTracker::new();
        let mut announcer = RankAnnouncer::new();
        tracker.announce_over(&line, "carl", &mut announcer).unwrap();

        let hovered = tracker.highlight_in(&line, " carl").unwrap();
        assert_eq!(hovered.outline_width(), OUTLINE_WIDTH);
        assert_eq!(tracker.highlight_in(&line, "steve").unwrap().outline_width(), 0.0);
        assert_eq!(
            tracker.highlight_in(&line, "nobody").unwrap_err(),
            LineError::NotFound("nobody".to_string())
        );
    }

    #[test]
    fn highlight_follows_hover() {
        let line = line();
        let mut tracker = HoverTracker::new();
        let mut announcer = RankAnnouncer::new();
        tracker.pointer_over(&line, "tom", &mut announcer).unwrap_err();
        tracker.pointer_over(&line, "carl", &mut announcer).unwrap();

        assert_eq!(tracker.highlight("carl"), Highlight::for_state(true));
        assert_eq!(tracker.highlight("carl").scale, HOVER_SCALE);
        assert_eq!(tracker.highlight("carl").outline_width(), OUTLINE_WIDTH);
        assert!(!tracker.highlight("steve").outline);
        assert_eq!(tracker.highlight("steve").scale, RESTING_SCALE);
    }
}
