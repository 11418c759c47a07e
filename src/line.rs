use log::debug;

use crate::actors::{Actor, Placement};
use crate::config::LineConfig;
use crate::error::LineError;
use crate::formation::{Axis, Formation, Layout, DEFAULT_SPACING};

/// Ordered queue of actors; queue order is insertion order.
///
/// Positions are recomputed on demand only. After adding or removing actors,
/// call [`Line::update_location_of_all_actors`] before reading positions.
#[derive(Debug, Clone)]
pub struct Line {
    actors: Vec<Actor>,
    formation: Formation,
    layout: Layout,
}

impl Default for Line {
    fn default() -> Self {
        Line::new()
    }
}

impl Line {
    /// Empty line using 1.0 unit spacing along +x: actor `i` stands at `(i, 0, 0)`.
    pub fn new() -> Self {
        Line {
            actors: Vec::new(),
            formation: Formation::default(),
            layout: Layout::Straight {
                spacing: DEFAULT_SPACING,
                axis: Axis::X,
            },
        }
    }

    pub fn with_formation(formation: Formation) -> Result<Self, LineError> {
        let layout = formation.compile()?;
        Ok(Line {
            actors: Vec::new(),
            formation,
            layout,
        })
    }

    /// Build a line from a config: every configured actor is added in order and
    /// the layout is computed once at the end.
    pub fn from_config(config: &LineConfig) -> Result<Self, LineError> {
        let mut line = Line::with_formation(config.formation.clone())?;

        for name in &config.actors {
            line.add_new_actor(name)?;
        }

        line.update_location_of_all_actors()?;
        Ok(line)
    }

    pub fn add_new_actor(&mut self, name: &str) -> Result<&Actor, LineError> {
        let actor = Actor::new(name)?;
        if self.actor(actor.name()).is_some() {
            return Err(LineError::DuplicateName(actor.name().to_string()));
        }

        debug!("{} joins the line at index {}", actor.name(), self.actors.len());
        self.actors.push(actor);

        let index = self.actors.len() - 1;
        Ok(&self.actors[index])
    }

    pub fn remove_actor(&mut self, name: &str) -> Result<Actor, LineError> {
        let index = self.position_of_named(name)?;
        let actor = self.actors.remove(index);
        debug!("{} leaves the line from index {}", actor.name(), index);
        Ok(actor)
    }

    /// Recompute every actor's position from its index. Calling this twice in a
    /// row gives identical positions. If the formation cannot place some index,
    /// no actor is moved.
    pub fn update_location_of_all_actors(&mut self) -> Result<(), LineError> {
        let positions = self.layout.positions(self.actors.len())?;

        for (actor, position) in self.actors.iter_mut().zip(positions) {
            actor.position = position;
        }

        debug!("recomputed positions of {} actors", self.actors.len());
        Ok(())
    }

    /// Zero-based index of `actor` in the current queue order.
    pub fn position_of_actor(&self, actor: &Actor) -> Result<usize, LineError> {
        self.position_of_named(actor.name())
    }

    pub fn position_of_named(&self, name: &str) -> Result<usize, LineError> {
        let name = name.trim();
        self.actors
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| LineError::NotFound(name.to_string()))
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        let name = name.trim();
        self.actors.iter().find(|a| a.name() == name)
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn names(&self) -> Vec<&str> {
        self.actors.iter().map(|a| a.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn placement(&self, name: &str) -> Result<Placement, LineError> {
        let index = self.position_of_named(name)?;
        Ok(Placement::of(&self.actors[index], index))
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.actors.iter().enumerate().map(Placement::from).collect()
    }
}
