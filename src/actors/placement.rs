use serde::Serialize;

use crate::actors::actor::Actor;

/// Where one actor stands, as handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub name: String,
    pub index: usize,
    /// 1-based place in line, the number shown to users.
    pub rank: usize,
    pub position: (f64, f64, f64),
}

impl Placement {
    pub fn of(actor: &Actor, index: usize) -> Self {
        Placement {
            name: actor.name().to_string(),
            index,
            rank: index + 1,
            position: actor.position(),
        }
    }
}

impl From<(usize, &Actor)> for Placement {
    fn from((index, actor): (usize, &Actor)) -> Self {
        Placement::of(actor, index)
    }
}
