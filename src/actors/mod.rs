pub mod actor;
pub mod placement;

pub use crate::actors::actor::Actor;
pub use crate::actors::placement::Placement;
