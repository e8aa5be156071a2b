pub mod constants;
pub mod embers;
pub mod flame;
pub mod state;
pub mod visuals;

pub use constants::*;
pub use embers::{EmberQueue, EmberScrap, Intensity};
pub use flame::{FlameEngine, FlamePhase};
pub use state::Campfire;
