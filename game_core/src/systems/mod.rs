pub mod ai;
pub mod collision;
pub mod handicaps;
pub mod input;
pub mod movement;
pub mod respawn;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use handicaps::*;
pub use input::*;
pub use movement::*;
pub use respawn::*;
pub use scoring::*;
