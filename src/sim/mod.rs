//! Deterministic simulation module
//!
//! All session logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod pipes;
pub mod progress;
pub mod state;
pub mod tick;

pub use collision::{Aabb, actor_hits_pair, out_of_bounds};
pub use difficulty::{Difficulty, PlacementRanges};
pub use pipes::{ObstaclePair, ObstaclePool};
pub use progress::Progression;
pub use state::{Actor, SessionEvent, SessionPhase, SessionState};
pub use tick::{TickInput, tick};
