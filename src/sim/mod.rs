//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Pipes and tokens kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{Plan, plan};
pub use collision::{Rect, collides};
pub use difficulty::{Difficulty, Profile};
pub use state::{Bird, PipePair, Token, World};
pub use tick::{Rules, TickInput, TickOutcome, tick};
