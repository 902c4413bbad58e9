//! Flappy Bim - a single-screen flappy arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, autopilot)
//! - `fsm`: Menu / playing / game-over state machine
//! - `session`: Everything that outlives a single run (difficulty, high score)
//! - `app`: Fixed-rate frame loop
//! - `renderer`: Draw-call seam plus the scene layout
//! - `platform`: Input event seam
//! - `assets`: Sprite file resolution with placeholder fallback
//! - `settings`: JSON-backed configuration

pub mod app;
pub mod assets;
pub mod fsm;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::HighScore;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Visible area
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;

    /// Bird box, centred horizontally at BIRD_X
    pub const BIRD_SIZE: f32 = 50.0;
    pub const BIRD_X: f32 = 100.0;
    /// Velocity set by a jump (overwrites, never adds)
    pub const JUMP_VELOCITY: f32 = -7.0;
    /// Sprite tilt in degrees per unit of vertical velocity
    pub const BIRD_TILT_PER_VELOCITY: f32 = -3.0;

    /// Width of the part of a column that actually kills
    pub const PIPE_HITBOX_WIDTH: f32 = 25.0;
    /// Width of the column picture, drawn centred on the hitbox
    pub const PIPE_IMAGE_WIDTH: f32 = 250.0;
    pub const PIPE_IMAGE_OFFSET_X: f32 = 112.0;

    /// Band for the top edge of the lower column (inclusive)
    pub const GAP_TOP_MIN: i32 = 200;
    pub const GAP_TOP_MAX: i32 = 450;

    /// Collectible token box
    pub const TOKEN_SIZE: f32 = 20.0;
    pub const DEFAULT_TOKEN_CHANCE: f64 = 0.5;

    /// Pipes passed before the backdrop flips between day and night
    pub const BACKDROP_SWITCH_PIPES: u32 = 5;

    /// Autopilot look-ahead in ticks
    pub const PLANNER_HORIZON: u32 = 40;
    /// Distance a jump must win by before the autopilot prefers it
    pub const DEFAULT_AUTOPILOT_MARGIN: f32 = 5.0;
}
