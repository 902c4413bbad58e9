//! Difficulty profiles

use serde::{Deserialize, Serialize};

/// Tuning constants for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Vertical size of the passable gap
    pub gap: f32,
    /// Pixels every pipe moves left per tick
    pub speed: f32,
    /// Added to the bird's velocity every tick
    pub gravity: f32,
    /// Game time between two pipe spawns
    pub spawn_interval_ms: u32,
}

/// Selectable difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn profile(&self) -> Profile {
        match self {
            Difficulty::Easy => Profile {
                gap: 200.0,
                speed: 3.0,
                gravity: 0.3,
                spawn_interval_ms: 1800,
            },
            Difficulty::Normal => Profile {
                gap: 150.0,
                speed: 4.0,
                gravity: 0.4,
                spawn_interval_ms: 1500,
            },
            Difficulty::Hard => Profile {
                gap: 115.0,
                speed: 5.0,
                gravity: 0.5,
                spawn_interval_ms: 1000,
            },
        }
    }

    /// Next level in menu order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }
}
