//! Game settings and preferences
//!
//! Read once at startup from an optional JSON file. Every field has a default,
//! so a partial file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Difficulty, Rules};

/// Failure to read a settings file that exists
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty selected when the menu first appears
    pub difficulty: Difficulty,
    /// Autopilot on at launch
    pub autopilot: bool,
    /// Distance a jump must win by before the autopilot takes it
    pub autopilot_margin: f32,
    /// Fixed seed for reproducible runs; random when absent
    pub seed: Option<u64>,
    /// Spawn collectible tokens in gaps
    pub tokens: bool,
    /// Chance of a token per pipe pair (0.0 - 1.0)
    pub token_chance: f64,
    /// Directory holding the sprite files
    pub asset_dir: PathBuf,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            autopilot: false,
            autopilot_margin: DEFAULT_AUTOPILOT_MARGIN,
            seed: None,
            tokens: true,
            token_chance: DEFAULT_TOKEN_CHANCE,
            asset_dir: PathBuf::from("."),
            max_frames: None,
        }
    }
}

impl Settings {
    /// Default file name looked up in the working directory
    pub const FILE_NAME: &'static str = "flappy_bim.json";

    /// Simulation rules for a difficulty under these settings
    pub fn rules(&self, difficulty: Difficulty) -> Rules {
        Rules {
            profile: difficulty.profile(),
            token_chance: self.tokens.then_some(self.token_chance.clamp(0.0, 1.0)),
            autopilot_margin: self.autopilot_margin,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read settings from `path`
    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings from `path`, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or malformed one is logged.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}
