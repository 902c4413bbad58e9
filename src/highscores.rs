//! Best score for the lifetime of the process
//!
//! Never written to storage; it starts at zero every launch.

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Best pipe score so far, plus a little run bookkeeping for the game-over screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: u32,
    /// Difficulty the best score was set on
    best_difficulty: Option<Difficulty>,
    runs: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished run into the record.
    ///
    /// Returns true if the run set a new best. The best never decreases.
    pub fn record(&mut self, score: u32, difficulty: Difficulty) -> bool {
        self.runs += 1;
        if score > self.best {
            self.best = score;
            self.best_difficulty = Some(difficulty);
            log::info!("New best score {} on {}", score, difficulty.as_str());
            true
        } else {
            false
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn best_difficulty(&self) -> Option<Difficulty> {
        self.best_difficulty
    }

    /// Number of finished runs
    pub fn runs(&self) -> u32 {
        self.runs
    }
}
