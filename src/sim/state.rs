//! World state and core simulation types
//!
//! Everything one run mutates lives in [`World`]; it is rebuilt from scratch
//! whenever a run starts.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// The player-controlled bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical centre (x is fixed at BIRD_X)
    pub y: f32,
    /// Vertical velocity, positive is downward
    pub vel: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: SCREEN_HEIGHT / 2.0,
            vel: 0.0,
        }
    }
}

impl Bird {
    pub fn rect(&self) -> Rect {
        Rect::from_center(Vec2::new(BIRD_X, self.y), Vec2::splat(BIRD_SIZE))
    }

    /// Sprite rotation in degrees (nose up while rising)
    pub fn tilt_degrees(&self) -> f32 {
        self.vel * BIRD_TILT_PER_VELOCITY
    }
}

/// Two columns sharing an x position and a gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    /// Left edge of the hitbox
    pub x: f32,
    /// Top edge of the lower column
    pub gap_top: f32,
    /// Gap height at spawn time
    pub gap: f32,
}

impl PipePair {
    pub fn new(x: f32, gap_top: f32, gap: f32) -> Self {
        Self { x, gap_top, gap }
    }

    /// Lower column: from the gap down to the floor
    pub fn lower(&self) -> Rect {
        Rect::new(self.x, self.gap_top, PIPE_HITBOX_WIDTH, SCREEN_HEIGHT - self.gap_top)
    }

    /// Upper column: from the ceiling down to the gap
    pub fn upper(&self) -> Rect {
        Rect::new(self.x, 0.0, PIPE_HITBOX_WIDTH, (self.gap_top - self.gap).max(0.0))
    }

    pub fn right(&self) -> f32 {
        self.x + PIPE_HITBOX_WIDTH
    }

    pub fn gap_center(&self) -> f32 {
        self.gap_top - self.gap / 2.0
    }
}

/// A collectible sitting in a gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub pos: Vec2,
    pub active: bool,
}

impl Token {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(TOKEN_SIZE))
    }
}

fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete per-run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Seed this run was created from
    pub seed: u64,
    #[serde(skip, default = "detached_rng")]
    pub rng: Pcg32,
    pub bird: Bird,
    /// Oldest first
    pub pipes: Vec<PipePair>,
    /// Oldest first
    pub tokens: Vec<Token>,
    /// Pipe pairs that scrolled off the left edge
    pub pipe_score: u32,
    /// Tokens collected
    pub token_score: u32,
    /// Ticks since the last pipe spawn
    pub since_spawn: u32,
    /// 0 = day, 1 = night
    pub backdrop: usize,
    pub pipes_since_switch: u32,
    /// Set on the tick the bird hit something; nothing moves afterwards
    pub crashed: bool,
    pub ticks: u64,
}

impl World {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bird: Bird::default(),
            pipes: Vec::new(),
            tokens: Vec::new(),
            pipe_score: 0,
            token_score: 0,
            since_spawn: 0,
            backdrop: 0,
            pipes_since_switch: 0,
            crashed: false,
            ticks: 0,
        }
    }
}
