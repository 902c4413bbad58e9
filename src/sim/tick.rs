//! Fixed timestep simulation tick
//!
//! Advances one run by exactly one tick.

use super::autopilot;
use super::collision::collides;
use super::difficulty::Profile;
use super::physics;
use super::spawn;
use super::state::World;
use crate::consts::*;

/// Everything a tick needs that is not per-run state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub profile: Profile,
    /// Token probability per spawned pair; `None` disables tokens
    pub token_chance: Option<f64>,
    /// Distance a jump must win by before the autopilot takes it
    pub autopilot_margin: f32,
}

impl Rules {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            token_chance: Some(DEFAULT_TOKEN_CHANCE),
            autopilot_margin: DEFAULT_AUTOPILOT_MARGIN,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// A jump was requested this tick
    pub jump: bool,
    /// Let the planner decide whether to jump as well
    pub autopilot: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub jumped: bool,
    pub spawned: bool,
    pub pipes_passed: u32,
    pub tokens_collected: u32,
    /// The bird hit a pipe or the edge of the screen
    pub crashed: bool,
}

/// Advance the world by one tick.
///
/// Order: jump, autopilot, integrate, spawn, scroll, collide, collect tokens,
/// cull. A crashed world is frozen and further calls are no-ops.
pub fn tick(world: &mut World, rules: &Rules, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if world.crashed {
        return outcome;
    }
    let profile = &rules.profile;

    if input.jump {
        world.bird = physics::jump(world.bird);
        outcome.jumped = true;
    }
    // The planner sees a manual jump from this tick already applied
    if input.autopilot && autopilot::plan(world, profile, rules.autopilot_margin).jump {
        world.bird = physics::jump(world.bird);
        outcome.jumped = true;
    }
    world.bird = physics::step(world.bird, profile.gravity);

    outcome.spawned = spawn::advance_spawner(world, profile, rules.token_chance);
    spawn::scroll(world, profile.speed);

    let bird = world.bird.rect();
    if collides(&bird, &world.pipes, 0.0, SCREEN_HEIGHT) {
        world.crashed = true;
        outcome.crashed = true;
    }

    let mut collected = Vec::new();
    for (i, token) in world.tokens.iter().enumerate() {
        if token.active && bird.overlaps(&token.rect()) {
            collected.push(i);
        }
    }
    for &i in &collected {
        world.tokens[i].active = false;
    }
    world.token_score += collected.len() as u32;
    outcome.tokens_collected = collected.len() as u32;

    outcome.pipes_passed = spawn::cull(world);
    world.ticks += 1;
    outcome
}
