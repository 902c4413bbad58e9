//! Autopilot: short look-ahead over two candidate actions
//!
//! Each tick the planner replays the next few ticks twice, once gliding and
//! once jumping, against the pipes as they are right now scrolled forward. It
//! uses the same `physics::step` and `collision::collides` as the real tick.

use super::collision::collides;
use super::difficulty::Profile;
use super::physics;
use super::state::{Bird, PipePair, World};
use crate::consts::*;

/// Result of one planning pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    /// Whether to jump this tick
    pub jump: bool,
    /// Gap centre being aimed at
    pub target_y: f32,
    /// Final distance to target if gliding survives the horizon
    pub glide: Option<f32>,
    /// Final distance to target if jumping survives the horizon
    pub leap: Option<f32>,
}

/// Gap centre of the nearest pair still ahead of the bird, or mid-screen
pub fn target_y(bird: &Bird, pipes: &[PipePair]) -> f32 {
    let left = bird.rect().left();
    pipes
        .iter()
        .filter(|p| p.right() > left)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|p| p.gap_center())
        .unwrap_or(SCREEN_HEIGHT / 2.0)
}

/// Play `horizon` ticks forward with a frozen pipe layout.
///
/// Returns the final distance between the bird's centre (`Bird::y`, not the
/// top of its box) and `target`, or `None` if the bird would crash first.
pub fn simulate(
    bird: Bird,
    pipes: &[PipePair],
    profile: &Profile,
    jump: bool,
    target: f32,
    horizon: u32,
) -> Option<f32> {
    let mut bird = if jump { physics::jump(bird) } else { bird };
    for step in 0..horizon {
        bird = physics::step(bird, profile.gravity);
        // The real tick scrolls before testing, so step 0 already sees one shift
        let dx = -profile.speed * (step + 1) as f32;
        if collides(&bird.rect(), pipes, dx, SCREEN_HEIGHT) {
            return None;
        }
    }
    Some((bird.y - target).abs())
}

/// Choose this tick's action.
///
/// A surviving branch always beats a crashing one. When both survive, gliding
/// wins unless jumping ends more than `margin` closer to the target. When
/// neither survives the planner jumps anyway.
pub fn plan(world: &World, profile: &Profile, margin: f32) -> Plan {
    let target = target_y(&world.bird, &world.pipes);
    let glide = simulate(world.bird, &world.pipes, profile, false, target, PLANNER_HORIZON);
    let leap = simulate(world.bird, &world.pipes, profile, true, target, PLANNER_HORIZON);

    let jump = match (glide, leap) {
        (Some(_), None) => false,
        (None, Some(_)) => true,
        (Some(g), Some(j)) => j < g - margin,
        (None, None) => true,
    };

    Plan {
        jump,
        target_y: target,
        glide,
        leap,
    }
}
