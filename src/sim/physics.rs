//! Vertical integration of the bird
//!
//! Pure functions so the autopilot can replay exactly what a real tick does.

use super::state::Bird;
use crate::consts::JUMP_VELOCITY;

/// Advance one tick: gravity into velocity, then velocity into position
#[inline]
pub fn step(bird: Bird, gravity: f32) -> Bird {
    let vel = bird.vel + gravity;
    Bird {
        y: bird.y + vel,
        vel,
    }
}

/// Jump impulse: replaces the current velocity
#[inline]
pub fn jump(bird: Bird) -> Bird {
    Bird {
        vel: JUMP_VELOCITY,
        ..bird
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCREEN_HEIGHT;
    use crate::sim::Difficulty;
    use proptest::prelude::*;

    #[test]
    fn test_ten_ticks_of_easy_gravity() {
        let g = Difficulty::Easy.profile().gravity;
        let centre = SCREEN_HEIGHT / 2.0;
        let mut bird = Bird::default();
        for _ in 0..10 {
            bird = step(bird, g);
        }
        // 0.3 + 0.6 + ... + 3.0
        assert!((bird.vel - 3.0).abs() < 1e-4);
        assert!((bird.y - (centre + 16.5)).abs() < 1e-3);
    }

    #[test]
    fn test_jump_then_normal_tick() {
        let g = Difficulty::Normal.profile().gravity;
        let bird = step(jump(Bird::default()), g);
        assert!((bird.vel - -6.6).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_gravity_adds_exactly(y in 0.0f32..600.0, vel in -20.0f32..20.0, d in 0usize..3) {
            let g = Difficulty::ALL[d].profile().gravity;
            let after = step(Bird { y, vel }, g);
            prop_assert_eq!(after.vel, vel + g);
            prop_assert!(after.vel > vel);
        }

        #[test]
        fn prop_jump_overwrites(y in 0.0f32..600.0, vel in -50.0f32..50.0) {
            let after = jump(Bird { y, vel });
            prop_assert_eq!(after.vel, JUMP_VELOCITY);
            prop_assert_eq!(after.y, y);
        }
    }
}
