//! Axis-aligned collision tests
//!
//! Shared by the real tick and the autopilot's look-ahead, so both agree on
//! what counts as a crash.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PipePair;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Same rectangle moved by `dx` horizontally
    pub fn shifted_x(&self, dx: f32) -> Self {
        Self {
            pos: Vec2::new(self.pos.x + dx, self.pos.y),
            size: self.size,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// True when the box touches or leaves the top/bottom of the visible area
pub fn out_of_bounds(bird: &Rect, screen_height: f32) -> bool {
    bird.top() <= 0.0 || bird.bottom() >= screen_height
}

/// True when the box overlaps either column of any pair.
///
/// `dx` shifts every pair horizontally first, which lets the planner test
/// against a future layout without copying the pipe list.
pub fn hits_pipes(bird: &Rect, pipes: &[PipePair], dx: f32) -> bool {
    pipes.iter().any(|pair| {
        bird.overlaps(&pair.lower().shifted_x(dx)) || bird.overlaps(&pair.upper().shifted_x(dx))
    })
}

/// Full loss condition for one position of the bird
pub fn collides(bird: &Rect, pipes: &[PipePair], dx: f32, screen_height: f32) -> bool {
    out_of_bounds(bird, screen_height) || hits_pipes(bird, pipes, dx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&b.shifted_x(-0.5)));
    }

    #[test]
    fn test_bounds() {
        let centre = Rect::from_center(Vec2::new(BIRD_X, 300.0), Vec2::splat(BIRD_SIZE));
        assert!(!out_of_bounds(&centre, SCREEN_HEIGHT));

        let at_top = Rect::new(75.0, 0.0, BIRD_SIZE, BIRD_SIZE);
        assert!(out_of_bounds(&at_top, SCREEN_HEIGHT));

        let at_floor = Rect::new(75.0, SCREEN_HEIGHT - BIRD_SIZE, BIRD_SIZE, BIRD_SIZE);
        assert!(out_of_bounds(&at_floor, SCREEN_HEIGHT));
    }

    #[test]
    fn test_pipe_hit_with_shift() {
        let pipes = vec![PipePair::new(200.0, 300.0, 150.0)];
        // Bird in the lower column's height band
        let bird = Rect::from_center(Vec2::new(BIRD_X, 400.0), Vec2::splat(BIRD_SIZE));
        assert!(!hits_pipes(&bird, &pipes, 0.0));
        assert!(hits_pipes(&bird, &pipes, -100.0));

        // Same x but inside the gap
        let in_gap = Rect::from_center(Vec2::new(BIRD_X, 225.0), Vec2::splat(BIRD_SIZE));
        assert!(!hits_pipes(&in_gap, &pipes, -100.0));
    }
}
