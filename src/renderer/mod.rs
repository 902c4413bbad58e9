//! Rendering seam
//!
//! The game describes each frame through the [`Renderer`] trait; how pixels
//! reach the screen is up to the backend. `scene` lays out the three screens
//! and `record` is a backend that keeps the draw calls in memory. `text`
//! prints frames as lines of text for headless runs.

pub mod record;
pub mod scene;
pub mod text;

pub use record::{DrawCommand, RecordingRenderer};
pub use scene::draw;
pub use text::TextRenderer;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Steel blue
    pub const BUTTON: Color = Color::rgb(70, 130, 180);
    /// Cornflower blue
    pub const BUTTON_HOVER: Color = Color::rgb(100, 149, 237);
    /// Dark orange
    pub const BUTTON_ACTIVE: Color = Color::rgb(255, 140, 0);
    pub const AUTO_LABEL: Color = Color::rgb(255, 165, 0);
    pub const TOKEN: Color = Color::rgb(255, 215, 0);
    /// Stand-in for missing scenery art
    pub const PLACEHOLDER: Color = Color::rgb(34, 139, 34);
    /// Stand-in for a missing bird sprite
    pub const PLACEHOLDER_BIRD: Color = Color::rgb(255, 255, 0);
}

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Bird,
    BackgroundDay,
    BackgroundNight,
    /// Drawn upright for lower columns and flipped for upper ones
    Column,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::Bird,
        Sprite::BackgroundDay,
        Sprite::BackgroundNight,
        Sprite::Column,
    ];

    /// Backdrop for a world backdrop index
    pub fn backdrop(index: usize) -> Self {
        if index == 0 {
            Sprite::BackgroundDay
        } else {
            Sprite::BackgroundNight
        }
    }
}

/// Draw-call sink for one frame at a time
pub trait Renderer {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw an image stretched to `rect`, rotated by `rotation_deg` about its centre
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect, rotation_deg: f32, flip_y: bool);

    /// Draw text centred on `center`
    fn draw_text(&mut self, text: &str, center: Vec2, size: f32, color: Color);

    /// Finish the frame
    fn present(&mut self);
}
