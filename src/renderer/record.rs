//! In-memory renderer
//!
//! Keeps the draw calls of the frame being built and of the last presented
//! frame. Backs the text renderer and the tests.

use glam::Vec2;

use super::{Color, Renderer, Sprite};
use crate::assets::{AssetCatalog, SpriteSource};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
    },
    Outline {
        rect: Rect,
        color: Color,
        width: f32,
    },
    Sprite {
        sprite: Sprite,
        rect: Rect,
        rotation_deg: f32,
        flip_y: bool,
        /// Solid colour drawn instead when the art is missing
        placeholder: Option<Color>,
    },
    Text {
        text: String,
        center: Vec2,
        size: f32,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    assets: Option<AssetCatalog>,
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve sprites against a catalog so placeholders show up in the log
    pub fn with_assets(assets: AssetCatalog) -> Self {
        Self {
            assets: Some(assets),
            ..Self::default()
        }
    }

    /// Commands issued since the last `present`
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Text strings of the last frame, in draw order
    pub fn texts(&self) -> Vec<String> {
        self.last_frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand::Rect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.pending.push(DrawCommand::Outline { rect, color, width });
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect, rotation_deg: f32, flip_y: bool) {
        let placeholder = self
            .assets
            .as_ref()
            .and_then(|a| match a.source(sprite) {
                SpriteSource::Placeholder(color) => Some(*color),
                SpriteSource::File(_) => None,
            });
        self.pending.push(DrawCommand::Sprite {
            sprite,
            rect,
            rotation_deg,
            flip_y,
            placeholder,
        });
    }

    fn draw_text(&mut self, text: &str, center: Vec2, size: f32, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        log::trace!("frame {} ({} draw calls)", self.frames_presented, self.last_frame.len());
    }
}
