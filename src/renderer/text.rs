//! Text renderer for terminals and logs
//!
//! Records each frame like [`RecordingRenderer`] and prints every `every`-th
//! presented frame as one line: its texts in draw order, the draw call count
//! and how many sprites fell back to placeholders.

use std::io::Write;

use glam::Vec2;

use super::{Color, DrawCommand, RecordingRenderer, Renderer, Sprite};
use crate::assets::AssetCatalog;
use crate::sim::Rect;

pub struct TextRenderer<W: Write> {
    inner: RecordingRenderer,
    out: Option<W>,
    every: u64,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, assets: AssetCatalog, every: u64) -> Self {
        Self {
            inner: RecordingRenderer::with_assets(assets),
            out: Some(out),
            every: every.max(1),
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.inner.frames_presented()
    }

    /// Hand back the writer, if it never failed
    pub fn into_inner(self) -> Option<W> {
        self.out
    }

    fn frame_line(&self) -> String {
        let frame = self.inner.last_frame();
        let placeholders = frame
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { placeholder: Some(_), .. }))
            .count();
        format!(
            "[{:>6}] {} ({} draw calls, {} placeholder sprites)",
            self.inner.frames_presented(),
            self.inner.texts().join(" | "),
            frame.len(),
            placeholders
        )
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.inner.fill_rect(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.inner.stroke_rect(rect, color, width);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect, rotation_deg: f32, flip_y: bool) {
        self.inner.draw_sprite(sprite, rect, rotation_deg, flip_y);
    }

    fn draw_text(&mut self, text: &str, center: Vec2, size: f32, color: Color) {
        self.inner.draw_text(text, center, size, color);
    }

    fn present(&mut self) {
        self.inner.present();
        // Frames are numbered from 1; print the first and then every `every`-th
        if (self.inner.frames_presented() - 1) % self.every != 0 {
            return;
        }
        let line = self.frame_line();
        if let Some(out) = self.out.as_mut()
            && let Err(e) = writeln!(out, "{line}")
        {
            log::warn!("Text output failed, no more frames will be printed: {e}");
            self.out = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw;
    use crate::session::Session;
    use crate::settings::Settings;

    #[test]
    fn test_prints_every_nth_frame() {
        let session = Session::new(Settings {
            seed: Some(4),
            ..Default::default()
        });
        let mut r = TextRenderer::new(Vec::new(), AssetCatalog::placeholders(), 2);
        for _ in 0..4 {
            draw(&session, &mut r);
        }
        assert_eq!(r.frames_presented(), 4);

        let out = String::from_utf8(r.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[     1] FLAPPY BIM | Mode: NORMAL"));
        assert!(lines[1].starts_with("[     3] "));
        // Menu backdrop and bird
        assert!(lines[0].ends_with("2 placeholder sprites)"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_stops_output() {
        let mut r = TextRenderer::new(Broken, AssetCatalog::placeholders(), 1);
        r.draw_text("x", Vec2::ZERO, 10.0, Color::WHITE);
        r.present();
        r.present();
        assert_eq!(r.frames_presented(), 2);
        assert!(r.into_inner().is_none());
    }
}
