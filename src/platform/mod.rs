//! Platform abstraction layer
//!
//! The game never talks to a window system directly. A platform backend
//! implements [`InputSource`] and hands over the events gathered since the
//! previous frame.

use std::collections::VecDeque;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    /// Primary button pressed at a screen position
    PointerDown { x: f32, y: f32 },
    /// Pointer moved (button hover only)
    PointerMoved { x: f32, y: f32 },
    KeyDown(Key),
}

/// Yields the events that arrived since the last call, in delivery order
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame event batches, then goes quiet
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Queue one more frame's worth of events
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    /// Queue `count` frames with no events
    pub fn idle(&mut self, count: usize) {
        for _ in 0..count {
            self.frames.push_back(Vec::new());
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}
