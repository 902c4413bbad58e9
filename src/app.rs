//! Fixed-rate frame loop
//!
//! One iteration: drain input, dispatch every event, advance one tick, draw
//! one frame, then wait for the next slot.

use std::thread;
use std::time::{Duration, Instant};

use crate::platform::InputSource;
use crate::renderer::{Renderer, draw};
use crate::session::Session;

/// Decides how long to wait between frames
pub trait Pacer {
    fn pace(&mut self);
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pace(&mut self) {
        (**self).pace();
    }
}

/// Sleeps so frames start at most `hz` times per second.
///
/// Best effort: a late frame resets the schedule instead of trying to catch up.
#[derive(Debug)]
pub struct FixedRate {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRate {
    pub fn new(hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / hz.max(1),
            next: None,
        }
    }
}

impl Pacer for FixedRate {
    fn pace(&mut self) {
        let now = Instant::now();
        let next = self.next.unwrap_or(now) + self.period;
        if next > now {
            thread::sleep(next - now);
            self.next = Some(next);
        } else {
            self.next = Some(now);
        }
    }
}

/// Runs frames back to back
#[derive(Debug, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn pace(&mut self) {}
}

/// What a finished loop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    /// Frames that advanced the simulation
    pub ticks: u64,
    pub best: u32,
    pub runs: u32,
}

/// Run frames until quit is requested or `max_frames` have been drawn
pub fn run(
    session: &mut Session,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
    pacer: &mut impl Pacer,
    max_frames: Option<u64>,
) -> RunSummary {
    let mut frames = 0;
    let mut ticks = 0;

    log::info!("Frame loop started");
    loop {
        if max_frames.is_some_and(|max| frames >= max) {
            log::info!("Frame limit reached");
            break;
        }

        for event in input.poll_events() {
            session.handle_event(&event);
        }
        if session.update().is_some() {
            ticks += 1;
        }
        draw(session, renderer);
        frames += 1;

        if session.quit_requested() {
            break;
        }
        pacer.pace();
    }

    let summary = RunSummary {
        frames,
        ticks,
        best: session.high_score().best(),
        runs: session.high_score().runs(),
    };
    log::info!(
        "Frame loop stopped after {} frames ({} ticks), best {} over {} runs",
        summary.frames,
        summary.ticks,
        summary.best,
        summary.runs
    );
    summary
}
