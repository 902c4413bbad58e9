//! Flappy Bim entry point
//!
//! Runs the game headless: a scripted pointer keeps starting new runs, one
//! frame per second of game time is printed as text, and progress is
//! reported through the logger.
//! Turn the autopilot on in the settings file to watch it play.

use std::path::PathBuf;

use flappy_bim::Session;
use flappy_bim::app::{self, FixedRate, Pacer, Unpaced};
use flappy_bim::assets::AssetCatalog;
use flappy_bim::consts::TICK_RATE;
use flappy_bim::platform::{InputEvent, InputSource};
use flappy_bim::renderer::TextRenderer;
use flappy_bim::settings::Settings;

/// Frames to run when the settings give no limit (one minute of game time)
const DEMO_FRAMES: u64 = 60 * TICK_RATE as u64;

/// Clicks the spot shared by the START and RETRY buttons every so often.
/// The click does nothing while a run is in progress.
struct DemoInput {
    frame: u64,
    every: u64,
}

impl InputSource for DemoInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let due = self.frame % self.every == 0;
        self.frame += 1;
        if due {
            vec![InputEvent::PointerDown { x: 200.0, y: 330.0 }]
        } else {
            Vec::new()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy Bim starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let settings = Settings::load(&path);

    let assets = AssetCatalog::resolve(&settings.asset_dir);
    if assets.missing() > 0 {
        log::info!("{} sprite(s) will be drawn as placeholders", assets.missing());
    }

    let max_frames = settings.max_frames.unwrap_or(DEMO_FRAMES);
    // An explicit frame budget means a batch run, so skip the real-time pacing
    let realtime = settings.max_frames.is_none();

    let mut session = Session::new(settings);
    let mut input = DemoInput {
        frame: 0,
        every: TICK_RATE as u64,
    };
    let mut renderer = TextRenderer::new(std::io::stdout(), assets, TICK_RATE as u64);
    let mut pacer: Box<dyn Pacer> = if realtime {
        Box::new(FixedRate::new(TICK_RATE))
    } else {
        Box::new(Unpaced)
    };

    let summary = app::run(
        &mut session,
        &mut input,
        &mut renderer,
        &mut pacer,
        Some(max_frames),
    );
    println!(
        "frames: {}  runs: {}  best: {}",
        summary.frames, summary.runs, summary.best
    );
}
