//! Session: state that outlives a single run
//!
//! Owns the active screen, the current world, the selected difficulty, the
//! autopilot switch and the high score. Input events become state machine
//! triggers here, and transition effects are applied here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::fsm::{self, Effect, GamePhase, Transition, Trigger};
use crate::highscores::HighScore;
use crate::platform::{InputEvent, Key};
use crate::settings::Settings;
use crate::sim::{Difficulty, Rules, TickInput, TickOutcome, World, tick};
use crate::ui;

#[derive(Debug, Clone)]
pub struct Session {
    phase: GamePhase,
    world: World,
    difficulty: Difficulty,
    autopilot: bool,
    high_score: HighScore,
    settings: Settings,
    /// Draws one seed per run
    seeder: Pcg32,
    pending_jump: bool,
    pointer: Option<Vec2>,
    quit: bool,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Session seed: {seed}");
        Self {
            phase: GamePhase::Menu,
            world: World::new(seed),
            difficulty: settings.difficulty,
            autopilot: settings.autopilot,
            high_score: HighScore::new(),
            seeder: Pcg32::seed_from_u64(seed),
            settings,
            pending_jump: false,
            pointer: None,
            quit: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn high_score(&self) -> &HighScore {
        &self.high_score
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Last known pointer position, for button hover
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn rules(&self) -> Rules {
        self.settings.rules(self.difficulty)
    }

    /// Trigger an event maps to on the current screen
    pub fn trigger_for(&self, event: &InputEvent) -> Option<Trigger> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                ui::button_at(self.phase, self.autopilot, Vec2::new(x, y)).map(|b| b.trigger())
            }
            InputEvent::KeyDown(Key::Space) => Some(Trigger::Jump),
            _ => None,
        }
    }

    /// Feed one input event
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Quit => {
                log::info!("Quit requested");
                self.quit = true;
                return;
            }
            InputEvent::PointerDown { x, y } | InputEvent::PointerMoved { x, y } => {
                self.pointer = Some(Vec2::new(x, y));
            }
            InputEvent::KeyDown(_) => {}
        }

        if let Some(trigger) = self.trigger_for(event) {
            self.fire(trigger);
        }
    }

    /// Run a trigger through the state machine and apply its effect.
    ///
    /// Returns `None` when the trigger is not valid on the current screen.
    pub fn fire(&mut self, trigger: Trigger) -> Option<Transition> {
        let Some(transition) = fsm::dispatch(self.phase, trigger) else {
            log::debug!("Ignoring {:?} in {:?}", trigger, self.phase);
            return None;
        };

        match transition.effect {
            Effect::ResetWorld => self.reset_world(),
            Effect::CycleDifficulty => {
                self.difficulty = self.difficulty.next();
                log::info!("Difficulty: {}", self.difficulty.as_str());
            }
            Effect::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", if self.autopilot { "on" } else { "off" });
            }
            Effect::Exit => {
                log::info!("Quit requested");
                self.quit = true;
            }
            Effect::Jump => self.pending_jump = true,
            Effect::RecordHighScore => {
                log::info!(
                    "Game over: {} pipes, {} tokens",
                    self.world.pipe_score,
                    self.world.token_score
                );
                self.high_score.record(self.world.pipe_score, self.difficulty);
            }
            Effect::Noop => {}
        }

        if transition.from != transition.to {
            log::debug!("{:?} -> {:?}", transition.from, transition.to);
        }
        self.phase = transition.to;
        Some(transition)
    }

    fn reset_world(&mut self) {
        let seed = self.seeder.random();
        self.world = World::new(seed);
        self.pending_jump = false;
        log::info!(
            "Run started on {} (seed {seed}, autopilot {})",
            self.difficulty.as_str(),
            self.autopilot
        );
    }

    /// Advance one frame. Only the playing screen simulates.
    pub fn update(&mut self) -> Option<TickOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }

        let input = TickInput {
            jump: std::mem::take(&mut self.pending_jump),
            autopilot: self.autopilot,
        };
        let rules = self.rules();
        let outcome = tick(&mut self.world, &rules, &input);

        if outcome.pipes_passed > 0 {
            log::debug!("Score: {}", self.world.pipe_score);
        }
        if outcome.crashed {
            self.fire(Trigger::Crash);
        }
        Some(outcome)
    }
}
