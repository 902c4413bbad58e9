//! Game State Machine
//!
//! Menu, playing and game-over screens. Every legal move is one row of
//! [`dispatch`]; anything else is ignored.

use serde::{Deserialize, Serialize};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Things that can ask the state machine to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    CycleDifficulty,
    ToggleAutopilot,
    Quit,
    Jump,
    Crash,
    Retry,
    ReturnToMenu,
}

/// Side effect the owner of the state must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Throw the world away and start a fresh run
    ResetWorld,
    CycleDifficulty,
    ToggleAutopilot,
    /// Stop the frame loop
    Exit,
    /// Apply a jump impulse on the next tick
    Jump,
    /// Run ended: fold the score into the high score
    RecordHighScore,
    /// Screen change only
    Noop,
}

/// Outcome of a legal trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: GamePhase,
    pub to: GamePhase,
    pub effect: Effect,
}

/// The transition table
pub fn dispatch(phase: GamePhase, trigger: Trigger) -> Option<Transition> {
    use Effect as E;
    use GamePhase::*;
    use Trigger as T;

    let (to, effect) = match (phase, trigger) {
        (Menu, T::Start) => (Playing, E::ResetWorld),
        (Menu, T::CycleDifficulty) => (Menu, E::CycleDifficulty),
        (Menu, T::ToggleAutopilot) => (Menu, E::ToggleAutopilot),
        (Menu, T::Quit) => (Menu, E::Exit),
        (Playing, T::Jump) => (Playing, E::Jump),
        (Playing, T::Crash) => (GameOver, E::RecordHighScore),
        (GameOver, T::Retry) => (Playing, E::ResetWorld),
        (GameOver, T::ReturnToMenu) => (Menu, E::Noop),
        _ => return None,
    };

    Some(Transition {
        from: phase,
        to,
        effect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGERS: [Trigger; 8] = [
        Trigger::Start,
        Trigger::CycleDifficulty,
        Trigger::ToggleAutopilot,
        Trigger::Quit,
        Trigger::Jump,
        Trigger::Crash,
        Trigger::Retry,
        Trigger::ReturnToMenu,
    ];

    #[test]
    fn test_starts_in_menu() {
        assert_eq!(GamePhase::default(), GamePhase::Menu);
    }

    #[test]
    fn test_full_cycle() {
        let t = dispatch(GamePhase::Menu, Trigger::Start).unwrap();
        assert_eq!((t.to, t.effect), (GamePhase::Playing, Effect::ResetWorld));

        let t = dispatch(t.to, Trigger::Crash).unwrap();
        assert_eq!((t.to, t.effect), (GamePhase::GameOver, Effect::RecordHighScore));

        let t = dispatch(t.to, Trigger::Retry).unwrap();
        assert_eq!((t.to, t.effect), (GamePhase::Playing, Effect::ResetWorld));

        let t = dispatch(GamePhase::GameOver, Trigger::ReturnToMenu).unwrap();
        assert_eq!((t.to, t.effect), (GamePhase::Menu, Effect::Noop));
    }

    #[test]
    fn test_out_of_state_triggers_ignored() {
        assert_eq!(dispatch(GamePhase::Menu, Trigger::Jump), None);
        assert_eq!(dispatch(GamePhase::Menu, Trigger::Retry), None);
        assert_eq!(dispatch(GamePhase::Playing, Trigger::Start), None);
        assert_eq!(dispatch(GamePhase::Playing, Trigger::CycleDifficulty), None);
        assert_eq!(dispatch(GamePhase::GameOver, Trigger::Jump), None);
        assert_eq!(dispatch(GamePhase::GameOver, Trigger::Crash), None);
    }

    #[test]
    fn test_reset_exactly_on_entering_playing() {
        for phase in [GamePhase::Menu, GamePhase::Playing, GamePhase::GameOver] {
            for trigger in TRIGGERS {
                if let Some(t) = dispatch(phase, trigger) {
                    let enters_playing = t.to == GamePhase::Playing && phase != GamePhase::Playing;
                    assert_eq!(enters_playing, t.effect == Effect::ResetWorld);
                    if enters_playing {
                        assert!(matches!(trigger, Trigger::Start | Trigger::Retry));
                    }
                }
            }
        }
    }
}
