//! Screen buttons and pointer hit-testing

use glam::Vec2;

use crate::fsm::{GamePhase, Trigger};
use crate::sim::Rect;

/// Every clickable button in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Start,
    Difficulty,
    Autopilot,
    Quit,
    Retry,
    Menu,
}

impl ButtonId {
    /// State machine trigger fired by a click
    pub fn trigger(&self) -> Trigger {
        match self {
            ButtonId::Start => Trigger::Start,
            ButtonId::Difficulty => Trigger::CycleDifficulty,
            ButtonId::Autopilot => Trigger::ToggleAutopilot,
            ButtonId::Quit => Trigger::Quit,
            ButtonId::Retry => Trigger::Retry,
            ButtonId::Menu => Trigger::ReturnToMenu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub id: ButtonId,
    pub rect: Rect,
    pub label: &'static str,
    /// Drawn in the active colour (autopilot switched on)
    pub highlighted: bool,
}

impl Button {
    fn new(id: ButtonId, label: &'static str, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, w, h),
            label,
            highlighted: false,
        }
    }

    pub fn is_hovered(&self, pointer: Option<Vec2>) -> bool {
        pointer.is_some_and(|p| self.rect.contains(p))
    }
}

/// Buttons shown on a screen; playing has none
pub fn buttons(phase: GamePhase, autopilot: bool) -> Vec<Button> {
    match phase {
        GamePhase::Menu => {
            let mut auto = Button::new(
                ButtonId::Autopilot,
                if autopilot { "AUTO: ON" } else { "AUTO: OFF" },
                100.0,
                410.0,
                200.0,
                45.0,
            );
            auto.highlighted = autopilot;
            vec![
                Button::new(ButtonId::Start, "START", 100.0, 300.0, 200.0, 45.0),
                Button::new(ButtonId::Difficulty, "DIFFICULTY", 100.0, 355.0, 200.0, 45.0),
                auto,
                Button::new(ButtonId::Quit, "QUIT", 100.0, 465.0, 200.0, 45.0),
            ]
        }
        GamePhase::Playing => Vec::new(),
        GamePhase::GameOver => vec![
            Button::new(ButtonId::Retry, "RETRY", 100.0, 320.0, 200.0, 50.0),
            Button::new(ButtonId::Menu, "MENU", 100.0, 380.0, 200.0, 50.0),
        ],
    }
}

/// Which button, if any, sits under `pos` on this screen
pub fn button_at(phase: GamePhase, autopilot: bool, pos: Vec2) -> Option<ButtonId> {
    buttons(phase, autopilot)
        .into_iter()
        .find(|b| b.rect.contains(pos))
        .map(|b| b.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_hits() {
        let at = |x, y| button_at(GamePhase::Menu, false, Vec2::new(x, y));
        assert_eq!(at(200.0, 320.0), Some(ButtonId::Start));
        assert_eq!(at(200.0, 370.0), Some(ButtonId::Difficulty));
        assert_eq!(at(200.0, 430.0), Some(ButtonId::Autopilot));
        assert_eq!(at(200.0, 480.0), Some(ButtonId::Quit));
        // Between START and DIFFICULTY
        assert_eq!(at(200.0, 350.0), None);
        assert_eq!(at(50.0, 320.0), None);
    }

    #[test]
    fn test_playing_has_no_buttons() {
        assert!(buttons(GamePhase::Playing, true).is_empty());
        assert_eq!(button_at(GamePhase::Playing, false, Vec2::new(200.0, 320.0)), None);
    }

    #[test]
    fn test_game_over_hits() {
        let at = |y| button_at(GamePhase::GameOver, false, Vec2::new(150.0, y));
        assert_eq!(at(340.0), Some(ButtonId::Retry));
        assert_eq!(at(400.0), Some(ButtonId::Menu));
        assert_eq!(at(375.0), None);
    }

    #[test]
    fn test_autopilot_label() {
        let on = buttons(GamePhase::Menu, true);
        let auto = on.iter().find(|b| b.id == ButtonId::Autopilot).unwrap();
        assert_eq!(auto.label, "AUTO: ON");
        assert!(auto.highlighted);
        assert_eq!(ButtonId::Menu.trigger(), Trigger::ReturnToMenu);
    }
}
