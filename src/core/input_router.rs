//! Input routing for the board and the results panel
//!
//! Resolves a key event to a KeyAction using the keybind table, then
//! reinterprets it based on which surface has focus:
//! - Board: actions pass through unchanged
//! - Results panel open: horizontal movement pages the carousel and the
//!   board-only actions are swallowed

use crate::core::actions::{key_event_to_string, KeyAction};
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Which surface receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Board,
    Results,
}

/// Route a key event to an action for the given context
pub fn route_input(
    key: KeyEvent,
    context: InputContext,
    keybinds: &HashMap<String, KeyAction>,
) -> Option<KeyAction> {
    let combo = key_event_to_string(key);
    if combo.is_empty() {
        return None;
    }
    let action = *keybinds.get(&combo)?;
    route_action(action, context)
}

/// Reinterpret an action for the focused surface
pub fn route_action(action: KeyAction, context: InputContext) -> Option<KeyAction> {
    match context {
        InputContext::Board => Some(action),
        InputContext::Results => match action {
            KeyAction::MoveRight | KeyAction::NextStar => Some(KeyAction::NextColumn),
            KeyAction::MoveLeft | KeyAction::PreviousStar => Some(KeyAction::PreviousColumn),
            KeyAction::ToggleResults | KeyAction::Close => Some(KeyAction::Close),
            KeyAction::NextColumn
            | KeyAction::PreviousColumn
            | KeyAction::CopyResults
            | KeyAction::Reset
            | KeyAction::Quit => Some(action),
            // Board-only while the panel covers it
            KeyAction::MoveUp
            | KeyAction::MoveDown
            | KeyAction::Activate
            | KeyAction::Lock
            | KeyAction::StandardMode
            | KeyAction::BlinkMode => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::build_keybind_map;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn keybinds() -> HashMap<String, KeyAction> {
        build_keybind_map(&crate::config::default_keybinds())
    }

    #[test]
    fn test_board_passthrough() {
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            route_input(key, InputContext::Board, &keybinds()),
            Some(KeyAction::MoveRight)
        );
    }

    #[test]
    fn test_results_arrows_page() {
        let binds = keybinds();
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            route_input(right, InputContext::Results, &binds),
            Some(KeyAction::NextColumn)
        );
        assert_eq!(
            route_input(left, InputContext::Results, &binds),
            Some(KeyAction::PreviousColumn)
        );
    }

    #[test]
    fn test_results_swallow_board_actions() {
        assert_eq!(route_action(KeyAction::Activate, InputContext::Results), None);
        assert_eq!(route_action(KeyAction::MoveUp, InputContext::Results), None);
        assert_eq!(
            route_action(KeyAction::ToggleResults, InputContext::Results),
            Some(KeyAction::Close)
        );
        assert_eq!(
            route_action(KeyAction::Quit, InputContext::Results),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_unbound_key() {
        let key = KeyEvent::new(KeyCode::F(12), KeyModifiers::NONE);
        assert_eq!(route_input(key, InputContext::Board, &keybinds()), None);
    }
}
