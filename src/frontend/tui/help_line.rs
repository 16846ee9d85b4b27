//! One-line key hint built from the configured keybinds.

use crate::core::actions::KeyAction;
use crate::core::input_router::InputContext;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::collections::HashMap;

const BOARD_HINTS: [(KeyAction, &str); 7] = [
    (KeyAction::StandardMode, "standard"),
    (KeyAction::BlinkMode, "blink"),
    (KeyAction::Activate, "unlock"),
    (KeyAction::Lock, "lock"),
    (KeyAction::Reset, "reset"),
    (KeyAction::ToggleResults, "results"),
    (KeyAction::Quit, "quit"),
];

const RESULTS_HINTS: [(KeyAction, &str); 4] = [
    (KeyAction::PreviousColumn, "prev"),
    (KeyAction::NextColumn, "next"),
    (KeyAction::CopyResults, "copy"),
    (KeyAction::Close, "close"),
];

/// Shortest key bound to `action` (ties broken alphabetically)
pub fn key_for(keybinds: &HashMap<String, KeyAction>, action: KeyAction) -> Option<&str> {
    keybinds
        .iter()
        .filter(|(_, bound)| **bound == action)
        .map(|(key, _)| key.as_str())
        .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
}

pub struct HelpLine<'a> {
    keybinds: &'a HashMap<String, KeyAction>,
    context: InputContext,
}

impl<'a> HelpLine<'a> {
    pub fn new(keybinds: &'a HashMap<String, KeyAction>, context: InputContext) -> Self {
        Self { keybinds, context }
    }

    fn hints(&self) -> Vec<(&'a str, &'static str)> {
        let hints: &[(KeyAction, &str)] = match self.context {
            InputContext::Board => &BOARD_HINTS,
            InputContext::Results => &RESULTS_HINTS,
        };
        hints
            .iter()
            .filter_map(|(action, label)| key_for(self.keybinds, *action).map(|key| (key, *label)))
            .collect()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        for (key, label) in self.hints() {
            spans.push(Span::styled(key.to_string(), key_style));
            spans.push(Span::styled(
                format!(" {}  ", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::build_keybind_map;

    #[test]
    fn test_key_for_prefers_short_keys() {
        let keybinds = build_keybind_map(&crate::config::default_keybinds());
        assert_eq!(key_for(&keybinds, KeyAction::Quit), Some("q"));
        assert_eq!(key_for(&keybinds, KeyAction::Lock), Some("x"));
        assert_eq!(key_for(&keybinds, KeyAction::Activate), Some("Enter"));
    }

    #[test]
    fn test_unbound_actions_are_skipped() {
        let mut keybinds = HashMap::new();
        keybinds.insert("q".to_string(), KeyAction::Quit);
        let help = HelpLine::new(&keybinds, InputContext::Board);
        assert_eq!(help.hints(), vec![("q", "quit")]);
    }
}
