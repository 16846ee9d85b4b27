//! Action vocabulary for the devotion board and the results panel.
//!
//! Translates raw `KeyEvent`s into the textual form used by the keybinds
//! table, so `config.toml` can bind any key to a semantic `KeyAction`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible user actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    // Cursor movement on the board
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    NextStar,
    PreviousStar,

    // Star interaction
    Activate, // Unlock (standard) or blink-unlock
    Lock,     // Lock (standard mode only)

    // Modes
    StandardMode,
    BlinkMode,
    Reset,

    // Results panel
    ToggleResults,
    NextColumn,
    PreviousColumn,
    CopyResults,
    Close,

    Quit,
}

/// Convert KeyEvent to string representation for matching against keybinds
pub fn key_event_to_string(key: KeyEvent) -> String {
    let mut parts = Vec::new();

    // Add modifiers
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) || key.code == KeyCode::BackTab {
        parts.push("Shift");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => {
            // Shifted characters already carry their case or symbol
            parts.retain(|p| *p != "Shift");
            c.to_string()
        }
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return String::new(), // Unrecognized key
    };

    parts.push(&key_str);
    parts.join("+")
}

/// Normalize a keybind string from config (modifier order and aliases)
pub fn normalize_keybind(s: &str) -> String {
    if s.trim() == "+" {
        return "+".to_string();
    }

    let mut modifiers = Vec::new();
    let mut key = "";

    for part in s.split('+') {
        match part.trim() {
            "Ctrl" | "Control" | "ctrl" => modifiers.push("Ctrl"),
            "Shift" | "shift" => modifiers.push("Shift"),
            "Alt" | "alt" => modifiers.push("Alt"),
            k => key = k,
        }
    }

    // Same order as key_event_to_string
    let rank = |m: &&str| match *m {
        "Ctrl" => 0,
        "Shift" => 1,
        _ => 2,
    };
    modifiers.sort_by_key(rank);
    modifiers.dedup();
    modifiers.push(key);
    modifiers.join("+")
}

/// Build the lookup table used at runtime from the configured keybinds
pub fn build_keybind_map(keybinds: &HashMap<String, KeyAction>) -> HashMap<String, KeyAction> {
    keybinds
        .iter()
        .map(|(combo, action)| (normalize_keybind(combo), *action))
        .collect()
}
