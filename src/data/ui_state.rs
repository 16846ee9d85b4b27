//! UI State - Mode, cursor and interaction state
//!
//! This module contains UI state that is independent of rendering.
//! The TUI frontend reads from these structures and records the screen
//! geometry it used so mouse input can be mapped back to stars.

use crate::catalog::StarIndex;
use serde::{Deserialize, Serialize};

/// How clicks on stars are interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// No mode selected yet, clicks do nothing
    #[default]
    Idle,
    /// Unlock/lock one star at a time
    Standard,
    /// Unlock a star together with everything needed to reach it
    Blink,
}

impl InteractionMode {
    pub fn label(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "Idle",
            InteractionMode::Standard => "Standard",
            InteractionMode::Blink => "Blink",
        }
    }
}

/// Rectangle in terminal cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ScreenRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// Where the star grid was last drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    /// Inner area of the board (without borders)
    pub area: ScreenRect,
    /// Terminal columns per grid column
    pub cell_width: u16,
}

impl GridGeometry {
    /// Screen position of a grid cell
    pub fn screen_pos(&self, col: u16, row: u16) -> Option<(u16, u16)> {
        let x = self.area.x.checked_add(col.checked_mul(self.cell_width)?)?;
        let y = self.area.y.checked_add(row)?;
        self.area.contains(x, y).then_some((x, y))
    }

    /// Grid cell under a screen position
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        if !self.area.contains(x, y) || self.cell_width == 0 {
            return None;
        }
        let dx = x - self.area.x;
        // Only the glyph column of a cell counts as a hit
        if dx % self.cell_width != 0 {
            return None;
        }
        Some((dx / self.cell_width, y - self.area.y))
    }
}

/// Clickable arrows of the results panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResultsArrows {
    pub previous: Option<ScreenRect>,
    pub next: Option<ScreenRect>,
}

/// Application UI state
#[derive(Clone, Debug)]
pub struct UiState {
    /// Current interaction mode
    pub mode: InteractionMode,

    /// Star under the keyboard cursor or mouse pointer
    pub cursor: Option<StarIndex>,

    /// Status bar text
    pub status_text: String,

    /// Whether the hover tooltip is drawn
    pub show_tooltips: bool,

    /// Board geometry from the last frame (for mouse hit tests)
    pub grid: Option<GridGeometry>,

    /// Results panel arrows from the last frame
    pub results_arrows: ResultsArrows,
}

impl UiState {
    pub fn new(mode: InteractionMode, show_tooltips: bool) -> Self {
        Self {
            mode,
            cursor: None,
            status_text: String::from("Ready"),
            show_tooltips,
            grid: None,
            results_arrows: ResultsArrows::default(),
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(InteractionMode::Idle, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = ScreenRect::new(2, 3, 4, 2);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 4));
        assert!(!rect.contains(6, 4));
        assert!(!rect.contains(2, 5));
    }

    #[test]
    fn test_grid_round_trip() {
        let grid = GridGeometry {
            area: ScreenRect::new(1, 2, 40, 10),
            cell_width: 2,
        };
        assert_eq!(grid.screen_pos(3, 4), Some((7, 6)));
        assert_eq!(grid.cell_at(7, 6), Some((3, 4)));
        assert_eq!(grid.cell_at(8, 6), None); // spacer column
        assert_eq!(grid.screen_pos(30, 0), None); // clipped
        assert_eq!(grid.cell_at(0, 0), None);
    }

    #[test]
    fn test_mode_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: InteractionMode,
        }
        let w: Wrapper = toml::from_str("mode = \"blink\"").unwrap();
        assert_eq!(w.mode, InteractionMode::Blink);
        assert_eq!(InteractionMode::default().label(), "Idle");
    }
}
