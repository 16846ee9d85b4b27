//! Data layer - Pure state without UI coupling
//!
//! This module contains the star board, tooltip content and UI state as pure
//! data structures. NO imports from frontend/ or any rendering code.
//! The TUI frontend reads from these structures to render.

pub mod star_board;
pub mod tooltip;
pub mod ui_state;

pub use star_board::*;
pub use tooltip::*;
pub use ui_state::*;
