//! TUI Frontend (ratatui-based)
//!
//! This module implements the Frontend trait using ratatui for terminal rendering.
//! It wraps crossterm for event handling and terminal management.

pub mod app;
pub mod colors;
pub mod help_line;
pub mod results_overlay;
pub mod star_grid;
pub mod status_bar;
pub mod tooltip_popup;

pub use app::TuiFrontend;
