//! Widget state structs (rendering-agnostic)
//!
//! This module contains state-only structures for the results panel.
//! These structs hold data and provide methods for state manipulation,
//! but contain no rendering logic. The TUI frontend renders them.

pub mod carousel;
pub mod results_panel;

pub use carousel::{ColumnCarousel, ColumnSlot, PAGED_COLUMNS};
pub use results_panel::{ResultsPanelState, LINES_PER_COLUMN};
