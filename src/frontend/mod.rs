//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait implemented by the terminal frontend.
//! It provides a unified interface for event polling, rendering, and cleanup.

pub mod events;
pub mod tui;

use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait
///
/// The Frontend trait separates rendering concerns from business logic.
/// A frontend turns native input into `FrontendEvent`s and draws whatever
/// state the core exposes.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// This method should return all pending events (keyboard, mouse, resize)
    /// converted to the frontend-agnostic `FrontendEvent` enum.
    ///
    /// # Returns
    /// - `Ok(Vec<FrontendEvent>)` - List of events (empty if no events)
    /// - `Err(...)` - If event polling failed
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Called whenever the core flags a change. The mutable reference lets the
    /// frontend record the screen geometry it used (grid cells, results arrows)
    /// so mouse input can be mapped back.
    fn render(&mut self, app: &mut dyn std::any::Any) -> Result<()>;

    /// Cleanup and shutdown the frontend
    ///
    /// This method should restore the terminal and perform any necessary
    /// cleanup before the application exits.
    fn cleanup(&mut self) -> Result<()>;
}
