//! Core business logic layer
//!
//! This module contains the action vocabulary, input routing, session state
//! and the request/answer bookkeeping in `AppCore`.
//! NO imports from frontend/ or rendering code.
//! Core updates data structures in the data layer, frontends read and render.

pub mod actions;
pub mod app_core;
pub mod input_router;
pub mod state;

pub use app_core::AppCore;
pub use state::{ConnectionStatus, DevotionState};
