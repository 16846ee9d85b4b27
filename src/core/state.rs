//! Devotion session state
//!
//! Tracks what the backend last told us: affinity counters, remaining
//! devotion points and whether the backend is reachable.

use crate::protocol::Counters;
use chrono::{DateTime, Local};

/// Devotion points available before anything is unlocked
pub const INITIAL_DEVOTION_POINTS: i32 = 55;

/// Backend reachability
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "online",
            ConnectionStatus::Disconnected => "offline",
        }
    }
}

/// Devotion session state
#[derive(Clone, Debug)]
pub struct DevotionState {
    /// Affinity counters and remaining points
    pub counters: Counters,

    /// Backend status
    pub connection: ConnectionStatus,

    /// Requests sent but not answered yet
    pub pending_requests: usize,

    /// When counters last changed
    pub last_update: Option<DateTime<Local>>,
}

impl DevotionState {
    pub fn new() -> Self {
        Self {
            counters: Counters {
                devpoints: INITIAL_DEVOTION_POINTS,
                ..Counters::default()
            },
            connection: ConnectionStatus::default(),
            pending_requests: 0,
            last_update: None,
        }
    }

    /// Replace counters with a fresh backend answer
    pub fn update_counters(&mut self, counters: Counters) {
        if counters != self.counters {
            tracing::debug!(
                "Counters: {} points left (asc {}, chs {}, eld {}, ord {}, prim {})",
                counters.devpoints,
                counters.ascendant,
                counters.chaos,
                counters.eldritch,
                counters.order,
                counters.primordial
            );
        }
        self.counters = counters;
        self.last_update = Some(Local::now());
    }

    /// Points spent so far
    pub fn spent_points(&self) -> i32 {
        INITIAL_DEVOTION_POINTS - self.counters.devpoints
    }

    pub fn request_sent(&mut self) {
        self.pending_requests += 1;
    }

    pub fn request_finished(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
    }

    pub fn is_busy(&self) -> bool {
        self.pending_requests > 0
    }

    /// "HH:MM:SS" of the last counter update
    pub fn last_update_label(&self) -> Option<String> {
        self.last_update
            .map(|time| time.format("%H:%M:%S").to_string())
    }
}

impl Default for DevotionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_points() {
        let state = DevotionState::new();
        assert_eq!(state.counters.devpoints, 55);
        assert_eq!(state.spent_points(), 0);
        assert_eq!(state.connection, ConnectionStatus::Connecting);
        assert!(state.last_update_label().is_none());
    }

    #[test]
    fn test_update_counters() {
        let mut state = DevotionState::new();
        state.update_counters(Counters {
            primordial: 1,
            devpoints: 54,
            ..Counters::default()
        });
        assert_eq!(state.spent_points(), 1);
        assert_eq!(state.counters.primordial, 1);
        assert!(state.last_update_label().is_some());
    }

    #[test]
    fn test_pending_requests_never_underflow() {
        let mut state = DevotionState::new();
        state.request_finished();
        assert!(!state.is_busy());
        state.request_sent();
        assert!(state.is_busy());
        state.request_finished();
        assert!(!state.is_busy());
    }
}
