//! Events emitted by the Engine for external consumers
//!
//! Subscribers (the TUI runner, tests) receive these via
//! `Engine::subscribe()` after each message processing cycle.

use tabdeck_core::Location;

/// Events emitted by the Engine after processing a message
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// State changed; `revision` increases by one per committed change
    StateChanged { revision: u64 },

    /// The history moved to a new location
    LocationChanged { location: Location },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event type name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::StateChanged { .. } => "state_changed",
            EngineEvent::LocationChanged { .. } => "location_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
