//! Port for structured transcript logging.
//!
//! Defines the [`ConversationLogger`] trait for recording game events
//! (delivered messages, decisions, committed deaths, results) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! game transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured game event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The timestamp is added by the logger.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "message", "decision", "deaths").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging game events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible; logging failures are
/// ignored so they never abort a game.
pub trait ConversationLogger: Send + Sync {
    /// Record a game event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
