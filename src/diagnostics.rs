// SPDX-License-Identifier: MPL-2.0
//! In-memory log of recent failures.
//!
//! Geolocation fallbacks, classification errors, and submission failures are
//! recorded here with their raw causes, which are otherwise hidden behind
//! the user-facing messages. The buffer is bounded; old events drop off.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Maximum retained events. Oldest events are evicted first.
const MAX_EVENTS: usize = 128;

/// The subsystem an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Geolocation,
    Classification,
    Submission,
    Dashboard,
    Media,
}

#[derive(Debug, Clone)]
pub struct FailureEvent {
    pub kind: EventKind,
    pub message: String,
    pub at: SystemTime,
}

/// Cheaply clonable handle to the shared event buffer.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsHandle {
    events: Arc<Mutex<VecDeque<FailureEvent>>>,
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure event, evicting the oldest entry when full.
    pub fn log(&self, kind: EventKind, message: impl Into<String>) {
        let event = FailureEvent {
            kind,
            message: message.into(),
            at: SystemTime::now(),
        };

        if let Ok(mut events) = self.events.lock() {
            if events.len() == MAX_EVENTS {
                events.pop_front();
            }
            events.push_back(event);
        }
    }

    /// Returns a copy of the retained events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FailureEvent> {
        self.events
            .lock()
            .map(|events| events.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_handle_is_empty() {
        let handle = DiagnosticsHandle::new();
        assert!(handle.is_empty());
        assert!(handle.snapshot().is_empty());
    }

    #[test]
    fn log_records_kind_and_message() {
        let handle = DiagnosticsHandle::new();
        handle.log(EventKind::Classification, "connection refused");

        let events = handle.snapshot();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Classification);
        assert_eq!(events[0].message, "connection refused");
    }

    #[test]
    fn buffer_is_bounded() {
        let handle = DiagnosticsHandle::new();
        for i in 0..(MAX_EVENTS + 10) {
            handle.log(EventKind::Submission, format!("failure {i}"));
        }

        let events = handle.snapshot();
        assert_eq!(events.len(), MAX_EVENTS);
        assert_eq!(events[0].message, "failure 10");
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let handle = DiagnosticsHandle::new();
        let clone = handle.clone();
        clone.log(EventKind::Geolocation, "timed out");

        assert_eq!(handle.len(), 1);
    }
}
