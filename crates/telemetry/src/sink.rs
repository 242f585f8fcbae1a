//! Application-state dispatch seam
//!
//! The embed component does not know what the surrounding application does
//! with events; it only dispatches them through an [`EventSink`]. Dispatch
//! is synchronous and fire-and-forget.

use crate::event::AppEvent;
use parking_lot::Mutex;

/// Sink for dispatched application events
pub trait EventSink: Send + Sync {
    /// Dispatch an event into application state. Must not block or fail.
    fn dispatch(&self, event: AppEvent);
}

/// An [`EventSink`] that retains dispatched events in memory.
///
/// Used by the application shell as a staging buffer and by tests to assert
/// on dispatch order and content.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<AppEvent>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all dispatched events, in dispatch order
    pub fn events(&self) -> Vec<AppEvent> {
        self.events.lock().clone()
    }

    /// Number of dispatched events
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been dispatched
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drop all retained events
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for MemorySink {
    fn dispatch(&self, event: AppEvent) {
        self.events.lock().push(event);
    }
}
