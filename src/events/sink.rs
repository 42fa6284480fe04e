//! Event sinks.
//!
//! The controller hands every committed `BoardEvent` to an `EventSink`
//! in mutation order. Closures work as sinks directly.

use super::event::BoardEvent;

/// Receives board change notifications.
pub trait EventSink {
    fn notify(&mut self, event: &BoardEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &BoardEvent) {}
}

/// Records every event for later inspection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<BoardEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &BoardEvent) {
        self.events.push(event.clone());
    }
}

impl<F> EventSink for F
where
    F: FnMut(&BoardEvent),
{
    fn notify(&mut self, event: &BoardEvent) {
        self(event)
    }
}
