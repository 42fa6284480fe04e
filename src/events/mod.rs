//! Change notification.
//!
//! The board queues a `BoardEvent` for every committed mutation; the
//! controller delivers the queue to an injected `EventSink` at the end of
//! each operation. Nothing on the board changes silently.

pub mod event;
pub mod sink;

pub use event::BoardEvent;
pub use sink::{EventLog, EventSink, NullSink};
