//! Game controller: the programming/activation state machine.
//!
//! `GameController` owns the board, an injected `CardDealer` and an
//! injected `EventSink`, and is the only thing that moves the game from
//! one phase to the next.

pub mod controller;

pub use controller::{GameController, StepOutcome};
