//! Game rules: how commands move robots.
//!
//! - `MovementResolver`: forward moves, push chains, rotations
//! - `CommandExecutor`: maps a command onto those primitives
//!
//! Neither touches the turn state; the controller decides when they run.

pub mod movement;
pub mod executor;

pub use executor::CommandExecutor;
pub use movement::MovementResolver;
