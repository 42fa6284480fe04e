//! Grid model: cells, walls, players and the board that owns them.
//!
//! - `Cell`: coordinates, directional walls, occupant lookup
//! - `Board`: wrap-around grid, turn order, phase/step bookkeeping
//! - `BoardLayout`: static wall layout consumed at construction

pub mod cell;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use grid::Board;
pub use layout::{BoardLayout, WallSpec};
