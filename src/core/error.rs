//! Error types.
//!
//! - `MoveError`: an expected, recoverable failure of a push chain. The
//!   movement resolver consumes it; it never reaches the state machine.
//! - `EngineError`: an operation the engine refused. Contract breaches by
//!   the driving code (stepping outside activation, no current player)
//!   land here too, with the board left untouched.
//! - `ConfigError`: a configuration that cannot build a board.

use thiserror::Error;

use super::config::Phase;
use super::heading::{Heading, Position};
use super::player::PlayerId;
use crate::cards::{Command, SlotRef};

/// A push chain could not be completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{player} cannot push out of {position} heading {heading}")]
    Impossible {
        player: PlayerId,
        position: Position,
        heading: Heading,
    },
}

/// Invalid game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one cell, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },

    #[error("players need at least one program register")]
    NoRegisters,

    #[error("players need at least one hand slot")]
    EmptyHand,
}

/// An operation the engine rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("operation requires phase {expected}, board is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("no current player")]
    NoCurrentPlayer,

    #[error("register {register} out of range (0..{count})")]
    RegisterOutOfRange { register: usize, count: usize },

    #[error("game id {current} already set, cannot assign {requested}")]
    GameIdAlreadySet { current: u64, requested: u64 },

    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: u32, y: u32 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("board cannot hold more than 256 players")]
    TooManyPlayers,

    #[error("{player} has no slot {slot:?}")]
    SlotOutOfRange { player: PlayerId, slot: SlotRef },

    #[error("current register holds no interactive card")]
    NotInteractive,

    #[error("{option} is not an option of {command}")]
    InvalidOption { command: Command, option: Command },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
