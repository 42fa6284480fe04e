//! Core engine types: headings, players, configuration, errors, RNG.
//!
//! These are the leaf types every other module builds on.

pub mod heading;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use heading::{Heading, Position};
pub use player::{Player, PlayerId, Slots};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, Phase, DEFAULT_BOARD_NAME, DEFAULT_EXTENT, HAND_SIZE, REGISTER_COUNT};
pub use error::{ConfigError, EngineError, MoveError};
