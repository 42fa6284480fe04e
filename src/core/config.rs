//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `GameConfig`: board name and extent, register and hand sizes, seed
//! - `Phase`: the coarse mode of the turn state machine
//!
//! Board extent and slot counts are fixed once a board is built from a config.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of program registers per player.
pub const REGISTER_COUNT: usize = 5;

/// Number of cards dealt into each player's hand.
pub const HAND_SIZE: usize = 8;

/// Name used when a board is built without one.
pub const DEFAULT_BOARD_NAME: &str = "defaultboard";

/// Default board width and height.
pub const DEFAULT_EXTENT: u32 = 8;

/// Game phase.
///
/// `Initialisation` only exists between board construction and the first
/// programming phase. `PlayerInteraction` is entered from `Activation` when
/// a card needs a choice and left back into `Activation` once it is made.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Initialisation,
    Programming,
    Activation,
    PlayerInteraction,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Initialisation => "INITIALISATION",
            Phase::Programming => "PROGRAMMING",
            Phase::Activation => "ACTIVATION",
            Phase::PlayerInteraction => "PLAYER_INTERACTION",
        };
        f.write_str(name)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human-readable board name.
    pub board_name: String,

    /// Board width in cells.
    pub width: u32,

    /// Board height in cells.
    pub height: u32,

    /// Program registers per player.
    pub register_count: usize,

    /// Hand slots per player.
    pub hand_size: usize,

    /// Seed for card dealing. `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_name: DEFAULT_BOARD_NAME.to_string(),
            width: DEFAULT_EXTENT,
            height: DEFAULT_EXTENT,
            register_count: REGISTER_COUNT,
            hand_size: HAND_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `width` x `height` board.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the board name.
    #[must_use]
    pub fn with_board_name(mut self, name: impl Into<String>) -> Self {
        self.board_name = name.into();
        self
    }

    /// Set the number of program registers.
    #[must_use]
    pub fn with_register_count(mut self, count: usize) -> Self {
        self.register_count = count;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Seed the card dealer for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration can build a board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.register_count == 0 {
            return Err(ConfigError::NoRegisters);
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        Ok(())
    }
}
