//! Programmable commands.
//!
//! A command is what a card does when its register is activated. Most
//! commands act immediately; an interactive command carries a list of
//! options and parks the game until the owning player picks one.

use serde::{Deserialize, Serialize};

/// A robot command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move one cell ahead.
    Forward,
    /// Rotate clockwise.
    Right,
    /// Rotate counter-clockwise.
    Left,
    /// Move ahead twice.
    FastForward,
    /// Rotate 180 degrees.
    UTurn,
    /// Player chooses `Left` or `Right` when the register activates.
    LeftOrRight,
}

impl Command {
    /// Every command, in dealing order.
    pub const ALL: [Command; 6] = [
        Command::Forward,
        Command::Right,
        Command::Left,
        Command::FastForward,
        Command::UTurn,
        Command::LeftOrRight,
    ];

    /// Label printed on the card.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Command::Forward => "Fwd",
            Command::Right => "Turn Right",
            Command::Left => "Turn Left",
            Command::FastForward => "Fast Fwd",
            Command::UTurn => "U-Turn",
            Command::LeftOrRight => "Left OR Right",
        }
    }

    /// Choices offered to the player. Empty for non-interactive commands.
    #[must_use]
    pub const fn options(self) -> &'static [Command] {
        match self {
            Command::LeftOrRight => &[Command::Left, Command::Right],
            _ => &[],
        }
    }

    /// Does activating this command need a player decision first?
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !self.options().is_empty()
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
