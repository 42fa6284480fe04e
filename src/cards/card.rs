//! Command cards and the slots that hold them.
//!
//! A `CardSlot` holds at most one card. Cards move between slots by
//! `take`/`replace`, so a card instance lives in exactly one place.

use serde::{Deserialize, Serialize};

use super::command::Command;

/// A dealt card. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandCard {
    command: Command,
}

impl CommandCard {
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self { command }
    }

    #[must_use]
    pub const fn command(&self) -> Command {
        self.command
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.command.display_name()
    }
}

/// A card position on a player's mat: a register or a hand slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlot {
    card: Option<CommandCard>,
    visible: bool,
}

impl Default for CardSlot {
    fn default() -> Self {
        Self {
            card: None,
            visible: true,
        }
    }
}

impl CardSlot {
    #[must_use]
    pub fn card(&self) -> Option<&CommandCard> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Remove and return the card, leaving the slot empty.
    pub(crate) fn take(&mut self) -> Option<CommandCard> {
        self.card.take()
    }

    /// Store `card`, returning whatever the slot held before.
    pub(crate) fn replace(&mut self, card: Option<CommandCard>) -> Option<CommandCard> {
        std::mem::replace(&mut self.card, card)
    }

    /// Returns true if visibility changed.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

/// Names one slot of a player: `Program(register)` or `Hand(index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotRef {
    Program(usize),
    Hand(usize),
}
