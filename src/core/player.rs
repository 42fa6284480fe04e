//! Player identification and per-player robot state.
//!
//! ## PlayerId
//!
//! Index of a player in the board's turn order. Ids are handed out by
//! `Board::add_player` in insertion order and never reused, so
//! `PlayerId(0)` is always the first player to act in a register.
//!
//! ## Player
//!
//! A robot: name and color, its cell (none until placed), its heading,
//! and two fixed-length rows of card slots (program registers and hand).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::heading::{Heading, Position};
use crate::cards::{CardSlot, SlotRef};

/// Player identifier, 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Slot storage. Eight inline slots covers the default hand size.
pub type Slots = SmallVec<[CardSlot; 8]>;

/// A robot on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: String,
    position: Option<Position>,
    heading: Heading,
    program: Slots,
    hand: Slots,
}

impl Player {
    /// Create an unplaced player facing south with empty, visible slots.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        color: impl Into<String>,
        register_count: usize,
        hand_size: usize,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            position: None,
            heading: Heading::South,
            program: (0..register_count).map(|_| CardSlot::default()).collect(),
            hand: (0..hand_size).map(|_| CardSlot::default()).collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Current cell, `None` before the player is placed.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Program register `index`.
    #[must_use]
    pub fn program_slot(&self, index: usize) -> Option<&CardSlot> {
        self.program.get(index)
    }

    /// Hand slot `index`.
    #[must_use]
    pub fn hand_slot(&self, index: usize) -> Option<&CardSlot> {
        self.hand.get(index)
    }

    #[must_use]
    pub fn program(&self) -> &[CardSlot] {
        &self.program
    }

    #[must_use]
    pub fn hand(&self) -> &[CardSlot] {
        &self.hand
    }

    /// Resolve a slot reference to the slot it names.
    #[must_use]
    pub fn slot(&self, slot: SlotRef) -> Option<&CardSlot> {
        match slot {
            SlotRef::Program(i) => self.program.get(i),
            SlotRef::Hand(i) => self.hand.get(i),
        }
    }

    // Mutation is restricted to the board so every change is observed.

    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    pub(crate) fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub(crate) fn slot_mut(&mut self, slot: SlotRef) -> Option<&mut CardSlot> {
        match slot {
            SlotRef::Program(i) => self.program.get_mut(i),
            SlotRef::Hand(i) => self.hand.get_mut(i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Command, CommandCard};

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_new_player_slots() {
        let player = Player::new(PlayerId::new(0), "Alice", "red", 5, 8);

        assert_eq!(player.program().len(), 5);
        assert_eq!(player.hand().len(), 8);
        assert!(player.program().iter().all(|s| s.card().is_none() && s.is_visible()));
        assert!(player.position().is_none());
        assert_eq!(player.heading(), Heading::South);
    }

    #[test]
    fn test_slot_lookup() {
        let mut player = Player::new(PlayerId::new(1), "Bob", "blue", 5, 8);
        if let Some(slot) = player.slot_mut(SlotRef::Hand(3)) {
            slot.replace(Some(CommandCard::new(Command::Left)));
        }

        assert_eq!(
            player.slot(SlotRef::Hand(3)).and_then(|s| s.card()).map(|c| c.command()),
            Some(Command::Left)
        );
        assert!(player.slot(SlotRef::Program(5)).is_none());
        assert!(player.slot(SlotRef::Hand(8)).is_none());
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(2), "Carol", "green", 5, 8);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
