//! Board change events.
//!
//! One event per externally meaningful mutation. A presentation layer can
//! rebuild everything it displays from this stream. Blocked moves produce
//! no event because nothing changed.

use serde::{Deserialize, Serialize};

use crate::cards::SlotRef;
use crate::core::{Heading, Phase, PlayerId, Position};

/// A committed change to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A player joined the turn order.
    PlayerAdded { player: PlayerId },

    /// A player was put on the board or relocated outside of movement.
    PlayerPlaced { player: PlayerId, position: Position },

    /// A player moved by command or by being pushed.
    PlayerMoved {
        player: PlayerId,
        from: Position,
        to: Position,
    },

    /// A player rotated.
    HeadingChanged { player: PlayerId, heading: Heading },

    PhaseChanged { phase: Phase },

    CurrentPlayerChanged { player: PlayerId },

    /// The register index being activated changed.
    StepChanged { step: usize },

    StepModeChanged { step_mode: bool },

    /// The move counter was written.
    CounterChanged { counter: u32 },

    /// A slot's card or visibility changed.
    SlotChanged { player: PlayerId, slot: SlotRef },

    WallAdded { position: Position, heading: Heading },

    GameIdAssigned { game_id: u64 },
}

impl BoardEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            BoardEvent::PlayerAdded { player }
            | BoardEvent::PlayerPlaced { player, .. }
            | BoardEvent::PlayerMoved { player, .. }
            | BoardEvent::HeadingChanged { player, .. }
            | BoardEvent::CurrentPlayerChanged { player }
            | BoardEvent::SlotChanged { player, .. } => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_accessor() {
        let moved = BoardEvent::PlayerMoved {
            player: PlayerId::new(2),
            from: Position::new(0, 0),
            to: Position::new(1, 0),
        };
        assert_eq!(moved.player(), Some(PlayerId::new(2)));
        assert_eq!(BoardEvent::StepChanged { step: 1 }.player(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = BoardEvent::SlotChanged {
            player: PlayerId::new(0),
            slot: SlotRef::Program(3),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: BoardEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
