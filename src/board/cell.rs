//! Board cells.
//!
//! Walls are directional markers on a single cell: a `West` wall on (1, 5)
//! sits on that cell's west edge. The neighbouring cell's east edge is a
//! separate marker, so crossing an edge checks both cells.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Heading, PlayerId, Position};

/// One square of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    walls: SmallVec<[Heading; 4]>,
    occupant: Option<PlayerId>,
}

impl Cell {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            walls: SmallVec::new(),
            occupant: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn walls(&self) -> &[Heading] {
        &self.walls
    }

    #[must_use]
    pub fn has_wall(&self, heading: Heading) -> bool {
        self.walls.contains(&heading)
    }

    /// Player standing here. A lookup into the board's player list.
    #[must_use]
    pub fn occupant(&self) -> Option<PlayerId> {
        self.occupant
    }

    /// Returns false if the wall was already present.
    pub(crate) fn add_wall(&mut self, heading: Heading) -> bool {
        if self.has_wall(heading) {
            return false;
        }
        self.walls.push(heading);
        true
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PlayerId>) {
        self.occupant = occupant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_are_a_set() {
        let mut cell = Cell::new(Position::new(1, 5));
        assert!(cell.add_wall(Heading::West));
        assert!(!cell.add_wall(Heading::West));
        assert!(cell.add_wall(Heading::North));

        assert_eq!(cell.walls().len(), 2);
        assert!(cell.has_wall(Heading::West));
        assert!(!cell.has_wall(Heading::East));
    }

    #[test]
    fn test_occupant() {
        let mut cell = Cell::new(Position::new(0, 0));
        assert_eq!(cell.occupant(), None);

        cell.set_occupant(Some(PlayerId::new(3)));
        assert_eq!(cell.occupant(), Some(PlayerId::new(3)));
    }
}
