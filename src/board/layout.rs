//! Board layouts.
//!
//! A layout is the static part of a board: name, extent and walls. Loading
//! and saving layouts is left to the caller; the engine only consumes them.

use serde::{Deserialize, Serialize};

use crate::core::{Heading, Position, DEFAULT_BOARD_NAME, DEFAULT_EXTENT};

/// A wall on one edge of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallSpec {
    pub x: u32,
    pub y: u32,
    pub heading: Heading,
}

impl WallSpec {
    #[must_use]
    pub const fn new(x: u32, y: u32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Static board description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub walls: Vec<WallSpec>,
}

impl BoardLayout {
    /// A wall-free layout.
    pub fn empty(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            walls: Vec::new(),
        }
    }

    /// Add a wall.
    #[must_use]
    pub fn with_wall(mut self, x: u32, y: u32, heading: Heading) -> Self {
        self.walls.push(WallSpec::new(x, y, heading));
        self
    }

    /// The stock 8x8 board.
    pub fn standard() -> Self {
        use Heading::*;

        const WALLS: [(u32, u32, Heading); 20] = [
            (1, 5, West),
            (5, 2, North),
            (4, 0, South),
            (6, 2, East),
            (0, 5, North),
            (5, 2, South),
            (2, 5, East),
            (3, 1, West),
            (1, 7, South),
            (7, 0, West),
            (3, 6, North),
            (2, 4, West),
            (6, 4, East),
            (3, 3, North),
            (4, 7, West),
            (1, 3, West),
            (6, 5, North),
            (0, 2, East),
            (4, 6, South),
            (7, 5, West),
        ];

        Self {
            name: DEFAULT_BOARD_NAME.to_string(),
            width: DEFAULT_EXTENT,
            height: DEFAULT_EXTENT,
            walls: WALLS
                .iter()
                .map(|&(x, y, heading)| WallSpec::new(x, y, heading))
                .collect(),
        }
    }
}
