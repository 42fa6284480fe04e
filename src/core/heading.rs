//! Cardinal headings and grid positions.
//!
//! ## Heading
//!
//! A cyclic enumeration `North → East → South → West → North`.
//! Rotating right is the successor, rotating left the predecessor and
//! reversing is two successors.
//!
//! ```
//! use roborally::core::Heading;
//!
//! assert_eq!(Heading::North.next(), Heading::East);
//! assert_eq!(Heading::North.prev(), Heading::West);
//! assert_eq!(Heading::North.opposite(), Heading::South);
//! ```

use serde::{Deserialize, Serialize};

/// One of the four cardinal directions a robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at `North`.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Clockwise successor (a right turn).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Counter-clockwise predecessor (a left turn).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }

    /// The reverse heading.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.next().next()
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        };
        f.write_str(name)
    }
}

/// Integer cell coordinates. `x` grows east, `y` grows south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_clockwise() {
        let mut heading = Heading::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(heading);
            heading = heading.next();
        }
        assert_eq!(seen, Heading::ALL.to_vec());
        assert_eq!(heading, Heading::North);
    }

    #[test]
    fn test_prev_is_inverse_of_next() {
        for heading in Heading::ALL {
            assert_eq!(heading.next().prev(), heading);
            assert_eq!(heading.prev().next(), heading);
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Heading::North.opposite(), Heading::South);
        assert_eq!(Heading::East.opposite(), Heading::West);
        assert_eq!(Heading::South.opposite(), Heading::North);
        assert_eq!(Heading::West.opposite(), Heading::East);
    }

    #[test]
    fn test_display() {
        assert_eq!(Heading::West.to_string(), "WEST");
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
    }
}
