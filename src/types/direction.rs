//! Direction and facing types for box faces and chest orientation.

use super::QuarterTurn;
use serde::{Deserialize, Serialize};

/// The six cardinal directions / face directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Get the offset for this direction.
    pub fn offset(&self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    /// Get the normal vector for this direction.
    pub fn normal(&self) -> [f32; 3] {
        match self {
            Direction::Down => [0.0, -1.0, 0.0],
            Direction::Up => [0.0, 1.0, 0.0],
            Direction::North => [0.0, 0.0, -1.0],
            Direction::South => [0.0, 0.0, 1.0],
            Direction::West => [-1.0, 0.0, 0.0],
            Direction::East => [1.0, 0.0, 0.0],
        }
    }

    /// Rotate this direction about the Y axis by a quarter turn.
    /// Looking from +Y (above), positive rotation goes North -> East -> South -> West.
    pub fn rotate_y(self, turn: QuarterTurn) -> Direction {
        let mut dir = self;
        for _ in 0..turn.steps() {
            dir = match dir {
                Direction::North => Direction::East,
                Direction::East => Direction::South,
                Direction::South => Direction::West,
                Direction::West => Direction::North,
                // Y rotation doesn't affect Up/Down
                Direction::Up => Direction::Up,
                Direction::Down => Direction::Down,
            };
        }
        dir
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
            Direction::East => write!(f, "east"),
        }
    }
}

/// Horizontal facing of a chest's front.
///
/// Chest geometry is authored facing south; the other facings are reached by
/// turning the south model clockwise (seen from above) by [`Facing::quarter_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    /// All four facings, canonical (south) first.
    pub const ALL: [Facing; 4] = [Facing::South, Facing::West, Facing::North, Facing::East];

    /// Rotation that takes the south-facing model to this facing.
    pub fn quarter_turn(&self) -> QuarterTurn {
        match self {
            Facing::South => QuarterTurn::None,
            Facing::West => QuarterTurn::Quarter,
            Facing::North => QuarterTurn::Half,
            Facing::East => QuarterTurn::ThreeQuarter,
        }
    }

    /// The world direction the chest front points towards.
    pub fn direction(&self) -> Direction {
        match self {
            Facing::North => Direction::North,
            Facing::South => Direction::South,
            Facing::East => Direction::East,
            Facing::West => Direction::West,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.direction())
    }
}
