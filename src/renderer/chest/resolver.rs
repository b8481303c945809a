//! Orientation code and neighbour lookup to chest variant.
//!
//! Left and right are named from behind the chest with the lid open, so the
//! physical side that counts as "left" depends on the facing:
//!
//! | code | facing | left partner | right partner |
//! |------|--------|--------------|---------------|
//! | 2    | north  | -X           | +X            |
//! | 3    | south  | +X           | -X            |
//! | 4    | west   | +Z           | -Z            |
//! | 5    | east   | -Z           | +Z            |
//!
//! Any other code is treated as south.

use super::variant::{ChestKind, ChestVariant};
use crate::types::{BlockContext, Direction, Facing};

pub const ORIENTATION_NORTH: i32 = 2;
pub const ORIENTATION_SOUTH: i32 = 3;
pub const ORIENTATION_WEST: i32 = 4;
pub const ORIENTATION_EAST: i32 = 5;

/// Which horizontal neighbours are chests of the same block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborMatches {
    /// Same type at -X.
    pub west: bool,
    /// Same type at +X.
    pub east: bool,
    /// Same type at -Z.
    pub north: bool,
    /// Same type at +Z.
    pub south: bool,
}

impl NeighborMatches {
    pub fn none() -> Self {
        Self::default()
    }

    /// Flags with a single matching side.
    pub fn only(direction: Direction) -> Self {
        Self::none().with(direction)
    }

    pub fn with(mut self, direction: Direction) -> Self {
        match direction {
            Direction::West => self.west = true,
            Direction::East => self.east = true,
            Direction::North => self.north = true,
            Direction::South => self.south = true,
            Direction::Up | Direction::Down => {}
        }
        self
    }

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::West => self.west,
            Direction::East => self.east,
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::Up | Direction::Down => false,
        }
    }

    /// Query the context for the neighbours the block's orientation can pair
    /// along. Neighbours outside the loaded data never match.
    pub fn from_context<C: BlockContext + ?Sized>(ctx: &C) -> Self {
        let block_type = ctx.block_type_id();
        let (first, second) = pairing_axis(facing_for_code(ctx.block_data()));

        let mut matches = Self::none();
        for direction in [first, second] {
            let (dx, dy, dz) = direction.offset();
            if ctx.block_type_id_at(dx, dy, dz) == Some(block_type) {
                matches = matches.with(direction);
            }
        }
        matches
    }
}

/// Facing encoded by a chest's orientation code.
pub fn facing_for_code(orientation_code: i32) -> Facing {
    match orientation_code {
        ORIENTATION_NORTH => Facing::North,
        ORIENTATION_WEST => Facing::West,
        ORIENTATION_EAST => Facing::East,
        _ => Facing::South,
    }
}

/// Neighbour directions consulted for a facing, in check order.
fn pairing_axis(facing: Facing) -> (Direction, Direction) {
    match facing {
        Facing::North | Facing::South => (Direction::West, Direction::East),
        Facing::West | Facing::East => (Direction::North, Direction::South),
    }
}

/// Kind of chest a matching neighbour in `direction` makes this block.
fn kind_for_partner(facing: Facing, direction: Direction) -> ChestKind {
    match (facing, direction) {
        (Facing::North, Direction::West) => ChestKind::Left,
        (Facing::North, _) => ChestKind::Right,
        (Facing::South, Direction::East) => ChestKind::Left,
        (Facing::South, _) => ChestKind::Right,
        (Facing::West, Direction::South) => ChestKind::Left,
        (Facing::West, _) => ChestKind::Right,
        (Facing::East, Direction::North) => ChestKind::Left,
        (Facing::East, _) => ChestKind::Right,
    }
}

/// Pick the chest variant for an orientation code and its neighbours.
///
/// Only the axis perpendicular to the facing is consulted. If both sides
/// match, the first checked side (-X, or -Z for west/east facings) wins.
pub fn resolve_variant(orientation_code: i32, neighbors: &NeighborMatches) -> ChestVariant {
    let facing = facing_for_code(orientation_code);
    let (first, second) = pairing_axis(facing);

    let kind = if neighbors.get(first) {
        kind_for_partner(facing, first)
    } else if neighbors.get(second) {
        kind_for_partner(facing, second)
    } else {
        ChestKind::Single
    };

    ChestVariant::new(kind, facing)
}
