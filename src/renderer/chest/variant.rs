use crate::types::Facing;
use serde::{Deserialize, Serialize};

/// Which part of a chest a block draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChestKind {
    /// A chest with no partner.
    Single,
    /// Left half of a double chest, as seen from behind the open lid.
    Left,
    /// Right half of a double chest.
    Right,
}

impl ChestKind {
    pub const ALL: [ChestKind; 3] = [ChestKind::Single, ChestKind::Left, ChestKind::Right];
}

/// One of the twelve chest geometries: kind x facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChestVariant {
    SingleNorth,
    SingleSouth,
    SingleEast,
    SingleWest,
    LeftNorth,
    LeftSouth,
    LeftEast,
    LeftWest,
    RightNorth,
    RightSouth,
    RightEast,
    RightWest,
}

impl ChestVariant {
    pub const ALL: [ChestVariant; 12] = [
        ChestVariant::SingleNorth,
        ChestVariant::SingleSouth,
        ChestVariant::SingleEast,
        ChestVariant::SingleWest,
        ChestVariant::LeftNorth,
        ChestVariant::LeftSouth,
        ChestVariant::LeftEast,
        ChestVariant::LeftWest,
        ChestVariant::RightNorth,
        ChestVariant::RightSouth,
        ChestVariant::RightEast,
        ChestVariant::RightWest,
    ];

    pub fn new(kind: ChestKind, facing: Facing) -> Self {
        match (kind, facing) {
            (ChestKind::Single, Facing::North) => ChestVariant::SingleNorth,
            (ChestKind::Single, Facing::South) => ChestVariant::SingleSouth,
            (ChestKind::Single, Facing::East) => ChestVariant::SingleEast,
            (ChestKind::Single, Facing::West) => ChestVariant::SingleWest,
            (ChestKind::Left, Facing::North) => ChestVariant::LeftNorth,
            (ChestKind::Left, Facing::South) => ChestVariant::LeftSouth,
            (ChestKind::Left, Facing::East) => ChestVariant::LeftEast,
            (ChestKind::Left, Facing::West) => ChestVariant::LeftWest,
            (ChestKind::Right, Facing::North) => ChestVariant::RightNorth,
            (ChestKind::Right, Facing::South) => ChestVariant::RightSouth,
            (ChestKind::Right, Facing::East) => ChestVariant::RightEast,
            (ChestKind::Right, Facing::West) => ChestVariant::RightWest,
        }
    }

    pub fn kind(&self) -> ChestKind {
        match self {
            ChestVariant::SingleNorth
            | ChestVariant::SingleSouth
            | ChestVariant::SingleEast
            | ChestVariant::SingleWest => ChestKind::Single,
            ChestVariant::LeftNorth
            | ChestVariant::LeftSouth
            | ChestVariant::LeftEast
            | ChestVariant::LeftWest => ChestKind::Left,
            ChestVariant::RightNorth
            | ChestVariant::RightSouth
            | ChestVariant::RightEast
            | ChestVariant::RightWest => ChestKind::Right,
        }
    }

    pub fn facing(&self) -> Facing {
        match self {
            ChestVariant::SingleNorth | ChestVariant::LeftNorth | ChestVariant::RightNorth => {
                Facing::North
            }
            ChestVariant::SingleSouth | ChestVariant::LeftSouth | ChestVariant::RightSouth => {
                Facing::South
            }
            ChestVariant::SingleEast | ChestVariant::LeftEast | ChestVariant::RightEast => {
                Facing::East
            }
            ChestVariant::SingleWest | ChestVariant::LeftWest | ChestVariant::RightWest => {
                Facing::West
            }
        }
    }
}

impl std::fmt::Display for ChestVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind() {
            ChestKind::Single => "single",
            ChestKind::Left => "left",
            ChestKind::Right => "right",
        };
        write!(f, "{}_{}", kind, self.facing())
    }
}
