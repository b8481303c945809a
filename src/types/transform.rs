//! Rotation about the vertical axis in quarter-turn increments.

use crate::error::{MesherError, Result};
use serde::{Deserialize, Serialize};

/// A rotation about the Y axis by a multiple of 90 degrees.
///
/// Angles are clockwise when seen from above, the same sense block
/// rotations use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum QuarterTurn {
    #[default]
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl QuarterTurn {
    /// Build a turn from degrees. Only 0, 90, 180 and 270 are accepted.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        match degrees {
            0 => Ok(QuarterTurn::None),
            90 => Ok(QuarterTurn::Quarter),
            180 => Ok(QuarterTurn::Half),
            270 => Ok(QuarterTurn::ThreeQuarter),
            other => Err(MesherError::InvalidRotation(other)),
        }
    }

    /// Angle in degrees (0, 90, 180 or 270).
    pub fn degrees(&self) -> i32 {
        self.steps() as i32 * 90
    }

    /// Number of 90 degree steps.
    pub fn steps(&self) -> u32 {
        match self {
            QuarterTurn::None => 0,
            QuarterTurn::Quarter => 1,
            QuarterTurn::Half => 2,
            QuarterTurn::ThreeQuarter => 3,
        }
    }

    /// Check if this is an identity rotation.
    pub fn is_identity(&self) -> bool {
        matches!(self, QuarterTurn::None)
    }
}

impl TryFrom<i32> for QuarterTurn {
    type Error = MesherError;

    fn try_from(degrees: i32) -> Result<Self> {
        Self::from_degrees(degrees)
    }
}

impl From<QuarterTurn> for i32 {
    fn from(turn: QuarterTurn) -> i32 {
        turn.degrees()
    }
}
