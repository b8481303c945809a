//! Textured quad patches and the service that builds and rotates them.
//!
//! A [`Patch`] is a planar quad described the way map renderers describe
//! custom block geometry: an origin point, the end points of its U and V
//! axes, and a clip rectangle in that (u, v) parameter space. Chest geometry
//! only consumes patches through the [`PatchFactory`] trait;
//! [`StandardPatchFactory`] is the reference implementation.

mod factory;

pub use factory::StandardPatchFactory;

use crate::error::{MesherError, Result};
use crate::renderer::RendererSetup;
use crate::types::{Direction, QuarterTurn};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Number of texture slots a patch may reference (indices `0..16`).
pub const MAX_TEXTURE_SLOTS: u32 = 16;

/// Face order of [`PatchFactory::build_box`] output and of [`BoxSpec::textures`].
pub const BOX_FACE_ORDER: [Direction; 6] = [
    Direction::Down,
    Direction::Up,
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

/// Index into a renderer's texture slots. Always below [`MAX_TEXTURE_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TextureIndex(u8);

impl TextureIndex {
    /// Constructor for constant tables. Out-of-range values fail const
    /// evaluation (and panic if called at runtime).
    pub const fn from_const(slot: u8) -> Self {
        assert!((slot as u32) < MAX_TEXTURE_SLOTS, "texture index out of range");
        Self(slot)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for TextureIndex {
    type Error = MesherError;

    fn try_from(slot: u8) -> Result<Self> {
        if (slot as u32) < MAX_TEXTURE_SLOTS {
            Ok(Self(slot))
        } else {
            Err(MesherError::TextureIndexOutOfRange(slot))
        }
    }
}

impl From<TextureIndex> for u8 {
    fn from(index: TextureIndex) -> u8 {
        index.0
    }
}

impl std::fmt::Display for TextureIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of a patch is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideVisibility {
    /// Visible from the side `u x v` points to.
    Top,
    /// Visible from the opposite side.
    Bottom,
    /// Visible from both sides.
    Both,
    /// Visible from both sides, texture mirrored on the back.
    Flip,
}

/// A textured planar quad in block-local coordinates (unit cube).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    /// Origin of the (u, v) parameter space.
    pub origin: [f32; 3],
    /// Point reached at u = 1, v = 0.
    pub u_end: [f32; 3],
    /// Point reached at u = 0, v = 1.
    pub v_end: [f32; 3],
    /// Visible U range.
    pub u_range: [f32; 2],
    /// Visible V range.
    pub v_range: [f32; 2],
    pub visibility: SideVisibility,
    pub texture: TextureIndex,
}

impl Patch {
    fn axes(&self) -> (Vec3, Vec3, Vec3) {
        let origin = Vec3::from(self.origin);
        (
            origin,
            Vec3::from(self.u_end) - origin,
            Vec3::from(self.v_end) - origin,
        )
    }

    /// Position of the point at parameters (u, v).
    pub fn point_at(&self, u: f32, v: f32) -> [f32; 3] {
        let (origin, u_axis, v_axis) = self.axes();
        (origin + u_axis * u + v_axis * v).to_array()
    }

    /// The four visible corners, counter-clockwise seen from the `u x v` side:
    /// (umin, vmin), (umax, vmin), (umax, vmax), (umin, vmax).
    pub fn corners(&self) -> [[f32; 3]; 4] {
        let [u0, u1] = self.u_range;
        let [v0, v1] = self.v_range;
        [
            self.point_at(u0, v0),
            self.point_at(u1, v0),
            self.point_at(u1, v1),
            self.point_at(u0, v1),
        ]
    }

    /// Unit normal of the visible side (`u x v`, negated for bottom-visible patches).
    pub fn normal(&self) -> [f32; 3] {
        let (_, u_axis, v_axis) = self.axes();
        let n = u_axis.cross(v_axis).normalize_or_zero();
        match self.visibility {
            SideVisibility::Bottom => (-n).to_array(),
            _ => n.to_array(),
        }
    }
}

/// Axis-aligned box inside the unit cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxExtents {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoxExtents {
    /// Create extents, rejecting inverted boxes and boxes leaving the unit cube.
    pub fn new(min: [f32; 3], max: [f32; 3]) -> Result<Self> {
        for axis in 0..3 {
            if !(0.0..=1.0).contains(&min[axis]) || !(0.0..=1.0).contains(&max[axis]) {
                return Err(MesherError::InvalidBox(format!(
                    "{:?}..{:?} leaves the unit cube",
                    min, max
                )));
            }
            if min[axis] > max[axis] {
                return Err(MesherError::InvalidBox(format!(
                    "{:?}..{:?} is inverted on axis {}",
                    min, max, axis
                )));
            }
        }
        Ok(Self { min, max })
    }
}

/// Box extents plus one texture per face, in [`BOX_FACE_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub extents: BoxExtents,
    pub textures: [TextureIndex; 6],
}

/// Builds and rotates patches for custom block renderers.
///
/// Implementations own the face-ordering convention of [`build_box`](PatchFactory::build_box).
/// Renderers rely only on rotation preserving each face's texture.
pub trait PatchFactory {
    /// Prerequisite step run before a renderer builds any geometry.
    fn prepare(&self, _setup: &RendererSetup) -> Result<()> {
        Ok(())
    }

    /// Build the six faces of a box, in [`BOX_FACE_ORDER`].
    fn build_box(&self, spec: &BoxSpec) -> [Patch; 6];

    /// Rotate a patch about the vertical axis through the block centre,
    /// assigning it `texture`.
    fn rotated_patch(&self, patch: &Patch, turn: QuarterTurn, texture: TextureIndex) -> Patch;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_south_patch() -> Patch {
        Patch {
            origin: [0.0, 0.0, 1.0],
            u_end: [1.0, 0.0, 1.0],
            v_end: [0.0, 1.0, 1.0],
            u_range: [0.25, 0.75],
            v_range: [0.0, 0.5],
            visibility: SideVisibility::Top,
            texture: TextureIndex::from_const(3),
        }
    }

    #[test]
    fn test_texture_index_range() {
        assert_eq!(TextureIndex::try_from(15).unwrap().get(), 15);
        assert!(matches!(
            TextureIndex::try_from(16),
            Err(MesherError::TextureIndexOutOfRange(16))
        ));
    }

    #[test]
    fn test_patch_corners_and_normal() {
        let patch = unit_south_patch();
        let corners = patch.corners();
        assert_eq!(corners[0], [0.25, 0.0, 1.0]);
        assert_eq!(corners[2], [0.75, 0.5, 1.0]);
        assert_eq!(patch.normal(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_bottom_visibility_flips_normal() {
        let patch = Patch {
            visibility: SideVisibility::Bottom,
            ..unit_south_patch()
        };
        assert_eq!(patch.normal(), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_box_extents_validation() {
        assert!(BoxExtents::new([0.0; 3], [1.0; 3]).is_ok());
        assert!(matches!(
            BoxExtents::new([0.5, 0.0, 0.0], [0.25, 1.0, 1.0]),
            Err(MesherError::InvalidBox(_))
        ));
        assert!(matches!(
            BoxExtents::new([0.0; 3], [1.5, 1.0, 1.0]),
            Err(MesherError::InvalidBox(_))
        ));
    }

    #[test]
    fn test_patch_json_shape() {
        let json = serde_json::to_value(unit_south_patch()).unwrap();
        assert_eq!(json["texture"], 3);
        assert_eq!(json["visibility"], "top");
    }
}
