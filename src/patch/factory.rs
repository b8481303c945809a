//! Reference patch factory.

use super::{BoxExtents, BoxSpec, Patch, PatchFactory, SideVisibility, TextureIndex, BOX_FACE_ORDER};
use crate::error::{MesherError, Result};
use crate::renderer::RendererSetup;
use crate::types::{Direction, QuarterTurn};
use glam::{Mat3, Vec3};

/// Builds axis-aligned box faces and rotates patches about the block centre.
///
/// Every face of a box is emitted top-visible, with `u x v` pointing out of
/// the box. U runs horizontally; V runs up the side faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPatchFactory;

impl StandardPatchFactory {
    pub fn new() -> Self {
        Self
    }

    /// One face of a box.
    pub fn box_face(&self, extents: &BoxExtents, face: Direction, texture: TextureIndex) -> Patch {
        let [x0, y0, z0] = extents.min;
        let [x1, y1, z1] = extents.max;

        // (origin, u_end, v_end, u_range, v_range); the plane spans the
        // whole block and the ranges clip it to the box.
        let (origin, u_end, v_end, u_range, v_range) = match face {
            Direction::Down => (
                [0.0, y0, 0.0],
                [1.0, y0, 0.0],
                [0.0, y0, 1.0],
                [x0, x1],
                [z0, z1],
            ),
            Direction::Up => (
                [0.0, y1, 1.0],
                [1.0, y1, 1.0],
                [0.0, y1, 0.0],
                [x0, x1],
                [1.0 - z1, 1.0 - z0],
            ),
            Direction::West => (
                [x0, 0.0, 0.0],
                [x0, 0.0, 1.0],
                [x0, 1.0, 0.0],
                [z0, z1],
                [y0, y1],
            ),
            Direction::East => (
                [x1, 0.0, 1.0],
                [x1, 0.0, 0.0],
                [x1, 1.0, 1.0],
                [1.0 - z1, 1.0 - z0],
                [y0, y1],
            ),
            Direction::North => (
                [1.0, 0.0, z0],
                [0.0, 0.0, z0],
                [1.0, 1.0, z0],
                [1.0 - x1, 1.0 - x0],
                [y0, y1],
            ),
            Direction::South => (
                [0.0, 0.0, z1],
                [1.0, 0.0, z1],
                [0.0, 1.0, z1],
                [x0, x1],
                [y0, y1],
            ),
        };

        Patch {
            origin,
            u_end,
            v_end,
            u_range,
            v_range,
            visibility: SideVisibility::Top,
            texture,
        }
    }
}

impl PatchFactory for StandardPatchFactory {
    fn prepare(&self, setup: &RendererSetup) -> Result<()> {
        if setup.block_id == 0 {
            return Err(MesherError::Setup(
                "block id 0 is air and cannot carry a custom renderer".to_string(),
            ));
        }
        Ok(())
    }

    fn build_box(&self, spec: &BoxSpec) -> [Patch; 6] {
        std::array::from_fn(|i| self.box_face(&spec.extents, BOX_FACE_ORDER[i], spec.textures[i]))
    }

    fn rotated_patch(&self, patch: &Patch, turn: QuarterTurn, texture: TextureIndex) -> Patch {
        if turn.is_identity() {
            return Patch { texture, ..*patch };
        }

        // Negate the angle: turns are clockwise from above, glam rotates
        // counter-clockwise (right-hand rule).
        let rotation = Mat3::from_rotation_y((-turn.degrees() as f32).to_radians());
        let center = Vec3::new(0.5, 0.0, 0.5);
        let rotate = |p: [f32; 3]| -> [f32; 3] {
            let rotated = rotation * (Vec3::from(p) - center) + center;
            snap(rotated).to_array()
        };

        Patch {
            origin: rotate(patch.origin),
            u_end: rotate(patch.u_end),
            v_end: rotate(patch.v_end),
            texture,
            ..*patch
        }
    }
}

/// Remove float noise from quarter-turn rotations (sin/cos of multiples of
/// 90 degrees are not exact in f32). Box coordinates sit on a 1/16 grid, so
/// anything within 1e-5 of a 1/4096 step is snapped onto it.
fn snap(v: Vec3) -> Vec3 {
    const STEP: f32 = 4096.0;
    let snapped = (v * STEP).round() / STEP;
    if (snapped - v).abs().max_element() < 1e-5 {
        snapped
    } else {
        v
    }
}
