//! Triangle meshes from renderer patches.
//!
//! Used for previews and export; the map renderer itself consumes patches
//! directly.

pub mod geometry;

pub use geometry::{Mesh, Vertex};

use crate::patch::{Patch, SideVisibility};
use crate::renderer::PatchRenderer;
use crate::types::{BlockGrid, BlockId, BlockPosition};

/// Triangulate patches, translated by `offset`.
pub fn mesh_patches(patches: &[Patch], offset: [f32; 3]) -> Mesh {
    let mut mesh = Mesh::new();
    for patch in patches {
        add_patch(&mut mesh, patch, offset);
    }
    mesh
}

fn add_patch(mesh: &mut Mesh, patch: &Patch, offset: [f32; 3]) {
    let corners = patch.corners().map(|c| [c[0] + offset[0], c[1] + offset[1], c[2] + offset[2]]);
    let [u0, u1] = patch.u_range;
    let [v0, v1] = patch.v_range;
    let uvs = [[u0, v0], [u1, v0], [u1, v1], [u0, v1]];

    // Already negated for bottom-visible patches.
    let normal = patch.normal();

    match patch.visibility {
        SideVisibility::Top => push_quad(mesh, &corners, &uvs, normal, patch, false),
        SideVisibility::Bottom => push_quad(mesh, &corners, &uvs, normal, patch, true),
        SideVisibility::Both | SideVisibility::Flip => {
            push_quad(mesh, &corners, &uvs, normal, patch, false);
            let back_uvs = if patch.visibility == SideVisibility::Flip {
                [[u1, v0], [u0, v0], [u0, v1], [u1, v1]]
            } else {
                uvs
            };
            let back_normal = [-normal[0], -normal[1], -normal[2]];
            push_quad(mesh, &corners, &back_uvs, back_normal, patch, true);
        }
    }
}

fn push_quad(
    mesh: &mut Mesh,
    corners: &[[f32; 3]; 4],
    uvs: &[[f32; 2]; 4],
    normal: [f32; 3],
    patch: &Patch,
    reversed: bool,
) {
    let i: Vec<u32> = corners
        .iter()
        .zip(uvs)
        .map(|(&position, &uv)| mesh.add_vertex(Vertex::new(position, normal, uv)))
        .collect();

    if reversed {
        mesh.add_quad(i[0], i[3], i[2], i[1], patch.texture);
    } else {
        mesh.add_quad(i[0], i[1], i[2], i[3], patch.texture);
    }
}

/// Mesh every block of type `block_id` in the grid with `renderer`.
///
/// Blocks are visited in (y, z, x) order so output is deterministic.
pub fn mesh_grid<R: PatchRenderer>(renderer: &R, block_id: BlockId, grid: &BlockGrid) -> Mesh {
    let mut positions: Vec<BlockPosition> = grid
        .iter()
        .filter(|(_, state)| state.id == block_id)
        .map(|(pos, _)| pos)
        .collect();
    positions.sort_by_key(|p| (p.y, p.z, p.x));

    let mut mesh = Mesh::new();
    for pos in positions {
        let patches = renderer.render_patches(&grid.context_at(pos));
        let offset = [pos.x as f32, pos.y as f32, pos.z as f32];
        mesh.merge(&mesh_patches(patches, offset));
    }

    log::debug!(
        "Meshed {} triangles for block {}",
        mesh.triangle_count(),
        block_id
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{StandardPatchFactory, TextureIndex};
    use crate::renderer::{ChestRenderer, ChestVariant, RendererSetup};
    use crate::types::BlockState;

    fn renderer() -> ChestRenderer {
        ChestRenderer::initialize(&StandardPatchFactory::new(), &RendererSetup::new(54)).unwrap()
    }

    fn square(visibility: SideVisibility) -> Patch {
        Patch {
            origin: [0.0, 0.0, 0.0],
            u_end: [1.0, 0.0, 0.0],
            v_end: [0.0, 1.0, 0.0],
            u_range: [0.0, 1.0],
            v_range: [0.0, 1.0],
            visibility,
            texture: TextureIndex::from_const(1),
        }
    }

    #[test]
    fn test_single_sided_patch_is_one_quad() {
        let mesh = mesh_patches(&[square(SideVisibility::Top)], [0.0; 3]);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_bottom_patch_reverses_winding() {
        let top = mesh_patches(&[square(SideVisibility::Top)], [0.0; 3]);
        let bottom = mesh_patches(&[square(SideVisibility::Bottom)], [0.0; 3]);
        assert_eq!(top.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(bottom.indices, vec![0, 3, 2, 0, 2, 1]);
        assert_eq!(bottom.vertices[0].normal, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_double_sided_patch_is_two_quads() {
        let mesh = mesh_patches(&[square(SideVisibility::Both)], [0.0; 3]);
        assert_eq!(mesh.triangle_count(), 4);

        let flipped = mesh_patches(&[square(SideVisibility::Flip)], [0.0; 3]);
        assert_eq!(flipped.vertices[4].uv, [1.0, 0.0]);
    }

    #[test]
    fn test_chest_model_mesh() {
        let renderer = renderer();
        let model = renderer.model_table().get(ChestVariant::SingleSouth);
        let mesh = mesh_patches(model, [0.0; 3]);

        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.used_textures().len(), 6);
    }

    #[test]
    fn test_mesh_grid_translates_blocks() {
        let renderer = renderer();
        let a = BlockPosition::new(4, 1, 0);
        let grid = BlockGrid::new()
            .with_block(a, BlockState::new(54, 3))
            .with_block(BlockPosition::new(5, 1, 0), BlockState::new(54, 3))
            .with_block(BlockPosition::new(4, 2, 0), BlockState::new(1, 0));

        let mesh = mesh_grid(&renderer, 54, &grid);
        assert_eq!(mesh.triangle_count(), 24);
        assert!(mesh.vertices.iter().all(|v| v.position[0] >= 4.0 && v.position[0] <= 6.0));
        assert!(mesh.vertices.iter().all(|v| v.position[1] >= 1.0 && v.position[1] < 2.0));
    }
}
