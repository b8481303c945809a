//! # Chest Mesher
//!
//! Patch geometry for chests in voxel map renderers.
//!
//! ## Overview
//!
//! Chests are drawn with one of twelve fixed models: a single chest or the
//! left/right half of a double chest, each facing north, south, east or west.
//! The models are built once from three south-facing boxes and turned into
//! the other facings. Each query then only looks at the block's orientation
//! code and its neighbours to pick a model.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chest_mesher::{ChestRenderer, PatchRenderer, RendererSetup, StandardPatchFactory};
//!
//! // Build the models once during setup
//! let renderer = ChestRenderer::initialize(&StandardPatchFactory::new(), &RendererSetup::new(54))?;
//!
//! // Query per visible block (any BlockContext implementation)
//! let patches = renderer.render_patches(&ctx);
//! assert_eq!(patches.len(), 6);
//! ```
//!
//! ## Library Integration
//!
//! Map renderers plug in their own patch primitives by implementing
//! [`PatchFactory`], and expose their block storage through [`BlockContext`].

pub mod error;
pub mod types;
pub mod patch;
pub mod renderer;
pub mod mesher;
pub mod export;

// Re-export main types for convenience
pub use error::{MesherError, Result};
pub use types::{BlockContext, BlockGrid, BlockId, BlockPosition, BlockState, Direction, Facing, QuarterTurn};
pub use patch::{Patch, PatchFactory, SideVisibility, StandardPatchFactory, TextureIndex, MAX_TEXTURE_SLOTS};
pub use renderer::chest::{resolve_variant, ChestKind, ChestModel, ModelTable, NeighborMatches};
pub use renderer::{ChestRenderer, ChestVariant, PatchRenderer, RendererSetup};
pub use mesher::{mesh_grid, mesh_patches, Mesh, Vertex};
pub use export::{export_obj, model_table_json, ObjExport};
