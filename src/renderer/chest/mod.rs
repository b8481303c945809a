//! Single and double chest renderer.
//!
//! Twelve fixed models (single, left half, right half, each in four facings)
//! are built once at setup. A query only resolves which of the twelve a
//! block needs and hands back the shared patches.

mod builder;
mod resolver;
mod table;
mod variant;

pub use builder::{build_model_table, LEFT_BOX, RIGHT_BOX, SINGLE_BOX};
pub use resolver::{
    facing_for_code, resolve_variant, NeighborMatches, ORIENTATION_EAST, ORIENTATION_NORTH,
    ORIENTATION_SOUTH, ORIENTATION_WEST,
};
pub use table::{ChestModel, ModelTable};
pub use variant::{ChestKind, ChestVariant};

use super::{PatchRenderer, RendererSetup};
use crate::error::{MesherError, Result};
use crate::patch::{Patch, PatchFactory, MAX_TEXTURE_SLOTS};
use crate::types::BlockContext;

/// Chest renderer: the precomputed model table plus the setup it was built for.
#[derive(Debug, Clone)]
pub struct ChestRenderer {
    setup: RendererSetup,
    models: ModelTable,
}

impl ChestRenderer {
    /// Run the factory's prerequisite step, then build all chest models.
    ///
    /// Fails only if the prerequisite step fails; no renderer exists then.
    pub fn initialize<F: PatchFactory + ?Sized>(factory: &F, setup: &RendererSetup) -> Result<Self> {
        if let Err(e) = factory.prepare(setup) {
            log::warn!("Chest renderer setup failed for block {}: {}", setup.block_id, e);
            return Err(match e {
                MesherError::Setup(msg) => MesherError::Setup(msg),
                other => MesherError::Setup(other.to_string()),
            });
        }

        for (key, value) in &setup.options {
            log::debug!("Chest renderer ignores option {}={}", key, value);
        }

        Ok(Self {
            setup: setup.clone(),
            models: build_model_table(factory),
        })
    }

    /// Texture slots used by chest patches. Does not depend on setup.
    pub fn maximum_texture_count(&self) -> u32 {
        MAX_TEXTURE_SLOTS
    }

    /// Variant for the block described by `ctx`.
    pub fn variant_for<C: BlockContext + ?Sized>(&self, ctx: &C) -> ChestVariant {
        let neighbors = NeighborMatches::from_context(ctx);
        let variant = resolve_variant(ctx.block_data(), &neighbors);
        log::trace!(
            "Chest data {} with {:?} resolved to {}",
            ctx.block_data(),
            neighbors,
            variant
        );
        variant
    }

    /// Model for the block described by `ctx`.
    pub fn model_for<C: BlockContext + ?Sized>(&self, ctx: &C) -> &ChestModel {
        self.models.get(self.variant_for(ctx))
    }

    pub fn model_table(&self) -> &ModelTable {
        &self.models
    }

    pub fn setup(&self) -> &RendererSetup {
        &self.setup
    }
}

impl PatchRenderer for ChestRenderer {
    fn maximum_texture_count(&self) -> u32 {
        ChestRenderer::maximum_texture_count(self)
    }

    fn render_patches<C: BlockContext + ?Sized>(&self, ctx: &C) -> &[Patch] {
        self.model_for(ctx).patches()
    }
}
