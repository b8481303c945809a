//! Custom block renderers.
//!
//! A renderer is built once during map renderer setup and then queried for
//! every visible block of its type. Queries take `&self`, so a renderer can be
//! shared between rendering worker threads.

pub mod chest;

pub use chest::{ChestRenderer, ChestVariant};

use crate::patch::Patch;
use crate::types::{BlockContext, BlockId};
use std::collections::BTreeMap;

/// Setup parameters handed to a renderer when it is registered for a block type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererSetup {
    /// Block type the renderer draws.
    pub block_id: BlockId,
    /// Data bits the renderer distinguishes (`-1` for all).
    pub block_data_mask: i32,
    /// Free-form renderer options.
    pub options: BTreeMap<String, String>,
}

impl RendererSetup {
    pub fn new(block_id: BlockId) -> Self {
        Self {
            block_id,
            block_data_mask: -1,
            options: BTreeMap::new(),
        }
    }

    pub fn with_data_mask(mut self, mask: i32) -> Self {
        self.block_data_mask = mask;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get an option value.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(|s| s.as_str())
    }
}

/// Outbound contract of a custom block renderer.
pub trait PatchRenderer {
    /// Highest number of texture slots any patch of this renderer uses.
    fn maximum_texture_count(&self) -> u32;

    /// Patches for the block described by `ctx`.
    fn render_patches<C: BlockContext + ?Sized>(&self, ctx: &C) -> &[Patch];
}
