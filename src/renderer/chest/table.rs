use super::variant::{ChestKind, ChestVariant};
use crate::patch::Patch;
use crate::types::Facing;
use serde::Serialize;

/// Six patches, one per box face, in the patch factory's face order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChestModel {
    patches: [Patch; 6],
}

impl ChestModel {
    pub(super) fn new(patches: [Patch; 6]) -> Self {
        Self { patches }
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Patch> {
        self.patches.iter()
    }
}

impl std::ops::Deref for ChestModel {
    type Target = [Patch];

    fn deref(&self) -> &[Patch] {
        &self.patches
    }
}

/// The four facings of one chest shape.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct FacingModels {
    pub(super) north: ChestModel,
    pub(super) south: ChestModel,
    pub(super) east: ChestModel,
    pub(super) west: ChestModel,
}

impl FacingModels {
    fn get(&self, facing: Facing) -> &ChestModel {
        match facing {
            Facing::North => &self.north,
            Facing::South => &self.south,
            Facing::East => &self.east,
            Facing::West => &self.west,
        }
    }
}

/// Every chest variant's model. Built once by the model builder, read-only after.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTable {
    pub(super) single: FacingModels,
    pub(super) left: FacingModels,
    pub(super) right: FacingModels,
}

impl ModelTable {
    /// Model for a variant.
    pub fn get(&self, variant: ChestVariant) -> &ChestModel {
        let models = match variant.kind() {
            ChestKind::Single => &self.single,
            ChestKind::Left => &self.left,
            ChestKind::Right => &self.right,
        };
        models.get(variant.facing())
    }

    /// All (variant, model) pairs in [`ChestVariant::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ChestVariant, &ChestModel)> + '_ {
        ChestVariant::ALL.into_iter().map(move |v| (v, self.get(v)))
    }
}
