//! JSON dump of chest models.

use crate::error::Result;
use crate::patch::Patch;
use crate::renderer::chest::{ChestModel, ChestVariant, ModelTable};
use serde::Serialize;

/// One variant and its patches.
#[derive(Debug, Serialize)]
pub struct VariantPatches<'a> {
    pub variant: ChestVariant,
    pub patches: &'a [Patch],
}

impl<'a> VariantPatches<'a> {
    pub fn new(variant: ChestVariant, model: &'a ChestModel) -> Self {
        Self {
            variant,
            patches: model.patches(),
        }
    }
}

/// Serialize a single variant's patches as pretty JSON.
pub fn variant_json(variant: ChestVariant, model: &ChestModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(&VariantPatches::new(variant, model))?)
}

/// Serialize every variant of the table, in [`ChestVariant::ALL`] order.
pub fn model_table_json(table: &ModelTable) -> Result<String> {
    let entries: Vec<VariantPatches<'_>> = table
        .iter()
        .map(|(variant, model)| VariantPatches::new(variant, model))
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::StandardPatchFactory;
    use crate::renderer::chest::build_model_table;

    #[test]
    fn test_table_json_lists_every_variant() {
        let table = build_model_table(&StandardPatchFactory::new());
        let json = model_table_json(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0]["variant"], "single_north");
        for entry in entries {
            assert_eq!(entry["patches"].as_array().unwrap().len(), 6);
        }
    }

    #[test]
    fn test_variant_json_textures() {
        let table = build_model_table(&StandardPatchFactory::new());
        let json = variant_json(ChestVariant::RightSouth, table.get(ChestVariant::RightSouth)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let textures: Vec<u64> = value["patches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["texture"].as_u64().unwrap())
            .collect();
        assert_eq!(textures, vec![15, 7, 10, 11, 13, 9]);
    }
}
