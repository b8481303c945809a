//! Chest model construction.
//!
//! Three shapes are built facing south straight from their box specs; the
//! west, north and east models are the south patches turned about the
//! vertical axis, face by face, keeping each face's texture.

use super::table::{ChestModel, FacingModels, ModelTable};
use crate::patch::{BoxExtents, BoxSpec, PatchFactory, TextureIndex};
use crate::types::Facing;

const OFF1: f32 = 1.0 / 16.0;
const OFF14: f32 = 14.0 / 16.0;
const OFF15: f32 = 15.0 / 16.0;

const fn textures(slots: [u8; 6]) -> [TextureIndex; 6] {
    [
        TextureIndex::from_const(slots[0]),
        TextureIndex::from_const(slots[1]),
        TextureIndex::from_const(slots[2]),
        TextureIndex::from_const(slots[3]),
        TextureIndex::from_const(slots[4]),
        TextureIndex::from_const(slots[5]),
    ]
}

/// Single chest: 14/16 wide, inset 1/16 on every horizontal side.
pub const SINGLE_BOX: BoxSpec = BoxSpec {
    extents: BoxExtents {
        min: [OFF1, 0.0, OFF1],
        max: [OFF15, OFF14, OFF15],
    },
    textures: textures([5, 0, 1, 2, 4, 3]),
};

/// Left half of a double chest; open on the +X side where the right half joins.
pub const LEFT_BOX: BoxSpec = BoxSpec {
    extents: BoxExtents {
        min: [OFF1, 0.0, OFF1],
        max: [1.0, OFF14, OFF15],
    },
    textures: textures([14, 6, 10, 11, 12, 8]),
};

/// Right half of a double chest; open on the -X side where the left half joins.
pub const RIGHT_BOX: BoxSpec = BoxSpec {
    extents: BoxExtents {
        min: [0.0, 0.0, OFF1],
        max: [OFF15, OFF14, OFF15],
    },
    textures: textures([15, 7, 10, 11, 13, 9]),
};

/// Build every chest model.
pub fn build_model_table<F: PatchFactory + ?Sized>(factory: &F) -> ModelTable {
    let table = ModelTable {
        single: build_facings(factory, &SINGLE_BOX),
        left: build_facings(factory, &LEFT_BOX),
        right: build_facings(factory, &RIGHT_BOX),
    };
    log::debug!("Built chest model table ({} variants)", table.iter().count());
    table
}

fn build_facings<F: PatchFactory + ?Sized>(factory: &F, spec: &BoxSpec) -> FacingModels {
    let south = factory.build_box(spec);
    let turned = |facing: Facing| {
        let turn = facing.quarter_turn();
        ChestModel::new(std::array::from_fn(|i| {
            factory.rotated_patch(&south[i], turn, spec.textures[i])
        }))
    };

    FacingModels {
        west: turned(Facing::West),
        north: turned(Facing::North),
        east: turned(Facing::East),
        south: ChestModel::new(south),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{Patch, StandardPatchFactory, MAX_TEXTURE_SLOTS};
    use crate::renderer::chest::{
        resolve_variant, ChestKind, ChestVariant, NeighborMatches, ORIENTATION_EAST,
        ORIENTATION_NORTH, ORIENTATION_SOUTH, ORIENTATION_WEST,
    };
    use crate::types::{Direction, QuarterTurn};
    use std::cell::RefCell;

    fn table() -> ModelTable {
        build_model_table(&StandardPatchFactory::new())
    }

    fn canonical(variant: ChestVariant) -> ChestVariant {
        ChestVariant::new(variant.kind(), Facing::South)
    }

    #[test]
    fn test_every_variant_has_six_patches() {
        let table = table();
        for variant in ChestVariant::ALL {
            assert_eq!(table.get(variant).len(), 6, "{}", variant);
        }
    }

    #[test]
    fn test_texture_indices_in_range() {
        let table = table();
        for (_, model) in table.iter() {
            for patch in model.iter() {
                assert!((patch.texture.get() as u32) < MAX_TEXTURE_SLOTS);
            }
        }
    }

    #[test]
    fn test_rotation_preserves_textures() {
        let table = table();
        for variant in ChestVariant::ALL {
            let model = table.get(variant);
            let source = table.get(canonical(variant));
            for (patch, original) in model.iter().zip(source.iter()) {
                assert_eq!(patch.texture, original.texture, "{}", variant);
            }
        }
    }

    #[test]
    fn test_canonical_models_match_box_specs() {
        let table = table();
        let factory = StandardPatchFactory::new();
        assert_eq!(table.get(ChestVariant::SingleSouth).patches(), &factory.build_box(&SINGLE_BOX)[..]);
        assert_eq!(table.get(ChestVariant::LeftSouth).patches(), &factory.build_box(&LEFT_BOX)[..]);
        assert_eq!(table.get(ChestVariant::RightSouth).patches(), &factory.build_box(&RIGHT_BOX)[..]);

        let textures: Vec<u8> = table
            .get(ChestVariant::SingleSouth)
            .iter()
            .map(|p| p.texture.get())
            .collect();
        assert_eq!(textures, vec![5, 0, 1, 2, 4, 3]);
    }

    #[test]
    fn test_front_face_follows_facing() {
        // The south face (last in box order) is the chest front.
        let table = table();
        for variant in ChestVariant::ALL {
            let front = table.get(variant)[5];
            let expected = variant.facing().direction().normal();
            let normal = front.normal();
            for axis in 0..3 {
                assert!((normal[axis] - expected[axis]).abs() < 1e-5, "{}", variant);
            }
        }
    }

    #[test]
    fn test_halves_join_into_double_chest() {
        let table = table();
        // Left half at x = 0 and right half at x = 1, both facing south.
        let left_max_x = table
            .get(ChestVariant::LeftSouth)
            .iter()
            .flat_map(|p| p.corners())
            .map(|c| c[0])
            .fold(f32::MIN, f32::max);
        let right_min_x = table
            .get(ChestVariant::RightSouth)
            .iter()
            .flat_map(|p| p.corners())
            .map(|c| c[0])
            .fold(f32::MAX, f32::min);

        assert_eq!(left_max_x, 1.0);
        assert_eq!(right_min_x, 0.0);
    }

    #[test]
    fn test_open_side_faces_resolved_partner() {
        let table = table();
        let codes = [
            (Facing::North, ORIENTATION_NORTH),
            (Facing::South, ORIENTATION_SOUTH),
            (Facing::West, ORIENTATION_WEST),
            (Facing::East, ORIENTATION_EAST),
        ];
        let sides = [Direction::West, Direction::East, Direction::North, Direction::South];

        for (facing, code) in codes {
            let mut paired = 0;
            for side in sides {
                let variant = resolve_variant(code, &NeighborMatches::only(side));
                if variant.kind() == ChestKind::Single {
                    continue;
                }
                assert_eq!(variant.facing(), facing);
                paired += 1;

                let (dx, _, dz) = side.offset();
                let axis = if dx != 0 { 0 } else { 2 };
                let coords: Vec<f32> = table
                    .get(variant)
                    .iter()
                    .flat_map(|p| p.corners())
                    .map(|c| c[axis])
                    .collect();
                let min = coords.iter().copied().fold(f32::MAX, f32::min);
                let max = coords.iter().copied().fold(f32::MIN, f32::max);

                // Flush with the block edge towards the partner, inset on the far side.
                if dx + dz > 0 {
                    assert!((max - 1.0).abs() < 1e-6, "{} partner {}", variant, side);
                    assert!((min - OFF1).abs() < 1e-6, "{} partner {}", variant, side);
                } else {
                    assert!(min.abs() < 1e-6, "{} partner {}", variant, side);
                    assert!((max - OFF15).abs() < 1e-6, "{} partner {}", variant, side);
                }
            }
            assert_eq!(paired, 2, "{}", facing);
        }
    }

    #[test]
    fn test_box_constants_are_valid_extents() {
        for spec in [SINGLE_BOX, LEFT_BOX, RIGHT_BOX] {
            let checked = BoxExtents::new(spec.extents.min, spec.extents.max);
            assert_eq!(checked.unwrap(), spec.extents);
        }
    }

    #[test]
    fn test_rotated_models_keep_patch_order() {
        let table = table();
        let south = table.get(ChestVariant::RightSouth);
        let west = table.get(ChestVariant::RightWest);
        // Down and Up faces stay horizontal in every facing.
        for index in [0, 1] {
            assert!((west[index].normal()[1] - south[index].normal()[1]).abs() < 1e-5);
        }
        let side = Direction::West.rotate_y(QuarterTurn::Quarter).normal();
        let rotated = west[2].normal();
        for axis in 0..3 {
            assert!((rotated[axis] - side[axis]).abs() < 1e-5);
        }
    }

    #[test]
    fn test_shapes_are_distinct() {
        let table = table();
        for facing in Facing::ALL {
            let models: Vec<_> = ChestKind::ALL
                .iter()
                .map(|kind| table.get(ChestVariant::new(*kind, facing)))
                .collect();
            assert_ne!(models[0], models[1]);
            assert_ne!(models[1], models[2]);
        }
    }

    /// Records the turns requested by the builder.
    struct RecordingFactory {
        inner: StandardPatchFactory,
        turns: RefCell<Vec<QuarterTurn>>,
    }

    impl PatchFactory for RecordingFactory {
        fn build_box(&self, spec: &BoxSpec) -> [Patch; 6] {
            self.inner.build_box(spec)
        }

        fn rotated_patch(&self, patch: &Patch, turn: QuarterTurn, texture: TextureIndex) -> Patch {
            self.turns.borrow_mut().push(turn);
            self.inner.rotated_patch(patch, turn, texture)
        }
    }

    #[test]
    fn test_derived_models_only_use_rotation() {
        let factory = RecordingFactory {
            inner: StandardPatchFactory::new(),
            turns: RefCell::new(Vec::new()),
        };
        build_model_table(&factory);

        let turns = factory.turns.borrow();
        // 3 shapes x 3 derived facings x 6 faces
        assert_eq!(turns.len(), 54);
        assert!(turns.iter().all(|t| !t.is_identity()));
        for degrees in [90, 180, 270] {
            let count = turns.iter().filter(|t| t.degrees() == degrees).count();
            assert_eq!(count, 18);
        }
    }
}
