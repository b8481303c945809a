//! Shared types used throughout the library.

mod direction;
mod transform;

pub use direction::{Direction, Facing};
pub use transform::QuarterTurn;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Numeric block type identifier (0 is air).
pub type BlockId = u32;

/// A block position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPosition {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position offset by a relative delta, or `None` if it leaves the i32 range.
    pub fn checked_offset(&self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }
}

/// Raw block state as stored in the map: type id plus data bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockState {
    /// Block type id.
    pub id: BlockId,
    /// Data value; for chests this is the orientation code.
    #[serde(default)]
    pub data: i32,
}

impl BlockState {
    pub const AIR: BlockState = BlockState { id: 0, data: 0 };

    pub fn new(id: BlockId, data: i32) -> Self {
        Self { id, data }
    }

    /// Check if this is an air block.
    pub fn is_air(&self) -> bool {
        self.id == 0
    }
}

/// Per-query view of the map around the block being rendered.
pub trait BlockContext {
    /// Type id of the block being rendered.
    fn block_type_id(&self) -> BlockId;

    /// Data value of the block being rendered.
    fn block_data(&self) -> i32;

    /// Type id of the block at a relative offset, or `None` when the
    /// position is outside the loaded data.
    fn block_type_id_at(&self, dx: i32, dy: i32, dz: i32) -> Option<BlockId>;
}

/// A block entry in a scene description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneBlock {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub id: BlockId,
    #[serde(default)]
    pub data: i32,
}

/// Sparse in-memory block storage.
#[derive(Debug, Clone, Default)]
pub struct BlockGrid {
    blocks: HashMap<BlockPosition, BlockState>,
}

impl BlockGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a block. Air removes any stored block.
    pub fn set(&mut self, pos: BlockPosition, state: BlockState) {
        if state.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    /// Builder-style variant of [`BlockGrid::set`].
    pub fn with_block(mut self, pos: BlockPosition, state: BlockState) -> Self {
        self.set(pos, state);
        self
    }

    /// Get the block at a position, if one is stored.
    pub fn get(&self, pos: BlockPosition) -> Option<BlockState> {
        self.blocks.get(&pos).copied()
    }

    /// Iterate over all stored (non-air) blocks.
    pub fn iter(&self) -> impl Iterator<Item = (BlockPosition, BlockState)> + '_ {
        self.blocks.iter().map(|(pos, state)| (*pos, *state))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Query context for the block at `pos`.
    pub fn context_at(&self, pos: BlockPosition) -> GridContext<'_> {
        GridContext {
            grid: self,
            pos,
            state: self.get(pos).unwrap_or(BlockState::AIR),
        }
    }
}

impl FromIterator<SceneBlock> for BlockGrid {
    fn from_iter<I: IntoIterator<Item = SceneBlock>>(iter: I) -> Self {
        let mut grid = BlockGrid::new();
        for block in iter {
            grid.set(
                BlockPosition::new(block.x, block.y, block.z),
                BlockState::new(block.id, block.data),
            );
        }
        grid
    }
}

/// [`BlockContext`] over a [`BlockGrid`] at a fixed position.
#[derive(Debug, Clone, Copy)]
pub struct GridContext<'a> {
    grid: &'a BlockGrid,
    pos: BlockPosition,
    state: BlockState,
}

impl BlockContext for GridContext<'_> {
    fn block_type_id(&self) -> BlockId {
        self.state.id
    }

    fn block_data(&self) -> i32 {
        self.state.data
    }

    fn block_type_id_at(&self, dx: i32, dy: i32, dz: i32) -> Option<BlockId> {
        let pos = self.pos.checked_offset(dx, dy, dz)?;
        self.grid.get(pos).map(|state| state.id)
    }
}
