//! # Chunk
//!
//! A fixed-size 3D container of blocks, identified by its chunk coordinate.
//!
//! ## Layout
//!
//! Blocks live in one contiguous buffer indexed as `((x * H) + y) * D + z`.
//! Every cell holds a block at all times; a new chunk is all air.
//!
//! ## Bounds
//!
//! Reads and writes treat out-of-range local coordinates differently:
//! - [`Chunk::get_block`] reports `None`
//! - [`Chunk::set_block`] does nothing
//!
//! Neither panics.

use crate::block::{Block, BlockType};
use crate::coord::{ChunkCoord, ChunkDims};

/// A chunk of world data.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// Chunk position in the world.
    coord: ChunkCoord,
    /// Extents of this chunk.
    dims: ChunkDims,
    /// Block data, `dims.volume()` cells.
    blocks: Box<[Block]>,
}

impl Chunk {
    /// Creates a new all-air chunk with the reference 16x16x16 extents.
    #[must_use]
    pub fn new(coord: ChunkCoord) -> Self {
        Self::with_dims(coord, ChunkDims::DEFAULT)
    }

    /// Creates a new all-air chunk with the given extents.
    #[must_use]
    pub fn with_dims(coord: ChunkCoord, dims: ChunkDims) -> Self {
        Self {
            coord,
            dims,
            blocks: vec![Block::AIR; dims.volume()].into_boxed_slice(),
        }
    }

    /// Returns the chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Returns the chunk extents.
    #[inline]
    #[must_use]
    pub const fn dims(&self) -> ChunkDims {
        self.dims
    }

    /// World position of local (0, 0, 0).
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> [i64; 3] {
        self.coord.origin(self.dims)
    }

    /// Linear index of an in-range local position.
    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.dims.contains(x, y, z) {
            return None;
        }
        let height = self.dims.height() as usize;
        let depth = self.dims.depth() as usize;
        Some((x as usize * height + y as usize) * depth + z as usize)
    }

    /// Gets the block at local coordinates.
    ///
    /// Returns `None` if any coordinate is outside the chunk.
    #[inline]
    #[must_use]
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Block> {
        self.index(x, y, z).map(|idx| self.blocks[idx])
    }

    /// Replaces the block at local coordinates.
    ///
    /// Out-of-range coordinates are ignored.
    #[inline]
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        if let Some(idx) = self.index(x, y, z) {
            self.blocks[idx] = Block::new(block_type);
        }
    }

    /// Number of non-air blocks.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|block| block.is_solid()).count()
    }

    /// Iterates the non-air blocks with their world positions.
    ///
    /// Positions are `i64` like [`Chunk::origin`]. This is what a renderer
    /// walks to draw the chunk.
    pub fn solid_blocks(&self) -> impl Iterator<Item = ([i64; 3], Block)> + '_ {
        let [ox, oy, oz] = self.origin();
        let height = self.dims.height() as usize;
        let depth = self.dims.depth() as usize;

        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.is_solid())
            .map(move |(idx, block)| {
                let x = (idx / (height * depth)) as i64;
                let y = ((idx / depth) % height) as i64;
                let z = (idx % depth) as i64;
                ([ox + x, oy + y, oz + z], *block)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chunk_is_all_air() {
        let chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
        for x in 0..16 {
            for y in 0..16 {
                for z in 0..16 {
                    assert_eq!(chunk.get_block(x, y, z), Some(Block::AIR));
                }
            }
        }
        assert_eq!(chunk.solid_count(), 0);
    }

    #[test]
    fn test_set_and_get_block() {
        let mut chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
        chunk.set_block(0, 0, 0, BlockType::Dirt);
        assert_eq!(chunk.get_block(0, 0, 0), Some(Block::DIRT));

        chunk.set_block(5, 5, 5, BlockType::Dirt);
        assert_eq!(chunk.get_block(5, 5, 5), Some(Block::DIRT));

        chunk.set_block(0, 0, 0, BlockType::Air);
        assert_eq!(chunk.get_block(0, 0, 0), Some(Block::AIR));
        assert_eq!(chunk.solid_count(), 1);
    }

    #[test]
    fn test_get_block_out_of_bounds() {
        let chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
        assert_eq!(chunk.get_block(-1, 0, 0), None);
        assert_eq!(chunk.get_block(16, 0, 0), None);
        assert_eq!(chunk.get_block(0, -1, 0), None);
        assert_eq!(chunk.get_block(0, 16, 0), None);
        assert_eq!(chunk.get_block(0, 0, -1), None);
        assert_eq!(chunk.get_block(0, 0, 16), None);
    }

    #[test]
    fn test_set_block_out_of_bounds_is_ignored() {
        let mut chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
        chunk.set_block(-1, 0, 0, BlockType::Dirt);
        chunk.set_block(16, 0, 0, BlockType::Dirt);
        chunk.set_block(0, -1, 0, BlockType::Dirt);
        chunk.set_block(0, 16, 0, BlockType::Dirt);
        chunk.set_block(0, 0, -1, BlockType::Dirt);
        chunk.set_block(0, 0, 16, BlockType::Dirt);

        assert_eq!(chunk.get_block(0, 0, 0), Some(Block::AIR));
        assert_eq!(chunk.get_block(15, 15, 15), Some(Block::AIR));
        assert_eq!(chunk.solid_count(), 0);
    }

    #[test]
    fn test_cells_do_not_alias() {
        let dims = ChunkDims::new(4, 3, 2).unwrap();
        let mut chunk = Chunk::with_dims(ChunkCoord::new(0, 0, 0), dims);
        chunk.set_block(3, 2, 1, BlockType::Grass);
        chunk.set_block(0, 0, 1, BlockType::Dirt);

        let mut solid = 0;
        for x in 0..4 {
            for y in 0..3 {
                for z in 0..2 {
                    if chunk.get_block(x, y, z) != Some(Block::AIR) {
                        solid += 1;
                    }
                }
            }
        }
        assert_eq!(solid, 2);
        assert_eq!(chunk.get_block(3, 2, 1), Some(Block::GRASS));
    }

    #[test]
    fn test_solid_blocks_report_world_positions() {
        let mut chunk = Chunk::new(ChunkCoord::new(-1, 2, 0));
        chunk.set_block(15, 0, 3, BlockType::Grass);

        let solids: Vec<_> = chunk.solid_blocks().collect();
        assert_eq!(solids, vec![([-1, 32, 3], Block::GRASS)]);
        assert_eq!(chunk.origin(), [-16, 32, 0]);
    }

    #[test]
    fn test_solid_blocks_at_the_far_edge() {
        let mut chunk = Chunk::new(ChunkCoord::new(i32::MAX, 0, i32::MIN));
        chunk.set_block(15, 0, 0, BlockType::Dirt);

        let far_x = i64::from(i32::MAX) * 16 + 15;
        let far_z = i64::from(i32::MIN) * 16;
        let solids: Vec<_> = chunk.solid_blocks().collect();
        assert_eq!(solids, vec![([far_x, 0, far_z], Block::DIRT)]);
    }
}
