//! # World
//!
//! The unbounded block grid. Chunks are generated the first time they are
//! touched and cached forever after; there is no unloading.
//!
//! Every query that may generate a chunk takes `&mut self`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::block::{Block, BlockType};
use crate::chunk::Chunk;
use crate::coord::{ChunkCoord, ChunkDims};

/// Initial capacity of the chunk map.
const INITIAL_CHUNK_CAPACITY: usize = 64;

/// Largest neighbourhood radius [`World::chunks_within`] honours, in chunks.
pub const MAX_CHUNK_RADIUS: u32 = 16;

/// Anything that can answer "what block is at this world position?".
///
/// [`World`] is the production implementation. Collision and raycasting only
/// go through this trait.
pub trait BlockSource {
    /// Block at the given world position, `None` if the source has no data
    /// there.
    fn block_at(&mut self, wx: i32, wy: i32, wz: i32) -> Option<Block>;

    /// Returns true if a non-air block exists at the given world position.
    #[inline]
    fn is_solid_at(&mut self, wx: i32, wy: i32, wz: i32) -> bool {
        self.block_at(wx, wy, wz).is_some_and(Block::is_solid)
    }
}

/// Flat terrain generator.
///
/// Fills every chunk the same way: dirt below the grass level, one layer of
/// grass at it, air above. The chunk coordinate is not consulted, so stacked
/// chunks repeat the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlatTerrain;

impl FlatTerrain {
    /// Generates the chunk at `coord`.
    #[must_use]
    pub fn generate(self, coord: ChunkCoord, dims: ChunkDims) -> Chunk {
        let mut chunk = Chunk::with_dims(coord, dims);
        let grass_level = dims.grass_level();

        for x in 0..dims.width() {
            for z in 0..dims.depth() {
                for y in 0..=grass_level {
                    let block_type = if y < grass_level {
                        BlockType::Dirt
                    } else {
                        BlockType::Grass
                    };
                    chunk.set_block(x, y, z, block_type);
                }
            }
        }

        chunk
    }
}

/// The voxel world: a read-through cache of generated chunks.
#[derive(Debug)]
pub struct World {
    /// Loaded chunks, keyed by chunk coordinate.
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Extents shared by every chunk.
    dims: ChunkDims,
    /// Generator for missing chunks.
    terrain: FlatTerrain,
}

impl World {
    /// Creates an empty world with 16x16x16 chunks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dims(ChunkDims::DEFAULT)
    }

    /// Creates an empty world with the given chunk extents.
    #[must_use]
    pub fn with_dims(dims: ChunkDims) -> Self {
        Self {
            chunks: HashMap::with_capacity(INITIAL_CHUNK_CAPACITY),
            dims,
            terrain: FlatTerrain,
        }
    }

    /// Chunk extents used by this world.
    #[inline]
    #[must_use]
    pub const fn dims(&self) -> ChunkDims {
        self.dims
    }

    /// Cache key for a chunk coordinate.
    ///
    /// Distinct triples always give distinct keys.
    #[inline]
    #[must_use]
    pub const fn chunk_key(cx: i32, cy: i32, cz: i32) -> ChunkCoord {
        ChunkCoord::new(cx, cy, cz)
    }

    /// Returns the chunk at the given chunk coordinate, generating it on a
    /// miss.
    ///
    /// Later calls with the same coordinate return the same chunk.
    pub fn get_chunk(&mut self, cx: i32, cy: i32, cz: i32) -> &Chunk {
        self.chunk_mut(Self::chunk_key(cx, cy, cz))
    }

    /// Cached chunk if it has been generated. Never generates.
    #[inline]
    #[must_use]
    pub fn loaded_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Number of chunks generated so far.
    #[inline]
    #[must_use]
    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Block at world coordinates.
    ///
    /// Generates the owning chunk if needed, so this is always `Some` for a
    /// valid world.
    pub fn get_block(&mut self, wx: i32, wy: i32, wz: i32) -> Option<Block> {
        let (coord, local) = self.dims.split(wx, wy, wz);
        self.chunk_mut(coord).get_block(local.x, local.y, local.z)
    }

    /// Replaces the block at world coordinates, generating the owning chunk
    /// first if needed.
    pub fn set_block(&mut self, wx: i32, wy: i32, wz: i32, block_type: BlockType) {
        let (coord, local) = self.dims.split(wx, wy, wz);
        tracing::debug!(
            "Block ({}, {}, {}) set to {}",
            wx,
            wy,
            wz,
            block_type.name()
        );
        self.chunk_mut(coord)
            .set_block(local.x, local.y, local.z, block_type);
    }

    /// The chunk holding the given world position plus its eight horizontal
    /// neighbours at the same chunk height.
    ///
    /// Order is unspecified. Meant as a rendering hint.
    pub fn chunks_near(&mut self, wx: i32, wy: i32, wz: i32) -> Vec<&Chunk> {
        self.chunks_within(wx, wy, wz, 1)
    }

    /// The `(2r + 1)²` chunks around the one holding the given world position,
    /// all at its chunk height.
    ///
    /// `radius` is clamped to [`MAX_CHUNK_RADIUS`]. Neighbours past the edge
    /// of the `i32` chunk grid are left out.
    #[allow(clippy::cast_possible_wrap)]
    pub fn chunks_within(&mut self, wx: i32, wy: i32, wz: i32, radius: u32) -> Vec<&Chunk> {
        let center = self.dims.chunk_of(wx, wy, wz);
        let r = radius.min(MAX_CHUNK_RADIUS) as i32;

        let mut coords = Vec::new();
        for dx in -r..=r {
            for dz in -r..=r {
                if let Some(coord) = center.offset(dx, 0, dz) {
                    self.chunk_mut(coord);
                    coords.push(coord);
                }
            }
        }

        coords
            .iter()
            .filter_map(|coord| self.chunks.get(coord))
            .collect()
    }

    /// Get-or-generate.
    fn chunk_mut(&mut self, coord: ChunkCoord) -> &mut Chunk {
        match self.chunks.entry(coord) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                entry.insert(Self::generate_chunk(self.terrain, coord, self.dims))
            }
        }
    }

    fn generate_chunk(terrain: FlatTerrain, coord: ChunkCoord, dims: ChunkDims) -> Chunk {
        tracing::debug!(
            "Generating chunk [{},{},{}]",
            coord.x,
            coord.y,
            coord.z
        );
        terrain.generate(coord, dims)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockSource for World {
    #[inline]
    fn block_at(&mut self, wx: i32, wy: i32, wz: i32) -> Option<Block> {
        self.get_block(wx, wy, wz)
    }
}
