//! # MAJN World
//!
//! Chunked voxel storage for an unbounded block grid.
//!
//! ## Design Principles
//!
//! 1. **Chunked**: the world is split into fixed-size chunks, 16x16x16 by default
//! 2. **Lazy**: a chunk is generated the first time anything touches it
//! 3. **Deterministic**: a chunk's contents depend only on its extents
//! 4. **Total**: queries never panic on bad coordinates
//!
//! ## Core Components
//!
//! - `Block` / `BlockType`: what occupies a cell
//! - `Chunk`: flat buffer of blocks with bounds-checked access
//! - `ChunkDims`, `ChunkCoord`, `world_to_chunk`: floor-based coordinate math
//! - `World`: read-through chunk cache and neighbourhood queries
//! - `BlockSource`: the seam collision and raycasting read through
//! - `raycast`: block selection along a look direction
//!
//! ## Example
//!
//! ```
//! use majn_world::{Block, World};
//!
//! let mut world = World::new();
//!
//! // Flat terrain: grass at y = 7, air above.
//! assert_eq!(world.get_block(100, 7, -250), Some(Block::GRASS));
//! assert_eq!(world.get_block(100, 8, -250), Some(Block::AIR));
//! assert_eq!(world.chunks_near(0, 0, 0).len(), 9);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod block;
pub mod chunk;
pub mod coord;
pub mod error;
pub mod raycast;
pub mod world;

pub use block::{Block, BlockType};
pub use chunk::Chunk;
pub use coord::{world_to_chunk, ChunkCoord, ChunkDims, LocalPos};
pub use error::{WorldError, WorldResult};
pub use raycast::{look_direction, raycast, BlockFace, RaycastHit};
pub use world::{BlockSource, FlatTerrain, World, MAX_CHUNK_RADIUS};
