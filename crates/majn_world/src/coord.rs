//! # Coordinates
//!
//! Three coordinate spaces are in play:
//!
//! - **World** (`i32` per axis): absolute block position, unbounded.
//! - **Chunk** ([`ChunkCoord`]): which chunk a block belongs to.
//! - **Local** ([`LocalPos`]): position inside that chunk, `0..extent`.
//!
//! World to chunk conversion uses floor division and floor modulo
//! (`div_euclid` / `rem_euclid`). Truncating division would map world x = -1
//! to chunk 0, local -1, which silently corrupts every negative-space query.

use crate::error::{WorldError, WorldResult};

/// Splits one world axis into `(chunk, local)` using floor semantics.
///
/// For any `chunk_size > 0` the result satisfies `0 <= local < chunk_size`
/// and `coord == chunk * chunk_size + local`.
///
/// ```
/// use majn_world::world_to_chunk;
///
/// assert_eq!(world_to_chunk(-1, 16), (-1, 15));
/// assert_eq!(world_to_chunk(17, 16), (1, 1));
/// ```
#[inline]
#[must_use]
pub const fn world_to_chunk(coord: i32, chunk_size: i32) -> (i32, i32) {
    debug_assert!(chunk_size > 0);
    (coord.div_euclid(chunk_size), coord.rem_euclid(chunk_size))
}

/// Extents of a chunk in blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkDims {
    width: i32,
    height: i32,
    depth: i32,
}

impl ChunkDims {
    /// 16x16x16, the reference chunk size.
    pub const DEFAULT: Self = Self {
        width: 16,
        height: 16,
        depth: 16,
    };

    /// Creates chunk extents.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] if any extent is not
    /// positive or the cell count does not fit in an `i32`.
    pub fn new(width: i32, height: i32, depth: i32) -> WorldResult<Self> {
        let volume = width
            .checked_mul(height)
            .and_then(|plane| plane.checked_mul(depth));
        if width <= 0 || height <= 0 || depth <= 0 || volume.is_none() {
            return Err(WorldError::InvalidDimensions {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Extent along x.
    #[inline]
    #[must_use]
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Extent along y.
    #[inline]
    #[must_use]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Extent along z.
    #[inline]
    #[must_use]
    pub const fn depth(self) -> i32 {
        self.depth
    }

    /// Number of cells in one chunk.
    #[inline]
    #[must_use]
    pub const fn volume(self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Local y of the grass layer in generated terrain.
    ///
    /// For a height of 1 this is -1, so the chunk stays all air.
    #[inline]
    #[must_use]
    pub const fn grass_level(self) -> i32 {
        self.height / 2 - 1
    }

    /// Returns true if the local position lies inside the chunk.
    #[inline]
    #[must_use]
    pub const fn contains(self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && z >= 0 && z < self.depth
    }

    /// Chunk that owns the given world block.
    #[inline]
    #[must_use]
    pub const fn chunk_of(self, wx: i32, wy: i32, wz: i32) -> ChunkCoord {
        ChunkCoord::new(
            wx.div_euclid(self.width),
            wy.div_euclid(self.height),
            wz.div_euclid(self.depth),
        )
    }

    /// Splits a world block position into its chunk and local position.
    #[inline]
    #[must_use]
    pub const fn split(self, wx: i32, wy: i32, wz: i32) -> (ChunkCoord, LocalPos) {
        let (cx, lx) = world_to_chunk(wx, self.width);
        let (cy, ly) = world_to_chunk(wy, self.height);
        let (cz, lz) = world_to_chunk(wz, self.depth);
        (ChunkCoord::new(cx, cy, cz), LocalPos::new(lx, ly, lz))
    }
}

impl Default for ChunkDims {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Chunk coordinate (identifies a chunk in the world grid).
///
/// This is the chunk cache key. Each axis keeps its sign, so `(1, -10, 0)` and
/// `(-1, 10, 0)` are different keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not blocks).
    pub x: i32,
    /// Y coordinate (in chunks, not blocks).
    pub y: i32,
    /// Z coordinate (in chunks, not blocks).
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinate shifted by whole chunks.
    ///
    /// `None` if any axis would leave the `i32` range.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    /// World position of the chunk's local (0, 0, 0) block.
    ///
    /// Widened to `i64`: every `i32` chunk coordinate is a valid key, but
    /// far chunks start beyond the `i32` block range.
    #[inline]
    #[must_use]
    pub const fn origin(self, dims: ChunkDims) -> [i64; 3] {
        [
            self.x as i64 * dims.width as i64,
            self.y as i64 * dims.height as i64,
            self.z as i64 * dims.depth as i64,
        ]
    }
}

/// Position of a block inside its chunk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalPos {
    /// Local X.
    pub x: i32,
    /// Local Y.
    pub y: i32,
    /// Local Z.
    pub z: i32,
}

impl LocalPos {
    /// Creates a new local position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_split_identity() {
        for size in [1, 3, 16, 32] {
            for coord in -100..=100 {
                let (chunk, local) = world_to_chunk(coord, size);
                assert!((0..size).contains(&local), "local {local} for {coord}/{size}");
                assert_eq!(chunk * size + local, coord);
            }
        }
    }

    #[test]
    fn test_negative_world_coords() {
        assert_eq!(world_to_chunk(-1, 16), (-1, 15));
        assert_eq!(world_to_chunk(-16, 16), (-1, 0));
        assert_eq!(world_to_chunk(-17, 16), (-2, 15));
        assert_eq!(world_to_chunk(17, 16), (1, 1));
        assert_eq!(world_to_chunk(0, 16), (0, 0));
    }

    #[test]
    fn test_split_per_axis() {
        let dims = ChunkDims::new(16, 32, 8).unwrap();
        let (chunk, local) = dims.split(17, 33, -5);
        assert_eq!(chunk, ChunkCoord::new(1, 1, -1));
        assert_eq!(local, LocalPos::new(1, 1, 3));
        assert_eq!(dims.chunk_of(17, 33, -5), chunk);
    }

    #[test]
    fn test_invalid_dims_rejected() {
        assert!(ChunkDims::new(0, 16, 16).is_err());
        assert!(ChunkDims::new(16, -1, 16).is_err());
        assert!(ChunkDims::new(16, 16, 0).is_err());
        assert!(ChunkDims::new(i32::MAX, 2, 1).is_err());
        assert_eq!(
            ChunkDims::new(-3, 4, 5),
            Err(WorldError::InvalidDimensions {
                width: -3,
                height: 4,
                depth: 5
            })
        );
    }

    #[test]
    fn test_grass_level() {
        assert_eq!(ChunkDims::DEFAULT.grass_level(), 7);
        assert_eq!(ChunkDims::new(16, 32, 16).unwrap().grass_level(), 15);
    }

    #[test]
    fn test_sign_permutations_are_distinct_keys() {
        let a = ChunkCoord::new(1, -10, 0);
        let b = ChunkCoord::new(-1, 10, 0);
        assert_ne!(a, b);
        assert_eq!(a.origin(ChunkDims::DEFAULT), [16, -160, 0]);
    }

    #[test]
    fn test_offset_stops_at_i32_edge() {
        let edge = ChunkCoord::new(i32::MAX, 0, i32::MIN);
        assert_eq!(edge.offset(1, 0, 0), None);
        assert_eq!(edge.offset(0, 0, -1), None);
        assert_eq!(
            edge.offset(-1, 2, 1),
            Some(ChunkCoord::new(i32::MAX - 1, 2, i32::MIN + 1))
        );
    }

    #[test]
    fn test_origin_of_extreme_chunks() {
        let dims = ChunkDims::DEFAULT;
        assert_eq!(
            ChunkCoord::new(i32::MAX, i32::MIN, 0).origin(dims),
            [i64::from(i32::MAX) * 16, i64::from(i32::MIN) * 16, 0]
        );
    }
}
