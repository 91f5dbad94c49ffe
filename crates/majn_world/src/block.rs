//! # Blocks
//!
//! The smallest addressable unit of the world. A [`Block`] is an immutable
//! value carrying a [`BlockType`]; chunks hold exactly one per cell and
//! replace the whole value when a cell changes.

/// Kind of a block.
///
/// New variants may be added; downstream code must keep a wildcard arm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BlockType {
    /// Empty space. Never collides, never drawn.
    #[default]
    Air,
    /// Dirt, the bulk of the terrain.
    Dirt,
    /// Grass, the top layer of the terrain.
    Grass,
}

impl BlockType {
    /// Returns true for every type except [`BlockType::Air`].
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Self::Air)
    }

    /// Flat RGB color used to draw the block, `None` for air.
    #[must_use]
    pub const fn color(self) -> Option<[f32; 3]> {
        match self {
            Self::Air => None,
            Self::Dirt => Some([0.6, 0.4, 0.2]),
            Self::Grass => Some([0.0, 0.8, 0.0]),
        }
    }

    /// Short lowercase name, used in debug output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Dirt => "dirt",
            Self::Grass => "grass",
        }
    }
}

/// A single block in the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    block_type: BlockType,
}

impl Block {
    /// Air block (empty).
    pub const AIR: Self = Self::new(BlockType::Air);
    /// Dirt block.
    pub const DIRT: Self = Self::new(BlockType::Dirt);
    /// Grass block.
    pub const GRASS: Self = Self::new(BlockType::Grass);

    /// Creates a block of the given type.
    #[inline]
    #[must_use]
    pub const fn new(block_type: BlockType) -> Self {
        Self { block_type }
    }

    /// Returns the block's type.
    #[inline]
    #[must_use]
    pub const fn block_type(self) -> BlockType {
        self.block_type
    }

    /// Returns true if this block blocks movement.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.block_type.is_solid()
    }
}

impl From<BlockType> for Block {
    fn from(block_type: BlockType) -> Self {
        Self::new(block_type)
    }
}
