//! # World Error Types
//!
//! Block queries never fail; the only error is building a world with
//! unusable chunk extents.

use thiserror::Error;

/// Errors that can occur while setting up a world.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// A chunk extent was zero or negative.
    #[error("invalid chunk dimensions {width}x{height}x{depth}: every extent must be positive")]
    InvalidDimensions {
        /// Requested width (x).
        width: i32,
        /// Requested height (y).
        height: i32,
        /// Requested depth (z).
        depth: i32,
    },
}

/// Result type for world setup.
pub type WorldResult<T> = Result<T, WorldError>;
