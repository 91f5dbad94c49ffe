//! # Engine Error Types
//!
//! Only configuration can fail. Movement, input and block queries are total.

use std::path::PathBuf;

use majn_world::WorldError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),

    /// The world rejected the configured chunk extents.
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
