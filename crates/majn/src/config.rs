//! # Engine Configuration
//!
//! Loaded once at startup from TOML. Every field has a default, so a file
//! only needs the values it changes:
//!
//! ```toml
//! [world]
//! chunk_height = 32
//!
//! [mover]
//! move_speed = 0.2
//! ```

use std::path::Path;

use majn_world::{ChunkDims, MAX_CHUNK_RADIUS};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Largest accepted render radius, in chunks.
pub const MAX_RENDER_RADIUS: u32 = MAX_CHUNK_RADIUS;

/// Top-level engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Chunk extents.
    pub world: WorldConfig,
    /// Mover tuning.
    pub mover: MoverConfig,
    /// Session tuning.
    pub session: SessionConfig,
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys, and
    /// the errors of [`EngineConfig::validate`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`EngineConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::World`] for bad chunk extents and
    /// [`ConfigError::Invalid`] for any other out-of-range value.
    pub fn validate(&self) -> ConfigResult<()> {
        self.world.dims()?;
        self.mover.validate()?;
        self.session.validate()
    }
}

/// Chunk extents in blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Blocks along x.
    pub chunk_width: i32,
    /// Blocks along y.
    pub chunk_height: i32,
    /// Blocks along z.
    pub chunk_depth: i32,
}

impl WorldConfig {
    /// Validated chunk extents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::World`] if any extent is not positive.
    pub fn dims(&self) -> ConfigResult<ChunkDims> {
        Ok(ChunkDims::new(
            self.chunk_width,
            self.chunk_height,
            self.chunk_depth,
        )?)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        let dims = ChunkDims::DEFAULT;
        Self {
            chunk_width: dims.width(),
            chunk_height: dims.height(),
            chunk_depth: dims.depth(),
        }
    }
}

/// Mover tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoverConfig {
    /// Blocks moved per frame per held key.
    pub move_speed: f32,
    /// Degrees of rotation per unit of mouse motion.
    pub mouse_sensitivity: f32,
    /// Eye height above the feet, in blocks.
    pub player_height: f32,
    /// Horizontal radius of the collision samples, in blocks.
    pub player_radius: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
}

impl MoverConfig {
    fn validate(&self) -> ConfigResult<()> {
        non_negative("mover.move_speed", self.move_speed)?;
        non_negative("mover.mouse_sensitivity", self.mouse_sensitivity)?;
        non_negative("mover.player_height", self.player_height)?;
        non_negative("mover.player_radius", self.player_radius)?;
        if !(self.pitch_limit > 0.0 && self.pitch_limit < 90.0) {
            return Err(ConfigError::Invalid(format!(
                "mover.pitch_limit must be in (0, 90), got {}",
                self.pitch_limit
            )));
        }
        Ok(())
    }
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            mouse_sensitivity: 0.1,
            player_height: 1.8,
            player_radius: 0.3,
            pitch_limit: 89.0,
        }
    }
}

/// Session tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Chunks drawn around the mover in each horizontal direction.
    pub render_radius: u32,
    /// Maximum distance at which a block can be targeted.
    pub reach: f32,
}

impl SessionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.render_radius > MAX_RENDER_RADIUS {
            return Err(ConfigError::Invalid(format!(
                "session.render_radius must be at most {MAX_RENDER_RADIUS}, got {}",
                self.render_radius
            )));
        }
        non_negative("session.reach", self.reach)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            render_radius: 1,
            reach: 5.0,
        }
    }
}

fn non_negative(name: &str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
