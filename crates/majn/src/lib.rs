//! # MAJN
//!
//! The walking part of the voxel world: an observer that looks around and
//! moves through [`majn_world::World`] without passing through solid blocks.
//!
//! ## Architecture
//!
//! ```text
//! window events ──▶ InputState ──▶ Session::tick ──▶ Mover::move_relative
//!                                        │                  │
//!                                        ▼                  ▼
//!                              visible_chunks()      BlockSource (World)
//! ```
//!
//! ## Modules
//!
//! - `mover`: orientation and axis-sliding collision
//! - `input`: held keys, toggles and mouse deltas
//! - `session`: per-frame glue, block targeting and the debug overlay text
//! - `config`: TOML engine configuration
//! - `error`: configuration errors

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod input;
pub mod mover;
pub mod session;

pub use config::{EngineConfig, MoverConfig, SessionConfig, WorldConfig};
pub use error::{ConfigError, ConfigResult};
pub use input::{InputState, MoveKey};
pub use mover::{MoveOutcome, Mover};
pub use session::Session;
