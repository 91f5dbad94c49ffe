//! # Session
//!
//! Per-frame glue between input, the mover and the world. A windowed client
//! forwards its events here and draws whatever [`Session::visible_chunks`]
//! and [`Session::debug_lines`] return; the headless binary drives the same
//! API from a script.

use majn_world::{raycast, Block, BlockType, Chunk, ChunkDims, RaycastHit, World};

use crate::config::{EngineConfig, SessionConfig};
use crate::error::ConfigResult;
use crate::input::{InputState, MoveKey};
use crate::mover::{MoveOutcome, Mover};

/// Height of the spawn eye above the middle of the first chunk.
const SPAWN_HEIGHT_OFFSET: i32 = 3;
/// Spawn distance behind the middle of the first chunk, along +Z.
const SPAWN_DEPTH_OFFSET: i32 = 5;

/// One running world with one observer.
#[derive(Debug)]
pub struct Session {
    world: World,
    mover: Mover,
    input: InputState,
    config: SessionConfig,
    frame: u64,
}

impl Session {
    /// Builds the world and spawns the mover above the first chunk.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`EngineConfig::validate`].
    pub fn new(config: &EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        let dims = config.world.dims()?;
        let spawn = spawn_point(dims);

        tracing::info!(
            "Session started: chunks {}x{}x{}, spawn ({:.1}, {:.1}, {:.1})",
            dims.width(),
            dims.height(),
            dims.depth(),
            spawn[0],
            spawn[1],
            spawn[2]
        );

        Ok(Self {
            world: World::with_dims(dims),
            mover: Mover::new(spawn, config.mover),
            input: InputState::new(),
            config: config.session,
            frame: 0,
        })
    }

    /// The world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The world, for direct edits.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The observer.
    #[must_use]
    pub const fn mover(&self) -> &Mover {
        &self.mover
    }

    /// Input state.
    #[must_use]
    pub const fn input(&self) -> &InputState {
        &self.input
    }

    /// Frames ticked so far.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Records a movement key press or release.
    pub fn handle_key(&mut self, key: MoveKey, pressed: bool) {
        self.input.set_key(key, pressed);
    }

    /// Feeds an absolute cursor position and turns the view.
    pub fn handle_mouse(&mut self, x: f64, y: f64) {
        if let Some((d_pitch, d_yaw)) = self.input.mouse_moved(x, y) {
            self.mover.rotate(d_pitch, d_yaw);
        }
    }

    /// Flips pause and returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.input.toggle_pause();
        tracing::info!("Session {}", if paused { "paused" } else { "resumed" });
        paused
    }

    /// Flips the debug overlay and returns the new state.
    pub fn toggle_debug(&mut self) -> bool {
        self.input.toggle_debug()
    }

    /// Advances one frame.
    ///
    /// Returns `None` when nothing was attempted: while paused or with no
    /// movement key held.
    pub fn tick(&mut self) -> Option<MoveOutcome> {
        if self.input.is_paused() {
            return None;
        }
        self.frame += 1;

        let (forward, right, up) = self
            .input
            .movement_axes(self.mover.config().move_speed);
        if forward == 0.0 && right == 0.0 && up == 0.0 {
            return None;
        }

        Some(
            self.mover
                .move_relative(forward, right, up, Some(&mut self.world)),
        )
    }

    /// Chunks to draw this frame, around the block holding the eye.
    pub fn visible_chunks(&mut self) -> Vec<&Chunk> {
        let [x, y, z] = eye_block(self.mover.position());
        self.world.chunks_within(x, y, z, self.config.render_radius)
    }

    /// First solid block along the look direction, within reach.
    pub fn target_block(&mut self) -> Option<RaycastHit> {
        raycast(
            self.mover.position(),
            self.mover.look_direction(),
            self.config.reach,
            &mut self.world,
        )
    }

    /// Removes the targeted block. Returns true if a block was removed.
    pub fn break_target(&mut self) -> bool {
        let Some(hit) = self.target_block() else {
            return false;
        };
        let [x, y, z] = hit.voxel;
        self.world.set_block(x, y, z, BlockType::Air);
        true
    }

    /// Places a block against the targeted face.
    ///
    /// Refused when the cell is already solid or would overlap the mover.
    /// Returns true if the world changed.
    pub fn place_target(&mut self, block_type: BlockType) -> bool {
        let Some(hit) = self.target_block() else {
            return false;
        };
        let [x, y, z] = hit.adjacent();
        if self.world.get_block(x, y, z).is_some_and(Block::is_solid) {
            return false;
        }
        if self.mover.occupies([x, y, z]) {
            tracing::debug!("Placement at ({}, {}, {}) refused: overlaps mover", x, y, z);
            return false;
        }

        self.world.set_block(x, y, z, block_type);
        true
    }

    /// Overlay text: position, rotation, chunk and cache size.
    #[must_use]
    pub fn debug_lines(&self) -> Vec<String> {
        let [x, y, z] = self.mover.position();
        let [bx, by, bz] = eye_block([x, y, z]);
        let chunk = self.world.dims().chunk_of(bx, by, bz);
        vec![
            format!("X: {x:.2} Y: {y:.2} Z: {z:.2}"),
            format!(
                "Yaw: {:.1} Pitch: {:.1}",
                self.mover.yaw(),
                self.mover.pitch()
            ),
            format!("Chunk: {} {} {}", chunk.x, chunk.y, chunk.z),
            format!("Loaded chunks: {}", self.world.loaded_chunk_count()),
        ]
    }
}

/// Eye spawn point for the given chunk extents.
#[allow(clippy::cast_precision_loss)]
fn spawn_point(dims: ChunkDims) -> [f32; 3] {
    [
        (dims.width() / 2) as f32,
        (dims.height() / 2 + SPAWN_HEIGHT_OFFSET) as f32,
        (dims.depth() / 2 + SPAWN_DEPTH_OFFSET) as f32,
    ]
}

#[allow(clippy::cast_possible_truncation)]
fn eye_block(position: [f32; 3]) -> [i32; 3] {
    position.map(|c| c.floor() as i32)
}
