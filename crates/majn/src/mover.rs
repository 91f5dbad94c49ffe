//! # Mover
//!
//! The observer that walks through the world: an eye position, a yaw/pitch
//! orientation, and a point-sampled collision body.
//!
//! Features:
//! - Mouse-look with clamped pitch and wrapped yaw
//! - Yaw-relative movement, resolved one axis at a time so it slides along walls
//! - 18-point collision constellation around the body
//!
//! There is no gravity. Vertical movement only happens on request.

use majn_world::{look_direction, BlockSource};

use crate::config::MoverConfig;

/// Offset from the feet and from the eye to the two sample levels.
const SAMPLE_INSET: f32 = 0.1;

/// Samples per level: centre, four cardinal, four diagonal.
const SAMPLES_PER_LEVEL: usize = 9;

/// Total collision samples.
pub const SAMPLE_COUNT: usize = SAMPLES_PER_LEVEL * 2;

// ============================================================================
// MOVE OUTCOME
// ============================================================================

/// Which axes of a [`Mover::move_relative`] call were refused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct MoveOutcome {
    /// The x step was refused.
    pub blocked_x: bool,
    /// The y step was refused.
    pub blocked_y: bool,
    /// The z step was refused.
    pub blocked_z: bool,
}

impl MoveOutcome {
    /// Returns true if any axis was refused.
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        self.blocked_x || self.blocked_y || self.blocked_z
    }
}

// ============================================================================
// MOVER
// ============================================================================

/// Position and orientation of the observer.
#[derive(Clone, Debug, PartialEq)]
pub struct Mover {
    /// Eye position in world space.
    position: [f32; 3],
    /// Degrees, `[0, 360)`. 0 looks along -Z, 90 along +X.
    yaw: f32,
    /// Degrees, within `±pitch_limit`. Positive looks down.
    pitch: f32,
    config: MoverConfig,
}

impl Mover {
    /// Creates a mover at `position` looking along -Z.
    #[must_use]
    pub fn new(position: [f32; 3], config: MoverConfig) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            config,
        }
    }

    /// Eye position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> [f32; 3] {
        self.position
    }

    /// Yaw in degrees.
    #[inline]
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[inline]
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Tuning this mover was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &MoverConfig {
        &self.config
    }

    /// Unit vector the eye looks along, pitch included.
    #[must_use]
    pub fn look_direction(&self) -> [f32; 3] {
        look_direction(self.yaw, self.pitch)
    }

    /// Applies raw mouse deltas.
    ///
    /// Both deltas are scaled by the mouse sensitivity. Pitch is clamped to
    /// the pitch limit and yaw wraps into `[0, 360)`.
    pub fn rotate(&mut self, d_pitch: f32, d_yaw: f32) {
        let sensitivity = self.config.mouse_sensitivity;
        let limit = self.config.pitch_limit;

        self.pitch = (self.pitch + d_pitch * sensitivity).clamp(-limit, limit);

        let mut yaw = (self.yaw + d_yaw * sensitivity).rem_euclid(360.0);
        // rem_euclid on f32 can round up to exactly 360.
        if yaw >= 360.0 {
            yaw = 0.0;
        }
        self.yaw = yaw;
    }

    /// Moves relative to the current yaw.
    ///
    /// `forward` and `right` are turned into world x/z by the yaw alone;
    /// pitch never tilts movement. `up` is world y. Each axis is tried in
    /// turn (x, then y, then z) against the position the previous axes left
    /// behind, and only applied if the body would be clear there.
    ///
    /// Without a world every step is applied.
    pub fn move_relative(
        &mut self,
        forward: f32,
        right: f32,
        up: f32,
        world: Option<&mut dyn BlockSource>,
    ) -> MoveOutcome {
        let yaw_rad = self.yaw.to_radians();
        let (sin_yaw, cos_yaw) = yaw_rad.sin_cos();

        let delta = [
            forward * sin_yaw + right * cos_yaw,
            up,
            -forward * cos_yaw + right * sin_yaw,
        ];

        let Some(world) = world else {
            for (axis, d) in delta.iter().enumerate() {
                self.position[axis] += d;
            }
            return MoveOutcome::default();
        };

        let mut blocked = [false; 3];
        for axis in 0..3 {
            let mut candidate = self.position;
            candidate[axis] += delta[axis];

            if self.collides_at(candidate, world) {
                blocked[axis] = true;
            } else {
                self.position = candidate;
            }
        }

        let outcome = MoveOutcome {
            blocked_x: blocked[0],
            blocked_y: blocked[1],
            blocked_z: blocked[2],
        };
        if outcome.is_blocked() {
            tracing::trace!(
                "Move blocked at ({:.2}, {:.2}, {:.2}): x={} y={} z={}",
                self.position[0],
                self.position[1],
                self.position[2],
                outcome.blocked_x,
                outcome.blocked_y,
                outcome.blocked_z
            );
        }
        outcome
    }

    /// Returns true if the body, with its eye at `(x, y, z)`, overlaps a
    /// solid block.
    ///
    /// Without a world nothing collides.
    pub fn is_colliding(&self, x: f32, y: f32, z: f32, world: Option<&mut dyn BlockSource>) -> bool {
        world.is_some_and(|world| self.collides_at([x, y, z], world))
    }

    /// The collision samples for an eye at `eye`.
    ///
    /// First the nine feet samples, then the nine head samples. Each level is
    /// the centre, then +X, -X, +Z, -Z at the body radius, then the four
    /// diagonals at the same distance.
    #[must_use]
    pub fn sample_points(&self, eye: [f32; 3]) -> [[f32; 3]; SAMPLE_COUNT] {
        let r = self.config.player_radius;
        let d = r * std::f32::consts::FRAC_1_SQRT_2;
        let offsets: [[f32; 2]; SAMPLES_PER_LEVEL] = [
            [0.0, 0.0],
            [r, 0.0],
            [-r, 0.0],
            [0.0, r],
            [0.0, -r],
            [d, d],
            [d, -d],
            [-d, d],
            [-d, -d],
        ];
        let levels = [
            eye[1] - self.config.player_height + SAMPLE_INSET,
            eye[1] - SAMPLE_INSET,
        ];

        let mut points = [[0.0; 3]; SAMPLE_COUNT];
        for (level, y) in levels.iter().enumerate() {
            for (i, [ox, oz]) in offsets.iter().enumerate() {
                points[level * SAMPLES_PER_LEVEL + i] = [eye[0] + ox, *y, eye[2] + oz];
            }
        }
        points
    }

    /// Returns true if any collision sample lands in the given block.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn occupies(&self, block: [i32; 3]) -> bool {
        self.sample_points(self.position)
            .iter()
            .any(|p| p.map(|c| c.floor() as i32) == block)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn collides_at(&self, eye: [f32; 3], world: &mut dyn BlockSource) -> bool {
        self.sample_points(eye).iter().any(|p| {
            world.is_solid_at(
                p[0].floor() as i32,
                p[1].floor() as i32,
                p[2].floor() as i32,
            )
        })
    }
}
