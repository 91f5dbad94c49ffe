//! Voxel raycasting for block selection.
//!
//! Grid walk (DDA) from the eye through the block lattice. The cell holding
//! the origin is never reported, so a ray cast from inside a block still
//! finds the next one along the ray.

use crate::world::BlockSource;

/// Directions shorter than this are treated as zero.
const MIN_DIRECTION_LENGTH: f32 = 0.0001;

/// One face of a block, named by the axis direction it points along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockFace {
    /// Faces +X.
    East,
    /// Faces -X.
    West,
    /// Faces +Y.
    Top,
    /// Faces -Y.
    Bottom,
    /// Faces +Z.
    South,
    /// Faces -Z.
    North,
}

impl BlockFace {
    /// Unit outward normal.
    #[must_use]
    pub const fn normal(self) -> [i32; 3] {
        match self {
            Self::East => [1, 0, 0],
            Self::West => [-1, 0, 0],
            Self::Top => [0, 1, 0],
            Self::Bottom => [0, -1, 0],
            Self::South => [0, 0, 1],
            Self::North => [0, 0, -1],
        }
    }

    /// Face a ray crosses when it steps along `axis` in direction `step`.
    const fn entered(axis: usize, step: i32) -> Self {
        match (axis, step > 0) {
            (0, true) => Self::West,
            (0, false) => Self::East,
            (1, true) => Self::Bottom,
            (1, false) => Self::Top,
            (_, true) => Self::North,
            (_, false) => Self::South,
        }
    }
}

/// Result of a raycast against the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    /// The block that was hit.
    pub voxel: [i32; 3],
    /// The face the ray entered through.
    pub face: BlockFace,
    /// Distance from the origin to the entry point.
    pub distance: f32,
    /// Entry point in world space.
    pub hit_point: [f32; 3],
}

impl RaycastHit {
    /// Cell in front of the hit face, where a new block would be placed.
    #[must_use]
    pub const fn adjacent(&self) -> [i32; 3] {
        let n = self.face.normal();
        [
            self.voxel[0] + n[0],
            self.voxel[1] + n[1],
            self.voxel[2] + n[2],
        ]
    }
}

/// Look direction for a yaw/pitch pair in degrees.
///
/// Yaw 0 looks along -Z and positive yaw turns toward +X. Positive pitch
/// looks down, matching how mouse motion feeds the pitch.
#[must_use]
pub fn look_direction(yaw: f32, pitch: f32) -> [f32; 3] {
    let yaw_rad = yaw.to_radians();
    let pitch_rad = pitch.to_radians();
    [
        yaw_rad.sin() * pitch_rad.cos(),
        -pitch_rad.sin(),
        -yaw_rad.cos() * pitch_rad.cos(),
    ]
}

/// Casts a ray and returns the first solid block within `max_distance`.
///
/// Returns `None` for a zero-length direction, a `max_distance` that is
/// negative or not finite, an origin outside the `i32` block range, or when
/// nothing is hit.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn raycast(
    origin: [f32; 3],
    direction: [f32; 3],
    max_distance: f32,
    source: &mut dyn BlockSource,
) -> Option<RaycastHit> {
    let len = (direction[0].powi(2) + direction[1].powi(2) + direction[2].powi(2)).sqrt();
    if !len.is_finite() || len < MIN_DIRECTION_LENGTH {
        return None;
    }
    if !(max_distance.is_finite() && max_distance >= 0.0) {
        return None;
    }
    let block_range = i32::MIN as f32..i32::MAX as f32;
    if !origin.iter().all(|o| block_range.contains(o)) {
        return None;
    }
    let dir = direction.map(|d| d / len);

    let mut voxel = origin.map(|o| o.floor() as i32);
    let step = dir.map(|d| if d >= 0.0 { 1 } else { -1 });

    // Ray length needed to cross one whole cell per axis.
    let t_delta = dir.map(|d| {
        if d.abs() < MIN_DIRECTION_LENGTH {
            f32::INFINITY
        } else {
            d.abs().recip()
        }
    });

    // Ray length to the first boundary per axis.
    let mut t_max = [0.0_f32; 3];
    for axis in 0..3 {
        t_max[axis] = if t_delta[axis].is_infinite() {
            f32::INFINITY
        } else if step[axis] > 0 {
            (voxel[axis] as f32 + 1.0 - origin[axis]) * t_delta[axis]
        } else {
            (origin[axis] - voxel[axis] as f32) * t_delta[axis]
        };
    }

    loop {
        let axis = if t_max[0] < t_max[1] && t_max[0] < t_max[2] {
            0
        } else if t_max[1] < t_max[2] {
            1
        } else {
            2
        };

        let distance = t_max[axis];
        if distance > max_distance {
            return None;
        }
        voxel[axis] = voxel[axis].checked_add(step[axis])?;
        t_max[axis] += t_delta[axis];

        if source.is_solid_at(voxel[0], voxel[1], voxel[2]) {
            return Some(RaycastHit {
                voxel,
                face: BlockFace::entered(axis, step[axis]),
                distance,
                hit_point: [
                    origin[0] + dir[0] * distance,
                    origin[1] + dir[1] * distance,
                    origin[2] + dir[2] * distance,
                ],
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockType;
    use crate::world::World;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_raycast_hits_ground() {
        let mut world = World::new();
        let hit = raycast([8.5, 11.0, 8.5], [0.0, -1.0, 0.0], 10.0, &mut world)
            .expect("ground below");

        assert_eq!(hit.voxel, [8, 7, 8]);
        assert_eq!(hit.face, BlockFace::Top);
        assert_close(hit.distance, 3.0);
        assert_close(hit.hit_point[1], 8.0);
        assert_eq!(hit.adjacent(), [8, 8, 8]);
    }

    #[test]
    fn test_raycast_respects_max_distance() {
        let mut world = World::new();
        assert!(raycast([8.5, 11.0, 8.5], [0.0, -1.0, 0.0], 2.5, &mut world).is_none());
    }

    #[test]
    fn test_raycast_skips_origin_cell() {
        let mut world = World::new();
        // Origin inside the grass block; the next hit is the dirt below it.
        let hit = raycast([3.5, 7.5, 3.5], [0.0, -1.0, 0.0], 5.0, &mut world)
            .expect("dirt below");
        assert_eq!(hit.voxel, [3, 6, 3]);
    }

    #[test]
    fn test_raycast_hits_wall_face() {
        let mut world = World::new();
        world.set_block(12, 9, 4, BlockType::Dirt);

        let hit = raycast([9.5, 9.5, 4.5], [1.0, 0.0, 0.0], 5.0, &mut world)
            .expect("wall ahead");
        assert_eq!(hit.voxel, [12, 9, 4]);
        assert_eq!(hit.face, BlockFace::West);
        assert_eq!(hit.adjacent(), [11, 9, 4]);
        assert_close(hit.distance, 2.5);
    }

    #[test]
    fn test_zero_direction() {
        let mut world = World::new();
        assert!(raycast([0.0, 10.0, 0.0], [0.0, 0.0, 0.0], 5.0, &mut world).is_none());
    }

    #[test]
    fn test_unusable_reach() {
        let mut world = World::new();
        let down = [0.0, -1.0, 0.0];
        for reach in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0] {
            assert!(raycast([0.5, 10.5, 0.5], down, reach, &mut world).is_none());
        }
        assert!(raycast([0.5, 10.5, 0.5], down, 0.0, &mut world).is_none());
        assert_eq!(world.loaded_chunk_count(), 0);
    }

    #[test]
    fn test_origin_outside_block_range() {
        let mut world = World::new();
        let east = [1.0, 0.0, 0.0];
        for origin in [
            [f32::NAN, 10.5, 0.5],
            [f32::INFINITY, 10.5, 0.5],
            [0.5, 10.5, 1.0e20],
        ] {
            assert!(raycast(origin, east, 5.0, &mut world).is_none());
        }
    }

    #[test]
    fn test_ray_stops_at_i32_edge() {
        let mut world = World::new();
        // Largest f32 below 2^31; the ray starts in the last addressable cell.
        let origin = [2_147_483_520.0, 10.5, 0.5];
        assert!(raycast(origin, [1.0, 0.0, 0.0], 500.0, &mut world).is_none());
    }

    #[test]
    fn test_look_direction() {
        let forward = look_direction(0.0, 0.0);
        assert_close(forward[0], 0.0);
        assert_close(forward[1], 0.0);
        assert_close(forward[2], -1.0);

        let east = look_direction(90.0, 0.0);
        assert_close(east[0], 1.0);
        assert_close(east[2], 0.0);

        let down = look_direction(0.0, 89.0);
        assert!(down[1] < -0.99);
    }

    #[test]
    fn test_face_normals_are_opposite_pairs() {
        let pairs = [
            (BlockFace::East, BlockFace::West),
            (BlockFace::Top, BlockFace::Bottom),
            (BlockFace::South, BlockFace::North),
        ];
        for (a, b) in pairs {
            let (na, nb) = (a.normal(), b.normal());
            assert_eq!([na[0] + nb[0], na[1] + nb[1], na[2] + nb[2]], [0, 0, 0]);
        }
    }
}
