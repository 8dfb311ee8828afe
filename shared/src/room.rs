//! Room layout: one floor plane and four walls derived from a room size.
//!
//! The room is an axis-aligned box centered on the world origin in the
//! horizontal plane, floor at `y = 0`. Spawnpoint and entity positions are
//! expressed in this same centered frame, not relative to a corner.

use crate::constants::WALL_THICKNESS;
use glam::Vec3;

/// Horizontal floor plane, centered at the origin at `y = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorPlan {
    pub width: f32,
    pub depth: f32,
}

/// One wall: an axis-aligned box at a face midpoint of the room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallPlan {
    /// Full extents (width, height, depth), meters.
    pub size: Vec3,
    /// World-space center.
    pub center: Vec3,
}

/// Floor plus four walls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomLayout {
    pub floor: FloorPlan,
    /// Wall on the -Z face.
    pub wall_north: WallPlan,
    /// Wall on the +Z face.
    pub wall_south: WallPlan,
    /// Wall on the +X face.
    pub wall_east: WallPlan,
    /// Wall on the -X face.
    pub wall_west: WallPlan,
}

impl RoomLayout {
    pub fn walls(&self) -> [&WallPlan; 4] {
        [
            &self.wall_north,
            &self.wall_south,
            &self.wall_east,
            &self.wall_west,
        ]
    }
}

/// Derive floor and wall placement from a (width, height, depth) room size.
pub fn build_room(size: Vec3) -> RoomLayout {
    let Vec3 {
        x: width,
        y: height,
        z: depth,
    } = size;
    let t = WALL_THICKNESS;

    // North/south walls span the room width; east/west span its depth. Every
    // wall is vertically centered at half the room height.
    let z_size = Vec3::new(width, height, t);
    let x_size = Vec3::new(t, height, depth);
    let mid_y = height / 2.0;

    RoomLayout {
        floor: FloorPlan { width, depth },
        wall_north: WallPlan {
            size: z_size,
            center: Vec3::new(0.0, mid_y, -depth / 2.0),
        },
        wall_south: WallPlan {
            size: z_size,
            center: Vec3::new(0.0, mid_y, depth / 2.0),
        },
        wall_east: WallPlan {
            size: x_size,
            center: Vec3::new(width / 2.0, mid_y, 0.0),
        },
        wall_west: WallPlan {
            size: x_size,
            center: Vec3::new(-width / 2.0, mid_y, 0.0),
        },
    }
}
