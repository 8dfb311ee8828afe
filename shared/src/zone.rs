//! Debug volumes derived from zone bounds.
//!
//! Zone corners carry no per-axis ordering guarantee, so the two corners are
//! reduced to per-axis extrema before anything else; extents can never come
//! out negative. Flat footprints (zero vertical extent) are inflated to a
//! thin visible slab.

use crate::constants::ZONE_MIN_HEIGHT;
use glam::Vec3;

/// Center and full extents of one zone's render volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneVolume {
    pub center: Vec3,
    pub extents: Vec3,
}

/// Compute the render volume for a pair of (unordered) corner bounds.
pub fn build_zone_volume(bounds: &[Vec3; 2]) -> ZoneVolume {
    let min = bounds[0].min(bounds[1]);
    let max = bounds[0].max(bounds[1]);

    let mut extents = max - min;
    let mut center = (min + max) / 2.0;

    if extents.y < ZONE_MIN_HEIGHT {
        extents.y = ZONE_MIN_HEIGHT;
    }
    // A flat zone authored at ground level would z-fight the floor; lift its
    // center so the inflated slab sits on top. Elevated zones keep their
    // authored center.
    if center.y == 0.0 {
        center.y = ZONE_MIN_HEIGHT / 2.0;
    }

    ZoneVolume { center, extents }
}
