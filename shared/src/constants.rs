//! Scene-wide constants shared by the compiler and the renderer.

/// Thickness of every room wall, meters.
pub const WALL_THICKNESS: f32 = 0.1;

/// Minimum vertical extent of a rendered zone volume, meters.
///
/// Zones are often authored as flat footprints (`min.y == max.y`); the
/// visualizer inflates them to this height so they stay visible.
pub const ZONE_MIN_HEIGHT: f32 = 0.1;

/// Default color for `role: character` entities (blue).
pub const CHARACTER_COLOR: &str = "#4A90D9";

/// Default color for `role: prop` entities, and for entities with no role
/// at all (gray).
pub const PROP_COLOR: &str = "#808080";

/// Default color for `role: structure` entities (brown).
pub const STRUCTURE_COLOR: &str = "#8B4513";

pub const WALL_COLOR: &str = "#e0e0e0";
pub const FLOOR_COLOR: &str = "#a0a0a0";

/// Solid sky background behind the scene.
pub const SKY_COLOR: &str = "#87CEEB";

/// Zone debug volumes: translucent green.
pub const ZONE_COLOR: &str = "#00ff00";
pub const ZONE_OPACITY: f32 = 0.1;

/// Wireframe stand-in shown while a model asset loads.
pub const PLACEHOLDER_COLOR: &str = "#cccccc";

/// (width, height, depth) of the model-loading placeholder box, meters.
pub const PLACEHOLDER_SIZE: [f32; 3] = [0.5, 1.0, 0.5];
