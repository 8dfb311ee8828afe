//! Zone debug volumes: translucent, unlit boxes that exist only for
//! inspection. They are spawned with the scene but shown only while the
//! debug toggle is on, so flipping the toggle never recompiles anything.

use bevy::prelude::*;
use shared::ZonePlan;
use shared::constants::{ZONE_COLOR, ZONE_OPACITY};

use super::parse_color_or;

/// Marker for zone volumes so the debug toggle can flip their visibility.
#[derive(Component)]
pub struct ZoneVolumeNode;

pub fn spawn_zone(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    plan: &ZonePlan,
    debug_enabled: bool,
) {
    let color = parse_color_or(ZONE_COLOR, Color::srgb(0.0, 1.0, 0.0)).with_alpha(ZONE_OPACITY);

    commands.spawn((
        ChildOf(root),
        ZoneVolumeNode,
        Name::new(format!("zone:{}", plan.id)),
        Transform::from_translation(plan.volume.center),
        Mesh3d(meshes.add(Cuboid::new(
            plan.volume.extents.x,
            plan.volume.extents.y,
            plan.volume.extents.z,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        if debug_enabled {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        },
    ));
}
