//! Realizes a [`RoomLayout`] as floor and wall meshes.

use bevy::prelude::*;
use shared::RoomLayout;
use shared::constants::{FLOOR_COLOR, WALL_COLOR};

use super::parse_color_or;

pub fn spawn_room(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    layout: &RoomLayout,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: parse_color_or(FLOOR_COLOR, Color::srgb(0.63, 0.63, 0.63)),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: parse_color_or(WALL_COLOR, Color::srgb(0.88, 0.88, 0.88)),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });

    commands.spawn((
        ChildOf(root),
        Name::new("floor"),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(layout.floor.width, layout.floor.depth)
                    .build(),
            ),
        ),
        MeshMaterial3d(floor_material),
    ));

    for (name, wall) in [
        ("wall_north", &layout.wall_north),
        ("wall_south", &layout.wall_south),
        ("wall_east", &layout.wall_east),
        ("wall_west", &layout.wall_west),
    ] {
        commands.spawn((
            ChildOf(root),
            Name::new(name),
            Transform::from_translation(wall.center),
            Mesh3d(meshes.add(Cuboid::new(wall.size.x, wall.size.y, wall.size.z))),
            MeshMaterial3d(wall_material.clone()),
        ));
    }
}
