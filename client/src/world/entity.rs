//! Realizes compiled [`NodePlan`]s as scene nodes.
//!
//! Primitives become meshes immediately. Models load asynchronously through
//! the asset server: the node spawns with a wireframe placeholder child so
//! the scene is never empty-handed, and the placeholder is removed when the
//! scene instance is ready — or kept indefinitely if the load fails. Asset
//! handles give every entity referencing the same `src` its own spawned
//! instance over shared immutable model data, so per-entity render state is
//! never aliased.

use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use shared::constants::PLACEHOLDER_COLOR;
use shared::{GeometryParams, NodePlan, NodeTransform};

use super::{ActiveWorld, parse_color_or};

/// A model node whose scene instance has not arrived yet.
///
/// Tagged with the generation it was compiled under so completions that
/// outlive their document can be told apart from live ones.
#[derive(Component)]
pub struct PendingModel {
    pub generation: u32,
    placeholder: Entity,
}

/// The wireframe stand-in child of a pending model node.
#[derive(Component)]
pub struct ModelPlaceholder;

#[allow(clippy::too_many_arguments)]
pub fn spawn_node(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    root: Entity,
    generation: u32,
    id: &str,
    plan: &NodePlan,
) {
    match plan {
        NodePlan::Primitive {
            geometry,
            color,
            transform,
        } => {
            commands.spawn((
                ChildOf(root),
                Name::new(id.to_owned()),
                transform_from_plan(transform),
                Mesh3d(meshes.add(mesh_from_params(geometry))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: parse_color_or(color, Color::srgb(0.5, 0.5, 0.5)),
                    ..default()
                })),
            ));
        }

        NodePlan::Model {
            src,
            transform,
            placeholder,
        } => {
            let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(src.clone()));

            let node = commands
                .spawn((
                    ChildOf(root),
                    Name::new(id.to_owned()),
                    transform_from_plan(transform),
                    SceneRoot(scene),
                ))
                .id();

            let stand_in = commands
                .spawn((
                    ChildOf(node),
                    ModelPlaceholder,
                    Transform::from_translation(placeholder.offset),
                    Mesh3d(meshes.add(Cuboid::new(
                        placeholder.size.x,
                        placeholder.size.y,
                        placeholder.size.z,
                    ))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: parse_color_or(PLACEHOLDER_COLOR, Color::srgb(0.8, 0.8, 0.8)),
                        unlit: true,
                        ..default()
                    })),
                    Wireframe,
                    WireframeColor {
                        color: parse_color_or(PLACEHOLDER_COLOR, Color::srgb(0.8, 0.8, 0.8)),
                    },
                ))
                .id();

            commands
                .entity(node)
                .insert(PendingModel {
                    generation,
                    placeholder: stand_in,
                })
                .observe(on_model_ready);
        }
    }
}

/// The loaded model supersedes the placeholder at the same transform.
fn on_model_ready(
    ready: On<SceneInstanceReady>,
    pending: Query<&PendingModel>,
    mut commands: Commands,
) {
    let node = ready.event_target();
    let Ok(state) = pending.get(node) else {
        return;
    };
    commands.entity(state.placeholder).despawn();
    commands.entity(node).remove::<PendingModel>();
}

/// Watches in-flight model loads for failure and staleness.
///
/// A failed load is non-fatal: it is logged and the placeholder simply keeps
/// standing in. A rebuild despawns the old subtree in the same frame it bumps
/// the generation, so a stale tag here means a node somehow escaped that
/// sweep — discard it rather than let it linger beside the new scene.
pub fn poll_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    active: Res<ActiveWorld>,
    pending: Query<(Entity, &Name, &PendingModel, &SceneRoot)>,
) {
    for (node, name, state, scene) in &pending {
        if state.generation != active.generation {
            commands.entity(node).despawn();
            continue;
        }

        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(scene.0.id()) {
            warn!(
                "model '{}' failed to load: {err}; placeholder stays",
                name.as_str()
            );
            commands.entity(node).remove::<PendingModel>();
        }
    }
}

pub fn transform_from_plan(plan: &NodeTransform) -> Transform {
    Transform {
        translation: plan.translation,
        rotation: Quat::from_euler(
            EulerRot::XYZ,
            plan.rotation.x,
            plan.rotation.y,
            plan.rotation.z,
        ),
        scale: plan.scale,
    }
}

pub fn mesh_from_params(params: &GeometryParams) -> Mesh {
    match *params {
        GeometryParams::Box {
            width,
            height,
            depth,
        } => Cuboid::new(width, height, depth).into(),

        GeometryParams::Plane { width, depth } => {
            Plane3d::default().mesh().size(width, depth).build()
        }

        GeometryParams::Sphere { radius, segments } => {
            Sphere::new(radius).mesh().uv(segments, segments)
        }

        GeometryParams::Cylinder {
            radius,
            height,
            resolution,
        } => Cylinder::new(radius, height).mesh().resolution(resolution).build(),

        GeometryParams::Capsule {
            radius,
            length,
            latitudes,
            longitudes,
        } => Capsule3d::new(radius, length)
            .mesh()
            .latitudes(latitudes)
            .longitudes(longitudes)
            .build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_transform_maps_onto_bevy_transform() {
        let t = transform_from_plan(&NodeTransform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::ZERO,
            scale: Vec3::splat(0.5),
        });
        assert_eq!(t.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::splat(0.5));
    }

    #[test]
    fn yaw_only_rotation_survives_euler_conversion() {
        let t = transform_from_plan(&NodeTransform {
            translation: Vec3::ZERO,
            rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            scale: Vec3::ONE,
        });
        let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        assert!(t.rotation.angle_between(expected) < 1.0e-6);
    }
}
