//! Camera navigation: two mutually exclusive modes over one camera.
//!
//! Mode selection is external to the controllers themselves (a key binding
//! here; any UI could drive [`NextState<CameraMode>`] the same way). Each
//! controller owns its state as a component on the camera entity and is the
//! only writer of that state.

use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;

use crate::input::InputAction;

pub mod first_person;
pub mod orbit;

/// Spawnpoint assumed before any document has arrived.
pub const DEFAULT_SPAWNPOINT: Vec3 = Vec3::new(0.0, 2.0, 5.0);

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Damped rotate/pan/zoom around a pivot.
    #[default]
    Orbit,
    /// Pointer-locked walkthrough.
    FirstPerson,
}

#[derive(Component)]
pub struct MainCamera;

pub(super) fn plugin(app: &mut App) {
    app.init_state::<CameraMode>();

    app.add_systems(Startup, spawn_camera);
    app.add_systems(Update, switch_mode);

    orbit::plugin(app);
    first_person::plugin(app);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 500.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        orbit::OrbitController::from_spawnpoint(DEFAULT_SPAWNPOINT),
        first_person::FirstPersonController::default(),
    ));
}

fn switch_mode(
    actions: Res<ActionState<InputAction>>,
    mode: Res<State<CameraMode>>,
    mut next: ResMut<NextState<CameraMode>>,
) {
    if actions.just_pressed(&InputAction::ToggleCameraMode) {
        let target = match mode.get() {
            CameraMode::Orbit => CameraMode::FirstPerson,
            CameraMode::FirstPerson => CameraMode::Orbit,
        };
        info!("camera mode: {target:?}");
        next.set(target);
    }
}

/// The spawnpoint of the active document, or the default before one exists.
pub fn active_spawnpoint(active: &crate::world::ActiveWorld) -> Vec3 {
    active
        .spec
        .as_ref()
        .map(|spec| spec.spawnpoint)
        .unwrap_or(DEFAULT_SPAWNPOINT)
}
