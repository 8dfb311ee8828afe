//! First-person walkthrough: a two-state (unlocked/locked) pointer-capture
//! machine plus look/walk updates that run only while locked.
//!
//! There is deliberately no collision against walls or entities — the camera
//! may walk through geometry.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use leafwing_input_manager::prelude::ActionState;

use super::{CameraMode, MainCamera, active_spawnpoint};
use crate::input::InputAction;
use crate::world::ActiveWorld;

/// Radians of look per mouse-delta unit.
const LOOK_SENSITIVITY: f32 = 0.002;

/// Walk speed, meters per second.
const WALK_SPEED: f32 = 5.0;

/// Pitch is clamped to straight up/down; no roll, no inversion past vertical.
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2;

#[derive(Component, Default)]
pub struct FirstPersonController {
    /// Whether pointer capture is held. Mouse deltas and movement keys are
    /// ignored while unlocked.
    locked: bool,
    yaw: f32,
    pitch: f32,
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(CameraMode::FirstPerson), enter_walkthrough);
    app.add_systems(OnExit(CameraMode::FirstPerson), release_pointer);
    app.add_systems(
        Update,
        (request_pointer_lock, handle_release, look, walk)
            .chain()
            .run_if(in_state(CameraMode::FirstPerson)),
    );
}

/// Drop the camera at the spawnpoint, carrying over its current heading.
fn enter_walkthrough(
    active: Res<ActiveWorld>,
    mut query: Query<(&mut FirstPersonController, &mut Transform), With<MainCamera>>,
) {
    let Ok((mut controller, mut transform)) = query.single_mut() else {
        return;
    };

    transform.translation = active_spawnpoint(&active);
    let (yaw, pitch, _roll) = transform.rotation.to_euler(EulerRot::YXZ);
    controller.yaw = yaw;
    controller.pitch = clamp_pitch(pitch);
    controller.locked = false;
}

/// Click inside the viewport requests pointer capture: unlocked → locked.
///
/// The platform may still refuse the grab (Bevy logs the winit error); the
/// worst case is a locked controller that reads zero deltas until escape.
fn request_pointer_lock(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
    mut query: Query<&mut FirstPersonController, With<MainCamera>>,
) {
    let Ok(mut controller) = query.single_mut() else {
        return;
    };
    if controller.locked || !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(mut cursor) = cursor.single_mut() else {
        warn!("pointer lock rejected: no primary window cursor");
        return;
    };
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
    controller.locked = true;
}

/// The capture-release signal (escape): locked → unlocked.
fn handle_release(
    keys: Res<ButtonInput<KeyCode>>,
    cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
    query: Query<&mut FirstPersonController, With<MainCamera>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        unlock(cursor, query);
    }
}

/// Leaving walkthrough mode always gives the pointer back.
fn release_pointer(
    cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
    query: Query<&mut FirstPersonController, With<MainCamera>>,
) {
    unlock(cursor, query);
}

fn unlock(
    mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
    mut query: Query<&mut FirstPersonController, With<MainCamera>>,
) {
    if let Ok(mut controller) = query.single_mut() {
        controller.locked = false;
    }
    if let Ok(mut cursor) = cursor.single_mut() {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}

fn look(
    motion: Res<AccumulatedMouseMotion>,
    mut query: Query<(&mut FirstPersonController, &mut Transform), With<MainCamera>>,
) {
    let Ok((mut controller, mut transform)) = query.single_mut() else {
        return;
    };
    if !controller.locked || motion.delta == Vec2::ZERO {
        return;
    }

    controller.yaw -= motion.delta.x * LOOK_SENSITIVITY;
    controller.pitch = clamp_pitch(controller.pitch - motion.delta.y * LOOK_SENSITIVITY);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, controller.yaw, controller.pitch, 0.0);
}

fn walk(
    time: Res<Time>,
    actions: Res<ActionState<InputAction>>,
    mut query: Query<(&FirstPersonController, &mut Transform), With<MainCamera>>,
) {
    let Ok((controller, mut transform)) = query.single_mut() else {
        return;
    };
    if !controller.locked {
        return;
    }

    let axis = actions.axis_pair(&InputAction::Move);
    let forward = *transform.forward();
    transform.translation += walk_delta(axis, forward, time.delta_secs());
}

/// Frame-rate-independent walk step.
///
/// Forward/back move along the view direction projected onto the horizontal
/// plane; strafe along the camera's right. The combined direction is
/// normalized before scaling so diagonals are no faster than straight lines.
#[inline]
fn walk_delta(axis: Vec2, forward: Vec3, dt: f32) -> Vec3 {
    let planar_forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let right = planar_forward.cross(Vec3::Y);

    let direction = (planar_forward * axis.y + right * axis.x).normalize_or_zero();
    direction * WALK_SPEED * dt
}

#[inline]
fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-MAX_PITCH, MAX_PITCH)
}
