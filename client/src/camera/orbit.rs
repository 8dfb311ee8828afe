//! Orbital inspection: damped rotate/pan/zoom around a pivot.
//!
//! No discrete states — a continuous transform filter over pointer input.
//! Input writes *target* values; the per-frame update nudges the current
//! values toward them and recomputes the camera pose, which is what gives
//! the motion its damped feel.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use super::{CameraMode, MainCamera, active_spawnpoint};
use crate::world::ActiveWorld;

/// Initial camera offset above/behind the spawnpoint.
const SPAWN_OFFSET: Vec3 = Vec3::new(0.0, 3.0, 5.0);

const ROTATE_SPEED: f32 = 0.5;
const PAN_SPEED: f32 = 0.5;
const ZOOM_SPEED: f32 = 0.5;

/// Radians of orbit per pixel of drag, before `ROTATE_SPEED`.
const DRAG_RADIANS_PER_PIXEL: f32 = 0.005;

const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 50.0;

/// Polar angle from +Y. The ceiling keeps the camera above the floor plane;
/// the floor keeps it a hair off the pole so `look_at` has a well-defined up.
const MIN_POLAR: f32 = 1.0e-3;
const MAX_POLAR: f32 = std::f32::consts::PI / 2.1;

/// Exponential decay rate of the damping (`smooth_nudge`).
const DAMPING_DECAY: f32 = 10.0;

#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitController {
    focus: Vec3,
    yaw: f32,
    polar: f32,
    distance: f32,
    target_focus: Vec3,
    target_yaw: f32,
    target_polar: f32,
    target_distance: f32,
}

impl OrbitController {
    /// Controller looking at the world origin from spawnpoint + offset.
    pub fn from_spawnpoint(spawnpoint: Vec3) -> Self {
        Self::from_pose(spawnpoint + SPAWN_OFFSET, Vec3::ZERO)
    }

    /// Derive yaw/polar/distance from an eye and a focus point.
    pub fn from_pose(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = clamp_distance(offset.length());
        let polar = clamp_polar((offset.y / distance).clamp(-1.0, 1.0).acos());
        let yaw = offset.x.atan2(offset.z);

        Self {
            focus,
            yaw,
            polar,
            distance,
            target_focus: focus,
            target_yaw: yaw,
            target_polar: polar,
            target_distance: distance,
        }
    }

    /// Apply a rotation drag (pixels).
    pub fn rotate(&mut self, delta: Vec2) {
        let step = delta * DRAG_RADIANS_PER_PIXEL * ROTATE_SPEED;
        self.target_yaw -= step.x;
        self.target_polar = clamp_polar(self.target_polar - step.y);
    }

    /// Apply a pan drag (pixels) along the camera's right/up axes.
    pub fn pan(&mut self, delta: Vec2, right: Vec3, up: Vec3) {
        let step = self.target_distance * PAN_SPEED * 0.002;
        self.target_focus += (-right * delta.x + up * delta.y) * step;
    }

    /// Apply scroll input (lines); positive zooms in.
    pub fn zoom(&mut self, amount: f32) {
        self.target_distance =
            clamp_distance(self.target_distance * 0.9_f32.powf(amount * ZOOM_SPEED));
    }

    /// Current (damped) eye position.
    pub fn eye(&self) -> Vec3 {
        self.focus + spherical_offset(self.yaw, self.polar) * self.distance
    }

    pub fn focus(&self) -> Vec3 {
        self.focus
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(CameraMode::Orbit), reset_to_spawn);
    app.add_systems(
        Update,
        (
            reset_to_spawn.run_if(resource_changed::<ActiveWorld>),
            orbit_input,
            orbit_update,
        )
            .chain()
            .run_if(in_state(CameraMode::Orbit)),
    );
}

/// Re-seed the orbit from the active spawnpoint (fresh document, or the
/// user switched back to orbit mode).
fn reset_to_spawn(
    active: Res<ActiveWorld>,
    mut query: Query<(&mut OrbitController, &mut Transform), With<MainCamera>>,
) {
    let Ok((mut controller, mut transform)) = query.single_mut() else {
        return;
    };

    *controller = OrbitController::from_spawnpoint(active_spawnpoint(&active));
    *transform = Transform::from_translation(controller.eye()).looking_at(controller.focus(), Vec3::Y);
}

fn orbit_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<(&mut OrbitController, &Transform), With<MainCamera>>,
) {
    let Ok((mut controller, transform)) = query.single_mut() else {
        return;
    };

    let delta = motion.delta;
    if delta != Vec2::ZERO {
        if mouse_buttons.pressed(MouseButton::Left) {
            controller.rotate(delta);
        }
        if mouse_buttons.pressed(MouseButton::Right) {
            let right = *transform.right();
            let up = *transform.up();
            controller.pan(delta, right, up);
        }
    }

    if scroll.delta.y != 0.0 {
        controller.zoom(scroll.delta.y);
    }
}

fn orbit_update(
    time: Res<Time>,
    mut query: Query<(&mut OrbitController, &mut Transform), With<MainCamera>>,
) {
    let Ok((mut controller, mut transform)) = query.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    let (target_yaw, target_polar, target_distance, target_focus) = (
        controller.target_yaw,
        controller.target_polar,
        controller.target_distance,
        controller.target_focus,
    );
    controller.yaw.smooth_nudge(&target_yaw, DAMPING_DECAY, dt);
    controller.polar.smooth_nudge(&target_polar, DAMPING_DECAY, dt);
    controller
        .distance
        .smooth_nudge(&target_distance, DAMPING_DECAY, dt);
    controller.focus.smooth_nudge(&target_focus, DAMPING_DECAY, dt);

    *transform =
        Transform::from_translation(controller.eye()).looking_at(controller.focus(), Vec3::Y);
}

/// Unit offset from focus to eye for a yaw/polar pair (polar from +Y).
#[inline]
fn spherical_offset(yaw: f32, polar: f32) -> Vec3 {
    Vec3::new(
        polar.sin() * yaw.sin(),
        polar.cos(),
        polar.sin() * yaw.cos(),
    )
}

#[inline]
fn clamp_polar(polar: f32) -> f32 {
    polar.clamp(MIN_POLAR, MAX_POLAR)
}

#[inline]
fn clamp_distance(distance: f32) -> f32 {
    distance.clamp(MIN_DISTANCE, MAX_DISTANCE)
}
