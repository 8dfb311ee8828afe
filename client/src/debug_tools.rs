//! Debug/performance tooling behind a runtime toggle.
//!
//! The toggle gates three things: the perf overlay, the floor reference
//! grid, and zone-volume visibility. None of them touch the compiled scene —
//! flipping the toggle only adds/removes the debug-only nodes.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;
use leafwing_input_manager::prelude::ActionState;

use crate::input::InputAction;
use crate::world::zone::ZoneVolumeNode;

const GRID_CELL_COLOR: Color = Color::srgb(0.43, 0.43, 0.43);
const GRID_SECTION_COLOR: Color = Color::srgb(0.62, 0.29, 0.29);

/// Whether grid/stats/zone-volume rendering is on.
#[derive(Resource, Default)]
pub struct DebugSettings {
    pub enabled: bool,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.init_resource::<DebugSettings>();

    app.add_systems(
        Update,
        (
            toggle,
            apply.run_if(resource_changed::<DebugSettings>),
            draw_grid.run_if(|debug: Res<DebugSettings>| debug.enabled),
        ),
    );
}

fn toggle(actions: Res<ActionState<InputAction>>, mut debug: ResMut<DebugSettings>) {
    if actions.just_pressed(&InputAction::ToggleDebug) {
        debug.enabled = !debug.enabled;
        info!("debug mode {}", if debug.enabled { "on" } else { "off" });
    }
}

fn apply(
    mut commands: Commands,
    debug: Res<DebugSettings>,
    perf_ui: Query<Entity, With<PerfUiRoot>>,
    mut zones: Query<&mut Visibility, With<ZoneVolumeNode>>,
) {
    if debug.enabled {
        if perf_ui.is_empty() {
            commands.spawn(PerfUiAllEntries::default());
        }
    } else {
        for entity in &perf_ui {
            commands.entity(entity).despawn();
        }
    }

    for mut visibility in &mut zones {
        *visibility = if debug.enabled {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// Reference grid on the floor plane: 1 m cells, heavier 5 m section lines.
fn draw_grid(mut gizmos: Gizmos) {
    // Gizmo grids live in the XY plane; lay them flat onto XZ.
    let lay_flat = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);

    gizmos.grid(
        Isometry3d::from_rotation(lay_flat),
        UVec2::splat(50),
        Vec2::splat(1.0),
        GRID_CELL_COLOR,
    );
    gizmos.grid(
        Isometry3d::from_rotation(lay_flat),
        UVec2::splat(10),
        Vec2::splat(5.0),
        GRID_SECTION_COLOR,
    );
}
