use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Planar movement while walking in first-person mode.
    /// Bound to both WASD and the arrow keys.
    #[actionlike(DualAxis)]
    Move,
    /// Grid, perf overlay, and zone volumes on/off.
    ToggleDebug,
    /// Switch between orbital inspection and first-person walkthrough.
    ToggleCameraMode,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let input_map = InputMap::default()
        .with_dual_axis(InputAction::Move, VirtualDPad::wasd())
        .with_dual_axis(InputAction::Move, VirtualDPad::arrow_keys())
        .with(InputAction::ToggleDebug, KeyCode::F3)
        .with(InputAction::ToggleCameraMode, KeyCode::Tab);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}
