//! Scene assembly: owns the active `WorldSpec` and realizes its compiled
//! plan as the live scene graph.
//!
//! A document replacement is wholesale: the previous `WorldRoot` subtree is
//! despawned in the same frame the generation counter is bumped, which
//! abandons its pending model loads along with everything else. Nothing is
//! diffed incrementally.

use bevy::pbr::wireframe::WireframePlugin;
use bevy::prelude::*;
use shared::{WorldSpec, compile_world};

use crate::debug_tools::DebugSettings;
use crate::sample;

pub mod entity;
pub mod room;
pub mod zone;

pub(super) fn plugin(app: &mut App) {
    // Model-load placeholders render as wireframes.
    app.add_plugins(WireframePlugin::default());

    app.add_message::<WorldSpecReady>();
    app.init_resource::<ActiveWorld>();
    app.insert_resource(ClearColor(parse_color_or(
        shared::constants::SKY_COLOR,
        Color::srgb(0.53, 0.81, 0.92),
    )));

    app.add_systems(Startup, (setup_lighting, load_initial_world));
    app.add_systems(
        Update,
        (
            receive_world_spec,
            rebuild.run_if(resource_changed::<ActiveWorld>),
        )
            .chain(),
    );
    app.add_systems(Update, entity::poll_model_loads);
}

/// A freshly produced document, ready to replace the current scene.
///
/// Written by the startup loader here; the surrounding UI layer writes the
/// same message when the compile service returns a new document.
#[derive(Message, Clone)]
pub struct WorldSpecReady(pub WorldSpec);

/// The document currently on screen, plus the generation counter used to
/// tell stale async completions from live ones.
#[derive(Resource, Default)]
pub struct ActiveWorld {
    pub spec: Option<WorldSpec>,
    pub generation: u32,
}

/// Root of one compiled scene graph. Tagged with the generation it was
/// compiled under.
#[derive(Component)]
pub struct WorldRoot {
    pub generation: u32,
}

fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn load_initial_world(mut ready: MessageWriter<WorldSpecReady>) {
    let spec = match read_world_path_from_cli_env() {
        Some(path) => match load_world_file(&path) {
            Ok(spec) => {
                info!("loaded world document from {path}");
                spec
            }
            Err(err) => {
                error!("failed to load {path}: {err}; falling back to the built-in lobby");
                sample::lobby()
            }
        },
        None => sample::lobby(),
    };

    ready.write(WorldSpecReady(spec));
}

fn receive_world_spec(
    mut messages: MessageReader<WorldSpecReady>,
    mut active: ResMut<ActiveWorld>,
) {
    // Only the newest document matters if several arrive in one frame.
    let Some(WorldSpecReady(spec)) = messages.read().last() else {
        return;
    };

    for id in spec.duplicate_ids() {
        warn!("world '{}': duplicate entity id '{id}'", spec.name);
    }

    active.spec = Some(spec.clone());
    active.generation += 1;
}

fn rebuild(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    active: Res<ActiveWorld>,
    debug: Res<DebugSettings>,
    existing: Query<Entity, With<WorldRoot>>,
) {
    for root in &existing {
        commands.entity(root).despawn();
    }

    let Some(spec) = &active.spec else {
        return;
    };
    let plan = compile_world(spec);

    let root = commands
        .spawn((
            WorldRoot {
                generation: active.generation,
            },
            Name::new(spec.name.clone()),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    room::spawn_room(&mut commands, &mut meshes, &mut materials, root, &plan.room);

    for (id, node) in &plan.nodes {
        entity::spawn_node(
            &mut commands,
            &mut meshes,
            &mut materials,
            &asset_server,
            root,
            active.generation,
            id,
            node,
        );
    }

    for zone_plan in &plan.zones {
        zone::spawn_zone(
            &mut commands,
            &mut meshes,
            &mut materials,
            root,
            zone_plan,
            debug.enabled,
        );
    }

    info!(
        "world '{}' compiled (generation {}): {} nodes, {} zones",
        spec.name,
        active.generation,
        plan.nodes.len(),
        plan.zones.len()
    );
}

/// Parse a hex color, falling back when the document carries garbage.
pub fn parse_color_or(hex: &str, fallback: Color) -> Color {
    match Srgba::hex(hex) {
        Ok(color) => color.into(),
        Err(err) => {
            warn!("unparseable color '{hex}' ({err}); using fallback");
            fallback
        }
    }
}

/// Returns the world document path from CLI args or environment if present.
///
/// Supported:
///   --world <path>
///   --world=<path>
///   WORLD_SPEC environment variable
fn read_world_path_from_cli_env() -> Option<String> {
    let mut args = std::env::args().skip(1);
    let mut pending = false;

    while let Some(arg) = args.next() {
        if pending {
            return Some(arg);
        } else if arg == "--world" || arg == "-w" {
            pending = true;
            continue;
        } else if let Some(path) = arg.strip_prefix("--world=") {
            return Some(path.to_string());
        }
    }

    std::env::var("WORLD_SPEC").ok()
}

fn load_world_file(path: &str) -> Result<WorldSpec, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(WorldSpec::from_json_str(&json)?)
}
