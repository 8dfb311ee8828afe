//! Deterministic core of the world viewer: the `WorldSpec` document schema
//! and the pure scene compiler that turns a document into renderable plans.
//!
//! Nothing in this crate touches the renderer. The client realizes the plans
//! as actual meshes, materials, and scene nodes.

pub mod compile;
pub mod constants;
pub mod defaults;
pub mod geometry;
pub mod room;
pub mod spec;
pub mod zone;

pub use compile::{NodePlan, NodeTransform, Placeholder, WorldPlan, ZonePlan, compile_world};
pub use defaults::{default_color, default_size};
pub use geometry::{GeometryParams, build_geometry};
pub use room::{FloorPlan, RoomLayout, WallPlan, build_room};
pub use spec::{
    CompileResponse, Entity, EntityBase, GlbEntity, PrimitiveEntity, PrimitiveKind, Role, Space,
    SpaceKind, SpecError, SplatEntity, SplatFormat, ValidationResult, WorldSpec, Zone,
};
pub use zone::{ZoneVolume, build_zone_volume};
