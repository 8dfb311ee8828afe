//! The `WorldSpec` document schema.
//!
//! A `WorldSpec` is the declarative description of one scene: a room, a
//! spawnpoint, an ordered list of entities, and optional debug zones. It is
//! produced by the external compile service (or authored by hand) as JSON and
//! consumed here as an immutable value for one compile pass.
//!
//! # Model
//! - Vectors are `[x, y, z]` arrays in meters, world space, `+Y` up.
//! - The room is centered on the world origin with its floor at `y = 0`;
//!   spawnpoint and entity positions use that same centered frame.
//! - An entity's `position` is the anchor of its *base* (floor contact), not
//!   its geometric center. The compiler re-centers vertically where the
//!   geometry height is known.
//! - Entity order is rendering order only; ids must be unique, but a
//!   duplicate is an advisory warning, never a parse failure.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors produced while loading a `WorldSpec` document.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("malformed world spec document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root document describing a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSpec {
    pub version: String,
    pub name: String,
    pub space: Space,
    pub spawnpoint: Vec3,
    pub entities: Vec<Entity>,
    /// Absent in many documents; absence is equivalent to an empty list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<Zone>,
}

impl WorldSpec {
    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the ids that appear more than once, in first-seen order.
    ///
    /// Duplicate ids break update diffing upstream but must not break the
    /// compile, so callers log these as warnings and carry on.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for id in self.entities.iter().filter_map(Entity::id) {
            if !seen.insert(id) && !dupes.contains(&id) {
                dupes.push(id);
            }
        }
        dupes
    }
}

/// The bounding shape of the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    #[serde(rename = "type")]
    pub kind: SpaceKind,
    /// (width, height, depth) of the room, meters.
    pub size: Vec3,
}

/// `room` is the only space shape currently emitted by the compile service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceKind {
    Room,
}

/// Fields shared by every entity variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityBase {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// World-space anchor of the entity's base (floor-contact point).
    pub position: Vec3,
    /// Euler XYZ rotation in radians. Identity when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    /// Uniform default of 1 on every axis when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

impl EntityBase {
    pub fn rotation_or_zero(&self) -> Vec3 {
        self.rotation.unwrap_or(Vec3::ZERO)
    }

    pub fn scale_or_one(&self) -> Vec3 {
        self.scale.unwrap_or(Vec3::ONE)
    }
}

/// One placeable object, discriminated by `assetType`.
///
/// `Unknown` swallows any tag this build does not know about. That makes new
/// asset types degrade to "no node" instead of failing the whole document,
/// and because it is a real variant, every `match` on [`Entity`] must decide
/// what to do with it explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assetType", rename_all = "lowercase")]
pub enum Entity {
    Primitive(PrimitiveEntity),
    Glb(GlbEntity),
    Splat(SplatEntity),
    #[serde(other)]
    Unknown,
}

impl Entity {
    /// The entity id, if this variant carries one.
    pub fn id(&self) -> Option<&str> {
        self.base().map(|b| b.id.as_str())
    }

    pub fn base(&self) -> Option<&EntityBase> {
        match self {
            Entity::Primitive(e) => Some(&e.base),
            Entity::Glb(e) => Some(&e.base),
            Entity::Splat(e) => Some(&e.base),
            Entity::Unknown => None,
        }
    }
}

/// A parametric mesh entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    pub primitive: PrimitiveKind,
    /// (width, height, depth) in meters. Resolved from role/kind defaults
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec3>,
    /// Hex color string, e.g. `"#8B4513"`. Resolved from the role default
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// A packaged 3D model loaded from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlbEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    /// Path relative to the asset root. Existence is not checked ahead of
    /// load; a missing file is a (non-fatal) load failure.
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// A point-cloud / Gaussian-splat entity. Accepted but not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplatEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SplatFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Box,
    Plane,
    Capsule,
    Sphere,
    Cylinder,
}

/// Semantic hint driving default size/color when explicit values are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Character,
    Prop,
    Structure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplatFormat {
    Ply,
    Splat,
    Ksplat,
    Spz,
}

/// A named axis-aligned region, visualized in debug mode only.
///
/// `bounds` is `[cornerA, cornerB]` with no per-axis ordering guarantee;
/// consumers must treat the corners as unordered extrema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub bounds: [Vec3; 2],
}

/// Response of the external prompt → WorldSpec compile service.
///
/// Consumed-only boundary type: the viewer cares about `world_spec` and
/// relays `warnings`; transport and failure handling of the call itself live
/// outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponse {
    pub dsl: String,
    pub world_spec: WorldSpec,
    pub warnings: Vec<String>,
}

/// Validation verdict attached to service responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_fixed: Option<WorldSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOBBY_JSON: &str = r#"{
        "version": "0.1",
        "name": "lobby",
        "space": { "type": "room", "size": [12, 3, 12] },
        "spawnpoint": [0, 1.6, 5],
        "entities": [
            {
                "id": "guide_1",
                "assetType": "primitive",
                "primitive": "capsule",
                "role": "character",
                "position": [0, 0, 0]
            },
            {
                "id": "fox_1",
                "assetType": "glb",
                "src": "models/decor/fox.glb",
                "position": [1, 0, -2],
                "scale": [0.015, 0.015, 0.015]
            },
            {
                "id": "cloud_1",
                "assetType": "splat",
                "src": "clouds/sky.ply",
                "format": "ply",
                "position": [0, 2, 0]
            }
        ],
        "zones": [
            { "id": "z1", "name": "entry", "bounds": [[-1, 0, -1], [1, 0, 1]] }
        ]
    }"#;

    #[test]
    fn parses_a_full_document() {
        let spec = WorldSpec::from_json_str(LOBBY_JSON).unwrap();
        assert_eq!(spec.name, "lobby");
        assert_eq!(spec.space.kind, SpaceKind::Room);
        assert_eq!(spec.space.size, Vec3::new(12.0, 3.0, 12.0));
        assert_eq!(spec.spawnpoint, Vec3::new(0.0, 1.6, 5.0));
        assert_eq!(spec.entities.len(), 3);
        assert_eq!(spec.zones.len(), 1);

        let Entity::Primitive(guide) = &spec.entities[0] else {
            panic!("expected a primitive entity");
        };
        assert_eq!(guide.base.id, "guide_1");
        assert_eq!(guide.primitive, PrimitiveKind::Capsule);
        assert_eq!(guide.role, Some(Role::Character));
        // Optional fields absent in the document resolve to their defaults.
        assert_eq!(guide.size, None);
        assert_eq!(guide.base.rotation_or_zero(), Vec3::ZERO);
        assert_eq!(guide.base.scale_or_one(), Vec3::ONE);

        let Entity::Splat(cloud) = &spec.entities[2] else {
            panic!("expected a splat entity");
        };
        assert_eq!(cloud.format, Some(SplatFormat::Ply));
    }

    #[test]
    fn missing_zones_means_empty() {
        let json = r#"{
            "version": "0.1", "name": "bare",
            "space": { "type": "room", "size": [4, 2, 4] },
            "spawnpoint": [0, 1, 0],
            "entities": []
        }"#;
        let spec = WorldSpec::from_json_str(json).unwrap();
        assert!(spec.zones.is_empty());
    }

    #[test]
    fn unknown_asset_type_degrades_to_unknown_variant() {
        // Forward compatibility: a tag from a future schema version must not
        // fail the document.
        let json = r#"{
            "version": "0.1", "name": "future",
            "space": { "type": "room", "size": [4, 2, 4] },
            "spawnpoint": [0, 1, 0],
            "entities": [
                { "id": "v2_thing", "assetType": "volumetric_video",
                  "position": [0, 0, 0], "src": "cap.vv" }
            ]
        }"#;
        let spec = WorldSpec::from_json_str(json).unwrap();
        assert_eq!(spec.entities[0], Entity::Unknown);
        assert_eq!(spec.entities[0].id(), None);
    }

    #[test]
    fn json_round_trip_preserves_the_document() {
        let spec = WorldSpec::from_json_str(LOBBY_JSON).unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        let again = WorldSpec::from_json_str(&json).unwrap();
        assert_eq!(spec, again);
    }

    #[test]
    fn duplicate_ids_are_reported_once_each() {
        let mut spec = WorldSpec::from_json_str(LOBBY_JSON).unwrap();
        let clone_a = spec.entities[0].clone();
        let clone_b = spec.entities[0].clone();
        spec.entities.push(clone_a);
        spec.entities.push(clone_b);
        assert_eq!(spec.duplicate_ids(), vec!["guide_1"]);
    }

    #[test]
    fn parses_a_compile_service_response() {
        let json = r#"{
            "dsl": "(room 4 2 4)",
            "worldSpec": {
                "version": "0.1", "name": "svc",
                "space": { "type": "room", "size": [4, 2, 4] },
                "spawnpoint": [0, 1, 0],
                "entities": []
            },
            "warnings": ["spawnpoint defaulted"]
        }"#;
        let resp: CompileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.world_spec.name, "svc");
        assert_eq!(resp.warnings.len(), 1);
    }
}
