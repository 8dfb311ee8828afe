//! The deterministic half of the scene compiler.
//!
//! `compile_world()` turns an immutable [`WorldSpec`] into a [`WorldPlan`]:
//! room layout, one renderable plan per entity, and zone volumes. The plan is
//! renderer-agnostic and pure — compiling the same document twice yields
//! identical plans — so every placement and default-resolution decision is
//! testable without a GPU.
//!
//! Failure semantics: there are none. Variants this build cannot render
//! (`splat`, unknown tags) compile to no plan at all; one such entity never
//! affects its siblings.

use crate::constants::PLACEHOLDER_SIZE;
use crate::defaults::{default_color, default_size};
use crate::geometry::{GeometryParams, build_geometry};
use crate::room::{RoomLayout, build_room};
use crate::spec::{Entity, WorldSpec, Zone};
use crate::zone::{ZoneVolume, build_zone_volume};
use glam::Vec3;

/// Translation, Euler XYZ rotation (radians), and scale of one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeTransform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// One renderable node derived from an entity.
#[derive(Clone, Debug, PartialEq)]
pub enum NodePlan {
    /// A parametric mesh with a solid material color (hex string).
    Primitive {
        geometry: GeometryParams,
        color: String,
        transform: NodeTransform,
    },

    /// An external model to load asynchronously from `src`. `placeholder`
    /// stands in (as a wireframe box child, in local space) until the model
    /// arrives, and indefinitely if the load fails.
    Model {
        src: String,
        transform: NodeTransform,
        placeholder: Placeholder,
    },
}

/// Deterministic stand-in geometry for a loading model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placeholder {
    pub size: Vec3,
    /// Offset from the node origin; lifts the box so it rests on the anchor.
    pub offset: Vec3,
}

/// A zone volume paired with the identity of the zone it visualizes.
#[derive(Clone, Debug, PartialEq)]
pub struct ZonePlan {
    pub id: String,
    pub name: String,
    pub volume: ZoneVolume,
}

/// The full compiled scene: everything the renderer needs, nothing it owns.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldPlan {
    pub room: RoomLayout,
    pub spawnpoint: Vec3,
    /// `(entity id, plan)` in document order.
    pub nodes: Vec<(String, NodePlan)>,
    pub zones: Vec<ZonePlan>,
}

/// Compile one entity to a renderable plan, or to nothing.
///
/// Dispatch is exhaustive over the entity union: `splat` is accepted but
/// unrendered by design, and `Unknown` is the forward-compatible default for
/// tags this build has never heard of.
pub fn compile_entity(entity: &Entity) -> Option<NodePlan> {
    match entity {
        Entity::Primitive(e) => {
            // Explicit size/color always win; the resolver is only consulted
            // on absence.
            let size = e.size.unwrap_or_else(|| default_size(e.primitive, e.role));
            let color = e
                .color
                .clone()
                .unwrap_or_else(|| default_color(e.role).to_owned());

            // The authored position anchors the entity's base; mesh builders
            // produce center-origin geometry, so lift by half the height.
            let translation = e.base.position + Vec3::Y * (size.y / 2.0);

            Some(NodePlan::Primitive {
                geometry: build_geometry(e.primitive, size),
                color,
                transform: NodeTransform {
                    translation,
                    rotation: e.base.rotation_or_zero(),
                    scale: e.base.scale_or_one(),
                },
            })
        }

        Entity::Glb(e) => {
            // Model origins are trusted as authored: position/rotation/scale
            // apply verbatim, no re-centering.
            Some(NodePlan::Model {
                src: e.src.clone(),
                transform: NodeTransform {
                    translation: e.base.position,
                    rotation: e.base.rotation_or_zero(),
                    scale: e.base.scale_or_one(),
                },
                placeholder: Placeholder {
                    size: Vec3::from_array(PLACEHOLDER_SIZE),
                    offset: Vec3::Y * (PLACEHOLDER_SIZE[1] / 2.0),
                },
            })
        }

        // Splat rendering is unimplemented; the variant is accepted and
        // produces no geometry.
        Entity::Splat(_) => None,

        Entity::Unknown => None,
    }
}

/// Compile a whole document.
pub fn compile_world(spec: &WorldSpec) -> WorldPlan {
    let nodes = spec
        .entities
        .iter()
        .filter_map(|entity| {
            let plan = compile_entity(entity)?;
            // Plans only come from variants that carry a base, so the id is
            // always present here.
            Some((entity.id()?.to_owned(), plan))
        })
        .collect();

    let zones = spec
        .zones
        .iter()
        .map(|Zone { id, name, bounds }| ZonePlan {
            id: id.clone(),
            name: name.clone(),
            volume: build_zone_volume(bounds),
        })
        .collect();

    WorldPlan {
        room: build_room(spec.space.size),
        spawnpoint: spec.spawnpoint,
        nodes,
        zones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{
        EntityBase, GlbEntity, PrimitiveEntity, PrimitiveKind, Role, Space, SpaceKind, SplatEntity,
    };

    fn base(id: &str, position: Vec3) -> EntityBase {
        EntityBase {
            id: id.to_owned(),
            name: None,
            position,
            rotation: None,
            scale: None,
        }
    }

    fn primitive(id: &str, kind: PrimitiveKind, position: Vec3) -> PrimitiveEntity {
        PrimitiveEntity {
            base: base(id, position),
            primitive: kind,
            size: None,
            color: None,
            role: None,
        }
    }

    fn spec_with(entities: Vec<Entity>) -> WorldSpec {
        WorldSpec {
            version: "0.1".to_owned(),
            name: "test".to_owned(),
            space: Space {
                kind: SpaceKind::Room,
                size: Vec3::new(12.0, 3.0, 12.0),
            },
            spawnpoint: Vec3::new(0.0, 1.6, 5.0),
            entities,
            zones: Vec::new(),
        }
    }

    #[test]
    fn explicit_size_and_color_bypass_the_resolver() {
        let entity = Entity::Primitive(PrimitiveEntity {
            size: Some(Vec3::new(1.5, 0.5, 1.0)),
            color: Some("#123456".to_owned()),
            role: Some(Role::Character),
            ..primitive("table", PrimitiveKind::Box, Vec3::new(3.0, 0.0, 0.0))
        });

        let Some(NodePlan::Primitive {
            geometry,
            color,
            transform,
        }) = compile_entity(&entity)
        else {
            panic!("expected a primitive plan");
        };

        // Role would have said 0.5 x 1.8 x 0.5 / blue; the explicit values
        // must win untouched.
        assert_eq!(
            geometry,
            GeometryParams::Box {
                width: 1.5,
                height: 0.5,
                depth: 1.0
            }
        );
        assert_eq!(color, "#123456");
        // Anchored at half the explicit height.
        assert_eq!(transform.translation, Vec3::new(3.0, 0.25, 0.0));
    }

    #[test]
    fn character_defaults_lift_the_anchor_by_half_height() {
        let entity = Entity::Primitive(PrimitiveEntity {
            role: Some(Role::Character),
            ..primitive("guide", PrimitiveKind::Capsule, Vec3::new(0.0, 0.0, -2.0))
        });

        let Some(NodePlan::Primitive { transform, color, .. }) = compile_entity(&entity) else {
            panic!("expected a primitive plan");
        };

        // Default character size is 1.8 tall, so the center sits at y + 0.9.
        assert_eq!(transform.translation, Vec3::new(0.0, 0.9, -2.0));
        assert_eq!(color, "#4A90D9");
        assert_eq!(transform.rotation, Vec3::ZERO);
        assert_eq!(transform.scale, Vec3::ONE);
    }

    #[test]
    fn model_transforms_apply_verbatim() {
        let entity = Entity::Glb(GlbEntity {
            base: EntityBase {
                rotation: Some(Vec3::new(0.0, 1.0, 0.0)),
                scale: Some(Vec3::splat(0.015)),
                ..base("fox", Vec3::new(1.0, 0.25, -2.0))
            },
            src: "models/decor/fox.glb".to_owned(),
            role: Some(Role::Character),
        });

        let Some(NodePlan::Model {
            src,
            transform,
            placeholder,
        }) = compile_entity(&entity)
        else {
            panic!("expected a model plan");
        };

        assert_eq!(src, "models/decor/fox.glb");
        // No re-centering for models; the origin is trusted as authored.
        assert_eq!(transform.translation, Vec3::new(1.0, 0.25, -2.0));
        assert_eq!(transform.rotation, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(transform.scale, Vec3::splat(0.015));
        // The placeholder box rests on the anchor instead.
        assert_eq!(placeholder.offset, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn splat_and_unknown_compile_to_nothing() {
        let splat = Entity::Splat(SplatEntity {
            base: base("cloud", Vec3::ZERO),
            src: "sky.ply".to_owned(),
            format: None,
        });
        assert_eq!(compile_entity(&splat), None);
        assert_eq!(compile_entity(&Entity::Unknown), None);
    }

    #[test]
    fn one_unrenderable_entity_never_drops_its_siblings() {
        let spec = spec_with(vec![
            Entity::Primitive(primitive("a", PrimitiveKind::Box, Vec3::ZERO)),
            Entity::Unknown,
            Entity::Primitive(primitive("b", PrimitiveKind::Sphere, Vec3::X)),
        ]);

        let plan = compile_world(&spec);
        let ids: Vec<&str> = plan.nodes.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn compilation_is_pure() {
        let spec = spec_with(vec![
            Entity::Primitive(PrimitiveEntity {
                role: Some(Role::Character),
                ..primitive("guide", PrimitiveKind::Capsule, Vec3::new(0.0, 0.0, -2.0))
            }),
            Entity::Glb(GlbEntity {
                base: base("fox", Vec3::X),
                src: "fox.glb".to_owned(),
                role: None,
            }),
        ]);

        // Same document in, identical plan out — transforms, geometry
        // parameters, everything.
        assert_eq!(compile_world(&spec), compile_world(&spec));
    }
}
