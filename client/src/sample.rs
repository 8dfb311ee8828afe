//! Built-in lobby document, used when no `--world` path is given so the
//! viewer always has something to show.

use bevy::math::Vec3;
use shared::{
    Entity, EntityBase, GlbEntity, PrimitiveEntity, PrimitiveKind, Role, Space, SpaceKind,
    WorldSpec,
};

fn base(id: &str, name: &str, position: Vec3) -> EntityBase {
    EntityBase {
        id: id.to_owned(),
        name: Some(name.to_owned()),
        position,
        rotation: None,
        scale: None,
    }
}

/// A 12 x 3 x 12 lobby: a few light GLB decorations plus primitive props.
pub fn lobby() -> WorldSpec {
    WorldSpec {
        version: "0.1".to_owned(),
        name: "lobby".to_owned(),
        space: Space {
            kind: SpaceKind::Room,
            size: Vec3::new(12.0, 3.0, 12.0),
        },
        spawnpoint: Vec3::new(0.0, 1.6, 5.0),
        entities: vec![
            Entity::Glb(GlbEntity {
                base: EntityBase {
                    scale: Some(Vec3::splat(0.015)),
                    ..base("fox_1", "fox", Vec3::new(0.0, 0.0, 0.0))
                },
                src: "models/decor/fox.glb".to_owned(),
                role: Some(Role::Character),
            }),
            Entity::Glb(GlbEntity {
                base: EntityBase {
                    scale: Some(Vec3::splat(0.015)),
                    ..base("parrot_1", "parrot", Vec3::new(2.0, 0.5, -2.0))
                },
                src: "models/decor/parrot.glb".to_owned(),
                role: Some(Role::Prop),
            }),
            Entity::Glb(GlbEntity {
                base: EntityBase {
                    scale: Some(Vec3::splat(0.015)),
                    ..base("flamingo_1", "flamingo", Vec3::new(-2.0, 0.0, -2.0))
                },
                src: "models/decor/flamingo.glb".to_owned(),
                role: Some(Role::Prop),
            }),
            Entity::Primitive(PrimitiveEntity {
                base: base("box_1", "table", Vec3::new(3.0, 0.0, 0.0)),
                primitive: PrimitiveKind::Box,
                size: Some(Vec3::new(1.5, 0.5, 1.0)),
                color: Some("#8B4513".to_owned()),
                role: Some(Role::Prop),
            }),
            Entity::Primitive(PrimitiveEntity {
                base: base("box_2", "sofa", Vec3::new(-3.0, 0.0, 0.0)),
                primitive: PrimitiveKind::Box,
                size: Some(Vec3::new(2.0, 0.6, 0.8)),
                color: Some("#4A5568".to_owned()),
                role: Some(Role::Prop),
            }),
        ],
        zones: Vec::new(),
    }
}
