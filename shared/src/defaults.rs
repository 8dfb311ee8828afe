//! Default-value policy for entities that omit explicit appearance.
//!
//! Both functions are total: an unset or unrecognized role simply falls
//! through to the documented fallback, so a sparse document always resolves
//! to something renderable. Explicit entity-level `size`/`color` always win;
//! these are consulted only on absence.

use crate::constants::{CHARACTER_COLOR, PROP_COLOR, STRUCTURE_COLOR};
use crate::spec::{PrimitiveKind, Role};
use glam::Vec3;

/// Resolve the (width, height, depth) of a primitive with no explicit size.
///
/// Role takes priority over kind: a `character` is person-sized whatever its
/// primitive shape, a `prop` is a unit block. Only role-less entities get
/// per-kind defaults.
pub fn default_size(kind: PrimitiveKind, role: Option<Role>) -> Vec3 {
    match role {
        Some(Role::Character) => return Vec3::new(0.5, 1.8, 0.5),
        Some(Role::Prop) => return Vec3::ONE,
        _ => {}
    }

    match kind {
        PrimitiveKind::Capsule => Vec3::new(0.5, 1.8, 0.5),
        PrimitiveKind::Sphere => Vec3::ONE,
        PrimitiveKind::Cylinder => Vec3::new(0.5, 1.0, 0.5),
        PrimitiveKind::Plane => Vec3::new(1.0, 0.01, 1.0),
        PrimitiveKind::Box => Vec3::ONE,
    }
}

/// Resolve the material color of an entity with no explicit color.
pub fn default_color(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Character) => CHARACTER_COLOR,
        Some(Role::Structure) => STRUCTURE_COLOR,
        Some(Role::Prop) | None => PROP_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_role_overrides_every_kind() {
        // A character is person-sized no matter which primitive renders it.
        for kind in [
            PrimitiveKind::Box,
            PrimitiveKind::Plane,
            PrimitiveKind::Capsule,
            PrimitiveKind::Sphere,
            PrimitiveKind::Cylinder,
        ] {
            assert_eq!(
                default_size(kind, Some(Role::Character)),
                Vec3::new(0.5, 1.8, 0.5)
            );
        }
    }

    #[test]
    fn prop_role_is_a_unit_block() {
        assert_eq!(default_size(PrimitiveKind::Sphere, Some(Role::Prop)), Vec3::ONE);
        assert_eq!(default_size(PrimitiveKind::Capsule, Some(Role::Prop)), Vec3::ONE);
    }

    #[test]
    fn roleless_entities_fall_through_to_kind_defaults() {
        assert_eq!(
            default_size(PrimitiveKind::Capsule, None),
            Vec3::new(0.5, 1.8, 0.5)
        );
        assert_eq!(default_size(PrimitiveKind::Sphere, None), Vec3::ONE);
        assert_eq!(
            default_size(PrimitiveKind::Cylinder, None),
            Vec3::new(0.5, 1.0, 0.5)
        );
        assert_eq!(
            default_size(PrimitiveKind::Plane, None),
            Vec3::new(1.0, 0.01, 1.0)
        );
        assert_eq!(default_size(PrimitiveKind::Box, None), Vec3::ONE);
    }

    #[test]
    fn structure_role_sizes_like_a_roleless_entity() {
        // Structure affects color only; size falls through to the kind table.
        assert_eq!(
            default_size(PrimitiveKind::Cylinder, Some(Role::Structure)),
            Vec3::new(0.5, 1.0, 0.5)
        );
    }

    #[test]
    fn color_table_matches_roles() {
        assert_eq!(default_color(Some(Role::Character)), "#4A90D9");
        assert_eq!(default_color(Some(Role::Prop)), "#808080");
        assert_eq!(default_color(Some(Role::Structure)), "#8B4513");
        assert_eq!(default_color(None), "#808080");
    }
}
