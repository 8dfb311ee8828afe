//! Primitive kind + size vector → concrete geometry parameters.
//!
//! The output is renderer-agnostic: the client maps each variant onto its
//! mesh builders. Segment counts are fixed regardless of size, trading a
//! little memory for visual smoothness at every scale.

use crate::spec::PrimitiveKind;
use glam::Vec3;

/// Angular resolution of spheres (sectors × stacks).
pub const SPHERE_SEGMENTS: u32 = 32;

/// Radial resolution of cylinders.
pub const CYLINDER_RESOLUTION: u32 = 32;

/// Capsule resolution: cap subdivisions and radial segments.
pub const CAPSULE_LATITUDES: u32 = 8;
pub const CAPSULE_LONGITUDES: u32 = 16;

/// Concrete parameters for one primitive mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryParams {
    /// Axis-aligned box, full extents in meters.
    Box { width: f32, height: f32, depth: f32 },

    /// Horizontal plane. The size vector's height component is dropped.
    Plane { width: f32, depth: f32 },

    /// UV sphere. Radius is half the size vector's width.
    Sphere { radius: f32, segments: u32 },

    /// Y-aligned cylinder with equal caps.
    Cylinder { radius: f32, height: f32, resolution: u32 },

    /// Y-aligned capsule. `length` is the cylindrical mid-section only;
    /// total height is `length + 2 * radius`.
    Capsule {
        radius: f32,
        length: f32,
        latitudes: u32,
        longitudes: u32,
    },
}

/// Derive geometry parameters from a kind and a (width, height, depth) size.
///
/// Pure and total. The capsule mid-section is clamped at zero: a size vector
/// with `height <= width` yields a sphere-like capsule rather than an
/// inverted shape.
pub fn build_geometry(kind: PrimitiveKind, size: Vec3) -> GeometryParams {
    let Vec3 {
        x: width,
        y: height,
        z: depth,
    } = size;

    match kind {
        PrimitiveKind::Box => GeometryParams::Box {
            width,
            height,
            depth,
        },
        PrimitiveKind::Plane => GeometryParams::Plane { width, depth },
        PrimitiveKind::Sphere => GeometryParams::Sphere {
            radius: width / 2.0,
            segments: SPHERE_SEGMENTS,
        },
        PrimitiveKind::Cylinder => GeometryParams::Cylinder {
            radius: width / 2.0,
            height,
            resolution: CYLINDER_RESOLUTION,
        },
        PrimitiveKind::Capsule => GeometryParams::Capsule {
            radius: width / 2.0,
            length: (height - width).max(0.0),
            latitudes: CAPSULE_LATITUDES,
            longitudes: CAPSULE_LONGITUDES,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_passes_extents_through() {
        let g = build_geometry(PrimitiveKind::Box, Vec3::new(1.5, 0.5, 1.0));
        assert_eq!(
            g,
            GeometryParams::Box {
                width: 1.5,
                height: 0.5,
                depth: 1.0
            }
        );
    }

    #[test]
    fn plane_drops_the_height_component() {
        let g = build_geometry(PrimitiveKind::Plane, Vec3::new(3.0, 0.01, 2.0));
        assert_eq!(
            g,
            GeometryParams::Plane {
                width: 3.0,
                depth: 2.0
            }
        );
    }

    #[test]
    fn sphere_radius_is_half_width() {
        let g = build_geometry(PrimitiveKind::Sphere, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(
            g,
            GeometryParams::Sphere {
                radius: 1.0,
                segments: SPHERE_SEGMENTS
            }
        );
    }

    #[test]
    fn cylinder_caps_are_equal_and_height_is_verbatim() {
        let g = build_geometry(PrimitiveKind::Cylinder, Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(
            g,
            GeometryParams::Cylinder {
                radius: 0.5,
                height: 4.0,
                resolution: CYLINDER_RESOLUTION
            }
        );
    }

    #[test]
    fn capsule_mid_section_is_height_minus_width() {
        let g = build_geometry(PrimitiveKind::Capsule, Vec3::new(0.5, 1.8, 0.5));
        let GeometryParams::Capsule { radius, length, .. } = g else {
            panic!("expected a capsule");
        };
        assert!((radius - 0.25).abs() < 1.0e-6);
        assert!((length - 1.3).abs() < 1.0e-6);
    }

    #[test]
    fn degenerate_capsule_clamps_to_zero_mid_section() {
        // height <= width degrades to a sphere-like capsule, never a
        // negative-length shape.
        let g = build_geometry(PrimitiveKind::Capsule, Vec3::new(2.0, 1.0, 2.0));
        assert_eq!(
            g,
            GeometryParams::Capsule {
                radius: 1.0,
                length: 0.0,
                latitudes: CAPSULE_LATITUDES,
                longitudes: CAPSULE_LONGITUDES
            }
        );
    }
}
