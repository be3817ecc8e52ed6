//! Face normals and the angle-to-color shading ramp.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{Unit, Vector3};

use crate::mesh::{Face, VertexMap};

/// Cross products shorter than this are treated as degenerate.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Shade of a face edge-on to the viewer (#00005F), and the fallback for
/// degenerate faces.
pub const SHADE_LOW: Rgb = Rgb { r: 0, g: 0, b: 0x5F };

/// Shade of a face square to the viewer (#0000FF).
pub const SHADE_HIGH: Rgb = Rgb { r: 0, g: 0, b: 0xFF };

/// Normal of a planar face, from its first three vertices in declared order.
///
/// Returns `None` when those vertices are collinear (near-zero cross
/// product). Such faces are shaded with the fallback color rather than
/// aborting the frame.
pub fn face_normal(face: &Face, vertices: &VertexMap) -> Option<Unit<Vector3<f64>>> {
    let ids = face.vertex_ids();
    let v0 = vertices[&ids[0]];
    let v1 = vertices[&ids[1]];
    let v2 = vertices[&ids[2]];
    Unit::try_new((v1 - v0).cross(&(v2 - v0)), DEGENERATE_EPSILON)
}

/// Map a face normal onto the blue shading ramp.
///
/// The angle is measured between the normal's line and the viewing axis, so
/// a normal and its negation shade identically and the face winding does not
/// matter. An angle of zero (face square to the viewer) gives `SHADE_HIGH`,
/// a right angle gives `SHADE_LOW`, and the blue channel is linear in
/// between.
pub fn shade(normal: &Unit<Vector3<f64>>) -> Rgb {
    let alignment = normal.dot(&Vector3::z()).abs().min(1.0);
    let theta = alignment.acos();
    let t = 1.0 - theta / FRAC_PI_2;
    let span = (SHADE_HIGH.b - SHADE_LOW.b) as f64;
    Rgb {
        r: 0,
        g: 0,
        b: SHADE_LOW.b + (span * t).round() as u8,
    }
}

/// Shade a possibly-degenerate face, falling back to the darkest shade.
pub fn shade_or_fallback(normal: Option<&Unit<Vector3<f64>>>) -> Rgb {
    match normal {
        Some(normal) => shade(normal),
        None => SHADE_LOW,
    }
}
