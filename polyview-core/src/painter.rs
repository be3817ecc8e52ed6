//! Painter's-algorithm compositing: depth ordering and paint instructions.

use nalgebra::{Unit, Vector3};
use tracing::trace;

use crate::mesh::Polyhedron;
use crate::projection::{CanvasPoint, CanvasProjection};
use crate::shading::{self, Rgb};

/// Color of the optional face-corner markers.
pub const MARKER_COLOR: Rgb = Rgb { r: 0, g: 0, b: 0xFF };

/// Toggles for the emitted paint sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Mark each face corner with a dot after filling the face.
    pub vertex_markers: bool,
}

/// One drawing instruction for a canvas backend. Instructions arrive
/// back-to-front; executing them in order and letting later ones overwrite
/// earlier ones yields correct occlusion for convex meshes.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Fill a polygon with a single flat color.
    Polygon { points: Vec<CanvasPoint>, color: Rgb },
    /// Mark a single point.
    Marker { at: CanvasPoint, color: Rgb },
}

/// Per-face state for one frame. Rebuilt from scratch on every redraw and
/// dropped with it; nothing here is cached across frames.
#[derive(Debug, Clone)]
pub struct FaceRenderRecord {
    /// Index of the face in declaration order.
    pub face: usize,
    /// Face centroid depth (the retained z).
    pub depth: f64,
    /// Current normal, `None` for degenerate faces.
    pub normal: Option<Unit<Vector3<f64>>>,
    /// Shade assigned for this frame.
    pub color: Rgb,
    /// Projected outline, one canvas point per face vertex.
    pub outline: Vec<CanvasPoint>,
}

/// Depth-order the faces, most distant first.
///
/// Depth is the face centroid's z, which the orthographic projection leaves
/// untouched. The sort is stable, so faces at equal depth keep their
/// declaration order and identical input always paints identically.
pub fn order(mesh: &Polyhedron) -> Vec<(usize, f64)> {
    let mut depths: Vec<(usize, f64)> = mesh
        .faces()
        .iter()
        .enumerate()
        .map(|(index, face)| (index, mesh.face_centroid(face).z))
        .collect();
    depths.sort_by(|a, b| a.1.total_cmp(&b.1));
    depths
}

/// Build the per-frame face records in draw order: depth, normal, shade,
/// projected outline.
pub fn face_records(
    mesh: &Polyhedron,
    projection: &CanvasProjection,
) -> Vec<FaceRenderRecord> {
    let vertices = mesh.current_vertices();
    order(mesh)
        .into_iter()
        .map(|(index, depth)| {
            let face = &mesh.faces()[index];
            let normal = shading::face_normal(face, vertices);
            if normal.is_none() {
                trace!("face {} is degenerate, using fallback shade", index);
            }
            let color = shading::shade_or_fallback(normal.as_ref());
            let outline = face
                .vertex_ids()
                .iter()
                .map(|id| projection.project(&vertices[id]).canvas)
                .collect();
            FaceRenderRecord {
                face: index,
                depth,
                normal,
                color,
                outline,
            }
        })
        .collect()
}

/// Emit the frame's paint sequence, furthest face first.
///
/// Each face contributes one polygon fill, immediately followed by its
/// corner markers when those are enabled, so a nearer face painted later
/// covers both.
pub fn render(
    mesh: &Polyhedron,
    projection: &CanvasProjection,
    options: &RenderOptions,
) -> Vec<PaintOp> {
    let mut ops = Vec::new();
    for record in face_records(mesh, projection) {
        let corners = if options.vertex_markers {
            record.outline.clone()
        } else {
            Vec::new()
        };
        ops.push(PaintOp::Polygon {
            points: record.outline,
            color: record.color,
        });
        for at in corners {
            ops.push(PaintOp::Marker {
                at,
                color: MARKER_COLOR,
            });
        }
    }
    ops
}
