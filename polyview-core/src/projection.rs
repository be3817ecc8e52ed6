//! Orthographic projection onto a 2-D drawing canvas.

use nalgebra::Point3;

/// A position on the drawing canvas, in fractional cells or pixels. The y
/// axis grows downward, matching terminal rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// A projected vertex: canvas position plus the retained mesh-space depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub canvas: CanvasPoint,
    pub depth: f64,
}

/// Deterministic orthographic mapping from mesh space to canvas space.
///
/// x and y are scaled and translated onto the canvas; z passes through
/// untouched as the depth tag consumed by the back-to-front ordering.
/// `aspect` widens x to compensate for output cells that are taller than
/// they are wide, so a cube reads as a cube on a terminal grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasProjection {
    pub origin: CanvasPoint,
    pub scale: f64,
    pub aspect: f64,
}

impl CanvasProjection {
    pub fn new(origin: CanvasPoint, scale: f64, aspect: f64) -> Self {
        Self {
            origin,
            scale,
            aspect,
        }
    }

    /// Projection centered on a canvas of the given size, scaled to a
    /// quarter of the canvas height so a unit-extent mesh fills about half
    /// the window.
    pub fn for_canvas(width: f64, height: f64, aspect: f64) -> Self {
        Self {
            origin: CanvasPoint {
                x: width / 2.0,
                y: height / 2.0,
            },
            scale: height / 4.0,
            aspect,
        }
    }

    /// Project a 3-D position onto the canvas, retaining its depth.
    pub fn project(&self, position: &Point3<f64>) -> ProjectedPoint {
        ProjectedPoint {
            canvas: CanvasPoint {
                x: self.origin.x + position.x * self.scale * self.aspect,
                y: self.origin.y + position.y * self.scale,
            },
            depth: position.z,
        }
    }
}
