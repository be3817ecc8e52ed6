//! Pointer-drag state machine driving the render pipeline.

use crate::mesh::Polyhedron;
use crate::painter::{self, PaintOp, RenderOptions};
use crate::projection::CanvasProjection;
use crate::transform::{self, Axis, Orientation};

/// Drag-gesture state. The mesh only ever rotates while `Dragging`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// Pointer held down; fields are the last sampled canvas position.
    Dragging { last_x: f64, last_y: f64 },
}

/// Turns pointer gestures into incremental rotations and re-runs the
/// pipeline to produce each frame.
///
/// Owns the only persistent orientation state in the program. Every
/// accepted drag sample folds a small rotation into [`Orientation`] and
/// recomputes the display positions from the base positions, pivoting on
/// the mesh centroid so the object spins in place.
#[derive(Debug)]
pub struct InteractionController {
    state: DragState,
    orientation: Orientation,
    sensitivity: f64,
}

impl InteractionController {
    /// `sensitivity` is in radians per canvas unit of pointer travel.
    pub fn new(sensitivity: f64) -> Self {
        Self {
            state: DragState::Idle,
            orientation: Orientation::identity(),
            sensitivity,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Idle to Dragging. A press while already dragging just re-anchors the
    /// sample position without rotating.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.state = DragState::Dragging {
            last_x: x,
            last_y: y,
        };
    }

    /// Feed a pointer position. While dragging, the travel since the last
    /// sample becomes an incremental rotation; returns true when the mesh
    /// moved and a new frame is due. Ignored while idle.
    ///
    /// Horizontal travel rotates about the vertical axis, vertical travel
    /// about the horizontal axis, both scaled by the sensitivity.
    pub fn pointer_move(&mut self, x: f64, y: f64, mesh: &mut Polyhedron) -> bool {
        let DragState::Dragging { last_x, last_y } = self.state else {
            return false;
        };
        self.state = DragState::Dragging {
            last_x: x,
            last_y: y,
        };

        let dx = x - last_x;
        let dy = y - last_y;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }

        let pitch = transform::axis_rotation(Axis::X, dy * self.sensitivity);
        let yaw = transform::axis_rotation(Axis::Y, dx * self.sensitivity);
        self.orientation.compose(&pitch);
        self.orientation.compose(&yaw);

        let pivot = mesh.centroid();
        let rotated = transform::apply(
            mesh.base_vertices(),
            self.orientation.rotation(),
            pivot,
        );
        mesh.set_current_vertices(rotated);
        true
    }

    /// Dragging to Idle. Subsequent moves are ignored until the next press.
    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    /// Run the full pipeline for the mesh's current positions: project,
    /// shade, depth-order, and emit the frame's paint sequence.
    pub fn render_frame(
        &self,
        mesh: &Polyhedron,
        projection: &CanvasProjection,
        options: &RenderOptions,
    ) -> Vec<PaintOp> {
        painter::render(mesh, projection, options)
    }
}
