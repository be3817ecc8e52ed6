//! Polyview core library - shared polyhedron rendering pipeline
//!
//! Stateless geometry and per-frame rendering logic used by every frontend:
//! the mesh model and its text-format loader, pivot-preserving rotation,
//! orthographic projection, normal-based shading, painter's-algorithm
//! ordering, and the pointer-drag interaction state machine.

pub mod controller;
pub mod error;
pub mod loader;
pub mod mesh;
pub mod painter;
pub mod projection;
pub mod shading;
pub mod transform;

// Re-export commonly used types
pub use controller::{DragState, InteractionController};
pub use error::{MeshError, Result};
pub use loader::{load_mesh, parse_mesh};
pub use mesh::{Face, Polyhedron, VertexId, VertexMap};
pub use painter::{FaceRenderRecord, PaintOp, RenderOptions, MARKER_COLOR};
pub use projection::{CanvasPoint, CanvasProjection, ProjectedPoint};
pub use shading::{Rgb, SHADE_HIGH, SHADE_LOW};
pub use transform::{apply, axis_rotation, Axis, Orientation};
