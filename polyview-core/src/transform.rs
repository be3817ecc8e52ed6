//! Rotation construction and pivot-preserving application.

use nalgebra::{Point3, Rotation3, Unit, Vector3};

use crate::mesh::VertexMap;

/// The three principal rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// Right-handed rotation by `angle` radians about one principal axis.
pub fn axis_rotation(axis: Axis, angle: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&axis.unit(), angle)
}

/// Rotate every position about `pivot`, returning a fresh map.
///
/// Each vertex maps to `pivot + R * (v - pivot)`, so a vertex sitting at the
/// pivot never moves. The result has exactly the input's keys.
pub fn apply(
    vertices: &VertexMap,
    rotation: &Rotation3<f64>,
    pivot: Point3<f64>,
) -> VertexMap {
    vertices
        .iter()
        .map(|(&id, position)| (id, pivot + rotation * (*position - pivot)))
        .collect()
}

/// Cumulative rotation accumulated since load.
///
/// Display positions are always produced by applying this single rotation to
/// the base positions, rather than rotating already-rotated positions, so a
/// long interactive session stays exactly as orthonormal as one composed
/// matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Orientation {
    rotation: Rotation3<f64>,
}

impl Orientation {
    /// No rotation since load.
    pub fn identity() -> Self {
        Self {
            rotation: Rotation3::identity(),
        }
    }

    /// Fold one more incremental rotation in. The newest delta composes on
    /// the left: it acts on the already-rotated object, matching what the
    /// user sees mid-drag.
    pub fn compose(&mut self, delta: &Rotation3<f64>) {
        self.rotation = delta * self.rotation;
    }

    /// The combined rotation to apply to base positions.
    pub fn rotation(&self) -> &Rotation3<f64> {
        &self.rotation
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}
