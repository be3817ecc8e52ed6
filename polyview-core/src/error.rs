//! Error types for polyhedron loading and validation.

use thiserror::Error;

use crate::mesh::VertexId;

/// Result type alias for mesh loading operations.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors raised while reading or validating a polyhedron description.
///
/// Every variant is fatal at load time: the whole mesh is rejected rather
/// than silently dropping the offending parts, since a partial mesh has an
/// undefined centroid. Geometric degeneracies discovered later (a face whose
/// leading vertices are collinear) are not errors; the shading stage falls
/// back to the darkest shade and keeps rendering.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The description file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line does not match the expected format, or the header counts
    /// disagree with the number of lines actually supplied.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// The vertex table declares no vertices at all.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// The vertex table declares the same id twice.
    #[error("vertex id {id} is declared more than once")]
    DuplicateVertexId { id: VertexId },

    /// A face references a vertex that does not exist, or has too few or
    /// repeated vertex ids.
    #[error("face {face}: {message}")]
    Topology { face: usize, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::Format {
            line: 3,
            message: "expected vertex line: id x y z".to_string(),
        };
        assert_eq!(err.to_string(), "line 3: expected vertex line: id x y z");

        let err = MeshError::Topology {
            face: 1,
            message: "references unknown vertex id 99".to_string(),
        };
        assert_eq!(err.to_string(), "face 1: references unknown vertex id 99");
    }
}
