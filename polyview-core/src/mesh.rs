//! Mesh data model: an id-keyed vertex table plus polygonal faces.

use std::collections::BTreeMap;

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};

/// Unique vertex identifier, taken verbatim from the description file.
pub type VertexId = u32;

/// Mapping from vertex id to a 3-D position.
pub type VertexMap = BTreeMap<VertexId, Point3<f64>>;

/// A planar face: an ordered list of at least three distinct vertex ids.
///
/// The id order fixes both the outline drawn on screen and the winding used
/// to derive the face normal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    vertex_ids: Vec<VertexId>,
}

impl Face {
    /// The face's vertex ids in declaration order.
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_ids
    }
}

/// A polyhedral mesh with fixed topology and replaceable vertex positions.
///
/// `base` keeps the positions exactly as loaded; `current` holds the
/// positions being displayed. Rotation always recomputes `current` from
/// `base`, never from the previous `current`, so interaction cannot
/// accumulate floating-point drift.
#[derive(Debug, Clone)]
pub struct Polyhedron {
    base: VertexMap,
    current: VertexMap,
    faces: Vec<Face>,
}

impl Polyhedron {
    /// Build a polyhedron from a vertex table and per-face id lists,
    /// validating the topology.
    ///
    /// Rejects duplicate vertex ids, faces with fewer than three ids, faces
    /// that repeat an id, and references to ids that were never declared.
    pub fn new(
        vertices: Vec<(VertexId, Point3<f64>)>,
        faces: Vec<Vec<VertexId>>,
    ) -> Result<Self> {
        let mut base = VertexMap::new();
        for (id, position) in vertices {
            if base.insert(id, position).is_some() {
                return Err(MeshError::DuplicateVertexId { id });
            }
        }
        if base.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        let mut validated = Vec::with_capacity(faces.len());
        for (index, ids) in faces.into_iter().enumerate() {
            if ids.len() < 3 {
                return Err(MeshError::Topology {
                    face: index,
                    message: format!("has {} vertex ids, need at least 3", ids.len()),
                });
            }
            for (position, id) in ids.iter().enumerate() {
                if !base.contains_key(id) {
                    return Err(MeshError::Topology {
                        face: index,
                        message: format!("references unknown vertex id {}", id),
                    });
                }
                if ids[..position].contains(id) {
                    return Err(MeshError::Topology {
                        face: index,
                        message: format!("repeats vertex id {}", id),
                    });
                }
            }
            validated.push(Face { vertex_ids: ids });
        }

        let current = base.clone();
        Ok(Self {
            base,
            current,
            faces: validated,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.base.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Positions exactly as loaded. Never mutated after construction.
    pub fn base_vertices(&self) -> &VertexMap {
        &self.base
    }

    /// Positions currently displayed.
    pub fn current_vertices(&self) -> &VertexMap {
        &self.current
    }

    /// Replace the displayed positions wholesale.
    ///
    /// The topology is fixed at load time, so the new map must cover exactly
    /// the same vertex ids.
    pub fn set_current_vertices(&mut self, vertices: VertexMap) {
        debug_assert!(
            vertices.keys().eq(self.base.keys()),
            "replacement vertex map must keep the same id set"
        );
        self.current = vertices;
    }

    /// Mean of all current vertex positions. Used as the rotation pivot so
    /// the mesh spins in place.
    pub fn centroid(&self) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        for position in self.current.values() {
            sum += position.coords;
        }
        Point3::from(sum / self.current.len() as f64)
    }

    /// Mean of the face's current vertex positions. Its z coordinate is the
    /// depth used for back-to-front ordering.
    pub fn face_centroid(&self, face: &Face) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        for id in face.vertex_ids() {
            sum += self.current[id].coords;
        }
        Point3::from(sum / face.vertex_ids().len() as f64)
    }

    /// An axis-aligned cube with side 2 centered on the origin, with quad
    /// faces. Handy for tests and demos.
    pub fn cube() -> Self {
        let vertices = vec![
            (1, Point3::new(-1.0, -1.0, -1.0)),
            (2, Point3::new(1.0, -1.0, -1.0)),
            (3, Point3::new(1.0, 1.0, -1.0)),
            (4, Point3::new(-1.0, 1.0, -1.0)),
            (5, Point3::new(-1.0, -1.0, 1.0)),
            (6, Point3::new(1.0, -1.0, 1.0)),
            (7, Point3::new(1.0, 1.0, 1.0)),
            (8, Point3::new(-1.0, 1.0, 1.0)),
        ];
        let faces = vec![
            vec![1, 4, 3, 2], // z = -1
            vec![5, 6, 7, 8], // z = +1
            vec![1, 2, 6, 5], // y = -1
            vec![3, 4, 8, 7], // y = +1
            vec![2, 3, 7, 6], // x = +1
            vec![4, 1, 5, 8], // x = -1
        ];
        Self::new(vertices, faces).expect("cube topology is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = Polyhedron::cube();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.face_count(), 6);
        for face in cube.faces() {
            assert_eq!(face.vertex_ids().len(), 4);
        }
    }

    #[test]
    fn test_current_starts_at_base() {
        let cube = Polyhedron::cube();
        assert_eq!(cube.base_vertices(), cube.current_vertices());
    }

    #[test]
    fn test_cube_centroid_is_origin() {
        let centroid = Polyhedron::cube().centroid();
        assert!(centroid.coords.norm() < 1e-12);
    }

    #[test]
    fn test_face_centroid() {
        let cube = Polyhedron::cube();
        // Face index 1 is the z = +1 quad.
        let centroid = cube.face_centroid(&cube.faces()[1]);
        assert!((centroid.x - 0.0).abs() < 1e-12);
        assert!((centroid.y - 0.0).abs() < 1e-12);
        assert!((centroid.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_duplicate_vertex_id() {
        let vertices = vec![
            (1, Point3::new(0.0, 0.0, 0.0)),
            (1, Point3::new(1.0, 0.0, 0.0)),
        ];
        let result = Polyhedron::new(vertices, vec![]);
        assert!(matches!(
            result,
            Err(MeshError::DuplicateVertexId { id: 1 })
        ));
    }

    #[test]
    fn test_rejects_empty_vertex_table() {
        let result = Polyhedron::new(vec![], vec![]);
        assert!(matches!(result, Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_rejects_unknown_face_reference() {
        let vertices = vec![
            (0, Point3::new(0.0, 0.0, 0.0)),
            (1, Point3::new(1.0, 0.0, 0.0)),
            (2, Point3::new(0.0, 1.0, 0.0)),
        ];
        let result = Polyhedron::new(vertices, vec![vec![0, 1, 99]]);
        match result {
            Err(MeshError::Topology { face, message }) => {
                assert_eq!(face, 0);
                assert!(message.contains("99"));
            }
            other => panic!("expected topology error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_short_face() {
        let vertices = vec![
            (0, Point3::new(0.0, 0.0, 0.0)),
            (1, Point3::new(1.0, 0.0, 0.0)),
        ];
        let result = Polyhedron::new(vertices, vec![vec![0, 1]]);
        assert!(matches!(result, Err(MeshError::Topology { face: 0, .. })));
    }

    #[test]
    fn test_rejects_repeated_id_within_face() {
        let vertices = vec![
            (0, Point3::new(0.0, 0.0, 0.0)),
            (1, Point3::new(1.0, 0.0, 0.0)),
            (2, Point3::new(0.0, 1.0, 0.0)),
        ];
        let result = Polyhedron::new(vertices, vec![vec![0, 1, 2, 1]]);
        assert!(matches!(result, Err(MeshError::Topology { face: 0, .. })));
    }

    #[test]
    fn test_set_current_vertices_replaces_positions() {
        let mut cube = Polyhedron::cube();
        let shifted: VertexMap = cube
            .base_vertices()
            .iter()
            .map(|(&id, p)| (id, Point3::new(p.x + 1.0, p.y, p.z)))
            .collect();
        cube.set_current_vertices(shifted);
        assert!((cube.centroid().x - 1.0).abs() < 1e-12);
        // Base stays untouched.
        assert!((cube.base_vertices()[&1].x + 1.0).abs() < 1e-12);
    }
}
