use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleMeshError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A flat index buffer must describe whole triangles.
    #[error("The index buffer length {0} is not a multiple of 3.")]
    IndexCountNotMultipleOfThree(usize),
    /// A triangle references a vertex that does not exist.
    #[error("The vertex index {index} is out of bounds (the mesh has {num_vertices} vertices).")]
    IndexOutOfBounds {
        /// The faulty index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// A triangle soup: a vertex buffer and triangles indexing it.
///
/// Unlike a collision trimesh, no topological property is required here: the triangles
/// may be non-manifold, disconnected, or inconsistently oriented. The only invariant is
/// that every index is smaller than the number of vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriangleMeshError> {
        if indices.is_empty() {
            return Err(TriangleMeshError::EmptyIndices);
        }

        if let Some(index) = indices
            .iter()
            .flatten()
            .copied()
            .find(|i| *i as usize >= vertices.len())
        {
            return Err(TriangleMeshError::IndexOutOfBounds {
                index,
                num_vertices: vertices.len(),
            });
        }

        Ok(TriangleMesh { vertices, indices })
    }

    /// Creates a new triangle mesh from a flat index buffer where every three consecutive
    /// indices form a triangle.
    pub fn from_flat_indices(
        vertices: Vec<Point<Real>>,
        flat_indices: &[u32],
    ) -> Result<Self, TriangleMeshError> {
        if flat_indices.len() % 3 != 0 {
            return Err(TriangleMeshError::IndexCountNotMultipleOfThree(
                flat_indices.len(),
            ));
        }

        let indices = flat_indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();
        Self::new(vertices, indices)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// The AABB of the vertices referenced by at least one triangle.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(
            self.indices
                .iter()
                .flatten()
                .map(|i| self.vertices[*i as usize]),
        )
    }
}

#[cfg(test)]
mod test {
    use super::{TriangleMesh, TriangleMeshError};
    use crate::math::Point;

    fn quad() -> Vec<Point<f32>> {
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn flat_indices_are_grouped_by_three() {
        let mesh = TriangleMesh::from_flat_indices(quad(), &[0, 1, 2, 0, 2, 3]).unwrap();
        assert_eq!(mesh.indices(), &[[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.num_triangles(), 2);
        assert_relative_eq!(mesh.triangle(1).area(), 0.5);
        assert_eq!(mesh.local_aabb().maxs, Point::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn invalid_buffers_are_rejected() {
        assert_eq!(
            TriangleMesh::from_flat_indices(quad(), &[0, 1, 2, 0]),
            Err(TriangleMeshError::IndexCountNotMultipleOfThree(4))
        );
        assert_eq!(
            TriangleMesh::new(quad(), vec![[0, 1, 4]]),
            Err(TriangleMeshError::IndexOutOfBounds {
                index: 4,
                num_vertices: 4
            })
        );
        assert_eq!(
            TriangleMesh::new(quad(), vec![]),
            Err(TriangleMeshError::EmptyIndices)
        );
    }
}
