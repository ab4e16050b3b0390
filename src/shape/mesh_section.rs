use crate::math::{Point, Real};

/// One section of a multi-section indexed mesh, as produced by a render mesh with several
/// material slots.
///
/// The indices of a section refer to the section's own vertex buffer, and every three
/// consecutive indices form a triangle.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshSection {
    /// The vertex buffer of this section.
    pub vertices: Vec<Point<Real>>,
    /// The flat index buffer of this section.
    pub indices: Vec<u32>,
}

impl MeshSection {
    /// Creates a new mesh section.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Creates a mesh section from a vertex buffer and a structured index buffer.
    pub fn from_triangles(vertices: Vec<Point<Real>>, triangles: &[[u32; 3]]) -> Self {
        Self {
            vertices,
            indices: triangles.iter().flatten().copied().collect(),
        }
    }
}
