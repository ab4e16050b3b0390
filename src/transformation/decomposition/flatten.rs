use super::DecompositionError;
use crate::shape::{MeshSection, TriangleMesh, TriangleMeshError};

/// Merges the sections of a multi-section mesh into a single triangle mesh.
///
/// The vertex buffers are concatenated in order, and the indices of each section are offset
/// by the number of vertices of the sections before it. Indices are validated against their
/// own section.
///
/// # Errors
///
/// Fails with [`DecompositionError::InsufficientGeometry`] if the merged mesh has less than
/// 4 vertices or 3 indices, and with [`DecompositionError::InvalidMesh`] if a section has a
/// truncated index buffer or an out-of-bounds index.
pub fn flatten_sections(sections: &[MeshSection]) -> Result<TriangleMesh, DecompositionError> {
    let num_vertices: usize = sections.iter().map(|s| s.vertices.len()).sum();
    let num_indices: usize = sections.iter().map(|s| s.indices.len()).sum();

    if num_vertices < 4 || num_indices < 3 {
        return Err(DecompositionError::InsufficientGeometry {
            vertices: num_vertices,
            indices: num_indices,
        });
    }

    let mut vertices = Vec::with_capacity(num_vertices);
    let mut indices = Vec::with_capacity(num_indices / 3);

    for section in sections {
        if section.indices.len() % 3 != 0 {
            let len = section.indices.len();
            return Err(TriangleMeshError::IndexCountNotMultipleOfThree(len).into());
        }

        if let Some(index) = section
            .indices
            .iter()
            .copied()
            .find(|i| *i as usize >= section.vertices.len())
        {
            return Err(TriangleMeshError::IndexOutOfBounds {
                index,
                num_vertices: section.vertices.len(),
            }
            .into());
        }

        let offset = vertices.len() as u32;
        vertices.extend_from_slice(&section.vertices);
        indices.extend(
            section
                .indices
                .chunks_exact(3)
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    log::debug!(
        "flattened {} mesh sections into {} vertices and {} triangles",
        sections.len(),
        vertices.len(),
        indices.len()
    );

    Ok(TriangleMesh::new(vertices, indices)?)
}
