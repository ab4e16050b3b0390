use crate::shape::TriangleMeshError;

/// Errors that can occur during an approximate convex decomposition.
///
/// Failures of individual regions are absorbed by the decomposer; only an input it cannot
/// work with, or an empty overall result, is reported.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompositionError {
    /// The input has less than 4 vertices or less than 3 indices.
    #[error("Not enough geometry to decompose: {vertices} vertices and {indices} indices.")]
    InsufficientGeometry {
        /// The number of vertices of the input.
        vertices: usize,
        /// The number of indices of the input.
        indices: usize,
    },
    /// The input mesh is malformed.
    #[error(transparent)]
    InvalidMesh(#[from] TriangleMeshError),
    /// No region of the mesh produced a valid convex hull.
    #[error("The decomposition did not produce any convex hull.")]
    ConvergenceFailure,
}
