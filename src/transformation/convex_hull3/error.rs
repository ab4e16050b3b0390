/// Errors that can occur during convex hull computation.
///
/// The first three variants describe degenerate inputs for which no 3D hull exists. The
/// decomposer treats all of them as "this region contributes no hull" rather than as a
/// global failure.
///
/// ```
/// use convex_decomp3d::transformation::{try_convex_hull, ConvexHullError};
/// use convex_decomp3d::math::Point;
///
/// let triangle = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
/// ];
/// assert_eq!(try_convex_hull(&triangle), Err(ConvexHullError::InsufficientPoints(3)));
///
/// let square = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
/// ];
/// assert_eq!(try_convex_hull(&square), Err(ConvexHullError::DegenerateCoplanar));
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvexHullError {
    /// Less than four distinct points were given, after deduplication.
    ///
    /// The payload is the number of distinct points found.
    #[error("At least 4 distinct points are needed, only {0} were given.")]
    InsufficientPoints(usize),
    /// All the points lie on a single line.
    #[error("All the input points are collinear.")]
    DegenerateCollinear,
    /// All the points lie on a single plane, so no initial tetrahedron can be built.
    #[error("All the input points are coplanar.")]
    DegenerateCoplanar,
    /// The hull construction did not converge within its iteration budget.
    #[error("The convex hull did not converge after {0} iterations.")]
    IterationLimitReached(usize),
    /// An internal error occurred during convex hull computation.
    ///
    /// This indicates a bug in the algorithm itself.
    #[error("Internal error: {0}")]
    InternalError(&'static str),
    /// A triangle of the hull has an edge that is not shared with any other triangle.
    #[error("Detected unfinished triangle")]
    UnfinishedTriangle,
    /// An edge of the hull is shared by more than two triangles.
    #[error("Detected t-junction for triangle {0}, edge: ({1}, {2})")]
    TJunction(usize, u32, u32),
    /// Two output points are identical.
    #[error("Detected duplicate points {0} and {1}")]
    DuplicatePoints(usize, usize),
}
