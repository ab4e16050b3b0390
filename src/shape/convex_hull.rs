use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::transformation::{ConvexHullBuilder, ConvexHullError};

/// A convex point-hull: the vertices of a convex polyhedron together with their bounding box.
///
/// This is the unit of output of the decomposition. A hull always has at least four points,
/// pairwise distinct and not all coplanar. It is immutable once built: its AABB is computed
/// at construction and never updated.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
    aabb: Aabb,
}

impl ConvexHull {
    /// Wraps points already known to be the vertices of a non-degenerate convex hull.
    pub(crate) fn from_hull_points(points: Vec<Point<Real>>) -> Self {
        debug_assert!(points.len() >= 4);
        let aabb = Aabb::from_points_ref(&points);
        ConvexHull { points, aabb }
    }

    /// Computes the convex hull of an arbitrary point cloud with the default builder settings.
    ///
    /// See [`ConvexHullBuilder`] to tune deduplication, the vertex cap, or the iteration budget.
    pub fn try_from_points(points: &[Point<Real>]) -> Result<Self, ConvexHullError> {
        ConvexHullBuilder::default().build(points)
    }

    /// The vertices of this hull.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The axis-aligned bounding box of this hull.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// An estimate of the volume of this hull: the volume of its AABB.
    ///
    /// This is an upper bound of the true convex volume, used as a cheap ranking heuristic
    /// when choosing which hulls to split or keep.
    #[inline]
    pub fn volume_estimate(&self) -> Real {
        self.aabb.volume()
    }
}
