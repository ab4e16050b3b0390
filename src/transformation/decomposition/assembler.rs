use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::ConvexHull;

/// A consumer of convex hulls, typically a physics engine building collision shapes.
pub trait CollisionSink {
    /// The handle returned for each hull added to the sink.
    type Handle;

    /// Adds a convex primitive given by its vertices (at least 4) and their bounding box.
    fn add_convex_hull(&mut self, points: &[Point<Real>], aabb: &Aabb) -> Self::Handle;
}

impl CollisionSink for Vec<ConvexHull> {
    type Handle = usize;

    fn add_convex_hull(&mut self, points: &[Point<Real>], _aabb: &Aabb) -> usize {
        self.push(ConvexHull::from_hull_points(points.to_vec()));
        self.len() - 1
    }
}

/// Hands every hull to `sink`, in order, and returns the handles it produced.
pub fn assemble<S: CollisionSink>(hulls: &[ConvexHull], sink: &mut S) -> Vec<S::Handle> {
    hulls
        .iter()
        .map(|hull| sink.add_convex_hull(hull.points(), hull.aabb()))
        .collect()
}
