use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use na;

/// Returns the index of the support point of a list of points.
///
/// Ties are resolved in favor of the smallest index.
pub fn support_point_id(direction: &Vector<Real>, points: &[Point<Real>]) -> Option<usize> {
    let mut argmax = None;
    let mut max = -Real::MAX;

    for (id, pt) in points.iter().enumerate() {
        let dot = direction.dot(&pt.coords);

        if dot > max {
            argmax = Some(id);
            max = dot;
        }
    }

    argmax
}

/// Scale and center the given set of point depending on their AABB.
///
/// Returns the original center and the diagonal length used as scaling factor. Point sets
/// with a zero-length diagonal are only translated.
pub fn normalize(coords: &mut [Point<Real>]) -> (Point<Real>, Real) {
    let aabb = Aabb::from_points_ref(coords.iter());
    let diag = na::distance(&aabb.mins, &aabb.maxs);
    let center = aabb.center();
    let scale = if diag > 0.0 { diag } else { 1.0 };

    for c in coords.iter_mut() {
        *c = (*c + (-center.coords)) / scale;
    }

    (center, diag)
}
