use crate::math::{Point, Real, Vector};

/// Cuts a polygon with the given half-space.
///
/// Given the half-space `center` and outward `normal`, this computes the intersection between
/// the half-space and the polygon. A point `pt` is considered inside of the half-space if
/// `normal.dot(&(pt - center)) <= 0.0`.
pub fn clip_halfspace_polygon(
    center: &Point<Real>,
    normal: &Vector<Real>,
    polygon: &[Point<Real>],
    result: &mut Vec<Point<Real>>,
) {
    result.clear();

    let Some(last_pt) = polygon.last() else {
        return;
    };

    let signed_distance = |pt: &Point<Real>| (pt - center).dot(normal);
    let mut last_pt = *last_pt;
    let mut last_dist = signed_distance(&last_pt);

    for pt in polygon {
        let dist = signed_distance(pt);

        if (dist <= 0.0) != (last_dist <= 0.0) {
            // The edge crosses the plane, so we need to cut it.
            let t = last_dist / (last_dist - dist);
            result.push(last_pt + (pt - last_pt) * t);
        }

        if dist <= 0.0 {
            result.push(*pt);
        }

        last_pt = *pt;
        last_dist = dist;
    }
}
