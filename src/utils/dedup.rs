use crate::math::{Point, Real};
use crate::utils::hashmap::HashSet;

/// Removes near-duplicate points by snapping them to a regular grid of cell size `step`.
///
/// Two points falling into the same grid cell are considered identical and only the first
/// one (in input order) is kept, with its original, unsnapped, coordinates. The relative
/// order of the kept points is preserved, so the output only depends on the input order.
///
/// Points with non-finite coordinates are discarded.
pub fn dedup_points(points: &[Point<Real>], step: Real) -> Vec<Point<Real>> {
    assert!(step > 0.0, "The quantization step must be positive.");

    let mut seen = HashSet::with_capacity(points.len());
    let mut result = Vec::with_capacity(points.len());

    for pt in points {
        if !pt.iter().all(|c| c.is_finite()) {
            continue;
        }

        let key = quantize(pt, step);
        if seen.insert(key) {
            result.push(*pt);
        }
    }

    result
}

/// The grid cell containing `pt`.
#[inline]
fn quantize(pt: &Point<Real>, step: Real) -> [i64; 3] {
    [
        (pt.x / step).round() as i64,
        (pt.y / step).round() as i64,
        (pt.z / step).round() as i64,
    ]
}
