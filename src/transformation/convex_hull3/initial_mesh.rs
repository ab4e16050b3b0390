use super::{ConvexHullError, Face, FaceArena, FaceId};
use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;
use crate::transformation::convex_hull_utils::support_point_id;

/// Finds three points that are not collinear, scanning the points in order.
///
/// The first point is always part of the triple. Returns `None` if every point lies within
/// `eps` of a single line.
pub(super) fn find_non_collinear_triple(points: &[Point<Real>], eps: Real) -> Option<[usize; 3]> {
    let origin = *points.first()?;
    let p1 = (1..points.len()).find(|i| na::distance(&points[*i], &origin) > eps)?;
    let dir = points[p1] - origin;
    let dir_norm = dir.norm();
    let p2 = (1..points.len()).find(|i| dir.cross(&(points[*i] - origin)).norm() > eps * dir_norm)?;

    Some([0, p1, p2])
}

/// Selects the base triangle of the initial tetrahedron.
///
/// The base edge joins the extremal points along the first axis (among X, then Y, then Z) on
/// which the cloud has a non-zero extent. The third point is the one spanning the largest
/// triangle with that edge. Falls back to `fallback` if this triangle is degenerate.
fn select_base_triangle(points: &[Point<Real>], eps: Real, fallback: [usize; 3]) -> [usize; 3] {
    let axes = [Vector::x(), Vector::y(), Vector::z()];
    let base_edge = axes.iter().find_map(|axis| {
        let a = support_point_id(&-axis, points)?;
        let b = support_point_id(axis, points)?;
        (na::distance(&points[a], &points[b]) > eps).then_some((a, b))
    });

    let Some((a, b)) = base_edge else {
        return fallback;
    };

    let mut max_area = 0.0;
    let mut c = usize::MAX;

    for (i, point) in points.iter().enumerate() {
        let area = Triangle::new(points[a], points[b], *point).area();

        if area > max_area {
            max_area = area;
            c = i;
        }
    }

    if c == usize::MAX || max_area * 2.0 <= eps * na::distance(&points[a], &points[b]) {
        fallback
    } else {
        [a, b, c]
    }
}

/// Builds the initial tetrahedron of the hull and wires its four faces together.
///
/// `points` must be distinct. The returned faces have outward-pointing normals, and their
/// outside sets are still empty.
pub(super) fn init_tetrahedron(
    points: &[Point<Real>],
    eps: Real,
    arena: &mut FaceArena,
) -> Result<[FaceId; 4], ConvexHullError> {
    if points.len() < 4 {
        return Err(ConvexHullError::InsufficientPoints(points.len()));
    }

    let triple =
        find_non_collinear_triple(points, eps).ok_or(ConvexHullError::DegenerateCollinear)?;
    let [a, mut b, mut c] = select_base_triangle(points, eps, triple);

    // A triple that passes the `eps` test can still be too thin to have a normal.
    let base = Triangle::new(points[a], points[b], points[c]);
    let normal = base.normal().ok_or(ConvexHullError::DegenerateCollinear)?;

    // The apex is the point furthest from the base plane, on either side.
    let mut apex = usize::MAX;
    let mut apex_distance: Real = 0.0;

    for (i, pt) in points.iter().enumerate() {
        let distance = normal.dot(&(pt - points[a]));

        if distance.abs() > apex_distance.abs() {
            apex = i;
            apex_distance = distance;
        }
    }

    if apex == usize::MAX || apex_distance.abs() <= eps {
        return Err(ConvexHullError::DegenerateCoplanar);
    }

    // The base must face away from the apex.
    if apex_distance > 0.0 {
        std::mem::swap(&mut b, &mut c);
    }

    let d = apex;
    let ids = [
        arena.insert(Face::new(a, b, c, points)),
        arena.insert(Face::new(b, a, d, points)),
        arena.insert(Face::new(c, b, d, points)),
        arena.insert(Face::new(a, c, d, points)),
    ];

    if !arena.link_by_shared_edges(&ids) {
        return Err(ConvexHullError::InternalError(
            "the initial tetrahedron is not closed",
        ));
    }

    Ok(ids)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transformation::convex_hull3::validation::check_face_links;

    const EPS: Real = 1.0e-5;

    #[test]
    fn tetrahedron_faces_point_outward() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(0.1, 0.1, 0.1),
        ];
        let mut arena = FaceArena::new();
        let ids = init_tetrahedron(&points, EPS, &mut arena).unwrap();

        for id in ids {
            check_face_links(&arena, id);
            // The interior point is behind every face.
            assert!(arena[id].signed_distance(4, &points) < 0.0);
        }
    }

    #[test]
    fn degenerate_inputs() {
        let collinear: Vec<_> = (0..5).map(|i| Point::new(i as Real, 0.0, 0.0)).collect();
        let mut arena = FaceArena::new();
        assert_eq!(
            init_tetrahedron(&collinear, EPS, &mut arena),
            Err(ConvexHullError::DegenerateCollinear)
        );

        let coplanar = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.5, 0.3, 0.0),
        ];
        assert_eq!(
            init_tetrahedron(&coplanar, EPS, &mut arena),
            Err(ConvexHullError::DegenerateCoplanar)
        );
    }

    #[test]
    fn nearly_collinear_base_is_reported_as_collinear() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 1.0e-8, 0.0),
            Point::new(3.0, 0.0, 0.0),
        ];
        let mut arena = FaceArena::new();
        assert_eq!(
            init_tetrahedron(&points, 1.0e-9, &mut arena),
            Err(ConvexHullError::DegenerateCollinear)
        );
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn non_collinear_triple_skips_aligned_points() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(2.0, 1.0, 0.0),
        ];
        assert_eq!(find_non_collinear_triple(&points, EPS), Some([0, 2, 4]));
    }
}
