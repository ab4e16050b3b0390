use approx::assert_relative_eq;
use convex_decomp3d::math::{Point, Real};
use convex_decomp3d::shape::ConvexHull;
use convex_decomp3d::transformation::{
    check_convex_hull, try_convex_hull, ConvexHullBuilder, ConvexHullError,
};

fn random_points(seed: u64, num_points: usize) -> Vec<Point<Real>> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..num_points)
        .map(|_| Point::new(rng.rand_float(), rng.rand_float(), rng.rand_float()))
        .collect()
}

#[test]
fn single_triangle_has_insufficient_points() {
    let triangle = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];
    assert_eq!(
        ConvexHull::try_from_points(&triangle),
        Err(ConvexHullError::InsufficientPoints(3))
    );
}

#[test]
fn coplanar_points_are_degenerate() {
    let square = [
        Point::new(0.0, 0.0, 2.0),
        Point::new(1.0, 0.0, 2.0),
        Point::new(1.0, 1.0, 2.0),
        Point::new(0.0, 1.0, 2.0),
    ];
    assert_eq!(
        ConvexHull::try_from_points(&square),
        Err(ConvexHullError::DegenerateCoplanar)
    );
}

/// Asserts that no point of `points` lies in front of a face of the hull, with the face planes
/// computed in double precision.
fn assert_points_are_inside(
    points: &[Point<Real>],
    vertices: &[Point<Real>],
    triangles: &[[u32; 3]],
) {
    for tri in triangles {
        let [a, b, c] = tri.map(|i| vertices[i as usize].coords.cast::<f64>());
        let normal = (b - a).cross(&(c - a));
        let norm = normal.norm();
        if norm == 0.0 {
            continue;
        }

        for pt in points {
            let dist = normal.dot(&(pt.coords.cast::<f64>() - a)) / norm;
            assert!(dist <= 1.0e-4, "point {:?} is {} in front of a face", pt, dist);
        }
    }
}

#[test]
fn random_clouds_give_closed_hulls() {
    for seed in 0..20 {
        let points = random_points(seed, 200);
        let (vertices, triangles) = try_convex_hull(&points).unwrap();

        assert_eq!(check_convex_hull(&vertices, &triangles), Ok(()));
        assert!(vertices.iter().all(|pt| points.contains(pt)));
        assert_points_are_inside(&points, &vertices, &triangles);
    }
}

#[test]
fn flattened_clouds_keep_every_point_inside() {
    // Thin slabs produce many sliver faces.
    for seed in 0..10 {
        let points: Vec<_> = random_points(100 + seed, 300)
            .into_iter()
            .map(|pt| Point::new(pt.x, pt.y, pt.z * 1.0e-2))
            .collect();
        let (vertices, triangles) = try_convex_hull(&points).unwrap();

        assert_eq!(check_convex_hull(&vertices, &triangles), Ok(()));
        assert_points_are_inside(&points, &vertices, &triangles);
    }
}

#[test]
fn dense_sphere_keeps_every_point() {
    let n = 1000;
    let golden_angle = std::f32::consts::PI * (3.0 - (5.0 as Real).sqrt());
    let points: Vec<_> = (0..n)
        .map(|i| {
            let z = 1.0 - 2.0 * (i as Real + 0.5) / n as Real;
            let r = (1.0 - z * z).sqrt();
            let theta = golden_angle * i as Real;
            Point::new(r * theta.cos(), r * theta.sin(), z)
        })
        .collect();

    let (vertices, triangles) = try_convex_hull(&points).unwrap();
    assert_eq!(vertices.len(), n);
    assert_eq!(check_convex_hull(&vertices, &triangles), Ok(()));
    assert_points_are_inside(&points, &vertices, &triangles);
}

#[test]
fn rebuilding_a_hull_from_its_points_is_stable() {
    for seed in 20..30 {
        let points = random_points(seed, 100);
        let builder = ConvexHullBuilder::default().with_max_vertices(None);
        let hull = builder.build(&points).unwrap();
        let rebuilt = builder.build(hull.points()).unwrap();

        assert!(rebuilt.points().len() <= hull.points().len());
        assert!(hull.aabb().contains(rebuilt.aabb()));
    }
}

#[test]
fn capped_hull_stays_inside_the_exact_one() {
    let points = random_points(42, 500);
    let exact = ConvexHullBuilder::default()
        .with_max_vertices(None)
        .build(&points)
        .unwrap();
    let capped = ConvexHullBuilder::default()
        .with_max_vertices(Some(8))
        .build(&points)
        .unwrap();

    assert_eq!(capped.points().len(), 8.min(exact.points().len()));
    assert!(exact.aabb().contains(capped.aabb()));
    assert!(capped.volume_estimate() <= exact.volume_estimate());
}

#[test]
fn hull_of_a_scaled_cloud_is_scale_independent() {
    let points = random_points(7, 100);
    let (small, _) = try_convex_hull(&points).unwrap();

    // Powers of two, so scaling is exact.
    for scale in [1.0 / 64.0, 1024.0] {
        let scaled: Vec<_> = points.iter().map(|pt| pt * scale).collect();
        let (vertices, _) = try_convex_hull(&scaled).unwrap();
        assert_eq!(vertices.len(), small.len());
        for (pt, expected) in vertices.iter().zip(&small) {
            assert_relative_eq!(*pt, expected * scale);
        }
    }
}
