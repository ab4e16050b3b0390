use crate::meshes::{cuboid, cuboid_section, l_shape};
use approx::assert_relative_eq;
use convex_decomp3d::bounding_volume::Aabb;
use convex_decomp3d::math::{Point, Real};
use convex_decomp3d::shape::{ConvexHull, TriangleMesh};
use convex_decomp3d::transformation::{
    flatten_sections, DecompParams, DecompositionError, SpatialDecomposer,
};

fn decompose(mesh: &TriangleMesh, target: u32) -> Vec<ConvexHull> {
    let params = DecompParams::default().with_target_hull_count(target);
    SpatialDecomposer::new(params)
        .decompose(mesh)
        .unwrap()
        .into_hulls()
}

fn total_aabb_volume(hulls: &[ConvexHull]) -> Real {
    hulls.iter().map(|hull| hull.volume_estimate()).sum()
}

#[test]
fn unit_cube_gives_one_hull_with_its_corners() {
    let cube = cuboid([0.0; 3], [1.0; 3]);
    let hulls = decompose(&cube, 1);

    assert_eq!(hulls.len(), 1);
    let mut points = hulls[0].points().to_vec();
    let mut corners = cube.vertices().to_vec();
    let key = |pt: &Point<Real>| (pt.x as i32, pt.y as i32, pt.z as i32);
    points.sort_by_key(key);
    corners.sort_by_key(key);
    assert_eq!(points, corners);
}

#[test]
fn distant_cubes_give_one_hull_each() {
    let sections = [
        cuboid_section([0.0; 3], [1.0; 3]),
        cuboid_section([20.0, 0.0, 0.0], [21.0, 1.0, 1.0]),
    ];
    let mesh = flatten_sections(&sections).unwrap();
    let params = DecompParams::default()
        .with_target_hull_count(2)
        .with_max_depth(1);
    let result = SpatialDecomposer::new(params).decompose(&mesh).unwrap();

    let hulls = result.hulls();
    assert_eq!(hulls.len(), 2);

    let mut aabbs: Vec<Aabb> = hulls.iter().map(|hull| *hull.aabb()).collect();
    aabbs.sort_by(|a, b| a.mins.x.total_cmp(&b.mins.x));
    assert_eq!(aabbs[0], Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0)));
    assert_eq!(
        aabbs[1],
        Aabb::new(Point::new(20.0, 0.0, 0.0), Point::new(21.0, 1.0, 1.0))
    );
    assert_eq!(result.stats().leaf_regions, 2);
    assert_eq!(result.stats().failed_leaves, 0);
}

#[test]
fn single_triangle_is_not_enough_geometry() {
    let mesh = TriangleMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();

    assert_eq!(
        SpatialDecomposer::default().decompose(&mesh).map(|_| ()),
        Err(DecompositionError::InsufficientGeometry {
            vertices: 3,
            indices: 3
        })
    );
}

#[test]
fn coplanar_mesh_does_not_converge() {
    let mesh = TriangleMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap();

    assert_eq!(
        SpatialDecomposer::default().decompose(&mesh).map(|_| ()),
        Err(DecompositionError::ConvergenceFailure)
    );
}

#[test]
fn splitting_an_l_shape_tightens_the_approximation() {
    let mesh = l_shape();
    let volume = 3.0;

    let one = decompose(&mesh, 1);
    assert_eq!(one.len(), 1);
    assert_relative_eq!(total_aabb_volume(&one), 4.0);

    let two = decompose(&mesh, 2);
    assert_eq!(two.len(), 2);
    assert!(total_aabb_volume(&two) - volume < total_aabb_volume(&one) - volume);
    // Both parts of the L are boxes.
    assert_relative_eq!(two[0].volume_estimate(), 2.0);
    assert_relative_eq!(two[1].volume_estimate(), 1.0);
}

#[test]
fn long_box_is_cut_into_solid_slabs() {
    let mesh = cuboid([0.0; 3], [4.0, 1.0, 1.0]);
    let hulls = decompose(&mesh, 2);

    assert_eq!(hulls.len(), 2);
    for hull in &hulls {
        assert_relative_eq!(hull.volume_estimate(), 2.0);
    }
}
