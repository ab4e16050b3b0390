use crate::meshes::{cuboid, cuboid_section, l_shape, random_blob};
use convex_decomp3d::bounding_volume::Aabb;
use convex_decomp3d::shape::{ConvexHull, TriangleMesh};
use convex_decomp3d::transformation::{
    assemble, flatten_sections, ConvexHullBuilder, DecompParams, Decomposition, SpatialDecomposer,
};

fn decompose(mesh: &TriangleMesh, target: u32) -> Decomposition {
    let params = DecompParams::default().with_target_hull_count(target);
    SpatialDecomposer::new(params).decompose(mesh).unwrap()
}

fn hulls_aabb(hulls: &[ConvexHull]) -> Aabb {
    hulls
        .iter()
        .fold(Aabb::new_invalid(), |acc, hull| acc.merged(hull.aabb()))
}

#[test]
fn hulls_are_well_formed() {
    for seed in 0..8 {
        let mesh = random_blob(seed, 60);

        for target in [1, 3, 8] {
            let result = decompose(&mesh, target);
            let hulls = result.hulls();

            assert!(!hulls.is_empty());
            assert!(hulls.len() <= target as usize);

            for hull in hulls {
                let points = hull.points();
                assert!(points.len() >= 4);
                assert!(points.len() <= DecompParams::default().max_hull_vertices as usize);

                for i in 0..points.len() {
                    for j in i + 1..points.len() {
                        assert_ne!(points[i], points[j]);
                    }
                }
            }
        }
    }
}

#[test]
fn hulls_are_convex() {
    let builder = ConvexHullBuilder::default().with_max_vertices(None);

    for seed in 10..14 {
        let mesh = random_blob(seed, 80);

        for hull in decompose(&mesh, 6).hulls() {
            let rebuilt = builder.build(hull.points()).unwrap();
            assert!(rebuilt.points().len() <= hull.points().len());
        }
    }
}

#[test]
fn decomposition_is_deterministic() {
    for seed in 20..24 {
        let mesh = random_blob(seed, 80);
        let first = decompose(&mesh, 5);
        let second = decompose(&mesh, 5);

        assert_eq!(first.hulls(), second.hulls());
    }
}

#[test]
fn hulls_cover_the_mesh_bounds() {
    let meshes = [
        (l_shape(), 1),
        (l_shape(), 2),
        (cuboid([0.0; 3], [4.0, 1.0, 1.0]), 2),
        (
            flatten_sections(&[
                cuboid_section([0.0; 3], [1.0; 3]),
                cuboid_section([3.0, 0.0, 0.0], [4.0, 1.0, 1.0]),
            ])
            .unwrap(),
            2,
        ),
    ];

    for (mesh, target) in &meshes {
        let result = decompose(mesh, *target);
        let covered = hulls_aabb(result.hulls()).loosened(1.0e-4);
        assert!(covered.contains(&mesh.local_aabb()));
    }
}

#[test]
fn hulls_cover_dense_blobs() {
    // These blobs have more vertices than a single hull may keep, so the root region is split
    // even when a single hull is requested.
    for seed in 0..4 {
        let mesh = random_blob(seed, 400);
        let bounds = mesh.local_aabb();

        for target in [1, 8] {
            let result = decompose(&mesh, target);
            assert!(result.hulls().len() <= target as usize);

            let covered = hulls_aabb(result.hulls()).loosened(1.0e-4);
            assert!(
                covered.contains(&bounds),
                "seed {}, target {}: {:?} does not cover {:?}",
                seed,
                target,
                covered,
                bounds
            );

            // Every mesh vertex is close to one of the hulls' bounding boxes.
            for pt in mesh.vertices() {
                assert!(result
                    .hulls()
                    .iter()
                    .any(|hull| hull.aabb().loosened(1.0e-4).contains_local_point(pt)));
            }
        }
    }
}

#[test]
fn stats_account_for_every_hull() {
    for seed in 30..34 {
        let mesh = random_blob(seed, 60);
        let result = decompose(&mesh, 4);
        let stats = result.stats();

        assert_eq!(stats.input_vertices, mesh.vertices().len());
        assert_eq!(stats.input_triangles, mesh.num_triangles());
        assert_eq!(stats.output_hulls, result.hulls().len());
        assert_eq!(
            stats.hulls_from_leaves + stats.hulls_split,
            stats.output_hulls + stats.hulls_pruned + stats.hulls_merged + stats.hulls_truncated
        );
        assert_eq!(
            stats.leaf_regions,
            stats.hulls_from_leaves + stats.failed_leaves
        );
    }
}

#[test]
fn hulls_are_sorted_by_decreasing_volume() {
    let result = decompose(&random_blob(40, 100), 8);

    for pair in result.hulls().windows(2) {
        assert!(pair[0].volume_estimate() >= pair[1].volume_estimate());
    }
}

#[test]
fn sections_end_to_end() {
    let sections = [
        cuboid_section([0.0; 3], [1.0; 3]),
        cuboid_section([0.0, 5.0, 0.0], [1.0, 6.0, 2.0]),
    ];
    let params = DecompParams::default().with_target_hull_count(2);
    let result = SpatialDecomposer::new(params)
        .decompose_sections(&sections)
        .unwrap();

    let mut sink: Vec<ConvexHull> = Vec::new();
    let handles = assemble(result.hulls(), &mut sink);

    assert_eq!(handles, vec![0, 1]);
    assert_eq!(&sink[..], result.hulls());
    // The taller box comes first.
    assert_eq!(sink[0].aabb().maxs.z, 2.0);
}
