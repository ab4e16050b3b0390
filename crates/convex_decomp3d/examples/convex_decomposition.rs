use convex_decomp3d::math::{Point, Real};
use convex_decomp3d::shape::TriangleMesh;
use convex_decomp3d::transformation::{DecompParams, SpatialDecomposer};

/// A "U"-shaped extrusion: three boxes glued together.
fn u_shape() -> TriangleMesh {
    let outline: [(Real, Real); 8] = [
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (2.0, 3.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (0.0, 3.0),
    ];
    let n = outline.len() as u32;

    let mut vertices: Vec<_> = outline.iter().map(|(x, y)| Point::new(*x, *y, 0.0)).collect();
    vertices.extend(outline.iter().map(|(x, y)| Point::new(*x, *y, 1.0)));

    let cap = [[0, 1, 4], [0, 4, 5], [1, 2, 3], [1, 3, 4], [0, 5, 6], [0, 6, 7]];
    let mut indices = Vec::new();

    for [a, b, c] in cap {
        indices.push([a, c, b]);
        indices.push([a + n, b + n, c + n]);
    }

    for i in 0..n {
        let j = (i + 1) % n;
        indices.push([i, j, j + n]);
        indices.push([i, j + n, i + n]);
    }

    TriangleMesh::new(vertices, indices).unwrap()
}

fn main() {
    let mesh = u_shape();

    for target in [1, 2, 3, 4] {
        let params = DecompParams::default()
            .with_target_hull_count(target)
            .with_precision(0.5);
        let decomposition = SpatialDecomposer::new(params).decompose(&mesh).unwrap();
        let total_volume: Real = decomposition
            .hulls()
            .iter()
            .map(|hull| hull.volume_estimate())
            .sum();

        println!(
            "target {}: {} hulls, total bounding volume {:.3} (mesh volume 7)",
            target,
            decomposition.hulls().len(),
            total_volume
        );
        println!("    {:?}", decomposition.stats());
    }
}
