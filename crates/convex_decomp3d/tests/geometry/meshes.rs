use convex_decomp3d::math::{Point, Real};
use convex_decomp3d::shape::{MeshSection, TriangleMesh};
use convex_decomp3d::transformation::try_convex_hull;

/// The 8 vertices and 12 triangles of an axis-aligned box.
pub fn cuboid_section(mins: [Real; 3], maxs: [Real; 3]) -> MeshSection {
    let mut vertices = Vec::new();
    for i in 0..8 {
        vertices.push(Point::new(
            if i & 1 == 0 { mins[0] } else { maxs[0] },
            if i & 2 == 0 { mins[1] } else { maxs[1] },
            if i & 4 == 0 { mins[2] } else { maxs[2] },
        ));
    }

    let triangles = [
        [0, 2, 1],
        [1, 2, 3],
        [4, 5, 6],
        [5, 7, 6],
        [0, 1, 4],
        [1, 5, 4],
        [2, 6, 3],
        [3, 6, 7],
        [0, 4, 2],
        [2, 4, 6],
        [1, 3, 5],
        [3, 7, 5],
    ];
    MeshSection::from_triangles(vertices, &triangles)
}

pub fn cuboid(mins: [Real; 3], maxs: [Real; 3]) -> TriangleMesh {
    let section = cuboid_section(mins, maxs);
    TriangleMesh::from_flat_indices(section.vertices, &section.indices).unwrap()
}

/// The L-shaped polygon (0,0) (2,0) (2,1) (1,1) (1,2) (0,2), extruded along z from 0 to 1.
///
/// Its volume is 3 and its bounding box is `[0, 2] x [0, 2] x [0, 1]`.
pub fn l_shape() -> TriangleMesh {
    let outline: [(Real, Real); 7] = [
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ];
    let n = outline.len() as u32;

    let mut vertices: Vec<_> = outline.iter().map(|(x, y)| Point::new(*x, *y, 0.0)).collect();
    vertices.extend(outline.iter().map(|(x, y)| Point::new(*x, *y, 1.0)));

    // The caps are made of the [1, 2] x [0, 1] square and the [0, 1] x [0, 2] rectangle.
    let cap = [[1, 2, 3], [1, 3, 4], [0, 1, 4], [0, 4, 5], [0, 5, 6]];
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

/// The convex hull of a seeded random point cloud in the unit cube, as a triangle mesh.
pub fn random_blob(seed: u64, num_points: usize) -> TriangleMesh {
    let mut rng = oorandom::Rand32::new(seed);
    let points: Vec<_> = (0..num_points)
        .map(|_| Point::new(rng.rand_float(), rng.rand_float(), rng.rand_float()))
        .collect();
    let (vertices, indices) = try_convex_hull(&points).unwrap();
    TriangleMesh::new(vertices, indices).unwrap()
}
