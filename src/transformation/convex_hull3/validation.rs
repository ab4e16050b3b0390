use super::{ConvexHullError, FaceArena, FaceId};
use crate::math::{Point, Real};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::SortedPair;

/// Asserts that the face `id` and its three neighbors point back at each other through the
/// same edge, traversed in opposite directions.
pub(super) fn check_face_links(arena: &FaceArena, id: FaceId) {
    let face = &arena[id];

    for i in 0..3 {
        let neighbor_id = face.neighbors[i];
        assert!(arena.contains(neighbor_id), "dangling neighbor link");

        let (a, b) = face.edge(i);
        let neighbor = &arena[neighbor_id];
        let twin = neighbor
            .edge_index(b, a)
            .expect("the neighbor does not share the edge");
        assert_eq!(neighbor.neighbors[twin], id);
    }
}

/// Checks if a convex-hull is properly formed.
///
/// A well-formed hull has distinct points, and every edge of its triangles is shared by
/// exactly two triangles. Its Euler characteristic `V - E + F` must be 2.
pub fn check_convex_hull(
    points: &[Point<Real>],
    triangles: &[[u32; 3]],
) -> Result<(), ConvexHullError> {
    let mut edges = HashMap::default();

    struct EdgeData {
        adjacent_triangles: [usize; 2],
    }

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            if points[i] == points[j] {
                return Err(ConvexHullError::DuplicatePoints(i, j));
            }
        }
    }

    for (itri, tri) in triangles.iter().enumerate() {
        if tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2] {
            return Err(ConvexHullError::InternalError(
                "triangle with repeated vertices",
            ));
        }

        for i in 0..3 {
            let ivtx1 = tri[i];
            let ivtx2 = tri[(i + 1) % 3];
            let edge_key = SortedPair::new(ivtx1, ivtx2);

            match edges.entry(edge_key) {
                Entry::Vacant(e) => {
                    let _ = e.insert(EdgeData {
                        adjacent_triangles: [itri, usize::MAX],
                    });
                }
                Entry::Occupied(mut e) => {
                    if e.get().adjacent_triangles[1] != usize::MAX {
                        return Err(ConvexHullError::TJunction(itri, ivtx1, ivtx2));
                    }

                    e.get_mut().adjacent_triangles[1] = itri;
                }
            }
        }
    }

    if edges
        .values()
        .any(|edge| edge.adjacent_triangles[1] == usize::MAX)
    {
        return Err(ConvexHullError::UnfinishedTriangle);
    }

    if points.len() + triangles.len() != edges.len() + 2 {
        return Err(ConvexHullError::InternalError(
            "invalid Euler characteristic",
        ));
    }

    Ok(())
}
