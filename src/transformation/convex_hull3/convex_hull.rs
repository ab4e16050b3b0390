use super::initial_mesh::init_tetrahedron;
use super::validation::check_face_links;
use super::{BoundaryEdge, ConvexHullBuilder, ConvexHullError, Face, FaceArena, FaceId};
use crate::math::{Point, Real};
use smallvec::SmallVec;

/// Tolerance of the plane-side tests, in the normalized frame where the input cloud has a
/// unit diagonal.
pub(crate) const HULL_EPSILON: Real = crate::math::DEFAULT_EPSILON * 100.0;

/// The faces and vertices of a finished hull, referencing the points it was built from.
#[derive(Debug)]
pub(super) struct HullTopology {
    /// Sorted indices of the input points that are vertices of the hull.
    pub vertices: Vec<usize>,
    /// Triangles of the hull, indexing the input points.
    pub triangles: Vec<[usize; 3]>,
}

/// Computes the convex hull of a set of 3d points.
///
/// Near-duplicate points are merged first (see [`ConvexHullBuilder`]). The returned mesh only
/// contains the vertices of the hull, in the order they appear in the input, and triangles with
/// outward-facing counter-clockwise winding.
///
/// # Errors
///
/// Returns an error if there are less than four distinct points, or if all the points are
/// collinear or coplanar.
///
/// ```
/// use convex_decomp3d::transformation::try_convex_hull;
/// use convex_decomp3d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
///     Point::new(0.1, 0.1, 0.1), // Inside.
/// ];
/// let (vertices, triangles) = try_convex_hull(&points).unwrap();
/// assert_eq!(vertices.len(), 4);
/// assert_eq!(triangles.len(), 4);
/// ```
pub fn try_convex_hull(
    points: &[Point<Real>],
) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
    ConvexHullBuilder::default()
        .with_max_vertices(None)
        .build_mesh(points)
}

/// Runs QuickHull on distinct points.
///
/// `max_iterations` bounds the number of points inserted into the hull.
pub(super) fn quickhull(
    points: &[Point<Real>],
    max_iterations: usize,
) -> Result<HullTopology, ConvexHullError> {
    if points.len() < 4 {
        return Err(ConvexHullError::InsufficientPoints(points.len()));
    }

    let mut normalized_points = points.to_vec();
    let _ = crate::transformation::convex_hull_utils::normalize(&mut normalized_points);
    let points = &normalized_points[..];
    let eps = HULL_EPSILON;

    let mut arena = FaceArena::new();
    let initial_faces = init_tetrahedron(points, eps, &mut arena)?;

    if cfg!(debug_assertions) {
        for id in initial_faces {
            check_face_links(&arena, id);
        }
    }

    let seeds: SmallVec<[usize; 12]> = initial_faces
        .iter()
        .flat_map(|id| arena[*id].pts)
        .collect();

    // Seeds and eye points are either hull vertices or known to be within the tolerance of
    // the hull. They are never assigned to a face again.
    let mut consumed = vec![false; points.len()];
    for pt in &seeds {
        consumed[*pt] = true;
    }

    let unassigned = (0..points.len()).filter(|i| !consumed[*i]);
    assign_outside_points(&mut arena, &initial_faces, unassigned, points, eps);

    // Faces are processed in LIFO order. Entries may become stale when their face gets removed
    // (or when its slot is reused), so they are re-checked when popped.
    let mut pending: Vec<FaceId> = initial_faces
        .iter()
        .rev()
        .copied()
        .filter(|id| !arena[*id].outside.is_empty())
        .collect();
    let mut visible = Vec::new();
    let mut horizon = Vec::new();
    let mut orphans = Vec::new();
    let mut iterations = 0;

    loop {
        while let Some(face_id) = pending.pop() {
            let eye = match arena.get(face_id) {
                Some(face) if !face.outside.is_empty() => face.furthest_point,
                _ => continue,
            };

            if iterations == max_iterations {
                return Err(ConvexHullError::IterationLimitReached(iterations));
            }
            iterations += 1;
            consumed[eye] = true;

            if !compute_horizon(&mut arena, face_id, eye, points, eps, &mut visible, &mut horizon)
            {
                // Numerical noise made the visible region non simply-connected. The eye point
                // lies within the tolerance of the hull, so it can be dropped.
                log::trace!("dropping eye point {} with a broken horizon", eye);

                for id in &visible {
                    arena[*id].visited = false;
                }

                arena[face_id].remove_outside_point(eye, points);
                if !arena[face_id].outside.is_empty() {
                    pending.push(face_id);
                }

                continue;
            }

            let new_faces = attach_new_faces(&mut arena, &horizon, eye, points);

            orphans.clear();
            for id in visible.drain(..) {
                if let Some(face) = arena.remove(id) {
                    orphans.extend(face.outside.into_iter().filter(|pt| *pt != eye));
                }
            }

            // Orphans seen by none of the new faces are inside the hull, unless the only faces
            // able to tell are degenerate. The final sweep below catches those.
            assign_outside_points(&mut arena, &new_faces, orphans.drain(..), points, eps);

            pending.extend(
                new_faces
                    .iter()
                    .rev()
                    .copied()
                    .filter(|id| !arena[*id].outside.is_empty()),
            );
        }

        // Every point still in front of a live face goes back into the loop.
        let live: Vec<FaceId> = arena.ids().collect();
        let remaining = (0..points.len()).filter(|i| !consumed[*i]);
        assign_outside_points(&mut arena, &live, remaining, points, eps);
        pending.extend(live.iter().copied().filter(|id| !arena[*id].outside.is_empty()));

        if pending.is_empty() {
            break;
        }

        log::trace!("{} faces still see unprocessed points", pending.len());
    }

    extract_topology(&mut arena)
}

/// Assigns every point of `candidates` to the first face of `faces` it lies strictly in front
/// of. Points in front of no face are left unassigned.
fn assign_outside_points(
    arena: &mut FaceArena,
    faces: &[FaceId],
    candidates: impl Iterator<Item = usize>,
    points: &[Point<Real>],
    eps: Real,
) {
    for pt in candidates {
        if let Some(id) = faces
            .iter()
            .copied()
            .find(|id| arena[*id].can_see(pt, points, eps))
        {
            arena[id].add_outside_point(pt, points);
        }
    }
}

/// Flood-fills the faces visible from `eye`, starting with `start`, and records the horizon.
///
/// On return, `visible` contains the faces seen from `eye` (all marked as visited) and
/// `horizon` the edges between visible and non-visible faces, ordered such that each edge
/// starts where the previous one ends. Returns `false` if the horizon does not form a single
/// simple loop.
fn compute_horizon(
    arena: &mut FaceArena,
    start: FaceId,
    eye: usize,
    points: &[Point<Real>],
    eps: Real,
    visible: &mut Vec<FaceId>,
    horizon: &mut Vec<BoundaryEdge>,
) -> bool {
    visible.clear();
    horizon.clear();

    arena[start].visited = true;
    visible.push(start);

    // Each entry is an edge of a visible face that still has to be crossed. Edges are pushed
    // in reverse order so they are crossed in the winding order of their face, which makes
    // the horizon come out as an ordered loop.
    let mut stack: SmallVec<[(FaceId, usize); 32]> = SmallVec::new();
    stack.extend([(start, 2), (start, 1), (start, 0)]);

    while let Some((from, edge)) = stack.pop() {
        let (v0, v1) = arena[from].edge(edge);
        let neighbor = arena[from].neighbors[edge];

        if !arena.contains(neighbor) {
            return false;
        }

        if arena[neighbor].visited {
            continue;
        }

        let Some(twin) = arena[neighbor].edge_index(v1, v0) else {
            return false;
        };

        if arena[neighbor].is_visible_from(eye, points, eps) {
            arena[neighbor].visited = true;
            visible.push(neighbor);
            stack.push((neighbor, (twin + 2) % 3));
            stack.push((neighbor, (twin + 1) % 3));
        } else {
            horizon.push(BoundaryEdge {
                v0,
                v1,
                outer_face: neighbor,
                outer_edge: twin,
            });
        }
    }

    is_simple_loop(horizon)
}

fn is_simple_loop(horizon: &[BoundaryEdge]) -> bool {
    if horizon.len() < 3 {
        return false;
    }

    for (i, edge) in horizon.iter().enumerate() {
        if edge.v1 != horizon[(i + 1) % horizon.len()].v0 {
            return false;
        }

        if horizon[..i].iter().any(|other| other.v0 == edge.v0) {
            return false;
        }
    }

    true
}

/// Creates one face per horizon edge, joining the edge to `eye`, and wires them to each
/// other and to the faces remaining on the hull.
fn attach_new_faces(
    arena: &mut FaceArena,
    horizon: &[BoundaryEdge],
    eye: usize,
    points: &[Point<Real>],
) -> Vec<FaceId> {
    let new_faces: Vec<FaceId> = horizon
        .iter()
        .map(|edge| arena.insert(Face::new(eye, edge.v0, edge.v1, points)))
        .collect();
    let n = new_faces.len();

    for (k, edge) in horizon.iter().enumerate() {
        let prev = new_faces[(k + n - 1) % n];
        let next = new_faces[(k + 1) % n];

        // Edge 0 is (eye, v0), edge 1 is (v0, v1), and edge 2 is (v1, eye).
        arena[new_faces[k]].neighbors = [prev, edge.outer_face, next];
        arena[edge.outer_face].neighbors[edge.outer_edge] = new_faces[k];
    }

    new_faces
}

/// Collects the live faces by traversing the adjacency graph, and the set of points they use.
fn extract_topology(arena: &mut FaceArena) -> Result<HullTopology, ConvexHullError> {
    let start = arena
        .first()
        .ok_or(ConvexHullError::InternalError("empty hull"))?;

    let mut faces = vec![start];
    arena[start].visited = true;
    let mut i = 0;

    while i < faces.len() {
        let neighbors = arena[faces[i]].neighbors;

        for neighbor in neighbors {
            if !arena.contains(neighbor) {
                return Err(ConvexHullError::InternalError("dangling face link"));
            }

            if !arena[neighbor].visited {
                arena[neighbor].visited = true;
                faces.push(neighbor);
            }
        }

        i += 1;
    }

    for id in &faces {
        arena[*id].visited = false;
    }

    if faces.len() != arena.len() {
        return Err(ConvexHullError::InternalError("disconnected hull faces"));
    }

    let triangles: Vec<[usize; 3]> = faces.iter().map(|id| arena[*id].pts).collect();
    let mut vertices: Vec<usize> = triangles.iter().flatten().copied().collect();
    vertices.sort_unstable();
    vertices.dedup();

    Ok(HullTopology {
        vertices,
        triangles,
    })
}
