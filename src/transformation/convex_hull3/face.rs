use crate::math::{Point, Real, Vector};
use crate::utils::{self, PlaneSide};
use slab::Slab;
use std::ops::{Index, IndexMut};

/// A stable handle to a face stored in a [`FaceArena`].
pub(super) type FaceId = usize;

/// Faces with `|AB × AC|` below this fraction of their squared longest edge have no reliable
/// normal.
const SLIVER_TOLERANCE: f64 = 1.0e-12;

/// A triangular face of the hull under construction.
///
/// The edge `i` goes from `pts[i]` to `pts[(i + 1) % 3]` and is shared with the face
/// `neighbors[i]`, which traverses the same edge in the opposite direction.
///
/// Plane distances are computed in double precision: thin faces are common on dense
/// clouds, and their single-precision normals are too noisy to decide visibility.
#[derive(Debug)]
pub(super) struct Face {
    pub pts: [usize; 3],
    pub normal: Vector<f64>,
    pub neighbors: [FaceId; 3],
    /// Points lying strictly in front of this face and assigned to it.
    pub outside: Vec<usize>,
    pub furthest_point: usize,
    pub furthest_distance: Real,
    /// Transient traversal mark. Always `false` between two traversals.
    pub visited: bool,
    /// A face with aligned vertices has no normal. It never sees any point, and it is seen
    /// by every eye point reaching it during a horizon search.
    pub degenerate: bool,
}

fn to_f64(pt: &Point<Real>) -> Vector<f64> {
    pt.coords.cast::<f64>()
}

impl Face {
    pub fn new(p0: usize, p1: usize, p2: usize, points: &[Point<Real>]) -> Face {
        let [a, b, c] = [p0, p1, p2].map(|i| to_f64(&points[i]));
        let scaled_normal = (b - a).cross(&(c - a));
        let longest_edge_sq = (b - a)
            .norm_squared()
            .max((c - b).norm_squared())
            .max((a - c).norm_squared());
        let degenerate = scaled_normal.norm() <= SLIVER_TOLERANCE * longest_edge_sq;

        Face {
            pts: [p0, p1, p2],
            normal: if degenerate {
                Vector::zeros()
            } else {
                scaled_normal.normalize()
            },
            neighbors: [usize::MAX; 3],
            outside: Vec::new(),
            furthest_point: usize::MAX,
            furthest_distance: 0.0,
            visited: false,
            degenerate,
        }
    }

    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        (self.pts[i], self.pts[(i + 1) % 3])
    }

    /// The index of the edge going from `a` to `b`, if this face has one.
    #[inline]
    pub fn edge_index(&self, a: usize, b: usize) -> Option<usize> {
        (0..3).find(|i| self.edge(*i) == (a, b))
    }

    #[inline]
    pub fn signed_distance(&self, pt: usize, points: &[Point<Real>]) -> Real {
        let origin = to_f64(&points[self.pts[0]]);
        self.normal.dot(&(to_f64(&points[pt]) - origin)) as Real
    }

    #[inline]
    pub fn side_of(&self, pt: usize, points: &[Point<Real>], eps: Real) -> PlaneSide {
        if self.degenerate {
            return PlaneSide::OnPlane;
        }

        utils::classify_signed_distance(self.signed_distance(pt, points), eps)
    }

    #[inline]
    pub fn can_see(&self, pt: usize, points: &[Point<Real>], eps: Real) -> bool {
        self.side_of(pt, points, eps).is_front()
    }

    /// Whether this face is removed when `eye` gets inserted and the horizon search reaches it.
    #[inline]
    pub fn is_visible_from(&self, eye: usize, points: &[Point<Real>], eps: Real) -> bool {
        self.degenerate || self.can_see(eye, points, eps)
    }

    pub fn add_outside_point(&mut self, pt: usize, points: &[Point<Real>]) {
        let distance = self.signed_distance(pt, points);

        if self.outside.is_empty() || distance > self.furthest_distance {
            self.furthest_distance = distance;
            self.furthest_point = pt;
        }

        self.outside.push(pt);
    }

    /// Removes `pt` from the outside set and updates the furthest point accordingly.
    pub fn remove_outside_point(&mut self, pt: usize, points: &[Point<Real>]) {
        self.outside.retain(|p| *p != pt);
        self.furthest_point = usize::MAX;
        self.furthest_distance = 0.0;

        for i in 0..self.outside.len() {
            let candidate = self.outside[i];
            let distance = self.signed_distance(candidate, points);

            if i == 0 || distance > self.furthest_distance {
                self.furthest_distance = distance;
                self.furthest_point = candidate;
            }
        }
    }
}

/// An edge between a face seen by the eye point and one that isn't.
///
/// `v0 -> v1` is the edge as traversed by the visible face; `outer_face` is the face that
/// remains on the hull, and `outer_edge` the index of the same edge in it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct BoundaryEdge {
    pub v0: usize,
    pub v1: usize,
    pub outer_face: FaceId,
    pub outer_edge: usize,
}

/// The pool of faces of a hull under construction.
///
/// Faces refer to each other through [`FaceId`]s instead of references, so the cyclic
/// adjacency graph can be mutated freely. Removing a face vacates its slot; a vacated slot
/// may be reused by a later insertion, so removals of a rebuild step always happen after
/// all of its insertions.
#[derive(Debug, Default)]
pub(super) struct FaceArena {
    faces: Slab<Face>,
}

impl FaceArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, face: Face) -> FaceId {
        self.faces.insert(face)
    }

    pub fn remove(&mut self, id: FaceId) -> Option<Face> {
        self.faces.try_remove(id)
    }

    pub fn get(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id)
    }

    pub fn contains(&self, id: FaceId) -> bool {
        self.faces.contains(id)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// The live face with the smallest handle.
    pub fn first(&self) -> Option<FaceId> {
        self.ids().next()
    }

    /// The handles of all the live faces, in increasing order.
    pub fn ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().map(|(id, _)| id)
    }

    /// Wires the neighbors of `ids` to each other by matching their shared edges.
    ///
    /// Every edge of every face of `ids` must be traversed in the opposite direction by
    /// exactly one other face of `ids`.
    pub fn link_by_shared_edges(&mut self, ids: &[FaceId]) -> bool {
        for &id in ids {
            for i in 0..3 {
                let (a, b) = self.faces[id].edge(i);
                let twin = ids
                    .iter()
                    .copied()
                    .find(|other| *other != id && self.faces[*other].edge_index(b, a).is_some());

                match twin {
                    Some(twin) => self.faces[id].neighbors[i] = twin,
                    None => return false,
                }
            }
        }

        true
    }
}

impl Index<FaceId> for FaceArena {
    type Output = Face;

    #[inline]
    fn index(&self, id: FaceId) -> &Face {
        &self.faces[id]
    }
}

impl IndexMut<FaceId> for FaceArena {
    #[inline]
    fn index_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id]
    }
}
