use super::convex_hull::quickhull;
use super::ConvexHullError;
use crate::math::{Point, Real, Vector};
use crate::shape::ConvexHull;
use crate::transformation::convex_hull_utils::support_point_id;
use crate::utils;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// The default cell size of the grid used to merge near-duplicate points.
pub const DEFAULT_QUANTIZATION_STEP: Real = 1.0e-5;

/// The default maximum number of vertices of a hull built by [`ConvexHullBuilder::build`].
pub const DEFAULT_MAX_HULL_VERTICES: usize = 32;

/// Configurable QuickHull convex hull construction.
///
/// The builder first merges near-duplicate points by snapping them to a grid, then runs
/// QuickHull. [`ConvexHullBuilder::build`] additionally caps the number of vertices of the
/// resulting hull.
///
/// ```
/// use convex_decomp3d::transformation::ConvexHullBuilder;
/// use convex_decomp3d::math::{Point, Real};
///
/// let points: Vec<_> = (0..100)
///     .map(|i| {
///         let t = i as Real * 0.1;
///         Point::new(t.cos(), t.sin(), (i % 7) as Real * 0.1)
///     })
///     .collect();
///
/// let hull = ConvexHullBuilder::default()
///     .with_max_vertices(Some(16))
///     .build(&points)
///     .unwrap();
/// assert!(hull.points().len() <= 16);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConvexHullBuilder {
    quantization_step: Real,
    max_vertices: Option<usize>,
    max_iterations: Option<usize>,
}

impl Default for ConvexHullBuilder {
    fn default() -> Self {
        Self {
            quantization_step: DEFAULT_QUANTIZATION_STEP,
            max_vertices: Some(DEFAULT_MAX_HULL_VERTICES),
            max_iterations: None,
        }
    }
}

impl ConvexHullBuilder {
    /// Sets the cell size of the grid used to merge near-duplicate input points.
    pub fn with_quantization_step(mut self, step: Real) -> Self {
        assert!(step > 0.0, "The quantization step must be positive.");
        self.quantization_step = step;
        self
    }

    /// Sets the maximum number of vertices kept by [`Self::build`]. `None` disables the cap.
    ///
    /// When the hull has more vertices, the extreme vertices along each axis are kept first, so
    /// the bounding box is preserved, then the ones furthest from the centroid of the input
    /// points. This is a lossy approximation: the hull of the kept vertices is contained in, but
    /// generally different from, the exact hull.
    pub fn with_max_vertices(mut self, max_vertices: Option<usize>) -> Self {
        if let Some(max) = max_vertices {
            assert!(max >= 4, "A hull needs at least 4 vertices.");
        }
        self.max_vertices = max_vertices;
        self
    }

    /// Sets the maximum number of points inserted into the hull before giving up with
    /// [`ConvexHullError::IterationLimitReached`]. `None` means one iteration per distinct
    /// input point, which always suffices.
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Computes the hull of `points` and returns its vertices, possibly simplified to respect
    /// the vertex cap, with their bounding box.
    pub fn build(&self, points: &[Point<Real>]) -> Result<ConvexHull, ConvexHullError> {
        let unique = utils::dedup_points(points, self.quantization_step);
        let topology = quickhull(&unique, self.iteration_budget(unique.len()))?;
        let mut vertices = topology.vertices;

        if let Some(max) = self.max_vertices {
            if vertices.len() > max {
                log::trace!(
                    "simplifying a hull with {} vertices down to {}",
                    vertices.len(),
                    max
                );
                vertices = simplify_vertices(&unique, vertices, max);
            }
        }

        Ok(ConvexHull::from_hull_points(
            vertices.into_iter().map(|i| unique[i]).collect(),
        ))
    }

    /// Computes the hull of `points` as a triangle mesh. The vertex cap is not applied.
    ///
    /// The triangles index the returned vertices, which are listed in input order.
    pub fn build_mesh(
        &self,
        points: &[Point<Real>],
    ) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
        let unique = utils::dedup_points(points, self.quantization_step);
        let topology = quickhull(&unique, self.iteration_budget(unique.len()))?;

        let mut remap = vec![u32::MAX; unique.len()];
        for (new_id, old_id) in topology.vertices.iter().enumerate() {
            remap[*old_id] = new_id as u32;
        }

        let vertices = topology.vertices.iter().map(|i| unique[*i]).collect();
        let triangles = topology
            .triangles
            .iter()
            .map(|tri| tri.map(|i| remap[i]))
            .collect();

        Ok((vertices, triangles))
    }

    fn iteration_budget(&self, num_points: usize) -> usize {
        self.max_iterations.unwrap_or(num_points)
    }
}

/// Keeps `max` of the hull `vertices`: the support points of the six axis directions, then the
/// vertices furthest from the centroid of `points`.
///
/// The result is sorted by index so it keeps the input order.
fn simplify_vertices(points: &[Point<Real>], vertices: Vec<usize>, max: usize) -> Vec<usize> {
    let hull_points: Vec<_> = vertices.iter().map(|i| points[*i]).collect();
    let mut kept: Vec<usize> = Vec::with_capacity(max);

    for axis in [Vector::x(), Vector::y(), Vector::z()] {
        for dir in [-axis, axis] {
            if let Some(id) = support_point_id(&dir, &hull_points) {
                if !kept.contains(&vertices[id]) {
                    kept.push(vertices[id]);
                }
            }
        }
    }

    kept.truncate(max);

    let centroid = utils::center(points);
    let mut others: Vec<usize> = vertices.into_iter().filter(|i| !kept.contains(i)).collect();
    others.sort_by_key(|i| Reverse(OrderedFloat(na::distance_squared(&points[*i], &centroid))));
    others.truncate(max - kept.len());

    kept.append(&mut others);
    kept.sort_unstable();
    kept
}
