use super::post_process::{
    merge_smallest_hulls, prune_small_hulls, sort_by_volume, split_largest_hulls,
    truncate_to_target,
};
use super::region::Region;
use super::{flatten_sections, DecompParams, DecompositionError, DecompositionStats};
use crate::math::{Real, DEFAULT_EPSILON};
use crate::shape::{ConvexHull, MeshSection, TriangleMesh};
use crate::transformation::ConvexHullBuilder;
use std::time::Instant;

/// Regions with at most this many triangles are never split.
const LEAF_TRIANGLE_COUNT: usize = 3;

/// The geometric tolerance of the decomposition, relative to the diagonal of the mesh AABB.
const RELATIVE_EPSILON: Real = 1.0e-5;

/// The result of an approximate convex decomposition.
#[derive(Clone, Debug)]
pub struct Decomposition {
    hulls: Vec<ConvexHull>,
    stats: DecompositionStats,
}

impl Decomposition {
    /// The convex hulls, sorted by decreasing bounding-box volume.
    pub fn hulls(&self) -> &[ConvexHull] {
        &self.hulls
    }

    /// Diagnostic counters collected during the decomposition.
    pub fn stats(&self) -> &DecompositionStats {
        &self.stats
    }

    /// Consumes this result and returns its hulls.
    pub fn into_hulls(self) -> Vec<ConvexHull> {
        self.hulls
    }
}

/// Approximate convex decomposition by recursive bisection of the mesh bounding box.
///
/// Each region of space, starting with the whole mesh, is either turned into a single convex
/// hull or split in two along the longest axis of its points. Regions become leaves when they
/// hold very few triangles, when the recursion gets too deep, when the time budget runs out,
/// or when they are small enough and enough hulls are already expected to reach
/// [`DecompParams::target_hull_count`]. The hulls are then pruned, split or merged to get as
/// close as possible to the target count.
///
/// Regions are processed one at a time, depth-first, so the result only depends on the input
/// and the parameters.
///
/// ```
/// use convex_decomp3d::math::Point;
/// use convex_decomp3d::shape::TriangleMesh;
/// use convex_decomp3d::transformation::{DecompParams, SpatialDecomposer};
///
/// // Two unit tetrahedra, ten units apart.
/// let mut vertices = Vec::new();
/// let mut indices = Vec::new();
/// for offset in [0.0, 10.0] {
///     let base = vertices.len() as u32;
///     vertices.extend([
///         Point::new(offset, 0.0, 0.0),
///         Point::new(offset + 1.0, 0.0, 0.0),
///         Point::new(offset, 1.0, 0.0),
///         Point::new(offset, 0.0, 1.0),
///     ]);
///     indices.extend([[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]].map(|t| t.map(|i| i + base)));
/// }
/// let mesh = TriangleMesh::new(vertices, indices).unwrap();
///
/// let decomposer = SpatialDecomposer::new(DecompParams::default().with_target_hull_count(2));
/// let decomposition = decomposer.decompose(&mesh).unwrap();
/// assert_eq!(decomposition.hulls().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialDecomposer {
    params: DecompParams,
}

impl Default for SpatialDecomposer {
    fn default() -> Self {
        Self::new(DecompParams::default())
    }
}

impl SpatialDecomposer {
    /// Creates a decomposer. Out-of-range parameters are clamped into their valid range.
    pub fn new(params: DecompParams) -> Self {
        let clamped = params.clamped();

        if clamped != params {
            log::warn!(
                "decomposition parameters clamped into their valid range: {:?} -> {:?}",
                params,
                clamped
            );
        }

        Self { params: clamped }
    }

    /// The (clamped) parameters of this decomposer.
    pub fn params(&self) -> &DecompParams {
        &self.params
    }

    /// Merges the sections of a multi-section mesh with [`flatten_sections`] and decomposes
    /// the result.
    pub fn decompose_sections(
        &self,
        sections: &[MeshSection],
    ) -> Result<Decomposition, DecompositionError> {
        let mesh = flatten_sections(sections)?;
        self.decompose(&mesh)
    }

    /// Computes an approximate convex decomposition of `mesh`.
    ///
    /// # Errors
    ///
    /// Fails with [`DecompositionError::InsufficientGeometry`] if the mesh has less than 4
    /// vertices, and with [`DecompositionError::ConvergenceFailure`] if no region yields a
    /// convex hull (for example because the mesh is flat). Individual regions whose hull cannot
    /// be built are skipped.
    pub fn decompose(&self, mesh: &TriangleMesh) -> Result<Decomposition, DecompositionError> {
        let start = Instant::now();
        let params = &self.params;
        let mut stats = DecompositionStats {
            input_vertices: mesh.vertices().len(),
            input_triangles: mesh.num_triangles(),
            ..Default::default()
        };

        if mesh.vertices().len() < 4 {
            return Err(DecompositionError::InsufficientGeometry {
                vertices: mesh.vertices().len(),
                indices: mesh.num_triangles() * 3,
            });
        }

        let mesh_aabb = mesh.local_aabb();
        let eps = (mesh_aabb.extents().norm() * RELATIVE_EPSILON).max(DEFAULT_EPSILON);
        let target = params.target_hull_count as usize;
        let max_hull_vertices = params.max_hull_vertices as usize;
        let builder = ConvexHullBuilder::default()
            .with_quantization_step(eps)
            .with_max_vertices(Some(max_hull_vertices));

        let mut hulls = Vec::new();
        let mut stack = vec![Region {
            triangles: (0..mesh.num_triangles() as u32).collect(),
            bounds: mesh_aabb,
            depth: 0,
        }];

        while let Some(region) = stack.pop() {
            stats.regions_visited += 1;
            stats.deepest_level = stats.deepest_level.max(region.depth);

            if !stats.time_budget_exhausted
                && params.time_budget.is_some_and(|budget| start.elapsed() >= budget)
            {
                log::warn!(
                    "decomposition time budget exhausted, {} pending regions become leaves",
                    stack.len() + 1
                );
                stats.time_budget_exhausted = true;
            }

            let depth = region.depth;
            let num_triangles = region.triangles.len();
            let points = region.points(mesh, eps);
            // The current region and every pending one are each expected to produce a hull.
            let expected_hulls = hulls.len() + stack.len() + 1;

            let is_leaf = num_triangles <= LEAF_TRIANGLE_COUNT
                || depth >= params.max_depth
                || stats.time_budget_exhausted
                || (points.num_vertices <= max_hull_vertices && expected_hulls >= target);

            if !is_leaf {
                if let Some(split) = region.split(mesh, &points.points, eps) {
                    log::trace!(
                        "split a region of {} triangles at depth {} along axis {} at {}: {} / {}",
                        num_triangles,
                        depth,
                        split.axis,
                        split.value,
                        split.left.triangles.len(),
                        split.right.triangles.len()
                    );

                    if split.rebalanced {
                        stats.rebalanced_splits += 1;
                    }

                    // The left side is processed first.
                    stack.push(split.right);
                    stack.push(split.left);
                    continue;
                }

                log::trace!(
                    "a region of {} triangles at depth {} cannot be split",
                    num_triangles,
                    depth
                );
            }

            stats.leaf_regions += 1;

            match builder.build(&points.points) {
                Ok(hull) => {
                    log::trace!(
                        "leaf region at depth {} produced a hull with {} points",
                        depth,
                        hull.points().len()
                    );
                    hulls.push(hull);
                    stats.hulls_from_leaves += 1;
                }
                Err(err) => {
                    log::debug!(
                        "skipping a leaf region of {} triangles at depth {}: {}",
                        num_triangles,
                        depth,
                        err
                    );
                    stats.failed_leaves += 1;
                }
            }
        }

        sort_by_volume(&mut hulls);
        stats.hulls_pruned =
            prune_small_hulls(&mut hulls, mesh_aabb.volume() * params.min_volume_ratio);

        if hulls.is_empty() {
            log::debug!(
                "decomposition failed: {} leaf regions, none produced a hull",
                stats.leaf_regions
            );
            return Err(DecompositionError::ConvergenceFailure);
        }

        stats.hulls_split = split_largest_hulls(&mut hulls, target, &builder, eps);
        stats.hulls_merged = merge_smallest_hulls(&mut hulls, target, &builder);
        stats.hulls_truncated = truncate_to_target(&mut hulls, target);
        stats.output_hulls = hulls.len();
        stats.elapsed = start.elapsed();

        log::debug!("decomposition finished: {:?}", stats);

        Ok(Decomposition { hulls, stats })
    }
}
