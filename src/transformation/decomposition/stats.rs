use std::time::Duration;

/// Diagnostic counters collected during a decomposition.
///
/// These are meant to help tuning [`DecompParams`](super::DecompParams); they are not part of
/// the success or failure of the decomposition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DecompositionStats {
    /// The number of vertices of the input mesh.
    pub input_vertices: usize,
    /// The number of triangles of the input mesh.
    pub input_triangles: usize,
    /// The number of regions processed, leaves included.
    pub regions_visited: usize,
    /// The number of regions that were not split further.
    pub leaf_regions: usize,
    /// The number of leaf regions whose convex hull could not be built.
    pub failed_leaves: usize,
    /// The number of splits whose plane had to be recomputed to balance both sides.
    pub rebalanced_splits: usize,
    /// The deepest recursion level reached.
    pub deepest_level: u32,
    /// The number of hulls produced by leaf regions.
    pub hulls_from_leaves: usize,
    /// The number of hulls bisected during post-processing.
    pub hulls_split: usize,
    /// The number of hulls discarded for being too small.
    pub hulls_pruned: usize,
    /// The number of hulls merged into another one to respect the target hull count.
    pub hulls_merged: usize,
    /// The number of hulls that could not be merged and were dropped to respect the target
    /// hull count.
    pub hulls_truncated: usize,
    /// The number of hulls returned.
    pub output_hulls: usize,
    /// Whether the time budget ran out before the bisection completed.
    pub time_budget_exhausted: bool,
    /// The total time spent in the decomposition.
    pub elapsed: Duration,
}
