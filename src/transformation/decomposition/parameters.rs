use crate::math::Real;
use std::time::Duration;

/// The largest recursion depth the decomposer accepts.
pub const MAX_DEPTH_LIMIT: u32 = 16;

/// Parameters controlling the approximate convex decomposition.
///
/// Use the `with_*` methods to customize the default values:
///
/// ```
/// use convex_decomp3d::transformation::DecompParams;
///
/// let params = DecompParams::default()
///     .with_target_hull_count(8)
///     .with_precision(0.5);
/// assert_eq!(params.max_depth, 9);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DecompParams {
    /// The number of hulls the decomposition should produce, in `[1, 64]`.
    ///
    /// Default: 8
    pub target_hull_count: u32,
    /// The maximum number of vertices of each hull, in `[6, 32]`.
    ///
    /// Hulls with more vertices are simplified by keeping the vertices furthest from their
    /// centroid. Regions with at most this many vertices may stop being split once enough
    /// hulls are expected.
    ///
    /// Default: 32
    pub max_hull_vertices: u32,
    /// The maximum recursion depth of the spatial bisection, in `[0, 16]`.
    ///
    /// Default: 8
    pub max_depth: u32,
    /// Hulls with a bounding-box volume smaller than this fraction of the mesh bounding-box
    /// volume are discarded, in `[0, 1)`.
    ///
    /// Default: 0.0001
    pub min_volume_ratio: Real,
    /// Once this much time has been spent, every region still waiting to be processed becomes
    /// a leaf. `None` means no limit.
    ///
    /// Default: `None`
    pub time_budget: Option<Duration>,
}

impl Default for DecompParams {
    fn default() -> Self {
        Self {
            target_hull_count: 8,
            max_hull_vertices: 32,
            max_depth: 8,
            min_volume_ratio: 0.0001,
            time_budget: None,
        }
    }
}

impl DecompParams {
    /// Sets the number of hulls the decomposition should produce.
    pub fn with_target_hull_count(mut self, count: u32) -> Self {
        self.target_hull_count = count;
        self
    }

    /// Sets the maximum number of vertices per hull.
    pub fn with_max_hull_vertices(mut self, count: u32) -> Self {
        self.max_hull_vertices = count;
        self
    }

    /// Sets the maximum recursion depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Derives the maximum recursion depth from a precision knob in `[0, 1]`.
    ///
    /// A precision of 0 gives a depth of 1 and a precision of 1 gives [`MAX_DEPTH_LIMIT`].
    pub fn with_precision(mut self, precision: Real) -> Self {
        let precision = if precision.is_nan() {
            0.0
        } else {
            precision.clamp(0.0, 1.0)
        };
        self.max_depth = 1 + (precision * (MAX_DEPTH_LIMIT - 1) as Real).round() as u32;
        self
    }

    /// Sets the minimum hull volume, relative to the mesh bounding-box volume.
    pub fn with_min_volume_ratio(mut self, ratio: Real) -> Self {
        self.min_volume_ratio = ratio;
        self
    }

    /// Sets the wall-clock budget of the decomposition.
    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    /// Returns a copy of these parameters with every value brought into its valid range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let min_volume_ratio = if self.min_volume_ratio.is_nan() {
            0.0
        } else {
            self.min_volume_ratio.clamp(0.0, 1.0 - Real::EPSILON)
        };

        Self {
            target_hull_count: self.target_hull_count.clamp(1, 64),
            max_hull_vertices: self.max_hull_vertices.clamp(6, 32),
            max_depth: self.max_depth.min(MAX_DEPTH_LIMIT),
            min_volume_ratio,
            time_budget: self.time_budget,
        }
    }
}
