//! Convex hull computation and approximate convex decomposition of meshes.

pub use self::convex_hull3::{
    check_convex_hull, try_convex_hull, ConvexHullBuilder, ConvexHullError,
    DEFAULT_MAX_HULL_VERTICES, DEFAULT_QUANTIZATION_STEP,
};
pub use self::decomposition::{
    assemble, flatten_sections, CollisionSink, DecompParams, Decomposition, DecompositionError,
    DecompositionStats, SpatialDecomposer,
};

mod convex_hull3;
pub(crate) mod convex_hull_utils;
/// Approximate convex decomposition by recursive spatial bisection.
pub mod decomposition;
