//! Approximate convex decomposition of triangle meshes.
//!
//! The mesh is recursively bisected along the longest axis of each region's bounding box, and
//! the convex hull of every leaf region becomes one output hull. See [`SpatialDecomposer`].

pub use self::assembler::{assemble, CollisionSink};
pub use self::decomposer::{Decomposition, SpatialDecomposer};
pub use self::error::DecompositionError;
pub use self::flatten::flatten_sections;
pub use self::parameters::{DecompParams, MAX_DEPTH_LIMIT};
pub use self::stats::DecompositionStats;

mod assembler;
mod decomposer;
mod error;
mod flatten;
mod parameters;
mod post_process;
mod region;
mod stats;
