pub use self::builder::{ConvexHullBuilder, DEFAULT_MAX_HULL_VERTICES, DEFAULT_QUANTIZATION_STEP};
pub use self::convex_hull::try_convex_hull;
pub use self::error::ConvexHullError;
pub use self::validation::check_convex_hull;

use self::face::{BoundaryEdge, Face, FaceArena, FaceId};

mod builder;
mod convex_hull;
mod error;
mod face;
mod initial_mesh;
mod validation;
