//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::clip::clip_halfspace_polygon;
pub use self::dedup::dedup_points;
pub use self::plane_side::{classify_on_axis, classify_signed_distance, PlaneSide};
pub use self::sorted_pair::SortedPair;

mod center;
mod clip;
mod dedup;
pub mod hashmap;
mod plane_side;
mod sorted_pair;
