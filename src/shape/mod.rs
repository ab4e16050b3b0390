//! Shapes manipulated by the decomposition.

pub use self::convex_hull::ConvexHull;
pub use self::mesh_section::MeshSection;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriangleMesh, TriangleMeshError};

mod convex_hull;
mod mesh_section;
mod triangle;
mod trimesh;
