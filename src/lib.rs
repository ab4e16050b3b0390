/*!
convex_decomp3d
========

**convex_decomp3d** computes approximate convex decompositions of 3D triangle
meshes: a handful of convex point-hulls whose union approximates the volume of
the input, ready to be fed to a physics engine as collision primitives.

The crate is made of two layers:

- a QuickHull convex-hull builder ([`transformation::try_convex_hull`],
  [`transformation::ConvexHullBuilder`]) operating on an arena of triangular
  faces connected by adjacency links;
- a recursive spatial decomposer
  ([`transformation::decomposition::SpatialDecomposer`]) that bisects the
  triangles of a mesh along the longest axis of their bounding box and runs
  QuickHull on every leaf region.

```
use convex_decomp3d::math::Point;
use convex_decomp3d::shape::TriangleMesh;
use convex_decomp3d::transformation::decomposition::{DecompParams, SpatialDecomposer};

let vertices = vec![
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(1.0, 1.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
    Point::new(0.0, 0.0, 1.0),
    Point::new(1.0, 0.0, 1.0),
    Point::new(1.0, 1.0, 1.0),
    Point::new(0.0, 1.0, 1.0),
];
let indices = vec![
    [0, 2, 1], [0, 3, 2], [4, 5, 6], [4, 6, 7],
    [0, 1, 5], [0, 5, 4], [1, 2, 6], [1, 6, 5],
    [2, 3, 7], [2, 7, 6], [3, 0, 4], [3, 4, 7],
];
let cube = TriangleMesh::new(vertices, indices).unwrap();

let params = DecompParams::default().with_target_hull_count(1);
let decomposition = SpatialDecomposer::new(params).decompose(&cube).unwrap();
assert_eq!(decomposition.hulls().len(), 1);
assert_eq!(decomposition.hulls()[0].points().len(), 8);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Point3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f32 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
