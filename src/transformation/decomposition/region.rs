//! Regions of the spatial bisection and the splitting of a region in two.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::TriangleMesh;
use crate::utils::{self, PlaneSide};

/// A side holding less than this fraction of the triangles triggers a rebalancing pass.
const REBALANCE_RATIO: Real = 0.1;

/// A subset of the mesh triangles, together with the box of space it covers.
#[derive(Clone, Debug)]
pub(super) struct Region {
    pub triangles: Vec<u32>,
    pub bounds: Aabb,
    pub depth: u32,
}

/// The points of a region, as seen by the hull builder.
pub(super) struct RegionPoints {
    /// The number of vertices referenced by the region's triangles that lie within its bounds.
    pub num_vertices: usize,
    /// Those vertices, followed by the corners of the triangles clipped by the region bounds.
    pub points: Vec<Point<Real>>,
}

/// The result of splitting a region in two.
pub(super) struct Split {
    pub left: Region,
    pub right: Region,
    pub axis: usize,
    pub value: Real,
    pub rebalanced: bool,
}

impl Region {
    /// Collects the points used to build this region's hull, or to choose its split plane.
    ///
    /// Vertices are only kept if they lie within the region bounds (loosened by `eps`): a
    /// triangle can be assigned to a region while extending past its bounds. The part of such a
    /// triangle that lies inside the bounds is added through its clipped corners.
    pub fn points(&self, mesh: &TriangleMesh, eps: Real) -> RegionPoints {
        let loose = self.bounds.loosened(eps);
        let vertices = mesh.vertices();

        let mut referenced: Vec<u32> = self
            .triangles
            .iter()
            .flat_map(|tri| mesh.indices()[*tri as usize])
            .collect();
        referenced.sort_unstable();
        referenced.dedup();

        let mut points: Vec<_> = referenced
            .iter()
            .map(|i| vertices[*i as usize])
            .filter(|pt| loose.contains_local_point(pt))
            .collect();
        let num_vertices = points.len();

        let mut polygon = Vec::new();
        let mut workspace = Vec::new();

        for tri in &self.triangles {
            let triangle = mesh.triangle(*tri).vertices();

            if triangle.iter().all(|pt| loose.contains_local_point(pt)) {
                continue;
            }

            polygon.clear();
            polygon.extend_from_slice(&triangle);
            self.bounds.clip_polygon_with_workspace(&mut polygon, &mut workspace);
            points.extend_from_slice(&polygon);
        }

        RegionPoints {
            num_vertices,
            points,
        }
    }

    /// Splits this region in two with a plane orthogonal to the longest axis of `points`.
    ///
    /// Each triangle is owned by the side of its centroid, and also goes to the other side if
    /// it has a vertex there, so that both children see their part of it. Returns `None` if
    /// one of the sides would own no triangle.
    pub fn split(self, mesh: &TriangleMesh, points: &[Point<Real>], eps: Real) -> Option<Split> {
        let aabb = if points.is_empty() {
            self.bounds
        } else {
            Aabb::from_points_ref(points)
        };
        let axis = aabb.longest_axis();
        let mut value = aabb.center()[axis];
        let mut sides = classify_triangles(mesh, &self.triangles, axis, value, eps);
        let mut rebalanced = false;

        let min_count = (self.triangles.len() as Real * REBALANCE_RATIO).ceil() as usize;

        if sides.owned[0] < min_count || sides.owned[1] < min_count {
            // The centroids of both sides, weighted by their areas, give the area-weighted
            // centroid of the whole region.
            if let Some(balanced) = area_weighted_centroid(mesh, &self.triangles, axis) {
                log::trace!(
                    "rebalancing split on axis {}: {} -> {} ({} / {} triangles)",
                    axis,
                    value,
                    balanced,
                    sides.owned[0],
                    sides.owned[1]
                );
                value = balanced;
                sides = classify_triangles(mesh, &self.triangles, axis, value, eps);
                rebalanced = true;
            }
        }

        if sides.owned.contains(&0) {
            return None;
        }

        let [left_bounds, right_bounds] = self.bounds.split_at(axis, value);
        let depth = self.depth + 1;

        Some(Split {
            left: Region {
                triangles: sides.left,
                bounds: left_bounds,
                depth,
            },
            right: Region {
                triangles: sides.right,
                bounds: right_bounds,
                depth,
            },
            axis,
            value,
            rebalanced,
        })
    }
}

/// The triangles on each side of a split plane.
struct Sides {
    left: Vec<u32>,
    right: Vec<u32>,
    /// The number of triangles owned by the left and right sides.
    owned: [usize; 2],
}

/// Distributes triangles on each side of the plane `x[axis] = value`.
///
/// A triangle is owned by the side of its centroid. If the centroid is on the plane, the side
/// containing most of its vertices wins, and ties go to the left. A triangle with a vertex
/// strictly on the side it doesn't belong to is added to that side too.
fn classify_triangles(
    mesh: &TriangleMesh,
    triangles: &[u32],
    axis: usize,
    value: Real,
    eps: Real,
) -> Sides {
    let mut sides = Sides {
        left: Vec::new(),
        right: Vec::new(),
        owned: [0; 2],
    };

    for tri in triangles {
        let triangle = mesh.triangle(*tri);
        let mut vote = 0i32;
        let mut reaches = [false; 2];

        for pt in triangle.vertices() {
            match utils::classify_on_axis(&pt, axis, value, eps) {
                PlaneSide::Back => {
                    vote -= 1;
                    reaches[0] = true;
                }
                PlaneSide::Front => {
                    vote += 1;
                    reaches[1] = true;
                }
                PlaneSide::OnPlane => {}
            }
        }

        let owner = match utils::classify_on_axis(&triangle.center(), axis, value, eps) {
            PlaneSide::Back => 0,
            PlaneSide::Front => 1,
            PlaneSide::OnPlane => usize::from(vote > 0),
        };
        sides.owned[owner] += 1;

        if owner == 0 || reaches[0] {
            sides.left.push(*tri);
        }

        if owner == 1 || reaches[1] {
            sides.right.push(*tri);
        }
    }

    sides
}

/// The coordinate along `axis` of the centroid of `triangles`, weighted by their area.
///
/// Falls back to the plain average of the triangle centroids if all the triangles are
/// degenerate. Returns `None` if `triangles` is empty.
fn area_weighted_centroid(mesh: &TriangleMesh, triangles: &[u32], axis: usize) -> Option<Real> {
    if triangles.is_empty() {
        return None;
    }

    let mut total_area = 0.0;
    let mut weighted_sum = 0.0;
    let mut plain_sum = 0.0;

    for tri in triangles {
        let triangle = mesh.triangle(*tri);
        let area = triangle.area();
        let center = triangle.center()[axis];
        total_area += area;
        weighted_sum += area * center;
        plain_sum += center;
    }

    if total_area > 0.0 {
        Some(weighted_sum / total_area)
    } else {
        Some(plain_sum / triangles.len() as Real)
    }
}
