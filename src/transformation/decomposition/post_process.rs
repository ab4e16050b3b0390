//! Adjustments of the hull list once the spatial bisection is complete.

use crate::math::Real;
use crate::shape::ConvexHull;
use crate::transformation::ConvexHullBuilder;
use crate::utils::{self, PlaneSide};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Sorts hulls by decreasing bounding-box volume. Hulls with the same volume keep their order.
pub(super) fn sort_by_volume(hulls: &mut [ConvexHull]) {
    hulls.sort_by_key(|hull| Reverse(OrderedFloat(hull.volume_estimate())));
}

/// Removes the hulls with a bounding-box volume smaller than `min_volume`, except the largest
/// one. Returns the number of hulls removed.
///
/// `hulls` must be sorted with [`sort_by_volume`].
pub(super) fn prune_small_hulls(hulls: &mut Vec<ConvexHull>, min_volume: Real) -> usize {
    let kept = hulls
        .iter()
        .take_while(|hull| hull.volume_estimate() >= min_volume)
        .count()
        .max(1)
        .min(hulls.len());
    let pruned = hulls.len() - kept;
    hulls.truncate(kept);
    pruned
}

/// Bisects the largest hulls until there are `target` of them, or until no hull can be split.
/// Returns the number of successful bisections.
///
/// `hulls` must be sorted with [`sort_by_volume`], and is left sorted.
pub(super) fn split_largest_hulls(
    hulls: &mut Vec<ConvexHull>,
    target: usize,
    builder: &ConvexHullBuilder,
    eps: Real,
) -> usize {
    let mut candidates = std::mem::take(hulls);
    let mut num_splits = 0;

    while hulls.len() + candidates.len() < target {
        // Candidates are kept sorted, so the largest one comes first.
        if candidates.is_empty() {
            break;
        }

        let hull = candidates.remove(0);

        match bisect_hull(&hull, builder, eps) {
            Some(halves) => {
                log::trace!(
                    "bisected a hull with volume {} into {} and {}",
                    hull.volume_estimate(),
                    halves[0].volume_estimate(),
                    halves[1].volume_estimate()
                );
                candidates.extend(halves);
                sort_by_volume(&mut candidates);
                num_splits += 1;
            }
            // Unsplittable hulls are never tried again.
            None => hulls.push(hull),
        }
    }

    hulls.append(&mut candidates);
    sort_by_volume(hulls);
    num_splits
}

/// Cuts a hull in two with the plane orthogonal to the longest axis of its bounding box,
/// through its center.
///
/// Vertices within `eps` of the plane go to both halves, as well as the points where the
/// hull edges cross the plane. Returns `None` if one of the halves has less than 4 points or
/// is degenerate.
pub(super) fn bisect_hull(
    hull: &ConvexHull,
    builder: &ConvexHullBuilder,
    eps: Real,
) -> Option<[ConvexHull; 2]> {
    let (vertices, triangles) = builder.build_mesh(hull.points()).ok()?;
    let axis = hull.aabb().longest_axis();
    let value = hull.aabb().center()[axis];
    let side = |i: u32| utils::classify_on_axis(&vertices[i as usize], axis, value, eps);

    let mut left = Vec::new();
    let mut right = Vec::new();

    for (i, pt) in vertices.iter().enumerate() {
        match side(i as u32) {
            PlaneSide::Back => left.push(*pt),
            PlaneSide::Front => right.push(*pt),
            PlaneSide::OnPlane => {
                left.push(*pt);
                right.push(*pt);
            }
        }
    }

    for tri in &triangles {
        for k in 0..3 {
            let (a, b) = (tri[k], tri[(k + 1) % 3]);

            // Every edge is shared by two triangles, in opposite directions.
            if a > b {
                continue;
            }

            let crosses = matches!(
                (side(a), side(b)),
                (PlaneSide::Back, PlaneSide::Front) | (PlaneSide::Front, PlaneSide::Back)
            );

            if !crosses {
                continue;
            }

            let (pa, pb) = (vertices[a as usize], vertices[b as usize]);
            let t = (value - pa[axis]) / (pb[axis] - pa[axis]);
            let mut cut = pa + (pb - pa) * t;
            cut[axis] = value;
            left.push(cut);
            right.push(cut);
        }
    }

    if left.len() < 4 || right.len() < 4 {
        return None;
    }

    let left = builder.build(&left).ok()?;
    let right = builder.build(&right).ok()?;
    Some([left, right])
}

/// Merges the smallest hulls into a neighbor until there are at most `target` of them. Returns
/// the number of merges.
///
/// A hull is merged into the one whose bounding box grows the least when the two are joined.
/// The merged hull is built from the points of both, so the space they covered stays covered.
/// `hulls` must be sorted with [`sort_by_volume`], and is left sorted.
pub(super) fn merge_smallest_hulls(
    hulls: &mut Vec<ConvexHull>,
    target: usize,
    builder: &ConvexHullBuilder,
) -> usize {
    let mut num_merges = 0;

    while hulls.len() > target.max(1) {
        let Some(smallest) = hulls.pop() else {
            break;
        };

        let partner = hulls
            .iter()
            .enumerate()
            .min_by_key(|(_, hull)| {
                let joined = hull.aabb().merged(smallest.aabb());
                OrderedFloat(joined.volume() - hull.volume_estimate())
            })
            .map(|(i, _)| i);

        let Some(partner) = partner else {
            hulls.push(smallest);
            break;
        };

        let mut points = hulls[partner].points().to_vec();
        points.extend_from_slice(smallest.points());

        match builder.build(&points) {
            Ok(merged) => {
                log::trace!(
                    "merged a hull with volume {} into one with volume {}",
                    smallest.volume_estimate(),
                    hulls[partner].volume_estimate()
                );
                hulls[partner] = merged;
                sort_by_volume(hulls);
                num_merges += 1;
            }
            Err(err) => {
                log::debug!("could not merge the smallest hull: {}", err);
                hulls.push(smallest);
                break;
            }
        }
    }

    num_merges
}

/// Keeps the `target` first hulls. Returns the number of hulls dropped.
pub(super) fn truncate_to_target(hulls: &mut Vec<ConvexHull>, target: usize) -> usize {
    let dropped = hulls.len().saturating_sub(target);
    hulls.truncate(target);
    dropped
}
