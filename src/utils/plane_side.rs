//! The single epsilon-based plane-side test shared by every stage of the decomposition.
//!
//! QuickHull's outside-set partition, its horizon search, and the spatial splitter all
//! classify points against planes. They must agree on what "on the plane" means,
//! otherwise a point assigned to a face by one stage could be considered coplanar by
//! another one.

use crate::math::{Point, Real};

/// The position of a point relative to an oriented plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Strictly on the side the plane normal points to.
    Front,
    /// Strictly on the side opposite to the plane normal.
    Back,
    /// Within the tolerance of the plane.
    OnPlane,
}

impl PlaneSide {
    /// Is this [`PlaneSide::Front`]?
    #[inline]
    pub fn is_front(self) -> bool {
        self == PlaneSide::Front
    }
}

/// Classifies a signed distance with the tolerance `epsilon`.
///
/// Distances in `[-epsilon, epsilon]` are [`PlaneSide::OnPlane`]; NaN distances are
/// considered on the plane too so they never make a point "outside" of anything.
#[inline]
pub fn classify_signed_distance(signed_distance: Real, epsilon: Real) -> PlaneSide {
    if signed_distance > epsilon {
        PlaneSide::Front
    } else if signed_distance < -epsilon {
        PlaneSide::Back
    } else {
        PlaneSide::OnPlane
    }
}

/// Classifies a point, given by its coordinate along `axis`, against the axis-aligned plane
/// `x[axis] = value`.
#[inline]
pub fn classify_on_axis(point: &Point<Real>, axis: usize, value: Real, epsilon: Real) -> PlaneSide {
    classify_signed_distance(point[axis] - value, epsilon)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tolerance_band_is_inclusive() {
        assert_eq!(classify_signed_distance(1.0e-3, 1.0e-3), PlaneSide::OnPlane);
        assert_eq!(classify_signed_distance(-1.0e-3, 1.0e-3), PlaneSide::OnPlane);
        assert_eq!(classify_signed_distance(2.0e-3, 1.0e-3), PlaneSide::Front);
        assert_eq!(classify_signed_distance(-2.0e-3, 1.0e-3), PlaneSide::Back);
        assert_eq!(classify_signed_distance(Real::NAN, 1.0e-3), PlaneSide::OnPlane);
    }

    #[test]
    fn point_against_axis_plane() {
        assert!(classify_on_axis(&Point::new(0.0, 0.0, 2.0), 2, 1.0, 1.0e-5).is_front());
        assert_eq!(
            classify_on_axis(&Point::new(5.0, 3.0, 0.0), 2, 1.0, 1.0e-5),
            PlaneSide::Back
        );
        assert_eq!(
            classify_on_axis(&Point::new(0.5, 0.0, 0.0), 0, 0.5, 1.0e-5),
            PlaneSide::OnPlane
        );
    }
}
