//! Exact orientation and segment intersection predicates.
//!
//! None of these predicates use a tolerance: a triplet is colinear only when its cross product
//! is exactly zero. Callers that need robustness against nearly-degenerate input have to
//! filter it beforehand.

use crate::math::{Point, Real};
use crate::shape::Segment;

/// The orientation of an ordered triplet of points.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum Orientation {
    /// The three points lie on the same line.
    Colinear,
    /// The triplet turns clockwise.
    Clockwise,
    /// The triplet turns counter-clockwise.
    Counterclockwise,
}

/// Computes the orientation of the ordered triplet `(p, q, r)`.
///
/// This is the sign of the cross product `(q - p) × (r - q)`: negative is [`Orientation::Clockwise`],
/// positive is [`Orientation::Counterclockwise`] and exactly zero is [`Orientation::Colinear`].
///
/// ```
/// use carve2d::math::Point;
/// use carve2d::utils::{orientation, Orientation};
///
/// let p = Point::new(0.0, 0.0);
/// let q = Point::new(1.0, 0.0);
/// assert_eq!(orientation(&p, &q, &Point::new(1.0, 1.0)), Orientation::Counterclockwise);
/// assert_eq!(orientation(&p, &q, &Point::new(1.0, -1.0)), Orientation::Clockwise);
/// assert_eq!(orientation(&p, &q, &Point::new(2.0, 0.0)), Orientation::Colinear);
/// ```
#[inline]
pub fn orientation(p: &Point<Real>, q: &Point<Real>, r: &Point<Real>) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);

    if val == 0.0 {
        Orientation::Colinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Counterclockwise
    }
}

/// Tests if `q` lies within the axis-aligned bounding box of `p` and `r`.
///
/// This is only a point-on-segment test when `p`, `q` and `r` are already known to be colinear.
#[inline]
pub fn on_segment(p: &Point<Real>, q: &Point<Real>, r: &Point<Real>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Tests if two segments intersect.
///
/// Segments touching at an endpoint, or overlapping colinear segments, are considered
/// intersecting. The test is symmetric.
pub fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let o1 = orientation(&s1.a, &s1.b, &s2.a);
    let o2 = orientation(&s1.a, &s1.b, &s2.b);
    let o3 = orientation(&s2.a, &s2.b, &s1.a);
    let o4 = orientation(&s2.a, &s2.b, &s1.b);

    // General case.
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Colinear cases: one endpoint lies on the other segment.
    (o1 == Orientation::Colinear && on_segment(&s1.a, &s2.a, &s1.b))
        || (o2 == Orientation::Colinear && on_segment(&s1.a, &s2.b, &s1.b))
        || (o3 == Orientation::Colinear && on_segment(&s2.a, &s1.a, &s2.b))
        || (o4 == Orientation::Colinear && on_segment(&s2.a, &s1.b, &s2.b))
}
