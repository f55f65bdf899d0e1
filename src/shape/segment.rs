//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};
use crate::utils;

/// A segment shape.
///
/// The endpoint order matters for point-on-segment queries but not for intersection tests.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// Tests if this segment intersects `other`, endpoints and colinear overlaps included.
    ///
    /// See [`utils::segments_intersect`].
    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        utils::segments_intersect(self, other)
    }

    /// Computes the point where this segment crosses `other`.
    ///
    /// Both segments are parametrized over `[0, 1]` and the supporting lines are intersected.
    /// Returns `None` if the crossing falls outside of either segment, or if the segments are
    /// parallel (colinear overlaps included), in which case no single crossing point exists.
    ///
    /// Endpoints are returned exactly: two segments sharing only an endpoint yield that endpoint.
    ///
    /// ```
    /// use carve2d::math::Point;
    /// use carve2d::shape::Segment;
    ///
    /// let s1 = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    /// let s2 = Segment::new(Point::new(0.0, 1.0), Point::new(1.0, 0.0));
    /// assert_eq!(s1.intersection(&s2), Some(Point::new(0.5, 0.5)));
    ///
    /// let parallel = Segment::new(Point::new(0.0, 1.0), Point::new(1.0, 2.0));
    /// assert_eq!(s1.intersection(&parallel), None);
    /// ```
    pub fn intersection(&self, other: &Segment) -> Option<Point<Real>> {
        let s1 = self.scaled_direction();
        let s2 = other.scaled_direction();
        let denom = -s2.x * s1.y + s1.x * s2.y;

        if denom == 0.0 || !denom.is_finite() {
            return None;
        }

        // Non-parallel segments sharing an endpoint only meet there.
        for pt in [self.a, self.b] {
            if pt == other.a || pt == other.b {
                return Some(pt);
            }
        }

        let d = self.a - other.a;
        let s = (-s1.y * d.x + s1.x * d.y) / denom;
        let t = (s2.x * d.y - s2.y * d.x) / denom;

        if !s.is_finite() || !t.is_finite() {
            return None;
        }

        if s < 0.0 || s > 1.0 || t < 0.0 || t > 1.0 {
            return None;
        }

        let pt = if t == 0.0 {
            self.a
        } else if t == 1.0 {
            self.b
        } else if s == 0.0 {
            other.a
        } else if s == 1.0 {
            other.b
        } else {
            self.a + s1 * t
        };

        Some(pt)
    }
}
