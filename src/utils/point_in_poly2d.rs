use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::utils::{on_segment, orientation, segments_intersect, Orientation};

/// The x coordinate used as the far end of the horizontal ray cast by [`point_in_polygon`].
pub const RAY_CAST_EXTENT: Real = 1.0e12;

/// Tests if the given point is inside an arbitrary simple closed polygon, using ray casting.
///
/// A horizontal ray is cast from `pt` to the right and the polygon edges it crosses are counted
/// with [`segments_intersect`]. A point lying on the boundary counts as inside.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge. Polygons with less than 3 points contain nothing.
///
/// ```
/// use carve2d::math::Point;
/// use carve2d::utils::point_in_polygon;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// assert!(point_in_polygon(&square, &Point::new(0.5, 0.5)));
/// assert!(point_in_polygon(&square, &Point::new(1.0, 0.5)));
/// assert!(!point_in_polygon(&square, &Point::new(1.5, 0.5)));
/// ```
pub fn point_in_polygon(poly: &[Point<Real>], pt: &Point<Real>) -> bool {
    if poly.len() < 3 {
        return false;
    }

    let extreme = Point::new(RAY_CAST_EXTENT.max(pt.x + RAY_CAST_EXTENT), pt.y);
    let ray = Segment::new(*pt, extreme);
    let mut count = 0usize;

    for (i, a) in poly.iter().enumerate() {
        let b = &poly[(i + 1) % poly.len()];

        if segments_intersect(&Segment::new(*a, *b), &ray) {
            // The point is on the edge's supporting line: the answer only depends on this edge.
            if orientation(a, pt, b) == Orientation::Colinear {
                return on_segment(a, pt, b);
            }

            count += 1;
        }
    }

    count % 2 == 1
}
