use crate::math::{Point, Real};
use core::cmp::Ordering;

/// Is `a` ordered before `b` when walking clockwise around `center`?
///
/// Points with `x ≥ center.x` come before points with `x < center.x`. Two points on the vertical
/// line through `center` are ordered by decreasing `y` if either of them is at or above the
/// center, and by increasing `y` otherwise. In the general case the sign of the cross product
/// `(a - center) × (b - center)` decides, and points aligned with the center are ordered from
/// the farthest to the closest.
pub fn angular_less(center: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> bool {
    let da = a - center;
    let db = b - center;

    if da.x >= 0.0 && db.x < 0.0 {
        return true;
    }

    if da.x < 0.0 && db.x >= 0.0 {
        return false;
    }

    if da.x == 0.0 && db.x == 0.0 {
        if da.y >= 0.0 || db.y >= 0.0 {
            return a.y > b.y;
        }

        return b.y > a.y;
    }

    let det = da.perp(&db);

    if det < 0.0 {
        return true;
    }

    if det > 0.0 {
        return false;
    }

    // Both points are on the same ray from the center.
    da.norm_squared() > db.norm_squared()
}

/// Total order of points around `center`, suitable for `sort_by`.
///
/// This turns [`angular_less`] into an [`Ordering`] so that an unordered point set (for example
/// the clipped corners of a cell) can be sorted into a consistent traversal order.
///
/// ```
/// use carve2d::math::Point;
/// use carve2d::utils::angular_order;
///
/// let center = Point::new(0.5, 0.5);
/// let mut pts = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// pts.sort_by(|a, b| angular_order(&center, a, b));
/// assert_eq!(
///     pts,
///     vec![
///         Point::new(1.0, 1.0),
///         Point::new(1.0, 0.0),
///         Point::new(0.0, 0.0),
///         Point::new(0.0, 1.0),
///     ]
/// );
/// ```
pub fn angular_order(center: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> Ordering {
    if angular_less(center, a, b) {
        Ordering::Less
    } else if angular_less(center, b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
