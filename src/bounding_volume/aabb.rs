//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// In this crate an AABB plays two roles: it is the result of [`Shape::bounds`] and it is the
/// rectangular cell tested against a boundary by the quad-tree carver. A cell described as
/// `(x, y, width, height)` is the AABB with `mins = (x, y)` and `maxs = (x + width, y + height)`.
///
/// # Invariant
///
/// `mins.x ≤ maxs.x` and `mins.y ≤ maxs.y`.
///
/// # Example
///
/// ```
/// use carve2d::bounding_volume::Aabb;
/// use carve2d::math::Point;
///
/// let cell = Aabb::from_cell(1.0, 2.0, 4.0, 2.0);
/// assert_eq!(cell.mins, Point::new(1.0, 2.0));
/// assert_eq!(cell.maxs, Point::new(5.0, 4.0));
/// assert_eq!(cell.area(), 8.0);
/// ```
///
/// [`Shape::bounds`]: crate::shape::Shape::bounds
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two extremal points.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates the AABB of the cell with bottom-left corner `(x, y)` and the given dimensions.
    #[inline]
    pub fn from_cell(x: Real, y: Real, width: Real, height: Real) -> Aabb {
        Aabb::new(Point::new(x, y), Point::new(x + width, y + height))
    }

    /// Computes the AABB of a point cloud.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut it = pts.into_iter();
        let p0 = it.next()?;
        let mut result = Aabb::new(p0, p0);

        for pt in it {
            result.take_point(pt);
        }

        Some(result)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents (width and height) of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The area of this AABB.
    #[inline]
    pub fn area(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Does this AABB contain `point`, boundary included?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        point.x >= self.mins.x
            && point.x <= self.maxs.x
            && point.y >= self.mins.y
            && point.y <= self.maxs.y
    }

    /// Does `point` lie strictly inside this AABB, i.e., not on its boundary?
    #[inline]
    pub fn strictly_contains_local_point(&self, point: &Point<Real>) -> bool {
        point.x > self.mins.x
            && point.x < self.maxs.x
            && point.y > self.mins.y
            && point.y < self.maxs.y
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |             |   |
    ///    ___ x         0 - 1
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [
            Point::new(self.mins.x, self.mins.y),
            Point::new(self.maxs.x, self.mins.y),
            Point::new(self.maxs.x, self.maxs.y),
            Point::new(self.mins.x, self.maxs.y),
        ]
    }

    /// Splits this `Aabb` at its center, into four parts (as in a quad-tree).
    #[inline]
    pub fn split_at_center(&self) -> [Aabb; 4] {
        let center = self.center();

        [
            Aabb::new(self.mins, center),
            Aabb::new(
                Point::new(center.x, self.mins.y),
                Point::new(self.maxs.x, center.y),
            ),
            Aabb::new(center, self.maxs),
            Aabb::new(
                Point::new(self.mins.x, center.y),
                Point::new(center.x, self.maxs.y),
            ),
        ]
    }
}
