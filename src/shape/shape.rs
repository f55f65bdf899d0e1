//! Definition of the closed outline shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Segment;
use crate::transformation::{self, SplitError};
use crate::utils;
use ordered_float::OrderedFloat;
use rand::Rng;

/// Errors that can occur while building a [`Shape`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A closed polygon needs at least 3 points.
    #[error("a shape needs at least 3 points but {0} were given")]
    NotEnoughPoints(usize),
    /// One of the points has a NaN or infinite coordinate.
    #[error("the point {0} has a non-finite coordinate")]
    NonFinitePoint(usize),
}

/// A closed polygonal outline.
///
/// The points are given in boundary traversal order; the last point is implicitly connected to
/// the first one. The outline is assumed to be simple (non-self-intersecting): this is not
/// verified.
///
/// A shape also carries a `center`, the mean of its points unless given explicitly, which is
/// the reference for angular sorting and closest-point queries, and an `origin`, the reference
/// point of [`Shape::scale`].
///
/// ```
/// use carve2d::math::Point;
/// use carve2d::shape::Shape;
///
/// let square = Shape::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ])
/// .unwrap();
///
/// assert_eq!(*square.center(), Point::new(0.5, 0.5));
/// assert!(square.contains_point(&Point::new(0.5, 0.5)));
/// assert!(!square.contains_point(&Point::new(2.0, 0.5)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Shape {
    points: Vec<Point<Real>>,
    center: Point<Real>,
    origin: Point<Real>,
}

impl Shape {
    /// Creates a shape whose center is the mean of its points.
    pub fn new(points: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        Self::validate(&points)?;
        let center = mean(&points);
        Ok(Self {
            points,
            center,
            origin: Point::origin(),
        })
    }

    /// Creates a shape with an explicit center.
    pub fn with_center(points: Vec<Point<Real>>, center: Point<Real>) -> Result<Self, ShapeError> {
        Self::validate(&points)?;
        Ok(Self {
            points,
            center,
            origin: Point::origin(),
        })
    }

    /// Sets the reference point used by [`Shape::scale`].
    #[must_use]
    pub fn with_origin(mut self, origin: Point<Real>) -> Self {
        self.origin = origin;
        self
    }

    fn validate(points: &[Point<Real>]) -> Result<(), ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::NotEnoughPoints(points.len()));
        }

        if let Some(i) = points
            .iter()
            .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(ShapeError::NonFinitePoint(i));
        }

        Ok(())
    }

    /// The boundary points, in traversal order.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The `i`-th boundary point.
    #[inline]
    pub fn point(&self, i: usize) -> &Point<Real> {
        &self.points[i]
    }

    /// The center of this shape.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The reference point of [`Shape::scale`].
    #[inline]
    pub fn origin(&self) -> &Point<Real> {
        &self.origin
    }

    /// The number of boundary points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a shape has at least 3 points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Swaps two boundary points.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.points.swap(i, j)
    }

    /// Iterates through the boundary edges, the closing edge included.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// The axis-aligned bounds of this shape.
    pub fn bounds(&self) -> Aabb {
        let mut aabb = Aabb::new(self.points[0], self.points[0]);

        for pt in &self.points[1..] {
            aabb.take_point(*pt);
        }

        aabb
    }

    /// The area enclosed by this shape.
    pub fn area(&self) -> Real {
        let n = self.points.len();
        let twice_area: Real = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.coords.perp(&b.coords)
            })
            .sum();
        twice_area.abs() * 0.5
    }

    /// Scales this shape about its origin.
    ///
    /// Every point is moved along the ray from the origin through it, to `factor` times its
    /// current distance from the origin. The center is mapped the same way. This only behaves
    /// like a scaling about the shape itself when the origin is the shape's center.
    pub fn scale(&mut self, factor: Real) {
        let origin = self.origin;
        let scale_point = |pt: &mut Point<Real>| {
            let dist = na::distance(&origin, &*pt);

            if dist != 0.0 {
                *pt = origin + (*pt - origin).normalize() * (factor * dist);
            }
        };

        self.points.iter_mut().for_each(scale_point);
        scale_point(&mut self.center);
    }

    /// Translates every point, and the center, by `delta`.
    pub fn translate(&mut self, delta: &Vector<Real>) {
        for pt in &mut self.points {
            *pt += delta;
        }

        self.center += delta;
    }

    /// The index of the point closest to the center.
    ///
    /// Ties are broken in favor of the first point.
    pub fn point_closest_to_center(&self) -> usize {
        self.points
            .iter()
            .enumerate()
            .min_by_key(|(_, pt)| OrderedFloat(na::distance(&self.center, *pt)))
            .map_or(0, |(i, _)| i)
    }

    /// Sorts the points clockwise around the center, see [`utils::angular_order`].
    pub fn sort_angular(&mut self) {
        let center = self.center;
        self.points
            .sort_by(|a, b| utils::angular_order(&center, a, b));
    }

    /// Tests if `pt` is inside this shape, boundary included.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        utils::point_in_polygon(&self.points, pt)
    }

    /// Samples a random point inside this shape.
    ///
    /// Points are drawn uniformly in the bounds of the shape until one of them is inside. This
    /// does not terminate for shapes enclosing no area; see [`Shape::try_random_point`] for a
    /// bounded alternative.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<Real> {
        let bounds = self.bounds();

        loop {
            let pt = sample_in(&bounds, rng);

            if self.contains_point(&pt) {
                return pt;
            }
        }
    }

    /// Samples a random point inside this shape, giving up after `max_attempts` rejected samples.
    pub fn try_random_point<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Option<Point<Real>> {
        let bounds = self.bounds();
        (0..max_attempts)
            .map(|_| sample_in(&bounds, rng))
            .find(|pt| self.contains_point(pt))
    }

    /// Splits this shape along the vertical line `x = vx`.
    ///
    /// See [`transformation::split_shape`].
    pub fn split(&self, vx: Real) -> Result<(Vec<Shape>, Vec<Shape>), SplitError> {
        transformation::split_shape(self, vx)
    }
}

fn mean(points: &[Point<Real>]) -> Point<Real> {
    let sum = points
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
    Point::from(sum / points.len() as Real)
}

fn sample_in<R: Rng + ?Sized>(bounds: &Aabb, rng: &mut R) -> Point<Real> {
    Point::new(
        rng.gen_range(bounds.mins.x..=bounds.maxs.x),
        rng.gen_range(bounds.mins.y..=bounds.maxs.y),
    )
}
