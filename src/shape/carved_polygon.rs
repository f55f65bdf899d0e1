use crate::math::{Point, Point3, Real, Vector};
use arrayvec::ArrayVec;

/// A simple polygon produced by the quad-tree carver.
///
/// Triangles come from partially covered cells, quads from cells entirely outside of the carved
/// boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CarvedPolygon {
    /// A triangle.
    Triangle([Point<Real>; 3]),
    /// A quad, given in boundary order.
    Quad([Point<Real>; 4]),
}

impl CarvedPolygon {
    /// The vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        match self {
            CarvedPolygon::Triangle(pts) => &pts[..],
            CarvedPolygon::Quad(pts) => &pts[..],
        }
    }

    /// Is this a triangle?
    #[inline]
    pub fn is_triangle(&self) -> bool {
        matches!(self, CarvedPolygon::Triangle(_))
    }

    /// Splits this polygon into triangles.
    ///
    /// A quad `[a, b, c, d]` becomes `[a, b, c]` and `[a, c, d]`.
    pub fn triangles(&self) -> ArrayVec<[Point<Real>; 3], 2> {
        let mut result = ArrayVec::new();

        match *self {
            CarvedPolygon::Triangle(tri) => result.push(tri),
            CarvedPolygon::Quad([a, b, c, d]) => {
                result.push([a, b, c]);
                result.push([a, c, d]);
            }
        }

        result
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        self.triangles()
            .iter()
            .map(|[a, b, c]| (b - a).perp(&(c - a)).abs() * 0.5)
            .sum()
    }

    /// Returns a copy of this polygon translated by `delta`.
    #[must_use]
    pub fn translated(&self, delta: &Vector<Real>) -> Self {
        let mut result = *self;

        match &mut result {
            CarvedPolygon::Triangle(pts) => pts.iter_mut().for_each(|pt| *pt += delta),
            CarvedPolygon::Quad(pts) => pts.iter_mut().for_each(|pt| *pt += delta),
        }

        result
    }

    /// Embeds the vertices in 3D, in the horizontal plane at height `elevation`.
    ///
    /// A planar point `(x, y)` becomes `(x, elevation, y)`.
    pub fn to_points3(&self, elevation: Real) -> ArrayVec<Point3<Real>, 4> {
        self.points()
            .iter()
            .map(|pt| Point3::new(pt.x, elevation, pt.y))
            .collect()
    }
}
