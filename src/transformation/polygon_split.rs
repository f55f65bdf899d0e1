//! Splitting of a closed outline along a vertical cut line.

use crate::math::{Point, Real};
use crate::shape::{Segment, Shape, ShapeError};
use ordered_float::OrderedFloat;

/// One side of a vertical cut line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The half-plane `x < vx`.
    Left,
    /// The half-plane `x >= vx`.
    Right,
}

impl Side {
    /// The side of the cut line `x = vx` the point `pt` lies on.
    ///
    /// Points exactly on the cut line are on the right.
    #[inline]
    pub fn of(pt: &Point<Real>, vx: Real) -> Side {
        if pt.x < vx {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Errors that can occur while splitting a [`Shape`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The cut line coordinate is NaN or infinite.
    #[error("the cut line coordinate is not finite")]
    NonFiniteCutLine,
    /// A vertex of a shape crossing the cut line lies exactly on it.
    #[error("the vertex {index} lies exactly on the cut line")]
    VertexOnCutLine {
        /// The index of the offending vertex.
        index: usize,
    },
    /// The crossing point of an edge changing sides could not be computed.
    #[error("no crossing point found for the edge ending at vertex {index}")]
    NoCrossing {
        /// The index of the edge's second vertex.
        index: usize,
    },
    /// A piece could not be turned into a shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// A run of boundary points on one side of the cut line, with the span of y values it covers.
struct Region {
    points: Vec<Point<Real>>,
    low: Real,
    high: Real,
}

impl Region {
    fn new() -> Self {
        Self {
            points: Vec::new(),
            low: Real::INFINITY,
            high: Real::NEG_INFINITY,
        }
    }

    fn push(&mut self, pt: Point<Real>) {
        self.low = self.low.min(pt.y);
        self.high = self.high.max(pt.y);
        self.points.push(pt);
    }

    fn spans(&self, y: Real) -> bool {
        self.low <= y && y <= self.high
    }
}

/// Splits `shape` along the vertical line `x = vx`.
///
/// Returns the pieces lying on the left of the cut line and the pieces lying on its right.
/// A boundary crossing the cut line more than twice yields several pieces on the same side.
///
/// A shape entirely on one side (touching the cut line included) is returned unchanged on that
/// side. Otherwise, no vertex may lie exactly on the cut line.
///
/// ```
/// use carve2d::math::Point;
/// use carve2d::shape::Shape;
/// use carve2d::transformation::split_shape;
///
/// let square = Shape::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ])
/// .unwrap();
///
/// let (left, right) = split_shape(&square, 0.5).unwrap();
/// assert_eq!(left.len(), 1);
/// assert_eq!(right.len(), 1);
/// assert_eq!(left[0].bounds().extents().x, 0.5);
/// ```
pub fn split_shape(shape: &Shape, vx: Real) -> Result<(Vec<Shape>, Vec<Shape>), SplitError> {
    let left = shapes_on_side(shape, vx, Side::Left)?;
    let right = shapes_on_side(shape, vx, Side::Right)?;
    log::trace!(
        "Split at x = {}: {} piece(s) on the left, {} on the right.",
        vx,
        left.len(),
        right.len()
    );
    Ok((left, right))
}

/// Computes the pieces of `shape` lying on the given side of the cut line `x = vx`.
///
/// The boundary is walked forward for the left side and backward for the right side, starting
/// from the lowest point that directly follows a crossing into the requested side. Every time the
/// boundary crosses the cut line, the exact crossing point is inserted: leaving the side closes
/// the current piece, entering it resumes the piece whose y span contains the crossing, or opens a
/// new one.
///
/// Pieces keep the origin of `shape`; their center is the mean of their points.
pub fn shapes_on_side(shape: &Shape, vx: Real, side: Side) -> Result<Vec<Shape>, SplitError> {
    if !vx.is_finite() {
        return Err(SplitError::NonFiniteCutLine);
    }

    let bounds = shape.bounds();

    let whole_side = if bounds.maxs.x <= vx {
        Some(Side::Left)
    } else if bounds.mins.x >= vx {
        Some(Side::Right)
    } else {
        None
    };

    if let Some(whole_side) = whole_side {
        return Ok(if whole_side == side {
            vec![shape.clone()]
        } else {
            Vec::new()
        });
    }

    let points = shape.points();
    let n = points.len();

    if let Some(index) = points.iter().position(|pt| pt.x == vx) {
        log::debug!("Cannot split: vertex {} is on the cut line x = {}.", index, vx);
        return Err(SplitError::VertexOnCutLine { index });
    }

    let order: Vec<usize> = match side {
        Side::Left => (0..n).collect(),
        Side::Right => (0..n).rev().collect(),
    };
    let side_at = |k: usize| Side::of(&points[order[k % n]], vx);

    let Some(start) = (0..n)
        .filter(|&k| side_at(k) == side && side_at(k + n - 1) != side)
        .min_by_key(|&k| OrderedFloat(points[order[k]].y))
    else {
        return Ok(Vec::new());
    };

    // Crossings are computed from the cut segment so their x is exactly `vx`.
    let margin = 1.0 + bounds.extents().y;
    let cut = Segment::new(
        Point::new(vx, bounds.mins.y - margin),
        Point::new(vx, bounds.maxs.y + margin),
    );

    let mut regions: Vec<Region> = Vec::new();
    let mut current = None;

    for step in 0..n {
        let curr_id = order[(start + step) % n];
        let prev_id = order[(start + step + n - 1) % n];
        let curr = points[curr_id];
        let curr_side = Side::of(&curr, vx);

        if curr_side != Side::of(&points[prev_id], vx) {
            let crossing = cut
                .intersection(&Segment::new(points[prev_id], curr))
                .ok_or(SplitError::NoCrossing { index: curr_id })?;

            if curr_side == side {
                let id = match regions.iter().position(|r| r.spans(crossing.y)) {
                    Some(id) => id,
                    None => {
                        regions.push(Region::new());
                        regions.len() - 1
                    }
                };
                regions[id].push(crossing);
                current = Some(id);
            } else if let Some(id) = current.take() {
                regions[id].push(crossing);
            }
        }

        if curr_side == side {
            if let Some(id) = current {
                regions[id].push(curr);
            }
        }
    }

    regions
        .into_iter()
        .map(|region| {
            Shape::new(region.points)
                .map(|piece| piece.with_origin(*shape.origin()))
                .map_err(SplitError::from)
        })
        .collect()
}
