use super::{carve_cell, split_shape, CarveError, CarveParameters, Side, SplitError};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{CarvedPolygon, Shape};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Padding of the carved frames, relative to the larger extent of the boundary. The margins
// differ so that crossings at mid-height of the boundary don't land on a cell corner row.
const LOWER_MARGIN: Real = 0.1;
const UPPER_MARGIN: Real = 0.2;

/// Errors that can occur while decomposing a boundary.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum DecomposeError {
    /// The boundary could not be split.
    #[error(transparent)]
    Split(#[from] SplitError),
    /// One of the pieces could not be carved.
    #[error(transparent)]
    Carve(#[from] CarveError),
}

/// Splits `boundary` at the middle of its bounds then carves a frame around every piece.
///
/// The frame of a piece spans the bounds of the whole boundary, padded on every side but the
/// cut line so that no boundary vertex lies on the outer sides of the frame. When several
/// pieces lie on the same side of the cut line, their frames are shrunk vertically to stop
/// halfway to the pieces above and below them.
///
/// The result is the concatenation of the carved polygons of the left pieces, then of the right
/// pieces.
pub fn decompose(
    boundary: &Shape,
    params: &CarveParameters,
) -> Result<Vec<CarvedPolygon>, DecomposeError> {
    let bounds = boundary.bounds();
    let vx = bounds.mins.x + bounds.extents().x / 2.0;
    let (left, right) = split_shape(boundary, vx)?;

    let extent = bounds.extents().max();
    let frame = Aabb::new(
        bounds.mins + Vector::repeat(-extent * LOWER_MARGIN),
        bounds.maxs + Vector::repeat(extent * UPPER_MARGIN),
    );

    let mut jobs = piece_frames(&left, &frame, vx, Side::Left);
    jobs.extend(piece_frames(&right, &frame, vx, Side::Right));

    log::debug!("Carving {} piece(s) split at x = {}.", jobs.len(), vx);
    Ok(carve_framed(&jobs, params)?)
}

/// Carves each shape over its own bounds and concatenates the results, in order.
///
/// With the `parallel` feature enabled, shapes are carved concurrently.
pub fn carve_shapes(
    shapes: &[Shape],
    params: &CarveParameters,
) -> Result<Vec<CarvedPolygon>, CarveError> {
    let jobs: Vec<_> = shapes.iter().map(|shape| (shape.bounds(), shape)).collect();
    carve_framed(&jobs, params)
}

fn carve_framed(
    jobs: &[(Aabb, &Shape)],
    params: &CarveParameters,
) -> Result<Vec<CarvedPolygon>, CarveError> {
    let carve_one = |(cell, shape): &(Aabb, &Shape)| carve_cell(*cell, shape, params);

    #[cfg(feature = "parallel")]
    let carved = jobs
        .par_iter()
        .map(carve_one)
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let carved = jobs
        .iter()
        .map(carve_one)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(carved.into_iter().flatten().collect())
}

/// The frames of the pieces lying on `side` of the cut line `x = vx`, paired with the pieces.
fn piece_frames<'a>(
    pieces: &'a [Shape],
    frame: &Aabb,
    vx: Real,
    side: Side,
) -> Vec<(Aabb, &'a Shape)> {
    let (mins_x, maxs_x) = match side {
        Side::Left => (frame.mins.x, vx),
        Side::Right => (vx, frame.maxs.x),
    };
    let bounds: Vec<Aabb> = pieces.iter().map(Shape::bounds).collect();

    pieces
        .iter()
        .zip(&bounds)
        .enumerate()
        .map(|(i, (piece, piece_bounds))| {
            let mut mins_y = frame.mins.y;
            let mut maxs_y = frame.maxs.y;

            for (_, other) in bounds.iter().enumerate().filter(|(j, _)| *j != i) {
                if other.maxs.y <= piece_bounds.mins.y {
                    mins_y = mins_y.max((other.maxs.y + piece_bounds.mins.y) / 2.0);
                } else if other.mins.y >= piece_bounds.maxs.y {
                    maxs_y = maxs_y.min((other.mins.y + piece_bounds.maxs.y) / 2.0);
                }
            }

            let cell = Aabb::new(Point::new(mins_x, mins_y), Point::new(maxs_x, maxs_y));
            (cell, piece)
        })
        .collect()
}
