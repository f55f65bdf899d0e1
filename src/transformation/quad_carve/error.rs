use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::shape::ShapeError;

/// Errors that can occur while carving a rectangle around a boundary.
///
/// [`CarveError::UnexpectedPointCount`] signals an inconsistency between the geometric predicates
/// rather than a malformed input; the whole carve is aborted when it happens.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum CarveError {
    /// The rectangle to carve has a non-finite or non-positive dimension.
    #[error("cannot carve a {width} x {height} rectangle")]
    InvalidRectangle {
        /// The rectangle width.
        width: Real,
        /// The rectangle height.
        height: Real,
    },
    /// A clipped cell produced a number of points no classification rule handles.
    #[error("unexpected number of clipped points ({count}) in cell {cell:?}")]
    UnexpectedPointCount {
        /// The number of points found in the cell.
        count: usize,
        /// The offending cell.
        cell: Aabb,
    },
    /// The clipped points of a cell could not be turned into a shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
