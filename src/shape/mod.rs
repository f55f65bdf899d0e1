//! Shapes handled by the decomposition pipeline.

pub use self::carved_polygon::CarvedPolygon;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::shape::{Shape, ShapeError};

mod carved_polygon;
mod segment;
mod shape;
