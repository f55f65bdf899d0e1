//! Splitting and decomposition of boundaries into simple polygons.

pub use self::decompose::{carve_shapes, decompose, DecomposeError};
pub use self::polygon_split::{shapes_on_side, split_shape, Side, SplitError};
pub use self::quad_carve::{carve, carve_cell, CarveError, CarveParameters, DepthCutoff};

mod decompose;
mod polygon_split;
pub mod quad_carve;
