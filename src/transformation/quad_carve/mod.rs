//! Approximation of the region around a boundary with a quad-tree of rectangular cells.

pub use self::error::CarveError;
pub use self::parameters::{CarveParameters, DepthCutoff};
pub use self::quad_carve::{carve, carve_cell};

mod error;
mod parameters;
mod quad_carve;
