/*!
carve2d
========

**carve2d** turns a closed planar outline (for example a font glyph) into a set of simple
polygons approximating the region around it. It provides exact orientation and intersection
predicates, a splitter that cuts an outline along a vertical line into independent pieces, and
a recursive quad-tree carver that classifies each clipped cell into triangles or quads ready
for extrusion.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point2, Point3, Vector2};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}
