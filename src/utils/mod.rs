//! Exact geometric predicates and point-ordering helpers.

pub use self::angular_order::{angular_less, angular_order};
pub use self::orientation::{on_segment, orientation, segments_intersect, Orientation};
pub use self::point_in_poly2d::{point_in_polygon, RAY_CAST_EXTENT};

mod angular_order;
mod orientation;
mod point_in_poly2d;
