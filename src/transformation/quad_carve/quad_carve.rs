use super::{CarveError, CarveParameters, DepthCutoff};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{CarvedPolygon, Segment, Shape};
use crate::utils;
use arrayvec::ArrayVec;

// Two crossings and four corners.
const MAX_RIM_POINTS: usize = 6;
// One boundary point, two crossings and four corners.
const MAX_CELL_POINTS: usize = 7;

/// Carves the rectangle `(0, 0, width, height)` around `boundary`.
///
/// Returns triangles and quads approximating the part of the rectangle lying outside of
/// `boundary`. See [`carve_cell`].
///
/// ```
/// use carve2d::math::Point;
/// use carve2d::shape::Shape;
/// use carve2d::transformation::{carve, CarveParameters};
///
/// let hole = Shape::new(vec![
///     Point::new(5.7, 2.3),
///     Point::new(8.9, 5.3),
///     Point::new(5.9, 7.9),
///     Point::new(2.3, 4.7),
/// ])
/// .unwrap();
///
/// let carved = carve(10.0, 10.0, &hole, &CarveParameters::default()).unwrap();
/// let area: f64 = carved.iter().map(|poly| poly.area()).sum();
/// assert!((area - (100.0 - hole.area())).abs() < 1.0e-6);
/// ```
pub fn carve(
    width: Real,
    height: Real,
    boundary: &Shape,
    params: &CarveParameters,
) -> Result<Vec<CarvedPolygon>, CarveError> {
    carve_cell(Aabb::from_cell(0.0, 0.0, width, height), boundary, params)
}

/// Carves the rectangular `cell` around `boundary`.
///
/// The cell is recursively split into four quadrants until each quadrant can be classified:
/// - a quadrant not touched by the boundary is emitted whole if it is outside of it;
/// - a quadrant crossed once by the boundary is clipped: the boundary point it contains (if
///   any), the crossings of the boundary with its sides, and its corners lying outside of the
///   boundary form a small polygon that is emitted as one to three triangles;
/// - a quadrant containing more than one boundary point, more than two crossings, or too many
///   clipped points is split again.
///
/// Subdivision stops at `params.max_depth` or once cells become smaller than
/// `params.min_cell_extent`; the remaining cells are resolved according to `params.cutoff`.
pub fn carve_cell(
    cell: Aabb,
    boundary: &Shape,
    params: &CarveParameters,
) -> Result<Vec<CarvedPolygon>, CarveError> {
    let extents = cell.extents();
    let is_valid = cell.mins.x.is_finite()
        && cell.mins.y.is_finite()
        && extents.x.is_finite()
        && extents.y.is_finite()
        && extents.x > 0.0
        && extents.y > 0.0;

    if !is_valid {
        return Err(CarveError::InvalidRectangle {
            width: extents.x,
            height: extents.y,
        });
    }

    let mut carver = QuadCarver {
        boundary,
        params,
        result: Vec::new(),
    };
    carver.carve(&cell, 0)?;
    Ok(carver.result)
}

struct QuadCarver<'a> {
    boundary: &'a Shape,
    params: &'a CarveParameters,
    result: Vec<CarvedPolygon>,
}

impl QuadCarver<'_> {
    fn carve(&mut self, cell: &Aabb, depth: u32) -> Result<(), CarveError> {
        let mut inner_points = self
            .boundary
            .points()
            .iter()
            .filter(|pt| cell.strictly_contains_local_point(pt));
        let inner_point = inner_points.next().copied();

        if inner_points.next().is_some() {
            log::trace!("{:?} contains several boundary points.", cell);
            return self.subdivide(cell, depth);
        }

        let Some(crossings) = self.crossings(cell) else {
            log::trace!("{:?} is crossed more than twice.", cell);
            return self.subdivide(cell, depth);
        };

        if inner_point.is_none() && crossings.is_empty() {
            if !self.boundary.contains_point(&cell.mins) {
                self.push_cell(cell);
            }

            return Ok(());
        }

        // The crossings and the outside corners, all lying on the perimeter of the cell.
        let mut rim = ArrayVec::<Point<Real>, MAX_RIM_POINTS>::new();
        rim.extend(crossings.iter().copied());

        for corner in cell.vertices() {
            if !crossings.contains(&corner) && !self.boundary.contains_point(&corner) {
                rim.push(corner);
            }
        }

        let num_outside_corners = rim.len() - crossings.len();
        let num_points = rim.len() + usize::from(inner_point.is_some());

        // The boundary only touches the cell.
        if inner_point.is_none() {
            if num_outside_corners == 0 {
                return Ok(());
            }

            if num_outside_corners == 4 {
                self.push_cell(cell);
                return Ok(());
            }

            if num_points < 3 {
                log::debug!("Degenerate contact between the boundary and {:?}.", cell);

                if !self.boundary.contains_point(&cell.center()) {
                    self.push_cell(cell);
                }

                return Ok(());
            }
        }

        match num_points {
            3..=5 => {
                if self.push_clipped(cell, inner_point, rim, &crossings)? {
                    Ok(())
                } else {
                    log::trace!("{:?} has non-adjacent crossings.", cell);
                    self.subdivide(cell, depth)
                }
            }
            6 | 7 => {
                log::trace!("{:?} has {} clipped points.", cell, num_points);
                self.subdivide(cell, depth)
            }
            count => {
                log::error!(
                    "Unexpected number of clipped points ({}) in {:?}: {:?} {:?}",
                    count,
                    cell,
                    inner_point,
                    rim
                );
                Err(CarveError::UnexpectedPointCount { count, cell: *cell })
            }
        }
    }

    /// The distinct points where the boundary meets the sides of `cell`, or `None` if there are
    /// more than two of them.
    fn crossings(&self, cell: &Aabb) -> Option<ArrayVec<Point<Real>, 2>> {
        let sides = cell_sides(cell);
        let mut result = ArrayVec::new();

        for edge in self.boundary.edges() {
            for side in &sides {
                if let Some(pt) = side.intersection(&edge) {
                    if !result.contains(&pt) && result.try_push(pt).is_err() {
                        return None;
                    }
                }
            }
        }

        Some(result)
    }

    /// Triangulates the part of `cell` outside of the boundary.
    ///
    /// The rim points are ordered along the perimeter of the cell, then the inner point, if any,
    /// is inserted between the two crossings it connects. Returns `false`, emitting nothing, if
    /// these crossings are not adjacent on the perimeter.
    fn push_clipped(
        &mut self,
        cell: &Aabb,
        inner_point: Option<Point<Real>>,
        mut rim: ArrayVec<Point<Real>, MAX_RIM_POINTS>,
        crossings: &[Point<Real>],
    ) -> Result<bool, CarveError> {
        let center = cell.center();
        rim.sort_by(|a, b| utils::angular_order(&center, a, b));

        let mut ring = ArrayVec::<Point<Real>, MAX_CELL_POINTS>::new();
        let pivot = match inner_point {
            Some(inner) => {
                let n = rim.len();
                let Some(last) = (0..n).find(|&i| {
                    let next = rim[(i + 1) % n];
                    next != rim[i] && crossings.contains(&rim[i]) && crossings.contains(&next)
                }) else {
                    return Ok(false);
                };

                ring.push(inner);
                ring.extend((1..=n).map(|k| rim[(last + k) % n]));
                0
            }
            None => {
                // The rim is convex, any fan works.
                let pivot = if rim.len() == 5 {
                    Shape::new(rim.to_vec())?.point_closest_to_center()
                } else {
                    0
                };
                ring.extend(rim);
                pivot
            }
        };

        let n = ring.len();
        let min_area = cell.area() * Real::EPSILON;

        for i in 1..n - 1 {
            let triangle = CarvedPolygon::Triangle([
                ring[pivot],
                ring[(pivot + i) % n],
                ring[(pivot + i + 1) % n],
            ]);

            if triangle.area() > min_area {
                self.result.push(triangle);
            } else {
                log::trace!("Dropping degenerate triangle {:?}.", triangle);
            }
        }

        Ok(true)
    }

    fn subdivide(&mut self, cell: &Aabb, depth: u32) -> Result<(), CarveError> {
        if depth >= self.params.max_depth || cell.extents().min() <= self.params.min_cell_extent {
            log::debug!(
                "Carving stopped at depth {} on {:?}, resolved with {:?}.",
                depth,
                cell,
                self.params.cutoff
            );

            let keep = match self.params.cutoff {
                DepthCutoff::Outside => true,
                DepthCutoff::Discard => false,
                DepthCutoff::Center => !self.boundary.contains_point(&cell.center()),
            };

            if keep {
                self.push_cell(cell);
            }

            return Ok(());
        }

        for quadrant in cell.split_at_center() {
            self.carve(&quadrant, depth + 1)?;
        }

        Ok(())
    }

    fn push_cell(&mut self, cell: &Aabb) {
        self.result.push(CarvedPolygon::Quad([
            cell.mins,
            Point::new(cell.mins.x, cell.maxs.y),
            cell.maxs,
            Point::new(cell.maxs.x, cell.mins.y),
        ]));
    }
}

/// The bottom, left, right, and top sides of `cell`.
fn cell_sides(cell: &Aabb) -> [Segment; 4] {
    let [bottom_left, bottom_right, top_right, top_left] = cell.vertices();
    [
        Segment::new(bottom_left, bottom_right),
        Segment::new(bottom_left, top_left),
        Segment::new(bottom_right, top_right),
        Segment::new(top_left, top_right),
    ]
}
