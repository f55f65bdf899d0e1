use super::{assert_outside, shape, total_area};
use approx::assert_relative_eq;
use carve2d::shape::Shape;
use carve2d::transformation::{carve, CarveParameters, DepthCutoff};

fn square_hole() -> Shape {
    shape(&[[2.3, 2.3], [2.3, 7.1], [7.1, 7.1], [7.1, 2.3]])
}

#[test]
fn carve_around_square_covers_the_rest() {
    let hole = square_hole();
    let carved = carve(10.0, 10.0, &hole, &CarveParameters::default()).unwrap();
    assert_relative_eq!(total_area(&carved), 100.0 - hole.area(), epsilon = 1.0e-4);

    let frame = carved.iter().flat_map(|p| p.points());
    assert!(frame
        .into_iter()
        .all(|pt| pt.x >= 0.0 && pt.x <= 10.0 && pt.y >= 0.0 && pt.y <= 10.0));
}

#[test]
fn carve_never_overlaps_the_hole() {
    let hole = square_hole();

    for cutoff in [DepthCutoff::Center, DepthCutoff::Discard] {
        let params = CarveParameters {
            cutoff,
            ..CarveParameters::default()
        };
        let carved = carve(10.0, 10.0, &hole, &params).unwrap();
        assert!(!carved.is_empty());
        assert_outside(&hole, &carved);
    }
}

#[test]
fn default_carve_stays_outside_of_the_boundary() {
    // The corners of this hole lie on cell corners at every depth, so carving reaches the
    // depth limit there.
    let hole = shape(&[[1.0, 1.0], [1.0, 3.0], [3.0, 3.0], [3.0, 1.0]]);
    let carved = carve(4.0, 4.0, &hole, &CarveParameters::default()).unwrap();
    assert_outside(&hole, &carved);
    assert_relative_eq!(total_area(&carved), 12.0, epsilon = 1.0e-6);

    let diamond = shape(&[[5.7, 2.3], [8.9, 5.3], [5.9, 7.9], [2.3, 4.7]]);
    let carved = carve(10.0, 10.0, &diamond, &CarveParameters::default()).unwrap();
    assert_outside(&diamond, &carved);
}

#[test]
fn cutoff_policies_bracket_the_exact_area() {
    let hole = square_hole();
    let expected = 100.0 - hole.area();
    let carve_with = |cutoff: DepthCutoff| {
        let params = CarveParameters {
            max_depth: 8,
            cutoff,
            ..CarveParameters::default()
        };
        total_area(&carve(10.0, 10.0, &hole, &params).unwrap())
    };

    let outside = carve_with(DepthCutoff::Outside);
    let center = carve_with(DepthCutoff::Center);
    let discard = carve_with(DepthCutoff::Discard);

    assert!(outside >= center);
    assert!(center >= discard);
    assert!(outside >= expected);
    assert!(discard <= expected);
    assert_relative_eq!(outside, expected, epsilon = 0.05);
    assert_relative_eq!(discard, expected, epsilon = 0.05);
}

#[test]
fn min_cell_extent_limits_subdivision() {
    let hole = square_hole();
    let coarse = CarveParameters {
        min_cell_extent: 1.0,
        ..CarveParameters::default()
    };
    let fine = CarveParameters::default();

    let coarse = carve(10.0, 10.0, &hole, &coarse).unwrap();
    let fine = carve(10.0, 10.0, &hole, &fine).unwrap();
    assert!(coarse.len() < fine.len());
}

#[test]
fn carve_around_slanted_boundary() {
    let diamond = shape(&[[5.7, 2.3], [8.9, 5.3], [5.9, 7.9], [2.3, 4.7]]);
    let carved = carve(10.0, 10.0, &diamond, &CarveParameters::default()).unwrap();
    assert_relative_eq!(total_area(&carved), 100.0 - diamond.area(), epsilon = 1.0e-6);
    assert!(carved.iter().any(|p| p.is_triangle()));
}

#[test]
fn embedded_output_is_flat() {
    let hole = square_hole();
    let carved = carve(10.0, 10.0, &hole, &CarveParameters::default()).unwrap();

    for poly in &carved {
        let pts3 = poly.to_points3(0.0);
        assert_eq!(pts3.len(), poly.points().len());
        assert!(pts3.iter().all(|pt| pt.y == 0.0));
    }
}
