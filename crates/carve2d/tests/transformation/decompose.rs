use super::{assert_outside, shape, total_area};
use approx::assert_relative_eq;
use carve2d::bounding_volume::Aabb;
use carve2d::transformation::{
    carve_cell, carve_shapes, decompose, CarveParameters, DecomposeError, SplitError,
};

#[test]
fn decompose_carves_a_frame_around_the_boundary() {
    let diamond = shape(&[[5.7, 2.3], [8.9, 5.3], [5.9, 7.9], [2.3, 4.7]]);
    let carved = decompose(&diamond, &CarveParameters::default()).unwrap();

    let frame = Aabb::from_points(carved.iter().flat_map(|p| p.points().iter().copied())).unwrap();
    let bounds = diamond.bounds();
    assert!(frame.mins.x < bounds.mins.x && frame.mins.y < bounds.mins.y);
    assert!(frame.maxs.x > bounds.maxs.x && frame.maxs.y > bounds.maxs.y);

    // Both pieces span the height of the boundary, so their frames tile one rectangle.
    assert_relative_eq!(
        total_area(&carved),
        frame.area() - diamond.area(),
        epsilon = 1.0e-4
    );
}

#[test]
fn default_decompose_stays_outside_of_the_boundary() {
    let square = shape(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
    let diamond = shape(&[[5.7, 2.3], [8.9, 5.3], [5.9, 7.9], [2.3, 4.7]]);
    let pentagon = shape(&[[2.0, 0.2], [4.1, 1.6], [3.3, 4.0], [0.9, 4.0], [0.1, 1.6]]);

    for boundary in [square, diamond, pentagon] {
        let carved = decompose(&boundary, &CarveParameters::default()).unwrap();
        assert!(!carved.is_empty());
        assert_outside(&boundary, &carved);
    }
}

#[test]
fn carve_shapes_concatenates_in_order() {
    let a = shape(&[[1.3, 1.7], [8.6, 2.9], [4.1, 8.2]]);
    let b = shape(&[[5.7, 2.3], [8.9, 5.3], [5.9, 7.9], [2.3, 4.7]]);
    let params = CarveParameters::default();

    let first = carve_cell(a.bounds(), &a, &params).unwrap();
    let second = carve_cell(b.bounds(), &b, &params).unwrap();
    let both = carve_shapes(&[a, b], &params).unwrap();

    assert_eq!(both.len(), first.len() + second.len());
    assert_eq!(&both[..first.len()], &first[..]);
    assert_eq!(&both[first.len()..], &second[..]);
}

#[test]
fn decompose_reports_split_errors() {
    // The middle of the bounds is x = 1, where the apex lies.
    let triangle = shape(&[[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]]);
    assert_eq!(
        decompose(&triangle, &CarveParameters::default()),
        Err(DecomposeError::Split(SplitError::VertexOnCutLine {
            index: 1
        }))
    );
}
