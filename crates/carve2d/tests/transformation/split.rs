use super::shape;
use approx::assert_relative_eq;
use carve2d::math::Real;
use carve2d::transformation::{split_shape, SplitError};

#[test]
fn split_unit_square() {
    let square = shape(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);

    let (left, right) = split_shape(&square, 0.5).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(right.len(), 1);
    for piece in left.iter().chain(&right) {
        assert_relative_eq!(piece.bounds().extents().x, 0.5);
        assert_relative_eq!(piece.area(), 0.5);
    }

    let (left, right) = square.split(1.1).unwrap();
    assert_eq!(left, vec![square.clone()]);
    assert!(right.is_empty());

    let (left, right) = square.split(-1.0).unwrap();
    assert!(left.is_empty());
    assert_eq!(right, vec![square]);
}

#[test]
fn split_boundary_crossing_four_times() {
    let shape = shape(&[
        [0.0, 0.0],
        [0.7, 0.5],
        [0.0, 1.0],
        [0.3, 1.0],
        [0.9, 0.5],
        [0.3, 0.0],
    ]);

    let (left, right) = shape.split(0.5).unwrap();
    assert_eq!(left.len(), 2);
    assert_eq!(right.len(), 1);

    for piece in &left {
        assert!(piece.points().iter().all(|pt| pt.x <= 0.5));
    }

    for piece in &right {
        assert!(piece.points().iter().all(|pt| pt.x >= 0.5));
    }
}

#[test]
fn split_preserves_area() {
    let glyph = shape(&[
        [0.3, 0.2],
        [4.1, 0.6],
        [3.7, 3.9],
        [2.2, 1.7],
        [1.1, 3.3],
    ]);

    let (left, right) = glyph.split(2.05).unwrap();
    let total: Real = left.iter().chain(&right).map(|s| s.area()).sum();
    assert_relative_eq!(total, glyph.area(), epsilon = 1.0e-9);
}

#[test]
fn vertex_on_cut_line() {
    let triangle = shape(&[[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]]);
    assert_eq!(
        triangle.split(1.0),
        Err(SplitError::VertexOnCutLine { index: 1 })
    );
}
