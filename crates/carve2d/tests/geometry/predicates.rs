use carve2d::math::Point;
use carve2d::shape::Segment;
use carve2d::utils::{orientation, point_in_polygon, segments_intersect, Orientation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn crossing_diagonals_intersect() {
    let l1 = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let l2 = Segment::new(Point::new(0.0, 1.0), Point::new(1.0, 0.0));
    assert!(segments_intersect(&l1, &l2));
    assert_eq!(l1.intersection(&l2), Some(Point::new(0.5, 0.5)));
}

#[test]
fn segments_intersect_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut random_point = || Point::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));

    for _ in 0..500 {
        let s1 = Segment::new(random_point(), random_point());
        let s2 = Segment::new(random_point(), random_point());
        assert_eq!(segments_intersect(&s1, &s2), segments_intersect(&s2, &s1));
        assert_eq!(
            s1.intersection(&s2).is_some(),
            s2.intersection(&s1).is_some()
        );
    }
}

#[test]
fn shared_endpoint() {
    let shared = Point::new(0.3, 0.9);
    let s1 = Segment::new(Point::new(-1.1, 0.4), shared);
    let s2 = Segment::new(shared, Point::new(2.7, -0.6));
    assert!(segments_intersect(&s1, &s2));
    assert_eq!(s1.intersection(&s2), Some(shared));
}

#[test]
fn parallel_segments_have_no_crossing_point() {
    let s1 = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 1.0));
    let s2 = Segment::new(Point::new(1.0, 0.5), Point::new(3.0, 1.5));
    // Overlapping colinear segments intersect but have no single crossing point.
    assert!(segments_intersect(&s1, &s2));
    assert_eq!(s1.intersection(&s2), None);
    assert_eq!(
        orientation(&s1.a, &s1.b, &s2.b),
        Orientation::Colinear
    );
}

#[test]
fn point_in_convex_polygon() {
    let poly = [
        Point::new(1.1, 0.3),
        Point::new(3.2, 0.9),
        Point::new(2.6, 2.8),
        Point::new(0.7, 2.1),
    ];
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        // Convex combinations are inside.
        let w: [f64; 4] = [rng.gen(), rng.gen(), rng.gen(), rng.gen()];
        let total: f64 = w.iter().sum();
        let pt = poly
            .iter()
            .zip(w)
            .fold(Point::origin(), |acc, (p, w)| acc + p.coords * (w / total));
        assert!(point_in_polygon(&poly, &pt));
    }

    assert!(!point_in_polygon(&poly, &Point::new(100.0, 1.3)));
    assert!(!point_in_polygon(&poly, &Point::new(-100.0, 1.3)));
    assert!(!point_in_polygon(&poly, &Point::new(2.0, -50.0)));
    assert!(!point_in_polygon(&poly[..2], &Point::new(2.0, 0.6)));
}
