extern crate nalgebra as na;

use carve2d::math::{Point, Real};
use carve2d::shape::Shape;
use carve2d::transformation::{decompose, CarveParameters};
use na::Vector2;

fn main() {
    /*
     * Build an outline and shrink it about its own center.
     */
    let outline = Shape::new(vec![
        Point::new(57.0, 23.0),
        Point::new(89.0, 53.0),
        Point::new(59.0, 79.0),
        Point::new(23.0, 47.0),
    ])
    .expect("the outline has enough points");
    let center = *outline.center();
    let mut outline = outline.with_origin(center);
    outline.scale(0.1);
    outline.translate(&(Vector2::new(5.0, 5.0) - center.coords));

    /*
     * Split it in two and carve the area around each piece.
     */
    let params = CarveParameters {
        max_depth: 12,
        ..CarveParameters::default()
    };

    match decompose(&outline, &params) {
        Ok(carved) => {
            let area: Real = carved.iter().map(|poly| poly.area()).sum();
            let num_triangles = carved.iter().filter(|poly| poly.is_triangle()).count();
            println!(
                "{} polygons ({} triangles, {} quads) covering an area of {:.4}",
                carved.len(),
                num_triangles,
                carved.len() - num_triangles,
                area
            );

            // Lay the result flat, as a mesh exporter would.
            for poly in carved.iter().take(4) {
                println!("{:?}", poly.to_points3(0.0));
            }
        }
        Err(err) => eprintln!("Decomposition failed: {}", err),
    }
}
