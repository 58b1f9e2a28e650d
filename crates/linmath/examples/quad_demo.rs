//! Build a quad, knock one corner around with a rotation, and report what
//! the polygon predicates make of the result.

use std::f32::consts::FRAC_PI_2;

use linmath::prelude::*;

fn main() {
    // Start from the unit square's top-right corner and rotate it a quarter
    // turn about the z-axis.
    let top_right = Point3::from_components([1.0, 1.0, 0.0]);
    let rotated4 = transform::rotation_z(FRAC_PI_2) * resize(&top_right);
    let top_right: Point3 = resize(&rotated4);
    println!("rotated corner: {top_right}");

    let quad = Quad3::new([
        Point3::from_components([0.0, 0.0, 0.0]),
        Point3::from_components([1.0, 0.0, 0.0]),
        top_right,
        Point3::from_components([0.0, 1.0, 0.0]),
    ]);

    println!("area = {:.3}", area(&quad));
    for (i, p) in quad.points.iter().enumerate() {
        println!("{}: {p}", i + 1);
    }
    println!("planar? {}", is_planar(&quad));
    println!("convex? {}", is_convex(&quad));

    // The same machinery, straight from the matrix core.
    let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    println!("det [[1,2],[3,4]] = {}", determinant(&m));
    println!("cross(x, y) = {}", cross(&x_axis::<3>(), &y_axis::<3>()));
    println!(
        "projection:\n{}",
        transform::perspective(FRAC_PI_2, 16.0 / 9.0, 0.1, 10.0)
    );
}
