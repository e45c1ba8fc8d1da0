extern crate local_spline;

use local_spline::{Interpolation, LocalSpline, Point2};

fn main() {

    let points = vec![
        Point2::new(0.0, 1.0),
        Point2::new(1.0, -1.0),
        Point2::new(2.0, 0.0),
        Point2::new(4.0, 3.0),
        Point2::new(5.0, 1.0),
        Point2::new(6.0, 1.0)
    ];

    let spline = LocalSpline::new(Interpolation::Cardinal, 0.0);
    let curve = spline.path(&points).unwrap();

    println!("x;y");
    for point in curve.sample(10) {
        println!("{:.2};{:.2}", point.x, point.y);
    }
}
