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

    let interpolations = [
        Interpolation::Cardinal,
        Interpolation::Akima,
        Interpolation::HarmonicMean
    ];

    for interpolation in interpolations {
        let spline = LocalSpline::new(interpolation, 0.0);
        let slopes = spline.slopes(&points).unwrap();

        print!("{:?}", interpolation);
        for slope in slopes {
            print!(";{:.3}", slope);
        }
        println!();
    }
}
