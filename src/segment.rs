use nalgebra::{Point2, Vector2};

/// Single cubic Bezier piece of a curve. The piece starts at `p0`, ends at
/// `p3` and is pulled towards the two inner control points `p1` and `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    p0: Point2<f64>,
    p1: Point2<f64>,
    p2: Point2<f64>,
    p3: Point2<f64>,
}

impl CubicSegment {

    pub fn new(p0: Point2<f64>, p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> Self {
        CubicSegment { p0, p1, p2, p3 }
    }

    /// Builds the segment between `start` and `end` with prescribed tangent
    /// slopes at both ends. Inner control points are placed one third of the
    /// x-distance away from the endpoints, lifted by slope times that offset.
    /// # Example
    /// ```
    /// use local_spline::{CubicSegment, Point2};
    ///
    /// let segment = CubicSegment::from_hermite(Point2::new(0.0, 0.0), 1.0, Point2::new(3.0, 3.0), 1.0);
    ///
    /// assert_eq!(Point2::new(1.0, 1.0), segment.get_control1());
    /// assert_eq!(Point2::new(2.0, 2.0), segment.get_control2());
    /// ```
    pub fn from_hermite(start: Point2<f64>, slope_start: f64, end: Point2<f64>, slope_end: f64) -> Self {
        let dx = (end.x - start.x) / 3.0;

        CubicSegment {
            p0: start,
            p1: start + Vector2::new(dx, slope_start * dx),
            p2: end - Vector2::new(dx, slope_end * dx),
            p3: end,
        }
    }

    pub fn get_start(&self) -> Point2<f64> {
        self.p0
    }

    pub fn get_control1(&self) -> Point2<f64> {
        self.p1
    }

    pub fn get_control2(&self) -> Point2<f64> {
        self.p2
    }

    pub fn get_end(&self) -> Point2<f64> {
        self.p3
    }

    /// Evaluates the segment at parameter `t` between 0 (start) and 1 (end)
    /// using the Bernstein form.
    pub fn evaluate(&self, t: f64) -> Point2<f64> {
        let mt = 1.0 - t;

        let b0 = mt * mt * mt;
        let b1 = 3.0 * mt * mt * t;
        let b2 = 3.0 * mt * t * t;
        let b3 = t * t * t;

        Point2::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn from_hermite_places_control_points_on_thirds() {
        let segment = CubicSegment::from_hermite(Point2::new(1.0, 2.0), 0.5, Point2::new(4.0, 1.0), -2.0);

        assert_eq!(Point2::new(1.0, 2.0), segment.get_start());
        assert_eq!(Point2::new(2.0, 2.5), segment.get_control1());
        assert_eq!(Point2::new(3.0, 3.0), segment.get_control2());
        assert_eq!(Point2::new(4.0, 1.0), segment.get_end());
    }

    #[test]
    fn evaluate_hits_endpoints() {
        let eps = 1e-12;
        let segment = CubicSegment::from_hermite(Point2::new(0.0, 1.0), 2.0, Point2::new(2.0, -1.0), 0.0);

        let start = segment.evaluate(0.0);
        let end = segment.evaluate(1.0);

        assert_approx_eq!(0.0, start.x, eps);
        assert_approx_eq!(1.0, start.y, eps);
        assert_approx_eq!(2.0, end.x, eps);
        assert_approx_eq!(-1.0, end.y, eps);
    }

    #[test]
    fn evaluate_straight_segment() {
        let eps = 1e-12;
        let segment = CubicSegment::from_hermite(Point2::new(0.0, 0.0), 1.0, Point2::new(3.0, 3.0), 1.0);

        let middle = segment.evaluate(0.5);

        assert_approx_eq!(1.5, middle.x, eps);
        assert_approx_eq!(1.5, middle.y, eps);
    }

    #[test]
    fn evaluate_flat_ended_segment() {
        // zero slope at both ends of the unit step gives the smoothstep midpoint
        let eps = 1e-12;
        let segment = CubicSegment::from_hermite(Point2::new(0.0, 0.0), 0.0, Point2::new(1.0, 1.0), 0.0);

        let middle = segment.evaluate(0.5);

        assert_approx_eq!(0.5, middle.x, eps);
        assert_approx_eq!(0.5, middle.y, eps);
    }
}
