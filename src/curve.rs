use nalgebra::Point2;

use crate::segment::CubicSegment;

/// Piecewise cubic Bezier curve produced by [LocalSpline](crate::LocalSpline).
/// Consecutive segments chain: the end point of segment `i` is the start
/// point of segment `i+1`. A curve built from a single input point keeps that
/// point as its start without any segments.
pub struct Curve {
    start: Option<Point2<f64>>,
    segments: Vec<CubicSegment>,
}

impl Curve {

    pub fn empty() -> Self {
        Curve { start: None, segments: Vec::new() }
    }

    pub fn from_point(point: Point2<f64>) -> Self {
        Curve { start: Some(point), segments: Vec::new() }
    }

    pub fn from_segments(segments: Vec<CubicSegment>) -> Self {
        let start = segments.first().map(|segment| segment.get_start());
        Curve { start, segments }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn get_start(&self) -> Option<Point2<f64>> {
        self.start
    }

    pub fn get_segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Flattens the curve into a polyline with `steps` evaluated points per
    /// segment; the final endpoint is always included. A zero step count is
    /// treated as 1.
    pub fn sample(&self, steps: usize) -> Vec<Point2<f64>> {
        let start = match self.start {
            Some(point) => point,
            None => return Vec::new(),
        };

        let steps = steps.max(1);
        let mut result = Vec::with_capacity(self.segments.len() * steps + 1);
        result.push(start);

        for segment in &self.segments {
            for i in 1..=steps {
                let t = i as f64 / steps as f64;
                result.push(segment.evaluate(t));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn empty_curve() {
        let curve = Curve::empty();

        assert!(curve.is_empty());
        assert_eq!(None, curve.get_start());
        assert_eq!(0, curve.segment_count());
        assert_eq!(0, curve.sample(10).len());
    }

    #[test]
    fn single_point_curve() {
        let curve = Curve::from_point(Point2::new(2.0, -1.0));

        assert!(!curve.is_empty());
        assert_eq!(Some(Point2::new(2.0, -1.0)), curve.get_start());
        assert_eq!(0, curve.segment_count());
        assert_eq!(vec![Point2::new(2.0, -1.0)], curve.sample(10));
    }

    #[test]
    fn curve_start_comes_from_first_segment() {
        let segments = vec![
            CubicSegment::from_hermite(Point2::new(0.0, 0.0), 1.0, Point2::new(1.0, 1.0), 0.0),
            CubicSegment::from_hermite(Point2::new(1.0, 1.0), 0.0, Point2::new(2.0, 0.0), -1.0),
        ];

        let curve = Curve::from_segments(segments);

        assert_eq!(Some(Point2::new(0.0, 0.0)), curve.get_start());
        assert_eq!(2, curve.segment_count());
    }

    #[test]
    fn sample_includes_both_ends() {
        let eps = 1e-12;
        let segments = vec![
            CubicSegment::from_hermite(Point2::new(0.0, 0.0), 1.0, Point2::new(1.0, 1.0), 1.0),
            CubicSegment::from_hermite(Point2::new(1.0, 1.0), 1.0, Point2::new(2.0, 2.0), 1.0),
        ];

        let polyline = Curve::from_segments(segments).sample(4);

        assert_eq!(9, polyline.len());
        assert_approx_eq!(0.0, polyline[0].x, eps);
        assert_approx_eq!(2.0, polyline[8].x, eps);
        assert_approx_eq!(2.0, polyline[8].y, eps);
    }

    #[test]
    fn sample_with_zero_steps() {
        let segments = vec![
            CubicSegment::from_hermite(Point2::new(0.0, 0.0), 1.0, Point2::new(1.0, 1.0), 1.0),
        ];

        let polyline = Curve::from_segments(segments).sample(0);

        assert_eq!(2, polyline.len());
    }
}
