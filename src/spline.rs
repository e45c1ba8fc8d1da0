use std::{error::Error, fmt::Display};

use nalgebra::Point2;

use crate::{curve::Curve, segment::CubicSegment};

/// Method used to estimate tangent slopes from the local neighbourhood of
/// each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Centered finite difference over the two neighbouring points.
    Cardinal,
    /// Bessel (parabolic blending) slopes. Declared for completeness,
    /// selecting it is an error.
    ParabolicBlending,
    /// Weighted blend of four neighbouring secant slopes; the side with less
    /// local curvature change gets more weight.
    Akima,
    /// Harmonic mean of the neighbouring displacements, flattening to zero at
    /// local extrema to avoid overshoot.
    HarmonicMean,
    /// Monotone piecewise cubic Hermite slopes. Declared for completeness,
    /// selecting it is an error.
    Pchip,
}

/// Local spline evaluator. Slopes are estimated per point from a few
/// neighbours only, so no global system of equations is solved. The
/// interpolation method is fixed at construction while tension may be changed
/// between evaluations.
pub struct LocalSpline {
    interpolation: Interpolation,
    tension: f64,
}

impl LocalSpline {

    /// Creates an evaluator with given interpolation method and tension.
    /// Tension is clamped into `[0, 1]`; 0 keeps the full curvature, 1
    /// degenerates every segment to a straight line.
    pub fn new(interpolation: Interpolation, tension: f64) -> Self {
        LocalSpline { interpolation, tension: tension.clamp(0.0, 1.0) }
    }

    pub fn get_interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn get_tension(&self) -> f64 {
        self.tension
    }

    pub fn set_tension(&mut self, tension: f64) {
        self.tension = tension.clamp(0.0, 1.0);
    }

    /// Builds the piecewise cubic Bezier curve through `points`. Boundary
    /// slopes are estimated from the first and last few points.
    /// # Errors
    /// Error is returned when an unimplemented interpolation method is
    /// selected for an input of 3 or more points.
    pub fn path(&self, points: &[Point2<f64>]) -> Result<Curve, Box<dyn Error>> {
        let (slope_start, slope_end) = self.endpoint_slopes(points);
        self.path_clamped(points, slope_start, slope_end)
    }

    /// Builds the curve with explicitly supplied boundary slopes. The given
    /// slopes are used as-is; tension only scales the interior estimates.
    pub fn path_clamped(
        &self,
        points: &[Point2<f64>],
        slope_start: f64,
        slope_end: f64,
    ) -> Result<Curve, Box<dyn Error>> {
        let size = points.len();

        if size == 0 {
            return Ok(Curve::empty());
        }
        if size == 1 {
            return Ok(Curve::from_point(points[0]));
        }

        let slopes = self.slopes_clamped(points, slope_start, slope_end)?;

        let mut segments = Vec::with_capacity(size - 1);
        for i in 0..size - 1 {
            segments.push(CubicSegment::from_hermite(
                points[i],
                slopes[i],
                points[i + 1],
                slopes[i + 1],
            ));
        }

        Ok(Curve::from_segments(segments))
    }

    /// Computes one tangent slope per point. Result is empty for inputs
    /// shorter than 2 points.
    /// # Errors
    /// Error is returned when an unimplemented interpolation method is
    /// selected for an input of 3 or more points.
    pub fn slopes(&self, points: &[Point2<f64>]) -> Result<Vec<f64>, Box<dyn Error>> {
        let (slope_start, slope_end) = self.endpoint_slopes(points);
        self.slopes_clamped(points, slope_start, slope_end)
    }

    /// Computes the slope vector with explicitly supplied boundary slopes.
    pub fn slopes_clamped(
        &self,
        points: &[Point2<f64>],
        slope_start: f64,
        slope_end: f64,
    ) -> Result<Vec<f64>, Box<dyn Error>> {
        let size = points.len();

        if size < 2 {
            return Ok(Vec::new());
        }
        if size == 2 {
            return Ok(vec![slope_start, slope_end]);
        }

        match self.interpolation {
            Interpolation::Cardinal => {
                Ok(cardinal_slopes(points, self.tension, slope_start, slope_end))
            }
            Interpolation::Akima => {
                Ok(akima_slopes(points, self.tension, slope_start, slope_end))
            }
            Interpolation::HarmonicMean => {
                Ok(harmonic_mean_slopes(points, self.tension, slope_start, slope_end))
            }
            Interpolation::ParabolicBlending | Interpolation::Pchip => {
                Err(Box::new(LocalSplineError(
                    format!("interpolation method {:?} is not implemented", self.interpolation)
                )))
            }
        }
    }

    fn endpoint_slopes(&self, points: &[Point2<f64>]) -> (f64, f64) {
        let size = points.len();

        let mut slope_start = 0.0;
        let mut slope_end = 0.0;

        if self.interpolation == Interpolation::HarmonicMean && size >= 3 {
            let s1 = secant_slope(&points[0], &points[1]);
            let s2 = secant_slope(&points[1], &points[2]);
            let s3 = secant_slope(&points[size - 3], &points[size - 2]);
            let s4 = secant_slope(&points[size - 2], &points[size - 1]);

            slope_start = 1.5 * s1 - 0.5 * harmonic_mean(s1, s2);
            slope_end = 1.5 * s4 - 0.5 * harmonic_mean(s3, s4);
        } else if size >= 2 {
            slope_start = secant_slope(&points[0], &points[1]);
            slope_end = secant_slope(&points[size - 2], &points[size - 1]);
        }

        ((1.0 - self.tension) * slope_start, (1.0 - self.tension) * slope_end)
    }
}

fn secant_slope(p1: &Point2<f64>, p2: &Point2<f64>) -> f64 {
    let dx = p2.x - p1.x;
    if dx != 0.0 {
        (p2.y - p1.y) / dx
    } else {
        0.0
    }
}

fn harmonic_mean(s1: f64, s2: f64) -> f64 {
    if (s1 > 0.0) == (s2 > 0.0) && s1 != 0.0 && s2 != 0.0 {
        2.0 / (1.0 / s1 + 1.0 / s2)
    } else {
        0.0
    }
}

fn displacement_harmonic_mean(dx1: f64, dy1: f64, dx2: f64, dy2: f64) -> f64 {
    if (dy1 > 0.0) == (dy2 > 0.0) && dy1 != 0.0 && dy2 != 0.0 {
        2.0 / (dx1 / dy1 + dx2 / dy2)
    } else {
        0.0
    }
}

fn akima_slope(s1: f64, s2: f64, s3: f64, s4: f64) -> f64 {
    // with equal slopes on both sides the blend weights would vanish
    if s1 == s2 && s3 == s4 {
        return 0.5 * (s2 + s3);
    }

    let ds12 = (s2 - s1).abs();
    let ds34 = (s4 - s3).abs();

    (s2 * ds34 + s3 * ds12) / (ds12 + ds34)
}

fn cardinal_slopes(
    points: &[Point2<f64>],
    tension: f64,
    slope_start: f64,
    slope_end: f64,
) -> Vec<f64> {
    let s = 1.0 - tension;
    let size = points.len();

    let mut slopes = vec![0.0; size];
    slopes[0] = slope_start;

    for i in 1..size - 1 {
        slopes[i] = s * secant_slope(&points[i - 1], &points[i + 1]);
    }

    slopes[size - 1] = slope_end;
    slopes
}

fn akima_slopes(
    points: &[Point2<f64>],
    tension: f64,
    slope_start: f64,
    slope_end: f64,
) -> Vec<f64> {
    let s = 1.0 - tension;
    let size = points.len();

    let mut slopes = vec![0.0; size];
    slopes[0] = slope_start;

    // sliding window of four consecutive secant slopes, seeded with the
    // boundary estimate and the first two secants
    let mut s1 = slope_start;
    let mut s2 = secant_slope(&points[0], &points[1]);
    let mut s3 = secant_slope(&points[1], &points[2]);

    for i in 0..size - 3 {
        let s4 = secant_slope(&points[i + 2], &points[i + 3]);

        slopes[i + 1] = s * akima_slope(s1, s2, s3, s4);

        s1 = s2;
        s2 = s3;
        s3 = s4;
    }

    slopes[size - 2] = s * akima_slope(s1, s2, s3, slope_end);
    slopes[size - 1] = slope_end;
    slopes
}

fn harmonic_mean_slopes(
    points: &[Point2<f64>],
    tension: f64,
    slope_start: f64,
    slope_end: f64,
) -> Vec<f64> {
    let s = 1.0 - tension;
    let size = points.len();

    let mut slopes = vec![0.0; size];
    slopes[0] = slope_start;

    let mut dx1 = points[1].x - points[0].x;
    let mut dy1 = points[1].y - points[0].y;

    for i in 1..size - 1 {
        let dx2 = points[i + 1].x - points[i].x;
        let dy2 = points[i + 1].y - points[i].y;

        slopes[i] = s * displacement_harmonic_mean(dx1, dy1, dx2, dy2);

        dx1 = dx2;
        dy1 = dy2;
    }

    slopes[size - 1] = slope_end;
    slopes
}

#[derive(Debug)]
struct LocalSplineError(String);

impl Display for LocalSplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in LocalSpline: {}", self.0)
    }
}

impl Error for LocalSplineError {}
