//! Library of local spline interpolation. Tangent slopes are estimated for
//! each point from a small neighbourhood only, without solving a global set
//! of equations, and the curve is produced as chained cubic Bezier segments.
//!
//! # Example
//! ```
//! use local_spline::{Interpolation, LocalSpline, Point2};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(3.0, 1.0)
//! ];
//! let spline = LocalSpline::new(Interpolation::Cardinal, 0.0);
//!
//! let slopes = spline.slopes(&points).unwrap();
//! assert_approx_eq!(1.0, slopes[0], 1e-6);
//! assert_approx_eq!(0.0, slopes[1], 1e-6);
//!
//! let curve = spline.path(&points).unwrap();
//! assert_eq!(3, curve.segment_count());
//! ```

mod curve;
mod segment;
mod spline;

pub use curve::Curve;
pub use segment::CubicSegment;
pub use spline::{Interpolation, LocalSpline};

pub use nalgebra::Point2;
