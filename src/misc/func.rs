use crate::consts::REPORT_PRECISION;

/// Below this magnitude `sinc` switches to its Taylor expansion
const SINC_TAYLOR_CUTOFF: f64 = 1E-4;

/// The unnormalized sinc function, sin(x) / x
///
/// The singularity at zero is removable; `sinc(0)` is its limit, 1, and
/// values close to zero come from the Taylor series so no division by a
/// vanishing denominator ever happens.
///
/// # Example
///
/// ```rust
/// # use piest::misc::sinc;
/// assert_eq!(sinc(0.0), 1.0);
/// assert!((sinc(std::f64::consts::PI)).abs() < 1E-15);
/// assert!((sinc(1E-9) - 1.0).abs() < 1E-15);
/// ```
pub fn sinc(x: f64) -> f64 {
    if x.abs() < SINC_TAYLOR_CUTOFF {
        let x2 = x * x;
        1.0 - x2 / 6.0 + x2 * x2 / 120.0
    } else {
        x.sin() / x
    }
}

/// Relative deviation of `est` from `truth`, |est/truth - 1|
///
/// # Example
///
/// ```rust
/// # use piest::misc::relative_error;
/// assert!((relative_error(3.0, 2.0) - 0.5).abs() < 1E-15);
/// assert_eq!(relative_error(2.0, 2.0), 0.0);
/// ```
#[inline]
pub fn relative_error(est: f64, truth: f64) -> f64 {
    (est / truth - 1.0).abs()
}

/// Format a value in fixed point with the report precision
///
/// # Example
///
/// ```rust
/// # use piest::misc::fmt_fixed;
/// assert_eq!(fmt_fixed(std::f64::consts::PI), "3.1415926535897931");
/// assert_eq!(fmt_fixed(0.5), "0.5000000000000000");
/// ```
pub fn fmt_fixed(x: f64) -> String {
    format!("{:.*}", REPORT_PRECISION, x)
}
