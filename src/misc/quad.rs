//! Globally adaptive Gauss-Kronrod quadrature on finite intervals
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

const QUAD_EPS: f64 = 1E-10;

/// Positive 15-point Kronrod abscissae, center first.
const XGK: [f64; 8] = [
    0.0,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.586_087_235_467_691_130_294_144_838_258_730,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.991_455_371_120_812_639_206_854_697_526_329,
];

const WGK: [f64; 8] = [
    0.209_482_141_084_727_828_012_999_174_891_714,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.022_935_322_010_529_224_963_732_008_058_970,
];

/// 7-point Gauss weights for XGK[0], XGK[2], XGK[4], XGK[6]
const WG: [f64; 4] = [
    0.417_959_183_673_469_387_755_102_040_816_327,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.129_484_966_168_869_693_270_611_432_679_082,
];

/// Tuning for [`try_quad`] and [`try_quad_semi_infinite`](crate::misc::try_quad_semi_infinite)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct QuadConfig {
    /// Absolute error tolerance
    pub abs_tol: f64,
    /// Relative error tolerance
    pub rel_tol: f64,
    /// Maximum number of bisections on one finite interval
    pub max_subdivisions: usize,
    /// Panels summed before the first extrapolation on `[a, ∞)`
    pub initial_panels: usize,
    /// Panel budget on `[a, ∞)`
    pub max_panels: usize,
}

impl Default for QuadConfig {
    fn default() -> Self {
        QuadConfig {
            abs_tol: QUAD_EPS,
            rel_tol: QUAD_EPS,
            max_subdivisions: 1_000,
            initial_panels: 16,
            max_panels: 1 << 16,
        }
    }
}

impl QuadConfig {
    /// Use `eps` as both the absolute and relative tolerance
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.abs_tol = eps;
        self.rel_tol = eps;
        self
    }

    pub fn with_max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.max_subdivisions = max_subdivisions;
        self
    }

    pub fn with_max_panels(mut self, max_panels: usize) -> Self {
        self.max_panels = max_panels;
        self
    }

    #[inline]
    pub(crate) fn tolerance(&self, value: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * value.abs())
    }
}

/// The value of a definite integral and its error estimate
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Quadrature {
    /// Estimated integral
    pub value: f64,
    /// Estimated absolute error
    pub error: f64,
    /// Number of integrand evaluations
    pub evaluations: usize,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum QuadError {
    /// a >= b, or a bound is infinite or NaN
    InvalidInterval { a: f64, b: f64 },
    /// The integrand evaluated to NaN or ±∞ at `x`
    NonFinite { x: f64 },
    /// The subdivision budget ran out before the error met the tolerance
    MaxSubdivisions { value: f64, error: f64 },
    /// Partial sums on `[a, ∞)` had not settled after `panels` panels
    NotConverged { panels: usize, value: f64 },
}

impl std::error::Error for QuadError {}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b } => {
                write!(f, "invalid interval: (a, b) = ({}, {})", a, b)
            }
            Self::NonFinite { x } => {
                write!(f, "integrand is not finite at x = {}", x)
            }
            Self::MaxSubdivisions { value, error } => write!(
                f,
                "max subdivisions exceeded: value = {}, error = {:e}",
                value, error
            ),
            Self::NotConverged { panels, value } => write!(
                f,
                "improper integral did not converge after {} panels \
                 (last value = {})",
                panels, value
            ),
        }
    }
}

/// One G7K15 application on [a, b]
#[derive(Clone, Debug)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    // max-heap on the error estimate
    fn cmp(&self, other: &Self) -> Ordering {
        self.error
            .partial_cmp(&other.error)
            .unwrap_or(Ordering::Equal)
    }
}

#[inline]
fn eval<F>(func: &F, x: f64) -> Result<f64, QuadError>
where
    F: Fn(f64) -> f64,
{
    let y = func(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(QuadError::NonFinite { x })
    }
}

fn gauss_kronrod<F>(func: &F, a: f64, b: f64) -> Result<Segment, QuadError>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = eval(func, center)?;
    let mut kronrod = WGK[0] * fc;
    let mut gauss = WG[0] * fc;

    for j in 1..XGK.len() {
        let dx = half * XGK[j];
        let pair = eval(func, center - dx)? + eval(func, center + dx)?;
        kronrod += WGK[j] * pair;
        // Gauss nodes sit at the even Kronrod positions
        if j % 2 == 0 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(Segment {
        a,
        b,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}

const EVALS_PER_SEGMENT: usize = 15;

/// Globally adaptive Gauss-Kronrod quadrature of `func` over [a, b]
///
/// The segment with the largest error estimate is bisected until the total
/// error is at most `max(abs_tol, rel_tol * |value|)`.
///
/// # Example
///
/// Integrate f: x<sup>2</sup> over the interval [0, 1].
///
/// ```
/// use piest::misc::{try_quad, QuadConfig};
///
/// let q = try_quad(|x: f64| x.powi(2), 0.0, 1.0, &QuadConfig::default())
///     .unwrap();
///
/// assert!((q.value - 1.0/3.0).abs() < 1E-12);
/// ```
pub fn try_quad<F>(
    func: F,
    a: f64,
    b: f64,
    config: &QuadConfig,
) -> Result<Quadrature, QuadError>
where
    F: Fn(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(QuadError::InvalidInterval { a, b });
    }

    let first = gauss_kronrod(&func, a, b)?;
    let mut value = first.value;
    let mut error = first.error;
    let mut evaluations = EVALS_PER_SEGMENT;

    let mut heap = BinaryHeap::new();
    heap.push(first);

    let mut n_bisections = 0;
    while error > config.tolerance(value) {
        if n_bisections == config.max_subdivisions {
            return Err(QuadError::MaxSubdivisions { value, error });
        }
        let worst = match heap.pop() {
            Some(seg) => seg,
            None => break,
        };

        let mid = 0.5 * (worst.a + worst.b);
        let left = gauss_kronrod(&func, worst.a, mid)?;
        let right = gauss_kronrod(&func, mid, worst.b)?;
        evaluations += 2 * EVALS_PER_SEGMENT;
        n_bisections += 1;

        value += left.value + right.value - worst.value;
        error += left.error + right.error - worst.error;

        heap.push(left);
        heap.push(right);
    }

    // the running sums drift, so settle on a fresh total
    let (value, error) = heap
        .iter()
        .fold((0.0, 0.0), |(v, e), seg| (v + seg.value, e + seg.error));

    Ok(Quadrature {
        value,
        error,
        evaluations,
    })
}

/// Adaptive quadrature with a caller-supplied tolerance
///
/// Never fails; when the integral cannot be computed to `eps` the best
/// available value is returned (NaN for an invalid interval or a non-finite
/// integrand).
///
/// # Example
///
/// ```
/// use piest::misc::quad_eps;
///
/// let q = quad_eps(|x: f64| x.sin(), 0.0, std::f64::consts::PI, Some(1E-6));
/// assert!((q - 2.0).abs() < 1E-6);
/// ```
pub fn quad_eps<F>(func: F, a: f64, b: f64, eps: Option<f64>) -> f64
where
    F: Fn(f64) -> f64,
{
    let config = QuadConfig::default().with_eps(eps.unwrap_or(QUAD_EPS));
    match try_quad(func, a, b, &config) {
        Ok(q) => q.value,
        Err(QuadError::MaxSubdivisions { value, error }) => {
            tracing::warn!(a, b, error, "quadrature did not converge");
            value
        }
        Err(err) => {
            tracing::warn!(a, b, %err, "quadrature failed");
            f64::NAN
        }
    }
}

/// Adaptive quadrature with the default tolerance
///
/// # Example
///
/// Integrate f: x<sup>2</sup> over the interval [0, 1].
///
/// ```
/// use piest::misc::quad;
///
/// let func = |x: f64| x.powi(2);
/// let q = quad(func, 0.0, 1.0);
///
/// assert!((q - 1.0/3.0).abs() < 1E-8);
/// ```
pub fn quad<F>(func: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    quad_eps(func, a, b, None)
}
