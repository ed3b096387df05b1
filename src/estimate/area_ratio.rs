//! Fixed-sample area-ratio estimator
//!
//! ```text
//!  A_circle      π r²      π         # in circle
//! ----------  =  ------ = ---  =>  4 ------------- ~= π
//!  A_square      4 r²      4         # in square
//! ```
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::AREA_RATIO_N_SAMPLES;
use crate::dist::Square;
use crate::traits::PiEstimate;
use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// A strictly positive, integral number of samples
///
/// # Example
///
/// A count written as a float literal is accepted only when it is integral.
///
/// ```
/// use piest::estimate::SampleCount;
///
/// assert_eq!(SampleCount::try_from(1e5).unwrap().get(), 100_000);
/// assert!(SampleCount::try_from(1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(try_from = "usize", into = "usize"))]
pub struct SampleCount(usize);

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum SampleCountError {
    /// Zero samples cannot estimate anything
    Zero,
    /// The count was NaN or infinite
    NotFinite { n: f64 },
    /// The count had a fractional part
    NotIntegral { n: f64 },
    /// The count was negative or too large for `usize`
    OutOfRange { n: f64 },
}

impl SampleCount {
    pub fn new(n: usize) -> Result<Self, SampleCountError> {
        if n == 0 {
            Err(SampleCountError::Zero)
        } else {
            Ok(SampleCount(n))
        }
    }

    /// Creates a SampleCount without checking that `n` is positive.
    #[inline]
    pub const fn new_unchecked(n: usize) -> Self {
        SampleCount(n)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for SampleCount {
    type Error = SampleCountError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        SampleCount::new(n)
    }
}

impl TryFrom<f64> for SampleCount {
    type Error = SampleCountError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if !n.is_finite() {
            Err(SampleCountError::NotFinite { n })
        } else if n.fract() != 0.0 {
            Err(SampleCountError::NotIntegral { n })
        } else if n < 0.0 || n >= usize::MAX as f64 {
            Err(SampleCountError::OutOfRange { n })
        } else {
            SampleCount::new(n as usize)
        }
    }
}

impl From<SampleCount> for usize {
    fn from(n: SampleCount) -> usize {
        n.0
    }
}

impl std::error::Error for SampleCountError {}

impl fmt::Display for SampleCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "sample count must be positive"),
            Self::NotFinite { n } => write!(f, "non-finite sample count: {}", n),
            Self::NotIntegral { n } => {
                write!(f, "sample count is not an integer: {}", n)
            }
            Self::OutOfRange { n } => {
                write!(f, "sample count out of range: {}", n)
            }
        }
    }
}

/// The outcome of a fixed-sample Monte Carlo estimator
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct MonteCarloEstimate {
    pub pi_est: f64,
    /// Number of points strictly inside the unit circle
    pub n_inside: usize,
    pub n_samples: usize,
}

impl PiEstimate for MonteCarloEstimate {
    fn pi_est(&self) -> f64 {
        self.pi_est
    }
}

/// Area-ratio estimator over [-1, 1)²
///
/// # Example
///
/// ```
/// use piest::estimate::AreaRatio;
/// use piest::traits::PiEstimate;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
/// let est = AreaRatio::new(1_000_000).unwrap().estimate(&mut rng);
///
/// assert!(est.abs_error() < 0.05);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct AreaRatio {
    n_samples: SampleCount,
}

impl Default for AreaRatio {
    fn default() -> Self {
        AreaRatio {
            n_samples: SampleCount::new_unchecked(AREA_RATIO_N_SAMPLES),
        }
    }
}

impl From<SampleCount> for AreaRatio {
    fn from(n_samples: SampleCount) -> Self {
        AreaRatio { n_samples }
    }
}

impl AreaRatio {
    pub fn new(n_samples: usize) -> Result<Self, SampleCountError> {
        SampleCount::new(n_samples).map(AreaRatio::from)
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples.get()
    }

    /// Draw two coordinate arrays and count the pairs strictly inside the
    /// unit circle
    pub fn estimate<R: Rng>(&self, rng: &mut R) -> MonteCarloEstimate {
        let n = self.n_samples();
        let (xs, ys) = Square::symmetric().sample_coords(n, rng);

        let n_inside = xs
            .iter()
            .zip_eq(ys.iter())
            .filter(|&(&x, &y)| (x * x + y * y).sqrt() < 1.0)
            .count();

        MonteCarloEstimate {
            pi_est: 4.0 * n_inside as f64 / n as f64,
            n_inside,
            n_samples: n,
        }
    }
}
