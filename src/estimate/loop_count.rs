//! Fixed-sample loop estimator
//!
//! Draws `n` points but only examines the first `n - 1` of them while still
//! dividing by `n`, and counts points on the circle as inside. Both quirks
//! are kept on purpose; the area-ratio estimator uses a strict comparison
//! and examines every sample.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::area_ratio::{SampleCount, SampleCountError};
use crate::consts::LOOP_COUNT_N_SAMPLES;
use crate::dist::Square;
use crate::traits::PiEstimate;
use rand::Rng;

/// The outcome of [`LoopCount::estimate`]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct LoopCountEstimate {
    pub pi_est: f64,
    /// Points with norm ≤ 1 among those examined
    pub n_inside: usize,
    /// Points examined, always `n_drawn - 1`
    pub n_processed: usize,
    pub n_drawn: usize,
}

impl PiEstimate for LoopCountEstimate {
    fn pi_est(&self) -> f64 {
        self.pi_est
    }
}

/// Loop estimator over [-1, 1)²
///
/// # Example
///
/// ```
/// use piest::estimate::LoopCount;
///
/// let mut rng = rand::thread_rng();
/// let est = LoopCount::default().estimate(&mut rng);
///
/// assert_eq!(est.n_drawn, 10_000);
/// assert_eq!(est.n_processed, 9_999);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct LoopCount {
    n_samples: SampleCount,
}

impl Default for LoopCount {
    fn default() -> Self {
        LoopCount::from(SampleCount::new_unchecked(LOOP_COUNT_N_SAMPLES))
    }
}

impl From<SampleCount> for LoopCount {
    fn from(n_samples: SampleCount) -> Self {
        LoopCount { n_samples }
    }
}

impl LoopCount {
    pub fn new(n_samples: usize) -> Result<Self, SampleCountError> {
        SampleCount::new(n_samples).map(LoopCount::from)
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples.get()
    }

    pub fn estimate<R: Rng>(&self, rng: &mut R) -> LoopCountEstimate {
        let n = self.n_samples();
        let (xs, ys) = Square::symmetric().sample_coords(n, rng);

        let n_processed = n - 1;
        let n_inside = xs
            .iter()
            .zip(ys.iter())
            .take(n_processed)
            .filter(|&(&x, &y)| (x * x + y * y).sqrt() <= 1.0)
            .count();

        LoopCountEstimate {
            pi_est: 4.0 * n_inside as f64 / n as f64,
            n_inside,
            n_processed,
            n_drawn: n,
        }
    }
}
