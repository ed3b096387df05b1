//! Run configuration
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{
    ADAPTIVE_MAX_ITERS, ADAPTIVE_REL_ERROR, AREA_RATIO_N_SAMPLES,
    LOOP_COUNT_N_SAMPLES,
};
use crate::estimate::{Adaptive, AreaRatio, LoopCount, SampleCountError};
use crate::misc::QuadConfig;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

/// Settings for a full run of every estimator
///
/// # Example
///
/// A seeded configuration reproduces its random numbers.
///
/// ```
/// use piest::Config;
/// use rand::Rng;
///
/// let config = Config::default().with_seed(1337);
/// let a: f64 = config.rng().gen();
/// let b: f64 = config.rng().gen();
///
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case", default))]
pub struct Config {
    /// Samples drawn by the area-ratio estimator
    pub area_ratio_n_samples: usize,
    /// Samples drawn by the loop estimator
    pub loop_count_n_samples: usize,
    /// Relative error at which the adaptive estimator stops
    pub rel_error: f64,
    /// Iteration bound of the adaptive estimator
    pub max_iters: u64,
    /// Seed for the random number generator; `None` seeds from the OS
    pub seed: Option<u64>,
    pub quad: QuadConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            area_ratio_n_samples: AREA_RATIO_N_SAMPLES,
            loop_count_n_samples: LOOP_COUNT_N_SAMPLES,
            rel_error: ADAPTIVE_REL_ERROR,
            max_iters: ADAPTIVE_MAX_ITERS,
            seed: None,
            quad: QuadConfig::default(),
        }
    }
}

impl Config {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rel_error(mut self, rel_error: f64) -> Self {
        self.rel_error = rel_error;
        self
    }

    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn with_area_ratio_n_samples(mut self, n: usize) -> Self {
        self.area_ratio_n_samples = n;
        self
    }

    pub fn with_loop_count_n_samples(mut self, n: usize) -> Self {
        self.loop_count_n_samples = n;
        self
    }

    pub fn with_quad(mut self, quad: QuadConfig) -> Self {
        self.quad = quad;
        self
    }

    /// A fresh generator, seeded from `seed` when set
    pub fn rng(&self) -> Xoshiro256Plus {
        match self.seed {
            Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
            None => Xoshiro256Plus::from_entropy(),
        }
    }

    pub fn area_ratio(&self) -> Result<AreaRatio, SampleCountError> {
        AreaRatio::new(self.area_ratio_n_samples)
    }

    pub fn loop_count(&self) -> Result<LoopCount, SampleCountError> {
        LoopCount::new(self.loop_count_n_samples)
    }

    pub fn adaptive(&self) -> Adaptive {
        Adaptive::new(self.rel_error).with_max_iters(self.max_iters)
    }
}
