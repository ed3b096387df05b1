//! Adaptive Monte Carlo estimator
//!
//! Draws one point at a time from the unit square and stops as soon as the
//! running estimate is within a relative error of π. The running estimate
//! is a random walk, so there is no deterministic bound on the number of
//! draws; the loop is capped by `max_iters` instead.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{ADAPTIVE_MAX_ITERS, ADAPTIVE_REL_ERROR, PI};
use crate::dist::{Point, Square};
use crate::misc::relative_error;
use crate::traits::{PiEstimate, Sampleable};
use rand::Rng;
use std::fmt;

/// Running counts of accepted and total draws
///
/// `n_inside <= n_total` and neither ever decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Tally {
    n_inside: u64,
    n_total: u64,
}

impl Tally {
    pub fn new() -> Self {
        Tally::default()
    }

    /// Record one draw and return the updated running estimate
    #[inline]
    pub fn record(&mut self, inside: bool) -> f64 {
        if inside {
            self.n_inside += 1;
        }
        self.n_total += 1;
        self.pi_est()
    }

    #[inline]
    pub fn n_inside(&self) -> u64 {
        self.n_inside
    }

    #[inline]
    pub fn n_total(&self) -> u64 {
        self.n_total
    }

    /// 4 × inside / total; NaN before the first draw
    #[inline]
    pub fn pi_est(&self) -> f64 {
        4.0 * self.n_inside as f64 / self.n_total as f64
    }
}

/// Where the estimator is in its loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Converged,
}

/// A running estimate that reached its tolerance
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Convergence {
    pub pi_est: f64,
    /// Number of points drawn
    pub n_iters: u64,
    pub n_inside: u64,
}

impl PiEstimate for Convergence {
    fn pi_est(&self) -> f64 {
        self.pi_est
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum AdaptiveError {
    /// The iteration bound was hit before the tolerance was met
    DidNotConverge { pi_est: f64, n_iters: u64 },
}

impl std::error::Error for AdaptiveError {}

impl fmt::Display for AdaptiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DidNotConverge { pi_est, n_iters } => write!(
                f,
                "did not converge after {} iterations (last estimate = {})",
                n_iters, pi_est
            ),
        }
    }
}

/// Adaptive estimator over the unit square [0, 1)²
///
/// `rel_error` must be strictly positive for the loop to have any chance to
/// stop early. Zero, negative, or NaN tolerances are not rejected; they run
/// to `max_iters` and report [`AdaptiveError::DidNotConverge`].
///
/// # Example
///
/// ```
/// use piest::estimate::Adaptive;
/// use piest::traits::PiEstimate;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
/// let conv = Adaptive::new(0.01).estimate(&mut rng).unwrap();
///
/// assert!(conv.rel_error() <= 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Adaptive {
    rel_error: f64,
    max_iters: u64,
}

impl Default for Adaptive {
    fn default() -> Self {
        Adaptive {
            rel_error: ADAPTIVE_REL_ERROR,
            max_iters: ADAPTIVE_MAX_ITERS,
        }
    }
}

impl Adaptive {
    /// Stop at `rel_error` with the default iteration bound
    pub fn new(rel_error: f64) -> Self {
        Adaptive {
            rel_error,
            ..Adaptive::default()
        }
    }

    /// No practical iteration bound
    pub fn unbounded(rel_error: f64) -> Self {
        Adaptive {
            rel_error,
            max_iters: u64::MAX,
        }
    }

    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    #[inline]
    pub fn rel_error(&self) -> f64 {
        self.rel_error
    }

    #[inline]
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Update `tally` with one point and report whether to stop
    #[inline]
    pub fn step(&self, tally: &mut Tally, point: Point) -> State {
        let pi_est = tally.record(point.norm() < 1.0);
        if relative_error(pi_est, PI) <= self.rel_error {
            State::Converged
        } else {
            State::Running
        }
    }

    pub fn estimate<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<Convergence, AdaptiveError> {
        let square = Square::unit();
        let mut tally = Tally::new();

        while tally.n_total() < self.max_iters {
            let point: Point = square.draw(rng);
            if self.step(&mut tally, point) == State::Converged {
                tracing::debug!(
                    pi_est = tally.pi_est(),
                    n_iters = tally.n_total(),
                    "adaptive estimate converged"
                );
                return Ok(Convergence {
                    pi_est: tally.pi_est(),
                    n_iters: tally.n_total(),
                    n_inside: tally.n_inside(),
                });
            }
        }

        Err(AdaptiveError::DidNotConverge {
            pi_est: tally.pi_est(),
            n_iters: tally.n_total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn converges_within_one_percent() {
        for seed in 0..20 {
            let mut rng = Xoshiro256Plus::seed_from_u64(seed);
            let conv = Adaptive::new(0.01).estimate(&mut rng).unwrap();
            assert!(conv.rel_error() <= 0.01);
            assert!(conv.n_iters >= 1);
            assert!(conv.n_inside <= conv.n_iters);
        }
    }

    #[test]
    fn default_tolerance_converges() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
        let conv = Adaptive::default().estimate(&mut rng).unwrap();
        assert!(conv.rel_error() <= ADAPTIVE_REL_ERROR);
    }

    #[test]
    fn non_positive_tolerance_does_not_converge() {
        for &tol in &[0.0, -0.1, f64::NAN] {
            let mut rng = Xoshiro256Plus::seed_from_u64(7);
            let res = Adaptive::new(tol).with_max_iters(10_000).estimate(&mut rng);
            match res {
                Err(AdaptiveError::DidNotConverge { n_iters, pi_est }) => {
                    assert_eq!(n_iters, 10_000);
                    assert!(pi_est > 0.0 && pi_est <= 4.0);
                }
                other => panic!("expected DidNotConverge, got {:?}", other),
            }
        }
    }

    #[test]
    fn zero_iteration_bound_does_not_converge() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        let res = Adaptive::new(0.5).with_max_iters(0).estimate(&mut rng);
        assert!(matches!(
            res,
            Err(AdaptiveError::DidNotConverge { n_iters: 0, .. })
        ));
    }

    #[test]
    fn same_seed_same_result() {
        let est = Adaptive::new(0.001);
        let a = est.estimate(&mut Xoshiro256Plus::seed_from_u64(5));
        let b = est.estimate(&mut Xoshiro256Plus::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn boundary_point_is_outside() {
        let est = Adaptive::new(0.01);
        let mut tally = Tally::new();
        let _ = est.step(&mut tally, Point::new(1.0, 0.0));
        assert_eq!(tally.n_inside(), 0);
        assert_eq!(tally.n_total(), 1);
    }

    #[test]
    fn step_state_machine() {
        let est = Adaptive::new(0.3);
        let mut tally = Tally::new();
        // 4/1 = 4 is within 30% of π
        assert_eq!(est.step(&mut tally, Point::new(0.1, 0.1)), State::Converged);
        // 4/2 = 2 is not
        assert_eq!(est.step(&mut tally, Point::new(0.9, 0.9)), State::Running);
    }

    #[test]
    fn empty_tally_estimate_is_nan() {
        assert!(Tally::new().pi_est().is_nan());
    }

    proptest! {
        #[test]
        fn tally_inside_never_exceeds_total(draws in prop::collection::vec(any::<bool>(), 0..500)) {
            let mut tally = Tally::new();
            let mut prev = tally;
            for inside in draws {
                let est = tally.record(inside);
                prop_assert!(tally.n_inside() <= tally.n_total());
                prop_assert!(tally.n_inside() >= prev.n_inside());
                prop_assert_eq!(tally.n_total(), prev.n_total() + 1);
                prop_assert!((0.0..=4.0).contains(&est));
                prev = tally;
            }
        }
    }
}
