//! π estimators
//!
//! Quadrature estimators in [`integral`] are deterministic. The Monte Carlo
//! estimators take the random number generator as an argument, so a seeded
//! generator reproduces an estimate bit for bit.
pub mod adaptive;
pub mod area_ratio;
pub mod integral;
pub mod loop_count;

pub use adaptive::{Adaptive, AdaptiveError, Convergence, State, Tally};
pub use area_ratio::{
    AreaRatio, MonteCarloEstimate, SampleCount, SampleCountError,
};
pub use integral::{
    Bounds, IntegralEstimate, PiIntegral, INTEGRALS, QUARTER_CIRCLE,
    SINC_SIXTH, SINC_SQUARED,
};
pub use loop_count::{LoopCount, LoopCountEstimate};
