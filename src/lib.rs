//! Estimate π by numerical quadrature and by Monte Carlo sampling.
//!
//! Three definite integrals whose values are rational multiples of π are
//! evaluated with adaptive Gauss–Kronrod quadrature, and three Monte Carlo
//! estimators count points of a square that land inside a circle.
//!
//! # Example
//!
//! ```
//! use piest::estimate::{AreaRatio, SINC_SQUARED};
//! use piest::misc::QuadConfig;
//! use piest::traits::PiEstimate;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let int1 = SINC_SQUARED.estimate(&QuadConfig::default()).unwrap();
//! assert!(int1.abs_error() < 1E-6);
//!
//! let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
//! let mc1 = AreaRatio::default().estimate(&mut rng);
//! assert!(mc1.abs_error() < 0.05);
//! ```

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod config;
pub mod consts;
pub mod dist;
pub mod estimate;
pub mod misc;
pub mod report;
mod result;
pub mod traits;

pub use config::Config;
pub use report::Report;
pub use result::{Error, Result};
