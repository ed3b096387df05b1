//! Mathematical constants and estimator defaults

/// π
pub const PI: f64 = std::f64::consts::PI;
/// π/2
pub const FRAC_PI_2: f64 = std::f64::consts::FRAC_PI_2;
/// 40/11, the normalizer that turns ∫(sin t / t)<sup>6</sup> into π
pub const FORTY_OVER_ELEVEN: f64 = 40.0 / 11.0;

/// Default number of samples for the area-ratio estimator
pub const AREA_RATIO_N_SAMPLES: usize = 100_000;
/// Default number of samples for the loop estimator
pub const LOOP_COUNT_N_SAMPLES: usize = 10_000;
/// Default relative error at which the adaptive estimator stops
pub const ADAPTIVE_REL_ERROR: f64 = 0.001;
/// Default iteration bound of the adaptive estimator
pub const ADAPTIVE_MAX_ITERS: u64 = 10_000_000;

/// Number of decimals printed for every estimate
pub const REPORT_PRECISION: usize = 16;
