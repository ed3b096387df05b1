//! Estimate π from definite integrals with known closed forms
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{FORTY_OVER_ELEVEN, PI};
use crate::misc::{
    sinc, try_quad, try_quad_semi_infinite, QuadConfig, QuadError, Quadrature,
};
use crate::traits::PiEstimate;

/// Integration bounds
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum Bounds {
    /// [a, b]
    Finite { a: f64, b: f64 },
    /// [a, ∞), summed over panels of width `period`
    SemiInfinite { a: f64, period: f64 },
}

/// A fixed integral whose value is a known multiple of π
///
/// # Example
///
/// ```
/// use piest::estimate::integral::QUARTER_CIRCLE;
/// use piest::misc::QuadConfig;
/// use piest::traits::PiEstimate;
///
/// let est = QUARTER_CIRCLE.estimate(&QuadConfig::default()).unwrap();
/// assert!(est.abs_error() < 1E-8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PiIntegral {
    /// Short name used in reports
    pub label: &'static str,
    integrand: fn(f64) -> f64,
    bounds: Bounds,
    /// π = scale * integral
    scale: f64,
}

fn sinc_squared(t: f64) -> f64 {
    sinc(t).powi(2)
}

fn quarter_circle(t: f64) -> f64 {
    // rounding near t = 1 must not push the radicand negative
    4.0 * (1.0 - t * t).max(0.0).sqrt()
}

fn sinc_sixth(t: f64) -> f64 {
    FORTY_OVER_ELEVEN * sinc(t).powi(6)
}

/// ∫ sin²(t)/t² dt over [0, ∞) = π/2
pub const SINC_SQUARED: PiIntegral = PiIntegral {
    label: "int1",
    integrand: sinc_squared,
    bounds: Bounds::SemiInfinite { a: 0.0, period: PI },
    scale: 2.0,
};

/// ∫ 4 √(1 - t²) dt over [0, 1] = π
pub const QUARTER_CIRCLE: PiIntegral = PiIntegral {
    label: "int2",
    integrand: quarter_circle,
    bounds: Bounds::Finite { a: 0.0, b: 1.0 },
    scale: 1.0,
};

/// ∫ 40/11 (sin(t)/t)<sup>6</sup> dt over [0, ∞) = π
pub const SINC_SIXTH: PiIntegral = PiIntegral {
    label: "int3",
    integrand: sinc_sixth,
    bounds: Bounds::SemiInfinite { a: 0.0, period: PI },
    scale: 1.0,
};

/// Every integral estimator in report order
pub const INTEGRALS: [PiIntegral; 3] = [SINC_SQUARED, QUARTER_CIRCLE, SINC_SIXTH];

/// An estimate of π from one integral
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct IntegralEstimate {
    pub pi_est: f64,
    /// Error estimate of the underlying quadrature, scaled like `pi_est`
    pub error: f64,
    pub evaluations: usize,
}

impl PiEstimate for IntegralEstimate {
    fn pi_est(&self) -> f64 {
        self.pi_est
    }
}

impl PiIntegral {
    /// Evaluate the integrand at `t`
    #[inline]
    pub fn integrand(&self, t: f64) -> f64 {
        (self.integrand)(t)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The exact value of the integral
    pub fn exact(&self) -> f64 {
        PI / self.scale
    }

    /// Numerically integrate over the fixed bounds
    pub fn integrate(
        &self,
        config: &QuadConfig,
    ) -> Result<Quadrature, QuadError> {
        match self.bounds {
            Bounds::Finite { a, b } => try_quad(self.integrand, a, b, config),
            Bounds::SemiInfinite { a, period } => {
                try_quad_semi_infinite(self.integrand, a, period, config)
            }
        }
    }

    /// Estimate π as `scale * integral`
    pub fn estimate(
        &self,
        config: &QuadConfig,
    ) -> Result<IntegralEstimate, QuadError> {
        let q = self.integrate(config)?;
        tracing::debug!(
            label = self.label,
            value = q.value,
            error = q.error,
            evaluations = q.evaluations,
            "integrated"
        );
        Ok(IntegralEstimate {
            pi_est: self.scale * q.value,
            error: self.scale * q.error,
            evaluations: q.evaluations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAC_PI_2;

    const TOL: f64 = 1E-4;

    #[test]
    fn sinc_squared_gives_half_pi() {
        let q = SINC_SQUARED.integrate(&QuadConfig::default()).unwrap();
        assert::close(q.value, FRAC_PI_2, TOL);
    }

    #[test]
    fn every_integral_estimates_pi() {
        let config = QuadConfig::default();
        for integral in INTEGRALS.iter() {
            let est = integral.estimate(&config).unwrap();
            assert!(
                est.abs_error() < TOL,
                "{}: {} is not within {} of π",
                integral.label,
                est.pi_est,
                TOL
            );
            assert::close(integral.exact() * integral.scale(), PI, 1E-15);
        }
    }

    #[test]
    fn sinc_integrands_are_finite_at_zero() {
        assert_eq!(SINC_SQUARED.integrand(0.0), 1.0);
        assert::close(SINC_SIXTH.integrand(0.0), FORTY_OVER_ELEVEN, 1E-15);
        assert!(SINC_SQUARED.integrand(1E-300).is_finite());
        assert!(SINC_SIXTH.integrand(-1E-300).is_finite());
    }

    #[test]
    fn quarter_circle_is_zero_at_and_past_the_edge() {
        assert_eq!(QUARTER_CIRCLE.integrand(1.0), 0.0);
        assert_eq!(QUARTER_CIRCLE.integrand(1.000_000_1), 0.0);
        assert_eq!(QUARTER_CIRCLE.integrand(0.0), 4.0);
    }

    #[test]
    fn labels_are_in_report_order() {
        let labels: Vec<&str> = INTEGRALS.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["int1", "int2", "int3"]);
    }

    #[test]
    fn tight_budget_propagates_as_error() {
        let config = QuadConfig::default().with_max_subdivisions(0);
        assert!(matches!(
            QUARTER_CIRCLE.estimate(&config),
            Err(QuadError::MaxSubdivisions { .. })
        ));
    }
}
