//! Quadrature on [a, ∞) by panel summation and Richardson extrapolation
//!
//! The half line is cut into consecutive panels of a fixed width. For an
//! integrand with algebraic decay the partial sum `S_n` over the first `n`
//! panels misses a tail with an expansion `c1/n + c2/n^2 + ...`. Doubling
//! the panel count fills a Richardson table
//!
//! ```text
//! T(k, 0) = S_(n0 2^k)
//! T(k, j) = (2^j T(k, j-1) - T(k-1, j-1)) / (2^j - 1)
//! ```
//!
//! whose diagonal drops one more tail term per row. Doubling stops once two
//! consecutive diagonal entries agree to within tolerance. Divergent
//! integrals never settle and run out of panels.
use super::quad::{try_quad, QuadConfig, QuadError, Quadrature};

/// Add the integrals over panels `from..to` to `acc`
fn sum_panels<F>(
    func: &F,
    a: f64,
    period: f64,
    from: usize,
    to: usize,
    config: &QuadConfig,
    acc: &mut Quadrature,
) -> Result<(), QuadError>
where
    F: Fn(f64) -> f64,
{
    for k in from..to {
        let lo = a + period * k as f64;
        let hi = a + period * (k + 1) as f64;
        let q = try_quad(func, lo, hi, config)?;
        acc.value += q.value;
        acc.error += q.error;
        acc.evaluations += q.evaluations;
    }
    Ok(())
}

/// Adaptive quadrature of `func` over [a, ∞)
///
/// `period` is the panel width. For oscillating integrands choose the
/// period of the oscillation so every panel boundary sees the same phase.
///
/// # Example
///
/// ```
/// use piest::misc::{try_quad_semi_infinite, QuadConfig};
///
/// // ∫ e^-x dx over [0, ∞) = 1
/// let q = try_quad_semi_infinite(
///     |x: f64| (-x).exp(),
///     0.0,
///     1.0,
///     &QuadConfig::default(),
/// ).unwrap();
///
/// assert!((q.value - 1.0).abs() < 1E-9);
/// ```
pub fn try_quad_semi_infinite<F>(
    func: F,
    a: f64,
    period: f64,
    config: &QuadConfig,
) -> Result<Quadrature, QuadError>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !period.is_finite() || period <= 0.0 {
        return Err(QuadError::InvalidInterval {
            a,
            b: f64::INFINITY,
        });
    }

    let mut n = config.initial_panels.max(1);
    let mut partial = Quadrature {
        value: 0.0,
        error: 0.0,
        evaluations: 0,
    };
    sum_panels(&func, a, period, 0, n, config, &mut partial)?;

    // previous row of the Richardson table
    let mut row: Vec<f64> = vec![partial.value];
    while 2 * n <= config.max_panels {
        sum_panels(&func, a, period, n, 2 * n, config, &mut partial)?;
        n *= 2;

        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(partial.value);
        for (j, &t_prev) in row.iter().enumerate() {
            let pow = f64::from(2_u32.pow(j as u32 + 1));
            let t = (pow * next[j] - t_prev) / (pow - 1.0);
            next.push(t);
        }

        let last = row[row.len() - 1];
        let extrapolated = next[next.len() - 1];
        let delta = (extrapolated - last).abs();
        tracing::debug!(panels = n, value = extrapolated, delta, "richardson row");

        if row.len() > 1 && delta <= config.tolerance(extrapolated) {
            return Ok(Quadrature {
                value: extrapolated,
                error: delta + partial.error,
                evaluations: partial.evaluations,
            });
        }
        row = next;
    }

    Err(QuadError::NotConverged {
        panels: n,
        value: row[row.len() - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn exponential_decay() {
        let q = try_quad_semi_infinite(
            |x: f64| (-x).exp(),
            0.0,
            1.0,
            &QuadConfig::default(),
        )
        .unwrap();
        assert::close(q.value, 1.0, 1E-9);
    }

    #[test]
    fn shifted_lower_bound() {
        // ∫ e^-x over [2, ∞) = e^-2
        let q = try_quad_semi_infinite(
            |x: f64| (-x).exp(),
            2.0,
            1.0,
            &QuadConfig::default(),
        )
        .unwrap();
        assert::close(q.value, (-2.0_f64).exp(), 1E-9);
    }

    #[test]
    fn algebraic_tail_is_extrapolated() {
        // ∫ 1/(1+x)^2 over [0, ∞) = 1; the tail after n panels is 1/(1+n)
        let q = try_quad_semi_infinite(
            |x: f64| (1.0 + x).powi(-2),
            0.0,
            1.0,
            &QuadConfig::default(),
        )
        .unwrap();
        assert::close(q.value, 1.0, 1E-6);
    }

    #[test]
    fn arctan_integral() {
        let q = try_quad_semi_infinite(
            |x: f64| 1.0 / (1.0 + x * x),
            0.0,
            1.0,
            &QuadConfig::default(),
        )
        .unwrap();
        assert::close(q.value, FRAC_PI_2, 1E-6);
    }

    #[test]
    fn sin_squared_over_t_squared_with_period_panels() {
        let f = |t: f64| crate::misc::sinc(t).powi(2);
        let q =
            try_quad_semi_infinite(f, 0.0, PI, &QuadConfig::default()).unwrap();
        assert::close(q.value, FRAC_PI_2, 1E-8);
    }

    #[test]
    fn divergent_integral_is_not_converged() {
        let config = QuadConfig::default().with_max_panels(1 << 10);
        let res = try_quad_semi_infinite(|x: f64| 1.0 / (1.0 + x), 0.0, 1.0, &config);
        match res {
            Err(QuadError::NotConverged { panels, value }) => {
                assert_eq!(panels, 1 << 10);
                assert!(value > 5.0);
            }
            other => panic!("expected NotConverged, got {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_period() {
        let config = QuadConfig::default();
        assert!(try_quad_semi_infinite(|x| x, 0.0, 0.0, &config).is_err());
        assert!(try_quad_semi_infinite(|x| x, 0.0, -1.0, &config).is_err());
        assert!(
            try_quad_semi_infinite(|x| x, f64::NEG_INFINITY, 1.0, &config)
                .is_err()
        );
    }
}
