//! Run every estimator and format the results for the console
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::consts::PI;
use crate::estimate::INTEGRALS;
use crate::misc::fmt_fixed;
use crate::result::Result;
use crate::traits::PiEstimate;
use rand::Rng;
use std::fmt;

/// One labeled estimate
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Entry {
    pub label: String,
    pub pi_est: f64,
    /// Draws used by the adaptive estimator
    pub n_iters: Option<u64>,
}

impl Entry {
    fn new(label: &str, pi_est: f64) -> Self {
        Entry {
            label: String::from(label),
            pi_est,
            n_iters: None,
        }
    }
}

impl PiEstimate for Entry {
    fn pi_est(&self) -> f64 {
        self.pi_est
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "estimated pi ({}) = {}",
            self.label,
            fmt_fixed(self.pi_est)
        )?;
        if let Some(n_iters) = self.n_iters {
            write!(f, "  (iter={})", n_iters)?;
        }
        Ok(())
    }
}

/// Every estimate in run order, followed by the reference value
///
/// # Example
///
/// ```
/// use piest::{Config, Report};
///
/// let config = Config::default().with_seed(0x1234);
/// let report = Report::run(&config, &mut config.rng()).unwrap();
///
/// assert_eq!(report.entries().len(), 6);
/// assert!(report.to_string().ends_with("real pi = 3.1415926535897931\n"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    /// Compute int1-int3, then MC1 (area ratio), MC2 (loop) and MC3
    /// (adaptive), drawing every random number from `rng`
    pub fn run<R: Rng>(config: &Config, rng: &mut R) -> Result<Self> {
        let mut entries = Vec::with_capacity(INTEGRALS.len() + 3);

        for integral in INTEGRALS.iter() {
            let est = integral.estimate(&config.quad)?;
            entries.push(Entry::new(integral.label, est.pi_est));
        }

        let mc1 = config.area_ratio()?.estimate(rng);
        entries.push(Entry::new("MC1", mc1.pi_est));

        let mc2 = config.loop_count()?.estimate(rng);
        entries.push(Entry::new("MC2", mc2.pi_est));

        let mc3 = config.adaptive().estimate(rng)?;
        entries.push(Entry {
            n_iters: Some(mc3.n_iters),
            ..Entry::new("MC3", mc3.pi_est)
        });

        for entry in entries.iter() {
            tracing::info!(
                label = entry.label.as_str(),
                pi_est = entry.pi_est,
                abs_error = entry.abs_error(),
                "estimate"
            );
        }

        Ok(Report { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by its label
    pub fn get(&self, label: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.label == label)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries.iter() {
            writeln!(f, "{}", entry)?;
        }
        writeln!(f)?;
        writeln!(f, "real pi = {}", fmt_fixed(PI))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Error;
    use indoc::indoc;

    fn seeded() -> (Config, rand_xoshiro::Xoshiro256Plus) {
        let config = Config::default().with_seed(0xABCD);
        let rng = config.rng();
        (config, rng)
    }

    #[test]
    fn runs_every_estimator_in_order() {
        let (config, mut rng) = seeded();
        let report = Report::run(&config, &mut rng).unwrap();
        let labels: Vec<&str> =
            report.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["int1", "int2", "int3", "MC1", "MC2", "MC3"]);
        assert!(report.get("MC3").unwrap().n_iters.is_some());
        assert!(report.get("MC1").unwrap().n_iters.is_none());
    }

    #[test]
    fn every_estimate_is_near_pi() {
        let (config, mut rng) = seeded();
        let report = Report::run(&config, &mut rng).unwrap();
        for entry in report.entries() {
            assert!(entry.abs_error() < 0.1, "{}", entry);
        }
    }

    #[test]
    fn same_seed_same_report() {
        let (config, mut rng_a) = seeded();
        let mut rng_b = config.rng();
        let a = Report::run(&config, &mut rng_a).unwrap();
        let b = Report::run(&config, &mut rng_b).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn format_matches_console_layout() {
        let report = Report {
            entries: vec![
                Entry::new("int1", 3.0),
                Entry::new("MC1", 3.25),
                Entry {
                    n_iters: Some(42),
                    ..Entry::new("MC3", 0.5)
                },
            ],
        };
        let expected = indoc! {"
            estimated pi (int1) = 3.0000000000000000
            estimated pi (MC1) = 3.2500000000000000
            estimated pi (MC3) = 0.5000000000000000  (iter=42)

            real pi = 3.1415926535897931
        "};
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn adaptive_failure_is_reported_as_non_convergence() {
        let config = Config::default()
            .with_seed(1)
            .with_rel_error(0.0)
            .with_max_iters(1_000);
        let err = Report::run(&config, &mut config.rng()).unwrap_err();
        assert!(err.is_non_convergence());
    }

    #[test]
    fn bad_sample_count_is_an_error() {
        let config = Config::default().with_seed(1).with_loop_count_n_samples(0);
        let err = Report::run(&config, &mut config.rng()).unwrap_err();
        assert!(matches!(err, Error::SampleCount(_)));
        assert!(!err.is_non_convergence());
    }
}
