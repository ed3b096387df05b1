//! Trait definitions
use rand::Rng;

/// A distribution that can be sampled
pub trait Sampleable<X> {
    /// Single draw from the distribution
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws of the distribution
    ///
    /// # Example
    ///
    /// ```
    /// use piest::dist::{Point, Square};
    /// use piest::traits::*;
    ///
    /// let sq = Square::unit();
    /// let mut rng = rand::thread_rng();
    /// let xs: Vec<Point> = sq.sample(22, &mut rng);
    ///
    /// assert_eq!(xs.len(), 22);
    /// ```
    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(&mut rng)).collect()
    }

    /// Create a never-ending iterator of samples
    ///
    /// # Example
    ///
    /// Estimate the mean distance from the center of the unit square
    ///
    /// ```
    /// use piest::dist::{Point, Square};
    /// use piest::traits::*;
    ///
    /// let mut rng = rand::thread_rng();
    /// let sq = Square::symmetric();
    ///
    /// let n = 100_000_usize;
    /// let mean_x = sq
    ///     .sample_stream(&mut rng)
    ///     .take(n)
    ///     .map(|p: Point| p.x)
    ///     .sum::<f64>() / n as f64;
    ///
    /// assert!(mean_x.abs() < 1E-2);
    /// ```
    fn sample_stream<'r, R: Rng>(
        &'r self,
        mut rng: &'r mut R,
    ) -> Box<dyn Iterator<Item = X> + 'r> {
        Box::new(std::iter::repeat_with(move || self.draw(&mut rng)))
    }
}

/// The outcome of an estimator
pub trait PiEstimate {
    /// The estimated value of π
    fn pi_est(&self) -> f64;

    /// Absolute deviation from π
    fn abs_error(&self) -> f64 {
        (self.pi_est() - crate::consts::PI).abs()
    }

    /// Relative deviation from π, |est/π - 1|
    fn rel_error(&self) -> f64 {
        crate::misc::relative_error(self.pi_est(), crate::consts::PI)
    }
}

impl PiEstimate for f64 {
    fn pi_est(&self) -> f64 {
        *self
    }
}
