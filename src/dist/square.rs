//! Uniform distribution over the square [lo, hi) × [lo, hi)
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::traits::Sampleable;
use rand::Rng;
use std::fmt;

/// A point in the plane
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance from the origin
    ///
    /// # Example
    ///
    /// ```
    /// # use piest::dist::Point;
    /// assert_eq!(Point::new(3.0, 4.0).norm(), 5.0);
    /// ```
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Uniform distribution over a square with both coordinates in [lo, hi)
///
/// # Example
///
/// Points drawn from the symmetric square land in the inscribed unit circle
/// with probability π/4.
///
/// ```
/// use piest::dist::{Point, Square};
/// use piest::traits::*;
///
/// let sq = Square::symmetric();
/// let mut rng = rand::thread_rng();
///
/// let n = 100_000;
/// let inside = sq
///     .sample_stream(&mut rng)
///     .take(n)
///     .filter(|p: &Point| p.norm() < 1.0)
///     .count();
///
/// let pi_est = 4.0 * inside as f64 / n as f64;
/// assert!((pi_est - std::f64::consts::PI).abs() < 0.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Square {
    lo: f64,
    hi: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum SquareError {
    /// lo >= hi
    InvalidInterval { lo: f64, hi: f64 },
    /// lo was infinite or NaN
    LoNotFinite { lo: f64 },
    /// hi was infinite or NaN
    HiNotFinite { hi: f64 },
}

impl Square {
    /// Create a new square with coordinates in [lo, hi)
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Result<Self, SquareError> {
        if !lo.is_finite() {
            Err(SquareError::LoNotFinite { lo })
        } else if !hi.is_finite() {
            Err(SquareError::HiNotFinite { hi })
        } else if lo >= hi {
            Err(SquareError::InvalidInterval { lo, hi })
        } else {
            Ok(Square::new_unchecked(lo, hi))
        }
    }

    /// Creates a new Square without checking whether the bounds are valid.
    #[inline]
    pub fn new_unchecked(lo: f64, hi: f64) -> Self {
        Square { lo, hi }
    }

    /// The square [-1, 1)<sup>2</sup>, which circumscribes the unit circle
    #[inline]
    pub fn symmetric() -> Self {
        Square::new_unchecked(-1.0, 1.0)
    }

    /// The unit square [0, 1)<sup>2</sup>, which holds a quarter of the
    /// unit circle
    #[inline]
    pub fn unit() -> Self {
        Square::new_unchecked(0.0, 1.0)
    }

    /// Get the lower bound
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Get the upper bound
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Area of the square
    ///
    /// # Example
    ///
    /// ```
    /// # use piest::dist::Square;
    /// assert_eq!(Square::symmetric().area(), 4.0);
    /// ```
    #[inline]
    pub fn area(&self) -> f64 {
        let side = self.hi - self.lo;
        side * side
    }

    /// Draw `n` points as two independent coordinate arrays
    ///
    /// All `n` x-coordinates are drawn before any y-coordinate.
    pub fn sample_coords<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> (Vec<f64>, Vec<f64>) {
        let u = rand_distr::Uniform::new(self.lo, self.hi);
        let xs: Vec<f64> = (0..n).map(|_| rng.sample(u)).collect();
        let ys: Vec<f64> = (0..n).map(|_| rng.sample(u)).collect();
        (xs, ys)
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::symmetric()
    }
}

impl Sampleable<Point> for Square {
    fn draw<R: Rng>(&self, rng: &mut R) -> Point {
        let u = rand_distr::Uniform::new(self.lo, self.hi);
        Point {
            x: rng.sample(u),
            y: rng.sample(u),
        }
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Point> {
        let u = rand_distr::Uniform::new(self.lo, self.hi);
        (0..n)
            .map(|_| Point {
                x: rng.sample(u),
                y: rng.sample(u),
            })
            .collect()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U([{}, {})²)", self.lo, self.hi)
    }
}

impl std::error::Error for SquareError {}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { lo, hi } => {
                write!(f, "invalid interval: (lo, hi) = ({}, {})", lo, hi)
            }
            Self::LoNotFinite { lo } => write!(f, "non-finite lo: {}", lo),
            Self::HiNotFinite { hi } => write!(f, "non-finite hi: {}", hi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn new() {
        let sq = Square::new(-2.0, 3.0).unwrap();
        assert_eq!(sq.lo(), -2.0);
        assert_eq!(sq.hi(), 3.0);
        assert_eq!(sq.area(), 25.0);
    }

    #[test]
    fn new_rejects_lo_equal_to_hi() {
        assert_eq!(
            Square::new(1.0, 1.0),
            Err(SquareError::InvalidInterval { lo: 1.0, hi: 1.0 })
        );
    }

    #[test]
    fn new_rejects_non_finite_bounds() {
        assert!(Square::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(Square::new(f64::NAN, 1.0).is_err());
        assert!(Square::new(0.0, f64::INFINITY).is_err());
        assert!(Square::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn draws_stay_in_half_open_square() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
        for sq in [Square::symmetric(), Square::unit()] {
            let pts: Vec<Point> = sq.sample(10_000, &mut rng);
            assert!(pts.iter().all(|p| {
                sq.lo() <= p.x && p.x < sq.hi() && sq.lo() <= p.y && p.y < sq.hi()
            }));
        }
    }

    #[test]
    fn sample_coords_returns_two_arrays_of_n() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
        let (xs, ys) = Square::symmetric().sample_coords(1_000, &mut rng);
        assert_eq!(xs.len(), 1_000);
        assert_eq!(ys.len(), 1_000);
        assert_ne!(xs, ys);
    }

    #[test]
    fn sample_coords_draws_x_before_y() {
        let sq = Square::unit();
        let (xs, ys) =
            sq.sample_coords(3, &mut Xoshiro256Plus::seed_from_u64(7));

        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        let u = rand_distr::Uniform::new(0.0, 1.0);
        let stream: Vec<f64> = (0..6).map(|_| rng.sample(u)).collect();

        assert_eq!(xs, stream[..3].to_vec());
        assert_eq!(ys, stream[3..].to_vec());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Square::symmetric()), "U([-1, 1)²)");
    }
}
