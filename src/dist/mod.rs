//! Sampling distributions
pub mod square;

pub use self::square::{Point, Square, SquareError};
