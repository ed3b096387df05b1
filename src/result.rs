use crate::estimate::{AdaptiveError, SampleCountError};
use crate::misc::QuadError;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// Any failure raised while estimating π
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A quadrature failed; a numeric fault or an exhausted budget
    Quad(QuadError),
    /// A Monte Carlo sample count was invalid
    SampleCount(SampleCountError),
    /// The adaptive estimator hit its iteration bound
    Adaptive(AdaptiveError),
}

impl Error {
    /// `true` if the adaptive estimator ran out of iterations, as opposed to
    /// an arithmetic or parameter failure
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Error::Adaptive(AdaptiveError::DidNotConverge { .. }))
    }
}

impl From<QuadError> for Error {
    fn from(err: QuadError) -> Self {
        Error::Quad(err)
    }
}

impl From<SampleCountError> for Error {
    fn from(err: SampleCountError) -> Self {
        Error::SampleCount(err)
    }
}

impl From<AdaptiveError> for Error {
    fn from(err: AdaptiveError) -> Self {
        Error::Adaptive(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Quad(err) => Some(err),
            Error::SampleCount(err) => Some(err),
            Error::Adaptive(err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Quad(err) => write!(f, "quadrature: {}", err),
            Error::SampleCount(err) => write!(f, "sampling: {}", err),
            Error::Adaptive(err) => write!(f, "adaptive estimate: {}", err),
        }
    }
}
