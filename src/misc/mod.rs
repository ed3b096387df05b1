//! Numerical utilities
mod func;
mod quad;
mod semi_infinite;

pub use func::*;
pub use quad::*;
pub use semi_infinite::*;
