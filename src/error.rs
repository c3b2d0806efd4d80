//! Errors for integration methods

use crate::Float;

/// Validation errors returned by the solve entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidStepSize(Float),
    ToleranceMustBePositive(Float),
    NMaxMustBePositive(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepSize(v) => {
                write!(f, "step size h has invalid sign or is zero (got {})", v)
            }
            Error::ToleranceMustBePositive(v) => {
                write!(f, "tolerance must be positive (got {})", v)
            }
            Error::NMaxMustBePositive(v) => write!(f, "nmax must be positive (got {})", v),
        }
    }
}
