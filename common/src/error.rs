//! # Numeric Errors
//!
//! Failures raised by the arithmetic in `numkit-core`.
//! Primality testing is total and never produces one of these.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The input lies outside the domain of the function.
    #[error("factorial is not defined for negative numbers (got {value})")]
    InvalidArgument { value: i64 },

    /// The exact result does not fit in the output type.
    #[error("factorial of {n} does not fit in 128 bits")]
    Overflow { n: i64 },
}

pub type Result<T> = std::result::Result<T, MathError>;
