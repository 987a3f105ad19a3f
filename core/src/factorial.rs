use numkit_common::error::{MathError, Result};
use tracing::trace;

/// Largest input whose factorial still fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Computes `n!`.
///
/// `0!` and `1!` are both 1. Negative inputs are rejected before any
/// multiplication happens, and results past [`MAX_FACTORIAL_INPUT`] fail with
/// [`MathError::Overflow`] rather than wrapping.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(MathError::InvalidArgument { value: n });
    }

    trace!(n, "computing factorial");

    (2..=n as u128)
        .try_fold(1u128, |acc, k| acc.checked_mul(k))
        .ok_or(MathError::Overflow { n })
}
