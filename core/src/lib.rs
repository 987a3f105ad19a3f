//! # numkit-core
//!
//! Pure integer arithmetic: [`factorial`] and trial-division primality
//! ([`is_prime`]). Nothing here performs I/O or holds state.

pub mod factorial;
pub mod prime;

pub use factorial::{MAX_FACTORIAL_INPUT, factorial};
pub use prime::{is_prime, smallest_divisor};
