//! Cross-crate checks for `numkit-core` against the contracts callers rely on.

mod prime;
