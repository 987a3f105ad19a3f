use tracing::trace;

/// Returns the smallest divisor of `n` in `2..=floor(sqrt(n))`.
///
/// `None` means `n` is below 2 or prime. Candidates are tried in ascending
/// order and the search stops at the first hit.
pub fn smallest_divisor(n: i64) -> Option<i64> {
    if n < 2 {
        return None;
    }

    // i <= n / i is i * i <= n without the overflow near i64::MAX
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            trace!(n, divisor = i, "found divisor");
            return Some(i);
        }
        i += 1;
    }

    None
}

/// Trial-division primality test. Total over `i64`: anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    n >= 2 && smallest_divisor(n).is_none()
}
