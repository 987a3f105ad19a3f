use numkit_core::{is_prime, smallest_divisor};
use tracing::debug;

use crate::terminal::{format, print};

pub fn prime(numbers: &[i64]) -> anyhow::Result<()> {
    for &n in numbers {
        if let Some(divisor) = smallest_divisor(n) {
            debug!("{n} is divisible by {divisor}");
        }
        print::print(&format::prime_line(n, is_prime(n)));
    }
    Ok(())
}
