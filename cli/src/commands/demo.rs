use numkit_core::{factorial, is_prime};

use crate::terminal::{format, print};

pub fn demo() -> anyhow::Result<()> {
    print::print(&format::factorial_line(5, factorial(5)?));
    print::print(&format::prime_line(17, is_prime(17)));
    Ok(())
}
