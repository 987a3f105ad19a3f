use tracing::debug;

use crate::terminal::{format, print};

pub fn factorial(numbers: &[i64]) -> anyhow::Result<()> {
    for &n in numbers {
        let value = numkit_core::factorial(n)?;
        debug!("{n}! has {} digits", value.to_string().len());
        print::print(&format::factorial_line(n, value));
    }
    Ok(())
}
