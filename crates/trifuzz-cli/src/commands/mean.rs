//! Mean command implementation.

use crate::cli::MeanArgs;
use crate::error::Result;
use crate::output::Formatter;
use trifuzz_domain::{TriFuzzyNum, TriFuzzyNumSet};

/// Arithmetic mean of `operands`.
pub fn mean_of(operands: Vec<TriFuzzyNum>) -> Result<TriFuzzyNum> {
    let set = TriFuzzyNumSet::from(operands);
    Ok(set.arithmetic_mean()?)
}

/// Execute the mean command.
pub fn execute_mean(args: MeanArgs, formatter: &Formatter) -> Result<()> {
    let mean = mean_of(args.operands)?;
    println!("{}", formatter.format_number(&mean)?);
    Ok(())
}
