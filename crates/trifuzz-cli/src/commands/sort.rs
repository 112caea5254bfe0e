//! Sort command implementation.

use crate::cli::OperandArgs;
use crate::error::Result;
use crate::output::Formatter;
use trifuzz_domain::{TriFuzzyNum, TriFuzzyNumSet};

/// Order numbers ascending by rank; equal-rank numbers keep input order.
pub fn sorted(operands: Vec<TriFuzzyNum>) -> Vec<TriFuzzyNum> {
    let set = TriFuzzyNumSet::from(operands);
    set.iter().copied().collect()
}

/// Execute the sort command.
pub fn execute_sort(args: OperandArgs, formatter: &Formatter) -> Result<()> {
    let ordered = sorted(args.operands);
    println!("{}", formatter.format_numbers(&ordered)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted() {
        let input = vec![
            TriFuzzyNum::crisp(3.0),
            TriFuzzyNum::new(0.0, 2.0, 4.0),
            TriFuzzyNum::crisp(-1.0),
            TriFuzzyNum::new(1.0, 2.0, 3.0),
        ];
        let output: Vec<String> = sorted(input).iter().map(ToString::to_string).collect();
        assert_eq!(
            output,
            vec!["(-1, -1, -1)", "(0, 2, 4)", "(1, 2, 3)", "(3, 3, 3)"]
        );
    }

    #[test]
    fn test_sorted_keeps_duplicates() {
        let input = vec![TriFuzzyNum::crisp(1.0); 3];
        assert_eq!(sorted(input).len(), 3);
    }
}
