//! Add, sub and mul command implementations.

use crate::cli::OperandArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tracing::debug;
use trifuzz_domain::TriFuzzyNum;

/// Binary operation folded over the operand list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
}

impl Operation {
    /// Apply the operation to two numbers.
    pub fn apply(self, left: TriFuzzyNum, right: TriFuzzyNum) -> TriFuzzyNum {
        match self {
            Operation::Add => left + right,
            Operation::Sub => left - right,
            Operation::Mul => left * right,
        }
    }
}

/// Fold `operands` left to right with `op`.
pub fn fold_operands(op: Operation, operands: &[TriFuzzyNum]) -> Result<TriFuzzyNum> {
    let (first, rest) = operands
        .split_first()
        .ok_or_else(|| CliError::InvalidInput("At least one number is required".to_string()))?;

    let result = rest.iter().fold(*first, |acc, n| op.apply(acc, *n));
    debug!(?op, operands = operands.len(), %result, "evaluated expression");
    Ok(result)
}

/// Execute an arithmetic command.
pub fn execute_arithmetic(op: Operation, args: OperandArgs, formatter: &Formatter) -> Result<()> {
    let result = fold_operands(op, &args.operands)?;
    println!("{}", formatter.format_number(&result)?);
    Ok(())
}
