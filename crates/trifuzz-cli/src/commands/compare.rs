//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::Formatter;
use tracing::debug;

/// Execute the compare command.
pub fn execute_compare(args: CompareArgs, formatter: &Formatter) -> Result<()> {
    let ordering = args.left.cmp(&args.right);
    debug!(left = %args.left, right = %args.right, ?ordering, "compared numbers");
    println!(
        "{}",
        formatter.format_ordering(&args.left, &args.right, ordering)?
    );
    Ok(())
}
