//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trifuzz_domain::TriFuzzyNum;

/// Trifuzz CLI - Arithmetic, ranking and averaging of triangular fuzzy numbers.
///
/// Numbers are written as `(l, m, u)` or `l,m,u`, in any order. Wrap a
/// number whose first value is negative in parentheses.
#[derive(Debug, Parser)]
#[command(name = "trifuzz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TRIFUZZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Decimal places for printed bounds
    #[arg(short, long, global = true)]
    pub precision: Option<usize>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add numbers left to right
    Add(OperandArgs),

    /// Subtract numbers left to right
    Sub(OperandArgs),

    /// Multiply numbers left to right
    Mul(OperandArgs),

    /// Compare two numbers by rank
    Compare(CompareArgs),

    /// Print numbers in ascending rank order
    Sort(OperandArgs),

    /// Arithmetic mean of the given numbers
    Mean(MeanArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for commands that take one or more numbers.
#[derive(Debug, Parser)]
pub struct OperandArgs {
    /// Numbers, e.g. "(1, 2, 3)" or 1,2,3
    #[arg(required = true)]
    pub operands: Vec<TriFuzzyNum>,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Left-hand number
    pub left: TriFuzzyNum,

    /// Right-hand number
    pub right: TriFuzzyNum,
}

/// Arguments for the mean command.
#[derive(Debug, Parser)]
pub struct MeanArgs {
    /// Numbers to average; an empty list is an error
    pub operands: Vec<TriFuzzyNum>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
