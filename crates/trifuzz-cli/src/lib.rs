//! Trifuzz CLI library.
//!
//! This library provides the command-line front end for triangular fuzzy
//! numbers: argument parsing, configuration management, command execution,
//! and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
