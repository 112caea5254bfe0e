//! Trifuzz CLI - Command-line front end for triangular fuzzy numbers.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use trifuzz_cli::commands::{self, Operation};
use trifuzz_cli::{Cli, Command, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> trifuzz_cli::Result<()> {
    let (config, config_path) = Config::resolve(cli.config)?;
    debug!(path = ?config_path, ?config, "loaded configuration");

    // Determine output settings
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let precision = cli.precision.or(config.settings.precision);

    let formatter = Formatter::new(format, color_enabled, precision);

    match cli.command {
        Command::Add(args) => commands::execute_arithmetic(Operation::Add, args, &formatter)?,
        Command::Sub(args) => commands::execute_arithmetic(Operation::Sub, args, &formatter)?,
        Command::Mul(args) => commands::execute_arithmetic(Operation::Mul, args, &formatter)?,
        Command::Compare(args) => commands::execute_compare(args, &formatter)?,
        Command::Sort(args) => commands::execute_sort(args, &formatter)?,
        Command::Mean(args) => commands::execute_mean(args, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, config_path.as_deref(), &formatter)?
        }
    }

    Ok(())
}
