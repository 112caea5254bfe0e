//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let location = path.map_or_else(|| "none".to_string(), |p| p.display().to_string());
            println!("{}", formatter.info(&format!("Config file: {}", location)));
            println!("{}", formatter.format_settings(&config.settings)?);
        }
        ConfigAction::Init { force } => {
            let path = path.ok_or_else(|| {
                CliError::Config("No default config location; pass --config".to_string())
            })?;
            init_config(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }
    Ok(())
}

/// Write a default configuration file, refusing to overwrite unless `force`.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )));
    }
    Config::default().save_to(path)
}
