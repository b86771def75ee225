//! Configuration command implementations

use crate::cli::{ConfigCommands, Output};
use crate::config::{CONFIG_FILE, StudykitConfig};
use anyhow::Result;
use std::path::Path;

/// Execute configuration commands
pub async fn execute(
    cmd: ConfigCommands,
    config: &StudykitConfig,
    config_path: Option<&Path>,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(output),
        ConfigCommands::Show => show(config, config_path, output),
    }
}

/// Write a default configuration file to the working directory
fn init(output: &Output) -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        output.warning(&format!("{CONFIG_FILE} already exists, leaving it untouched"));
        return Ok(());
    }

    let yaml = StudykitConfig::default().to_yaml()?;
    std::fs::write(path, yaml)?;

    output.success(&format!("Wrote default configuration to {CONFIG_FILE}"));
    Ok(())
}

/// Print the resolved configuration
fn show(config: &StudykitConfig, config_path: Option<&Path>, output: &Output) -> Result<()> {
    match config_path {
        Some(path) => output.info(&format!("Configuration from {}", path.display())),
        None if Path::new(CONFIG_FILE).exists() => {
            output.info(&format!("Configuration from {CONFIG_FILE}"));
        }
        None => output.info("Built-in defaults (no configuration file found)"),
    }

    print!("{}", config.to_yaml()?);
    Ok(())
}
