//! Command-line interface for studykit
//!
//! This module provides the main CLI structure and command handling for
//! studykit. It uses clap for argument parsing and keeps every command a
//! thin shell over the library modules.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::StudykitConfig;

mod commands;
mod output;

pub use output::Output;

/// Studykit - Maintenance toolkit for a study-notes repository
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show what would be done without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Extract the least-significant-bit watermark stream from an image
    Watermark {
        /// Path to the image to read
        image: PathBuf,
    },
    /// Git hooks management
    #[command(subcommand)]
    Hooks(HooksCommands),
    /// Problem catalog management
    #[command(subcommand)]
    Catalog(CatalogCommands),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Git hooks subcommands
#[derive(Subcommand)]
pub enum HooksCommands {
    /// Install configured hook scripts into the repository
    Install,
    /// Remove installed hook scripts
    Remove,
    /// List configured hooks and their installation state
    List,
}

/// Problem catalog subcommands
#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Regenerate the README's completed list and check-in table
    Update {
        /// Directory holding the solution documents
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// README filename inside the catalog directory
        #[arg(long)]
        readme: Option<String>,
    },
    /// Print the parsed catalog without touching the README
    List {
        /// Directory holding the solution documents
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default studykit.yml to the current directory
    Init,
    /// Show the resolved configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        let config = StudykitConfig::load(self.config.as_deref())?;

        match self.command {
            Some(Commands::Watermark { image }) => {
                commands::watermark::execute(&image, &output).await
            }
            Some(Commands::Hooks(cmd)) => {
                commands::hooks::execute(cmd, &config, self.dry_run, &output).await
            }
            Some(Commands::Catalog(cmd)) => {
                commands::catalog::execute(cmd, &config, self.dry_run, &self.format, &output).await
            }
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, &config, self.config.as_deref(), &output).await
            }
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

/// Resolve an optional CLI path override against a configured default.
pub(crate) fn resolve_path(override_path: Option<&Path>, configured: &str) -> PathBuf {
    override_path.map_or_else(|| PathBuf::from(configured), Path::to_path_buf)
}
