//! Catalog command implementations
//!
//! Commands for regenerating and inspecting the problem catalog.

use crate::catalog::{CatalogBuilder, report};
use crate::cli::{CatalogCommands, Output, resolve_path};
use crate::config::StudykitConfig;
use anyhow::Result;
use std::path::Path;

/// Execute catalog commands
pub async fn execute(
    cmd: CatalogCommands,
    config: &StudykitConfig,
    dry_run: bool,
    format: &str,
    output: &Output,
) -> Result<()> {
    match cmd {
        CatalogCommands::Update { dir, readme } => {
            let dir = resolve_path(dir.as_deref(), &config.catalog.dir);
            let readme = readme.as_deref().unwrap_or(&config.catalog.readme);
            update(&dir, readme, config, dry_run, format, output)
        }
        CatalogCommands::List { dir } => {
            let dir = resolve_path(dir.as_deref(), &config.catalog.dir);
            list(&dir, config, output)
        }
    }
}

/// Regenerate the README sections from the documents on disk
fn update(
    dir: &Path,
    readme: &str,
    config: &StudykitConfig,
    dry_run: bool,
    format: &str,
    output: &Output,
) -> Result<()> {
    let builder = CatalogBuilder::new(dir, readme, &config.catalog.link_prefix)?;

    output.verbose(&format!("Scanning {}", dir.display()));
    let summary = builder.update(dry_run)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if dry_run {
        if summary.changed {
            output.info(&format!(
                "Would update {} problems in {}",
                summary.problems, summary.readme
            ));
        } else {
            output.info(&format!("{} is already up to date", summary.readme));
        }
        return Ok(());
    }

    output.success(&format!(
        "Updated {} problems in {}",
        summary.problems, summary.readme
    ));
    output.verbose(&format!(
        "{} categories across {} check-in days",
        summary.categories, summary.days
    ));
    Ok(())
}

/// Print the parsed catalog grouped by category
fn list(dir: &Path, config: &StudykitConfig, output: &Output) -> Result<()> {
    let builder = CatalogBuilder::new(dir, &config.catalog.readme, &config.catalog.link_prefix)?;
    let docs = builder.collect()?;

    for (category, mut group) in report::group_by_category(&docs) {
        output.category(category);
        group.sort_by(|a, b| a.number.cmp(&b.number));
        for doc in group {
            output.list_item(&format!("{} {} ({})", doc.number, doc.title, doc.date));
        }
    }

    output.blank_line();
    output.count("Solution documents", docs.len());
    Ok(())
}
