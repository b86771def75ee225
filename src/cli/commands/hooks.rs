//! Git hooks command implementations
//!
//! Commands for installing, removing, and inspecting the repository's hook
//! scripts.

use crate::cli::{HooksCommands, Output};
use crate::config::StudykitConfig;
use crate::hooks::HookInstaller;
use anyhow::Result;

/// Execute hooks commands
pub async fn execute(
    cmd: HooksCommands,
    config: &StudykitConfig,
    dry_run: bool,
    output: &Output,
) -> Result<()> {
    let installer = HookInstaller::discover(&config.hooks)?;

    match cmd {
        HooksCommands::Install => install(&installer, dry_run, output),
        HooksCommands::Remove => remove(&installer, dry_run, output),
        HooksCommands::List => list(&installer, output),
    }
}

fn install(installer: &HookInstaller, dry_run: bool, output: &Output) -> Result<()> {
    output.header("🔧 Installing Git Hooks");

    if dry_run {
        for name in installer.names() {
            output.info(&format!(
                "Would install {} -> {}",
                installer.source(name).display(),
                installer.target(name).display()
            ));
        }
        return Ok(());
    }

    let installed = installer.install()?;
    for path in &installed {
        output.verbose(&format!("Installed {}", path.display()));
    }

    output.success(&format!(
        "Git hooks installed successfully! ({} hook{})",
        installed.len(),
        if installed.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}

fn remove(installer: &HookInstaller, dry_run: bool, output: &Output) -> Result<()> {
    output.header("🗑️ Removing Git Hooks");

    if dry_run {
        for status in installer.statuses().iter().filter(|s| s.installed) {
            output.info(&format!("Would remove {}", installer.target(&status.name).display()));
        }
        return Ok(());
    }

    let removed = installer.remove()?;
    if removed.is_empty() {
        output.info("No installed hooks to remove");
    } else {
        output.success(&format!("Removed hooks: {}", removed.join(", ")));
    }
    Ok(())
}

fn list(installer: &HookInstaller, output: &Output) -> Result<()> {
    output.header("📋 Configured Git Hooks");

    for status in installer.statuses() {
        let state = if status.installed { "installed" } else { "not installed" };
        output.list_item(&format!("{} ({})", status.name, state));
    }
    Ok(())
}
