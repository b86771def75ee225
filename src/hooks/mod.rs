//! Git hook installation
//!
//! Installs the repository's own hook scripts into the git hook directory.
//! Sources live in a configured directory inside the work tree; targets are
//! written through [`GitRepo::install_hook`] and are safe to reinstall at
//! any time.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::HooksConfig;
use crate::git::GitRepo;

/// Installation state of a single configured hook
pub struct HookStatus {
    pub name: String,
    pub installed: bool,
}

/// Installer for the configured hook scripts
pub struct HookInstaller {
    repo: GitRepo,
    source_dir: PathBuf,
    names: Vec<String>,
}

impl HookInstaller {
    /// Build an installer for a repository, resolving the hook source
    /// directory against the work tree
    pub fn new(repo: GitRepo, config: &HooksConfig) -> Result<Self> {
        let workdir = repo
            .workdir()
            .context("Repository has no working directory")?;
        let source_dir = workdir.join(&config.source_dir);

        Ok(Self {
            repo,
            source_dir,
            names: config.names.clone(),
        })
    }

    /// Discover the enclosing repository and build an installer for it
    pub fn discover(config: &HooksConfig) -> Result<Self> {
        Self::new(GitRepo::discover()?, config)
    }

    /// Source path for a configured hook
    pub fn source(&self, name: &str) -> PathBuf {
        self.source_dir.join(name)
    }

    /// Target path a configured hook installs to
    pub fn target(&self, name: &str) -> PathBuf {
        self.repo.hooks_dir().join(name)
    }

    /// Configured hook names
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Install every configured hook, returning the written paths.
    /// A missing source file fails the whole run before anything else
    /// happens to that hook.
    pub fn install(&self) -> Result<Vec<PathBuf>> {
        let mut installed = Vec::new();

        for name in &self.names {
            let source = self.source(name);
            let content = std::fs::read_to_string(&source)
                .with_context(|| format!("Failed to read hook source {}", source.display()))?;
            installed.push(self.repo.install_hook(name, &content)?);
        }

        Ok(installed)
    }

    /// Remove installed hooks, returning the names that were present
    pub fn remove(&self) -> Result<Vec<String>> {
        let mut removed = Vec::new();

        for name in &self.names {
            if self.repo.remove_hook(name)? {
                removed.push(name.clone());
            }
        }

        Ok(removed)
    }

    /// Installation state of every configured hook
    pub fn statuses(&self) -> Vec<HookStatus> {
        self.names
            .iter()
            .map(|name| HookStatus {
                name: name.clone(),
                installed: self.repo.hook_exists(name),
            })
            .collect()
    }
}
