//! Git integration layer for studykit
//!
//! A thin wrapper over git2 handling repository discovery and hook file
//! management inside the repository's git directory.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Handle to the repository studykit operates on
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a Git repository at a known path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open Git repository")?;

        Ok(Self { repo })
    }

    /// Discover and open a Git repository from the current directory
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".").context("No Git repository found")?;

        Ok(Self { repo })
    }

    /// Get working directory path (absent for bare repositories)
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Path of the hook directory inside the git dir
    pub fn hooks_dir(&self) -> PathBuf {
        self.repo.path().join("hooks")
    }

    /// Install a git hook: write its content and mark it executable for the
    /// owner only. Overwrites any existing hook of the same name.
    pub fn install_hook(&self, hook_name: &str, hook_content: &str) -> Result<PathBuf> {
        let hooks_dir = self.hooks_dir();
        let hook_path = hooks_dir.join(hook_name);

        // Create hooks directory if it doesn't exist
        std::fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;

        // Write hook content
        std::fs::write(&hook_path, hook_content).context("Failed to write hook file")?;

        // Hooks are private to the repository owner: rwx for the owner,
        // nothing for group or others.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&hook_path)
                .context("Failed to get hook file metadata")?
                .permissions();
            perms.set_mode(0o700);
            std::fs::set_permissions(&hook_path, perms)
                .context("Failed to set hook file permissions")?;
        }

        Ok(hook_path)
    }

    /// Remove a git hook, reporting whether it existed
    pub fn remove_hook(&self, hook_name: &str) -> Result<bool> {
        let hook_path = self.hooks_dir().join(hook_name);

        if hook_path.exists() {
            std::fs::remove_file(&hook_path).context("Failed to remove hook file")?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Check if a hook exists
    pub fn hook_exists(&self, hook_name: &str) -> bool {
        self.hooks_dir().join(hook_name).exists()
    }
}
