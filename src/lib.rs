//! # Studykit - Maintenance Toolkit for a Study-Notes Repository
//!
//! Studykit bundles the housekeeping chores of a personal study repository
//! into one small CLI:
//!
//! - **catalog**: scan solved-problem notes and regenerate the README's
//!   completed-problems list and daily check-in table in place
//! - **hooks**: install the repository's git hook scripts
//! - **watermark**: extract the least-significant-bit stream hidden in an
//!   RGB image
//!
//! ## Quick Start
//!
//! ```bash
//! # Install studykit
//! cargo install studykit
//!
//! # Rebuild the problem catalog README
//! studykit catalog update
//!
//! # Install git hooks
//! studykit hooks install
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod git;
pub mod hooks;
pub mod utils;
pub mod watermark;

pub use cli::{Cli, Output};
pub use config::StudykitConfig;

/// Result type alias for studykit operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
