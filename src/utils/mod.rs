//! Utility functions for studykit

use anyhow::Result;
use std::path::Path;

/// Check if a file has a specific extension
pub fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Get file modification time
pub fn get_file_mtime<P: AsRef<Path>>(path: P) -> Result<std::time::SystemTime> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.modified()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension("0001 Two Sum.md", "md"));
        assert!(has_extension("NOTES.MD", "md"));
        assert!(!has_extension("notes.txt", "md"));
        assert!(!has_extension("no-extension", "md"));
    }

    #[test]
    fn test_get_file_mtime_missing_file() {
        assert!(get_file_mtime("does-not-exist.md").is_err());
    }
}
