//! Solution document enumeration and parsing
//!
//! A solution document is one markdown file per solved problem, named
//! `<4-digit number> <title>.md`. Files that do not match the pattern are
//! skipped silently; this is also what keeps stray markdown out of the
//! catalog.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use ignore::WalkBuilder;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::classify::classify;
use crate::utils::{get_file_mtime, has_extension};

/// Filename pattern capturing the problem number and title
const FILENAME_PATTERN: &str = r"^(\d{4})\s+(.+)\.md$";

/// One parsed solution document
#[derive(Debug, Clone, Serialize)]
pub struct SolutionDoc {
    /// 4-digit problem number, kept as a string to preserve leading zeros
    pub number: String,
    /// Title from the filename
    pub title: String,
    /// Category label inferred from the content
    pub category: String,
    /// Rendered link target
    pub path: String,
    /// Last-modified date, `YYYY-MM-DD`
    pub date: String,
}

/// Parser for solution documents
pub struct DocumentParser {
    pattern: Regex,
    link_prefix: String,
}

impl DocumentParser {
    pub fn new(link_prefix: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(FILENAME_PATTERN).context("Invalid filename pattern")?,
            link_prefix: link_prefix.trim_end_matches('/').to_string(),
        })
    }

    /// Parse a single file into a [`SolutionDoc`].
    ///
    /// Returns `Ok(None)` when the filename does not match the pattern;
    /// unreadable content or metadata is an error.
    pub fn parse(&self, path: &Path) -> Result<Option<SolutionDoc>> {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Ok(None);
        };
        let Some(caps) = self.pattern.captures(name) else {
            return Ok(None);
        };

        let number = caps[1].to_string();
        let title = caps[2].to_string();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read solution document {}", path.display()))?;
        let category = classify(&content).to_string();

        let mtime = get_file_mtime(path)
            .with_context(|| format!("Failed to stat solution document {}", path.display()))?;
        let date: DateTime<Local> = mtime.into();

        Ok(Some(SolutionDoc {
            number,
            title,
            category,
            path: format!("{}/{}", self.link_prefix, name),
            date: date.format("%Y-%m-%d").to_string(),
        }))
    }
}

/// List the markdown files of a catalog directory, excluding the report
/// document itself, sorted by filename
pub fn enumerate(dir: &Path, readme: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(dir).max_depth(Some(1)).build();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if !has_extension(&path, "md") {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(readme) {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_matching_filename() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("0001 Two Sum.md");
        std::fs::write(&path, "Array problem").unwrap();

        let parser = DocumentParser::new(".").unwrap();
        let doc = parser.parse(&path).unwrap().unwrap();
        assert_eq!(doc.number, "0001");
        assert_eq!(doc.title, "Two Sum");
        assert_eq!(doc.category, "数组");
        assert_eq!(doc.path, "./0001 Two Sum.md");
        // mtime of a freshly written file is today
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(doc.date, today);
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("0020 Valid Parentheses.md");
        std::fs::write(&path, "Stack").unwrap();

        let parser = DocumentParser::new("/notes").unwrap();
        let doc = parser.parse(&path).unwrap().unwrap();
        assert_eq!(doc.number, "0020");
        assert_eq!(doc.path, "/notes/0020 Valid Parentheses.md");
    }

    #[test]
    fn test_non_matching_filenames_are_skipped() {
        let temp = TempDir::new().unwrap();
        let parser = DocumentParser::new(".").unwrap();

        for name in ["notes.md", "1 Two Sum.md", "00001 Five Digits.md", "0001.md"] {
            let path = temp.path().join(name);
            std::fs::write(&path, "Array").unwrap();
            assert!(
                parser.parse(&path).unwrap().is_none(),
                "{name} should not parse"
            );
        }
    }

    #[test]
    fn test_enumerate_excludes_readme_and_sorts() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("0002 Add Two Numbers.md"), "x").unwrap();
        std::fs::write(temp.path().join("0001 Two Sum.md"), "x").unwrap();
        std::fs::write(temp.path().join("README.md"), "x").unwrap();
        std::fs::write(temp.path().join("scratch.txt"), "x").unwrap();
        std::fs::create_dir(temp.path().join("drafts")).unwrap();
        std::fs::write(temp.path().join("drafts").join("0003 Nested.md"), "x").unwrap();

        let files = enumerate(temp.path(), "README.md").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        // Sorted, no README, no non-markdown, no nested files
        assert_eq!(names, vec!["0001 Two Sum.md", "0002 Add Two Numbers.md"]);
    }
}
