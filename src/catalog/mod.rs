//! Problem catalog management
//!
//! Rebuilds the study repository's README from the solution documents on
//! disk: enumerate markdown files, parse and classify each, render the
//! completed-problems list and daily check-in table, and splice both into
//! the README between its fixed markers. The whole pipeline re-runs from
//! scratch on every invocation; there is no incremental mode.

pub mod classify;
pub mod document;
pub mod report;
pub mod splice;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use document::{DocumentParser, SolutionDoc};

/// Result of a catalog update
#[derive(Debug, Serialize)]
pub struct UpdateSummary {
    /// Parsed solution documents
    pub problems: usize,
    /// Distinct categories
    pub categories: usize,
    /// Distinct check-in dates
    pub days: usize,
    /// Whether the rendered README differs from the one on disk
    pub changed: bool,
    /// Report document path
    pub readme: String,
}

/// Catalog pipeline over one directory of solution documents
pub struct CatalogBuilder {
    dir: PathBuf,
    readme: String,
    parser: DocumentParser,
}

impl CatalogBuilder {
    pub fn new(dir: &Path, readme: &str, link_prefix: &str) -> Result<Self> {
        Ok(Self {
            dir: dir.to_path_buf(),
            readme: readme.to_string(),
            parser: DocumentParser::new(link_prefix)?,
        })
    }

    /// Path of the report document
    pub fn readme_path(&self) -> PathBuf {
        self.dir.join(&self.readme)
    }

    /// Enumerate and parse every solution document in the catalog
    /// directory. Files whose names do not match the pattern are skipped
    /// without error.
    pub fn collect(&self) -> Result<Vec<SolutionDoc>> {
        let files = document::enumerate(&self.dir, &self.readme)?;

        let mut docs = Vec::with_capacity(files.len());
        for file in &files {
            if let Some(doc) = self.parser.parse(file)? {
                docs.push(doc);
            }
        }

        Ok(docs)
    }

    /// Regenerate the README's completed and check-in sections.
    ///
    /// The new document is assembled in memory first; with `dry_run` the
    /// write is skipped entirely, otherwise it is atomic.
    pub fn update(&self, dry_run: bool) -> Result<UpdateSummary> {
        let docs = self.collect()?;

        let completed = report::render_completed(&docs);
        let checkin = report::render_checkin(&docs);

        let readme_path = self.readme_path();
        let original = std::fs::read_to_string(&readme_path)
            .with_context(|| format!("Failed to read report document {}", readme_path.display()))?;
        let updated = splice::splice(&original, &completed, &checkin)?;

        let changed = updated != original;
        if !dry_run && changed {
            splice::write_atomic(&readme_path, &updated)?;
        }

        Ok(UpdateSummary {
            problems: docs.len(),
            categories: report::group_by_category(&docs).len(),
            days: docs
                .iter()
                .map(|d| d.date.as_str())
                .collect::<std::collections::HashSet<_>>()
                .len(),
            changed,
            readme: readme_path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const README_TEMPLATE: &str = "# 刷题笔记\n\n## 已完成题目\n\n## 每日打卡\n> 占位\n\n\
        | 日期 | 题目数 | 重点题目 | 备注 |\n|------|--------|----------|------|\n";

    fn builder_for(temp: &TempDir) -> CatalogBuilder {
        CatalogBuilder::new(temp.path(), "README.md", ".").unwrap()
    }

    #[test]
    fn test_update_renders_example_catalog() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("0001 Two Sum.md"), "Array notes").unwrap();
        std::fs::write(temp.path().join("0002 Add Two Numbers.md"), "Linked List notes").unwrap();
        std::fs::write(temp.path().join("README.md"), README_TEMPLATE).unwrap();

        let summary = builder_for(&temp).update(false).unwrap();
        assert_eq!(summary.problems, 2);
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.days, 1);
        assert!(summary.changed);

        let readme = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# 刷题笔记\n\n## 已完成题目"));
        assert!(readme.contains("### 数组\n- [x] [0001 Two Sum](./0001 Two Sum.md)"));
        assert!(readme.contains("### 链表\n- [x] [0002 Add Two Numbers](./0002 Add Two Numbers.md)"));

        // Both files were just written, so they share today's check-in row
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert!(readme.contains(&format!("| {today} | 2 | #0001, #0002 | 数组 |")));
    }

    #[test]
    fn test_update_is_round_trip_stable() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("0001 Two Sum.md"), "Array").unwrap();
        std::fs::write(temp.path().join("README.md"), README_TEMPLATE).unwrap();

        let builder = builder_for(&temp);
        builder.update(false).unwrap();
        let after_first = std::fs::read_to_string(temp.path().join("README.md")).unwrap();

        let summary = builder.update(false).unwrap();
        assert!(!summary.changed);
        let after_second = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_non_matching_files_appear_nowhere() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("0001 Two Sum.md"), "Array").unwrap();
        std::fs::write(temp.path().join("scratchpad.md"), "Array scratch").unwrap();
        std::fs::write(temp.path().join("README.md"), README_TEMPLATE).unwrap();

        let summary = builder_for(&temp).update(false).unwrap();
        assert_eq!(summary.problems, 1);

        let readme = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(!readme.contains("scratchpad"));
    }

    #[test]
    fn test_dry_run_leaves_readme_untouched() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("0001 Two Sum.md"), "Array").unwrap();
        std::fs::write(temp.path().join("README.md"), README_TEMPLATE).unwrap();

        let summary = builder_for(&temp).update(true).unwrap();
        assert!(summary.changed);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("README.md")).unwrap(),
            README_TEMPLATE
        );
    }

    #[test]
    fn test_missing_marker_fails_before_write() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("0001 Two Sum.md"), "Array").unwrap();
        std::fs::write(temp.path().join("README.md"), "# 没有标记的文档\n").unwrap();

        assert!(builder_for(&temp).update(false).is_err());
        // Failed validation must not have modified the document
        assert_eq!(
            std::fs::read_to_string(temp.path().join("README.md")).unwrap(),
            "# 没有标记的文档\n"
        );
    }
}
