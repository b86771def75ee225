//! Marker-based README splicing
//!
//! The README is edited by replacing the region between two exact markers
//! with freshly rendered sections. Both markers are validated up front and
//! the new document is assembled fully in memory, then written through a
//! temp file and rename so a failed run can never leave a truncated README.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Start of the replaced region
pub const COMPLETED_MARKER: &str = "## 已完成题目";
/// Heading of the check-in section; the replaced region ends with the
/// generated block that follows it
pub const CHECKIN_MARKER: &str = "## 每日打卡";

/// Splice rendered sections into an existing report document.
///
/// Everything before the completed marker and everything after the existing
/// check-in block (its marker line plus the blockquote and table lines
/// below it) is preserved byte-for-byte, which makes repeated runs with
/// unchanged inputs produce identical documents.
pub fn splice(document: &str, completed: &str, checkin: &str) -> Result<String> {
    let start = document.find(COMPLETED_MARKER).with_context(|| {
        format!("Report document is missing the completed-section marker `{COMPLETED_MARKER}`")
    })?;

    let Some(rel) = document[start..].find(CHECKIN_MARKER) else {
        if document.contains(CHECKIN_MARKER) {
            bail!(
                "Check-in marker `{CHECKIN_MARKER}` appears before the completed-section marker `{COMPLETED_MARKER}`"
            );
        }
        bail!("Report document is missing the check-in marker `{CHECKIN_MARKER}`");
    };
    let tail_start = checkin_block_end(document, start + rel);

    let head = &document[..start];
    let tail = &document[tail_start..];

    let mut out =
        String::with_capacity(head.len() + completed.len() + checkin.len() + tail.len() + 2);
    out.push_str(head);
    out.push_str(completed);
    out.push('\n');
    out.push_str(checkin);
    out.push('\n');
    out.push_str(tail);
    Ok(out)
}

/// Byte offset just past the existing check-in block.
///
/// The block is the marker line followed by its blockquote and table lines.
/// Blank lines inside the block are spanned, but the block ends at the last
/// `>` or `|` line, so blank lines after the table stay with the preserved
/// tail.
fn checkin_block_end(document: &str, marker_at: usize) -> usize {
    let after_marker_line = match document[marker_at..].find('\n') {
        Some(i) => marker_at + i + 1,
        None => return document.len(),
    };

    let mut end = after_marker_line;
    let mut cursor = after_marker_line;

    for line in document[after_marker_line..].split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        cursor += line.len();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('>') || trimmed.starts_with('|') {
            end = cursor;
        } else {
            break;
        }
    }

    end
}

/// Write the document all-or-nothing: into a temp file in the target's
/// directory, then rename over the target.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
        .context("Failed to create temporary report file")?;
    tmp.write_all(content.as_bytes())
        .context("Failed to write temporary report file")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace report document {}", path.display()))?;
    Ok(())
}
