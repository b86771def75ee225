//! Report rendering for the problem catalog
//!
//! Renders the two generated README sections: the completed-problems list
//! (grouped by category) and the daily check-in table (grouped by date).
//! The exact section text matters: the splice step relies on the marker
//! lines rendered here, and re-runs must reproduce byte-identical output.

use indexmap::IndexMap;

use super::document::SolutionDoc;
use super::splice::{CHECKIN_MARKER, COMPLETED_MARKER};

/// Blurb rendered under the check-in marker
const CHECKIN_BLURB: &str = "> 记录每天的刷题数量和重点题目，保持刷题习惯";

/// Group documents by category, categories in first-seen order
pub fn group_by_category(docs: &[SolutionDoc]) -> IndexMap<&str, Vec<&SolutionDoc>> {
    let mut groups: IndexMap<&str, Vec<&SolutionDoc>> = IndexMap::new();
    for doc in docs {
        groups.entry(doc.category.as_str()).or_default().push(doc);
    }
    groups
}

/// Render the completed-problems section.
///
/// One `###` heading per category in first-seen order, one checked list
/// item per document sorted ascending by number, a blank line after each
/// category.
pub fn render_completed(docs: &[SolutionDoc]) -> String {
    let mut lines: Vec<String> = vec![format!("{COMPLETED_MARKER}\n")];

    for (category, mut group) in group_by_category(docs) {
        lines.push(format!("### {category}"));
        group.sort_by(|a, b| a.number.cmp(&b.number));
        for doc in group {
            lines.push(format!("- [x] [{} {}]({})", doc.number, doc.title, doc.path));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the daily check-in section.
///
/// One table row per date, newest first: date, number of documents, the
/// `#`-prefixed problem numbers, and the category of the first document of
/// that day. The single-category annotation is intentionally lossy when a
/// day spans several categories.
pub fn render_checkin(docs: &[SolutionDoc]) -> String {
    let mut by_date: IndexMap<&str, Vec<&SolutionDoc>> = IndexMap::new();
    for doc in docs {
        by_date.entry(doc.date.as_str()).or_default().push(doc);
    }

    let mut lines: Vec<String> = vec![
        CHECKIN_MARKER.to_string(),
        format!("{CHECKIN_BLURB}\n"),
        "| 日期 | 题目数 | 重点题目 | 备注 |".to_string(),
        "|------|--------|----------|------|".to_string(),
    ];

    let mut dates: Vec<&str> = by_date.keys().copied().collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    for date in dates {
        let daily = &by_date[date];
        let numbers = daily
            .iter()
            .map(|doc| format!("#{}", doc.number))
            .collect::<Vec<_>>()
            .join(", ");
        let category = &daily[0].category;

        lines.push(format!("| {} | {} | {} | {} |", date, daily.len(), numbers, category));
    }

    lines.join("\n")
}
