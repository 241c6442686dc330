//! Rebuilds the article text as it reads once accepted and modified issues
//! are applied.

use crate::markup::strip_markup;
use crate::model::{effective_status, DecisionMap, Issue, ReviewStatus};
use tracing::debug;

/// A replacement located in the stripped original text.
#[derive(Debug, Clone, PartialEq)]
struct PendingEdit {
    start: usize,
    needle_len: usize,
    replacement: String,
}

/// Produce the plain text of `original_content` with every accepted or
/// modified issue applied.
///
/// Each issue's stripped `original_text` is located at its first occurrence
/// in the stripped content. Offsets are computed once against that text and
/// edits are spliced from the rightmost one leftwards, so earlier offsets stay
/// valid as long as edits do not overlap. Issues with an empty span or a span
/// that cannot be found are skipped. Never fails.
pub fn reconcile(original_content: &str, issues: &[Issue], decisions: &DecisionMap) -> String {
    let plain = strip_markup(original_content);

    let mut edits: Vec<PendingEdit> = issues
        .iter()
        .filter_map(|issue| locate_edit(&plain, issue, decisions))
        .collect();

    // Stable sort: edits at the same offset keep issue order.
    edits.sort_by(|a, b| b.start.cmp(&a.start));

    let mut text = plain;
    for edit in edits {
        let end = (edit.start + edit.needle_len).min(text.len());
        match (text.get(..edit.start), text.get(end..)) {
            (Some(head), Some(tail)) => {
                let mut spliced =
                    String::with_capacity(head.len() + edit.replacement.len() + tail.len());
                spliced.push_str(head);
                spliced.push_str(&edit.replacement);
                spliced.push_str(tail);
                text = spliced;
            }
            _ => debug!(
                start = edit.start,
                "edit no longer falls on character boundaries, skipping"
            ),
        }
    }
    text
}

fn locate_edit(plain: &str, issue: &Issue, decisions: &DecisionMap) -> Option<PendingEdit> {
    let status = effective_status(issue, decisions);
    if !status.applies_edit() {
        return None;
    }

    let needle = strip_markup(&issue.original_text);
    if needle.is_empty() {
        debug!(issue = %issue.id, "empty original span, skipping");
        return None;
    }

    let replacement = replacement_for(issue, status, decisions, &needle);

    let Some(start) = plain.find(&needle) else {
        debug!(issue = %issue.id, "original span not found in content, skipping");
        return None;
    };

    Some(PendingEdit {
        start,
        needle_len: needle.len(),
        replacement,
    })
}

fn replacement_for(
    issue: &Issue,
    status: ReviewStatus,
    decisions: &DecisionMap,
    needle: &str,
) -> String {
    if status == ReviewStatus::Modified {
        if let Some(content) = decisions
            .get(&issue.id)
            .and_then(|d| d.kind.modified_content())
        {
            return content.to_string();
        }
    }
    let suggested = strip_markup(&issue.suggested_text);
    if suggested.is_empty() {
        needle.to_string()
    } else {
        suggested
    }
}
