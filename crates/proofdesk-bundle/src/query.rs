//! Query functions for filtering and grouping issues

use proofdesk_core::{effective_status, DecisionMap, Engine, Issue, ReviewStatus, Severity};
use std::collections::BTreeMap;

/// Optional constraints on which issues to return. Unset fields match all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub severity: Option<Severity>,
    pub engine: Option<Engine>,
    pub status: Option<ReviewStatus>,
}

/// An issue paired with its resolved status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IssueView<'a> {
    pub issue: &'a Issue,
    pub status: ReviewStatus,
}

/// Issues matching `filter`, in article order. `filter.status` is compared
/// against the effective status, not the issue's stored one.
pub fn query_issues<'a>(
    issues: &'a [Issue],
    decisions: &DecisionMap,
    filter: &IssueFilter,
) -> Vec<IssueView<'a>> {
    let mut results = Vec::new();
    for issue in issues {
        let status = effective_status(issue, decisions);
        let mut matches = true;
        if let Some(severity) = filter.severity {
            if issue.severity != severity {
                matches = false;
            }
        }
        if let Some(engine) = filter.engine {
            if issue.engine != engine {
                matches = false;
            }
        }
        if let Some(wanted) = filter.status {
            if status != wanted {
                matches = false;
            }
        }
        if matches {
            results.push(IssueView { issue, status });
        }
    }
    results
}

/// Group issue views by severity, most severe first.
pub fn group_by_severity<'a>(views: Vec<IssueView<'a>>) -> BTreeMap<Severity, Vec<IssueView<'a>>> {
    let mut groups: BTreeMap<Severity, Vec<IssueView<'a>>> = BTreeMap::new();
    for view in views {
        groups.entry(view.issue.severity).or_default().push(view);
    }
    groups
}
