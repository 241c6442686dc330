use crate::model::{effective_status, DecisionMap, Issue, ReviewStatus};
use serde::{Deserialize, Serialize};

/// Counts of issues by effective status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewStats {
    pub accepted: usize,
    pub rejected: usize,
    pub modified: usize,
    pub pending: usize,
    pub total: usize,
}

impl ReviewStats {
    /// Tally `issues` by the same status resolution the reconciler uses.
    pub fn tally(issues: &[Issue], decisions: &DecisionMap) -> Self {
        let mut stats = Self {
            total: issues.len(),
            ..Self::default()
        };
        for issue in issues {
            match effective_status(issue, decisions) {
                ReviewStatus::Accepted => stats.accepted += 1,
                ReviewStatus::Rejected => stats.rejected += 1,
                ReviewStatus::Modified => stats.modified += 1,
                ReviewStatus::Pending => stats.pending += 1,
            }
        }
        stats
    }

    /// Issues that have been resolved one way or another.
    pub fn reviewed(&self) -> usize {
        self.accepted + self.rejected + self.modified
    }
}
