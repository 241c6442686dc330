use crate::error::CoreError;
use crate::model::decision::DecisionMap;
use crate::model::issue::Issue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review state of an issue, either persisted on the issue itself or
/// resolved from a reviewer decision.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Modified,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Modified => "modified",
        }
    }

    /// Whether an issue in this state contributes an edit to the final text.
    pub fn applies_edit(&self) -> bool {
        matches!(self, Self::Accepted | Self::Modified)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "modified" => Ok(Self::Modified),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

/// Resolve the status of `issue`: the reviewer's decision if one exists,
/// otherwise the issue's own `decision_status`.
///
/// Every consumer that needs an issue's status goes through this function.
pub fn effective_status(issue: &Issue, decisions: &DecisionMap) -> ReviewStatus {
    decisions
        .get(&issue.id)
        .map(|d| d.kind.status())
        .unwrap_or(issue.decision_status)
}
