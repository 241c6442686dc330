use crate::model::status::ReviewStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What the reviewer decided. Only `Modified` can carry replacement text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "decision_type", rename_all = "snake_case")]
pub enum DecisionKind {
    Accepted,
    Rejected,
    Modified {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        modified_content: Option<String>,
    },
}

impl DecisionKind {
    pub fn status(&self) -> ReviewStatus {
        match self {
            Self::Accepted => ReviewStatus::Accepted,
            Self::Rejected => ReviewStatus::Rejected,
            Self::Modified { .. } => ReviewStatus::Modified,
        }
    }

    pub fn modified_content(&self) -> Option<&str> {
        match self {
            Self::Modified { modified_content } => modified_content.as_deref(),
            _ => None,
        }
    }
}

/// A reviewer's override for one issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    pub issue_id: String,
    #[serde(flatten)]
    pub kind: DecisionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

impl Decision {
    pub fn accepted(issue_id: impl Into<String>) -> Self {
        Self::new(issue_id, DecisionKind::Accepted)
    }

    pub fn rejected(issue_id: impl Into<String>) -> Self {
        Self::new(issue_id, DecisionKind::Rejected)
    }

    pub fn modified(issue_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(
            issue_id,
            DecisionKind::Modified {
                modified_content: Some(content.into()),
            },
        )
    }

    pub fn new(issue_id: impl Into<String>, kind: DecisionKind) -> Self {
        Self {
            issue_id: issue_id.into(),
            kind,
            decided_at: None,
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.decided_at = Some(timestamp);
        self
    }
}

/// Decisions keyed by issue id. At most one decision per issue; a later
/// decision for the same issue replaces the earlier one.
///
/// Serialized as a list of decision records ordered by issue id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Decision>", into = "Vec<Decision>")]
pub struct DecisionMap {
    by_issue: BTreeMap<String, Decision>,
}

impl DecisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the decision for `decision.issue_id`, returning
    /// the one it replaced.
    pub fn upsert(&mut self, decision: Decision) -> Option<Decision> {
        self.by_issue.insert(decision.issue_id.clone(), decision)
    }

    pub fn get(&self, issue_id: &str) -> Option<&Decision> {
        self.by_issue.get(issue_id)
    }

    pub fn len(&self) -> usize {
        self.by_issue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_issue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decision> {
        self.by_issue.values()
    }
}

impl FromIterator<Decision> for DecisionMap {
    fn from_iter<I: IntoIterator<Item = Decision>>(iter: I) -> Self {
        let mut map = Self::new();
        for decision in iter {
            map.upsert(decision);
        }
        map
    }
}

impl From<Vec<Decision>> for DecisionMap {
    fn from(records: Vec<Decision>) -> Self {
        records.into_iter().collect()
    }
}

impl From<DecisionMap> for Vec<Decision> {
    fn from(map: DecisionMap) -> Self {
        map.by_issue.into_values().collect()
    }
}
