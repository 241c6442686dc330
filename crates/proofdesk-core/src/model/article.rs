use crate::error::CoreError;
use crate::model::issue::Issue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An article under review: its markup body and the issues found in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl Article {
    /// Check that issue ids are unique.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(self.issues.len());
        for issue in &self.issues {
            if !seen.insert(issue.id.as_str()) {
                return Err(CoreError::DuplicateIssueId(issue.id.clone()));
            }
        }
        Ok(())
    }

    pub fn issue(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }
}
