use proofdesk_core::{Article, Decision, DecisionMap, Previewer, ReviewPreview, ReviewStats};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::BundleError;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, BundleError> {
    let data = fs::read_to_string(path).map_err(|source| BundleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| BundleError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an article (`title`, `content`, `issues`) from a JSON file and check
/// that its issue ids are unique.
pub fn load_article(path: &Path) -> Result<Article, BundleError> {
    let article: Article = read_json(path)?;
    article.validate().map_err(|source| BundleError::Core {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), issues = article.issues.len(), "loaded article");
    Ok(article)
}

/// Read a JSON list of decision records. Later records for the same issue
/// replace earlier ones.
pub fn load_decisions(path: &Path) -> Result<DecisionMap, BundleError> {
    let decisions: DecisionMap = read_json(path)?;
    debug!(path = %path.display(), decisions = decisions.len(), "loaded decisions");
    Ok(decisions)
}

/// An article together with the reviewer's decisions on it.
#[derive(Debug, Clone, Default)]
pub struct ReviewBundle {
    pub article: Article,
    pub decisions: DecisionMap,
    previewer: Previewer,
}

impl ReviewBundle {
    pub fn new(article: Article, decisions: DecisionMap) -> Self {
        let bundle = Self {
            article,
            decisions,
            previewer: Previewer::new(),
        };
        for d in bundle.dangling_decisions() {
            warn!(issue = %d.issue_id, "decision refers to an unknown issue");
        }
        bundle
    }

    pub fn load(article_path: &Path, decisions_path: Option<&Path>) -> Result<Self, BundleError> {
        let article = load_article(article_path)?;
        let decisions = match decisions_path {
            Some(p) => load_decisions(p)?,
            None => DecisionMap::new(),
        };
        Ok(Self::new(article, decisions))
    }

    /// Record a decision for an issue of this article, replacing any earlier
    /// decision for it.
    pub fn decide(&mut self, decision: Decision) -> Result<Option<Decision>, BundleError> {
        if self.article.issue(&decision.issue_id).is_none() {
            return Err(BundleError::IssueNotFound(decision.issue_id));
        }
        Ok(self.decisions.upsert(decision))
    }

    /// Decisions whose issue id matches no issue in the article.
    pub fn dangling_decisions(&self) -> Vec<&Decision> {
        self.decisions
            .iter()
            .filter(|d| self.article.issue(&d.issue_id).is_none())
            .collect()
    }

    /// The preview for the current article and decisions, rebuilt only
    /// when either has changed since the last call.
    pub fn preview(&mut self) -> &ReviewPreview {
        self.previewer.refresh(&self.article, &self.decisions)
    }

    pub fn stats(&self) -> ReviewStats {
        ReviewStats::tally(&self.article.issues, &self.decisions)
    }
}
