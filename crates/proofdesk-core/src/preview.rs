use crate::model::{Article, DecisionMap};
use crate::paragraph::paragraphs;
use crate::reconcile::reconcile;
use crate::stats::ReviewStats;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the review screen shows for an article in its current state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewPreview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub reconciled_text: String,
    pub paragraphs: Vec<String>,
    pub stats: ReviewStats,
}

impl ReviewPreview {
    pub fn build(article: &Article, decisions: &DecisionMap) -> Self {
        let reconciled_text = reconcile(&article.content, &article.issues, decisions);
        let paragraphs = paragraphs(&reconciled_text);
        Self {
            title: article.title.clone(),
            reconciled_text,
            paragraphs,
            stats: ReviewStats::tally(&article.issues, decisions),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

#[derive(Debug, Clone)]
struct CachedPreview {
    article: Article,
    decisions: DecisionMap,
    preview: ReviewPreview,
}

/// Holds the last preview and rebuilds it only when its inputs change.
///
/// The owner calls [`Previewer::refresh`] whenever the article or the
/// decisions may have changed; inputs equal to the previous ones return the
/// cached preview.
#[derive(Debug, Clone, Default)]
pub struct Previewer {
    last: Option<CachedPreview>,
    rebuilds: usize,
}

impl Previewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, article: &Article, decisions: &DecisionMap) -> &ReviewPreview {
        let entry = match self.last.take() {
            Some(cached) if cached.article == *article && cached.decisions == *decisions => {
                debug!("preview inputs unchanged");
                cached
            }
            _ => {
                debug!(issues = article.issues.len(), decisions = decisions.len(), "rebuilding preview");
                self.rebuilds += 1;
                CachedPreview {
                    article: article.clone(),
                    decisions: decisions.clone(),
                    preview: ReviewPreview::build(article, decisions),
                }
            }
        };
        &self.last.insert(entry).preview
    }

    /// Number of times a preview has actually been computed.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}
