pub mod issues;
pub mod preview;
pub mod stats;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use proofdesk_bundle::ReviewBundle;
use proofdesk_core::Decision;
use std::path::PathBuf;

/// Where the article and the reviewer's decisions come from.
#[derive(Args, Debug, Clone)]
pub struct ReviewArgs {
    /// Article JSON file (title, content, issues)
    #[arg(long)]
    pub article: PathBuf,

    /// Decisions JSON file (list of decision records)
    #[arg(long)]
    pub decisions: Option<PathBuf>,

    /// Accept an issue (repeatable)
    #[arg(long, value_name = "ISSUE_ID")]
    pub accept: Vec<String>,

    /// Reject an issue (repeatable)
    #[arg(long, value_name = "ISSUE_ID")]
    pub reject: Vec<String>,

    /// Replace an issue's span with custom text (repeatable, format: "id=text")
    #[arg(long, value_name = "ISSUE_ID=TEXT")]
    pub modify: Vec<String>,
}

impl ReviewArgs {
    /// Load the bundle and apply command-line decisions on top of the
    /// decisions file, in the order accept, reject, modify.
    pub fn load(&self) -> Result<ReviewBundle> {
        let mut bundle = ReviewBundle::load(&self.article, self.decisions.as_deref())
            .context("cannot load review inputs")?;

        let now = Utc::now();
        let mut overrides: Vec<Decision> = Vec::new();
        overrides.extend(self.accept.iter().map(|id| Decision::accepted(id.trim())));
        overrides.extend(self.reject.iter().map(|id| Decision::rejected(id.trim())));
        for raw in &self.modify {
            let (id, text) = parse_modify(raw)?;
            overrides.push(Decision::modified(id, text));
        }

        for decision in overrides {
            bundle.decide(decision.at(now))?;
        }
        Ok(bundle)
    }
}

fn parse_modify(raw: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = raw.splitn(2, '=').collect();
    if parts.len() != 2 || parts[0].trim().is_empty() {
        anyhow::bail!("Invalid modify format: expected 'id=text', got '{}'", raw);
    }
    Ok((parts[0].trim(), parts[1]))
}
