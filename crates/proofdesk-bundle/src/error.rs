use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid article {path}: {source}")]
    Core {
        path: PathBuf,
        #[source]
        source: proofdesk_core::CoreError,
    },

    #[error("issue not found: {0}")]
    IssueNotFound(String),
}
