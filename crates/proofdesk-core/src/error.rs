use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown review status: {0}")]
    UnknownStatus(String),

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("duplicate issue id: {0}")]
    DuplicateIssueId(String),
}
