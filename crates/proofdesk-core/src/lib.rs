//! Editorial review core: decision resolution, content reconciliation,
//! paragraph formatting and review statistics for proofread articles.

pub mod error;
pub mod markup;
pub mod model;
pub mod paragraph;
pub mod preview;
pub mod reconcile;
pub mod stats;

pub use error::CoreError;
pub use model::{
    effective_status, Article, Decision, DecisionKind, DecisionMap, Engine, Issue, ReviewStatus,
    Severity,
};
pub use paragraph::paragraphs;
pub use preview::{Previewer, ReviewPreview};
pub use reconcile::reconcile;
pub use stats::ReviewStats;
