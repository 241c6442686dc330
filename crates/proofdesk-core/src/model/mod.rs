pub mod article;
pub mod decision;
pub mod issue;
pub mod status;

pub use article::Article;
pub use decision::{Decision, DecisionKind, DecisionMap};
pub use issue::{Engine, Issue, Severity};
pub use status::{effective_status, ReviewStatus};
