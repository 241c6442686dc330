//! Loading review inputs from JSON files and querying their issues.

pub mod bundle;
pub mod error;
pub mod query;

pub use bundle::{load_article, load_decisions, ReviewBundle};
pub use error::BundleError;
