//! The completion collaborator boundary.

mod error;
pub mod provider;
pub mod query;

pub use error::Error;
pub use provider::Provider;
pub use query::ChatQuery;
