pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use oc_config::ParametersConfig;

use crate::{error::Result, query::ChatQuery};

/// A hosted completion endpoint.
///
/// Implementations perform one non-streaming request/response cycle and
/// return the reply's primary text payload verbatim. All transport,
/// authentication, and quota failures must surface as error values, never as
/// panics.
#[async_trait]
pub trait Provider: std::fmt::Debug + Send + Sync {
    /// Perform a chat completion, returning the assistant's reply text.
    async fn chat_completion(
        &self,
        parameters: &ParametersConfig,
        query: ChatQuery,
    ) -> Result<String>;
}
