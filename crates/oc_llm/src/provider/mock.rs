//! Mock provider for exercising the session loop without network calls.

use async_trait::async_trait;
use oc_config::ParametersConfig;

use super::Provider;
use crate::{
    error::{Error, Result},
    query::ChatQuery,
};

/// A provider returning a canned reply or a canned failure.
#[derive(Debug, Clone)]
pub struct MockProvider {
    reply: std::result::Result<String, String>,
}

impl MockProvider {
    /// A provider whose completions succeed with `reply`.
    #[must_use]
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
        }
    }

    /// A provider whose completions fail with `message`, simulating a
    /// transport, authentication, or quota error.
    #[must_use]
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn chat_completion(
        &self,
        _parameters: &ParametersConfig,
        _query: ChatQuery,
    ) -> Result<String> {
        self.reply.clone().map_err(Error::Other)
    }
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod tests;
