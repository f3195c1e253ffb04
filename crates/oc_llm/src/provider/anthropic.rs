use async_anthropic::{Client, types};
use async_trait::async_trait;
use oc_config::ParametersConfig;
use oc_conversation::{Role, Turn};
use tracing::trace;

use super::Provider;
use crate::{
    error::{Error, Result},
    query::ChatQuery,
};

/// The Anthropic messages endpoint.
#[derive(Debug, Clone)]
pub struct Anthropic {
    client: Client,
}

impl Anthropic {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::from_api_key(api_key.into()),
        }
    }
}

#[async_trait]
impl Provider for Anthropic {
    async fn chat_completion(
        &self,
        parameters: &ParametersConfig,
        query: ChatQuery,
    ) -> Result<String> {
        let request = create_request(parameters, query)?;
        trace!(model = %parameters.model, "Sending completion request.");

        self.client
            .messages()
            .create(request)
            .await
            .map_err(Into::into)
            .and_then(map_response)
    }
}

fn create_request(
    parameters: &ParametersConfig,
    query: ChatQuery,
) -> Result<types::CreateMessagesRequest> {
    let ChatQuery {
        system_prompt,
        messages,
    } = query;

    let mut builder = types::CreateMessagesRequestBuilder::default();

    #[expect(clippy::cast_possible_wrap)]
    builder
        .model(parameters.model.clone())
        .messages(convert_turns(&messages))
        .system(system_prompt)
        .temperature(parameters.temperature)
        .top_p(parameters.top_p)
        .max_tokens(parameters.max_tokens as i32);

    if parameters.extended_thinking {
        // 1024 is the minimum thinking budget the API accepts.
        builder.thinking(types::ExtendedThinking::Enabled {
            budget_tokens: 1024,
        });
    }

    builder.build().map_err(Into::into)
}

fn convert_turns(turns: &[Turn]) -> Vec<types::Message> {
    turns
        .iter()
        .map(|turn| types::Message {
            role: match turn.role {
                Role::User => types::MessageRole::User,
                Role::Assistant => types::MessageRole::Assistant,
            },
            content: types::MessageContentList(vec![types::MessageContent::Text(
                turn.content.clone().into(),
            )]),
        })
        .collect()
}

/// The reply is expected to contain exactly one primary text payload, which
/// is taken verbatim.
fn map_response(response: types::CreateMessagesResponse) -> Result<String> {
    response
        .content
        .into_iter()
        .flatten()
        .find_map(|item| match item {
            types::MessageContent::Text(text) => Some(text.text),
            _ => None,
        })
        .ok_or(Error::EmptyReply)
}

#[cfg(test)]
#[path = "anthropic_tests.rs"]
mod tests;
