//! The session state machine.
//!
//! A [`Session`] owns one [`Conversation`], one [`ParametersConfig`], an
//! optional credential, and the busy flag. It moves between two states:
//! `Idle` (no outstanding request) and `AwaitingResponse` (one completion
//! request in flight). At most one request can be outstanding at a time;
//! [`Session::submit`] rejects new input until the pending request resolves
//! through [`Session::complete`] or [`Session::fail`].

use std::fmt;

use oc_config::ParametersConfig;
use tracing::{debug, trace};

use crate::{
    conversation::Conversation,
    error::{Error, Result},
    message::Turn,
};

/// The API key used to authenticate completion requests.
///
/// Held in session memory only. The wrapper keeps the secret out of `Debug`
/// output and, by not implementing `Serialize`, out of export artifacts.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw secret, for handing to the transport layer.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

/// The two states of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    AwaitingResponse,
}

/// A single chat session.
#[derive(Debug)]
pub struct Session {
    conversation: Conversation,
    parameters: ParametersConfig,
    api_key: Option<ApiKey>,
    state: State,
}

impl Session {
    #[must_use]
    pub fn new(parameters: ParametersConfig) -> Self {
        Self {
            conversation: Conversation::default(),
            parameters,
            api_key: None,
            state: State::Idle,
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn set_api_key(&mut self, api_key: ApiKey) {
        self.api_key = Some(api_key);
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    #[must_use]
    pub fn parameters(&self) -> &ParametersConfig {
        &self.parameters
    }

    /// Whether a completion request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == State::AwaitingResponse
    }

    /// Submit user input, appending a user turn and marking the session
    /// busy.
    ///
    /// Preconditions, checked in order:
    ///
    /// - no completion request may be outstanding,
    /// - the input must not be blank,
    /// - a credential must be configured.
    ///
    /// On any failed precondition no turn is appended and the state is
    /// unchanged.
    pub fn submit(&mut self, input: impl Into<String>) -> Result<()> {
        let input = input.into();

        if self.state == State::AwaitingResponse {
            return Err(Error::PendingResponse);
        }
        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.api_key.is_none() {
            return Err(Error::MissingCredential);
        }

        trace!(turns = self.conversation.len(), "Submitting user turn.");
        self.conversation.push(Turn::user(input));
        self.state = State::AwaitingResponse;

        Ok(())
    }

    /// Resolve the outstanding request with the assistant's reply, stored
    /// verbatim.
    pub fn complete(&mut self, reply: impl Into<String>) {
        debug_assert!(self.is_loading(), "complete without outstanding request");

        debug!(turns = self.conversation.len(), "Completion succeeded.");
        self.conversation.push(Turn::assistant(reply));
        self.state = State::Idle;
    }

    /// Resolve the outstanding request as failed. No turn is appended, the
    /// session is ready for a new submission.
    pub fn fail(&mut self) {
        debug_assert!(self.is_loading(), "fail without outstanding request");

        debug!("Completion failed, returning to idle.");
        self.state = State::Idle;
    }

    /// Empty the conversation. Parameters and credential are untouched.
    pub fn clear(&mut self) -> Result<()> {
        if self.state == State::AwaitingResponse {
            return Err(Error::PendingResponse);
        }

        self.conversation.clear();
        Ok(())
    }

    /// Replace the parameter set wholesale.
    ///
    /// Range validation is the caller's responsibility, see
    /// [`ParametersConfig::set`].
    pub fn set_parameters(&mut self, parameters: ParametersConfig) -> Result<()> {
        if self.state == State::AwaitingResponse {
            return Err(Error::PendingResponse);
        }

        self.parameters = parameters;
        Ok(())
    }

    /// An immutable view of the session, for the rendering layer.
    ///
    /// A fresh snapshot is produced after every transition; rendering never
    /// reaches into the live session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            turns: self.conversation.turns().to_vec(),
            parameters: self.parameters.clone(),
            is_loading: self.is_loading(),
        }
    }
}

/// A point-in-time view of a session, decoupled from its mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub turns: Vec<Turn>,
    pub parameters: ParametersConfig,
    pub is_loading: bool,
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
