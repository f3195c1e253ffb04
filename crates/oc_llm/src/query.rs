//! Typed request configuration for chat completions.

use oc_conversation::Turn;

/// Everything a provider needs to produce a reply, besides the sampling
/// parameters: the fixed system instructions and the full ordered turn
/// history, the last turn being the user's pending query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatQuery {
    pub system_prompt: String,
    pub messages: Vec<Turn>,
}

impl ChatQuery {
    #[must_use]
    pub fn new(system_prompt: impl Into<String>, messages: Vec<Turn>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            messages,
        }
    }
}
