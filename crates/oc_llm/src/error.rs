pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Anthropic API error: {0}")]
    Anthropic(#[from] async_anthropic::errors::AnthropicError),

    #[error("invalid completion request: {0}")]
    Request(#[from] async_anthropic::types::CreateMessagesRequestBuilderError),

    #[error("reply contained no text content")]
    EmptyReply,

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        if std::mem::discriminant(self) != std::mem::discriminant(other) {
            return false;
        }

        // Good enough for testing purposes
        format!("{self:?}") == format!("{other:?}")
    }
}
