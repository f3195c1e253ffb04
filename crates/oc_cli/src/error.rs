pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] oc_config::Error),

    #[error("Session error: {0}")]
    Session(#[from] oc_conversation::Error),

    #[error("Completion error: {0}")]
    Completion(#[from] oc_llm::Error),

    #[error("Terminal error: {0}")]
    Term(#[from] oc_term::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
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
