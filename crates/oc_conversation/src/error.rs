pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no API key configured")]
    MissingCredential,

    #[error("empty input")]
    EmptyInput,

    #[error("a completion request is already in flight")]
    PendingResponse,

    #[error("failed to write export artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize conversation: {0}")]
    Json(#[from] serde_json::Error),
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
