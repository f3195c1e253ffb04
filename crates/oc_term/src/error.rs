pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("highlighting error: {0}")]
    Highlight(#[from] syntect::Error),
}
