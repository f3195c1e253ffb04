//! System clipboard access, for the per-artifact copy action.

use crate::error::{Error, Result};

/// Cross-platform clipboard handle backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}
