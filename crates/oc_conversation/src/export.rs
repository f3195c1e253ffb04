//! On-demand export of the conversation history.

use std::{
    fs::OpenOptions,
    io::Write as _,
    path::{Path, PathBuf},
};

use chrono::Local;
use tracing::info;

use crate::{conversation::Conversation, error::Result};

/// Write the full turn sequence to a timestamped JSON file in `dir`.
///
/// The artifact is an ordered array of `{role, content}` records. Each export
/// creates a new file; an existing file is never overwritten. The session
/// credential is not part of the conversation and cannot end up in the
/// artifact.
pub fn write(conversation: &Conversation, dir: &Path) -> Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let json = serde_json::to_string_pretty(conversation.turns())?;

    let mut counter = 0;
    loop {
        let filename = if counter == 0 {
            format!("chat_history_{stamp}.json")
        } else {
            format!("chat_history_{stamp}_{counter}.json")
        };

        let path = dir.join(filename);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(json.as_bytes())?;
                info!(path = %path.display(), "Exported conversation.");
                return Ok(path);
            }
            Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => {
                counter += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
