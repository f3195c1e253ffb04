//! Terminal-facing helpers: syntax highlighting and the system clipboard.

pub mod clipboard;
pub mod code;
mod error;

pub use clipboard::Clipboard;
pub use error::Error;
