//! Markdown utilities for chat replies.

mod extract;

pub use extract::{CodeBlock, extract};
