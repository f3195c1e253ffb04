//! Fenced code-block extraction.

use std::sync::LazyLock;

use fancy_regex::Regex;

/// Matches a fenced segment: an opening triple-backtick marker, an optional
/// tag on the same line, a newline, a non-greedy multi-line body, and a
/// closing triple-backtick marker. An opening marker without a matching
/// closing marker does not match at all.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```([^`\n]*)\n(?s:(.*?))```").expect("valid pattern")
});

/// A code block extracted from a fenced segment of a chat reply.
///
/// Derived data. Blocks are recomputed from the message text each time they
/// are displayed, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// The language tag of the fence, or an empty string if the fence had no
    /// tag (or a tag that is not a single word).
    pub language: String,

    /// The body of the fence, with surrounding whitespace trimmed.
    pub code: String,
}

/// Extracts all fenced code blocks from `text`, in document order.
///
/// The returned iterator is lazy and borrows `text`. Calling this function
/// again on the same input yields the same sequence.
pub fn extract(text: &str) -> impl Iterator<Item = CodeBlock> + '_ {
    FENCE.captures_iter(text).filter_map(|captures| {
        let captures = captures.ok()?;
        let tag = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let code = captures.get(2)?.as_str().trim().to_owned();

        Some(CodeBlock {
            language: language(tag),
            code,
        })
    })
}

/// A tag is only a language if it is a single word. Anything else (trailing
/// annotations, punctuation) is treated as if the fence had no tag.
fn language(tag: &str) -> String {
    let tag = tag.trim();
    if !tag.is_empty() && tag.chars().all(|c| c.is_alphanumeric() || c == '_') {
        tag.to_owned()
    } else {
        String::new()
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
