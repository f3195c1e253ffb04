//! Syntax-highlighted code blocks for terminal output.

use syntect::{
    easy::HighlightLines,
    highlighting::ThemeSet,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};

use crate::error::Result;

/// Render a code block with ANSI colors.
///
/// Returns the content unchanged when `theme` is `None` or names an unknown
/// theme. An unknown (or empty) language falls back to plain-text syntax, so
/// the block still renders in the theme's base colors.
pub fn highlight(content: &str, language: &str, theme: Option<&str>) -> Result<String> {
    let syntaxes = SyntaxSet::load_defaults_newlines();
    let syntax = match language {
        "" => syntaxes.find_syntax_plain_text(),
        token => syntaxes
            .find_syntax_by_token(token)
            .unwrap_or_else(|| syntaxes.find_syntax_plain_text()),
    };

    let Some(theme_name) = theme else {
        return Ok(content.to_owned());
    };

    let themes = ThemeSet::load_defaults();
    let Some(theme) = themes.themes.get(theme_name) else {
        return Ok(content.to_owned());
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut buf = String::with_capacity(content.len());

    for line in LinesWithEndings::from(content) {
        let ranges = highlighter.highlight_line(line, &syntaxes)?;
        buf.push_str(&as_24_bit_terminal_escaped(&ranges, false));
    }
    buf.push_str("\x1b[0m");

    Ok(buf)
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
