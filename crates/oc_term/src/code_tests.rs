use pretty_assertions::assert_eq;

use super::*;

#[test]
fn no_theme_returns_content_unchanged() {
    let content = "Get-Process | Sort-Object CPU";

    assert_eq!(highlight(content, "powershell", None).unwrap(), content);
}

#[test]
fn unknown_theme_returns_content_unchanged() {
    let content = "echo hi";

    assert_eq!(highlight(content, "", Some("no-such-theme")).unwrap(), content);
}

#[test]
fn known_theme_emits_ansi_escapes() {
    let out = highlight("let x = 1;", "rs", Some("base16-ocean.dark")).unwrap();

    assert!(out.contains("\x1b["));
    assert!(out.ends_with("\x1b[0m"));
}

#[test]
fn unknown_language_still_highlights_as_plain_text() {
    let out = highlight("Get-Date", "definitely-not-a-language", Some("base16-ocean.dark")).unwrap();

    assert!(out.ends_with("\x1b[0m"));
}
