//! Plain-text cleanup of provider snippets and extracts.
//!
//! Search snippets arrive as HTML fragments with `<span class="searchmatch">`
//! highlighting and a handful of escaped entities. The UI wants plain text
//! with a bounded length.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Appended to truncated text. A single glyph, never three periods.
pub const ELLIPSIS: char = '\u{2026}';

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(quot|#039|amp|lt|gt);").expect("entity pattern is valid"));

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Strip markup, decode the provider's entity set, and normalize whitespace.
///
/// Tags become a space so that `foo<br>bar` does not turn into `foobar`.
/// Entities are decoded in one pass: `&amp;lt;` yields `&lt;`, not `<`.
pub fn clean_html(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, " ");

    let decoded = ENTITY_RE.replace_all(&without_tags, |caps: &Captures| match &caps[1] {
        "quot" => "\"",
        "#039" => "'",
        "amp" => "&",
        "lt" => "<",
        _ => ">",
    });

    WHITESPACE_RE.replace_all(&decoded, " ").trim().to_string()
}

/// Cut `text` to `max_chars` characters and mark the cut with [`ELLIPSIS`].
///
/// Whitespace left dangling at the cut is trimmed before the ellipsis. Text
/// within budget is returned unchanged.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut short = text[..cut].trim_end().to_string();
            short.push(ELLIPSIS);
            short
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_searchmatch_snippet() {
        let html = r#"<span class="searchmatch">Cat</span> is an animal &amp; pet"#;
        assert_eq!(clean_html(html), "Cat is an animal & pet");
    }

    #[test]
    fn test_tags_become_spaces() {
        assert_eq!(clean_html("foo<br>bar"), "foo bar");
        assert_eq!(clean_html("<b>bold</b><i>italic</i>"), "bold italic");
    }

    #[test]
    fn test_decode_entity_set() {
        assert_eq!(clean_html("&quot;quoted&quot; it&#039;s 1 &lt; 2 &gt; 0"), "\"quoted\" it's 1 < 2 > 0");
    }

    #[test]
    fn test_entities_decode_once() {
        assert_eq!(clean_html("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_unknown_entities_are_kept() {
        assert_eq!(clean_html("caf&eacute; &nbsp;"), "caf&eacute; &nbsp;");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(clean_html("  a \n\t b   c  "), "a b c");
        assert_eq!(clean_html(""), "");
        assert_eq!(clean_html("<span></span>"), "");
    }

    #[test]
    fn test_truncate_within_budget_is_unchanged() {
        assert_eq!(truncate_with_ellipsis("short", 160), "short");

        let exact = "x".repeat(160);
        assert_eq!(truncate_with_ellipsis(&exact, 160), exact);
    }

    #[test]
    fn test_truncate_long_text() {
        let text = "a".repeat(200);
        let short = truncate_with_ellipsis(&text, 160);

        assert_eq!(short.chars().count(), 161);
        assert!(short.ends_with(ELLIPSIS));
        assert!(!short.ends_with("..."));
        assert_eq!(&short[..160], "a".repeat(160));
    }

    #[test]
    fn test_truncate_trims_before_ellipsis() {
        let text = format!("{}{}", "a".repeat(155), " ".repeat(45));
        let short = truncate_with_ellipsis(&text, 160);

        assert_eq!(short, format!("{}{}", "a".repeat(155), ELLIPSIS));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        let short = truncate_with_ellipsis(&text, 4);

        assert_eq!(short, format!("éééé{}", ELLIPSIS));
    }
}
