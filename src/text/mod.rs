// Text primitives shared by the scorer, the optimizer and the improvement loop
//
// Each component splits prose its own way: the structure scorer works on raw
// period-delimited segments, the optimizer on an abbreviation-aware splitter,
// and the improvement loop on a tolerant splitter that never loses text.

pub mod sentences;

use once_cell::sync::Lazy;
use regex::Regex;

pub use sentences::{period_segments, split_guarded, split_tolerant};

static BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n\s*\n").unwrap());

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Split text into trimmed, non-empty paragraphs on blank-line boundaries.
pub fn paragraphs(text: &str) -> Vec<&str> {
    BLANK_LINE_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Collapse every whitespace run (newlines included) into a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(text, " ").trim().to_string()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate to at most `max_chars` characters, appending "..." when cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Normalize the label of a `Label: value` line in a model reply.
///
/// List markers and markdown emphasis are dropped and the result lowercased,
/// so `"2. **Suggested fix**"` becomes `"suggested fix"`.
pub fn reply_label(label: &str) -> String {
    label
        .trim_start_matches(|c: char| {
            c.is_ascii_digit() || matches!(c, '-' | '*' | '•' | '.' | ')' | '#') || c.is_whitespace()
        })
        .trim_matches(|c: char| c == '*' || c.is_whitespace())
        .to_lowercase()
}

/// Trim a reply value and drop one pair of surrounding double quotes.
pub fn reply_value(value: &str) -> String {
    let value = value.trim();
    let unquoted = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    unquoted.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_drop_empty_blocks() {
        let text = "  First paragraph.\n\n\n\nSecond one.\n   \n Third.  \n\n";
        assert_eq!(
            paragraphs(text),
            vec!["First paragraph.", "Second one.", "Third."]
        );
    }

    #[test]
    fn test_paragraphs_single_newline_does_not_split() {
        let text = "Line one\nline two";
        assert_eq!(paragraphs(text), vec!["Line one\nline two"]);
    }

    #[test]
    fn test_paragraphs_empty_input() {
        assert!(paragraphs("").is_empty());
        assert!(paragraphs(" \n\n \t ").is_empty());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two\tthree\nfour"), 4);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\n b\t c  "), "a b c");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("to succeed"), "To succeed");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_reply_label_strips_markers() {
        assert_eq!(reply_label("2. **Suggested fix**"), "suggested fix");
        assert_eq!(reply_label("- Type"), "type");
        assert_eq!(reply_label("Claim 3"), "claim 3");
    }

    #[test]
    fn test_reply_value_unquotes() {
        assert_eq!(reply_value(" \"the cat\" "), "the cat");
        assert_eq!(reply_value("plain"), "plain");
        assert_eq!(reply_value("\"unbalanced"), "\"unbalanced");
    }
}
