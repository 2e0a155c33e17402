// Sentence splitters

use once_cell::sync::Lazy;
use regex::Regex;

use super::collapse_whitespace;

/// Stands in for an abbreviation's period while splitting.
const MASKED_DOT: char = '\u{E000}';

static ABBREVIATION_RES: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    let masked = MASKED_DOT.to_string();
    let mut rules: Vec<(Regex, String)> = ["Dr", "Mr", "Mrs", "Ms", "Prof"]
        .iter()
        .map(|title| {
            (
                Regex::new(&format!(r"\b{title}\.")).unwrap(),
                format!("{title}{masked}"),
            )
        })
        .collect();
    // Initialisms such as "U.S." or "U.K."
    rules.push((
        Regex::new(r"\b([A-Z])\.([A-Z])\.").unwrap(),
        format!("${{1}}{masked}${{2}}{masked}"),
    ));
    rules
});

static TERMINATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Split on raw periods, keeping empty trailing segments.
///
/// `"One. Two."` yields `["One", " Two", ""]`; callers rely on the segment
/// count and positions, not on sentence semantics.
pub fn period_segments(text: &str) -> Vec<&str> {
    text.split('.').collect()
}

/// Abbreviation-aware splitter used for readability statistics.
///
/// Titles (Dr., Mr., Mrs., Ms., Prof.) and two-letter initialisms (U.S.) are
/// masked before splitting on `[.!?]+` followed by whitespace, then restored.
/// Terminators consumed by the split are not kept; the final sentence keeps
/// its trailing punctuation.
pub fn split_guarded(text: &str) -> Vec<String> {
    let mut protected = text.to_string();
    for (pattern, replacement) in ABBREVIATION_RES.iter() {
        protected = pattern
            .replace_all(&protected, replacement.as_str())
            .into_owned();
    }

    TERMINATOR_RE
        .split(&protected)
        .map(|s| s.replace(MASKED_DOT, ".").trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-normalizing splitter that never drops text.
///
/// Breaks after `.`, `!` or `?` when followed by whitespace and keeps the
/// terminator on its sentence. Unterminated input comes back as one sentence.
pub fn split_tolerant(text: &str) -> Vec<String> {
    let normalized = collapse_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_terminal = false;
    for (idx, ch) in normalized.char_indices() {
        if ch == ' ' && prev_terminal {
            let sentence = normalized[start..idx].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = idx + ch.len_utf8();
        }
        prev_terminal = matches!(ch, '.' | '!' | '?');
    }

    let tail = normalized[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
