// Mechanical auto-fixes for issues that carry a literal replacement

use regex::{Captures, RegexBuilder};

use super::detectors::{ACTIVE_VOICE_PLACEHOLDER, REPHRASE_PLACEHOLDER};
use super::types::OptimizationIssue;
use crate::text::capitalize_first;

/// Whether an issue's suggestion can be substituted verbatim.
pub fn is_fixable(issue: &OptimizationIssue) -> bool {
    match issue.suggested_text.as_deref() {
        Some(suggestion) => {
            !suggestion.is_empty()
                && !issue.original_text.is_empty()
                && suggestion != REPHRASE_PLACEHOLDER
                && suggestion != ACTIVE_VOICE_PLACEHOLDER
        }
        None => false,
    }
}

/// Replace every case-insensitive occurrence of each fixable issue's text.
///
/// A match starting with an uppercase letter gets a capitalized replacement.
/// Returns the rewritten text and the number of replacements made.
pub fn apply_fixes(text: &str, issues: &[OptimizationIssue]) -> (String, usize) {
    let mut optimized = text.to_string();
    let mut applied = 0;

    for issue in issues.iter().filter(|issue| is_fixable(issue)) {
        let Some(suggestion) = issue.suggested_text.as_deref() else {
            continue;
        };
        let pattern = match RegexBuilder::new(&regex::escape(&issue.original_text))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("Skipping fix for '{}': {}", issue.original_text, e);
                continue;
            }
        };

        let mut replaced = 0;
        let rewritten = pattern.replace_all(&optimized, |caps: &Captures| {
            replaced += 1;
            let starts_upper = caps[0].chars().next().is_some_and(char::is_uppercase);
            if starts_upper {
                capitalize_first(suggestion)
            } else {
                suggestion.to_string()
            }
        });

        if replaced > 0 {
            optimized = rewritten.into_owned();
            applied += replaced;
        }
    }

    (optimized, applied)
}
