// Heuristic issue detectors
//
// Each detector is independent and pure; the optimizer decides which ones run.

use super::readability::is_passive_voice;
use super::types::{IssueKind, OptimizationIssue, ReadabilityMetrics, Severity};
use crate::text::{split_guarded, truncate_with_ellipsis};

/// Placeholder suggestion for clichés. Never auto-applied.
pub const REPHRASE_PLACEHOLDER: &str = "[consider rephrasing]";

/// Placeholder suggestion for passive constructions. Never auto-applied.
pub const ACTIVE_VOICE_PLACEHOLDER: &str = "[rewrite in active voice]";

pub const CLICHES: &[&str] = &[
    "at the end of the day",
    "think outside the box",
    "low-hanging fruit",
    "paradigm shift",
    "circle back",
    "touch base",
    "move the needle",
    "on the same page",
    "game changer",
    "level the playing field",
    "it goes without saying",
    "needless to say",
    "in today's society",
    "since the dawn of time",
    "in conclusion",
];

/// Verbose phrase and its concise replacement.
pub const WORDY_PHRASES: &[(&str, &str)] = &[
    ("in order to", "to"),
    ("due to the fact that", "because"),
    ("at this point in time", "now"),
    ("in spite of the fact that", "although"),
    ("for the purpose of", "to"),
    ("in the event that", "if"),
    ("on the occasion of", "when"),
    ("with regard to", "regarding"),
    ("in the process of", "during"),
    ("by means of", "by"),
    ("in the amount of", "for"),
    ("at the present time", "now"),
    ("during the course of", "during"),
    ("a majority of", "most"),
    ("a number of", "several"),
];

pub const WEAK_VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "get", "got", "have", "has", "had",
];

/// Weak verbs in one sentence at which it gets flagged.
const WEAK_VERB_THRESHOLD: usize = 3;

const WEAK_VERB_EXCERPT_CHARS: usize = 50;
const PASSIVE_EXCERPT_CHARS: usize = 60;

/// Whether `text` contains `phrase`, ignoring case.
fn contains_phrase(lowered: &str, phrase: &str) -> bool {
    lowered.contains(&phrase.to_lowercase())
}

/// One issue per listed cliché found anywhere in the text.
pub fn detect_cliches(text: &str) -> Vec<OptimizationIssue> {
    let lowered = text.to_lowercase();
    CLICHES
        .iter()
        .filter(|cliche| contains_phrase(&lowered, cliche))
        .map(|cliche| {
            OptimizationIssue::new(
                IssueKind::Style,
                Severity::Suggestion,
                format!("Avoid cliché: '{cliche}'"),
                *cliche,
            )
            .with_suggestion(REPHRASE_PLACEHOLDER)
        })
        .collect()
}

/// One issue per wordy phrase found, carrying its concise replacement.
pub fn detect_wordy_phrases(text: &str) -> Vec<OptimizationIssue> {
    let lowered = text.to_lowercase();
    WORDY_PHRASES
        .iter()
        .filter(|(wordy, _)| contains_phrase(&lowered, wordy))
        .map(|(wordy, concise)| {
            OptimizationIssue::new(
                IssueKind::Clarity,
                Severity::Suggestion,
                "Simplify wordy phrase",
                *wordy,
            )
            .with_suggestion(*concise)
        })
        .collect()
}

/// Flag sentences leaning on three or more weak verbs.
pub fn detect_weak_verbs(text: &str) -> Vec<OptimizationIssue> {
    split_guarded(text)
        .into_iter()
        .filter_map(|sentence| {
            let weak = sentence
                .split_whitespace()
                .filter(|token| WEAK_VERBS.contains(&token.to_lowercase().as_str()))
                .count();
            (weak >= WEAK_VERB_THRESHOLD).then(|| {
                OptimizationIssue::new(
                    IssueKind::Style,
                    Severity::Suggestion,
                    format!("Consider using stronger verbs (found {weak} weak verbs)"),
                    truncate_with_ellipsis(&sentence, WEAK_VERB_EXCERPT_CHARS),
                )
            })
        })
        .collect()
}

/// One issue per passive sentence.
pub fn detect_passive_voice(text: &str) -> Vec<OptimizationIssue> {
    split_guarded(text)
        .into_iter()
        .filter(|sentence| is_passive_voice(sentence))
        .map(|sentence| {
            OptimizationIssue::new(
                IssueKind::Voice,
                Severity::Suggestion,
                "Consider using active voice",
                truncate_with_ellipsis(&sentence, PASSIVE_EXCERPT_CHARS),
            )
        })
        .collect()
}

/// Warn when the measured grade level exceeds the target.
pub fn detect_grade_level(
    metrics: &ReadabilityMetrics,
    target_grade_level: f64,
) -> Option<OptimizationIssue> {
    (metrics.flesch_kincaid_grade > target_grade_level).then(|| {
        OptimizationIssue::new(
            IssueKind::Clarity,
            Severity::Warning,
            format!(
                "Reading level ({:.1}) exceeds target ({})",
                metrics.flesch_kincaid_grade, target_grade_level
            ),
            "",
        )
    })
}
