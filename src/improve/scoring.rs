// Lightweight scoring used on every loop iteration
//
// Clarity and grammar are cheap local heuristics; argument strength is the
// structure scorer's overall score on the same text.

use super::types::ImprovementScores;
use crate::structure::score_structure;
use crate::text::split_tolerant;

const IDEAL_SENTENCE_MIN: f64 = 15.0;
const IDEAL_SENTENCE_MAX: f64 = 22.0;
const MAX_VARIANCE_PENALTY: f64 = 20.0;

/// Clarity when there is nothing to measure.
const EMPTY_CLARITY: f64 = 40.0;
/// Grammar when there is nothing to measure.
const EMPTY_GRAMMAR: f64 = 45.0;

const GRAMMAR_BASE: f64 = 98.0;
const DOUBLE_SPACE_PENALTY: f64 = 3.0;
const SENTENCE_PENALTY: f64 = 4.0;

const CLARITY_WEIGHT: f64 = 0.35;
const GRAMMAR_WEIGHT: f64 = 0.25;
const STRUCTURE_WEIGHT: f64 = 0.40;

/// One decimal place, ties to even.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Score a version of the text.
pub fn score_text(text: &str) -> ImprovementScores {
    let clarity = clarity_score(text);
    let grammar = grammar_score(text);
    let structure = score_structure(text).overall_score;

    ImprovementScores {
        clarity: round1(clarity),
        grammar: round1(grammar),
        argument_strength: round1(structure),
        overall: round1(
            clarity * CLARITY_WEIGHT + grammar * GRAMMAR_WEIGHT + structure * STRUCTURE_WEIGHT,
        ),
    }
}

/// Sentence-length clarity: mean length near 15-22 words, low variance.
pub fn clarity_score(text: &str) -> f64 {
    let lengths: Vec<f64> = split_tolerant(text)
        .iter()
        .map(|s| s.split_whitespace().count())
        .filter(|&n| n > 0)
        .map(|n| n as f64)
        .collect();

    if lengths.is_empty() {
        return EMPTY_CLARITY;
    }

    let count = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / count;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / count;

    let length_penalty = if mean < IDEAL_SENTENCE_MIN {
        (IDEAL_SENTENCE_MIN - mean) * 2.0
    } else if mean > IDEAL_SENTENCE_MAX {
        (mean - IDEAL_SENTENCE_MAX) * 2.0
    } else {
        0.0
    };
    let variance_penalty = (variance / 3.0).min(MAX_VARIANCE_PENALTY);

    (100.0 - length_penalty - variance_penalty).clamp(5.0, 100.0)
}

/// Surface grammar: doubled spaces, lowercase starts, missing terminators.
pub fn grammar_score(text: &str) -> f64 {
    let sentences = split_tolerant(text);
    if sentences.is_empty() {
        return EMPTY_GRAMMAR;
    }

    let mut penalty = text.matches("  ").count() as f64 * DOUBLE_SPACE_PENALTY;
    for sentence in &sentences {
        if !sentence.chars().next().is_some_and(char::is_uppercase) {
            penalty += SENTENCE_PENALTY;
        }
        if !sentence.ends_with(['.', '!', '?']) {
            penalty += SENTENCE_PENALTY;
        }
    }

    (GRAMMAR_BASE - penalty).clamp(5.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(71.26), 71.3);
        assert_eq!(round1(40.0), 40.0);
        assert_eq!(round1(25.25), 25.2);
        assert_eq!(round1(0.75), 0.8);
    }

    #[test]
    fn test_empty_text_floors() {
        assert_eq!(clarity_score(""), EMPTY_CLARITY);
        assert_eq!(grammar_score(""), EMPTY_GRAMMAR);

        let scores = score_text("");
        assert_eq!(scores.argument_strength, 0.0);
        // 40 * 0.35 + 45 * 0.25 = 25.25 before rounding
        assert_eq!(scores.overall, 25.2);
    }

    #[test]
    fn test_clarity_ideal_uniform_sentences() {
        let sentence = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen.";
        let text = format!("{sentence} {sentence}");
        assert_eq!(clarity_score(&text), 100.0);
    }

    #[test]
    fn test_clarity_short_sentences_penalized() {
        // mean 5 words: 2 * (15 - 5) = 20
        let text = "One two three four five. Six seven eight nine ten.";
        assert_eq!(clarity_score(text), 80.0);
    }

    #[test]
    fn test_clarity_variance_penalty_capped() {
        let long = vec!["word"; 60].join(" ");
        let text = format!("Tiny. {long}.");
        // mean 30.5, variance 870.25 -> penalties 17 + 20
        assert_eq!(clarity_score(&text), 63.0);
    }

    #[test]
    fn test_grammar_penalties() {
        assert_eq!(grammar_score("A clean sentence."), 98.0);
        assert_eq!(grammar_score("lowercase start."), 94.0);
        assert_eq!(grammar_score("lowercase and unterminated"), 90.0);
        assert_eq!(grammar_score("Double  spaced here."), 95.0);
    }

    #[test]
    fn test_overall_blend() {
        let scores = score_text("A clean sentence.");
        let expected = round1(
            clarity_score("A clean sentence.") * 0.35 + 98.0 * 0.25 + scores.argument_strength * 0.40,
        );
        assert_eq!(scores.overall, expected);
        assert_eq!(scores.grammar, 98.0);
    }
}
