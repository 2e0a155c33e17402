// Readability metrics (Flesch scores, syllables, passive voice)

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::ReadabilityMetrics;
use crate::text::split_guarded;

/// Words longer than this many characters count as complex.
const COMPLEX_WORD_CHARS: usize = 10;

static PASSIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(is|are|was|were|be|been|being)\s+\w+(ed|en)\b").unwrap());

/// Approximate syllable count for a word.
///
/// Counts runs of vowels, drops one for a trailing silent "e", and never
/// returns less than one.
pub fn count_syllables(word: &str) -> usize {
    let word = word
        .to_lowercase()
        .trim_matches(['.', ',', '!', '?', ';', ':'])
        .to_string();

    let mut count: usize = 0;
    let mut previous_was_vowel = false;
    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// A to-be auxiliary immediately followed by a word ending in "ed" or "en".
pub fn is_passive_voice(sentence: &str) -> bool {
    PASSIVE_RE.is_match(&sentence.to_lowercase())
}

/// Share of passive sentences, 0-100.
pub fn passive_percentage(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let passive = sentences.iter().filter(|s| is_passive_voice(s)).count();
    passive as f64 / sentences.len() as f64 * 100.0
}

/// Compute readability metrics for `text`.
///
/// Empty input (no words or no sentences) yields all-zero metrics.
pub fn calculate_readability(text: &str) -> ReadabilityMetrics {
    let sentences = split_guarded(text);
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences.is_empty() || words.is_empty() {
        return ReadabilityMetrics::default();
    }

    let word_total = words.len() as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let avg_sentence_length = word_total / sentences.len() as f64;
    let avg_syllables_per_word = syllables as f64 / word_total;

    let reading_ease = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
    let grade = 0.39 * avg_sentence_length + 11.8 * avg_syllables_per_word - 15.59;

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    ReadabilityMetrics {
        flesch_reading_ease: reading_ease.clamp(0.0, 100.0),
        flesch_kincaid_grade: grade.max(0.0),
        avg_sentence_length,
        avg_word_length: total_chars as f64 / word_total,
        passive_voice_percentage: passive_percentage(&sentences),
        total_sentences: sentences.len(),
        total_words: words.len(),
        complex_word_count: words
            .iter()
            .filter(|w| w.chars().count() > COMPLEX_WORD_CHARS)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_counts() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("education"), 4);
    }

    #[test]
    fn test_syllables_silent_e_and_floor() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("Hello!"), 2);
    }

    #[test]
    fn test_passive_voice() {
        assert!(is_passive_voice("The ball was kicked by the boy."));
        assert!(is_passive_voice("The letters were written in haste."));
        assert!(!is_passive_voice("The boy kicked the ball."));
    }

    #[test]
    fn test_simple_text_clamps_scores() {
        let metrics = calculate_readability("The cat sat on the mat.");
        assert_eq!(metrics.total_sentences, 1);
        assert_eq!(metrics.total_words, 6);
        assert_eq!(metrics.flesch_reading_ease, 100.0);
        assert_eq!(metrics.flesch_kincaid_grade, 0.0);
        assert_eq!(metrics.complex_word_count, 0);
    }

    #[test]
    fn test_complex_text_reads_harder() {
        let simple = calculate_readability("The dog ran. The cat sat. We all had fun.");
        let complex = calculate_readability(
            "Notwithstanding considerable institutional opposition, the administration \
             systematically implemented comprehensive organizational restructuring initiatives \
             throughout multiple interdependent departments.",
        );
        assert!(complex.flesch_reading_ease < simple.flesch_reading_ease);
        assert!(complex.flesch_kincaid_grade > simple.flesch_kincaid_grade);
        assert!(complex.complex_word_count > 0);
    }

    #[test]
    fn test_passive_percentage() {
        let metrics = calculate_readability("The cake was baked. We ate it.");
        assert_eq!(metrics.total_sentences, 2);
        assert!((metrics.passive_voice_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(calculate_readability(""), ReadabilityMetrics::default());
        assert_eq!(calculate_readability("   "), ReadabilityMetrics::default());
    }

    #[test]
    fn test_scores_stay_in_range() {
        let samples = [
            "a",
            "Supercalifragilisticexpialidocious antidisestablishmentarianism.",
            "I go. You go. We go. They go.",
            "No punctuation here at all but plenty of words to count",
        ];
        for sample in samples {
            let metrics = calculate_readability(sample);
            assert!((0.0..=100.0).contains(&metrics.flesch_reading_ease), "{sample}");
            assert!(metrics.flesch_kincaid_grade >= 0.0, "{sample}");
        }
    }
}
