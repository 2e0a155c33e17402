// Rewrite strategies: model-backed revision and deterministic cleanup

use crate::text::{capitalize_first, paragraphs, split_tolerant};

/// Sentences longer than this are split in two.
const RUN_ON_WORDS: usize = 30;

pub(crate) fn rewrite_prompt(text: &str) -> String {
    format!(
        "Improve the following essay for clarity, grammar, and argument strength. \
         Preserve the original meaning and paragraph boundaries. \
         Return ONLY the improved essay text.\n\n{text}"
    )
}

/// Offline cleanup pass.
///
/// Splits run-on sentences at their midpoint word, guarantees every sentence
/// starts uppercase and ends with terminal punctuation, and normalizes
/// whitespace. Paragraph boundaries are kept.
pub fn heuristic_rewrite(text: &str) -> String {
    let trimmed = text.trim();
    let blocks = paragraphs(trimmed);
    if blocks.is_empty() {
        return trimmed.to_string();
    }

    let rewritten: Vec<String> = blocks
        .into_iter()
        .map(rewrite_paragraph)
        .filter(|p| !p.is_empty())
        .collect();

    if rewritten.is_empty() {
        return trimmed.to_string();
    }
    rewritten.join("\n\n")
}

fn rewrite_paragraph(paragraph: &str) -> String {
    split_tolerant(paragraph)
        .iter()
        .flat_map(|sentence| split_run_on(sentence))
        .filter_map(|chunk| normalize_sentence(&chunk))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_run_on(sentence: &str) -> Vec<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= RUN_ON_WORDS {
        return vec![words.join(" ")];
    }
    let midpoint = words.len() / 2;
    vec![words[..midpoint].join(" "), words[midpoint..].join(" ")]
}

fn normalize_sentence(chunk: &str) -> Option<String> {
    let chunk = chunk.trim();
    if chunk.is_empty() {
        return None;
    }

    let mut sentence = if chunk.ends_with(['.', '!', '?']) {
        chunk.to_string()
    } else {
        let stripped = chunk.trim_end_matches([',', ';', ':']).trim_end();
        if stripped.is_empty() {
            return None;
        }
        format!("{stripped}.")
    };
    sentence = capitalize_first(&sentence);
    Some(sentence)
}
