// Marker phrase lists for introduction, conclusion and transition detection
//
// All matching is plain substring containment against lowercased text.

/// Phrases that mark a first paragraph as an introduction.
pub const INTRODUCTION_MARKERS: &[&str] = &[
    "this essay",
    "this paper",
    "will discuss",
    "will explore",
    "will examine",
    "in this",
    "purpose of this",
];

/// Phrases that mark a last paragraph as a conclusion.
pub const CONCLUSION_MARKERS: &[&str] = &[
    "in conclusion",
    "to conclude",
    "in summary",
    "to summarize",
    "ultimately",
    "in the end",
    "therefore",
    "thus",
];

/// Connectives looked for in the opening sentence of each non-first paragraph.
pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "moreover",
    "furthermore",
    "additionally",
    "nevertheless",
    "consequently",
    "therefore",
    "thus",
    "meanwhile",
    "similarly",
    "in contrast",
    "on the other hand",
    "for example",
    "for instance",
];

/// Minimum words for a first paragraph to count as an introduction.
pub const INTRODUCTION_MIN_WORDS: usize = 30;

/// Minimum words for a last paragraph to count as a conclusion.
pub const CONCLUSION_MIN_WORDS: usize = 20;

/// Body paragraphs below this word count are flagged as too short.
pub const BODY_MIN_WORDS: usize = 50;

/// Body paragraphs above this word count are flagged as too long.
pub const BODY_MAX_WORDS: usize = 250;

/// A topic sentence needs more than this many words.
pub const TOPIC_SENTENCE_MIN_WORDS: usize = 8;

/// Sentinel a model returns when it finds no thesis.
pub const NO_THESIS_SENTINEL: &str = "NO_THESIS";

pub fn contains_any(lowercased: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| lowercased.contains(marker))
}
