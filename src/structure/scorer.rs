// Structure scorer: paragraph roles, thesis detection, transitions, score

use std::sync::Arc;

use super::markers::*;
use super::types::{ParagraphRecord, Strength, StructureReport, ThesisLocation};
use crate::providers::{null_generator, TextGenerator};
use crate::text::{paragraphs, period_segments, word_count};

const INTRODUCTION_POINTS: f64 = 20.0;
const CONCLUSION_POINTS: f64 = 15.0;
const THESIS_POINTS: f64 = 25.0;
const BODY_POINTS: f64 = 30.0;

/// Characters of essay text sent along with the thesis prompt.
const THESIS_PROMPT_CHARS: usize = 1000;

/// Scores essay structure on a 0-100 scale.
///
/// With an available text generator the thesis is extracted by the model;
/// otherwise the last sentence of the introduction stands in for it.
/// Generator failures degrade to "no thesis", never to an error.
pub struct StructureScorer {
    generator: Arc<dyn TextGenerator>,
}

impl StructureScorer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Scorer that never consults a model.
    pub fn heuristic() -> Self {
        Self::new(null_generator())
    }

    /// Analyze essay structure.
    pub async fn analyze(&self, text: &str) -> StructureReport {
        let paragraphs = paragraphs(text);
        if paragraphs.is_empty() {
            return StructureReport::empty();
        }

        let layout = Layout::detect(&paragraphs);
        let (thesis, location) = if self.generator.is_available() {
            self.extract_thesis(&paragraphs, layout.has_conclusion).await
        } else {
            heuristic_thesis(&paragraphs, layout.has_introduction)
        };

        build_report(&paragraphs, layout, thesis, location)
    }

    /// Ask the model for the literal thesis sentence.
    async fn extract_thesis(
        &self,
        paragraphs: &[&str],
        has_conclusion: bool,
    ) -> (Option<String>, ThesisLocation) {
        let excerpt: String = paragraphs
            .iter()
            .take(3)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(THESIS_PROMPT_CHARS)
            .collect();

        let prompt = format!(
            "Identify the thesis statement in the following essay. \
             Return ONLY the thesis statement, nothing else. \
             If there is no clear thesis, return '{NO_THESIS_SENTINEL}'.\n\n\
             Essay:\n{excerpt}..."
        );

        let response = match self.generator.call(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Thesis extraction failed, treating thesis as missing: {}", e);
                return (None, ThesisLocation::Missing);
            }
        };

        let thesis = response.trim();
        if thesis.is_empty() || thesis == NO_THESIS_SENTINEL {
            return (None, ThesisLocation::Missing);
        }

        let location = locate_thesis(thesis, paragraphs, has_conclusion);
        (Some(thesis.to_string()), location)
    }
}

impl Default for StructureScorer {
    fn default() -> Self {
        Self::heuristic()
    }
}

/// Heuristic-only structure analysis.
///
/// Equivalent to `StructureScorer::heuristic().analyze(text)` without the
/// async machinery; the improvement loop scores through this on every cycle.
pub fn score_structure(text: &str) -> StructureReport {
    let paragraphs = paragraphs(text);
    if paragraphs.is_empty() {
        return StructureReport::empty();
    }

    let layout = Layout::detect(&paragraphs);
    let (thesis, location) = heuristic_thesis(&paragraphs, layout.has_introduction);
    build_report(&paragraphs, layout, thesis, location)
}

// ── Paragraph roles ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Layout {
    has_introduction: bool,
    has_conclusion: bool,
}

impl Layout {
    fn detect(paragraphs: &[&str]) -> Self {
        let has_introduction = paragraphs
            .first()
            .is_some_and(|first| detect_introduction(first));
        let has_conclusion = paragraphs.len() > 1
            && paragraphs
                .last()
                .is_some_and(|last| detect_conclusion(last));

        Self {
            has_introduction,
            has_conclusion,
        }
    }

    /// Half-open range of body paragraph indices.
    fn body_range(&self, paragraph_count: usize) -> (usize, usize) {
        let start = usize::from(self.has_introduction);
        let end = paragraph_count.saturating_sub(usize::from(self.has_conclusion));
        (start, end.max(start))
    }
}

fn detect_introduction(paragraph: &str) -> bool {
    word_count(paragraph) >= INTRODUCTION_MIN_WORDS
        && contains_any(&paragraph.to_lowercase(), INTRODUCTION_MARKERS)
}

fn detect_conclusion(paragraph: &str) -> bool {
    word_count(paragraph) >= CONCLUSION_MIN_WORDS
        && contains_any(&paragraph.to_lowercase(), CONCLUSION_MARKERS)
}

// ── Thesis ─────────────────────────────────────────────────────────────────────

/// Second-to-last period segment of the introduction.
///
/// For an introduction ending in a period this is its final sentence.
fn heuristic_thesis(paragraphs: &[&str], has_introduction: bool) -> (Option<String>, ThesisLocation) {
    if !has_introduction {
        return (None, ThesisLocation::Missing);
    }

    let segments = period_segments(paragraphs[0]);
    if segments.len() < 2 {
        return (None, ThesisLocation::Missing);
    }

    let thesis = format!("{}.", segments[segments.len() - 2].trim());
    (Some(thesis), ThesisLocation::Introduction)
}

/// Literal, case-insensitive containment; a paraphrased thesis lands in "body".
fn locate_thesis(thesis: &str, paragraphs: &[&str], has_conclusion: bool) -> ThesisLocation {
    let needle = thesis.to_lowercase();
    if paragraphs[0].to_lowercase().contains(&needle) {
        ThesisLocation::Introduction
    } else if has_conclusion
        && paragraphs
            .last()
            .is_some_and(|last| last.to_lowercase().contains(&needle))
    {
        ThesisLocation::Conclusion
    } else {
        ThesisLocation::Body
    }
}

// ── Per-paragraph analysis ─────────────────────────────────────────────────────

fn analyze_paragraph(ordinal: usize, paragraph: &str, is_body: bool) -> ParagraphRecord {
    let words = word_count(paragraph);
    let segments = period_segments(paragraph);
    let topic_sentence = format!("{}.", segments[0].trim());

    let mut has_topic_sentence = false;
    let mut strength = Strength::Weak;
    let mut issues = Vec::new();

    if is_body {
        if words < BODY_MIN_WORDS {
            issues.push(format!("Too short (under {BODY_MIN_WORDS} words)"));
            strength = Strength::Weak;
        } else if words > BODY_MAX_WORDS {
            issues.push(format!("Too long (over {BODY_MAX_WORDS} words)"));
            strength = Strength::Moderate;
        } else {
            strength = Strength::Moderate;
        }

        if word_count(&topic_sentence) > TOPIC_SENTENCE_MIN_WORDS {
            has_topic_sentence = true;
            if segments.len() > 3 {
                strength = Strength::Strong;
            }
        } else {
            issues.push("Weak or missing topic sentence".to_string());
        }
    }

    ParagraphRecord {
        ordinal,
        word_count: words,
        is_body,
        has_topic_sentence,
        topic_sentence: Some(topic_sentence),
        strength,
        issues,
    }
}

// ── Transitions ────────────────────────────────────────────────────────────────

fn assess_transitions(paragraphs: &[&str]) -> Strength {
    if paragraphs.len() < 2 {
        return Strength::Weak;
    }

    let transitions = paragraphs[1..]
        .iter()
        .filter(|para| {
            let opening = period_segments(para)[0].to_lowercase();
            contains_any(&opening, TRANSITION_WORDS)
        })
        .count();

    let ratio = transitions as f64 / (paragraphs.len() - 1) as f64;
    if ratio >= 0.6 {
        Strength::Strong
    } else if ratio >= 0.3 {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}

// ── Report assembly ────────────────────────────────────────────────────────────

fn build_report(
    paragraphs: &[&str],
    layout: Layout,
    thesis: Option<String>,
    thesis_location: ThesisLocation,
) -> StructureReport {
    let (body_start, body_end) = layout.body_range(paragraphs.len());

    let records: Vec<ParagraphRecord> = paragraphs
        .iter()
        .enumerate()
        .map(|(i, para)| analyze_paragraph(i + 1, para, body_start <= i && i < body_end))
        .collect();

    let transition_quality = assess_transitions(paragraphs);
    let recommendations = recommendations(layout, thesis.is_some(), &records, transition_quality);
    let overall_score = compute_score(layout, thesis.is_some(), &records, transition_quality);

    StructureReport {
        has_introduction: layout.has_introduction,
        has_conclusion: layout.has_conclusion,
        thesis,
        thesis_location,
        paragraph_count: paragraphs.len(),
        body_paragraph_count: body_end - body_start,
        total_word_count: paragraphs.iter().map(|p| word_count(p)).sum(),
        paragraphs: records,
        transition_quality,
        overall_score,
        recommendations,
    }
}

fn recommendations(
    layout: Layout,
    has_thesis: bool,
    records: &[ParagraphRecord],
    transitions: Strength,
) -> Vec<String> {
    let mut recs = Vec::new();

    if !layout.has_introduction {
        recs.push("Add a clear introduction paragraph".to_string());
    }
    if !layout.has_conclusion {
        recs.push("Add a conclusion to summarize your argument".to_string());
    }
    if !has_thesis {
        recs.push("Include a clear thesis statement".to_string());
    }

    let body: Vec<&ParagraphRecord> = records.iter().filter(|p| p.is_body).collect();

    let weak = body.iter().filter(|p| p.strength == Strength::Weak).count();
    if weak > 0 {
        recs.push(format!("Strengthen {weak} weak body paragraph(s)"));
    }

    let missing_topics = body
        .iter()
        .filter(|p| !p.has_topic_sentence && !p.issues.is_empty())
        .count();
    if missing_topics > 0 {
        recs.push(format!(
            "Add clear topic sentences to {missing_topics} paragraph(s)"
        ));
    }

    match transitions {
        Strength::Weak => recs.push("Improve transitions between paragraphs".to_string()),
        Strength::Moderate => recs.push("Consider adding more transition words".to_string()),
        Strength::Strong => {}
    }

    if recs.is_empty() {
        recs.push("Essay structure looks good! Consider minor polish.".to_string());
    }

    recs
}

fn compute_score(
    layout: Layout,
    has_thesis: bool,
    records: &[ParagraphRecord],
    transitions: Strength,
) -> f64 {
    let mut score = 0.0;

    if layout.has_introduction {
        score += INTRODUCTION_POINTS;
    }
    if layout.has_conclusion {
        score += CONCLUSION_POINTS;
    }
    if has_thesis {
        score += THESIS_POINTS;
    }

    let body: Vec<&ParagraphRecord> = records.iter().filter(|p| p.is_body).collect();
    if !body.is_empty() {
        let weighted: f64 = body.iter().map(|p| p.strength.body_weight()).sum();
        score += weighted / body.len() as f64 * BODY_POINTS;
    }

    score += transitions.transition_points();

    score.min(100.0)
}
