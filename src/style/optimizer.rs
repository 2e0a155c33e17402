// StyleOptimizer: readability metrics, issue detection and optional auto-fix

use std::sync::Arc;

use super::ai_check::ai_grammar_check;
use super::detectors::{
    detect_cliches, detect_grade_level, detect_passive_voice, detect_weak_verbs,
    detect_wordy_phrases,
};
use super::fixes::apply_fixes;
use super::readability::calculate_readability;
use super::types::{OptimizationReport, OptimizeOptions};
use crate::providers::{null_generator, TextGenerator};

/// Readability and style analysis.
///
/// The heuristic detectors always run; when the generator is available its
/// grammar review is appended after them.
pub struct StyleOptimizer {
    generator: Arc<dyn TextGenerator>,
}

impl StyleOptimizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Optimizer with no model-backed review
    pub fn heuristic() -> Self {
        Self::new(null_generator())
    }

    pub async fn optimize(&self, text: &str, options: &OptimizeOptions) -> OptimizationReport {
        let metrics = calculate_readability(text);

        let mut issues = detect_cliches(text);
        issues.extend(detect_wordy_phrases(text));
        issues.extend(detect_weak_verbs(text));

        if options.prefer_active_voice {
            issues.extend(detect_passive_voice(text));
        }

        if let Some(target) = options.target_grade_level {
            issues.extend(detect_grade_level(&metrics, target));
        }

        if self.generator.is_available() {
            issues.extend(ai_grammar_check(self.generator.as_ref(), text).await);
        }

        tracing::debug!(
            "Style pass found {} issue(s), grade {:.1}",
            issues.len(),
            metrics.flesch_kincaid_grade
        );

        let (optimized_text, improvements_applied) = if options.apply_fixes {
            let (optimized, applied) = apply_fixes(text, &issues);
            (Some(optimized), applied)
        } else {
            (None, 0)
        };

        OptimizationReport {
            issues,
            metrics,
            optimized_text,
            improvements_applied,
        }
    }
}

impl Default for StyleOptimizer {
    fn default() -> Self {
        Self::heuristic()
    }
}
