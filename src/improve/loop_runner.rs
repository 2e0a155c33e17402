// Improvement loop: bounded rewrite -> rescore cycles with plateau detection

use std::sync::Arc;

use super::rewrite::{heuristic_rewrite, rewrite_prompt};
use super::scoring::score_text;
use super::types::{ImprovementResult, ImprovementStep, ProgressNotifier, StopReason};
use crate::providers::{null_generator, TextGenerator};

/// Consecutive non-improving iterations that end the loop.
const PLATEAU_LIMIT: usize = 2;

/// Iteratively rewrites a text until it reaches a target score.
///
/// Stops when any of the following holds:
/// - the input already meets the target (no rewrite is attempted)
/// - a rewrite reaches the target
/// - two consecutive rewrites fail to raise the overall score
/// - `max(1, cycles)` iterations have run
pub struct ImprovementLoop {
    generator: Arc<dyn TextGenerator>,
}

impl ImprovementLoop {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Loop that only uses the deterministic rewrite
    pub fn heuristic() -> Self {
        Self::new(null_generator())
    }

    pub async fn improve(
        &self,
        text: &str,
        cycles: usize,
        target_score: f64,
        progress: Option<&dyn ProgressNotifier>,
    ) -> ImprovementResult {
        let mut current_text = text.trim().to_string();
        let mut current_scores = score_text(&current_text);

        if current_scores.overall >= target_score {
            tracing::info!(
                "Input already scores {:.1} (target {:.1}); skipping rewrite",
                current_scores.overall,
                target_score
            );
            return ImprovementResult {
                steps: Vec::new(),
                final_text: current_text,
                final_scores: current_scores,
                target_reached: true,
                target_score,
                stop_reason: StopReason::AlreadyAtTarget,
            };
        }

        let max_cycles = cycles.max(1);
        let mut steps: Vec<ImprovementStep> = Vec::with_capacity(max_cycles);
        let mut stalled = 0;
        let mut stop_reason = StopReason::CycleLimit;

        for index in 1..=max_cycles {
            if let Some(progress) = progress {
                progress.notify(index, max_cycles);
            }

            let scores_before = score_text(&current_text);
            let (revised, model_used) = self.rewrite(&current_text).await;
            let scores_after = score_text(&revised);

            tracing::debug!(
                "Cycle {}/{}: {:.1} -> {:.1}",
                index,
                max_cycles,
                scores_before.overall,
                scores_after.overall
            );

            steps.push(ImprovementStep {
                index,
                text_before: std::mem::replace(&mut current_text, revised.clone()),
                text_after: revised,
                scores_before,
                scores_after,
                model_used,
            });
            current_scores = scores_after;

            if scores_after.overall >= target_score {
                stop_reason = StopReason::TargetReached;
                break;
            }

            if scores_after.overall <= scores_before.overall {
                stalled += 1;
            } else {
                stalled = 0;
            }
            if stalled >= PLATEAU_LIMIT {
                stop_reason = StopReason::Plateau;
                break;
            }
        }

        tracing::info!(
            "Improvement stopped after {} cycle(s) at {:.1}: {}",
            steps.len(),
            current_scores.overall,
            stop_reason
        );

        ImprovementResult {
            steps,
            final_text: current_text,
            final_scores: current_scores,
            target_reached: current_scores.overall >= target_score,
            target_score,
            stop_reason,
        }
    }

    /// One rewrite pass, preferring the model and degrading to heuristics.
    async fn rewrite(&self, text: &str) -> (String, Option<String>) {
        if self.generator.is_available() {
            match self.generator.call(&rewrite_prompt(text)).await {
                Ok(reply) if !reply.trim().is_empty() => {
                    return (
                        reply.trim().to_string(),
                        Some(self.generator.model_id().to_string()),
                    );
                }
                Ok(_) => tracing::warn!("Model rewrite was empty, using heuristic fallback"),
                Err(e) => tracing::warn!("Model rewrite failed, using heuristic fallback: {}", e),
            }
        }
        (heuristic_rewrite(text), None)
    }
}

impl Default for ImprovementLoop {
    fn default() -> Self {
        Self::heuristic()
    }
}
