// Iterative essay improvement
//
// Rewrites a text (through the configured model, or a deterministic cleanup
// pass) and rescores it until it reaches a target, plateaus or runs out of
// cycles. Scoring blends sentence-length clarity, surface grammar and the
// structure score.

pub mod loop_runner;
pub mod rewrite;
pub mod scoring;
pub mod types;

pub use loop_runner::ImprovementLoop;
pub use rewrite::heuristic_rewrite;
pub use scoring::{clarity_score, grammar_score, score_text};
pub use types::{
    ImprovementResult, ImprovementScores, ImprovementStep, ProgressNotifier, StopReason,
};
