// Style and readability optimization
//
// Readability metrics (Flesch Reading Ease, Flesch-Kincaid grade), independent
// issue detectors (clichés, wordy phrases, weak verbs, passive voice, grade
// level, optional model-backed review) and mechanical auto-fixes.

pub mod ai_check;
pub mod detectors;
pub mod fixes;
pub mod optimizer;
pub mod readability;
pub mod types;

pub use optimizer::StyleOptimizer;
pub use readability::{calculate_readability, count_syllables, is_passive_voice};
pub use types::{
    IssueKind, OptimizationIssue, OptimizationReport, OptimizeOptions, ReadabilityMetrics,
    Severity,
};
