// Improvement loop types: scores, steps, results, progress notification

use serde::Serialize;
use std::fmt;

/// Composite quality scores for one version of the text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImprovementScores {
    pub clarity: f64,
    pub grammar: f64,
    /// Structure scorer's overall score
    pub argument_strength: f64,
    /// Weighted blend, rounded to one decimal
    pub overall: f64,
}

/// One rewrite-and-rescore iteration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementStep {
    /// 1-based iteration number
    pub index: usize,
    pub text_before: String,
    pub text_after: String,
    pub scores_before: ImprovementScores,
    pub scores_after: ImprovementScores,
    /// Model identifier when the rewrite came from a text generator
    pub model_used: Option<String>,
}

impl ImprovementStep {
    /// Change in overall score produced by this step
    pub fn delta(&self) -> f64 {
        self.scores_after.overall - self.scores_before.overall
    }
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The input already met the target; nothing was rewritten
    AlreadyAtTarget,
    TargetReached,
    /// Two consecutive iterations without improvement
    Plateau,
    /// Ran out of iterations
    CycleLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AlreadyAtTarget => "already at target",
            Self::TargetReached => "target reached",
            Self::Plateau => "no further improvement",
            Self::CycleLimit => "cycle limit reached",
        };
        f.write_str(label)
    }
}

/// Outcome of `ImprovementLoop::improve`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementResult {
    pub steps: Vec<ImprovementStep>,
    pub final_text: String,
    pub final_scores: ImprovementScores,
    pub target_reached: bool,
    pub target_score: f64,
    pub stop_reason: StopReason,
}

/// Observer for loop progress, called once per iteration before its work.
pub trait ProgressNotifier: Send + Sync {
    fn notify(&self, iteration: usize, total: usize);
}

impl<F> ProgressNotifier for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn notify(&self, iteration: usize, total: usize) {
        self(iteration, total)
    }
}
