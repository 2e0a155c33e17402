// Argument analysis
//
// Model-delegated judgement of an essay's argumentation: the thesis and its
// claims, logical fallacies, and an overall 0-10 strength with critique and
// suggestions.

pub mod analyzer;
pub mod parse;
pub mod types;

pub use analyzer::ArgumentAnalyzer;
pub use parse::{parse_evaluation_reply, parse_fallacy_reply, parse_structure_reply};
pub use types::{ArgumentAnalysis, Claim, ClaimKind, Evaluation, Fallacy};
