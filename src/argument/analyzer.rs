// Argument analyzer: thesis and claims, fallacies, overall strength

use std::sync::Arc;

use super::parse::{
    parse_evaluation_reply, parse_fallacy_reply, parse_structure_reply, ArgumentStructure,
};
use super::types::{ArgumentAnalysis, Evaluation, Fallacy};
use crate::providers::{null_generator, TextGenerator};

const NO_TEXT_CRITIQUE: &str = "No text provided.";
const NO_MODEL_CRITIQUE: &str = "A text generator is required for argument analysis.";
const NO_EVALUATION_CRITIQUE: &str = "Could not evaluate.";

/// Reply marker for an essay without fallacies.
const NO_FALLACIES_SENTINEL: &str = "no fallacies found";

/// Judges the argumentation of an essay.
///
/// All judgement is delegated to the text generator in three requests:
/// structure (thesis and claims), fallacies, and an overall 0-10 evaluation.
/// There is no heuristic fallback; without an available generator the
/// analysis is empty and its critique says why. A failed request empties
/// only its own part of the analysis.
pub struct ArgumentAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl ArgumentAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn analyze(&self, text: &str) -> ArgumentAnalysis {
        if text.trim().is_empty() {
            return ArgumentAnalysis::empty(NO_TEXT_CRITIQUE);
        }
        if !self.generator.is_available() {
            tracing::warn!("No text generator available for argument analysis");
            return ArgumentAnalysis::empty(NO_MODEL_CRITIQUE);
        }

        let structure = self.extract_structure(text).await;
        let fallacies = self.detect_fallacies(text).await;
        let evaluation = self.evaluate(text).await;

        tracing::debug!(
            "Argument analysis: {} claim(s), {} fallacy(ies), strength {:.1}",
            structure.claims.len(),
            fallacies.len(),
            evaluation.score
        );

        ArgumentAnalysis {
            thesis: structure.thesis,
            claims: structure.claims,
            fallacies,
            overall_strength: evaluation.score,
            critique: evaluation.critique,
            suggestions: evaluation.suggestions,
        }
    }

    /// Send one request; failures and empty replies yield `None`.
    async fn request(&self, purpose: &str, prompt: &str) -> Option<String> {
        match self.generator.call(prompt).await {
            Ok(reply) if !reply.trim().is_empty() => Some(reply),
            Ok(_) => {
                tracing::warn!("Argument {} returned an empty reply", purpose);
                None
            }
            Err(e) => {
                tracing::warn!("Argument {} failed: {}", purpose, e);
                None
            }
        }
    }

    async fn extract_structure(&self, text: &str) -> ArgumentStructure {
        self.request("structure extraction", &structure_prompt(text))
            .await
            .map(|reply| parse_structure_reply(&reply))
            .unwrap_or_default()
    }

    async fn detect_fallacies(&self, text: &str) -> Vec<Fallacy> {
        match self.request("fallacy detection", &fallacy_prompt(text)).await {
            Some(reply) if reply.to_lowercase().contains(NO_FALLACIES_SENTINEL) => Vec::new(),
            Some(reply) => parse_fallacy_reply(&reply),
            None => Vec::new(),
        }
    }

    async fn evaluate(&self, text: &str) -> Evaluation {
        match self.request("evaluation", &evaluation_prompt(text)).await {
            Some(reply) => parse_evaluation_reply(&reply),
            None => Evaluation {
                critique: NO_EVALUATION_CRITIQUE.to_string(),
                ..Evaluation::default()
            },
        }
    }
}

impl Default for ArgumentAnalyzer {
    fn default() -> Self {
        Self::new(null_generator())
    }
}

fn structure_prompt(text: &str) -> String {
    format!(
        "Analyze the argument structure of the following text. \
         Identify the main thesis statement and the key supporting claims. \
         For each claim, assess its strength (strong/moderate/weak) and identify any evidence used.\n\n\
         Format your response exactly as follows:\n\
         Thesis: the main thesis statement\n\n\
         Claim 1: claim text\n\
         Type: supporting or counter\n\
         Strength: strong, moderate or weak\n\
         Evidence: brief description of the evidence, or None\n\
         Explanation: why the claim is strong or weak\n\n\
         Claim 2: ...\n\n\
         Text:\n{text}"
    )
}

fn fallacy_prompt(text: &str) -> String {
    format!(
        "Identify any logical fallacies in the following text. \
         Look for common fallacies such as Ad Hominem, Straw Man, Slippery Slope, \
         Circular Reasoning and Hasty Generalization. \
         If no fallacies are found, reply with 'No fallacies found.'\n\n\
         Format each fallacy as:\n\
         Fallacy: name of the fallacy\n\
         Text: the passage containing the fallacy\n\
         Explanation: why this is a fallacy\n\n\
         Text:\n{text}"
    )
}

fn evaluation_prompt(text: &str) -> String {
    format!(
        "Evaluate the overall strength of the argument in the following text on a scale of 1-10. \
         Consider the clarity of the thesis, the strength of supporting claims, \
         and the presence of any logical fallacies. \
         Provide a brief critique and 3 specific suggestions for improvement.\n\n\
         Format:\n\
         Score: 1-10\n\
         Critique: one paragraph\n\
         Suggestions:\n\
         1. first suggestion\n\
         2. second suggestion\n\
         3. third suggestion\n\n\
         Text:\n{text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::GenerationError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replies in order; runs dry with an error.
    struct QueuedGenerator {
        replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    }

    impl QueuedGenerator {
        fn new(replies: Vec<Result<&str, GenerationError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into_iter().map(|r| r.map(String::from)).collect()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for QueuedGenerator {
        async fn call(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::EmptyResponse))
        }

        fn model_id(&self) -> &str {
            "queued"
        }
    }

    #[tokio::test]
    async fn test_empty_text() {
        let generator = QueuedGenerator::new(vec![Ok("Thesis: unused")]);
        let analysis = ArgumentAnalyzer::new(generator).analyze("  \n ").await;
        assert_eq!(analysis, ArgumentAnalysis::empty(NO_TEXT_CRITIQUE));
    }

    #[tokio::test]
    async fn test_without_generator() {
        let analysis = ArgumentAnalyzer::default().analyze("Dogs are loyal.").await;
        assert_eq!(analysis, ArgumentAnalysis::empty(NO_MODEL_CRITIQUE));
    }

    #[tokio::test]
    async fn test_combines_three_replies() {
        let generator = QueuedGenerator::new(vec![
            Ok("Thesis: Dogs make good pets.\n\nClaim 1: Dogs are loyal\nStrength: strong"),
            Ok("No fallacies found."),
            Ok("Score: 6\nCritique: Needs evidence.\nSuggestions:\n1. Add examples"),
        ]);
        let analysis = ArgumentAnalyzer::new(generator).analyze("Dogs are loyal.").await;

        assert_eq!(analysis.thesis.as_deref(), Some("Dogs make good pets."));
        assert_eq!(analysis.claims.len(), 1);
        assert!(analysis.fallacies.is_empty());
        assert_eq!(analysis.overall_strength, 6.0);
        assert_eq!(analysis.critique, "Needs evidence.");
        assert_eq!(analysis.suggestions, vec!["Add examples".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_requests_degrade_independently() {
        let generator = QueuedGenerator::new(vec![
            Err(GenerationError::Unavailable),
            Ok("Fallacy: Straw Man\nText: They want chaos\nExplanation: Misstates the view"),
            Ok("   "),
        ]);
        let analysis = ArgumentAnalyzer::new(generator).analyze("Some argument.").await;

        assert!(analysis.thesis.is_none());
        assert!(analysis.claims.is_empty());
        assert_eq!(analysis.fallacies.len(), 1);
        assert_eq!(analysis.fallacies[0].name, "Straw Man");
        assert_eq!(analysis.overall_strength, 0.0);
        assert_eq!(analysis.critique, NO_EVALUATION_CRITIQUE);
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_prompts_embed_text() {
        for prompt in [
            structure_prompt("ESSAY"),
            fallacy_prompt("ESSAY"),
            evaluation_prompt("ESSAY"),
        ] {
            assert!(prompt.ends_with("Text:\nESSAY"));
        }
        assert!(fallacy_prompt("x").contains("No fallacies found."));
    }
}
