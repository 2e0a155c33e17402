// Integration tests for argument analysis

mod common;

use std::sync::Arc;

use essay_engine::argument::{ArgumentAnalysis, ArgumentAnalyzer, ClaimKind};
use essay_engine::providers::GenerationError;
use essay_engine::structure::Strength;

use common::{ScriptedGenerator, ESSAY, THESIS};

fn structure_reply() -> String {
    format!(
        "Thesis: {THESIS}\n\n\
         Claim 1: Separated lanes reduce collisions\n\
         Type: supporting\n\
         Strength: strong\n\
         Evidence: Crash data from redesigned corridors\n\
         Explanation: Concrete before-and-after comparison\n\n\
         Claim 2: Drivers lose road space\n\
         Type: counter\n\
         Strength: weak\n\
         Evidence: None\n"
    )
}

const FALLACY_REPLY: &str = "Fallacy: Hasty Generalization\n\
                             Text: every city that builds them becomes healthier\n\
                             Explanation: Generalizes from a few examples";

const EVALUATION_REPLY: &str = "Score: 8/10\n\
                                Critique: A clear, well organized argument.\n\
                                Suggestions:\n\
                                1. Quantify the health benefits\n\
                                2. Answer the cost objection directly\n\
                                3. Cite sources for the crash data";

#[tokio::test]
async fn test_full_analysis_of_essay() {
    let generator = Arc::new(ScriptedGenerator::new(
        "test/model",
        vec![
            Ok(structure_reply()),
            Ok(FALLACY_REPLY.to_string()),
            Ok(EVALUATION_REPLY.to_string()),
        ],
    ));
    let analysis = ArgumentAnalyzer::new(generator.clone()).analyze(ESSAY).await;

    assert_eq!(analysis.thesis.as_deref(), Some(THESIS));
    assert_eq!(analysis.claims.len(), 2);
    assert_eq!(analysis.claims[0].strength, Strength::Strong);
    assert_eq!(analysis.claims[1].kind, ClaimKind::Counter);
    assert!(analysis.claims[1].evidence.is_none());

    assert_eq!(analysis.fallacies.len(), 1);
    assert_eq!(analysis.fallacies[0].name, "Hasty Generalization");

    assert_eq!(analysis.overall_strength, 8.0);
    assert_eq!(analysis.critique, "A clear, well organized argument.");
    assert_eq!(analysis.suggestions.len(), 3);

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts.iter().all(|p| p.ends_with(ESSAY)));
    assert!(prompts[0].contains("Claim 1"));
    assert!(prompts[1].contains("logical fallacies"));
    assert!(prompts[2].contains("scale of 1-10"));
}

#[tokio::test]
async fn test_generator_failures_leave_empty_parts() {
    let generator = Arc::new(ScriptedGenerator::new(
        "test/model",
        vec![
            Ok(structure_reply()),
            Err(GenerationError::Transport("connection reset".to_string())),
            Err(GenerationError::Http {
                status: 500,
                body: "oops".to_string(),
            }),
        ],
    ));
    let analysis = ArgumentAnalyzer::new(generator).analyze(ESSAY).await;

    assert_eq!(analysis.claims.len(), 2);
    assert!(analysis.fallacies.is_empty());
    assert_eq!(analysis.overall_strength, 0.0);
    assert_eq!(analysis.critique, "Could not evaluate.");
}

#[tokio::test]
async fn test_no_model_makes_no_requests() {
    let analysis = ArgumentAnalyzer::default().analyze(ESSAY).await;

    assert!(analysis.claims.is_empty());
    assert!(analysis.critique.contains("text generator is required"));
}

#[tokio::test]
async fn test_empty_essay_skips_generator() {
    let generator = Arc::new(ScriptedGenerator::replying("test/model", "Thesis: x"));
    let analysis = ArgumentAnalyzer::new(generator.clone()).analyze("").await;

    assert_eq!(analysis, ArgumentAnalysis::empty("No text provided."));
    assert_eq!(generator.call_count(), 0);
}
