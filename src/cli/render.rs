// Console rendering for reports

use crossterm::style::Stylize;

use crate::argument::{ArgumentAnalysis, ClaimKind};
use crate::improve::ImprovementResult;
use crate::structure::{Strength, StructureReport};
use crate::style::{OptimizationReport, Severity};

fn rule() -> String {
    format!("{}", "─".repeat(60).dark_grey())
}

fn score_label(score: f64) -> String {
    scaled_label(score, 100.0)
}

/// Score colored by how close it is to `max`.
fn scaled_label(score: f64, max: f64) -> String {
    let text = format!("{score:.1}");
    let ratio = score / max;
    if ratio >= 0.8 {
        format!("{}", text.green().bold())
    } else if ratio >= 0.6 {
        format!("{}", text.yellow().bold())
    } else {
        format!("{}", text.red().bold())
    }
}

fn check(flag: bool) -> String {
    if flag {
        format!("{}", "✓".green())
    } else {
        format!("{}", "✗".red())
    }
}

fn strength_label(strength: Strength) -> String {
    match strength {
        Strength::Strong => format!("{}", strength.as_str().green()),
        Strength::Moderate => format!("{}", strength.as_str().yellow()),
        Strength::Weak => format!("{}", strength.as_str().red()),
    }
}

pub fn render_structure(report: &StructureReport) -> String {
    let mut lines = vec![
        format!("{} Structure score: {}", "▸".cyan().bold(), score_label(report.overall_score)),
        rule(),
        format!("  {} Introduction", check(report.has_introduction)),
        format!("  {} Conclusion", check(report.has_conclusion)),
    ];
    lines.push(match &report.thesis {
        Some(thesis) => format!("  {} Thesis ({}): {}", check(true), report.thesis_location, thesis),
        None => format!("  {} Thesis", check(false)),
    });
    lines.push(format!(
        "  Paragraphs: {} ({} body), {} words",
        report.paragraph_count, report.body_paragraph_count, report.total_word_count
    ));
    lines.push(format!("  Transitions: {}", strength_label(report.transition_quality)));

    for paragraph in &report.paragraphs {
        let role = if paragraph.is_body { "body" } else { "frame" };
        lines.push(format!(
            "    #{} {:<5} {:>4} words  {}",
            paragraph.ordinal,
            role,
            paragraph.word_count,
            strength_label(paragraph.strength)
        ));
        for issue in &paragraph.issues {
            lines.push(format!("       {} {}", "•".yellow(), issue));
        }
    }

    if !report.recommendations.is_empty() {
        lines.push(format!("\n  {} Recommendations:", "ℹ".yellow()));
        for (i, recommendation) in report.recommendations.iter().enumerate() {
            lines.push(format!("  {}. {recommendation}", i + 1));
        }
    }
    finish(lines)
}

pub fn render_optimization(report: &OptimizationReport) -> String {
    let metrics = &report.metrics;
    let mut lines = vec![
        format!(
            "{} Reading ease: {}  Grade: {:.1}",
            "▸".cyan().bold(),
            score_label(metrics.flesch_reading_ease),
            metrics.flesch_kincaid_grade
        ),
        rule(),
        format!(
            "  {} sentences, {} words, {:.1} words/sentence, {:.1} chars/word",
            metrics.total_sentences, metrics.total_words, metrics.avg_sentence_length, metrics.avg_word_length
        ),
        format!(
            "  Passive voice: {:.1}%  Complex words: {}",
            metrics.passive_voice_percentage, metrics.complex_word_count
        ),
    ];

    if report.issues.is_empty() {
        lines.push(format!("\n  {} No issues found.", "✓".green()));
    } else {
        lines.push(format!("\n  Issues ({}):", report.issues.len()));
        for issue in &report.issues {
            let marker = match issue.severity {
                Severity::Error => format!("{}", "✗".red().bold()),
                Severity::Warning => format!("{}", "⚠".yellow().bold()),
                Severity::Suggestion => format!("{}", "•".cyan()),
            };
            let mut line = format!("  {} [{}] {}", marker, issue.kind, issue.message);
            if !issue.original_text.is_empty() {
                line.push_str(&format!(": \"{}\"", issue.original_text));
            }
            if let Some(suggestion) = &issue.suggested_text {
                line.push_str(&format!(" {} {}", "→".dark_grey(), suggestion));
            }
            lines.push(line);
        }
    }

    if let Some(optimized) = &report.optimized_text {
        lines.push(format!(
            "\n{} Applied {} fix(es):",
            "✓".green().bold(),
            report.improvements_applied
        ));
        lines.push(rule());
        lines.push(optimized.clone());
    }
    finish(lines)
}

pub fn render_improvement(result: &ImprovementResult) -> String {
    let mut lines: Vec<String> = result
        .steps
        .iter()
        .map(|step| {
            format!(
                "{} Cycle {}: {} -> {} ({:+.1}, {})",
                "▸".cyan().bold(),
                step.index,
                score_label(step.scores_before.overall),
                score_label(step.scores_after.overall),
                step.delta(),
                step.model_used.as_deref().unwrap_or("heuristic")
            )
        })
        .collect();

    let scores = &result.final_scores;
    let status = if result.target_reached {
        format!("{}", "✓ target reached".green().bold())
    } else {
        format!("{}", "✗ target not reached".red().bold())
    };
    lines.push(format!(
        "\nFinal score {} (target {:.1}) {}: {}",
        score_label(scores.overall),
        result.target_score,
        status,
        result.stop_reason
    ));
    lines.push(format!(
        "  clarity {:.1}  grammar {:.1}  argument {:.1}",
        scores.clarity, scores.grammar, scores.argument_strength
    ));
    lines.push(rule());
    lines.push(result.final_text.clone());
    finish(lines)
}

pub fn render_argument(analysis: &ArgumentAnalysis) -> String {
    let mut lines = vec![
        format!(
            "{} Argument strength: {}/10",
            "▸".cyan().bold(),
            scaled_label(analysis.overall_strength, 10.0)
        ),
        rule(),
    ];
    lines.push(match &analysis.thesis {
        Some(thesis) => format!("  {} Thesis: {}", check(true), thesis),
        None => format!("  {} Thesis", check(false)),
    });

    if !analysis.claims.is_empty() {
        lines.push(format!("\n  Claims ({}):", analysis.claims.len()));
        for claim in &analysis.claims {
            let marker = match claim.kind {
                ClaimKind::Counter => format!("{}", "↔".magenta()),
                _ => format!("{}", "•".cyan()),
            };
            lines.push(format!(
                "  {} [{}, {}] {}",
                marker,
                claim.kind,
                strength_label(claim.strength),
                claim.text
            ));
            if let Some(evidence) = &claim.evidence {
                lines.push(format!("      evidence: {evidence}"));
            }
        }
    }

    if analysis.fallacies.is_empty() {
        lines.push(format!("\n  {} No fallacies found.", "✓".green()));
    } else {
        lines.push(format!("\n  Fallacies ({}):", analysis.fallacies.len()));
        for fallacy in &analysis.fallacies {
            lines.push(format!("  {} {}: \"{}\"", "⚠".yellow().bold(), fallacy.name, fallacy.text));
            if !fallacy.explanation.is_empty() {
                lines.push(format!("      {}", fallacy.explanation));
            }
        }
    }

    if !analysis.critique.is_empty() {
        lines.push(format!("\n  {}", analysis.critique));
    }
    if !analysis.suggestions.is_empty() {
        lines.push(format!("\n  {} Suggestions:", "ℹ".yellow()));
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            lines.push(format!("  {}. {suggestion}", i + 1));
        }
    }
    finish(lines)
}

/// Join rendered lines, ending with a newline.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{Claim, Fallacy};
    use crate::improve::{ImprovementScores, ImprovementStep, StopReason};
    use crate::structure::score_structure;
    use crate::style::{IssueKind, OptimizationIssue, ReadabilityMetrics};

    fn scores(overall: f64) -> ImprovementScores {
        ImprovementScores {
            clarity: 70.0,
            grammar: 90.0,
            argument_strength: 60.0,
            overall,
        }
    }

    #[test]
    fn test_render_structure_lists_recommendations() {
        let rendered = render_structure(&score_structure(""));
        assert!(rendered.contains("Structure score"));
        assert!(rendered.contains("Provide essay text to analyze."));
    }

    #[test]
    fn test_render_optimization_shows_issues_and_fix() {
        let report = OptimizationReport {
            issues: vec![OptimizationIssue::new(
                IssueKind::Clarity,
                Severity::Suggestion,
                "Simplify wordy phrase",
                "in order to",
            )
            .with_suggestion("to")],
            metrics: ReadabilityMetrics::default(),
            optimized_text: Some("To win.".to_string()),
            improvements_applied: 1,
        };
        let rendered = render_optimization(&report);
        assert!(rendered.contains("Simplify wordy phrase"));
        assert!(rendered.contains("\"in order to\""));
        assert!(rendered.contains("To win."));
    }

    #[test]
    fn test_render_improvement_lists_cycles_and_outcome() {
        let result = ImprovementResult {
            steps: vec![
                ImprovementStep {
                    index: 1,
                    text_before: "draft".to_string(),
                    text_after: "Better draft.".to_string(),
                    scores_before: scores(62.0),
                    scores_after: scores(74.5),
                    model_used: Some("test/model".to_string()),
                },
                ImprovementStep {
                    index: 2,
                    text_before: "Better draft.".to_string(),
                    text_after: "Best draft.".to_string(),
                    scores_before: scores(74.5),
                    scores_after: scores(86.0),
                    model_used: None,
                },
            ],
            final_text: "Best draft.".to_string(),
            final_scores: scores(86.0),
            target_reached: true,
            target_score: 85.0,
            stop_reason: StopReason::TargetReached,
        };
        let rendered = render_improvement(&result);

        assert!(rendered.contains("Cycle 1:"));
        assert!(rendered.contains("(+12.5, test/model)"));
        assert!(rendered.contains("(+11.5, heuristic)"));
        assert!(rendered.contains("(target 85.0)"));
        assert!(rendered.contains("target reached"));
        assert!(rendered.contains("clarity 70.0  grammar 90.0  argument 60.0"));
        assert!(rendered.ends_with("Best draft.\n"));
    }

    #[test]
    fn test_render_improvement_without_steps() {
        let result = ImprovementResult {
            steps: Vec::new(),
            final_text: String::new(),
            final_scores: scores(25.2),
            target_reached: false,
            target_score: 85.0,
            stop_reason: StopReason::Plateau,
        };
        let rendered = render_improvement(&result);

        assert!(!rendered.contains("Cycle"));
        assert!(rendered.contains("target not reached"));
        assert!(rendered.contains("no further improvement"));
    }

    #[test]
    fn test_render_argument_analysis() {
        let analysis = ArgumentAnalysis {
            thesis: Some("Cities need trees.".to_string()),
            claims: vec![Claim {
                text: "Shade cools streets".to_string(),
                kind: ClaimKind::Supporting,
                strength: Strength::Strong,
                evidence: Some("heat maps".to_string()),
                explanation: None,
            }],
            fallacies: vec![Fallacy {
                name: "Slippery Slope".to_string(),
                description: "Unsupported chain".to_string(),
                text: "one tree leads to a forest".to_string(),
                explanation: "Unsupported chain".to_string(),
            }],
            overall_strength: 7.0,
            critique: "Solid but thin.".to_string(),
            suggestions: vec!["Cite a study".to_string()],
        };
        let rendered = render_argument(&analysis);

        assert!(rendered.contains("7.0"));
        assert!(rendered.contains("Thesis: Cities need trees."));
        assert!(rendered.contains("Shade cools streets"));
        assert!(rendered.contains("evidence: heat maps"));
        assert!(rendered.contains("Slippery Slope: \"one tree leads to a forest\""));
        assert!(rendered.contains("Solid but thin."));
        assert!(rendered.contains("1. Cite a study"));
    }

    #[test]
    fn test_render_empty_argument_analysis() {
        let rendered = render_argument(&ArgumentAnalysis::empty("No text provided."));
        assert!(rendered.contains("No fallacies found."));
        assert!(rendered.contains("No text provided."));
        assert!(!rendered.contains("Claims"));
    }
}
