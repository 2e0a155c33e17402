// Optimization types: issues, readability metrics, reports, options

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a detected issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Grammar,
    Clarity,
    Style,
    Voice,
}

impl IssueKind {
    /// Parse a label from a model reply; unknown labels count as grammar.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "clarity" => Self::Clarity,
            "style" => Self::Style,
            "voice" => Self::Voice,
            _ => Self::Grammar,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Clarity => "clarity",
            Self::Style => "style",
            Self::Voice => "voice",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single grammar, clarity, style or voice issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    /// Text the issue refers to; empty when the issue is document-wide
    pub original_text: String,
    /// Replacement or placeholder marker
    pub suggested_text: Option<String>,
}

impl OptimizationIssue {
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        message: impl Into<String>,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            original_text: original_text.into(),
            suggested_text: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggested_text = Some(suggestion.into());
        self
    }
}

/// Readability and style metrics. A pure function of the input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReadabilityMetrics {
    /// 0-100, higher is easier
    pub flesch_reading_ease: f64,
    /// US grade level, never negative
    pub flesch_kincaid_grade: f64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    /// 0-100
    pub passive_voice_percentage: f64,
    pub total_sentences: usize,
    pub total_words: usize,
    /// Words longer than ten characters
    pub complex_word_count: usize,
}

/// Result of one optimization pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub issues: Vec<OptimizationIssue>,
    pub metrics: ReadabilityMetrics,
    /// Present only when fixes were requested; equals the input when none applied
    pub optimized_text: Option<String>,
    pub improvements_applied: usize,
}

/// Knobs for `StyleOptimizer::optimize`
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeOptions {
    /// Warn when the Flesch-Kincaid grade exceeds this level
    pub target_grade_level: Option<f64>,
    /// Report passive-voice sentences
    pub prefer_active_voice: bool,
    /// Rewrite fixable issues and return the optimized text
    pub apply_fixes: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            target_grade_level: None,
            prefer_active_voice: true,
            apply_fixes: false,
        }
    }
}

impl OptimizeOptions {
    pub fn with_target_grade(mut self, grade: f64) -> Self {
        self.target_grade_level = Some(grade);
        self
    }

    pub fn with_active_voice(mut self, prefer: bool) -> Self {
        self.prefer_active_voice = prefer;
        self
    }

    pub fn with_fixes(mut self, apply: bool) -> Self {
        self.apply_fixes = apply;
        self
    }
}

impl From<&crate::config::OptimizeConfig> for OptimizeOptions {
    fn from(config: &crate::config::OptimizeConfig) -> Self {
        Self {
            target_grade_level: config.target_grade_level,
            prefer_active_voice: config.prefer_active_voice,
            apply_fixes: false,
        }
    }
}
