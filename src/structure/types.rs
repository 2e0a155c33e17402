// Structure report types: ParagraphRecord, StructureReport and their enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Graded quality used for body paragraphs and for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }

    /// Parse a label from a model reply; unknown labels count as moderate.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "strong" => Self::Strong,
            "weak" => Self::Weak,
            _ => Self::Moderate,
        }
    }

    /// Weight of a body paragraph of this strength in the body sub-score.
    pub fn body_weight(self) -> f64 {
        match self {
            Self::Strong => 1.0,
            Self::Moderate => 0.6,
            Self::Weak => 0.0,
        }
    }

    /// Points awarded for transitions of this quality.
    pub fn transition_points(self) -> f64 {
        match self {
            Self::Strong => 10.0,
            Self::Moderate => 6.0,
            Self::Weak => 2.0,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the thesis statement was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThesisLocation {
    Introduction,
    Body,
    Conclusion,
    Missing,
}

impl ThesisLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::Body => "body",
            Self::Conclusion => "conclusion",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for ThesisLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analysis of a single paragraph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphRecord {
    /// 1-based position in the essay
    pub ordinal: usize,
    pub word_count: usize,
    /// Lies strictly between the introduction and the conclusion
    pub is_body: bool,
    pub has_topic_sentence: bool,
    /// First period-delimited segment, with a period restored
    pub topic_sentence: Option<String>,
    pub strength: Strength,
    pub issues: Vec<String>,
}

/// Complete structural analysis of one essay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureReport {
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub thesis: Option<String>,
    pub thesis_location: ThesisLocation,
    pub paragraphs: Vec<ParagraphRecord>,
    pub paragraph_count: usize,
    pub body_paragraph_count: usize,
    pub total_word_count: usize,
    pub transition_quality: Strength,
    /// 0-100
    pub overall_score: f64,
    pub recommendations: Vec<String>,
}

impl StructureReport {
    /// Report for empty or whitespace-only input.
    pub fn empty() -> Self {
        Self {
            has_introduction: false,
            has_conclusion: false,
            thesis: None,
            thesis_location: ThesisLocation::Missing,
            paragraphs: Vec::new(),
            paragraph_count: 0,
            body_paragraph_count: 0,
            total_word_count: 0,
            transition_quality: Strength::Weak,
            overall_score: 0.0,
            recommendations: vec!["Provide essay text to analyze.".to_string()],
        }
    }
}
