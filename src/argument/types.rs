// Argument analysis types: claims, fallacies and the overall analysis

use serde::Serialize;
use std::fmt;

use crate::structure::Strength;

/// Role a claim plays in the argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimKind {
    Thesis,
    Supporting,
    Counter,
}

impl ClaimKind {
    /// Parse a label from a model reply; unknown labels count as supporting.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.starts_with("counter") {
            Self::Counter
        } else if label == "thesis" {
            Self::Thesis
        } else {
            Self::Supporting
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thesis => "thesis",
            Self::Supporting => "supporting",
            Self::Counter => "counter",
        }
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim made in the essay, as judged by the model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claim {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ClaimKind,
    pub strength: Strength,
    /// Evidence offered for the claim, absent when the model reports none
    pub evidence: Option<String>,
    pub explanation: Option<String>,
}

/// A detected logical fallacy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fallacy {
    pub name: String,
    pub description: String,
    /// Passage that commits the fallacy
    pub text: String,
    pub explanation: String,
}

/// Overall judgement of the argument
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Evaluation {
    /// 0-10
    pub score: f64,
    pub critique: String,
    pub suggestions: Vec<String>,
}

/// Complete argument analysis of one essay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentAnalysis {
    pub thesis: Option<String>,
    pub claims: Vec<Claim>,
    pub fallacies: Vec<Fallacy>,
    /// 0-10
    pub overall_strength: f64,
    pub critique: String,
    pub suggestions: Vec<String>,
}

impl ArgumentAnalysis {
    /// Analysis that found nothing, carrying an explanation.
    pub fn empty(critique: impl Into<String>) -> Self {
        Self {
            thesis: None,
            claims: Vec::new(),
            fallacies: Vec::new(),
            overall_strength: 0.0,
            critique: critique.into(),
            suggestions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_kind_from_label() {
        assert_eq!(ClaimKind::from_label("Counter"), ClaimKind::Counter);
        assert_eq!(ClaimKind::from_label("counter-argument"), ClaimKind::Counter);
        assert_eq!(ClaimKind::from_label("thesis"), ClaimKind::Thesis);
        assert_eq!(ClaimKind::from_label("supporting"), ClaimKind::Supporting);
        assert_eq!(ClaimKind::from_label("background"), ClaimKind::Supporting);
    }

    #[test]
    fn test_claim_serializes_type_field() {
        let claim = Claim {
            text: "Exercise improves mood".to_string(),
            kind: ClaimKind::Supporting,
            strength: Strength::Strong,
            evidence: None,
            explanation: None,
        };
        let value = serde_json::to_value(&claim).unwrap();
        assert_eq!(value["type"], "supporting");
        assert_eq!(value["strength"], "strong");
        assert!(value["evidence"].is_null());
    }

    #[test]
    fn test_empty_analysis() {
        let analysis = ArgumentAnalysis::empty("No text provided.");
        assert!(analysis.thesis.is_none());
        assert!(analysis.claims.is_empty());
        assert_eq!(analysis.overall_strength, 0.0);
        assert_eq!(analysis.critique, "No text provided.");
    }
}
