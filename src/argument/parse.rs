// Parsers for the three argument-analysis replies
//
// Structure and fallacy replies are labelled blocks:
//
//   Thesis: Schools should start later
//
//   Claim 1: Teenagers need more sleep
//   Type: supporting
//   Strength: strong
//   Evidence: sleep studies
//   Explanation: well sourced
//
// A block ends at a blank line or at the next `Claim`/`Fallacy` header.
// Evaluation replies are a `Score:` line, a `Critique:` paragraph and a
// numbered `Suggestions:` list.

use super::types::{Claim, ClaimKind, Evaluation, Fallacy};
use crate::structure::Strength;
use crate::text::{reply_label, reply_value};

/// Upper end of the strength scale.
pub const MAX_SCORE: f64 = 10.0;

/// Thesis and claims extracted from a structure reply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentStructure {
    pub thesis: Option<String>,
    pub claims: Vec<Claim>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClaimField {
    Thesis,
    Claim,
    Type,
    Strength,
    Evidence,
    Explanation,
}

impl ClaimField {
    fn from_label(label: &str) -> Option<Self> {
        let label = reply_label(label);
        if is_numbered(&label, "claim") {
            return Some(Self::Claim);
        }
        match label.as_str() {
            "thesis" | "thesis statement" => Some(Self::Thesis),
            "type" => Some(Self::Type),
            "strength" => Some(Self::Strength),
            "evidence" => Some(Self::Evidence),
            "explanation" => Some(Self::Explanation),
            _ => None,
        }
    }
}

/// `header` alone or followed by a number, e.g. "claim" or "claim 2".
fn is_numbered(label: &str, header: &str) -> bool {
    match label.strip_prefix(header) {
        Some("") => true,
        Some(rest) => rest.trim().chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

#[derive(Debug, Default)]
struct PendingClaim {
    text: Option<String>,
    kind: Option<String>,
    strength: Option<String>,
    evidence: Option<String>,
    explanation: Option<String>,
}

impl PendingClaim {
    fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.kind.is_none()
            && self.strength.is_none()
            && self.evidence.is_none()
            && self.explanation.is_none()
    }

    /// Claims without text are dropped.
    fn finish(self) -> Option<Claim> {
        if self.text.as_deref().map_or(true, str::is_empty) {
            if !self.is_empty() {
                tracing::warn!("Discarding claim block without claim text");
            }
            return None;
        }

        Some(Claim {
            text: self.text.unwrap_or_default(),
            kind: self
                .kind
                .as_deref()
                .map(ClaimKind::from_label)
                .unwrap_or(ClaimKind::Supporting),
            strength: self
                .strength
                .as_deref()
                .map(Strength::from_label)
                .unwrap_or(Strength::Moderate),
            evidence: self
                .evidence
                .filter(|e| !e.is_empty() && !e.eq_ignore_ascii_case("none")),
            explanation: self.explanation.filter(|e| !e.is_empty()),
        })
    }
}

/// Parse the thesis and claim blocks of a structure reply.
pub fn parse_structure_reply(reply: &str) -> ArgumentStructure {
    let mut structure = ArgumentStructure::default();
    let mut pending = PendingClaim::default();

    for line in reply.lines().map(str::trim) {
        if line.is_empty() {
            structure.claims.extend(std::mem::take(&mut pending).finish());
            continue;
        }

        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let Some(field) = ClaimField::from_label(label) else {
            continue;
        };
        let value = reply_value(value);

        match field {
            ClaimField::Thesis => {
                if !value.is_empty() {
                    structure.thesis = Some(value);
                }
            }
            ClaimField::Claim => {
                structure.claims.extend(std::mem::take(&mut pending).finish());
                pending.text = Some(value);
            }
            ClaimField::Type => pending.kind = Some(value),
            ClaimField::Strength => pending.strength = Some(value),
            ClaimField::Evidence => pending.evidence = Some(value),
            ClaimField::Explanation => pending.explanation = Some(value),
        }
    }

    structure.claims.extend(pending.finish());
    structure
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FallacyField {
    Name,
    Text,
    Explanation,
}

impl FallacyField {
    fn from_label(label: &str) -> Option<Self> {
        let label = reply_label(label);
        if is_numbered(&label, "fallacy") {
            return Some(Self::Name);
        }
        match label.as_str() {
            "text" | "quote" => Some(Self::Text),
            "explanation" => Some(Self::Explanation),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct PendingFallacy {
    name: Option<String>,
    text: Option<String>,
    explanation: Option<String>,
}

impl PendingFallacy {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.text.is_none() && self.explanation.is_none()
    }

    /// Fallacies without a name are dropped.
    fn finish(self) -> Option<Fallacy> {
        if self.name.as_deref().map_or(true, str::is_empty) {
            if !self.is_empty() {
                tracing::warn!("Discarding fallacy block without a name");
            }
            return None;
        }

        let explanation = self.explanation.unwrap_or_default();
        Some(Fallacy {
            name: self.name.unwrap_or_default(),
            description: explanation.clone(),
            text: self.text.unwrap_or_default(),
            explanation,
        })
    }
}

/// Parse the fallacy blocks of a fallacy reply.
pub fn parse_fallacy_reply(reply: &str) -> Vec<Fallacy> {
    let mut fallacies = Vec::new();
    let mut pending = PendingFallacy::default();

    for line in reply.lines().map(str::trim) {
        if line.is_empty() {
            fallacies.extend(std::mem::take(&mut pending).finish());
            continue;
        }

        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let Some(field) = FallacyField::from_label(label) else {
            continue;
        };
        let value = reply_value(value);

        match field {
            FallacyField::Name => {
                fallacies.extend(std::mem::take(&mut pending).finish());
                pending.name = Some(value);
            }
            FallacyField::Text => pending.text = Some(value),
            FallacyField::Explanation => pending.explanation = Some(value),
        }
    }

    fallacies.extend(pending.finish());
    fallacies
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EvaluationField {
    Score,
    Critique,
    Suggestions,
}

impl EvaluationField {
    fn from_label(label: &str) -> Option<Self> {
        match reply_label(label).as_str() {
            "score" | "overall score" => Some(Self::Score),
            "critique" => Some(Self::Critique),
            "suggestions" => Some(Self::Suggestions),
            _ => None,
        }
    }
}

/// Parse "8", "7.5/10" or "**6**" into a score on the 0-10 scale.
fn parse_score(value: &str) -> f64 {
    let head = value.split('/').next().unwrap_or_default();
    let head = head.trim_matches(|c: char| c == '*' || c.is_whitespace());
    match head.parse::<f64>() {
        Ok(score) => score.clamp(0.0, MAX_SCORE),
        Err(_) => {
            tracing::warn!("Could not parse argument score from '{}'", value.trim());
            0.0
        }
    }
}

/// Item text of a "1." / "2)" / "-" list line.
fn list_item(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    let rest = if rest.len() < line.len() {
        rest.strip_prefix(['.', ')'])?
    } else {
        rest.strip_prefix(['-', '*', '•'])?
    };
    let item = rest.trim();
    (!item.is_empty()).then_some(item)
}

/// Parse the score, critique and suggestions of an evaluation reply.
///
/// Unlabelled lines outside the suggestion list continue the critique.
pub fn parse_evaluation_reply(reply: &str) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let mut in_suggestions = false;

    for line in reply.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let labelled = line
            .split_once(':')
            .and_then(|(label, value)| EvaluationField::from_label(label).map(|f| (f, value)));

        match labelled {
            Some((EvaluationField::Score, value)) => evaluation.score = parse_score(value),
            Some((EvaluationField::Critique, value)) => {
                evaluation.critique = reply_value(value);
                in_suggestions = false;
            }
            Some((EvaluationField::Suggestions, value)) => {
                in_suggestions = true;
                let inline = reply_value(value);
                if !inline.is_empty() {
                    evaluation.suggestions.push(inline);
                }
            }
            None if in_suggestions => {
                if let Some(item) = list_item(line) {
                    evaluation.suggestions.push(item.to_string());
                }
            }
            None if !evaluation.critique.is_empty() => {
                evaluation.critique.push(' ');
                evaluation.critique.push_str(line);
            }
            None => {}
        }
    }

    evaluation
}
