// Delegated grammar and clarity review
//
// The model is asked for a plain list of labelled blocks:
//
//   Type: grammar
//   Description: Subject and verb disagree
//   Original: the results was
//   Suggestion: the results were
//
// Blocks are separated by blank lines or by the next `Type:` line.

use super::types::{IssueKind, OptimizationIssue, Severity};
use crate::providers::TextGenerator;
use crate::text::{reply_label, reply_value};

/// Ask the model to review `text`. Any failure yields no issues.
pub async fn ai_grammar_check(generator: &dyn TextGenerator, text: &str) -> Vec<OptimizationIssue> {
    let prompt = grammar_prompt(text);

    match generator.call(&prompt).await {
        Ok(reply) if !reply.trim().is_empty() => {
            let issues = parse_grammar_reply(&reply);
            tracing::debug!("Model review produced {} issue(s)", issues.len());
            issues
        }
        Ok(_) => {
            tracing::warn!("Grammar check returned an empty reply");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("Grammar check failed: {}", e);
            Vec::new()
        }
    }
}

fn grammar_prompt(text: &str) -> String {
    format!(
        "Analyze the following text for grammar, clarity, and style issues. \
         For each issue, write one block of lines:\n\
         Type: grammar, clarity or style\n\
         Description: a brief description\n\
         Original: the problematic text, copied exactly\n\
         Suggestion: the corrected text\n\
         Separate blocks with a blank line.\n\n\
         Text:\n{text}"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Type,
    Description,
    Original,
    Suggestion,
}

impl Field {
    fn from_label(label: &str) -> Option<Self> {
        let label = reply_label(label);
        let key = label.rsplit(' ').next().unwrap_or_default();

        match key {
            "type" => Some(Self::Type),
            "description" | "issue" => Some(Self::Description),
            "original" | "problematic" => Some(Self::Original),
            "suggestion" | "fix" => Some(Self::Suggestion),
            _ => None,
        }
    }
}

/// One block accumulated line by line.
#[derive(Debug, Default)]
struct PendingIssue {
    kind: Option<String>,
    description: Option<String>,
    original: Option<String>,
    suggestion: Option<String>,
}

impl PendingIssue {
    fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.description.is_none()
            && self.original.is_none()
            && self.suggestion.is_none()
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Type => &mut self.kind,
            Field::Description => &mut self.description,
            Field::Original => &mut self.original,
            Field::Suggestion => &mut self.suggestion,
        };
        *slot = Some(value);
    }

    /// Blocks without a description are dropped.
    fn finish(self) -> Option<OptimizationIssue> {
        if self.description.as_deref().map_or(true, str::is_empty) {
            if !self.is_empty() {
                tracing::warn!("Discarding review block without a description");
            }
            return None;
        }
        let description = self.description.unwrap_or_default();
        let kind = self
            .kind
            .as_deref()
            .map(IssueKind::from_label)
            .unwrap_or(IssueKind::Grammar);

        let issue = OptimizationIssue::new(
            kind,
            Severity::Warning,
            description,
            self.original.unwrap_or_default(),
        );
        Some(match self.suggestion.filter(|s| !s.is_empty()) {
            Some(suggestion) => issue.with_suggestion(suggestion),
            None => issue,
        })
    }
}

/// Parse a labelled-block reply into issues.
pub fn parse_grammar_reply(reply: &str) -> Vec<OptimizationIssue> {
    let mut issues = Vec::new();
    let mut pending = PendingIssue::default();

    for line in reply.lines().map(str::trim) {
        if line.is_empty() {
            issues.extend(std::mem::take(&mut pending).finish());
            continue;
        }

        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let Some(field) = Field::from_label(label) else {
            continue;
        };

        if field == Field::Type && !pending.is_empty() {
            issues.extend(std::mem::take(&mut pending).finish());
        }
        pending.set(field, reply_value(value));
    }

    issues.extend(pending.finish());
    issues
}
