// Essay structure scoring
//
// Classifies paragraphs into introduction, body and conclusion, locates the
// thesis, grades transitions and folds everything into a 0-100 score with
// plain-English recommendations.

pub mod markers;
pub mod scorer;
pub mod types;

pub use scorer::{score_structure, StructureScorer};
pub use types::{ParagraphRecord, Strength, StructureReport, ThesisLocation};
