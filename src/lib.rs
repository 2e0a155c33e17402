// Essay Engine - iterative essay quality engine
// Library exports

// Core components
pub mod argument;
pub mod improve;
pub mod structure;
pub mod style;

// Shared text handling
pub mod text;

// Capability, configuration and command-line surface
pub mod cli;
pub mod config;
pub mod providers;

pub use argument::{ArgumentAnalysis, ArgumentAnalyzer};
pub use improve::{ImprovementLoop, ImprovementResult, ProgressNotifier};
pub use providers::{create_generator, null_generator, TextGenerator};
pub use structure::{StructureReport, StructureScorer};
pub use style::{OptimizationReport, OptimizeOptions, StyleOptimizer};
