// Command-line surface: argument parsing, input reading, command dispatch

pub mod progress;
pub mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use crate::argument::ArgumentAnalyzer;
use crate::config::EngineConfig;
use crate::improve::{ImprovementLoop, ProgressNotifier};
use crate::providers::TextGenerator;
use crate::structure::StructureScorer;
use crate::style::{OptimizeOptions, StyleOptimizer};

use progress::BarNotifier;

#[derive(Debug, Parser)]
#[command(
    name = "essay-engine",
    about = "Score essay structure, optimize style and iteratively improve drafts",
    version
)]
pub struct Cli {
    /// Config file (defaults to ~/.essay-engine/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never call the text-generation provider
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score paragraph structure, thesis and transitions
    Analyze(InputArgs),
    /// Readability metrics and style issues
    Optimize(OptimizeArgs),
    /// Rewrite until the target score is reached
    Improve(ImproveArgs),
    /// Claims, fallacies and argument strength (needs a model)
    Argue(InputArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Essay file, or "-" for stdin
    #[arg(default_value = "-")]
    pub file: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Warn when the reading grade level exceeds this
    #[arg(long, value_name = "N")]
    pub grade: Option<f64>,

    /// Do not report passive-voice sentences
    #[arg(long)]
    pub allow_passive: bool,

    /// Apply mechanical fixes and print the optimized text
    #[arg(long)]
    pub fix: bool,
}

#[derive(Debug, Args)]
pub struct ImproveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum rewrite cycles
    #[arg(long, value_name = "N")]
    pub cycles: Option<usize>,

    /// Target overall score (0-100)
    #[arg(long, value_name = "N")]
    pub target: Option<f64>,
}

impl OptimizeArgs {
    /// Merge command-line flags over the configured defaults.
    pub fn options(&self, config: &EngineConfig) -> OptimizeOptions {
        let mut options = OptimizeOptions::from(&config.optimize).with_fixes(self.fix);
        if let Some(grade) = self.grade {
            options = options.with_target_grade(grade);
        }
        if self.allow_passive {
            options = options.with_active_voice(false);
        }
        options
    }
}

impl ImproveArgs {
    /// (cycles, target) after applying flags over the config.
    pub fn settings(&self, config: &EngineConfig) -> (usize, f64) {
        (
            self.cycles.unwrap_or(config.improve.cycles),
            self.target.unwrap_or(config.improve.target_score),
        )
    }
}

/// Read essay text from a file path, or stdin for "-".
pub fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}

/// Execute the parsed command.
pub async fn run(cli: &Cli, config: &EngineConfig, generator: Arc<dyn TextGenerator>) -> Result<()> {
    match &cli.command {
        Command::Analyze(args) => {
            let text = read_input(&args.file)?;
            let report = StructureScorer::new(generator).analyze(&text).await;
            if args.json {
                print_json(&report)?;
            } else {
                print!("{}", render::render_structure(&report));
            }
        }
        Command::Optimize(args) => {
            let text = read_input(&args.input.file)?;
            let options = args.options(config);
            let report = StyleOptimizer::new(generator).optimize(&text, &options).await;
            if args.input.json {
                print_json(&report)?;
            } else {
                print!("{}", render::render_optimization(&report));
            }
        }
        Command::Improve(args) => {
            let text = read_input(&args.input.file)?;
            let (cycles, target) = args.settings(config);
            let bar = BarNotifier::new(cycles.max(1));
            let progress: &dyn ProgressNotifier = &bar;
            let result = ImprovementLoop::new(generator)
                .improve(&text, cycles, target, Some(progress))
                .await;
            bar.finish();

            if args.input.json {
                print_json(&result)?;
            } else {
                print!("{}", render::render_improvement(&result));
            }
        }
        Command::Argue(args) => {
            let text = read_input(&args.file)?;
            let analysis = ArgumentAnalyzer::new(generator).analyze(&text).await;
            if args.json {
                print_json(&analysis)?;
            } else {
                print!("{}", render::render_argument(&analysis));
            }
        }
    }
    Ok(())
}
