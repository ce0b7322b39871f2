use crate::conf::{AnalyzerConfig, load_config};
use crate::pipeline::run_analysis;
use crate::render::{render_json, render_text};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Path to a weblog.hcl file (or a directory containing one)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Access log to read (overrides the config file)
    #[arg(long)]
    pub access_log: Option<PathBuf>,

    /// Error log to read (overrides the config file)
    #[arg(long)]
    pub error_log: Option<PathBuf>,

    /// Entries per frequency table (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    pub fn resolve_config(&self) -> Result<AnalyzerConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => AnalyzerConfig::default(),
        };

        if let Some(path) = &self.access_log {
            cfg.access_log_path = path.clone();
        }
        if let Some(path) = &self.error_log {
            cfg.error_log_path = path.clone();
        }
        if let Some(top) = self.top {
            cfg.top_n = usize::try_from(top).context("--top is too large")?;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

/// Runs one analysis and prints the report. Returns `Err` only when
/// neither log could be read.
pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = args.resolve_config()?;
    let outcome = run_analysis(&cfg);

    for failure in outcome.failures() {
        eprintln!("{} {failure}", "warning:".yellow().bold());
    }

    let report = outcome
        .into_result()
        .context("no input could be read")?;

    let rendered = match args.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{rendered}");

    Ok(())
}
