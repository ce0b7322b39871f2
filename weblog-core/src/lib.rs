pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod error;
pub mod grammar;
pub mod ingest;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod timestamp;

pub use conf::AnalyzerConfig;
pub use error::PipelineError;
pub use pipeline::{AnalysisOutcome, AnalysisReport, run_analysis};
