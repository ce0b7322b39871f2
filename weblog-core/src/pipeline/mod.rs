//! Analysis entry point.
//!
//! The overall data flow is:
//!
//! file
//! RawLine
//! Grammar::extract -> FieldMap
//! FromFields -> AccessRecord / ErrorRecord
//! Aggregator
//! AnalysisReport
//!
//! The access and error branches run on their own scoped threads and never
//! see each other's records until aggregation. A branch that cannot read its
//! file contributes no records; the other branch is unaffected.


use crate::aggregate::{Aggregates, Aggregator};
use crate::conf::AnalyzerConfig;
use crate::error::PipelineError;
use crate::ingest::{BranchOutcome, IngestStats, ingest_file};
use crate::record::{AccessRecord, ErrorRecord};
use serde::Serialize;
use std::path::Path;
use std::thread;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub access: IngestStats,
    pub error: IngestStats,
    #[serde(flatten)]
    pub aggregates: Aggregates,
}

#[derive(Debug)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub access_failure: Option<PipelineError>,
    pub error_failure: Option<PipelineError>,
}

impl AnalysisOutcome {
    pub fn failures(&self) -> impl Iterator<Item = &PipelineError> {
        self.access_failure.iter().chain(self.error_failure.iter())
    }

    /// Fails only when neither input could be read.
    pub fn into_result(self) -> Result<AnalysisReport, PipelineError> {
        match (self.access_failure, self.error_failure) {
            (Some(err), Some(_)) => Err(err),
            _ => Ok(self.report),
        }
    }
}

pub fn analyze_access_log(path: &Path) -> Result<BranchOutcome<AccessRecord>, PipelineError> {
    ingest_file(path)
}

pub fn analyze_error_log(path: &Path) -> Result<BranchOutcome<ErrorRecord>, PipelineError> {
    ingest_file(path)
}

pub fn run_analysis(config: &AnalyzerConfig) -> AnalysisOutcome {
    let (access, errors) = thread::scope(|s| {
        let access = s.spawn(|| analyze_access_log(&config.access_log_path));
        let errors = s.spawn(|| analyze_error_log(&config.error_log_path));

        (join(access), join(errors))
    });

    let (access, access_failure) = settle(access);
    let (errors, error_failure) = settle(errors);

    let aggregates = Aggregator::new(config.top_n)
        .with_device_breakdown(config.device_breakdown)
        .aggregate(&access.records, &errors.records);

    tracing::info!(
        access_records = access.records.len(),
        error_records = errors.records.len(),
        hours = aggregates.requests_per_hour.points().len(),
        "analysis complete"
    );

    AnalysisOutcome {
        report: AnalysisReport {
            access: access.stats,
            error: errors.stats,
            aggregates,
        },
        access_failure,
        error_failure,
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}

fn settle<R>(
    result: Result<BranchOutcome<R>, PipelineError>,
) -> (BranchOutcome<R>, Option<PipelineError>) {
    match result {
        Ok(outcome) => (outcome, None),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), error = %err, "input unavailable; branch skipped");
            (BranchOutcome::default(), Some(err))
        }
    }
}
