//! Reading one log file through one grammar.
//!
//! The file handle lives only inside [`ingest_file`] and is closed on every
//! exit path, including a read error halfway through. Lines are decoded
//! lossily: invalid bytes become U+FFFD and the line is classified as usual.

#[cfg(test)]
mod tests;

use crate::error::PipelineError;
use crate::grammar::{FieldMap, Grammar};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One line of input and where it came from.
#[derive(Debug, Clone, Copy)]
pub struct RawLine<'a> {
    pub source: &'a Path,
    /// 1-based.
    pub number: usize,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub lines_read: u64,
    pub records_built: u64,
    /// Lines that did not match the grammar.
    pub lines_skipped: u64,
    /// Records kept with a null timestamp.
    pub timestamps_unparsed: u64,
}

#[derive(Debug, Clone)]
pub struct BranchOutcome<R> {
    pub records: Vec<R>,
    pub stats: IngestStats,
}

impl<R> Default for BranchOutcome<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            stats: IngestStats::default(),
        }
    }
}

/// Types that can be built from one grammar's field map.
pub trait FromFields: Sized {
    const GRAMMAR: Grammar;

    fn from_fields(fields: &FieldMap<'_>) -> Self;

    fn has_timestamp(&self) -> bool;
}

/// Reads `path` line by line, keeping every line that builds a record.
pub fn ingest_file<R: FromFields>(path: &Path) -> Result<BranchOutcome<R>, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::input_unavailable(path, e))?;
    let mut reader = BufReader::new(file);

    let mut outcome = BranchOutcome::default();
    let mut buf = Vec::new();
    let mut number = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| PipelineError::input_unavailable(path, e))?;
        if read == 0 {
            break;
        }
        number += 1;

        let text = String::from_utf8_lossy(&buf);
        let line = RawLine {
            source: path,
            number,
            text: text.trim_end_matches(['\n', '\r']),
        };

        if let Some(record) = ingest_line::<R>(line, &mut outcome.stats) {
            outcome.records.push(record);
        }
    }

    tracing::info!(
        path = %path.display(),
        grammar = %R::GRAMMAR,
        lines = outcome.stats.lines_read,
        records = outcome.stats.records_built,
        skipped = outcome.stats.lines_skipped,
        unparsed_timestamps = outcome.stats.timestamps_unparsed,
        "log file ingested"
    );

    Ok(outcome)
}

/// Extracts and builds one line, updating `stats` either way.
pub fn ingest_line<R: FromFields>(line: RawLine<'_>, stats: &mut IngestStats) -> Option<R> {
    stats.lines_read += 1;

    let Some(fields) = R::GRAMMAR.extract(line.text) else {
        stats.lines_skipped += 1;
        tracing::trace!(
            source = %line.source.display(),
            line = line.number,
            "line skipped: no grammar match"
        );
        return None;
    };

    let record = R::from_fields(&fields);
    stats.records_built += 1;
    if !record.has_timestamp() {
        stats.timestamps_unparsed += 1;
    }

    Some(record)
}
