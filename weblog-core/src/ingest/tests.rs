use crate::error::PipelineError;
use crate::ingest::{IngestStats, RawLine, ingest_file, ingest_line};
use crate::record::{AccessRecord, ErrorRecord};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const ACCESS_OK: &str = r#"10.0.0.1 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 512 "-" "Mozilla/5.0 Chrome/99""#;
const ACCESS_BAD_TIME: &str = r#"10.0.0.2 - - [99/Foo/2023:00:00:00 +0000] "GET /about HTTP/1.1" 200 - "-" "curl/8""#;

#[test]
fn counts_skipped_lines_and_unparsed_timestamps() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(
        &path,
        format!("{ACCESS_OK}\ngarbage\n\n{ACCESS_BAD_TIME}\r\n{ACCESS_OK}"),
    )
    .unwrap();

    // Act
    let outcome = ingest_file::<AccessRecord>(&path).unwrap();

    // Assert
    assert_eq!(outcome.records.len(), 3);
    assert_eq!(
        outcome.stats,
        IngestStats {
            lines_read: 5,
            records_built: 3,
            lines_skipped: 2,
            timestamps_unparsed: 1,
        }
    );
}

#[test]
fn malformed_lines_do_not_reduce_well_formed_records() {
    // Arrange
    let dir = tempdir().unwrap();
    let clean = dir.path().join("clean.log");
    let noisy = dir.path().join("noisy.log");
    fs::write(&clean, format!("{ACCESS_OK}\n{ACCESS_OK}\n")).unwrap();
    fs::write(
        &noisy,
        format!("###\n{ACCESS_OK}\n\"GET / HTTP/1.1\" 200\n{ACCESS_OK}\nhalf a li"),
    )
    .unwrap();

    // Act
    let clean = ingest_file::<AccessRecord>(&clean).unwrap();
    let noisy = ingest_file::<AccessRecord>(&noisy).unwrap();

    // Assert
    assert_eq!(clean.records, noisy.records);
    assert_eq!(noisy.stats.lines_skipped, 3);
}

#[test]
fn invalid_utf8_is_replaced_and_the_line_still_classified() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("error.log");
    let mut bytes = b"[Tue Oct 10 14:22:01 2023] [core:error] [pid 1] [client 10.0.0.1] bad \xff byte\n".to_vec();
    bytes.extend_from_slice(b"\xfe\xfe\n");
    fs::write(&path, bytes).unwrap();

    // Act
    let outcome = ingest_file::<ErrorRecord>(&path).unwrap();

    // Assert
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].message, "bad \u{FFFD} byte");
    assert_eq!(outcome.stats.lines_skipped, 1);
}

#[test]
fn missing_file_is_input_unavailable() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.log");

    // Act
    let err = ingest_file::<AccessRecord>(&path).unwrap_err();

    // Assert
    let PipelineError::InputUnavailable { path: reported, .. } = err;
    assert_eq!(reported, path);
}

#[test]
fn empty_file_is_a_valid_empty_branch() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("error.log");
    fs::write(&path, "").unwrap();

    // Act
    let outcome = ingest_file::<ErrorRecord>(&path).unwrap();

    // Assert
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats, IngestStats::default());
}

#[test]
fn ingest_line_updates_stats_for_one_line() {
    // Arrange
    let mut stats = IngestStats::default();
    let line = RawLine {
        source: Path::new("inline"),
        number: 1,
        text: ACCESS_BAD_TIME,
    };

    // Act
    let record = ingest_line::<AccessRecord>(line, &mut stats).unwrap();

    // Assert
    assert_eq!(record.timestamp, None);
    assert_eq!(stats.records_built, 1);
    assert_eq!(stats.timestamps_unparsed, 1);
}
