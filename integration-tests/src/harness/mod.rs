use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use weblog_core::AnalyzerConfig;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn fixture(file: &str) -> PathBuf {
    fixtures_dir().join(file)
}

/// Config pointing at the checked-in fixture logs, with default knobs.
pub fn fixture_config() -> AnalyzerConfig {
    AnalyzerConfig {
        access_log_path: fixture("access.log"),
        error_log_path: fixture("error.log"),
        ..AnalyzerConfig::default()
    }
}

/// A throwaway directory for log files written by a single test.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write scratch file");
        path
    }

    /// Config reading `access.log` and `error.log` from this directory.
    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            access_log_path: self.dir.path().join("access.log"),
            error_log_path: self.dir.path().join("error.log"),
            ..AnalyzerConfig::default()
        }
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::new()
    }
}
