use crate::aggregate::DEFAULT_TOP_N;
use crate::conf::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Inputs and knobs for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Read with the access grammar.
    pub access_log_path: PathBuf,

    /// Read with the error grammar.
    pub error_log_path: PathBuf,

    /// Entries kept per frequency table.
    pub top_n: usize,

    /// Classify user agents into device categories.
    pub device_breakdown: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            access_log_path: PathBuf::from("access.log"),
            error_log_path: PathBuf::from("error.log"),
            top_n: DEFAULT_TOP_N,
            device_breakdown: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::InvalidTopN);
        }
        Ok(())
    }

    /// Anchors relative log paths at `base`.
    pub(crate) fn resolve_relative_to(mut self, base: &Path) -> Self {
        if self.access_log_path.is_relative() {
            self.access_log_path = base.join(&self.access_log_path);
        }
        if self.error_log_path.is_relative() {
            self.error_log_path = base.join(&self.error_log_path);
        }
        self
    }
}
