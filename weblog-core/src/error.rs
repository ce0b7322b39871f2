use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input unavailable: {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn input_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::InputUnavailable { path, .. } => path,
        }
    }
}
