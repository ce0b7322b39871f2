use crate::conf::{AnalyzerConfig, ConfigError};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "weblog.hcl";

/// Accepts either a config file or a directory holding `weblog.hcl`.
pub fn resolve_config_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Loads and validates a config file. Missing keys take their defaults and
/// relative log paths are resolved against the file's directory.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let path = resolve_config_path(path);

    let s = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let cfg: AnalyzerConfig = hcl::from_str(&s).map_err(|e| ConfigError::parse(&path, e))?;

    let base = path.parent().unwrap_or(Path::new(""));
    let cfg = cfg.resolve_relative_to(base);

    cfg.validate()?;

    tracing::debug!(config = %path.display(), ?cfg, "config loaded");

    Ok(cfg)
}
