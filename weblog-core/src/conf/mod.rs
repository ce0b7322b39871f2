mod error;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, load_config, resolve_config_path};
pub use types::AnalyzerConfig;
