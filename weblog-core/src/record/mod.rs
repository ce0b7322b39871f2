//! Typed, immutable records built from extracted fields.

mod browser;
mod builder;


pub use browser::{BROWSER_RULES, Browser, BrowserRule, classify_browser};
pub use builder::{
    build_access_record, build_error_record, coerce_size, strip_port, strip_query,
};

use crate::timestamp::Timestamp;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    pub client_address: String,
    /// `None` when the raw timestamp matched no known format.
    pub timestamp: Option<Timestamp>,
    pub method: String,
    /// Request path with any query string removed.
    pub path: String,
    pub protocol: String,
    pub status_code: u16,
    pub response_size: u64,
    pub referer: String,
    pub user_agent: String,
    pub browser: Browser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub timestamp: Option<Timestamp>,
    pub module: String,
    pub level: String,
    /// Values past `u64::MAX` read as 0.
    pub process_id: u64,
    /// Host portion only; a `:port` suffix is dropped.
    pub client_address: String,
    pub message: String,
}
