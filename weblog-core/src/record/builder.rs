use crate::grammar::{FieldMap, Grammar};
use crate::ingest::FromFields;
use crate::record::{AccessRecord, ErrorRecord, classify_browser};
use crate::timestamp::{ACCESS_TIMESTAMP_FORMATS, ERROR_TIMESTAMP_FORMATS, normalize};

/// Builds an access record from fields matched by the access grammar.
///
/// Never fails: a bad timestamp becomes `None`, a non-numeric size becomes 0.
pub fn build_access_record(fields: &FieldMap<'_>) -> AccessRecord {
    let user_agent = fields.value("agent");

    AccessRecord {
        client_address: fields.value("client").to_string(),
        timestamp: normalize(fields.value("time"), ACCESS_TIMESTAMP_FORMATS),
        method: fields.value("method").to_string(),
        path: strip_query(fields.value("path")).to_string(),
        protocol: fields.value("protocol").to_string(),
        status_code: fields.value("status").parse().unwrap_or_default(),
        response_size: coerce_size(fields.value("size")),
        referer: fields.value("referer").to_string(),
        user_agent: user_agent.to_string(),
        browser: classify_browser(user_agent),
    }
}

/// Builds an error record from fields matched by the error grammar.
pub fn build_error_record(fields: &FieldMap<'_>) -> ErrorRecord {
    ErrorRecord {
        timestamp: normalize(fields.value("time"), ERROR_TIMESTAMP_FORMATS),
        module: fields.value("module").to_string(),
        level: fields.value("level").to_string(),
        process_id: fields.value("pid").parse().unwrap_or_default(),
        client_address: strip_port(fields.value("client")).to_string(),
        message: fields.value("message").to_string(),
    }
}

/// Everything before the first `?`.
pub fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(prefix, _)| prefix)
}

/// Everything before the first `:`.
pub fn strip_port(client: &str) -> &str {
    client.split_once(':').map_or(client, |(host, _)| host)
}

/// All-digit sizes parse; anything else (`-`, empty, overflow) is 0.
pub fn coerce_size(raw: &str) -> u64 {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    raw.parse().unwrap_or(0)
}

impl FromFields for AccessRecord {
    const GRAMMAR: Grammar = Grammar::Access;

    fn from_fields(fields: &FieldMap<'_>) -> Self {
        build_access_record(fields)
    }

    fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }
}

impl FromFields for ErrorRecord {
    const GRAMMAR: Grammar = Grammar::Error;

    fn from_fields(fields: &FieldMap<'_>) -> Self {
        build_error_record(fields)
    }

    fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }
}
