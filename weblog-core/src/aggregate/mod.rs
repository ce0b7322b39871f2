//! Reduction of the finished record set into tables and hourly series.
//!
//! Aggregation runs once, after both inputs are fully read. It only borrows
//! records and never reorders or edits them; every output is ordered by
//! its own key rules, so the result does not depend on input order.

mod frequency;
mod timeline;


pub use frequency::{CountEntry, FrequencyTable};
pub use timeline::{HourBucket, Timeline, TimelinePoint};

use crate::enrichment::user_agent::DeviceClassifier;
use crate::record::{AccessRecord, ErrorRecord};
use serde::Serialize;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub pages: FrequencyTable,
    pub clients: FrequencyTable,
    pub browsers: FrequencyTable,
    pub status_codes: FrequencyTable,
    pub devices: FrequencyTable,
    pub error_levels: FrequencyTable,
    pub requests_per_hour: Timeline,
    pub errors_per_hour: Timeline,
}

pub struct Aggregator {
    top_n: usize,
    devices: Option<DeviceClassifier>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl Aggregator {
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            devices: None,
        }
    }

    pub fn with_device_breakdown(mut self, enabled: bool) -> Self {
        self.devices = enabled.then(DeviceClassifier::new);
        self
    }

    pub fn aggregate(&self, access: &[AccessRecord], errors: &[ErrorRecord]) -> Aggregates {
        let top = Some(self.top_n);

        let devices = match &self.devices {
            Some(classifier) => FrequencyTable::from_keys(
                access
                    .iter()
                    .map(|r| classifier.classify(&r.user_agent).as_str()),
                top,
            ),
            None => FrequencyTable::default(),
        };

        Aggregates {
            pages: FrequencyTable::from_keys(access.iter().map(|r| r.path.as_str()), top),
            clients: FrequencyTable::from_keys(
                access.iter().map(|r| r.client_address.as_str()),
                top,
            ),
            browsers: FrequencyTable::from_keys(access.iter().map(|r| r.browser.as_str()), None),
            status_codes: FrequencyTable::from_keys(
                access.iter().map(|r| r.status_code.to_string()),
                None,
            ),
            devices,
            error_levels: FrequencyTable::from_keys(errors.iter().map(|r| r.level.as_str()), top),
            requests_per_hour: Timeline::from_timestamps(
                access.iter().filter_map(|r| r.timestamp.as_ref()),
            ),
            errors_per_hour: Timeline::from_timestamps(
                errors.iter().filter_map(|r| r.timestamp.as_ref()),
            ),
        }
    }
}
