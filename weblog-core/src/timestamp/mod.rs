//! Timestamp normalization.
//!
//! Raw timestamps are tried against an ordered table of [`TimestampPolicy`]
//! entries; the first one that parses wins. Failing every entry is a normal
//! outcome (`None`), never an error.

mod policy;


pub use policy::{ACCESS_TIMESTAMP_FORMATS, ERROR_TIMESTAMP_FORMATS, OffsetPolicy, TimestampPolicy};

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc, Weekday};

pub type Timestamp = DateTime<FixedOffset>;

pub fn normalize(raw: &str, formats: &[TimestampPolicy]) -> Option<Timestamp> {
    formats.iter().find_map(|policy| policy.parse(raw))
}

impl TimestampPolicy {
    pub fn parse(&self, raw: &str) -> Option<Timestamp> {
        let raw = if self.leading_weekday {
            skip_weekday(raw)?
        } else {
            raw
        };
        match self.offset {
            OffsetPolicy::Embedded => DateTime::parse_from_str(raw, self.format).ok(),
            OffsetPolicy::AssumeUtc => NaiveDateTime::parse_from_str(raw, self.format)
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset()),
        }
    }
}

/// Drops a leading weekday name such as `Tue` or `tuesday`.
fn skip_weekday(raw: &str) -> Option<&str> {
    let (day, rest) = raw.split_once(' ')?;
    day.parse::<Weekday>().ok()?;
    Some(rest.trim_start())
}

/// Truncates to the start of the containing hour, in the timestamp's own offset.
pub fn hour_floor(ts: &Timestamp) -> Option<Timestamp> {
    ts.with_minute(0)?.with_second(0)?.with_nanosecond(0)
}
