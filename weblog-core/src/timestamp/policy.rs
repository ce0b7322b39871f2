/// Where the UTC offset of a parsed timestamp comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetPolicy {
    /// The format carries a numeric offset (`%z`).
    Embedded,
    /// The format has no offset; the wall clock is read as UTC.
    AssumeUtc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampPolicy {
    pub format: &'static str,
    pub offset: OffsetPolicy,
    /// Input opens with a weekday name. It must spell a weekday but is not
    /// checked against the date; `format` covers the remainder.
    pub leading_weekday: bool,
}

/// `10/Oct/2023:13:55:36 +0000`
pub const ACCESS_TIMESTAMP_FORMATS: &[TimestampPolicy] = &[TimestampPolicy {
    format: "%d/%b/%Y:%H:%M:%S %z",
    offset: OffsetPolicy::Embedded,
    leading_weekday: false,
}];

/// `Tue Oct 10 14:22:01.123456 2023`, then `Tue Oct 10 14:22:01 2023`.
pub const ERROR_TIMESTAMP_FORMATS: &[TimestampPolicy] = &[
    TimestampPolicy {
        format: "%b %d %H:%M:%S%.f %Y",
        offset: OffsetPolicy::AssumeUtc,
        leading_weekday: true,
    },
    TimestampPolicy {
        format: "%b %d %H:%M:%S %Y",
        offset: OffsetPolicy::AssumeUtc,
        leading_weekday: true,
    },
];
