use crate::timestamp::{Timestamp, hour_floor};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Start of an hour in a specific UTC offset.
///
/// Ordered by instant first and offset second, so the same instant seen
/// under two offsets forms two buckets instead of depending on which
/// record arrived first.
#[derive(Debug, Clone, Copy)]
pub struct HourBucket(Timestamp);

impl HourBucket {
    pub fn of(ts: &Timestamp) -> Option<Self> {
        hour_floor(ts).map(Self)
    }

    pub fn start(&self) -> Timestamp {
        self.0
    }

    fn offset_seconds(&self) -> i32 {
        self.0.offset().local_minus_utc()
    }
}

impl PartialEq for HourBucket {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HourBucket {}

impl PartialOrd for HourBucket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HourBucket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .cmp(&other.0)
            .then_with(|| self.offset_seconds().cmp(&other.offset_seconds()))
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub hour: HourBucket,
    pub count: u64,
}

/// Per-hour counts in ascending hour order. Hours with no records are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    points: Vec<TimelinePoint>,
}

impl Timeline {
    pub fn from_timestamps<'a, I>(timestamps: I) -> Self
    where
        I: IntoIterator<Item = &'a Timestamp>,
    {
        let mut buckets: BTreeMap<HourBucket, u64> = BTreeMap::new();

        for bucket in timestamps.into_iter().filter_map(HourBucket::of) {
            *buckets.entry(bucket).or_insert(0) += 1;
        }

        Self {
            points: buckets
                .into_iter()
                .map(|(hour, count)| TimelinePoint { hour, count })
                .collect(),
        }
    }

    pub fn points(&self) -> &[TimelinePoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| p.count).sum()
    }
}
