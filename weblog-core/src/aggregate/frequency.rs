use ahash::AHashMap;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub key: String,
    pub count: u64,
}

/// Occurrence counts per key, ordered by descending count then ascending key.
///
/// `total` and `distinct` describe the full input even when `entries` has
/// been cut down to a top-N view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    pub total: u64,
    pub distinct: usize,
    pub entries: Vec<CountEntry>,
}

impl FrequencyTable {
    pub fn from_keys<I, K>(keys: I, limit: Option<usize>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        let mut total = 0;

        for key in keys {
            let key = key.as_ref();
            // Avoid allocating for keys already present.
            match counts.get_mut(key) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(key.to_string(), 1);
                }
            }
            total += 1;
        }

        let distinct = counts.len();
        let mut entries: Vec<CountEntry> = counts
            .into_iter()
            .map(|(key, count)| CountEntry { key, count })
            .collect();

        entries.sort_by(rank);

        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        Self {
            total,
            distinct,
            entries,
        }
    }

    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, key: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.count)
    }
}

fn rank(a: &CountEntry, b: &CountEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key))
}
