//! Status record snapshot
//!
//! One key/value snapshot read from a status buffer instance.

use crate::consts::cli_consts::INSTANCE_KEY;
use std::collections::BTreeMap;

/// A single snapshot of a status buffer.
///
/// Keys are kept in a `BTreeMap`, so iteration is always in ascending
/// lexicographic order regardless of how the provider produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRecord {
    entries: BTreeMap<String, String>,
}

impl StatusRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a key. Later values for the same key win.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value of the reserved `INSTANCE` key, if the producer wrote one.
    pub fn instance_label(&self) -> Option<&str> {
        self.get(INSTANCE_KEY)
    }

    /// All entries, sorted by key, including `INSTANCE`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries shown in the dashboard body: sorted, without `INSTANCE`.
    pub fn body_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| *k != INSTANCE_KEY)
    }
}

impl<K, V> FromIterator<(K, V)> for StatusRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = StatusRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
