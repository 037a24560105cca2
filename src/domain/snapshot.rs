//! Persisted availability snapshot.
//!
//! Serializes as a plain JSON array of `{"name", "availability"}` records so
//! the file stays readable and diffable by hand.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Last-known availability of a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub availability: bool,
}

impl SnapshotEntry {
    pub fn new(name: impl Into<String>, availability: bool) -> Self {
        Self {
            name: name.into(),
            availability,
        }
    }
}

/// Ordered availability state from one poll cycle.
///
/// Holds at most one entry per name when built by the detector. Files
/// written by other tools may contain duplicates; [`Snapshot::lookup`]
/// resolves those first-seen-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_entries(entries: Vec<SnapshotEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a name → availability map. The first entry for a name wins.
    #[must_use]
    pub fn lookup(&self) -> HashMap<&str, bool> {
        let mut map = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            map.entry(entry.name.as_str()).or_insert(entry.availability);
        }
        map
    }

    pub(crate) fn push(&mut self, entry: SnapshotEntry) {
        self.entries.push(entry);
    }
}

impl FromIterator<SnapshotEntry> for Snapshot {
    fn from_iter<I: IntoIterator<Item = SnapshotEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
