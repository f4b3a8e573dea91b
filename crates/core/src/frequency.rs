use alloc::borrow::ToOwned;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// One token and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub token: String,
    pub count: u64,
}

/// Token -> occurrence count, iterated in ascending token order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` occurrences of `token`. A zero weight leaves the table
    /// untouched, so no entry ever holds a zero count.
    pub fn record(&mut self, token: &str, weight: u64) {
        if weight == 0 {
            return;
        }
        if let Some(count) = self.counts.get_mut(token) {
            *count = count.saturating_add(weight);
        } else {
            self.counts.insert(token.to_owned(), weight);
        }
    }

    #[must_use]
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Entries by descending count. The sort is stable over the table's
    /// alphabetical order, so equal counts stay alphabetical.
    #[must_use]
    pub fn rank(&self) -> RankedList {
        let mut entries: Vec<FrequencyEntry> = self
            .counts
            .iter()
            .map(|(token, &count)| FrequencyEntry {
                token: token.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        RankedList(entries)
    }
}

/// Every table entry, ordered by count descending then token ascending.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedList(Vec<FrequencyEntry>);

impl RankedList {
    /// The first `n` entries (or all of them, if fewer).
    #[must_use]
    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.0[..n.min(self.0.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FrequencyEntry] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, FrequencyEntry> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<FrequencyEntry> {
        self.0
    }
}

impl IntoIterator for RankedList {
    type Item = FrequencyEntry;
    type IntoIter = alloc::vec::IntoIter<FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a FrequencyEntry;
    type IntoIter = core::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
