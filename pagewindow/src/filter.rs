//! Case-insensitive substring filtering over a record's composite search key.

use alloc::string::String;
use alloc::vec::Vec;

use crate::Record;

/// Builds the lower-cased composite key (`display_name` followed by `short_code`).
pub fn search_key<R: Record>(record: &R) -> String {
    let name = record.display_name();
    let code = record.short_code();
    let mut key = String::with_capacity(name.len() + code.len());
    key.push_str(name);
    key.push_str(code);
    key.to_lowercase()
}

/// Returns the records matching `query`, in dataset order.
pub fn filter<'a, R: Record>(dataset: &'a [R], query: &str) -> Vec<&'a R> {
    filter_positions(dataset, query)
        .into_iter()
        .map(|i| &dataset[i])
        .collect()
}

/// Returns the dataset positions of the records matching `query`, ascending.
pub fn filter_positions<R: Record>(dataset: &[R], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    dataset
        .iter()
        .enumerate()
        .filter(|(_, r)| search_key(*r).contains(needle.as_str()))
        .map(|(i, _)| i)
        .collect()
}

/// Search keys for a fixed dataset, computed once.
///
/// The dataset is immutable for a session, so the store builds this at initialization and
/// every query change only lower-cases the query.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    keys: Vec<String>,
}

impl SearchIndex {
    pub fn new<R: Record>(dataset: &[R]) -> Self {
        Self {
            keys: dataset.iter().map(search_key).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Positions whose key contains `query` (case-insensitive), ascending.
    pub fn matches(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return (0..self.keys.len()).collect();
        }
        let needle = query.to_lowercase();
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, key)| key.contains(needle.as_str()))
            .map(|(i, _)| i)
            .collect()
    }
}
