//! Grouping and filter views over a loaded entry collection
//!
//! All of these are pure derive operations over `&[Entry]`. The collection
//! is reloaded wholesale from the sheet, so every view is safe to recompute
//! on each render.

use std::collections::HashSet;

use super::datekey::normalize;
use super::models::Entry;

/// Which slice of the collection a view (or study session) wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    All,
    Bookmarked,
    Day(String),
}

impl Selector {
    /// Parse the route-style selector the views pass around: `"all"`,
    /// `"bookmarked"`, or a day key.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => Self::All,
            "bookmarked" => Self::Bookmarked,
            _ => Self::Day(raw.to_string()),
        }
    }
}

/// Return the matching subsequence in original relative order.
///
/// Entries whose date cell yields no key never match a day selector.
pub fn select(entries: &[Entry], selector: &Selector) -> Vec<Entry> {
    match selector {
        Selector::All => entries.to_vec(),
        Selector::Bookmarked => entries
            .iter()
            .filter(|entry| entry.is_bookmarked())
            .cloned()
            .collect(),
        Selector::Day(key) => entries
            .iter()
            .filter(|entry| normalize(&entry.date).as_deref() == Some(key))
            .cloned()
            .collect(),
    }
}

/// Distinct normalized day keys across the collection.
pub fn day_keys(entries: &[Entry]) -> HashSet<String> {
    entries
        .iter()
        .filter_map(|entry| normalize(&entry.date))
        .collect()
}

/// Number of distinct study days (entries with no key are ignored).
pub fn distinct_day_count(entries: &[Entry]) -> usize {
    day_keys(entries).len()
}

/// Whether any entry falls on the given day key. Decorates calendar cells.
pub fn has_entries_on_day(entries: &[Entry], key: &str) -> bool {
    entries
        .iter()
        .any(|entry| normalize(&entry.date).as_deref() == Some(key))
}
