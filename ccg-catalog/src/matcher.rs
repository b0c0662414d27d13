//! Catalog matching: category filters, title search and id lookup.
//!
//! Record labels are resolved with the same resolver as the page's own
//! heading, so matching is exact canonical-key equality on both sides.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::{CategoryKey, resolve_key};
use crate::types::CanonicalGameRecord;

/// True when any of the record's labels resolves to `key`.
pub fn record_matches(record: &CanonicalGameRecord, key: CategoryKey) -> bool {
    record
        .category_labels
        .iter()
        .any(|label| resolve_key(label) == Some(key))
}

/// Records belonging to `key`, in input order.
///
/// Records without labels never match.
pub fn match_category(records: &[CanonicalGameRecord], key: CategoryKey) -> Vec<&CanonicalGameRecord> {
    records.iter().filter(|r| record_matches(r, key)).collect()
}

/// Case-insensitive substring search over title and sort key, as used by the
/// A–Z index page. A blank term returns every record.
pub fn search<'a>(records: &'a [CanonicalGameRecord], term: &str) -> Vec<&'a CanonicalGameRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&needle) || r.sort_key.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Look up a single game page's record.
pub fn find_by_id<'a>(records: &'a [CanonicalGameRecord], id: &str) -> Option<&'a CanonicalGameRecord> {
    let id = id.trim();
    records.iter().find(|r| r.id == id)
}

/// How the catalog's records spread across categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    /// Records per key. A record counts once per key even if several of its
    /// labels resolve to it.
    pub by_key: BTreeMap<CategoryKey, usize>,
    /// Labels that resolve to no key, with how many records carry them.
    pub unresolved: BTreeMap<String, usize>,
    /// Records without any label.
    pub uncategorized: usize,
}

pub fn category_counts(records: &[CanonicalGameRecord]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();

    for record in records {
        if record.category_labels.is_empty() {
            counts.uncategorized += 1;
            continue;
        }
        let mut keys: Vec<CategoryKey> = Vec::new();
        for label in &record.category_labels {
            match resolve_key(label) {
                Some(key) if !keys.contains(&key) => keys.push(key),
                Some(_) => {}
                None => *counts.unresolved.entry(label.clone()).or_default() += 1,
            }
        }
        for key in keys {
            *counts.by_key.entry(key).or_default() += 1;
        }
    }

    counts
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
