//! Related-set and category-count aggregation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::category::{group_key, same_category};
use crate::domain::identifier::is_same_record;
use crate::domain::record::ContentRecord;

/// Count of records sharing one normalized category key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    /// Normalized comparison key records were grouped by.
    pub key: String,

    /// Display label: the first-seen original spelling for this key.
    pub label: String,

    pub count: usize,
}

/// Records sharing the given record's category, excluding the record
/// itself, in collection order, truncated to `limit`.
///
/// Self-exclusion goes through record identity (id/slug), not object
/// identity, so a clone of the resolved record never shows up as its own
/// related item.
pub fn build_related(
    record: &ContentRecord,
    collection: &[ContentRecord],
    limit: usize,
) -> Vec<ContentRecord> {
    collection
        .iter()
        .filter(|candidate| same_category(&record.category, &candidate.category))
        .filter(|candidate| !is_same_record(record, candidate))
        .take(limit)
        .cloned()
        .collect()
}

/// Group a collection by normalized category key, counting every record
/// regardless of status.
///
/// Entries come back in first-seen order with the first-seen original
/// label as the display label for the key.
pub fn build_category_counts(collection: &[ContentRecord]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in collection {
        let key = group_key(&record.category);
        match index.get(&key) {
            Some(&at) => counts[at].count += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push(CategoryCount {
                    key,
                    label: record.category.trim().to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}
