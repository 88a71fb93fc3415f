//! Grouping, key ranking, and chunking
//!
//! Views are grouped by level name and levels are ordered by the number
//! embedded in the name. Ordering is everywhere stable with respect to
//! input order, which keeps sheet output deterministic.

use indexmap::IndexMap;

use crate::types::LayoutItem;

/// Partition items by `group_key`, preserving first-seen key order and the
/// relative input order of items within each group. An empty key is its
/// own group.
pub fn group_by_key(items: &[LayoutItem]) -> IndexMap<String, Vec<LayoutItem>> {
    let mut groups: IndexMap<String, Vec<LayoutItem>> = IndexMap::new();
    for item in items {
        groups
            .entry(item.group_key.clone())
            .or_default()
            .push(item.clone());
    }
    groups
}

/// Numeric rank of a group key: the first maximal run of decimal digits
/// anywhere in the key, or 0 when the key has no digits.
///
/// "Level 2" ranks 2 and "L10" ranks 10, so numbered levels order
/// numerically rather than lexically. A key with no digits ("Roof")
/// ranks 0 and sorts ahead of "Level 1".
pub fn rank_key(key: &str) -> u64 {
    let mut rank: u64 = 0;
    let mut in_run = false;
    for ch in key.chars() {
        if let Some(digit) = ch.to_digit(10) {
            in_run = true;
            rank = rank.saturating_mul(10).saturating_add(digit as u64);
        } else if in_run {
            break;
        }
    }
    rank
}

/// Sort keys ascending by `rank_key`. The sort is stable: keys with equal
/// ranks keep their input order, never falling back to lexical comparison.
pub fn sort_keys(keys: &[String]) -> Vec<String> {
    let mut sorted = keys.to_vec();
    sorted.sort_by_key(|key| rank_key(key));
    sorted
}

/// Split sorted keys into consecutive clusters of at most `max_size`,
/// preserving order; the final cluster may be short.
///
/// # Panics
/// `max_size` of zero is a programming error and panics.
pub fn chunk_keys(keys: &[String], max_size: usize) -> Vec<Vec<String>> {
    assert!(max_size >= 1, "cluster size must be at least 1");
    keys.chunks(max_size).map(|chunk| chunk.to_vec()).collect()
}
