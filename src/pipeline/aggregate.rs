use crate::types::RankedEntry;
use std::collections::HashMap;

/// Counts keys in a single pass and returns them ranked by frequency,
/// descending. Ties keep first-seen order so output is deterministic
/// for a given input order.
pub fn aggregate(keys: impl IntoIterator<Item = String>) -> Vec<RankedEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<RankedEntry> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&slot) => entries[slot].count += 1,
            None => {
                index.insert(key.clone(), entries.len());
                entries.push(RankedEntry { key, count: 1 });
            }
        }
    }

    // Vec::sort_by is stable, so equal counts stay in first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_and_ranks_descending() {
        let ranked = aggregate(keys(&["France", "France", "USA"]));
        assert_eq!(ranked.len(), 2);
        assert_eq!((ranked[0].key.as_str(), ranked[0].count), ("France", 2));
        assert_eq!((ranked[1].key.as_str(), ranked[1].count), ("USA", 1));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = aggregate(keys(&["b", "a", "c", "a"]));
        assert_eq!(ranked[0].key, "a");
        assert_eq!(ranked[1].key, "b");
        assert_eq!(ranked[2].key, "c");
    }

    #[test]
    fn counts_are_order_independent() {
        let forward = aggregate(keys(&["x", "y", "x", "z", "x"]));
        let backward = aggregate(keys(&["x", "z", "x", "y", "x"]));
        let as_set = |v: &[RankedEntry]| {
            let mut pairs: Vec<(String, u64)> =
                v.iter().map(|e| (e.key.clone(), e.count)).collect();
            pairs.sort();
            pairs
        };
        assert_eq!(as_set(&forward), as_set(&backward));
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn every_count_is_at_least_one() {
        let ranked = aggregate(keys(&["a", "b", "a"]));
        assert!(ranked.iter().all(|e| e.count >= 1));
    }
}
