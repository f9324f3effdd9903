//! Correlation of index tables between two versions of one listing.
//!
//! Both operations are pure functions of their two input sequences and
//! compare names by exact, case-sensitive equality. Map mode pairs every
//! source assignment whose name survives into the target version; diff mode
//! lists the names that did not. Callers wanting the names new in the
//! target run diff with the arguments swapped.

use std::collections::{BTreeMap, BTreeSet};

use rgbmig_model::{
    FlagAssignment, FlagCorrelation, FlagDifference, MapAssignment, MapCorrelation, MapDifference,
    MapId,
};

/// Names of `source` absent from `target`, ascending by source index.
pub fn diff_flags(source: &[FlagAssignment], target: &[FlagAssignment]) -> Vec<FlagDifference> {
    let known: BTreeSet<&str> = target.iter().map(|a| a.name.as_str()).collect();
    let mut missing: Vec<FlagDifference> = source
        .iter()
        .filter(|a| !known.contains(a.name.as_str()))
        .map(|a| FlagDifference {
            index: a.index,
            name: a.name.clone(),
        })
        .collect();
    missing.sort_by_key(|d| d.index);
    missing
}

/// Pairs each `source` assignment with the index its name has in `target`.
///
/// The name lookup is built once from `target`; duplicate names resolve to
/// the target's last assignment. Output preserves `source` order; names
/// present only in `target` are silently omitted.
pub fn correlate_flags(
    source: &[FlagAssignment],
    target: &[FlagAssignment],
) -> Vec<FlagCorrelation> {
    let by_name: BTreeMap<&str, u32> = target.iter().map(|a| (a.name.as_str(), a.index)).collect();
    source
        .iter()
        .filter_map(|a| {
            by_name.get(a.name.as_str()).map(|&target_index| FlagCorrelation {
                source: a.index,
                target: target_index,
                name: a.name.clone(),
            })
        })
        .collect()
}

/// Names of `source` absent from `target`, ascending by (group, map).
pub fn diff_maps(source: &[MapAssignment], target: &[MapAssignment]) -> Vec<MapDifference> {
    let known: BTreeSet<&str> = target.iter().map(|a| a.name.as_str()).collect();
    let mut missing: Vec<MapDifference> = source
        .iter()
        .filter(|a| !known.contains(a.name.as_str()))
        .map(|a| MapDifference {
            id: a.id,
            name: a.name.clone(),
        })
        .collect();
    missing.sort_by_key(|d| d.id);
    missing
}

/// Pairs each `source` map constant with its (group, map) position in
/// `target`. Same lookup semantics as [`correlate_flags`].
pub fn correlate_maps(source: &[MapAssignment], target: &[MapAssignment]) -> Vec<MapCorrelation> {
    let by_name: BTreeMap<&str, MapId> = target.iter().map(|a| (a.name.as_str(), a.id)).collect();
    source
        .iter()
        .filter_map(|a| {
            by_name.get(a.name.as_str()).map(|&target_id| MapCorrelation {
                source: a.id,
                target: target_id,
                name: a.name.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(entries: &[(u32, &str)]) -> Vec<FlagAssignment> {
        entries
            .iter()
            .map(|&(index, name)| FlagAssignment::new(index, name))
            .collect()
    }

    #[test]
    fn test_diff_of_identical_tables_is_empty() {
        let table = flags(&[(0, "A"), (1, "B"), (5, "C")]);
        assert!(diff_flags(&table, &table).is_empty());
    }

    #[test]
    fn test_diff_is_not_symmetric() {
        let old = flags(&[(0, "A"), (1, "REMOVED")]);
        let new = flags(&[(0, "A"), (1, "ADDED")]);

        let forward = diff_flags(&old, &new);
        let reverse = diff_flags(&new, &old);

        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].name, "REMOVED");
        assert_eq!(reverse.len(), 1);
        assert_eq!(reverse[0].name, "ADDED");
    }

    #[test]
    fn test_diff_sorts_by_source_index() {
        // A backward const_next can put a later line at a lower index.
        let old = flags(&[(9, "LATE"), (2, "EARLY")]);
        let new = flags(&[]);

        let missing = diff_flags(&old, &new);
        assert_eq!(missing[0].name, "EARLY");
        assert_eq!(missing[1].name, "LATE");
    }

    #[test]
    fn test_correlation_covers_exactly_the_intersection() {
        let old = flags(&[(0, "A"), (1, "B"), (2, "GONE")]);
        let new = flags(&[(4, "B"), (5, "A"), (6, "NEW")]);

        let mapping = correlate_flags(&old, &new);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping[0].name, "A");
        assert_eq!((mapping[0].source, mapping[0].target), (0, 5));
        assert_eq!(mapping[1].name, "B");
        assert_eq!((mapping[1].source, mapping[1].target), (1, 4));
    }

    #[test]
    fn test_duplicate_target_names_resolve_to_last_assignment() {
        let old = flags(&[(0, "DUP")]);
        let new = flags(&[(3, "DUP"), (9, "DUP")]);

        let mapping = correlate_flags(&old, &new);
        assert_eq!(mapping, vec![FlagCorrelation {
            source: 0,
            target: 9,
            name: "DUP".to_string(),
        }]);
    }

    #[test]
    fn test_case_sensitive_names() {
        let old = flags(&[(0, "Event")]);
        let new = flags(&[(0, "EVENT")]);
        assert!(correlate_flags(&old, &new).is_empty());
        assert_eq!(diff_flags(&old, &new).len(), 1);
    }
}
