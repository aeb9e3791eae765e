use std::collections::{HashMap, HashSet};

use crate::features::categories::models::FlatCategory;

/// Would making `candidate_parent` the parent of `moving_id` create a cycle?
///
/// Walks up from `candidate_parent` through `parent_id` links. Attaching to
/// the root (`None`) is always safe. The walk stops at an unknown id or when
/// it revisits a node, so a tree that is already cyclic cannot hang it.
pub fn is_circular(flat: &[FlatCategory], candidate_parent: Option<i64>, moving_id: i64) -> bool {
    let parents: HashMap<i64, Option<i64>> = flat.iter().map(|c| (c.id, c.parent_id)).collect();

    let mut visited = HashSet::new();
    let mut current = candidate_parent;

    while let Some(id) = current {
        if id == moving_id {
            return true;
        }
        if !visited.insert(id) {
            tracing::warn!("Category tree already contains a cycle through {}", id);
            return false;
        }
        current = parents.get(&id).copied().flatten();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::tree::test_support::flat;

    // 1
    // ├── 2
    // │   └── 4
    // └── 3
    // 5
    fn sample() -> Vec<FlatCategory> {
        vec![
            flat(1, None, 0),
            flat(2, Some(1), 0),
            flat(4, Some(2), 0),
            flat(3, Some(1), 1),
            flat(5, None, 1),
        ]
    }

    #[test]
    fn test_root_is_never_circular() {
        let list = sample();
        for c in &list {
            assert!(!is_circular(&list, None, c.id));
        }
    }

    #[test]
    fn test_self_parent_is_circular() {
        assert!(is_circular(&sample(), Some(2), 2));
    }

    #[test]
    fn test_descendant_parent_is_circular() {
        let list = sample();
        assert!(is_circular(&list, Some(4), 1));
        assert!(is_circular(&list, Some(4), 2));
        assert!(is_circular(&list, Some(3), 1));
    }

    #[test]
    fn test_unrelated_or_ancestor_parent_is_safe() {
        let list = sample();
        assert!(!is_circular(&list, Some(5), 2));
        assert!(!is_circular(&list, Some(1), 4));
        assert!(!is_circular(&list, Some(3), 2));
    }

    #[test]
    fn test_terminates_on_cyclic_input() {
        let list = vec![flat(1, Some(2), 0), flat(2, Some(1), 0), flat(3, None, 0)];
        assert!(!is_circular(&list, Some(1), 3));
        assert!(is_circular(&list, Some(1), 2));
    }

    #[test]
    fn test_unknown_parent_stops_walk() {
        let list = vec![flat(1, Some(99), 0)];
        assert!(!is_circular(&list, Some(1), 7));
    }
}
