use crate::features::categories::models::{Category, FlatCategory};

/// Recursive lookup in the nested tree
pub fn find(tree: &[Category], id: i64) -> Option<&Category> {
    for category in tree {
        if category.id == id {
            return Some(category);
        }
        if let Some(found) = find(&category.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_flat(flat: &[FlatCategory], id: i64) -> Option<&FlatCategory> {
    flat.iter().find(|c| c.id == id)
}

/// Siblings under `parent_id`, sorted by `order` (ties keep tree order)
pub fn siblings(flat: &[FlatCategory], parent_id: Option<i64>) -> Vec<&FlatCategory> {
    let mut group: Vec<&FlatCategory> = flat.iter().filter(|c| c.parent_id == parent_id).collect();
    group.sort_by_key(|c| c.order);
    group
}

/// Tree shown by the public content browser: inactive categories are
/// dropped together with everything below them.
pub fn public_tree(tree: &[Category]) -> Vec<Category> {
    tree.iter()
        .filter(|c| c.is_active())
        .map(|c| Category {
            children: public_tree(&c.children),
            ..c.clone()
        })
        .collect()
}

/// Categories that may receive the contents of `category_id`: everything
/// except the category itself and its direct children.
pub fn move_targets(flat: &[FlatCategory], category_id: i64) -> Vec<&FlatCategory> {
    flat.iter()
        .filter(|c| c.id != category_id && c.parent_id != Some(category_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::CategoryStatus;
    use crate::features::categories::tree::flatten;
    use crate::features::categories::tree::test_support::{flat, node};

    #[test]
    fn test_find_nested() {
        let tree = vec![node(1, None, 0, vec![node(2, Some(1), 0, vec![node(3, Some(2), 0, vec![])])])];
        assert_eq!(find(&tree, 3).map(|c| c.parent_id), Some(Some(2)));
        assert!(find(&tree, 9).is_none());
    }

    #[test]
    fn test_siblings_sorted_by_order() {
        let list = vec![flat(1, None, 2), flat(2, None, 0), flat(3, Some(1), 0), flat(4, None, 1)];
        let ids: Vec<i64> = siblings(&list, None).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
        assert_eq!(siblings(&list, Some(1)).len(), 1);
        assert!(siblings(&list, Some(3)).is_empty());
    }

    #[test]
    fn test_public_tree_prunes_inactive_subtrees() {
        let mut hidden = node(2, Some(1), 0, vec![node(3, Some(2), 0, vec![])]);
        hidden.status = CategoryStatus::Inactive;
        let tree = vec![node(1, None, 0, vec![hidden, node(4, Some(1), 1, vec![])])];

        let public = public_tree(&tree);
        let ids: Vec<i64> = flatten(&public).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_move_targets_exclude_self_and_children() {
        let list = vec![
            flat(1, None, 0),
            flat(2, Some(1), 0),
            flat(3, Some(2), 0),
            flat(4, None, 1),
        ];
        let ids: Vec<i64> = move_targets(&list, 1).iter().map(|c| c.id).collect();
        // grandchildren stay selectable
        assert_eq!(ids, vec![3, 4]);
    }
}
