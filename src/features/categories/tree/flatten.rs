use crate::features::categories::models::{Category, FlatCategory};

/// Flatten a nested category forest in depth-first pre-order.
///
/// Every node appears exactly once with its depth and outline number.
/// Uses an explicit stack, so nesting depth is bounded only by memory.
pub fn flatten(tree: &[Category]) -> Vec<FlatCategory> {
    let mut flat = Vec::new();
    let mut stack: Vec<(&Category, usize, String)> = Vec::new();

    push_level(&mut stack, tree, 0, "");

    while let Some((node, level, position)) = stack.pop() {
        push_level(&mut stack, &node.children, level + 1, &position);
        flat.push(FlatCategory::from_node(node, level, position));
    }

    flat
}

/// Push one sibling list so that the first sibling is popped first
fn push_level<'a>(
    stack: &mut Vec<(&'a Category, usize, String)>,
    siblings: &'a [Category],
    level: usize,
    parent_position: &str,
) {
    for (index, node) in siblings.iter().enumerate().rev() {
        let position = if parent_position.is_empty() {
            format!("{}", index + 1)
        } else {
            format!("{}.{}", parent_position, index + 1)
        };
        stack.push((node, level, position));
    }
}

/// Total number of nodes in a forest
pub fn count_nodes(tree: &[Category]) -> usize {
    tree.iter().map(|c| 1 + count_nodes(&c.children)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::tree::test_support::node;

    fn sample_forest() -> Vec<Category> {
        vec![
            node(1, None, 0, vec![
                node(2, Some(1), 0, vec![node(4, Some(2), 0, vec![])]),
                node(3, Some(1), 1, vec![]),
            ]),
            node(5, None, 1, vec![]),
        ]
    }

    #[test]
    fn test_flatten_empty_forest() {
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn test_flatten_preorder_with_levels() {
        let flat = flatten(&sample_forest());
        let ids: Vec<i64> = flat.iter().map(|c| c.id).collect();
        let levels: Vec<usize> = flat.iter().map(|c| c.level).collect();

        assert_eq!(ids, vec![1, 2, 4, 3, 5]);
        assert_eq!(levels, vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_flatten_outline_positions() {
        let flat = flatten(&sample_forest());
        let positions: Vec<&str> = flat.iter().map(|c| c.position.as_str()).collect();
        assert_eq!(positions, vec!["1", "1.1", "1.1.1", "1.2", "2"]);
    }

    #[test]
    fn test_flatten_is_stable_and_complete() {
        let forest = sample_forest();
        let first = flatten(&forest);
        let second = flatten(&forest);

        assert_eq!(first, second);
        assert_eq!(first.len(), count_nodes(&forest));
    }

    #[test]
    fn test_flatten_deep_chain() {
        let depth = 2_000;
        let mut chain = node(depth, Some(depth - 1), 0, vec![]);
        for id in (1..depth).rev() {
            let parent = if id == 1 { None } else { Some(id - 1) };
            chain = node(id, parent, 0, vec![chain]);
        }

        let flat = flatten(std::slice::from_ref(&chain));
        assert_eq!(flat.len(), depth as usize);
        assert_eq!(flat.last().map(|c| c.level), Some(depth as usize - 1));
    }
}
