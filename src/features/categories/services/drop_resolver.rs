use crate::core::config::EditorConfig;
use crate::features::categories::drag::DropGesture;
use crate::features::categories::dtos::UpdateCategoryDto;
use crate::features::categories::models::FlatCategory;
use crate::features::categories::tree::{find_flat, is_circular, siblings};

/// One field change for one category, sent as its own `PUT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChange {
    Parent(Option<i64>),
    Order(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedUpdate {
    pub id: i64,
    pub change: CategoryChange,
}

impl PlannedUpdate {
    pub fn parent(id: i64, parent_id: Option<i64>) -> Self {
        Self {
            id,
            change: CategoryChange::Parent(parent_id),
        }
    }

    pub fn order(id: i64, order: i32) -> Self {
        Self {
            id,
            change: CategoryChange::Order(order),
        }
    }

    pub fn to_dto(&self) -> UpdateCategoryDto {
        match self.change {
            CategoryChange::Parent(parent_id) => UpdateCategoryDto::parent(parent_id),
            CategoryChange::Order(order) => UpdateCategoryDto::order(order),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    /// Nothing to do: dropped on itself, outside any card, or unknown ids
    NoOp,
    /// Became a child of the hover-confirmed card
    Nest { parent_id: i64 },
    /// Promoted to its grandparent's sibling list
    Unnest { parent_id: Option<i64> },
    /// Moved within its own sibling list
    Reorder,
    /// Appended to the target's sibling list
    MoveToParent { parent_id: Option<i64> },
    /// The only applicable move would have made the category its own ancestor
    Circular { parent_id: Option<i64> },
}

/// Outcome of a drop plus the backend calls that realise it, in issue order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPlan {
    pub dragged_id: i64,
    pub kind: DropKind,
    pub updates: Vec<PlannedUpdate>,
}

impl DropPlan {
    fn noop(dragged_id: i64) -> Self {
        Self {
            dragged_id,
            kind: DropKind::NoOp,
            updates: Vec::new(),
        }
    }

    pub fn is_mutation(&self) -> bool {
        !self.updates.is_empty()
    }
}

/// Classifies a finished drag against the current flat tree.
///
/// Rules are tried in order and the first match wins: no-op, unnest
/// (leftward shift past the threshold), nest (drop on the hover-confirmed
/// card), reorder (same parent), move to the target's parent.
#[derive(Debug, Clone, Copy)]
pub struct DropResolver {
    unnest_threshold_px: f64,
}

impl DropResolver {
    pub fn new(unnest_threshold_px: f64) -> Self {
        Self {
            unnest_threshold_px,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.unnest_threshold_px)
    }

    pub fn resolve(&self, gesture: &DropGesture, flat: &[FlatCategory]) -> DropPlan {
        let dragged_id = gesture.dragged_id;

        let Some(target_id) = gesture.target_id.filter(|id| *id != dragged_id) else {
            return DropPlan::noop(dragged_id);
        };
        let (Some(dragged), Some(target)) = (find_flat(flat, dragged_id), find_flat(flat, target_id))
        else {
            tracing::debug!("Drop of {} on {} references unknown categories", dragged_id, target_id);
            return DropPlan::noop(dragged_id);
        };

        if let Some(plan) = self.unnest(gesture, dragged, flat) {
            return plan;
        }

        if let Some(parent_id) = gesture.potential_parent_id.filter(|id| *id == target_id) {
            if !is_circular(flat, Some(parent_id), dragged_id) {
                return DropPlan {
                    dragged_id,
                    kind: DropKind::Nest { parent_id },
                    updates: vec![PlannedUpdate::parent(dragged_id, Some(parent_id))],
                };
            }
            tracing::warn!(
                "Nesting {} under {} would create a cycle, skipping",
                dragged_id,
                parent_id
            );
        }

        if dragged.parent_id == target.parent_id {
            return reorder(dragged, target, flat);
        }

        let parent_id = target.parent_id;
        if is_circular(flat, parent_id, dragged_id) {
            tracing::warn!(
                "Moving {} under {:?} would create a cycle, skipping",
                dragged_id,
                parent_id
            );
            return DropPlan {
                dragged_id,
                kind: DropKind::Circular { parent_id },
                updates: Vec::new(),
            };
        }

        let order = group_len(flat, parent_id);
        DropPlan {
            dragged_id,
            kind: DropKind::MoveToParent { parent_id },
            updates: vec![
                PlannedUpdate::parent(dragged_id, parent_id),
                PlannedUpdate::order(dragged_id, order),
            ],
        }
    }

    fn unnest(
        &self,
        gesture: &DropGesture,
        dragged: &FlatCategory,
        flat: &[FlatCategory],
    ) -> Option<DropPlan> {
        let offset = gesture.horizontal_offset?;
        let current_parent = dragged.parent_id?;
        if offset >= -self.unnest_threshold_px {
            return None;
        }

        let parent_id = find_flat(flat, current_parent).and_then(|p| p.parent_id);
        let order = group_len(flat, parent_id);

        Some(DropPlan {
            dragged_id: dragged.id,
            kind: DropKind::Unnest { parent_id },
            updates: vec![
                PlannedUpdate::parent(dragged.id, parent_id),
                PlannedUpdate::order(dragged.id, order),
            ],
        })
    }
}

/// Array-move `dragged` to `target`'s index and persist only the siblings
/// whose stored order no longer matches their new index.
fn reorder(dragged: &FlatCategory, target: &FlatCategory, flat: &[FlatCategory]) -> DropPlan {
    let mut group = siblings(flat, target.parent_id);

    let old_index = group.iter().position(|c| c.id == dragged.id);
    let new_index = group.iter().position(|c| c.id == target.id);
    let (Some(old_index), Some(new_index)) = (old_index, new_index) else {
        return DropPlan::noop(dragged.id);
    };
    if old_index == new_index {
        return DropPlan::noop(dragged.id);
    }

    let moved = group.remove(old_index);
    group.insert(new_index, moved);

    let updates = group
        .iter()
        .enumerate()
        .filter(|(index, c)| c.order != *index as i32)
        .map(|(index, c)| PlannedUpdate::order(c.id, index as i32))
        .collect();

    DropPlan {
        dragged_id: dragged.id,
        kind: DropKind::Reorder,
        updates,
    }
}

/// New last position in a sibling group
fn group_len(flat: &[FlatCategory], parent_id: Option<i64>) -> i32 {
    flat.iter().filter(|c| c.parent_id == parent_id).count() as i32
}
