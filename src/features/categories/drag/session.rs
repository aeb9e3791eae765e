use std::time::{Duration, Instant};

use crate::core::config::EditorConfig;
use crate::features::categories::drag::clock::{Clock, SystemClock};

/// Screen-space box of a rendered category card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPosition {
    Top,
    Bottom,
}

/// Advisory drop marker drawn above or below the card under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionTarget {
    pub id: i64,
    pub position: InsertionPosition,
}

/// Pointer is over a droppable card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOver {
    pub target_id: i64,
    pub pointer_y: f64,
    pub target_rect: Rect,
}

/// Pointer released
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragEnd {
    pub over_id: Option<i64>,
    /// `dragged.left - target.left`; negative when the dragged card sits to
    /// the left of the target. `None` when geometry was unavailable.
    pub horizontal_offset: Option<f64>,
}

impl DragEnd {
    pub fn over(target_id: i64, dragged_rect: Rect, target_rect: Rect) -> Self {
        Self {
            over_id: Some(target_id),
            horizontal_offset: Some(dragged_rect.left - target_rect.left),
        }
    }

    pub fn over_without_geometry(target_id: i64) -> Self {
        Self {
            over_id: Some(target_id),
            horizontal_offset: None,
        }
    }

    pub fn nowhere() -> Self {
        Self::default()
    }
}

/// A finished gesture, ready for drop resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropGesture {
    pub dragged_id: i64,
    pub target_id: Option<i64>,
    /// Card that had been hovered for the full dwell time when the pointer was released
    pub potential_parent_id: Option<i64>,
    pub horizontal_offset: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    HoverPending,
    HoverConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hover {
    None,
    Pending { target_id: i64, deadline: Instant },
    Confirmed { target_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveDrag {
    active_id: i64,
    over_id: Option<i64>,
    hover: Hover,
    insertion_target: Option<InsertionTarget>,
}

/// Lifecycle of one drag gesture in the category tree editor.
///
/// The hover-to-nest timer is a deadline checked against the injected
/// clock, so there is never a callback left to fire after the gesture ends.
pub struct DragSession<C: Clock = SystemClock> {
    clock: C,
    dwell: Duration,
    active: Option<ActiveDrag>,
}

impl DragSession<SystemClock> {
    pub fn new(dwell: Duration) -> Self {
        Self::with_clock(SystemClock, dwell)
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.hover_dwell)
    }
}

impl<C: Clock> DragSession<C> {
    pub fn with_clock(clock: C, dwell: Duration) -> Self {
        Self {
            clock,
            dwell,
            active: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        match &self.active {
            None => DragPhase::Idle,
            Some(drag) => match self.effective_hover(drag.hover) {
                Hover::None => DragPhase::Dragging,
                Hover::Pending { .. } => DragPhase::HoverPending,
                Hover::Confirmed { .. } => DragPhase::HoverConfirmed,
            },
        }
    }

    pub fn active_id(&self) -> Option<i64> {
        self.active.map(|d| d.active_id)
    }

    pub fn over_id(&self) -> Option<i64> {
        self.active.and_then(|d| d.over_id)
    }

    pub fn insertion_target(&self) -> Option<InsertionTarget> {
        self.active.and_then(|d| d.insertion_target)
    }

    /// Card highlighted as the nesting target, once the dwell has elapsed
    pub fn potential_parent_id(&self) -> Option<i64> {
        let drag = self.active?;
        match self.effective_hover(drag.hover) {
            Hover::Confirmed { target_id } => Some(target_id),
            _ => None,
        }
    }

    pub fn drag_start(&mut self, node_id: i64) {
        if self.active.is_some() {
            tracing::debug!("Drag restarted before the previous gesture ended");
        }
        self.active = Some(ActiveDrag {
            active_id: node_id,
            over_id: None,
            hover: Hover::None,
            insertion_target: None,
        });
    }

    /// Pointer moved over a card (`Some`) or off every card (`None`)
    pub fn drag_over(&mut self, over: Option<DragOver>) {
        let now = self.clock.now();
        let dwell = self.dwell;
        let Some(drag) = self.active.as_mut() else {
            return;
        };

        drag.hover = settle(drag.hover, now);

        let Some(over) = over else {
            drag.over_id = None;
            drag.hover = Hover::None;
            drag.insertion_target = None;
            return;
        };

        if drag.over_id != Some(over.target_id) {
            drag.over_id = Some(over.target_id);
            drag.hover = Hover::Pending {
                target_id: over.target_id,
                deadline: now + dwell,
            };
        }

        let position = if over.pointer_y < over.target_rect.mid_y() {
            InsertionPosition::Top
        } else {
            InsertionPosition::Bottom
        };
        drag.insertion_target = Some(InsertionTarget {
            id: over.target_id,
            position,
        });
    }

    /// Fire the hover timer if it is due. Returns the newly confirmed target.
    pub fn tick(&mut self) -> Option<i64> {
        let now = self.clock.now();
        let drag = self.active.as_mut()?;
        let before = drag.hover;
        drag.hover = settle(before, now);

        match (before, drag.hover) {
            (Hover::Pending { .. }, Hover::Confirmed { target_id }) => Some(target_id),
            _ => None,
        }
    }

    /// Finish the gesture and reset every transient field.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn drag_end(&mut self, end: DragEnd) -> Option<DropGesture> {
        let potential_parent_id = self.potential_parent_id();
        let drag = self.active.take()?;

        Some(DropGesture {
            dragged_id: drag.active_id,
            target_id: end.over_id,
            potential_parent_id,
            horizontal_offset: end.horizontal_offset,
        })
    }

    /// Abandon the gesture without producing a drop (editor teardown)
    pub fn cancel(&mut self) {
        self.active = None;
    }

    fn effective_hover(&self, hover: Hover) -> Hover {
        settle(hover, self.clock.now())
    }
}

fn settle(hover: Hover, now: Instant) -> Hover {
    match hover {
        Hover::Pending {
            target_id,
            deadline,
        } if now >= deadline => Hover::Confirmed { target_id },
        other => other,
    }
}
