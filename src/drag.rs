//! Drag controller: screen-space box arithmetic and the gesture state machine.
//!
//! A drag gesture produces state exactly once, at its terminal frame.
//! Intermediate frames are a rendering concern and only update the tracked
//! box here. Committed positions are expressed relative to the canvas
//! container's top-left corner, which removes page-scroll and
//! container-placement offsets from the stored coordinates.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::doc::{ItemId, Point};

/// Axis-aligned screen-space bounding box (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Canvas-local position of an item box expressed relative to the canvas
/// container box.
#[must_use]
pub fn canvas_position(item_box: ScreenRect, container_box: ScreenRect) -> Point {
    Point::new(item_box.left - container_box.left, item_box.top - container_box.top)
}

/// State machine for the active drag gesture.
///
/// A cancelled gesture (pointer leaves the surface without a clean end
/// event) commits exactly like a completed one, using the last tracked box;
/// there is no rollback for an in-flight drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next drag start.
    #[default]
    Idle,
    /// An item is being dragged.
    Dragging {
        /// Id of the item being dragged.
        id: ItemId,
        /// Screen-space box of the item at the most recent frame, used to
        /// commit when the gesture is cancelled.
        last_item_box: ScreenRect,
    },
}

impl DragState {
    /// Start tracking a gesture on `id`.
    pub fn begin(&mut self, id: ItemId, item_box: ScreenRect) {
        *self = Self::Dragging { id, last_item_box: item_box };
    }

    /// Record an intermediate frame. No state commit happens here.
    pub fn track(&mut self, item_box: ScreenRect) {
        if let Self::Dragging { last_item_box, .. } = self {
            *last_item_box = item_box;
        }
    }

    /// End the gesture, returning the item and box to commit.
    ///
    /// `final_box` is the terminal frame when the gesture ended cleanly;
    /// `None` means the gesture was cancelled and the last tracked box is
    /// used instead. Returns `None` when no gesture was in progress.
    pub fn take(&mut self, final_box: Option<ScreenRect>) -> Option<(ItemId, ScreenRect)> {
        match *self {
            Self::Idle => None,
            Self::Dragging { id, last_item_box } => {
                *self = Self::Idle;
                Some((id, final_box.unwrap_or(last_item_box)))
            }
        }
    }

    /// Whether a gesture is currently being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
