//! Document model: placed items, their pure mutators, and the canvas state.
//!
//! This module defines the core data types that describe what is on the board
//! (`CanvasItem`, `Point`), a sparse-update type for geometry edits
//! (`ItemPatch`), and the runtime store that owns all live items
//! (`CanvasState`). Scale clamping and rotation wrapping live in the
//! `CanvasItem` mutators, so no caller can bypass them.
//!
//! Data flows into this layer from persistence (`outfit` deserialization) and
//! from the engine (mutations). The renderer reads from `CanvasState` via
//! `sorted_items` to determine draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{SCALE_MAX, SCALE_MIN};

/// Unique identifier for a placed canvas item.
pub type ItemId = Uuid;

/// A point in canvas-local space (pixels, origin at the canvas top-left).
///
/// Coordinates are unbounded; items may sit outside the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One placed instance of a catalog item on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    /// Unique identifier for this placement; fresh per add.
    pub id: ItemId,
    /// Reference into the external, read-only catalog.
    pub catalog_item_id: String,
    /// Top-left position in canvas-local coordinates.
    pub position: Point,
    /// Uniform scale factor, always within `[SCALE_MIN, SCALE_MAX]`.
    pub scale: f64,
    /// Clockwise rotation in degrees, always within `[0, 360)`.
    pub rotation: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
}

impl CanvasItem {
    /// Create a new placement with a fresh id, scale 1, and no rotation.
    ///
    /// `z_index` starts at 0; the engine assigns the real value from the
    /// current item count at add time.
    #[must_use]
    pub fn new(catalog_item_id: impl Into<String>, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog_item_id: catalog_item_id.into(),
            position,
            scale: 1.0,
            rotation: 0.0,
            z_index: 0,
        }
    }

    /// Copy with the position replaced. No clamping; canvas-local
    /// coordinates are unbounded.
    #[must_use]
    pub fn with_position(&self, x: f64, y: f64) -> Self {
        Self { position: Point::new(x, y), ..self.clone() }
    }

    /// Copy with `delta` added to the scale, clamped to the scale domain.
    #[must_use]
    pub fn with_scale(&self, delta: f64) -> Self {
        Self { scale: (self.scale + delta).clamp(SCALE_MIN, SCALE_MAX), ..self.clone() }
    }

    /// Copy with `delta_degrees` added to the rotation, wrapped into
    /// `[0, 360)`. The result is non-negative for any input.
    #[must_use]
    pub fn with_rotation(&self, delta_degrees: f64) -> Self {
        Self { rotation: (self.rotation + delta_degrees).rem_euclid(360.0), ..self.clone() }
    }
}

/// Sparse geometry update for a canvas item. Only present fields are applied.
///
/// `position` is absolute; `scale_by` and `rotate_by` are deltas routed
/// through the clamping/wrapping mutators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    /// New canvas-local position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    /// Scale delta to apply, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_by: Option<f64>,
    /// Rotation delta in degrees to apply, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_by: Option<f64>,
}

/// In-memory store of placed items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasState {
    items: HashMap<ItemId, CanvasItem>,
}

impl CanvasState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self { items: HashMap::new() }
    }

    /// Insert or replace an item. If an item with the same `id` already
    /// exists it is overwritten.
    pub fn insert(&mut self, item: CanvasItem) {
        self.items.insert(item.id, item);
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<CanvasItem> {
        self.items.remove(id)
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CanvasItem> {
        self.items.get(id)
    }

    /// Return a mutable reference to an item by id.
    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut CanvasItem> {
        self.items.get_mut(id)
    }

    /// Iterate over all items in arbitrary order.
    pub fn items(&self) -> impl Iterator<Item = &CanvasItem> {
        self.items.values()
    }

    /// Apply a sparse geometry patch through the item mutators. Returns
    /// false if the item doesn't exist.
    pub fn apply_patch(&mut self, id: &ItemId, patch: &ItemPatch) -> bool {
        let Some(item) = self.items.get(id) else {
            return false;
        };
        let mut next = item.clone();
        if let Some(pos) = patch.position {
            next = next.with_position(pos.x, pos.y);
        }
        if let Some(delta) = patch.scale_by {
            next = next.with_scale(delta);
        }
        if let Some(delta) = patch.rotate_by {
            next = next.with_rotation(delta);
        }
        self.items.insert(*id, next);
        true
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Return all items sorted by `(z_index, id)` for draw-order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&CanvasItem> {
        let mut items: Vec<&CanvasItem> = self.items.values().collect();
        items.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// Number of items currently on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the board holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
