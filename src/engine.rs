//! Canvas engine: the orchestrator owning state, selection, and history.
//!
//! `CanvasEngine` is the only mutation surface for the live canvas. It
//! decides which operations are history-significant: add, remove, clear, and
//! outfit load push a snapshot; geometry edits (drag position, zoom, rotate)
//! and layer changes do not. That coarse-undo split mirrors the product
//! behavior and keeps a drag from flooding the log with per-pixel entries.
//!
//! The `on_*` methods form the UI event surface; they translate toolbar
//! directions and gesture boxes into the core operations above them.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::{DEFAULT_ITEM_X, DEFAULT_ITEM_Y, ROTATE_STEP_DEGREES, ZOOM_STEP};
use crate::doc::{CanvasItem, CanvasState, ItemId, ItemPatch, Point};
use crate::drag::{DragState, ScreenRect, canvas_position};
use crate::history::HistoryStack;
use crate::layer::{self, LayerDirection};
use crate::outfit::{CatalogLookup, SavedItem};
use crate::select::Selection;

/// Direction for a toolbar zoom action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Grow the item by one zoom step.
    In,
    /// Shrink the item by one zoom step.
    Out,
}

/// The composition engine. Owns the live state, the selection, the history
/// log, and the active drag gesture.
#[derive(Debug, Clone, Default)]
pub struct CanvasEngine {
    state: CanvasState,
    selection: Selection,
    history: HistoryStack,
    drag: DragState,
}

impl CanvasEngine {
    /// Create an engine with an empty board and empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Core operations ---

    /// Place a new catalog item at the default position.
    ///
    /// The item gets `z_index` equal to the current item count, so a run of
    /// adds stacks in add order. Records a history snapshot.
    pub fn add(&mut self, catalog_item_id: &str) -> ItemId {
        let mut item =
            CanvasItem::new(catalog_item_id, Point::new(DEFAULT_ITEM_X, DEFAULT_ITEM_Y));
        item.z_index = i64::try_from(self.state.len()).unwrap_or(i64::MAX);
        let id = item.id;
        self.state.insert(item);
        self.history.push(&self.state);
        tracing::debug!(%id, catalog_item_id, "item added");
        id
    }

    /// Apply a geometry patch to an item. Unknown ids are ignored.
    ///
    /// Deliberately records no history snapshot; geometry edits are excluded
    /// from undo.
    pub fn update(&mut self, id: &ItemId, patch: &ItemPatch) {
        self.state.apply_patch(id, patch);
    }

    /// Remove an item. Clears the selection if it pointed at the removed
    /// item. Records a history snapshot; unknown ids are a full no-op.
    pub fn remove(&mut self, id: &ItemId) {
        if self.state.remove(id).is_none() {
            return;
        }
        if self.selection.is_selected(id) {
            self.selection.clear();
        }
        self.history.push(&self.state);
        tracing::debug!(%id, "item removed");
    }

    /// Empty the board and clear the selection. Records a history snapshot.
    pub fn clear(&mut self) {
        self.state.clear();
        self.selection.clear();
        self.history.push(&self.state);
        tracing::debug!("board cleared");
    }

    /// Step back one history point, replacing the live state wholesale.
    ///
    /// No-op at the bottom of the log. The selection is left untouched; a
    /// selection pointing at an id no longer present degrades to no-ops.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.state = snapshot.clone();
            tracing::debug!(items = self.state.len(), "undo applied");
        }
    }

    /// Step forward one history point, replacing the live state wholesale.
    /// No-op at the top of the log.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.state = snapshot.clone();
            tracing::debug!(items = self.state.len(), "redo applied");
        }
    }

    /// Reconstruct the board from a persisted outfit.
    ///
    /// Records whose catalog id the lookup doesn't know are skipped with a
    /// warning. Persisted scale and rotation are routed through the item
    /// mutators so out-of-domain values normalize instead of leaking in.
    /// Ends with a single history push, making the loaded state point zero
    /// for the session.
    pub fn load_outfit(&mut self, saved: &[SavedItem], catalog: &impl CatalogLookup) {
        let mut state = CanvasState::new();
        for record in saved {
            if catalog.lookup(&record.catalog_item_id).is_none() {
                tracing::warn!(
                    catalog_item_id = %record.catalog_item_id,
                    "skipping outfit record with unknown catalog item"
                );
                continue;
            }
            let mut item = CanvasItem::new(
                record.catalog_item_id.clone(),
                Point::new(record.x, record.y),
            );
            item = item.with_scale(record.scale - 1.0);
            item = item.with_rotation(record.rotation);
            item.z_index = record.z_index;
            state.insert(item);
        }
        tracing::debug!(items = state.len(), "outfit loaded");
        self.state = state;
        self.selection.clear();
        self.drag = DragState::Idle;
        self.history.push(&self.state);
    }

    /// The persisted representation of the live board, in paint order.
    #[must_use]
    pub fn saved_items(&self) -> Vec<SavedItem> {
        self.state
            .sorted_items()
            .into_iter()
            .map(|item| SavedItem {
                catalog_item_id: item.catalog_item_id.clone(),
                x: item.position.x,
                y: item.position.y,
                scale: item.scale,
                rotation: item.rotation,
                z_index: item.z_index,
            })
            .collect()
    }

    // --- UI event surface ---

    /// Toolbar: add a catalog item to the board.
    pub fn on_add_item(&mut self, catalog_item_id: &str) -> ItemId {
        self.add(catalog_item_id)
    }

    /// An item was tapped; select it.
    pub fn on_select(&mut self, id: ItemId) {
        self.selection.select(id);
    }

    /// The host asked for an explicit deselect.
    pub fn on_deselect(&mut self) {
        self.selection.clear();
    }

    /// Toolbar: zoom the item one step in or out.
    pub fn on_zoom(&mut self, id: &ItemId, direction: ZoomDirection) {
        let delta = match direction {
            ZoomDirection::In => ZOOM_STEP,
            ZoomDirection::Out => -ZOOM_STEP,
        };
        self.update(id, &ItemPatch { scale_by: Some(delta), ..ItemPatch::default() });
    }

    /// Toolbar: rotate the item one step clockwise.
    pub fn on_rotate(&mut self, id: &ItemId) {
        self.update(id, &ItemPatch { rotate_by: Some(ROTATE_STEP_DEGREES), ..ItemPatch::default() });
    }

    /// Toolbar: move the item one layer forward or backward. Not
    /// history-significant.
    pub fn on_layer(&mut self, id: &ItemId, direction: LayerDirection) {
        match direction {
            LayerDirection::Forward => layer::bring_forward(&mut self.state, id),
            LayerDirection::Backward => layer::send_backward(&mut self.state, id),
        }
    }

    /// Toolbar: delete the item.
    pub fn on_delete(&mut self, id: &ItemId) {
        self.remove(id);
    }

    /// Toolbar: clear the board.
    pub fn on_clear(&mut self) {
        self.clear();
    }

    /// Keyboard/toolbar: undo.
    pub fn on_undo(&mut self) {
        self.undo();
    }

    /// Keyboard/toolbar: redo.
    pub fn on_redo(&mut self) {
        self.redo();
    }

    /// A drag gesture started on `id`.
    pub fn on_drag_start(&mut self, id: ItemId, item_box: ScreenRect) {
        self.drag.begin(id, item_box);
    }

    /// An intermediate drag frame. Tracked for cancellation only; commits
    /// nothing.
    pub fn on_drag_move(&mut self, item_box: ScreenRect) {
        self.drag.track(item_box);
    }

    /// The gesture ended cleanly over the canvas; commit the position.
    pub fn on_drag_end(&mut self, id: &ItemId, item_box: ScreenRect, container_box: ScreenRect) {
        self.drag.take(Some(item_box));
        let position = canvas_position(item_box, container_box);
        self.update(id, &ItemPatch { position: Some(position), ..ItemPatch::default() });
    }

    /// The gesture was cancelled (pointer left the surface without a clean
    /// end event). Committed identically to a clean end, using the last
    /// tracked box; there is no rollback for an uncommitted drag.
    pub fn on_drag_cancel(&mut self, container_box: ScreenRect) {
        if let Some((id, last_box)) = self.drag.take(None) {
            let position = canvas_position(last_box, container_box);
            self.update(&id, &ItemPatch { position: Some(position), ..ItemPatch::default() });
        }
    }

    // --- Queries ---

    /// The live canvas state, for rendering.
    #[must_use]
    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    /// All items in paint order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&CanvasItem> {
        self.state.sorted_items()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&CanvasItem> {
        self.state.get(id)
    }

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.selection.selected()
    }

    /// Whether the undo control should be enabled.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether the redo control should be enabled.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots in the history log.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
