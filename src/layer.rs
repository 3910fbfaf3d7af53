//! Layering engine: adjacent z-order swaps.
//!
//! Moves one item a single step up or down in paint order by touching at most
//! two items: the target and whichever neighbor previously occupied the slot
//! it moves into. z-indexes are a loose ordering key, not a dense
//! permutation; removals leave gaps and these functions never renumber the
//! whole state to repair them.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use crate::doc::{CanvasState, ItemId};

/// Direction for a toolbar layer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDirection {
    /// One step toward the top of the paint order.
    Forward,
    /// One step toward the bottom of the paint order.
    Backward,
}

/// Move the item one step up in paint order.
///
/// No-op when the id is unknown or the item is already topmost. If another
/// item occupied the slot the target moves into, that neighbor is pushed
/// down one step; otherwise only the target changes and the gap stands.
pub fn bring_forward(state: &mut CanvasState, id: &ItemId) {
    let Some(target_z) = state.get(id).map(|item| item.z_index) else {
        return;
    };
    let max_z = state.items().map(|item| item.z_index).max().unwrap_or(0).max(0);
    if target_z >= max_z {
        return;
    }
    shift(state, id, target_z + 1, -1);
}

/// Move the item one step down in paint order.
///
/// Symmetric to [`bring_forward`]: no-op when unknown or already
/// bottommost; the displaced neighbor (if any) is pushed up one step.
pub fn send_backward(state: &mut CanvasState, id: &ItemId) {
    let Some(target_z) = state.get(id).map(|item| item.z_index) else {
        return;
    };
    let min_z = state.items().map(|item| item.z_index).min().unwrap_or(0).min(0);
    if target_z <= min_z {
        return;
    }
    shift(state, id, target_z - 1, 1);
}

/// Move the target to `new_z` and nudge the first other item found at that
/// slot by `neighbor_delta`. When duplicates already share the slot only one
/// neighbor moves; an accepted approximation, not a permutation maintainer.
fn shift(state: &mut CanvasState, id: &ItemId, new_z: i64, neighbor_delta: i64) {
    let neighbor = state
        .items()
        .find(|item| item.id != *id && item.z_index == new_z)
        .map(|item| item.id);
    if let Some(target) = state.get_mut(id) {
        target.z_index = new_z;
    }
    if let Some(neighbor_id) = neighbor {
        if let Some(neighbor) = state.get_mut(&neighbor_id) {
            neighbor.z_index += neighbor_delta;
        }
    }
}
