//! Selection controller: zero-or-one selected item.
//!
//! Selection gates which per-item controls (zoom, rotate, layer, delete) the
//! host renders. Selecting never validates the id; a stale selection is
//! harmless because every lookup elsewhere treats an unknown id as a no-op.
//! The board never auto-clears on background click; deselection happens only
//! by selecting another item, an explicit clear, or removal of the selected
//! item (handled by the engine).

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use crate::doc::ItemId;

/// Current selection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Unselected,
    /// Exactly one item selected.
    Selected(ItemId),
}

impl Selection {
    /// Select `id` unconditionally, replacing any prior selection.
    pub fn select(&mut self, id: ItemId) {
        *self = Self::Selected(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        *self = Self::Unselected;
    }

    /// The selected id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        match self {
            Self::Unselected => None,
            Self::Selected(id) => Some(*id),
        }
    }

    /// Whether `id` is the selected item.
    #[must_use]
    pub fn is_selected(&self, id: &ItemId) -> bool {
        matches!(self, Self::Selected(selected) if selected == id)
    }
}
