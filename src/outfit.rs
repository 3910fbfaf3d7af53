//! Persisted outfit representation and the catalog boundary.
//!
//! An outfit is saved as an ordered list of flat records carrying the
//! catalog reference and the item geometry. The record shape is the exact
//! wire format the surrounding app writes and reads back; field names are
//! camelCase on the wire. The catalog itself is external and read-only; the
//! canvas only ever looks entries up, it never mutates them.

#[cfg(test)]
#[path = "outfit_test.rs"]
mod outfit_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A catalog entry as visible to the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Opaque catalog identifier.
    pub id: String,
    /// Display image for the item.
    pub image_url: String,
    /// Human-readable item name.
    pub display_name: String,
}

/// Read-only lookup from a catalog item id to its entry.
pub trait CatalogLookup {
    /// Return the entry for `catalog_item_id`, if the catalog knows it.
    fn lookup(&self, catalog_item_id: &str) -> Option<&CatalogEntry>;
}

impl CatalogLookup for HashMap<String, CatalogEntry> {
    fn lookup(&self, catalog_item_id: &str) -> Option<&CatalogEntry> {
        self.get(catalog_item_id)
    }
}

/// One record of the persisted outfit wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    /// Opaque reference into the external catalog.
    pub catalog_item_id: String,
    /// Canvas-local x of the item's top-left corner.
    pub x: f64,
    /// Canvas-local y of the item's top-left corner.
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Stacking order key.
    pub z_index: i64,
}

/// Failure at the outfit serialization boundary.
#[derive(Debug, thiserror::Error)]
pub enum OutfitError {
    #[error("invalid outfit JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize an outfit to its JSON wire form.
pub fn encode_outfit(items: &[SavedItem]) -> Result<String, OutfitError> {
    Ok(serde_json::to_string(items)?)
}

/// Deserialize an outfit from its JSON wire form.
pub fn decode_outfit(json: &str) -> Result<Vec<SavedItem>, OutfitError> {
    Ok(serde_json::from_str(json)?)
}
