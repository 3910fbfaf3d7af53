#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;

fn make_item(catalog_item_id: &str, z: i64) -> CanvasItem {
    let mut item = CanvasItem::new(catalog_item_id, Point::new(0.0, 0.0));
    item.z_index = z;
    item
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_serde_roundtrip() {
    let p = Point::new(1.5, -2.5);
    let json = serde_json::to_string(&p).unwrap();
    let back: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(p, back);
}

// =============================================================
// CanvasItem creation
// =============================================================

#[test]
fn new_item_defaults() {
    let item = CanvasItem::new("tshirt-1", Point::new(10.0, 20.0));
    assert_eq!(item.catalog_item_id, "tshirt-1");
    assert_eq!(item.position, Point::new(10.0, 20.0));
    assert_eq!(item.scale, 1.0);
    assert_eq!(item.rotation, 0.0);
    assert_eq!(item.z_index, 0);
}

#[test]
fn new_items_get_unique_ids() {
    let a = CanvasItem::new("tshirt-1", Point::new(0.0, 0.0));
    let b = CanvasItem::new("tshirt-1", Point::new(0.0, 0.0));
    assert_ne!(a.id, b.id);
}

// =============================================================
// with_position
// =============================================================

#[test]
fn with_position_replaces_coordinates() {
    let item = CanvasItem::new("hat-2", Point::new(0.0, 0.0));
    let moved = item.with_position(120.0, 160.0);
    assert_eq!(moved.position, Point::new(120.0, 160.0));
}

#[test]
fn with_position_does_not_mutate_original() {
    let item = CanvasItem::new("hat-2", Point::new(5.0, 5.0));
    let _moved = item.with_position(99.0, 99.0);
    assert_eq!(item.position, Point::new(5.0, 5.0));
}

#[test]
fn with_position_allows_negative_and_offboard() {
    let item = CanvasItem::new("hat-2", Point::new(0.0, 0.0));
    let moved = item.with_position(-300.0, 1e6);
    assert_eq!(moved.position.x, -300.0);
    assert_eq!(moved.position.y, 1e6);
}

#[test]
fn with_position_preserves_other_fields() {
    let mut item = CanvasItem::new("hat-2", Point::new(0.0, 0.0));
    item.z_index = 7;
    let moved = item.with_position(1.0, 2.0);
    assert_eq!(moved.id, item.id);
    assert_eq!(moved.z_index, 7);
    assert_eq!(moved.scale, 1.0);
}

// =============================================================
// with_scale
// =============================================================

#[test]
fn with_scale_applies_delta() {
    let item = CanvasItem::new("shoe-3", Point::new(0.0, 0.0));
    let scaled = item.with_scale(0.1);
    assert!((scaled.scale - 1.1).abs() < 1e-12);
}

#[test]
fn with_scale_clamps_upper_bound() {
    let mut item = CanvasItem::new("shoe-3", Point::new(0.0, 0.0));
    item.scale = 2.0;
    let scaled = item.with_scale(0.1);
    assert_eq!(scaled.scale, 2.0);
}

#[test]
fn with_scale_clamps_lower_bound() {
    let mut item = CanvasItem::new("shoe-3", Point::new(0.0, 0.0));
    item.scale = 0.5;
    let scaled = item.with_scale(-0.1);
    assert_eq!(scaled.scale, 0.5);
}

#[test]
fn with_scale_clamps_large_delta() {
    let item = CanvasItem::new("shoe-3", Point::new(0.0, 0.0));
    assert_eq!(item.with_scale(100.0).scale, 2.0);
    assert_eq!(item.with_scale(-100.0).scale, 0.5);
}

#[test]
fn with_scale_step_sequence_stays_in_domain() {
    let mut item = CanvasItem::new("shoe-3", Point::new(0.0, 0.0));
    for _ in 0..30 {
        item = item.with_scale(0.1);
        assert!(item.scale <= 2.0);
    }
    for _ in 0..60 {
        item = item.with_scale(-0.1);
        assert!(item.scale >= 0.5);
    }
}

#[test]
fn with_scale_does_not_mutate_original() {
    let item = CanvasItem::new("shoe-3", Point::new(0.0, 0.0));
    let _scaled = item.with_scale(0.5);
    assert_eq!(item.scale, 1.0);
}

// =============================================================
// with_rotation
// =============================================================

#[test]
fn with_rotation_applies_delta() {
    let item = CanvasItem::new("coat-4", Point::new(0.0, 0.0));
    let rotated = item.with_rotation(15.0);
    assert_eq!(rotated.rotation, 15.0);
}

#[test]
fn with_rotation_wraps_at_360() {
    let mut item = CanvasItem::new("coat-4", Point::new(0.0, 0.0));
    item.rotation = 350.0;
    let rotated = item.with_rotation(15.0);
    assert!((rotated.rotation - 5.0).abs() < 1e-9);
}

#[test]
fn with_rotation_negative_delta_stays_non_negative() {
    let item = CanvasItem::new("coat-4", Point::new(0.0, 0.0));
    let rotated = item.with_rotation(-15.0);
    assert!((rotated.rotation - 345.0).abs() < 1e-9);
    assert!(rotated.rotation >= 0.0);
}

#[test]
fn twenty_four_rotate_steps_return_to_start() {
    let mut item = CanvasItem::new("coat-4", Point::new(0.0, 0.0));
    for _ in 0..24 {
        item = item.with_rotation(15.0);
    }
    assert!(item.rotation.abs() < 1e-9 || (item.rotation - 360.0).abs() < 1e-9);
    assert!(item.rotation < 360.0);
}

#[test]
fn with_rotation_does_not_mutate_original() {
    let item = CanvasItem::new("coat-4", Point::new(0.0, 0.0));
    let _rotated = item.with_rotation(90.0);
    assert_eq!(item.rotation, 0.0);
}

// =============================================================
// CanvasItem serde
// =============================================================

#[test]
fn canvas_item_serde_roundtrip() {
    let mut item = CanvasItem::new("dress-5", Point::new(12.5, -3.0));
    item.scale = 1.4;
    item.rotation = 45.0;
    item.z_index = 3;
    let json = serde_json::to_string(&item).unwrap();
    let back: CanvasItem = serde_json::from_str(&json).unwrap();
    assert_eq!(item, back);
}

// =============================================================
// CanvasState store
// =============================================================

#[test]
fn new_state_is_empty() {
    let state = CanvasState::new();
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
}

#[test]
fn insert_and_get() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item);
    assert_eq!(state.len(), 1);
    assert!(state.get(&id).is_some());
}

#[test]
fn insert_same_id_overwrites() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item.clone());
    let replacement = item.with_position(9.0, 9.0);
    state.insert(replacement);
    assert_eq!(state.len(), 1);
    assert_eq!(state.get(&id).unwrap().position, Point::new(9.0, 9.0));
}

#[test]
fn remove_returns_item() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item);
    let removed = state.remove(&id);
    assert!(removed.is_some());
    assert!(state.is_empty());
}

#[test]
fn remove_unknown_id_returns_none() {
    let mut state = CanvasState::new();
    assert!(state.remove(&Uuid::new_v4()).is_none());
}

#[test]
fn clear_empties_state() {
    let mut state = CanvasState::new();
    state.insert(make_item("a", 0));
    state.insert(make_item("b", 1));
    state.clear();
    assert!(state.is_empty());
}

#[test]
fn sorted_items_orders_by_z() {
    let mut state = CanvasState::new();
    let low = make_item("low", 0);
    let high = make_item("high", 5);
    let mid = make_item("mid", 2);
    let (low_id, mid_id, high_id) = (low.id, mid.id, high.id);
    state.insert(high);
    state.insert(low);
    state.insert(mid);
    let ids: Vec<ItemId> = state.sorted_items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![low_id, mid_id, high_id]);
}

#[test]
fn sorted_items_ties_break_by_id() {
    let mut state = CanvasState::new();
    let a = make_item("a", 1);
    let b = make_item("b", 1);
    state.insert(a.clone());
    state.insert(b.clone());
    let ids: Vec<ItemId> = state.sorted_items().iter().map(|item| item.id).collect();
    let mut expected = vec![a.id, b.id];
    expected.sort();
    assert_eq!(ids, expected);
}

// =============================================================
// apply_patch
// =============================================================

#[test]
fn apply_patch_position() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item);
    let applied = state.apply_patch(
        &id,
        &ItemPatch { position: Some(Point::new(120.0, 160.0)), ..ItemPatch::default() },
    );
    assert!(applied);
    assert_eq!(state.get(&id).unwrap().position, Point::new(120.0, 160.0));
}

#[test]
fn apply_patch_scale_routes_through_clamp() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item);
    state.apply_patch(&id, &ItemPatch { scale_by: Some(100.0), ..ItemPatch::default() });
    assert_eq!(state.get(&id).unwrap().scale, 2.0);
}

#[test]
fn apply_patch_rotation_routes_through_wrap() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item);
    state.apply_patch(&id, &ItemPatch { rotate_by: Some(375.0), ..ItemPatch::default() });
    assert!((state.get(&id).unwrap().rotation - 15.0).abs() < 1e-9);
}

#[test]
fn apply_patch_combined_fields() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item);
    let patch = ItemPatch {
        position: Some(Point::new(1.0, 2.0)),
        scale_by: Some(0.1),
        rotate_by: Some(15.0),
    };
    state.apply_patch(&id, &patch);
    let updated = state.get(&id).unwrap();
    assert_eq!(updated.position, Point::new(1.0, 2.0));
    assert!((updated.scale - 1.1).abs() < 1e-12);
    assert_eq!(updated.rotation, 15.0);
}

#[test]
fn apply_patch_unknown_id_returns_false() {
    let mut state = CanvasState::new();
    let applied = state.apply_patch(
        &Uuid::new_v4(),
        &ItemPatch { position: Some(Point::new(0.0, 0.0)), ..ItemPatch::default() },
    );
    assert!(!applied);
}

#[test]
fn empty_patch_leaves_item_unchanged() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item.clone());
    state.apply_patch(&id, &ItemPatch::default());
    assert_eq!(state.get(&id).unwrap(), &item);
}

// =============================================================
// Snapshot independence
// =============================================================

#[test]
fn cloned_state_does_not_alias_live_state() {
    let mut state = CanvasState::new();
    let item = make_item("tshirt-1", 0);
    let id = item.id;
    state.insert(item);
    let snapshot = state.clone();
    state.apply_patch(
        &id,
        &ItemPatch { position: Some(Point::new(500.0, 500.0)), ..ItemPatch::default() },
    );
    assert_eq!(snapshot.get(&id).unwrap().position, Point::new(0.0, 0.0));
}
