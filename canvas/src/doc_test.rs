#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn store_with(n: usize) -> (RectStore, Vec<RectId>) {
    let mut store = RectStore::new();
    let ids = (0..n).map(|_| store.create_with_color(Color::Blue).id).collect();
    (store, ids)
}

// =============================================================
// Color
// =============================================================

#[test]
fn color_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Color::Purple).unwrap(), "\"purple\"");
    let back: Color = serde_json::from_str("\"yellow\"").unwrap();
    assert_eq!(back, Color::Yellow);
}

#[test]
fn color_deserialize_unknown_rejects() {
    assert!(serde_json::from_str::<Color>("\"magenta\"").is_err());
}

#[test]
fn color_random_stays_in_palette() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        assert!(Color::PALETTE.contains(&Color::random(&mut rng)));
    }
}

#[test]
fn color_random_reaches_every_entry() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut seen = [false; 5];
    for _ in 0..500 {
        let c = Color::random(&mut rng);
        let idx = Color::PALETTE.iter().position(|p| *p == c).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn color_css_names_match_serde() {
    for c in Color::PALETTE {
        assert_eq!(serde_json::to_string(&c).unwrap(), format!("\"{}\"", c.as_css()));
    }
}

// =============================================================
// create
// =============================================================

#[test]
fn create_on_empty_store_yields_default_rectangle() {
    let mut store = RectStore::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let rect = store.create(&mut rng);

    assert_eq!(store.len(), 1);
    assert_eq!(store.rectangles()[0], rect);
    assert_eq!(rect.top, 0.0);
    assert_eq!(rect.left, 0.0);
    assert_eq!(rect.width, 100.0);
    assert_eq!(rect.height, 100.0);
    assert!(rect.update_end);
    assert!(Color::PALETTE.contains(&rect.color));
}

#[test]
fn create_assigns_fresh_monotonic_ids() {
    let (store, ids) = store_with(4);
    assert_eq!(ids, vec![RectId(1), RectId(2), RectId(3), RectId(4)]);
    assert_eq!(store.len(), 4);
}

#[test]
fn create_ids_not_reused_after_delete() {
    let (mut store, ids) = store_with(2);
    store.delete(ids[1]);
    let next = store.create_with_color(Color::Red);
    assert_eq!(next.id, RectId(3));
}

#[test]
fn create_appends_at_end() {
    let (mut store, ids) = store_with(2);
    let c = store.create_with_color(Color::Green);
    let order: Vec<RectId> = store.rectangles().iter().map(|r| r.id).collect();
    assert_eq!(order, vec![ids[0], ids[1], c.id]);
}

// =============================================================
// update
// =============================================================

#[test]
fn update_merges_only_present_fields() {
    let (mut store, ids) = store_with(1);
    let partial = PartialRectangle { top: Some(40.0), width: Some(250.0), ..Default::default() };
    assert!(store.update(ids[0], &partial, false));

    let r = store.get(ids[0]).unwrap();
    assert_eq!(r.top, 40.0);
    assert_eq!(r.left, 0.0);
    assert_eq!(r.width, 250.0);
    assert_eq!(r.height, 100.0);
    assert_eq!(r.color, Color::Blue);
    assert!(!r.update_end);
}

#[test]
fn update_sets_update_end_flag() {
    let (mut store, ids) = store_with(1);
    store.update(ids[0], &PartialRectangle::default(), false);
    assert!(!store.get(ids[0]).unwrap().update_end);
    store.update(ids[0], &PartialRectangle::default(), true);
    assert!(store.get(ids[0]).unwrap().update_end);
}

#[test]
fn update_unknown_id_is_noop() {
    let (mut store, ids) = store_with(2);
    let before = store.rectangles().to_vec();
    assert!(!store.update(RectId(99), &PartialRectangle::at(Position::new(5.0, 5.0)), true));
    assert_eq!(store.rectangles(), before.as_slice());
    assert_eq!(store.get(ids[0]).unwrap().top, 0.0);
}

#[test]
fn update_last_write_wins() {
    let (mut store, ids) = store_with(1);
    store.update(ids[0], &PartialRectangle::at(Position::new(10.0, 10.0)), false);
    store.update(ids[0], &PartialRectangle::at(Position::new(20.0, 30.0)), false);
    assert_eq!(store.get(ids[0]).unwrap().position(), Position::new(20.0, 30.0));
}

#[test]
fn update_same_fields_twice_is_idempotent() {
    let (mut store, ids) = store_with(1);
    let partial = PartialRectangle::geometry(Position::new(12.0, 34.0), Size::new(56.0, 78.0));
    store.update(ids[0], &partial, true);
    let once = store.get(ids[0]).unwrap().clone();
    store.update(ids[0], &partial, true);
    assert_eq!(store.get(ids[0]).unwrap(), &once);
}

#[test]
fn update_touches_only_target() {
    let (mut store, ids) = store_with(2);
    store.update(ids[0], &PartialRectangle::at(Position::new(1.0, 2.0)), false);
    let other = store.get(ids[1]).unwrap();
    assert_eq!(other.position(), Position::new(0.0, 0.0));
    assert!(other.update_end);
}

// =============================================================
// delete / select
// =============================================================

#[test]
fn delete_removes_and_returns_rectangle() {
    let (mut store, ids) = store_with(3);
    let removed = store.delete(ids[1]).unwrap();
    assert_eq!(removed.id, ids[1]);
    let order: Vec<RectId> = store.rectangles().iter().map(|r| r.id).collect();
    assert_eq!(order, vec![ids[0], ids[2]]);
}

#[test]
fn delete_unknown_id_leaves_state_unchanged() {
    let (mut store, ids) = store_with(2);
    store.select(Some(ids[0]));
    let before = store.rectangles().to_vec();
    assert!(store.delete(RectId(404)).is_none());
    assert_eq!(store.rectangles(), before.as_slice());
    assert_eq!(store.selected_id(), Some(ids[0]));
}

#[test]
fn delete_selected_clears_selection() {
    let (mut store, ids) = store_with(2);
    store.select(Some(ids[1]));
    store.delete(ids[1]);
    assert_eq!(store.selected_id(), None);
}

#[test]
fn delete_unselected_keeps_selection() {
    let (mut store, ids) = store_with(2);
    let (a, b) = (ids[0], ids[1]);
    store.select(Some(a));
    store.select(Some(b));
    store.delete(a);
    assert_eq!(store.selected_id(), Some(b));
    assert_eq!(store.len(), 1);
    assert_eq!(store.rectangles()[0].id, b);
}

#[test]
fn select_stale_id_is_tolerated() {
    let (mut store, _) = store_with(1);
    store.select(Some(RectId(77)));
    assert_eq!(store.selected_id(), Some(RectId(77)));
    assert!(store.get(RectId(77)).is_none());
}

#[test]
fn select_none_deselects() {
    let (mut store, ids) = store_with(1);
    store.select(Some(ids[0]));
    assert_eq!(store.selected_id(), Some(ids[0]));
    store.select(None);
    assert_eq!(store.selected_id(), None);
}

// =============================================================
// PartialRectangle serde
// =============================================================

#[test]
fn partial_skips_absent_fields() {
    let json = serde_json::to_value(PartialRectangle::at(Position::new(1.0, 2.0))).unwrap();
    assert_eq!(json, serde_json::json!({ "top": 1.0, "left": 2.0 }));
}

#[test]
fn rect_id_serializes_transparently() {
    assert_eq!(serde_json::to_string(&RectId(12)).unwrap(), "12");
    assert_eq!(RectId(12).to_string(), "12");
}
