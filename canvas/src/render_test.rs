#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::PartialRectangle;
use crate::geometry::Position;

#[test]
fn scene_of_empty_store_is_empty() {
    let store = RectStore::new();
    let scene = Scene::build(&store, |_| None);
    assert_eq!(scene, Scene::default());
}

#[test]
fn scene_preserves_insertion_order_and_marks_selection() {
    let mut store = RectStore::new();
    let a = store.create_with_color(Color::Red).id;
    let b = store.create_with_color(Color::Green).id;
    store.select(Some(b));

    let scene = Scene::build(&store, |_| None);
    let ids: Vec<RectId> = scene.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![a, b]);
    assert!(!scene.items[0].selected);
    assert!(scene.items[1].selected);
    assert_eq!(scene.selected_id, Some(b));
}

#[test]
fn scene_stale_selection_marks_nothing() {
    let mut store = RectStore::new();
    store.create_with_color(Color::Red);
    store.select(Some(RectId(50)));
    let scene = Scene::build(&store, |_| None);
    assert_eq!(scene.selected_id, Some(RectId(50)));
    assert!(scene.items.iter().all(|i| !i.selected));
}

#[test]
fn scene_copies_geometry_and_images() {
    let mut store = RectStore::new();
    let a = store.create_with_color(Color::Blue).id;
    store.update(a, &PartialRectangle::at(Position::new(30.0, 40.0)), false);

    let scene = Scene::build(&store, |id| (id == a).then_some("https://img.test/a"));
    let item = &scene.items[0];
    assert_eq!(item.top, 30.0);
    assert_eq!(item.left, 40.0);
    assert_eq!(item.width, 100.0);
    assert!(!item.update_end);
    assert_eq!(item.image_url.as_deref(), Some("https://img.test/a"));
}

#[test]
fn scene_json_omits_missing_image() {
    let mut store = RectStore::new();
    store.create_with_color(Color::Yellow);
    let json = serde_json::to_value(Scene::build(&store, |_| None)).unwrap();
    assert!(json["items"][0].get("image_url").is_none());
    assert_eq!(json["items"][0]["color"], "yellow");
    assert_eq!(json["selected_id"], serde_json::Value::Null);
}
