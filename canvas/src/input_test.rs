#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ResizeAnchor
// =============================================================

#[test]
fn anchor_serde_lowercase() {
    assert_eq!(serde_json::to_string(&ResizeAnchor::Se).unwrap(), "\"se\"");
}

// =============================================================
// GestureConfig
// =============================================================

#[test]
fn gesture_config_default_matches_library_setup() {
    let cfg = GestureConfig::default();
    assert!(cfg.draggable);
    assert!(cfg.resizable);
    assert!(!cfg.keep_ratio);
    assert!(!cfg.edge);
    assert!(!cfg.origin);
    assert_eq!(cfg.throttle_resize, 1.0);
    assert_eq!(cfg.zoom, 1.0);
    assert_eq!(cfg.render_directions.len(), 8);
}

#[test]
fn gesture_config_serializes_directions_in_render_order() {
    let json = serde_json::to_value(GestureConfig::default()).unwrap();
    assert_eq!(json["render_directions"], serde_json::json!(["nw", "n", "ne", "w", "e", "sw", "s", "se"]));
}

// =============================================================
// Event payloads
// =============================================================

#[test]
fn drag_end_event_reads_camel_case_translate() {
    let ev: DragEndEvent = serde_json::from_str(r#"{"top":4,"left":6,"beforeTranslate":[1.5,-2]}"#).unwrap();
    assert_eq!(ev.before_translate, [1.5, -2.0]);
}

#[test]
fn resize_event_reads_nested_drag() {
    let ev: ResizeEvent =
        serde_json::from_str(r#"{"width":120,"height":90,"drag":{"beforeTranslate":[-20,0]}}"#).unwrap();
    assert_eq!(ev.width, 120.0);
    assert_eq!(ev.drag.before_translate, [-20.0, 0.0]);
}

#[test]
fn resize_event_missing_drag_defaults_to_zero_translate() {
    let ev: ResizeEvent = serde_json::from_str(r#"{"width":10,"height":10}"#).unwrap();
    assert_eq!(ev.drag, DragTranslate::default());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
    assert!(!InputState::Dragging.is_idle());
}

#[test]
fn resizing_from_left_edge_records_snapshot() {
    let state = InputState::resizing([-1, 0], Position::new(10.0, 200.0), 150.0);
    let InputState::Resizing { left_edge, .. } = state else {
        panic!("expected resizing state");
    };
    assert_eq!(left_edge, Some(LeftEdgeAnchor { initial_left: 200.0, initial_width: 150.0 }));
}

#[test]
fn resizing_only_snapshots_for_left_handles() {
    for direction in [[-1, -1], [-1, 0], [-1, 1]] {
        let state = InputState::resizing(direction, Position::new(0.0, 50.0), 100.0);
        assert!(matches!(state, InputState::Resizing { left_edge: Some(_), .. }), "{direction:?}");
    }
    for direction in [[0, -1], [1, -1], [1, 0], [1, 1], [0, 1]] {
        let state = InputState::resizing(direction, Position::new(0.0, 50.0), 100.0);
        assert!(matches!(state, InputState::Resizing { left_edge: None, .. }), "{direction:?}");
    }
}

#[test]
fn resizing_from_right_edge_has_no_snapshot() {
    let state = InputState::resizing([1, 1], Position::new(0.0, 0.0), 100.0);
    let InputState::Resizing { left_edge, .. } = state else {
        panic!("expected resizing state");
    };
    assert_eq!(left_edge, None);
}

#[test]
fn resized_position_left_edge_uses_initial_left() {
    let state = InputState::resizing([-1, 0], Position::new(10.0, 200.0), 150.0);
    let at = state.resized_position([-30.0, 0.0]).unwrap();
    assert_eq!(at, Position::new(10.0, 170.0));
}

#[test]
fn resized_position_top_edge_shifts_top() {
    let state = InputState::resizing([0, -1], Position::new(50.0, 20.0), 100.0);
    let at = state.resized_position([0.0, -15.0]).unwrap();
    assert_eq!(at, Position::new(35.0, 20.0));
}

#[test]
fn resized_position_outside_resize_is_none() {
    assert!(InputState::Idle.resized_position([1.0, 1.0]).is_none());
    assert!(InputState::Dragging.resized_position([1.0, 1.0]).is_none());
}
