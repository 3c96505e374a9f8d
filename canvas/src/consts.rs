//! Shared numeric constants for the canvas crate.

// ── New rectangles ──────────────────────────────────────────────

/// Width of a freshly created rectangle, in CSS pixels.
pub const DEFAULT_WIDTH: f64 = 100.0;

/// Height of a freshly created rectangle, in CSS pixels.
pub const DEFAULT_HEIGHT: f64 = 100.0;

/// Top offset of a freshly created rectangle.
pub const DEFAULT_TOP: f64 = 0.0;

/// Left offset of a freshly created rectangle.
pub const DEFAULT_LEFT: f64 = 0.0;

/// First id handed out by an empty store.
pub const FIRST_RECT_ID: u64 = 1;

// ── Pointer library ─────────────────────────────────────────────

/// Minimum pixel step between resize events requested from the pointer library.
pub const THROTTLE_RESIZE_PX: f64 = 1.0;

/// Horizontal handle direction reported for the left (west) edge.
pub const LEFT_EDGE_DIRECTION: i32 = -1;
