//! Input model: pointer-library events, resize handles, and the gesture state machine.
//!
//! The drag/resize library tracks the pointer itself and reports gestures as
//! start/progress/end events. The payload types here mirror its event shapes
//! (camelCase on the wire) so a host can forward them without translation.
//! `InputState` is the gesture being tracked for one rectangle between its
//! start and end events, carrying the context needed to turn translations
//! into absolute geometry.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LEFT_EDGE_DIRECTION, THROTTLE_RESIZE_PX};
use crate::geometry::Position;

/// Progress of a drag gesture: the library's proposed top/left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragEvent {
    pub top: f64,
    pub left: f64,
}

/// End of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEndEvent {
    pub top: f64,
    pub left: f64,
    /// Accumulated `[dx, dy]` translation applied before the transform.
    #[serde(default)]
    pub before_translate: [f64; 2],
}

/// Start of a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeStartEvent {
    /// Handle direction as `[dx, dy]`, each in `-1..=1`.
    pub direction: [i32; 2],
}

/// Translation the library applied to keep the opposite edge fixed during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragTranslate {
    pub before_translate: [f64; 2],
}

/// Progress or end of a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub drag: DragTranslate,
}

/// Resize handle position, one per compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAnchor {
    Nw,
    N,
    Ne,
    W,
    E,
    Sw,
    S,
    Se,
}

impl ResizeAnchor {
    /// All eight handles in the order the library renders them.
    pub const ALL: [ResizeAnchor; 8] = [
        ResizeAnchor::Nw,
        ResizeAnchor::N,
        ResizeAnchor::Ne,
        ResizeAnchor::W,
        ResizeAnchor::E,
        ResizeAnchor::Sw,
        ResizeAnchor::S,
        ResizeAnchor::Se,
    ];
}

/// Pointer-library settings the host applies to every rectangle.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureConfig {
    pub draggable: bool,
    pub resizable: bool,
    pub keep_ratio: bool,
    pub throttle_resize: f64,
    pub render_directions: Vec<ResizeAnchor>,
    pub edge: bool,
    pub origin: bool,
    pub zoom: f64,
    pub padding: [f64; 4],
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            draggable: true,
            resizable: true,
            keep_ratio: false,
            throttle_resize: THROTTLE_RESIZE_PX,
            render_directions: ResizeAnchor::ALL.to_vec(),
            edge: false,
            origin: false,
            zoom: 1.0,
            padding: [0.0; 4],
        }
    }
}

/// Pre-gesture snapshot recorded when a resize grabs the left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeftEdgeAnchor {
    pub initial_left: f64,
    pub initial_width: f64,
}

/// Gesture state for one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The rectangle is being moved.
    Dragging,
    /// The rectangle is being resized from one of its handles.
    Resizing {
        /// Rectangle position when the gesture started; translations are relative to it.
        origin: Position,
        /// Set when the handle is on the left edge.
        left_edge: Option<LeftEdgeAnchor>,
    },
}

impl InputState {
    /// Begin a resize for a rectangle currently at `origin` with `width`.
    #[must_use]
    pub fn resizing(direction: [i32; 2], origin: Position, width: f64) -> Self {
        let left_edge = (direction[0] == LEFT_EDGE_DIRECTION)
            .then_some(LeftEdgeAnchor { initial_left: origin.left, initial_width: width });
        Self::Resizing { origin, left_edge }
    }

    /// Absolute position of the rectangle after the library's `before_translate`.
    ///
    /// Left-edge resizes rebuild `left` from the recorded `initial_left`
    /// because the library's own top/left output jumps for that edge.
    #[must_use]
    pub fn resized_position(&self, before_translate: [f64; 2]) -> Option<Position> {
        match self {
            Self::Resizing { origin, left_edge } => {
                let mut at = origin.translated(before_translate);
                if let Some(anchor) = left_edge {
                    at.left = anchor.initial_left + before_translate[0];
                }
                Some(at)
            }
            Self::Idle | Self::Dragging => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
