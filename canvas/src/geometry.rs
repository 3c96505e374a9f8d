//! Geometry value types and the containment clamps applied before every commit.
//!
//! All functions here are pure. The container is the workspace element whose
//! bounding box the layout engine reports; positions are offsets from its
//! top-left corner in CSS pixels.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A top/left offset inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    #[must_use]
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Offset this position by a `[dx, dy]` translation as reported by the pointer library.
    #[must_use]
    pub fn translated(self, before_translate: [f64; 2]) -> Self {
        Self { top: self.top + before_translate[1], left: self.left + before_translate[0] }
    }
}

/// A width/height extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Clamp a proposed drag position so a box of `size` stays inside `container`.
///
/// A box larger than the container is pinned to the container origin on that
/// axis and overflows toward the bottom/right.
#[must_use]
pub fn clamp_move(proposed: Position, size: Size, container: Size) -> Position {
    Position {
        top: clamp_offset(proposed.top, size.height, container.height),
        left: clamp_offset(proposed.left, size.width, container.width),
    }
}

/// Clamp a proposed resize so the box anchored at `top_left` does not cross the
/// container's right or bottom edge. Extents never go negative.
#[must_use]
pub fn clamp_resize(top_left: Position, proposed: Size, container: Size) -> Size {
    Size {
        width: clamp_extent(top_left.left, proposed.width, container.width),
        height: clamp_extent(top_left.top, proposed.height, container.height),
    }
}

fn clamp_offset(offset: f64, extent: f64, bound: f64) -> f64 {
    if offset < 0.0 {
        0.0
    } else if offset + extent > bound {
        (bound - extent).max(0.0)
    } else {
        offset
    }
}

fn clamp_extent(offset: f64, extent: f64, bound: f64) -> f64 {
    let extent = if offset + extent > bound { bound - offset } else { extent };
    extent.max(0.0)
}
