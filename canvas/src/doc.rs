//! Document model: rectangles, their sparse updates, and the workspace store.
//!
//! This module defines the data that describes what is on the workspace
//! (`Rectangle`, `Color`), a sparse-update type for incremental geometry edits
//! (`PartialRectangle`), and the runtime store that owns all live rectangles
//! together with the current selection (`RectStore`).
//!
//! Mutations arrive from the interaction controller in [`crate::engine`]. The
//! render layer reads `rectangles()` in order: later entries draw on top.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_LEFT, DEFAULT_TOP, DEFAULT_WIDTH, FIRST_RECT_ID};
use crate::geometry::{Position, Size};

/// Unique identifier for a rectangle. Handed out by a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RectId(pub u64);

impl fmt::Display for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fill color label. Chosen once at creation and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
}

impl Color {
    /// The fixed palette new rectangles draw from.
    pub const PALETTE: [Color; 5] = [Color::Red, Color::Blue, Color::Yellow, Color::Green, Color::Purple];

    /// Pick a palette entry uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }

    /// CSS color keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }
}

/// A rectangle as stored in the workspace and handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Unique identifier, fixed for the rectangle's lifetime.
    pub id: RectId,
    /// Offset from the container's top edge.
    pub top: f64,
    /// Offset from the container's left edge.
    pub left: f64,
    /// Horizontal extent; never negative.
    pub width: f64,
    /// Vertical extent; never negative.
    pub height: f64,
    /// Fill color.
    pub color: Color,
    /// `false` while a gesture is still previewing, `true` once the value is final.
    pub update_end: bool,
}

impl Rectangle {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.top, self.left)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Sparse update for a rectangle. Only present fields are applied.
///
/// `id` and `color` are deliberately absent: neither may change after creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialRectangle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PartialRectangle {
    /// Position-only update.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { top: Some(position.top), left: Some(position.left), ..Self::default() }
    }

    /// Full geometry update.
    #[must_use]
    pub fn geometry(position: Position, size: Size) -> Self {
        Self {
            top: Some(position.top),
            left: Some(position.left),
            width: Some(size.width),
            height: Some(size.height),
        }
    }
}

/// Ordered store of workspace rectangles plus the current selection.
#[derive(Debug)]
pub struct RectStore {
    rectangles: Vec<Rectangle>,
    selected_id: Option<RectId>,
    next_id: u64,
}

impl RectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { rectangles: Vec::new(), selected_id: None, next_id: FIRST_RECT_ID }
    }

    /// Append a new default rectangle with a random palette color.
    pub fn create<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Rectangle {
        self.create_with_color(Color::random(rng))
    }

    /// Append a new default rectangle with the given color.
    pub fn create_with_color(&mut self, color: Color) -> Rectangle {
        let id = RectId(self.next_id);
        self.next_id += 1;
        let rect = Rectangle {
            id,
            top: DEFAULT_TOP,
            left: DEFAULT_LEFT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color,
            update_end: true,
        };
        self.rectangles.push(rect.clone());
        debug!(%id, color = color.as_css(), "rectangle created");
        rect
    }

    /// Merge `partial` into the rectangle `id` and set its `update_end` flag.
    ///
    /// Returns false if the rectangle doesn't exist; late events for a
    /// deleted rectangle land here and are dropped.
    pub fn update(&mut self, id: RectId, partial: &PartialRectangle, update_end: bool) -> bool {
        let Some(rect) = self.get_mut(id) else {
            trace!(%id, "update for unknown rectangle ignored");
            return false;
        };
        if let Some(top) = partial.top {
            rect.top = top;
        }
        if let Some(left) = partial.left {
            rect.left = left;
        }
        if let Some(width) = partial.width {
            rect.width = width;
        }
        if let Some(height) = partial.height {
            rect.height = height;
        }
        rect.update_end = update_end;
        true
    }

    /// Remove a rectangle, clearing the selection if it pointed at it.
    pub fn delete(&mut self, id: RectId) -> Option<Rectangle> {
        let index = self.rectangles.iter().position(|r| r.id == id)?;
        let removed = self.rectangles.remove(index);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        debug!(%id, "rectangle deleted");
        Some(removed)
    }

    /// Set or clear the selection. Existence is not checked.
    pub fn select(&mut self, id: Option<RectId>) {
        self.selected_id = id;
    }

    #[must_use]
    pub fn get(&self, id: RectId) -> Option<&Rectangle> {
        self.rectangles.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: RectId) -> Option<&mut Rectangle> {
        self.rectangles.iter_mut().find(|r| r.id == id)
    }

    /// All rectangles in insertion (draw) order.
    #[must_use]
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// The selected id, which may refer to a rectangle that no longer exists.
    #[must_use]
    pub fn selected_id(&self) -> Option<RectId> {
        self.selected_id
    }

    #[must_use]
    pub fn contains(&self, id: RectId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }
}

impl Default for RectStore {
    fn default() -> Self {
        Self::new()
    }
}
