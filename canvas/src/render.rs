//! Render surface: a read-only view of the workspace for the drawing layer.
//!
//! The scene is built from the store's rectangles (in draw order), the
//! selection, and the image map. It carries no references back into engine
//! state, so a host may serialize it or hand it across a boundary as-is.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::doc::{Color, RectId, RectStore};

/// One rectangle as the drawing layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneItem {
    pub id: RectId,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    /// Background image, drawn `cover`/`center` over the fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub selected: bool,
    pub update_end: bool,
}

/// The whole workspace, bottom to top.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Scene {
    pub items: Vec<SceneItem>,
    pub selected_id: Option<RectId>,
}

impl Scene {
    /// Build a scene from `store`, resolving images through `image`.
    pub fn build<'a>(store: &'a RectStore, image: impl Fn(RectId) -> Option<&'a str>) -> Self {
        let selected_id = store.selected_id();
        let items = store
            .rectangles()
            .iter()
            .map(|r| SceneItem {
                id: r.id,
                top: r.top,
                left: r.left,
                width: r.width,
                height: r.height,
                color: r.color,
                image_url: image(r.id).map(str::to_string),
                selected: selected_id == Some(r.id),
                update_end: r.update_end,
            })
            .collect();
        Self { items, selected_id }
    }
}
