use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, trace};

use crate::doc::{PartialRectangle, RectId, RectStore, Rectangle};
use crate::geometry::{Position, Size, clamp_move, clamp_resize};
use crate::input::{DragEndEvent, DragEvent, InputState, ResizeEvent, ResizeStartEvent};
use crate::render::Scene;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RectangleCreated(Rectangle),
    RectangleUpdated { id: RectId, fields: PartialRectangle, update_end: bool },
    RectangleDeleted { id: RectId },
    SelectionChanged(Option<RectId>),
    /// The host should fetch one image for this rectangle and call `attach_image`.
    ImageRequested { id: RectId },
    ImageAttached { id: RectId, url: String },
    /// The host should re-origin the active resize to `("%", "%")` and reset it to `[0, 0]`.
    RebaseGestureOrigin { id: RectId },
}

/// Reports the container's current bounding box.
pub trait LayoutSource {
    /// `None` while the container is not laid out yet.
    fn container_size(&self) -> Option<Size>;
}

impl LayoutSource for Option<Size> {
    fn container_size(&self) -> Option<Size> {
        *self
    }
}

#[cfg(target_arch = "wasm32")]
impl LayoutSource for web_sys::Element {
    fn container_size(&self) -> Option<Size> {
        let rect = self.get_bounding_client_rect();
        if rect.width() == 0.0 && rect.height() == 0.0 {
            return None;
        }
        Some(Size::new(rect.width(), rect.height()))
    }
}

/// Core engine state: the workspace store plus per-rectangle gesture tracking.
///
/// Separated from `Engine` so it can be driven without a layout handle.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub store: RectStore,
    gestures: HashMap<RectId, InputState>,
    images: HashMap<RectId, String>,
    container: Option<Size>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container bounds used for clamping. `None` disables clamping.
    pub fn set_container(&mut self, container: Option<Size>) {
        self.container = container;
    }

    // --- Workspace actions ---

    /// Add a rectangle and ask the host for its background image.
    pub fn create<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Action> {
        let rect = self.store.create(rng);
        let id = rect.id;
        vec![Action::RectangleCreated(rect), Action::ImageRequested { id }]
    }

    /// Remove a rectangle along with its image and any gesture in progress.
    pub fn delete(&mut self, id: RectId) -> Vec<Action> {
        let was_selected = self.store.selected_id() == Some(id);
        if self.store.delete(id).is_none() {
            return Vec::new();
        }
        self.gestures.remove(&id);
        self.images.remove(&id);

        let mut actions = vec![Action::RectangleDeleted { id }];
        if was_selected {
            actions.push(Action::SelectionChanged(None));
        }
        actions
    }

    /// A plain click on a rectangle selects it.
    pub fn click(&mut self, id: RectId) -> Vec<Action> {
        self.set_selection(Some(id))
    }

    /// A click on empty workspace clears the selection.
    pub fn click_background(&mut self) -> Vec<Action> {
        self.set_selection(None)
    }

    fn set_selection(&mut self, id: Option<RectId>) -> Vec<Action> {
        if self.store.selected_id() == id {
            return Vec::new();
        }
        self.store.select(id);
        vec![Action::SelectionChanged(id)]
    }

    /// Attach a fetched image URL. Dropped if the rectangle is gone or the URL is empty.
    pub fn attach_image(&mut self, id: RectId, url: String) -> Vec<Action> {
        if url.is_empty() || !self.store.contains(id) {
            trace!(%id, "image for missing rectangle dropped");
            return Vec::new();
        }
        self.images.insert(id, url.clone());
        vec![Action::ImageAttached { id, url }]
    }

    // --- Drag ---

    pub fn on_drag_start(&mut self, id: RectId) -> Vec<Action> {
        if self.store.contains(id) {
            self.gestures.insert(id, InputState::Dragging);
        }
        Vec::new()
    }

    pub fn on_drag(&mut self, id: RectId, event: DragEvent) -> Vec<Action> {
        self.commit_move(id, Position::new(event.top, event.left), false)
    }

    pub fn on_drag_end(&mut self, id: RectId, event: DragEndEvent) -> Vec<Action> {
        self.gestures.remove(&id);
        self.commit_move(id, Position::new(event.top, event.left), true)
    }

    fn commit_move(&mut self, id: RectId, proposed: Position, update_end: bool) -> Vec<Action> {
        let Some(rect) = self.store.get(id) else {
            return Vec::new();
        };
        let at = match self.container {
            Some(container) => clamp_move(proposed, rect.size(), container),
            None => proposed,
        };
        self.commit(id, PartialRectangle::at(at), update_end)
    }

    // --- Resize ---

    pub fn on_resize_start(&mut self, id: RectId, event: ResizeStartEvent) -> Vec<Action> {
        let Some(rect) = self.store.get(id) else {
            return Vec::new();
        };
        let state = InputState::resizing(event.direction, rect.position(), rect.width);
        self.gestures.insert(id, state);

        match state {
            InputState::Resizing { left_edge: Some(anchor), .. } => {
                debug!(%id, initial_left = anchor.initial_left, initial_width = anchor.initial_width, "left-edge resize");
                vec![Action::RebaseGestureOrigin { id }]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_resize(&mut self, id: RectId, event: ResizeEvent) -> Vec<Action> {
        self.commit_resize(id, event, false)
    }

    pub fn on_resize_end(&mut self, id: RectId, event: ResizeEvent) -> Vec<Action> {
        let actions = self.commit_resize(id, event, true);
        self.gestures.remove(&id);
        actions
    }

    fn commit_resize(&mut self, id: RectId, event: ResizeEvent, update_end: bool) -> Vec<Action> {
        let Some(rect) = self.store.get(id) else {
            return Vec::new();
        };
        let state = match self.gestures.get(&id).copied() {
            Some(state @ InputState::Resizing { .. }) => state,
            // No start seen, or a drag was cut short: the current geometry becomes
            // the origin for the rest of this resize.
            _ => {
                let state = InputState::Resizing { origin: rect.position(), left_edge: None };
                self.gestures.insert(id, state);
                state
            }
        };
        let at = state
            .resized_position(event.drag.before_translate)
            .unwrap_or_else(|| rect.position());
        let proposed = Size::new(event.width, event.height);
        let size = match self.container {
            Some(container) => clamp_resize(at, proposed, container),
            None => proposed,
        };
        self.commit(id, PartialRectangle::geometry(at, size), update_end)
    }

    fn commit(&mut self, id: RectId, fields: PartialRectangle, update_end: bool) -> Vec<Action> {
        if !self.store.update(id, &fields, update_end) {
            return Vec::new();
        }
        vec![Action::RectangleUpdated { id, fields, update_end }]
    }

    // --- Queries ---

    /// The currently selected rectangle id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<RectId> {
        self.store.selected_id()
    }

    #[must_use]
    pub fn rectangle(&self, id: RectId) -> Option<&Rectangle> {
        self.store.get(id)
    }

    #[must_use]
    pub fn image(&self, id: RectId) -> Option<&str> {
        self.images.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn container(&self) -> Option<Size> {
        self.container
    }

    /// Gesture state for a rectangle; `Idle` when nothing is in progress.
    #[must_use]
    pub fn gesture(&self, id: RectId) -> InputState {
        self.gestures.get(&id).copied().unwrap_or_default()
    }

    /// Everything the render layer needs to draw the workspace.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::build(&self.store, |id| self.image(id))
    }
}

/// The full engine: an `EngineCore` bound to the layout handle of its container.
pub struct Engine<L> {
    layout: L,
    pub core: EngineCore,
}

impl<L: LayoutSource> Engine<L> {
    /// Create a new engine reading bounds from `layout`.
    #[must_use]
    pub fn new(layout: L) -> Self {
        let mut core = EngineCore::new();
        core.set_container(layout.container_size());
        Self { layout, core }
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    /// Re-read the container bounds. Called before every geometry event.
    pub fn refresh_layout(&mut self) {
        self.core.set_container(self.layout.container_size());
    }

    // --- Delegated workspace actions ---

    pub fn create<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Action> {
        self.core.create(rng)
    }

    pub fn delete(&mut self, id: RectId) -> Vec<Action> {
        self.core.delete(id)
    }

    pub fn click(&mut self, id: RectId) -> Vec<Action> {
        self.core.click(id)
    }

    pub fn click_background(&mut self) -> Vec<Action> {
        self.core.click_background()
    }

    pub fn attach_image(&mut self, id: RectId, url: String) -> Vec<Action> {
        self.core.attach_image(id, url)
    }

    // --- Gesture events ---

    pub fn on_drag_start(&mut self, id: RectId) -> Vec<Action> {
        self.core.on_drag_start(id)
    }

    pub fn on_drag(&mut self, id: RectId, event: DragEvent) -> Vec<Action> {
        self.refresh_layout();
        self.core.on_drag(id, event)
    }

    pub fn on_drag_end(&mut self, id: RectId, event: DragEndEvent) -> Vec<Action> {
        self.refresh_layout();
        self.core.on_drag_end(id, event)
    }

    pub fn on_resize_start(&mut self, id: RectId, event: ResizeStartEvent) -> Vec<Action> {
        self.core.on_resize_start(id, event)
    }

    pub fn on_resize(&mut self, id: RectId, event: ResizeEvent) -> Vec<Action> {
        self.refresh_layout();
        self.core.on_resize(id, event)
    }

    pub fn on_resize_end(&mut self, id: RectId, event: ResizeEvent) -> Vec<Action> {
        self.refresh_layout();
        self.core.on_resize_end(id, event)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.core.scene()
    }
}
