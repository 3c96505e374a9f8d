//! Command stream: one JSON object per line, tagged by `"type"`.
//!
//! Gesture payloads are the pointer library's own event shapes, flattened
//! next to the target rectangle id, e.g.
//! `{"type":"resize","id":3,"width":120,"height":100,"drag":{"beforeTranslate":[-20,0]}}`.

use canvas::doc::RectId;
use canvas::input::{DragEndEvent, DragEvent, ResizeEvent, ResizeStartEvent};
use serde::{Deserialize, Serialize};

use crate::error::HostError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    Create,
    Delete {
        id: RectId,
    },
    Click {
        id: RectId,
    },
    ClickBackground,
    /// The container was laid out or resized.
    Container {
        width: f64,
        height: f64,
    },
    DragStart {
        id: RectId,
    },
    Drag {
        id: RectId,
        #[serde(flatten)]
        event: DragEvent,
    },
    DragEnd {
        id: RectId,
        #[serde(flatten)]
        event: DragEndEvent,
    },
    ResizeStart {
        id: RectId,
        #[serde(flatten)]
        event: ResizeStartEvent,
    },
    Resize {
        id: RectId,
        #[serde(flatten)]
        event: ResizeEvent,
    },
    ResizeEnd {
        id: RectId,
        #[serde(flatten)]
        event: ResizeEvent,
    },
}

impl HostCommand {
    /// Parse one line of the command stream. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::CommandParse`] if the line is not a valid command.
    pub fn parse_line(line: &str) -> Result<Option<Self>, HostError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(line)
            .map(Some)
            .map_err(|e| HostError::CommandParse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
