//! Session loop: drives one workspace from the command stream.
//!
//! DESIGN
//! ======
//! The session owns the `Engine` outright and is the only thing that
//! mutates it. Its layout handle is the last container size the command
//! stream reported. Commands are applied one at a time in arrival order. Image
//! fetches are the only asynchronous work: each runs as a spawned task whose
//! sole effect is sending a `FetchOutcome` back over a channel, which the
//! loop applies by rectangle id like any other event. A rectangle deleted
//! while its fetch is in flight simply ignores the late result.
//!
//! The first output line is the `GestureConfig` the drawing layer applies to
//! the pointer library. After that, every applied command (and every attached
//! image) writes the current scene as one JSON line.

use std::sync::Arc;

use canvas::doc::RectId;
use canvas::engine::{Action, Engine, EngineCore};
use canvas::geometry::Size;
use canvas::image::{ImageRecord, pick_url};
use canvas::input::GestureConfig;
use canvas::render::Scene;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::command::HostCommand;
use crate::config::container_size;
use crate::error::HostError;
use crate::photos::ImageSource;

/// Result of one image fetch, routed back to the session loop.
#[derive(Debug)]
pub struct FetchOutcome {
    pub id: RectId,
    pub result: Result<Vec<ImageRecord>, HostError>,
}

/// First line of the output stream.
#[derive(Debug, Serialize)]
struct StreamHeader<'a> {
    gesture_config: &'a GestureConfig,
}

pub struct Session {
    engine: Engine<Option<Size>>,
    gesture: GestureConfig,
    images: Arc<dyn ImageSource>,
    rng: StdRng,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    in_flight: usize,
}

impl Session {
    #[must_use]
    pub fn new(images: Arc<dyn ImageSource>, container: Option<Size>) -> Self {
        Self::with_rng(images, container, StdRng::from_os_rng())
    }

    /// Build a session with a caller-supplied random source.
    #[must_use]
    pub fn with_rng(images: Arc<dyn ImageSource>, container: Option<Size>, rng: StdRng) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        Self {
            engine: Engine::new(container),
            gesture: GestureConfig::default(),
            images,
            rng,
            fetch_tx,
            fetch_rx,
            in_flight: 0,
        }
    }

    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.engine.core
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.engine.scene()
    }

    /// Number of image fetches not yet applied.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply one command and start any image fetches it asks for.
    pub fn handle(&mut self, command: HostCommand) -> Vec<Action> {
        let actions = match command {
            HostCommand::Create => self.engine.create(&mut self.rng),
            HostCommand::Delete { id } => self.engine.delete(id),
            HostCommand::Click { id } => self.engine.click(id),
            HostCommand::ClickBackground => self.engine.click_background(),
            HostCommand::Container { width, height } => {
                match container_size(width, height) {
                    Ok(size) => {
                        *self.engine.layout_mut() = Some(size);
                        self.engine.refresh_layout();
                    }
                    Err(e) => warn!(error = %e, "container update rejected"),
                }
                Vec::new()
            }
            HostCommand::DragStart { id } => self.engine.on_drag_start(id),
            HostCommand::Drag { id, event } => self.engine.on_drag(id, event),
            HostCommand::DragEnd { id, event } => self.engine.on_drag_end(id, event),
            HostCommand::ResizeStart { id, event } => self.engine.on_resize_start(id, event),
            HostCommand::Resize { id, event } => self.engine.on_resize(id, event),
            HostCommand::ResizeEnd { id, event } => self.engine.on_resize_end(id, event),
        };

        for action in &actions {
            match action {
                Action::ImageRequested { id } => self.spawn_fetch(*id),
                other => debug!(action = ?other, "engine action"),
            }
        }
        actions
    }

    fn spawn_fetch(&mut self, id: RectId) {
        let images = Arc::clone(&self.images);
        let tx = self.fetch_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = images.fetch_images().await;
            if tx.send(FetchOutcome { id, result }).is_err() {
                debug!(%id, "session closed before image fetch finished");
            }
        });
    }

    /// Wait for the next finished image fetch.
    pub async fn next_fetch(&mut self) -> Option<FetchOutcome> {
        self.fetch_rx.recv().await
    }

    /// Attach the outcome of a finished fetch. Failures leave the rectangle without an image.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> Vec<Action> {
        self.in_flight = self.in_flight.saturating_sub(1);
        let FetchOutcome { id, result } = outcome;
        match result {
            Ok(records) => match pick_url(&records, &mut self.rng) {
                Some(url) => self.engine.attach_image(id, url),
                None => {
                    debug!(%id, count = records.len(), "no usable image in response");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(%id, error = %e, "image fetch failed");
                Vec::new()
            }
        }
    }

    /// Run until the command stream closes and every started fetch has landed.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Io`] if reading commands or writing output fails.
    pub async fn run<R, W>(mut self, reader: R, mut writer: W) -> Result<(), HostError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_json(&mut writer, &StreamHeader { gesture_config: &self.gesture }).await?;

        let mut lines = reader.lines();
        let mut input_open = true;

        while input_open || self.in_flight > 0 {
            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line? {
                        Some(line) => self.handle_line(&line, &mut writer).await?,
                        None => input_open = false,
                    }
                }
                Some(outcome) = self.fetch_rx.recv(), if self.in_flight > 0 => {
                    if !self.apply_fetch(outcome).is_empty() {
                        write_json(&mut writer, &self.engine.scene()).await?;
                    }
                }
            }
        }

        writer.flush().await?;
        Ok(())
    }

    async fn handle_line<W: AsyncWrite + Unpin>(&mut self, line: &str, writer: &mut W) -> Result<(), HostError> {
        match HostCommand::parse_line(line) {
            Ok(Some(command)) => {
                self.handle(command);
                write_json(writer, &self.engine.scene()).await
            }
            Ok(None) => Ok(()),
            Err(e) => {
                warn!(error = %e, "skipping malformed command");
                Ok(())
            }
        }
    }
}

async fn write_json<W, T>(writer: &mut W, value: &T) -> Result<(), HostError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let mut line = serde_json::to_vec(value).map_err(std::io::Error::from)?;
    line.push(b'\n');
    writer.write_all(&line).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
