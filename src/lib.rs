//! Native host for the moveable-rectangle workspace.
//!
//! Reads workspace commands as JSON lines, applies them to a
//! [`canvas::engine::EngineCore`], fetches background images from the photo
//! service, and writes the resulting [`canvas::render::Scene`] after each change.

pub mod command;
pub mod config;
pub mod error;
pub mod photos;
pub mod session;
