//! Workspace engine for the moveable-rectangle editor.
//!
//! This crate is compiled both natively and to WebAssembly. It owns the
//! editor's state and the rules for changing it: the ordered rectangle store
//! and selection, the containment clamps applied to every drag and resize,
//! and the per-rectangle gesture state machine that turns pointer-library
//! events into store commits. It performs no I/O. The host wires pointer
//! events in, fetches images when asked, and draws the resulting [`render::Scene`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller: [`engine::EngineCore`], [`engine::Engine`], [`engine::Action`] |
//! | [`doc`] | Rectangle types and the in-memory [`doc::RectStore`] |
//! | [`geometry`] | Position/size types and the `clamp_move` / `clamp_resize` rules |
//! | [`input`] | Pointer-library event payloads and the gesture state machine |
//! | [`image`] | Image records and random image choice |
//! | [`render`] | Read-only scene handed to the drawing layer |
//! | [`consts`] | Shared numeric constants (default size, first id, etc.) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod image;
pub mod input;
pub mod render;
