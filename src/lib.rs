//! Outfit composition canvas and history engine for the wardrobe board.
//!
//! This crate owns the full lifecycle of the composition canvas: placing
//! catalog items on a 2D board, translating drag gestures and toolbar actions
//! into geometry mutations, maintaining stacking order, and providing linear
//! undo/redo across a session. The host application is responsible only for
//! wiring UI events to the engine, rendering the resulting state, and
//! persisting saved outfits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::CanvasEngine`] orchestrator and UI event surface |
//! | [`doc`] | Placed-item record, its pure mutators, and the in-memory canvas state |
//! | [`layer`] | Adjacent z-order swaps for bring-forward / send-backward |
//! | [`drag`] | Screen-to-canvas coordinate arithmetic and the drag gesture state machine |
//! | [`select`] | Zero-or-one item selection |
//! | [`history`] | Snapshot log with cursor for undo/redo |
//! | [`outfit`] | Persisted outfit wire format and the catalog lookup boundary |
//! | [`consts`] | Shared numeric constants (scale clamp, step sizes, history cap) |

pub mod consts;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod history;
pub mod layer;
pub mod outfit;
pub mod select;
