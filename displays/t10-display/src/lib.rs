//! Display side of the T10 watch face
//!
//! This crate provides:
//! - `FrameBuffer`, a 144x168 1-bit buffer laid out the way memory LCDs
//!   take it on the wire, with per-row change tracking
//! - `GraphicsContext`, the `Canvas` used by layer redraws, over any
//!   embedded-graphics `BinaryColor` draw target
//! - `FontRegistry`, the bundled fonts behind `FontHandle`s
//! - `LayerCompositor`, the host window: layer stack, dirty flags and a
//!   cache of every layer below the top one
//! - `DisplayBackend`, the trait panel drivers implement, and the memory
//!   LCD wire format in `memlcd`
//!
//! # Architecture
//!
//! The firmware owns one `LayerCompositor` and one output `FrameBuffer`.
//! Each tick it lets the app mark layers dirty, runs a drawing pass into
//! the output buffer and hands the buffer to its `DisplayBackend`, which
//! sends only the rows that changed.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod canvas;
pub mod compositor;
pub mod fonts;
pub mod framebuffer;
pub mod memlcd;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use canvas::GraphicsContext;
pub use compositor::{LayerCompositor, RenderStats, MAX_LAYERS};
pub use fonts::FontRegistry;
pub use framebuffer::{FrameBuffer, HEIGHT, ROW_BYTES, WIDTH};
