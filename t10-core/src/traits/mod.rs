//! Host abstraction traits
//!
//! These traits define the interface between the watch face logic and
//! the platform that composes layers, owns fonts and delivers ticks.

pub mod app;
pub mod canvas;
pub mod host;

pub use app::{InitError, WatchApp};
pub use canvas::{Canvas, Color, FontHandle, TextAlignment, TextOverflow};
pub use host::{
    Compositor, FontResource, Host, LayerError, LayerHandle, ResourceError, ResourceLoader,
};
