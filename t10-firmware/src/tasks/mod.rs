//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod face;
pub mod tick;

pub use face::{face_task, Lcd};
pub use tick::tick_task;
