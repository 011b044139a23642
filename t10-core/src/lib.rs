//! Board-agnostic logic for the T10 watch face
//!
//! This crate contains everything that does not depend on a specific
//! display or clock:
//!
//! - Integer geometry (fixed-point trig, rotated paths, hand angles)
//! - Time-of-day model and date labels
//! - Host traits (canvas, compositor, font loader) and the app lifecycle
//! - The face itself: background and hand layer redraws
//! - Configuration types and the `face.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod face;
pub mod geometry;
pub mod time;
pub mod traits;

pub use face::{Palette, T10Face};
pub use time::TimeOfDay;
