//! Integer geometry for the dial
//!
//! All angles are integers in units of [`TRIG_MAX_ANGLE`] per full turn, so
//! hand positions derived from the clock are exact and reproducible.

pub mod angle;
pub mod path;
pub mod trig;

pub use angle::{hour_angle, minute_angle, second_angle, tick_angle, TickStyle, DIAL_POSITIONS};
pub use path::{Path, Point, Rect};
pub use trig::{cos_lookup, sin_lookup, TRIG_MAX_ANGLE, TRIG_MAX_RATIO};
