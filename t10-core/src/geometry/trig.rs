//! Fixed-point sine and cosine
//!
//! Results are scaled so that 1.0 maps to [`TRIG_MAX_RATIO`]. The float math
//! happens once per lookup through `libm`; callers only see integers.

use core::f32::consts::PI;

/// One full turn in angle units
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Scale of a lookup result (sin(90°) == TRIG_MAX_RATIO)
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

/// Convert an angle in turn units to radians
fn to_radians(angle: i32) -> f32 {
    let angle = angle.rem_euclid(TRIG_MAX_ANGLE);
    angle as f32 * 2.0 * PI / TRIG_MAX_ANGLE as f32
}

/// Sine of `angle`, scaled to [`TRIG_MAX_RATIO`]
pub fn sin_lookup(angle: i32) -> i32 {
    libm::roundf(libm::sinf(to_radians(angle)) * TRIG_MAX_RATIO as f32) as i32
}

/// Cosine of `angle`, scaled to [`TRIG_MAX_RATIO`]
pub fn cos_lookup(angle: i32) -> i32 {
    libm::roundf(libm::cosf(to_radians(angle)) * TRIG_MAX_RATIO as f32) as i32
}
