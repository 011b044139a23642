//! Drawing context trait
//!
//! A [`Canvas`] is handed to a layer's redraw procedure. It keeps separate
//! fill, stroke and text colors, the way small watch graphics contexts do,
//! and draws in the layer's own coordinate space.

use crate::geometry::{Path, Point, Rect};

/// Pixel color on a 1-bit display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    #[default]
    Black,
    White,
}

impl Color {
    /// The opposite color
    pub fn inverted(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Horizontal placement of text inside its rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

/// What to do with text wider than its rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextOverflow {
    /// Cut the text and end it with an ellipsis
    TrailingEllipsis,
    /// Cut the text at the rectangle edge
    Clip,
}

/// Opaque handle to a loaded font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontHandle(u8);

impl FontHandle {
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Slot index in the loader's font table
    pub const fn slot(&self) -> u8 {
        self.0
    }
}

/// Drawing operations available to a layer redraw
///
/// Drawing cannot fail from the caller's point of view: a dropped pixel
/// is corrected by the next redraw.
pub trait Canvas {
    /// Color used by [`Canvas::fill_path`] and [`Canvas::fill_circle`]
    fn set_fill_color(&mut self, color: Color);

    /// Color used by [`Canvas::outline_path`]
    fn set_stroke_color(&mut self, color: Color);

    /// Color used by [`Canvas::draw_text`]
    fn set_text_color(&mut self, color: Color);

    /// Fill the interior of a closed path
    fn fill_path(&mut self, path: &Path);

    /// Stroke the outline of a path, closing it back to the first point
    fn outline_path(&mut self, path: &Path);

    /// Fill a disc
    fn fill_circle(&mut self, center: Point, radius: u32);

    /// Draw a single line of text inside `rect`
    fn draw_text(
        &mut self,
        text: &str,
        font: FontHandle,
        rect: Rect,
        overflow: TextOverflow,
        alignment: TextAlignment,
    );
}
