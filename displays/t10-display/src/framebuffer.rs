//! 1-bit frame buffer
//!
//! Row-major, 18 bytes per row, most significant bit = leftmost pixel,
//! bit set = white. This is the layout memory LCDs expect on the wire, so
//! a flush sends rows straight from the buffer.
//!
//! Rows are tracked individually: a flush only needs to send the rows that
//! changed since the last one.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

/// Display width in pixels
pub const WIDTH: usize = 144;

/// Display height in pixels
pub const HEIGHT: usize = 168;

/// Bytes per row
pub const ROW_BYTES: usize = WIDTH / 8;

/// Frame buffer with per-row change tracking
#[derive(Clone)]
pub struct FrameBuffer {
    rows: [[u8; ROW_BYTES]; HEIGHT],
    dirty: [bool; HEIGHT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create an all-black buffer with every row pending
    pub const fn new() -> Self {
        Self {
            rows: [[0; ROW_BYTES]; HEIGHT],
            dirty: [true; HEIGHT],
        }
    }

    /// Fill the whole buffer with one color
    pub fn fill(&mut self, color: BinaryColor) {
        let byte = if color.is_on() { 0xFF } else { 0x00 };
        for (row, dirty) in self.rows.iter_mut().zip(self.dirty.iter_mut()) {
            if row.iter().any(|b| *b != byte) {
                row.fill(byte);
                *dirty = true;
            }
        }
    }

    /// Color of a pixel, `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<BinaryColor> {
        let (col, row) = Self::index(x, y)?;
        let bit = self.rows[row][col / 8] & (0x80 >> (col % 8));
        Some(BinaryColor::from(bit != 0))
    }

    /// Set a pixel; writes outside the buffer are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        let Some((col, row)) = Self::index(x, y) else {
            return;
        };

        let mask = 0x80 >> (col % 8);
        let byte = &mut self.rows[row][col / 8];
        let updated = if color.is_on() {
            *byte | mask
        } else {
            *byte & !mask
        };

        if updated != *byte {
            *byte = updated;
            self.dirty[row] = true;
        }
    }

    /// Raw bytes of one row
    pub fn row(&self, y: usize) -> &[u8; ROW_BYTES] {
        &self.rows[y]
    }

    /// Replace the contents with `other`, marking the rows that differ
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        for ((row, dirty), src) in self
            .rows
            .iter_mut()
            .zip(self.dirty.iter_mut())
            .zip(other.rows.iter())
        {
            if row != src {
                *row = *src;
                *dirty = true;
            }
        }
    }

    /// Indices of the rows changed since the last [`FrameBuffer::mark_clean`]
    pub fn dirty_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty
            .iter()
            .enumerate()
            .filter_map(|(y, dirty)| dirty.then_some(y))
    }

    /// Check whether any row changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|d| *d)
    }

    /// Forget pending changes (after a flush)
    pub fn mark_clean(&mut self) {
        self.dirty = [false; HEIGHT];
    }

    /// Number of lit (white) pixels, handy for coverage checks
    pub fn count_on(&self) -> u32 {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|b| b.count_ones())
            .sum()
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        Some((x as usize, y as usize))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_black_and_pending() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.pixel(0, 0), Some(BinaryColor::Off));
        assert_eq!(fb.dirty_rows().count(), HEIGHT);
        assert_eq!(fb.count_on(), 0);
    }

    #[test]
    fn test_bit_layout() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 3, BinaryColor::On);
        fb.set_pixel(9, 3, BinaryColor::On);
        assert_eq!(fb.row(3)[0], 0x80);
        assert_eq!(fb.row(3)[1], 0x40);
        assert_eq!(fb.pixel(9, 3), Some(BinaryColor::On));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(-1, 0, BinaryColor::On);
        fb.set_pixel(144, 0, BinaryColor::On);
        fb.set_pixel(0, 168, BinaryColor::On);
        assert_eq!(fb.count_on(), 0);
        assert_eq!(fb.pixel(144, 0), None);
    }

    #[test]
    fn test_only_changed_rows_are_dirty() {
        let mut fb = FrameBuffer::new();
        fb.mark_clean();

        // Writing the color already there changes nothing
        fb.set_pixel(5, 10, BinaryColor::Off);
        assert!(!fb.is_dirty());

        fb.set_pixel(5, 10, BinaryColor::On);
        fb.set_pixel(6, 20, BinaryColor::On);
        let rows: heapless::Vec<usize, 4> = fb.dirty_rows().collect();
        assert_eq!(rows.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_copy_marks_differences() {
        let mut base = FrameBuffer::new();
        base.set_pixel(1, 50, BinaryColor::On);

        let mut out = FrameBuffer::new();
        out.mark_clean();
        out.copy_from(&base);

        let rows: heapless::Vec<usize, 4> = out.dirty_rows().collect();
        assert_eq!(rows.as_slice(), &[50]);
        assert_eq!(out.pixel(1, 50), Some(BinaryColor::On));
    }

    #[test]
    fn test_fill() {
        let mut fb = FrameBuffer::new();
        fb.mark_clean();
        fb.fill(BinaryColor::On);
        assert_eq!(fb.count_on(), (WIDTH * HEIGHT) as u32);
        assert_eq!(fb.dirty_rows().count(), HEIGHT);
    }
}
