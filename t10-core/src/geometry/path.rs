//! Polygon paths anchored at the dial center
//!
//! A [`Path`] borrows a fixed outline in local coordinates and carries the
//! translation and rotation that place it on screen. Paths are `Copy`, so a
//! redraw rotates a copy instead of mutating the template.

use super::trig::{cos_lookup, sin_lookup, TRIG_MAX_RATIO};

/// A point in pixel coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Check whether a point lies inside the rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.width as i32
            && point.y < self.origin.y + self.height as i32
    }
}

/// A closed polygon outline placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path<'a> {
    points: &'a [Point],
    offset: Point,
    rotation: i32,
}

impl<'a> Path<'a> {
    /// Create a path from an ordered outline
    ///
    /// The path starts at the origin with no rotation.
    pub const fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            offset: Point::new(0, 0),
            rotation: 0,
        }
    }

    /// Anchor the path's local origin at `offset`
    pub fn move_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Set the absolute rotation about the anchor
    pub fn rotate_to(&mut self, angle: i32) {
        self.rotation = angle;
    }

    /// Copy of this path rotated to `angle`
    pub fn rotated_to(mut self, angle: i32) -> Self {
        self.rotate_to(angle);
        self
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Outline in screen coordinates, after rotation and translation
    pub fn points(&self) -> impl Iterator<Item = Point> + 'a {
        let sin = sin_lookup(self.rotation);
        let cos = cos_lookup(self.rotation);
        let offset = self.offset;

        self.points.iter().map(move |p| {
            let x = (p.x * cos - p.y * sin) / TRIG_MAX_RATIO;
            let y = (p.x * sin + p.y * cos) / TRIG_MAX_RATIO;
            Point::new(x + offset.x, y + offset.y)
        })
    }
}
