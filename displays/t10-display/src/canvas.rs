//! `Canvas` implementation over embedded-graphics draw targets

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, DrawTargetExt, Point as EgPoint, Primitive, Size};
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::{Drawable, Pixel};
use heapless::{String, Vec};

use t10_core::geometry::{Path, Point, Rect};
use t10_core::traits::{Canvas, Color, FontHandle, TextAlignment, TextOverflow};

use crate::fonts::FontRegistry;

/// Most vertices a filled or outlined path may have
pub const MAX_PATH_POINTS: usize = 16;

/// Longest text line drawn in one call (in characters)
pub const MAX_TEXT_CHARS: usize = 32;

const ELLIPSIS: &str = "...";

/// Map a watch color onto the 1-bit display color (white = on)
pub fn binary_color(color: Color) -> BinaryColor {
    match color {
        Color::White => BinaryColor::On,
        Color::Black => BinaryColor::Off,
    }
}

fn to_eg(point: Point) -> EgPoint {
    EgPoint::new(point.x, point.y)
}

/// Convert a rect to its embedded-graphics equivalent
pub fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(to_eg(rect.origin), Size::new(rect.width, rect.height))
}

/// Drawing context handed to a layer redraw
///
/// Draw-target errors are dropped: the next redraw repaints the layer.
pub struct GraphicsContext<'a, D> {
    target: &'a mut D,
    fonts: &'a FontRegistry,
    fill: BinaryColor,
    stroke: BinaryColor,
    text: BinaryColor,
}

impl<'a, D> GraphicsContext<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D, fonts: &'a FontRegistry) -> Self {
        Self {
            target,
            fonts,
            fill: BinaryColor::On,
            stroke: BinaryColor::On,
            text: BinaryColor::On,
        }
    }

    fn collect(path: &Path) -> Vec<Point, MAX_PATH_POINTS> {
        path.points().take(MAX_PATH_POINTS).collect()
    }

    fn fill_span(&mut self, y: i32, x0: i32, x1: i32) {
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let area = Rectangle::new(
            EgPoint::new(left, y),
            Size::new((right - left + 1) as u32, 1),
        );
        self.target.fill_solid(&area, self.fill).ok();
    }
}

/// X positions where the edges of `points` cross row `y`, sorted
///
/// Each edge covers the half-open row range `[min_y, max_y)`, so shared
/// vertices are counted once and horizontal edges not at all.
fn scanline_crossings(points: &[Point], y: i32) -> Vec<i32, MAX_PATH_POINTS> {
    let mut crossings = Vec::new();
    let n = points.len();

    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let (top, bottom) = if a.y <= b.y { (a, b) } else { (b, a) };
        if y < top.y || y >= bottom.y {
            continue;
        }
        let x = top.x + (y - top.y) * (bottom.x - top.x) / (bottom.y - top.y);
        // Capacity equals the vertex count, so this cannot overflow
        crossings.push(x).ok();
    }

    crossings.sort_unstable();
    crossings
}

/// Fit `text` into `max_chars` columns
fn fit_text(text: &str, max_chars: usize, overflow: TextOverflow) -> String<MAX_TEXT_CHARS> {
    let max_chars = max_chars.min(MAX_TEXT_CHARS);
    let mut fitted = String::new();

    if text.chars().count() <= max_chars {
        for c in text.chars() {
            fitted.push(c).ok();
        }
        return fitted;
    }

    match overflow {
        TextOverflow::Clip => {
            for c in text.chars().take(max_chars) {
                fitted.push(c).ok();
            }
        }
        TextOverflow::TrailingEllipsis => {
            let keep = max_chars.saturating_sub(ELLIPSIS.len());
            for c in text.chars().take(keep).chain(ELLIPSIS.chars()).take(max_chars) {
                fitted.push(c).ok();
            }
        }
    }
    fitted
}

fn advance(font: &MonoFont<'_>) -> u32 {
    font.character_size.width + font.character_spacing
}

fn text_width(font: &MonoFont<'_>, chars: usize) -> u32 {
    if chars == 0 {
        return 0;
    }
    chars as u32 * advance(font) - font.character_spacing
}

impl<D> Canvas for GraphicsContext<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn set_fill_color(&mut self, color: Color) {
        self.fill = binary_color(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = binary_color(color);
    }

    fn set_text_color(&mut self, color: Color) {
        self.text = binary_color(color);
    }

    fn fill_path(&mut self, path: &Path) {
        let points = Self::collect(path);
        if points.len() < 3 {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

        for y in min_y..max_y {
            let crossings = scanline_crossings(&points, y);
            for pair in crossings.chunks_exact(2) {
                self.fill_span(y, pair[0], pair[1]);
            }
        }
    }

    fn outline_path(&mut self, path: &Path) {
        let points = Self::collect(path);
        let style = PrimitiveStyle::with_stroke(self.stroke, 1);

        match points.len() {
            0 => {}
            1 => {
                self.target
                    .draw_iter(core::iter::once(Pixel(to_eg(points[0]), self.stroke)))
                    .ok();
            }
            n => {
                for i in 0..n {
                    Line::new(to_eg(points[i]), to_eg(points[(i + 1) % n]))
                        .into_styled(style)
                        .draw(self.target)
                        .ok();
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: u32) {
        Circle::with_center(to_eg(center), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(self.fill))
            .draw(self.target)
            .ok();
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontHandle,
        rect: Rect,
        overflow: TextOverflow,
        alignment: TextAlignment,
    ) {
        let Some(mono) = self.fonts.get(font) else {
            return;
        };

        let max_chars = ((rect.width + mono.character_spacing) / advance(mono)) as usize;
        let fitted = fit_text(text, max_chars, overflow);
        let width = text_width(mono, fitted.chars().count()) as i32;

        let x = match alignment {
            TextAlignment::Left => rect.origin.x,
            TextAlignment::Center => rect.origin.x + (rect.width as i32 - width) / 2,
            TextAlignment::Right => rect.origin.x + rect.width as i32 - width,
        };

        let style = MonoTextStyle::new(mono, self.text);
        let mut clipped = self.target.clipped(&to_rectangle(rect));
        Text::with_baseline(&fitted, EgPoint::new(x, rect.origin.y), style, Baseline::Top)
            .draw(&mut clipped)
            .ok();
    }
}
