//! Hands and the date readout
//!
//! Redrawn once per second. Each hand is filled first and outlined second
//! so the outline stays visible where hands overlap. The date disc is
//! painted last and hides the hand roots.

use super::shapes::HandPaths;
use super::{Palette, CENTER, DATE_DISC_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::{hour_angle, minute_angle, second_angle, Path, Rect};
use crate::time::TimeOfDay;
use crate::traits::{Canvas, FontHandle, TextAlignment, TextOverflow};

/// Box for the abbreviated weekday, upper half of the disc
pub const WEEKDAY_RECT: Rect = Rect::new(SCREEN_WIDTH / 2 - 30, SCREEN_HEIGHT / 2 - 30, 60, 24);

/// Box for the month/day, lower half of the disc
pub const MONTH_DAY_RECT: Rect = Rect::new(SCREEN_WIDTH / 2 - 30, SCREEN_HEIGHT / 2 - 8, 60, 24);

/// Draw the hands and the date for `now`
pub fn draw_hands<C: Canvas>(
    canvas: &mut C,
    hands: &HandPaths,
    font: FontHandle,
    now: &TimeOfDay,
    palette: Palette,
) {
    draw_hand(canvas, &hands.hour.rotated_to(hour_angle(now.hour, now.minute)), palette);
    draw_hand(canvas, &hands.minute.rotated_to(minute_angle(now.minute)), palette);
    draw_hand(canvas, &hands.second.rotated_to(second_angle(now.second)), palette);

    canvas.set_fill_color(palette.dark);
    canvas.fill_circle(CENTER, DATE_DISC_RADIUS);

    canvas.set_text_color(palette.light);
    canvas.draw_text(
        now.weekday_label(),
        font,
        WEEKDAY_RECT,
        TextOverflow::TrailingEllipsis,
        TextAlignment::Center,
    );
    canvas.draw_text(
        now.month_day_label().as_str(),
        font,
        MONTH_DAY_RECT,
        TextOverflow::TrailingEllipsis,
        TextAlignment::Center,
    );
}

fn draw_hand<C: Canvas>(canvas: &mut C, hand: &Path, palette: Palette) {
    canvas.set_fill_color(palette.light);
    canvas.fill_path(hand);
    canvas.set_stroke_color(palette.dark);
    canvas.outline_path(hand);
}
