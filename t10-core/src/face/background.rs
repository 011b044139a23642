//! Static dial: tick marks and the four 24-hour labels

use super::shapes::TickPaths;
use super::{Palette, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::{tick_angle, Rect, TickStyle, DIAL_POSITIONS};
use crate::traits::{Canvas, FontHandle, TextAlignment, TextOverflow};

/// A fixed dial label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialLabel {
    pub text: &'static str,
    pub rect: Rect,
    pub alignment: TextAlignment,
}

/// Labels at the four cardinal points of the 24-hour dial
pub const DIAL_LABELS: [DialLabel; 4] = [
    DialLabel {
        text: "24",
        rect: Rect::new(SCREEN_WIDTH / 2 - 30, 4, 60, 50),
        alignment: TextAlignment::Center,
    },
    DialLabel {
        text: "06",
        rect: Rect::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2 - 26, 70, 50),
        alignment: TextAlignment::Right,
    },
    DialLabel {
        text: "12",
        rect: Rect::new(SCREEN_WIDTH / 2 - 30, 110, 60, 50),
        alignment: TextAlignment::Center,
    },
    DialLabel {
        text: "18",
        rect: Rect::new(SCREEN_WIDTH / 2 - 70, SCREEN_HEIGHT / 2 - 26, 60, 50),
        alignment: TextAlignment::Left,
    },
];

/// Draw the dial background
pub fn draw_background<C: Canvas>(
    canvas: &mut C,
    ticks: &TickPaths,
    font: FontHandle,
    palette: Palette,
) {
    canvas.set_stroke_color(palette.light);
    canvas.set_fill_color(palette.light);

    for position in 0..DIAL_POSITIONS {
        let angle = tick_angle(position);
        match TickStyle::classify(position) {
            TickStyle::Hour => canvas.fill_path(&ticks.hour.rotated_to(angle)),
            TickStyle::Major => canvas.fill_path(&ticks.major.rotated_to(angle)),
            TickStyle::Minor => canvas.outline_path(&ticks.minor.rotated_to(angle)),
        }
    }

    canvas.set_text_color(palette.light);
    for label in DIAL_LABELS.iter() {
        canvas.draw_text(
            label.text,
            font,
            label.rect,
            TextOverflow::TrailingEllipsis,
            label.alignment,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::mock::{DrawOp, RecordingCanvas};
    use crate::face::shapes::FacePaths;
    use crate::face::CENTER;
    use crate::geometry::TRIG_MAX_ANGLE;

    fn render() -> RecordingCanvas {
        let paths = FacePaths::anchored_at(CENTER);
        let mut canvas = RecordingCanvas::new();
        draw_background(
            &mut canvas,
            &paths.ticks,
            FontHandle::new(0),
            Palette::default(),
        );
        canvas
    }

    #[test]
    fn test_tick_draw_counts() {
        let canvas = render();
        assert_eq!(canvas.count(|op| matches!(op, DrawOp::Fill { .. })), 12);
        assert_eq!(canvas.count(|op| matches!(op, DrawOp::Outline { .. })), 48);
    }

    #[test]
    fn test_first_tick_is_unrotated_cardinal() {
        let canvas = render();
        match canvas.ops[0] {
            DrawOp::Fill { len, rotation, .. } => {
                assert_eq!(len, 4);
                assert_eq!(rotation, 0);
            }
            ref other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_quarter_ticks_rotate_with_position() {
        let canvas = render();
        let rotations: heapless::Vec<i32, 4> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { len: 4, rotation, .. } if rotation % (TRIG_MAX_ANGLE / 4) == 0 => {
                    Some(*rotation)
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            rotations.as_slice(),
            &[0, TRIG_MAX_ANGLE / 4, TRIG_MAX_ANGLE / 2, 3 * TRIG_MAX_ANGLE / 4]
        );
    }

    #[test]
    fn test_labels_follow_24_hour_dial() {
        let canvas = render();
        let texts: heapless::Vec<&str, 4> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts.as_slice(), &["24", "06", "12", "18"]);
    }

    #[test]
    fn test_label_positions() {
        assert_eq!(DIAL_LABELS[0].rect, Rect::new(42, 4, 60, 50));
        assert_eq!(DIAL_LABELS[1].rect, Rect::new(72, 58, 70, 50));
        assert_eq!(DIAL_LABELS[2].rect, Rect::new(42, 110, 60, 50));
        assert_eq!(DIAL_LABELS[3].rect, Rect::new(2, 58, 60, 50));
    }

    #[test]
    fn test_everything_drawn_light() {
        let canvas = render();
        assert!(canvas.ops.iter().all(|op| op.color() == Palette::default().light));
    }
}
