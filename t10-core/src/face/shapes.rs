//! Outline tables for the hands and tick marks
//!
//! Coordinates are relative to the dial center with y pointing down, so
//! the hands point at "24" before rotation and the ticks hang below it.

use crate::geometry::{Path, Point};

pub const HOUR_HAND: [Point; 5] = [
    Point::new(-8, -10),
    Point::new(-10, -40),
    Point::new(0, -60),
    Point::new(10, -40),
    Point::new(8, -10),
];

pub const MINUTE_HAND: [Point; 5] = [
    Point::new(-4, -10),
    Point::new(-6, -60),
    Point::new(0, -76),
    Point::new(6, -60),
    Point::new(4, -10),
];

pub const SECOND_HAND: [Point; 5] = [
    Point::new(-2, -10),
    Point::new(-4, -60),
    Point::new(0, -76),
    Point::new(4, -60),
    Point::new(2, -10),
];

/// Cardinal tick, slightly shorter than the 5-minute ticks
pub const HOUR_TICK: [Point; 4] = [
    Point::new(-3, 70),
    Point::new(3, 70),
    Point::new(3, 84),
    Point::new(-3, 84),
];

pub const MAJOR_TICK: [Point; 4] = [
    Point::new(-3, 60),
    Point::new(3, 60),
    Point::new(3, 84),
    Point::new(-3, 84),
];

/// Minute tick, stroked as a line
pub const MINOR_TICK: [Point; 2] = [Point::new(0, 76), Point::new(0, 84)];

/// The three hands
#[derive(Debug, Clone, Copy)]
pub struct HandPaths {
    pub hour: Path<'static>,
    pub minute: Path<'static>,
    pub second: Path<'static>,
}

/// The three tick templates
#[derive(Debug, Clone, Copy)]
pub struct TickPaths {
    pub hour: Path<'static>,
    pub major: Path<'static>,
    pub minor: Path<'static>,
}

/// Every path of the face, anchored at one center
#[derive(Debug, Clone, Copy)]
pub struct FacePaths {
    pub hands: HandPaths,
    pub ticks: TickPaths,
}

impl FacePaths {
    pub fn anchored_at(center: Point) -> Self {
        Self {
            hands: HandPaths {
                hour: anchored(&HOUR_HAND, center),
                minute: anchored(&MINUTE_HAND, center),
                second: anchored(&SECOND_HAND, center),
            },
            ticks: TickPaths {
                hour: anchored(&HOUR_TICK, center),
                major: anchored(&MAJOR_TICK, center),
                minor: anchored(&MINOR_TICK, center),
            },
        }
    }
}

fn anchored(points: &'static [Point], center: Point) -> Path<'static> {
    let mut path = Path::new(points);
    path.move_to(center);
    path
}
