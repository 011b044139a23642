//! Hand and tick angles
//!
//! The hour hand runs on a 24-hour dial: one revolution per day, with
//! midnight ("24") at the top and noon ("12") at the bottom. Minute and
//! second hands follow the usual 60-step dial. Sub-step positions are
//! truncated, so the minute hand jumps once per minute.

use super::trig::TRIG_MAX_ANGLE;

/// Minutes in one revolution of the hour hand
const MINUTES_PER_DAY: i32 = 60 * 24;

/// Positions around the dial
pub const DIAL_POSITIONS: u32 = 60;

/// Hour hand angle for a time of day on the 24-hour dial
pub fn hour_angle(hour: u8, minute: u8) -> i32 {
    let minutes = hour as i32 * 60 + minute as i32;
    (minutes * TRIG_MAX_ANGLE) / MINUTES_PER_DAY
}

/// Minute hand angle
pub fn minute_angle(minute: u8) -> i32 {
    tick_angle(minute as u32)
}

/// Second hand angle
pub fn second_angle(second: u8) -> i32 {
    tick_angle(second as u32)
}

/// Angle of one of the 60 dial positions
pub fn tick_angle(position: u32) -> i32 {
    (position as i32 * TRIG_MAX_ANGLE) / DIAL_POSITIONS as i32
}

/// Visual style of a tick mark around the dial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickStyle {
    /// Every 15 minutes: the four cardinal marks
    Hour,
    /// Every 5 minutes that is not a cardinal mark
    Major,
    /// Every remaining minute, drawn as a thin line
    Minor,
}

impl TickStyle {
    /// Classify a dial position
    pub fn classify(position: u32) -> Self {
        if position % 15 == 0 {
            TickStyle::Hour
        } else if position % 5 == 0 {
            TickStyle::Major
        } else {
            TickStyle::Minor
        }
    }

    /// Check if this style is drawn as a filled polygon
    pub fn is_filled(&self) -> bool {
        !matches!(self, TickStyle::Minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_six_oclock_is_quarter_turn() {
        assert_eq!(hour_angle(6, 0), TRIG_MAX_ANGLE / 4);
        assert_eq!(minute_angle(0), 0);
        assert_eq!(second_angle(0), 0);
    }

    #[test]
    fn test_half_past_noon() {
        assert_eq!(
            hour_angle(12, 30),
            TRIG_MAX_ANGLE / 2 + TRIG_MAX_ANGLE / 48
        );
        assert_eq!(minute_angle(30), TRIG_MAX_ANGLE / 2);
    }

    #[test]
    fn test_midnight_is_top() {
        assert_eq!(hour_angle(0, 0), 0);
        assert_eq!(hour_angle(18, 0), 3 * TRIG_MAX_ANGLE / 4);
    }

    #[test]
    fn test_last_minute_stays_below_full_turn() {
        assert!(minute_angle(59) < TRIG_MAX_ANGLE);
        assert!(second_angle(59) < TRIG_MAX_ANGLE);
        assert!(hour_angle(23, 59) < TRIG_MAX_ANGLE);
    }

    #[test]
    fn test_tick_counts() {
        let mut hour = 0;
        let mut major = 0;
        let mut minor = 0;

        for position in 0..DIAL_POSITIONS {
            match TickStyle::classify(position) {
                TickStyle::Hour => hour += 1,
                TickStyle::Major => major += 1,
                TickStyle::Minor => minor += 1,
            }
        }

        assert_eq!(hour, 4);
        assert_eq!(major, 8);
        assert_eq!(minor, 48);
    }

    #[test]
    fn test_cardinal_ticks() {
        for position in [0, 15, 30, 45] {
            assert_eq!(TickStyle::classify(position), TickStyle::Hour);
        }
        assert_eq!(TickStyle::classify(5), TickStyle::Major);
        assert_eq!(TickStyle::classify(55), TickStyle::Major);
        assert_eq!(TickStyle::classify(1), TickStyle::Minor);
        assert!(!TickStyle::Minor.is_filled());
        assert!(TickStyle::Major.is_filled());
    }

    proptest! {
        #[test]
        fn prop_hour_angle_formula(hour in 0u8..24, minute in 0u8..60) {
            let expected = ((hour as i32 * 60 + minute as i32) * TRIG_MAX_ANGLE) / 1440;
            prop_assert_eq!(hour_angle(hour, minute), expected);
            prop_assert!((0..TRIG_MAX_ANGLE).contains(&hour_angle(hour, minute)));
        }

        #[test]
        fn prop_hour_angle_increases_through_the_day(minutes in 0u32..(24 * 60 - 1)) {
            let (h, m) = ((minutes / 60) as u8, (minutes % 60) as u8);
            let next = minutes + 1;
            let (nh, nm) = ((next / 60) as u8, (next % 60) as u8);
            prop_assert!(hour_angle(nh, nm) > hour_angle(h, m));
        }

        #[test]
        fn prop_minute_and_second_share_formula(value in 0u8..60) {
            let expected = (value as i32 * TRIG_MAX_ANGLE) / 60;
            prop_assert_eq!(minute_angle(value), expected);
            prop_assert_eq!(second_angle(value), expected);
            prop_assert!(minute_angle(value) < TRIG_MAX_ANGLE);
        }
    }
}
