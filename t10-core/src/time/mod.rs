//! Time-of-day and calendar fields
//!
//! [`TimeOfDay`] is the value the tick source hands to the face once per
//! second. It carries the calendar fields needed for the date readout in
//! the middle of the dial.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of a formatted date label
pub const DATE_LABEL_LEN: usize = 6;

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Weekday from its index, counting from Sunday = 0
    pub fn from_days_from_sunday(index: u8) -> Self {
        match index % 7 {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    pub fn days_from_sunday(&self) -> u8 {
        *self as u8
    }

    /// Three-letter abbreviation ("Mon", "Tue", ...)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    /// Day of the week for a Gregorian date
    pub fn from_date(year: u16, month: u8, day: u8) -> Self {
        // Sakamoto's method
        const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = if month < 3 {
            year.saturating_sub(1) as u32
        } else {
            year as u32
        };
        let m = (month.clamp(1, 12) - 1) as usize;
        let index = (y + y / 4 - y / 100 + y / 400 + OFFSETS[m] + day as u32) % 7;
        Self::from_days_from_sunday(index as u8)
    }
}

/// Wall-clock time with the calendar fields used by the date readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay {
    /// Full year (e.g. 2013)
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    pub weekday: Weekday,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::from_date_time(2000, 1, 1, 0, 0, 0)
    }
}

impl TimeOfDay {
    /// Build a time of day, deriving the weekday from the date
    pub fn from_date_time(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            weekday: Weekday::from_date(year, month, day),
            hour,
            minute,
            second,
        }
    }

    /// Replace the clock fields, keeping the date
    pub fn with_time(mut self, hour: u8, minute: u8, second: u8) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Check that every field is within its calendar range
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }

    /// Abbreviated day-of-week label (`%a`)
    pub fn weekday_label(&self) -> &'static str {
        self.weekday.abbreviation()
    }

    /// Numeric month/day label (`%m/%d`, e.g. "05/03")
    pub fn month_day_label(&self) -> String<DATE_LABEL_LEN> {
        let mut label = String::new();
        let _ = write!(label, "{:02}/{:02}", self.month, self.day);
        label
    }
}

/// Number of days in a month of the Gregorian calendar
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
