//! Boot configuration
//!
//! `face.toml` is compiled into the image and already validated by
//! build.rs, so a parse failure here means the two parsers disagree. The
//! face still boots, on defaults.

use defmt::*;
use embassy_rp::rtc::{DateTime, DayOfWeek};

use t10_core::config::{parse_config, FaceConfig};
use t10_core::time::Weekday;
use t10_core::TimeOfDay;

/// Parse the embedded configuration, falling back to defaults
pub fn load(source: &str) -> FaceConfig {
    match parse_config(source) {
        Ok(config) => {
            let seed = &config.clock.seed;
            info!(
                "Config loaded: seed {}-{:02}-{:02} {:02}:{:02}:{:02}, inverted={}",
                seed.year,
                seed.month,
                seed.day,
                seed.hour,
                seed.minute,
                seed.second,
                config.appearance.inverted
            );
            config
        }
        Err(e) => {
            warn!("Invalid face.toml ({}), using defaults", e);
            FaceConfig::new()
        }
    }
}

/// RTC representation of a wall-clock time
pub fn to_rtc(time: &TimeOfDay) -> DateTime {
    DateTime {
        year: time.year,
        month: time.month,
        day: time.day,
        day_of_week: match time.weekday {
            Weekday::Sunday => DayOfWeek::Sunday,
            Weekday::Monday => DayOfWeek::Monday,
            Weekday::Tuesday => DayOfWeek::Tuesday,
            Weekday::Wednesday => DayOfWeek::Wednesday,
            Weekday::Thursday => DayOfWeek::Thursday,
            Weekday::Friday => DayOfWeek::Friday,
            Weekday::Saturday => DayOfWeek::Saturday,
        },
        hour: time.hour,
        minute: time.minute,
        second: time.second,
    }
}

/// Wall-clock time from an RTC reading
///
/// The weekday is recomputed from the date rather than trusted.
pub fn from_rtc(time: &DateTime) -> TimeOfDay {
    TimeOfDay::from_date_time(
        time.year,
        time.month,
        time.day,
        time.hour,
        time.minute,
        time.second,
    )
}
