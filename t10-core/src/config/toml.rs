//! Simple TOML parser for the face configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `face.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...)
//!
//! Unknown keys and tables are ignored so older firmware accepts newer files.

use super::types::FaceConfig;
use crate::time::TimeOfDay;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Date is not "YYYY-MM-DD" or names a day that does not exist
    InvalidDate,
    /// Time is not "HH:MM:SS" or is out of range
    InvalidTime,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Clock,
    Face,
    /// A table this firmware does not know; its keys are skipped
    Other,
}

/// Parse TOML configuration into FaceConfig
pub fn parse_config(input: &str) -> Result<FaceConfig, ParseError> {
    let mut config = FaceConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    if !config.clock.seed.is_valid() {
        return Err(ParseError::InvalidDate);
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "clock" => Ok(Section::Clock),
        "face" => Ok(Section::Face),
        name if is_table_name(name) => Ok(Section::Other),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Bare or dotted TOML table name
fn is_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut FaceConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Clock => match key {
            "date" => {
                let (year, month, day) = parse_date(parse_string(value)?)?;
                let seed = config.clock.seed;
                config.clock.seed =
                    TimeOfDay::from_date_time(year, month, day, seed.hour, seed.minute, seed.second);
            }
            "time" => {
                let (hour, minute, second) = parse_time(parse_string(value)?)?;
                config.clock.seed = config.clock.seed.with_time(hour, minute, second);
            }
            _ => {}
        },
        Section::Face => match key {
            "inverted" => config.appearance.inverted = parse_bool(value)?,
            _ => {}
        },
        Section::Root | Section::Other => {}
    }

    Ok(())
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Split `value` into exactly three numeric fields
fn parse_triple<A, B, C>(value: &str, sep: char) -> Option<(A, B, C)>
where
    A: core::str::FromStr,
    B: core::str::FromStr,
    C: core::str::FromStr,
{
    let mut parts = value.split(sep);
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b, c))
}

/// Parse "YYYY-MM-DD"
fn parse_date(value: &str) -> Result<(u16, u8, u8), ParseError> {
    let (year, month, day) = parse_triple(value, '-').ok_or(ParseError::InvalidDate)?;
    let probe = TimeOfDay::from_date_time(year, month, day, 0, 0, 0);
    if !probe.is_valid() {
        return Err(ParseError::InvalidDate);
    }
    Ok((year, month, day))
}

/// Parse "HH:MM:SS"
fn parse_time(value: &str) -> Result<(u8, u8, u8), ParseError> {
    let (hour, minute, second): (u8, u8, u8) =
        parse_triple(value, ':').ok_or(ParseError::InvalidTime)?;
    if hour >= 24 || minute >= 60 || second >= 60 {
        return Err(ParseError::InvalidTime);
    }
    Ok((hour, minute, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Weekday;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2013-05-03"), Ok((2013, 5, 3)));
        assert_eq!(parse_date("2013-02-30"), Err(ParseError::InvalidDate));
        assert_eq!(parse_date("2013-05"), Err(ParseError::InvalidDate));
        assert_eq!(parse_date("2013-05-03-01"), Err(ParseError::InvalidDate));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("23:59:59"), Ok((23, 59, 59)));
        assert_eq!(parse_time("24:00:00"), Err(ParseError::InvalidTime));
        assert_eq!(parse_time("12:00"), Err(ParseError::InvalidTime));
    }

    #[test]
    fn test_parse_key_value_strips_comments() {
        assert_eq!(
            parse_key_value("inverted = true # dark on light"),
            Some(("inverted", "true"))
        );
        assert_eq!(
            parse_key_value(r#"date = "2013-05-03""#),
            Some(("date", r#""2013-05-03""#))
        );
        assert_eq!(parse_key_value("date ="), None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config_str = r#"
# T10 face
[clock]
date = "2013-05-03"
time = "06:30:00"

[face]
inverted = true
"#;

        let config = parse_config(config_str).unwrap();
        let seed = config.clock.seed;
        assert_eq!((seed.year, seed.month, seed.day), (2013, 5, 3));
        assert_eq!((seed.hour, seed.minute, seed.second), (6, 30, 0));
        assert_eq!(seed.weekday, Weekday::Friday);
        assert!(config.appearance.inverted);
    }

    #[test]
    fn test_time_before_date_keeps_both() {
        let config = parse_config(
            r#"
[clock]
time = "18:15:00"
date = "2024-02-29"
"#,
        )
        .unwrap();
        let seed = config.clock.seed;
        assert_eq!((seed.month, seed.day, seed.hour, seed.minute), (2, 29, 18, 15));
        assert_eq!(seed.weekday, Weekday::Thursday);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_config(""), Ok(FaceConfig::new()));
    }

    #[test]
    fn test_malformed_section_rejected() {
        assert_eq!(
            parse_config("[stepper spin]\nstep_pin = \"gpio11\""),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(parse_config("[]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("[clock.]"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_unknown_section_skipped() {
        let config = parse_config(
            "[clock]\ndate = \"2020-01-02\"\n[extra]\nfoo = 1\n[face.extra]\nbar = \"x\"\n[face]\ninverted = true\n",
        )
        .unwrap();
        let seed = config.clock.seed;
        assert_eq!((seed.year, seed.month, seed.day), (2020, 1, 2));
        assert!(config.appearance.inverted);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert_eq!(
            parse_config("[face]\ninverted = yes"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[clock]\ndate = 2013-05-03"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = parse_config(include_str!("../../../t10-firmware/face.toml")).unwrap();
        assert!(config.clock.seed.is_valid());
    }
}
