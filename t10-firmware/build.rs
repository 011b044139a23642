//! Build script for t10-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates face.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate face.toml at compile time
///
/// The firmware parser only reports that something is wrong; this gives
/// the exact reason before the image is ever flashed.
fn validate_config() {
    println!("cargo:rerun-if-changed=face.toml");

    let config_path = Path::new("face.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: face.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds face.toml as its boot configuration.        ║\n\
            ║  Please create one in the t10-firmware directory.                ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read face.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in face.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_clock(&config, &mut errors);
    validate_face(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in face.toml                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=face.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate the [clock] section (optional, both keys optional)
fn validate_clock(config: &toml::Value, errors: &mut Vec<String>) {
    let clock = match config.get("clock") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[clock] must be a table".to_string());
            return;
        }
        None => return,
    };

    let mut date = None;
    match clock.get("date") {
        Some(toml::Value::String(s)) => match parse_numbers(s, '-') {
            Some([year, month, day]) if year <= 4095 => {
                if !(1..=12).contains(&month) {
                    errors.push(format!("[clock] date month must be 1-12, got {}", month));
                } else if day < 1 || day > days_in_month(year, month) {
                    errors.push(format!("[clock] date day {} is not in month {}", day, month));
                } else {
                    date = Some((year, month, day));
                }
            }
            Some([year, _, _]) => {
                errors.push(format!("[clock] date year must be 0-4095, got {}", year));
            }
            None => errors.push("[clock] date must look like \"YYYY-MM-DD\"".to_string()),
        },
        Some(_) => errors.push("[clock] date must be a string".to_string()),
        None => {}
    }

    match clock.get("time") {
        Some(toml::Value::String(s)) => match parse_numbers(s, ':') {
            Some([hour, minute, second]) => {
                if hour > 23 || minute > 59 || second > 59 {
                    errors.push(format!("[clock] time {} is out of range", s));
                }
            }
            None => errors.push("[clock] time must look like \"HH:MM:SS\"".to_string()),
        },
        Some(_) => errors.push("[clock] time must be a string".to_string()),
        None => {}
    }

    if let Some((year, month, day)) = date {
        println!("cargo:warning=RTC seed date {:04}-{:02}-{:02}", year, month, day);
    }
}

/// Validate the [face] section
fn validate_face(config: &toml::Value, errors: &mut Vec<String>) {
    let face = match config.get("face") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[face] must be a table".to_string());
            return;
        }
        None => return,
    };

    if let Some(value) = face.get("inverted") {
        if !value.is_bool() {
            errors.push("[face] inverted must be true or false".to_string());
        }
    }
}

/// Split "a?b?c" into three numbers
fn parse_numbers(s: &str, separator: char) -> Option<[u32; 3]> {
    let mut parts = s.split(separator).map(|p| p.parse::<u32>().ok());
    let numbers = [parts.next()??, parts.next()??, parts.next()??];
    if parts.next().is_some() {
        return None;
    }
    Some(numbers)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
