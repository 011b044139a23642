//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::face::Palette;
use crate::time::TimeOfDay;

/// Clock seed used when the RTC has lost its time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Date and time loaded into the RTC at boot
    pub seed: TimeOfDay,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            seed: TimeOfDay::from_date_time(2013, 5, 3, 12, 0, 0),
        }
    }
}

/// Appearance of the dial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppearanceConfig {
    /// Draw dark on light instead of light on dark
    pub inverted: bool,
}

/// Complete face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    pub clock: ClockConfig,
    pub appearance: AppearanceConfig,
}

impl FaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette selected by the appearance settings
    pub fn palette(&self) -> Palette {
        if self.appearance.inverted {
            Palette::inverted()
        } else {
            Palette::default()
        }
    }
}
