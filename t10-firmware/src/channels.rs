//! Inter-task communication channels
//!
//! Defines the static signals used between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use t10_core::TimeOfDay;

/// Latest wall-clock time read from the RTC
///
/// A signal rather than a channel: if the face falls behind, only the
/// newest time matters.
pub static TICK: Signal<CriticalSectionRawMutex, TimeOfDay> = Signal::new();
