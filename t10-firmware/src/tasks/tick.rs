//! Tick task
//!
//! Reads the RTC once per second and hands the time to the face task.

use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::Rtc;
use embassy_time::{Duration, Ticker};

use crate::channels::TICK;
use crate::config::from_rtc;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - signals the current time every second
///
/// A failed RTC read skips the tick; the display keeps the previous time
/// until the next successful one.
#[embassy_executor::task]
pub async fn tick_task(rtc: Rtc<'static, RTC>) {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        match rtc.now() {
            Ok(now) => {
                let time = from_rtc(&now);
                if !time.is_valid() {
                    warn!("RTC returned an invalid time, skipping tick");
                    continue;
                }
                trace!("Tick {:02}:{:02}:{:02}", time.hour, time.minute, time.second);
                TICK.signal(time);
            }
            Err(e) => {
                warn!("RTC read failed: {}, skipping tick", Debug2Format(&e));
            }
        }
    }
}
