//! Face task
//!
//! Owns the watch face, the compositor and the panel. Every tick it
//! updates the face, runs a drawing pass and sends the changed rows.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Delay;

use t10_core::traits::WatchApp;
use t10_core::T10Face;
use t10_display::{DisplayBackend, FrameBuffer, LayerCompositor};

use crate::channels::TICK;
use crate::memlcd::MemoryLcd;

/// The panel as wired on the board
pub type Lcd = MemoryLcd<Spi<'static, SPI0, Blocking>, Output<'static>, Delay>;

/// Face task - redraws on every tick
#[embassy_executor::task]
pub async fn face_task(mut face: T10Face, mut compositor: LayerCompositor, mut lcd: Lcd) {
    info!("Face task started");

    let mut frame = FrameBuffer::new();

    // First frame, before the first tick arrives
    redraw(&face, &mut compositor, &mut frame, &mut lcd).await;

    loop {
        let now = TICK.wait().await;
        face.on_tick(&mut compositor, now);
        redraw(&face, &mut compositor, &mut frame, &mut lcd).await;
    }
}

async fn redraw(
    face: &T10Face,
    compositor: &mut LayerCompositor,
    frame: &mut FrameBuffer,
    lcd: &mut Lcd,
) {
    let stats = compositor.render(face, frame);
    if stats.cache_rebuilt {
        debug!("Background redrawn");
    }

    // Errors leave the rows dirty; they go out with the next tick
    match lcd.flush(frame).await {
        Ok(rows) => trace!("Flushed {} rows ({} layers redrawn)", rows, stats.redrawn.len()),
        Err(e) => warn!("LCD flush failed: {}", e),
    }
}
