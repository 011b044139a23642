//! Display backend trait
//!
//! Defines the interface panel drivers implement.

use crate::framebuffer::FrameBuffer;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic way to get a frame onto the panel.
#[allow(async_fn_in_trait)]
pub trait DisplayBackend {
    /// Clear the panel to its blank state
    async fn clear(&mut self) -> Result<(), DisplayError>;

    /// Send the rows of `frame` that changed and mark them clean
    ///
    /// Returns the number of rows sent. On error the rows stay dirty so the
    /// next flush retries them.
    async fn flush(&mut self, frame: &mut FrameBuffer) -> Result<usize, DisplayError>;
}
