//! Watch app lifecycle trait

use super::canvas::Canvas;
use super::host::{Host, LayerError, LayerHandle, ResourceError};
use crate::time::TimeOfDay;

/// Startup faults that abort launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// A bundled font could not be loaded
    Font(ResourceError),
    /// The compositor could not create a layer
    Layer(LayerError),
}

impl From<ResourceError> for InitError {
    fn from(e: ResourceError) -> Self {
        InitError::Font(e)
    }
}

impl From<LayerError> for InitError {
    fn from(e: LayerError) -> Self {
        InitError::Layer(e)
    }
}

/// An app driven by the host event loop
///
/// The host calls these sequentially from a single thread: `on_init` once,
/// `on_tick` once per second, `update_layer` for every dirty layer during
/// a drawing pass, and `on_teardown` once at exit.
pub trait WatchApp {
    /// Acquire fonts and layers and request the first frame
    fn on_init<H: Host>(&mut self, host: &mut H, now: TimeOfDay) -> Result<(), InitError>;

    /// Release everything acquired in [`WatchApp::on_init`]
    fn on_teardown<H: Host>(&mut self, host: &mut H);

    /// Store the new time and request a redraw of what depends on it
    fn on_tick<H: Host>(&mut self, host: &mut H, now: TimeOfDay);

    /// Redraw one layer
    fn update_layer<C: Canvas>(&self, layer: LayerHandle, canvas: &mut C);
}
