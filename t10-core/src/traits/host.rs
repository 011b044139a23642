//! Compositor and resource loader traits
//!
//! The host owns every layer and font; the face only keeps handles.

use super::canvas::{Color, FontHandle};
use crate::geometry::Rect;

/// Handle to a layer created by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerHandle(u8);

impl LayerHandle {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Position in the compositor's layer stack (0 = bottom)
    pub const fn index(&self) -> u8 {
        self.0
    }
}

/// Fonts bundled with the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontResource {
    /// Large numerals for the 24/06/12/18 dial labels
    Numerals,
    /// Small font for the weekday and date readout
    Date,
}

/// Errors from loading a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// The resource is not bundled with this build
    NotFound,
    /// All font slots are in use
    NoFreeSlot,
}

/// Errors from creating a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerError {
    /// The layer stack is full
    NoFreeLayer,
}

/// Layer management provided by the host window
pub trait Compositor {
    /// Color the window is cleared to beneath all layers
    fn set_background(&mut self, color: Color);

    /// Add a layer on top of the stack
    ///
    /// The app is asked to redraw the layer whenever it is dirty.
    fn create_layer(&mut self, frame: Rect) -> Result<LayerHandle, LayerError>;

    /// Request a redraw of `layer` on the next drawing pass
    fn mark_dirty(&mut self, layer: LayerHandle);

    /// Remove `layer` from the stack
    ///
    /// Only the topmost layer can be removed, so handles below it stay
    /// valid. Any other handle is ignored.
    fn remove_layer(&mut self, layer: LayerHandle);
}

/// Font loading provided by the host
pub trait ResourceLoader {
    /// Load a bundled font
    fn load_font(&mut self, resource: FontResource) -> Result<FontHandle, ResourceError>;

    /// Release a font loaded with [`ResourceLoader::load_font`]
    fn unload_font(&mut self, font: FontHandle);
}

/// Everything a watch app needs from its host
pub trait Host: Compositor + ResourceLoader {}

impl<T: Compositor + ResourceLoader> Host for T {}
