//! Layer compositor
//!
//! Layers are stacked bottom to top. Everything below the top layer is kept
//! pre-rendered in a cache frame, so a pass that only dirties the top layer
//! costs one frame copy plus that layer's redraw.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTargetExt;
use heapless::Vec;

use t10_core::geometry::Rect;
use t10_core::traits::{
    Color, Compositor, FontHandle, FontResource, LayerError, LayerHandle, ResourceError,
    ResourceLoader, WatchApp,
};

use crate::canvas::{binary_color, to_rectangle, GraphicsContext};
use crate::fonts::FontRegistry;
use crate::framebuffer::FrameBuffer;

/// Maximum number of layers in the stack
pub const MAX_LAYERS: usize = 4;

#[derive(Debug, Clone, Copy)]
struct LayerSlot {
    frame: Rect,
    dirty: bool,
}

/// What a drawing pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Layers whose redraw procedure ran, bottom first
    pub redrawn: Vec<LayerHandle, MAX_LAYERS>,
    /// The cached lower layers were rebuilt
    pub cache_rebuilt: bool,
}

impl RenderStats {
    /// Check whether `layer` was redrawn in this pass
    pub fn redrew(&self, layer: LayerHandle) -> bool {
        self.redrawn.contains(&layer)
    }

    /// Check whether the pass produced a new frame
    pub fn is_empty(&self) -> bool {
        self.redrawn.is_empty() && !self.cache_rebuilt
    }
}

/// Host-side window: layer stack, fonts and the lower-layer cache
pub struct LayerCompositor {
    background: BinaryColor,
    layers: Vec<LayerSlot, MAX_LAYERS>,
    fonts: FontRegistry,
    cache: FrameBuffer,
    cache_valid: bool,
}

impl LayerCompositor {
    pub fn new(fonts: FontRegistry) -> Self {
        Self {
            background: BinaryColor::Off,
            layers: Vec::new(),
            fonts,
            cache: FrameBuffer::new(),
            cache_valid: false,
        }
    }

    /// Number of layers in the stack
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Fonts currently held by the app
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Run a drawing pass into `out`
    ///
    /// Only rows that end up different from what `out` held are marked
    /// dirty in it.
    pub fn render<A: WatchApp>(&mut self, app: &A, out: &mut FrameBuffer) -> RenderStats {
        let mut stats = RenderStats::default();

        let Some(top) = self.layers.len().checked_sub(1) else {
            if !self.cache_valid {
                self.cache.fill(self.background);
                self.cache_valid = true;
                stats.cache_rebuilt = true;
                out.copy_from(&self.cache);
            }
            return stats;
        };

        let (lower, upper) = self.layers.split_at_mut(top);
        let rebuild = !self.cache_valid || lower.iter().any(|l| l.dirty);

        if rebuild {
            self.cache.fill(self.background);
            for (index, slot) in lower.iter_mut().enumerate() {
                let handle = LayerHandle::new(index as u8);
                draw_layer(app, handle, slot.frame, &mut self.cache, &self.fonts);
                slot.dirty = false;
                stats.redrawn.push(handle).ok();
            }
            self.cache_valid = true;
            stats.cache_rebuilt = true;
        }

        let top_slot = &mut upper[0];
        if rebuild || top_slot.dirty {
            let handle = LayerHandle::new(top as u8);
            out.copy_from(&self.cache);
            draw_layer(app, handle, top_slot.frame, out, &self.fonts);
            top_slot.dirty = false;
            stats.redrawn.push(handle).ok();
        }

        stats
    }
}

/// Redraw one layer, clipped to its frame and in frame-local coordinates
fn draw_layer<A: WatchApp>(
    app: &A,
    layer: LayerHandle,
    frame: Rect,
    target: &mut FrameBuffer,
    fonts: &FontRegistry,
) {
    let area = to_rectangle(frame);
    let mut clipped = target.clipped(&area);
    let mut local = clipped.translated(area.top_left);
    let mut ctx = GraphicsContext::new(&mut local, fonts);
    app.update_layer(layer, &mut ctx);
}

impl Compositor for LayerCompositor {
    fn set_background(&mut self, color: Color) {
        let color = binary_color(color);
        if color != self.background {
            self.background = color;
            self.cache_valid = false;
        }
    }

    fn create_layer(&mut self, frame: Rect) -> Result<LayerHandle, LayerError> {
        let index = self.layers.len() as u8;
        self.layers
            .push(LayerSlot {
                frame,
                dirty: true,
            })
            .map_err(|_| LayerError::NoFreeLayer)?;
        // The previous top layer now belongs in the cache
        self.cache_valid = false;
        Ok(LayerHandle::new(index))
    }

    fn mark_dirty(&mut self, layer: LayerHandle) {
        if let Some(slot) = self.layers.get_mut(layer.index() as usize) {
            slot.dirty = true;
        }
    }

    fn remove_layer(&mut self, layer: LayerHandle) {
        if layer.index() as usize + 1 == self.layers.len() {
            self.layers.pop();
            self.cache_valid = false;
        }
    }
}

impl ResourceLoader for LayerCompositor {
    fn load_font(&mut self, resource: FontResource) -> Result<FontHandle, ResourceError> {
        self.fonts.load(resource)
    }

    fn unload_font(&mut self, font: FontHandle) {
        self.fonts.unload(font);
    }
}
