//! Recording canvas and host for face tests

use heapless::{String, Vec};

use crate::geometry::{Path, Point, Rect};
use crate::traits::{
    Canvas, Color, Compositor, FontHandle, FontResource, LayerError, LayerHandle, ResourceError,
    ResourceLoader, TextAlignment, TextOverflow,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Fill {
        color: Color,
        len: usize,
        rotation: i32,
        offset: Point,
    },
    Outline {
        color: Color,
        len: usize,
        rotation: i32,
        offset: Point,
    },
    Circle {
        color: Color,
        center: Point,
        radius: u32,
    },
    Text {
        color: Color,
        text: String<8>,
        font: FontHandle,
        rect: Rect,
        overflow: TextOverflow,
        alignment: TextAlignment,
    },
}

impl DrawOp {
    pub fn color(&self) -> Color {
        match self {
            DrawOp::Fill { color, .. }
            | DrawOp::Outline { color, .. }
            | DrawOp::Circle { color, .. }
            | DrawOp::Text { color, .. } => *color,
        }
    }
}

pub struct RecordingCanvas {
    pub ops: Vec<DrawOp, 128>,
    fill: Color,
    stroke: Color,
    text: Color,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fill: Color::Black,
            stroke: Color::Black,
            text: Color::Black,
        }
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    fn push(&mut self, op: DrawOp) {
        self.ops.push(op).expect("recording canvas full");
    }
}

impl Canvas for RecordingCanvas {
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text = color;
    }

    fn fill_path(&mut self, path: &Path) {
        self.push(DrawOp::Fill {
            color: self.fill,
            len: path.len(),
            rotation: path.rotation(),
            offset: path.offset(),
        });
    }

    fn outline_path(&mut self, path: &Path) {
        self.push(DrawOp::Outline {
            color: self.stroke,
            len: path.len(),
            rotation: path.rotation(),
            offset: path.offset(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: u32) {
        self.push(DrawOp::Circle {
            color: self.fill,
            center,
            radius,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontHandle,
        rect: Rect,
        overflow: TextOverflow,
        alignment: TextAlignment,
    ) {
        self.push(DrawOp::Text {
            color: self.text,
            text: String::try_from(text).expect("label too long"),
            font,
            rect,
            overflow,
            alignment,
        });
    }
}

/// Host double that records lifecycle calls
#[derive(Default)]
pub struct RecordingHost {
    pub background: Option<Color>,
    pub layers: Vec<Rect, 4>,
    pub dirty: Vec<LayerHandle, 64>,
    pub loaded: Vec<FontResource, 4>,
    pub unloaded: Vec<FontHandle, 4>,
    pub missing_font: Option<FontResource>,
    pub max_layers: usize,
    pub removed: Vec<LayerHandle, 4>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            max_layers: 4,
            ..Default::default()
        }
    }

    pub fn dirty_count(&self, layer: LayerHandle) -> usize {
        self.dirty.iter().filter(|l| **l == layer).count()
    }
}

impl Compositor for RecordingHost {
    fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn create_layer(&mut self, frame: Rect) -> Result<LayerHandle, LayerError> {
        if self.layers.len() >= self.max_layers {
            return Err(LayerError::NoFreeLayer);
        }
        self.layers.push(frame).map_err(|_| LayerError::NoFreeLayer)?;
        Ok(LayerHandle::new((self.layers.len() - 1) as u8))
    }

    fn mark_dirty(&mut self, layer: LayerHandle) {
        self.dirty.push(layer).expect("dirty log full");
    }

    fn remove_layer(&mut self, layer: LayerHandle) {
        if layer.index() as usize + 1 == self.layers.len() {
            self.layers.pop();
            self.removed.push(layer).expect("remove log full");
        }
    }
}

impl ResourceLoader for RecordingHost {
    fn load_font(&mut self, resource: FontResource) -> Result<FontHandle, ResourceError> {
        if self.missing_font == Some(resource) {
            return Err(ResourceError::NotFound);
        }
        self.loaded
            .push(resource)
            .map_err(|_| ResourceError::NoFreeSlot)?;
        Ok(FontHandle::new((self.loaded.len() - 1) as u8))
    }

    fn unload_font(&mut self, font: FontHandle) {
        self.unloaded.push(font).expect("unload log full");
    }
}
