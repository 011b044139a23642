//! The T10 watch face
//!
//! Two layers share one [`TimeOfDay`]:
//!
//! - the background layer holds the tick marks and the "24/06/12/18"
//!   labels and is drawn once, when the face starts;
//! - the hand layer holds the hands and the date readout and is redrawn
//!   on every tick.

pub mod background;
pub mod hands;
pub mod shapes;

#[cfg(test)]
mod mock;

use crate::geometry::{Point, Rect};
use crate::time::TimeOfDay;
use crate::traits::{
    Canvas, Color, FontHandle, FontResource, Host, InitError, LayerHandle, WatchApp,
};

use self::shapes::FacePaths;

/// Display width in pixels
pub const SCREEN_WIDTH: i32 = 144;

/// Display height in pixels
pub const SCREEN_HEIGHT: i32 = 168;

/// Pivot of every hand and tick
pub const CENTER: Point = Point::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);

/// Radius of the disc covering the hand roots
pub const DATE_DISC_RADIUS: u32 = 30;

/// Full-screen layer frame
pub const SCREEN_FRAME: Rect = Rect::new(0, 0, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);

/// Two-tone palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    /// Ticks, labels, hand fill and text
    pub light: Color,
    /// Window background, hand outline and date disc
    pub dark: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: Color::White,
            dark: Color::Black,
        }
    }
}

impl Palette {
    /// Dark-on-light variant
    pub fn inverted() -> Self {
        let normal = Self::default();
        Self {
            light: normal.light.inverted(),
            dark: normal.dark.inverted(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Fonts {
    numerals: FontHandle,
    date: FontHandle,
}

#[derive(Debug, Clone, Copy)]
struct Layers {
    background: LayerHandle,
    hands: LayerHandle,
}

/// Everything acquired in `on_init` and released in `on_teardown`
#[derive(Debug, Clone, Copy)]
struct Resources {
    paths: FacePaths,
    fonts: Fonts,
    layers: Layers,
}

/// Face state shared by the tick handler and the layer redraws
#[derive(Debug, Clone)]
pub struct T10Face {
    palette: Palette,
    now: TimeOfDay,
    resources: Option<Resources>,
}

impl T10Face {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            now: TimeOfDay::default(),
            resources: None,
        }
    }

    /// Time shown by the hand layer
    pub fn now(&self) -> &TimeOfDay {
        &self.now
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Check whether the face holds its fonts and layers
    pub fn is_running(&self) -> bool {
        self.resources.is_some()
    }

    pub fn background_layer(&self) -> Option<LayerHandle> {
        self.resources.map(|r| r.layers.background)
    }

    pub fn hand_layer(&self) -> Option<LayerHandle> {
        self.resources.map(|r| r.layers.hands)
    }

    fn unload_fonts<H: Host>(host: &mut H, fonts: Fonts) {
        host.unload_font(fonts.numerals);
        host.unload_font(fonts.date);
    }

    fn load_fonts<H: Host>(host: &mut H) -> Result<Fonts, InitError> {
        let numerals = host.load_font(FontResource::Numerals)?;
        let date = match host.load_font(FontResource::Date) {
            Ok(font) => font,
            Err(e) => {
                host.unload_font(numerals);
                return Err(e.into());
            }
        };
        Ok(Fonts { numerals, date })
    }
}

impl WatchApp for T10Face {
    /// A face that is already running keeps its resources and only takes
    /// the new time.
    fn on_init<H: Host>(&mut self, host: &mut H, now: TimeOfDay) -> Result<(), InitError> {
        if self.is_running() {
            self.on_tick(host, now);
            return Ok(());
        }

        let paths = FacePaths::anchored_at(CENTER);
        self.now = now;

        host.set_background(self.palette.dark);

        let fonts = Self::load_fonts(host)?;

        let background = match host.create_layer(SCREEN_FRAME) {
            Ok(layer) => layer,
            Err(e) => {
                Self::unload_fonts(host, fonts);
                return Err(e.into());
            }
        };
        let hands = match host.create_layer(SCREEN_FRAME) {
            Ok(layer) => layer,
            Err(e) => {
                host.remove_layer(background);
                Self::unload_fonts(host, fonts);
                return Err(e.into());
            }
        };
        let layers = Layers { background, hands };

        host.mark_dirty(layers.background);
        host.mark_dirty(layers.hands);

        self.resources = Some(Resources {
            paths,
            fonts,
            layers,
        });
        Ok(())
    }

    fn on_teardown<H: Host>(&mut self, host: &mut H) {
        if let Some(resources) = self.resources.take() {
            host.remove_layer(resources.layers.hands);
            host.remove_layer(resources.layers.background);
            Self::unload_fonts(host, resources.fonts);
        }
    }

    fn on_tick<H: Host>(&mut self, host: &mut H, now: TimeOfDay) {
        self.now = now;
        if let Some(resources) = &self.resources {
            host.mark_dirty(resources.layers.hands);
        }
    }

    fn update_layer<C: Canvas>(&self, layer: LayerHandle, canvas: &mut C) {
        let Some(resources) = &self.resources else {
            return;
        };

        if layer == resources.layers.background {
            background::draw_background(
                canvas,
                &resources.paths.ticks,
                resources.fonts.numerals,
                self.palette,
            );
        } else if layer == resources.layers.hands {
            hands::draw_hands(
                canvas,
                &resources.paths.hands,
                resources.fonts.date,
                &self.now,
                self.palette,
            );
        }
    }
}
