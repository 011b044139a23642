//! Bundled fonts
//!
//! Font "loading" on the device only claims a slot; the glyph data is
//! compiled into flash.

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoFont;

use t10_core::traits::{FontHandle, FontResource, ResourceError};

/// Number of fonts that can be loaded at once
pub const MAX_FONTS: usize = 4;

/// Looks up the glyph data for a resource
pub type FontBundle = fn(FontResource) -> Option<&'static MonoFont<'static>>;

/// Fonts compiled into this build
pub fn bundled_font(resource: FontResource) -> Option<&'static MonoFont<'static>> {
    match resource {
        FontResource::Numerals => Some(&profont::PROFONT_24_POINT),
        FontResource::Date => Some(&FONT_10X20),
    }
}

/// Slot table mapping handles to fonts
pub struct FontRegistry {
    bundle: FontBundle,
    slots: [Option<&'static MonoFont<'static>>; MAX_FONTS],
}

impl FontRegistry {
    /// Registry serving the fonts found by `bundle`
    pub fn new(bundle: FontBundle) -> Self {
        Self {
            bundle,
            slots: [None; MAX_FONTS],
        }
    }

    /// Registry serving the fonts compiled into this build
    pub fn bundled() -> Self {
        Self::new(bundled_font)
    }

    /// Claim a slot for `resource`
    pub fn load(&mut self, resource: FontResource) -> Result<FontHandle, ResourceError> {
        let font = (self.bundle)(resource).ok_or(ResourceError::NotFound)?;

        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(ResourceError::NoFreeSlot)?;

        self.slots[slot] = Some(font);
        Ok(FontHandle::new(slot as u8))
    }

    /// Release a slot; unknown handles are ignored
    pub fn unload(&mut self, font: FontHandle) {
        if let Some(slot) = self.slots.get_mut(font.slot() as usize) {
            *slot = None;
        }
    }

    /// Font behind a handle, `None` if the slot is empty
    pub fn get(&self, font: FontHandle) -> Option<&'static MonoFont<'static>> {
        self.slots.get(font.slot() as usize).copied().flatten()
    }

    /// Number of occupied slots
    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_get() {
        let mut fonts = FontRegistry::bundled();
        let numerals = fonts.load(FontResource::Numerals).unwrap();
        let date = fonts.load(FontResource::Date).unwrap();

        assert_ne!(numerals, date);
        assert_eq!(fonts.loaded(), 2);
        assert_eq!(fonts.get(date).unwrap().character_size.width, 10);
        assert!(fonts.get(numerals).unwrap().character_size.height > 20);
    }

    #[test]
    fn test_missing_resource() {
        fn date_only(resource: FontResource) -> Option<&'static MonoFont<'static>> {
            match resource {
                FontResource::Date => Some(&FONT_10X20),
                FontResource::Numerals => None,
            }
        }
        let mut fonts = FontRegistry::new(date_only);

        assert_eq!(
            fonts.load(FontResource::Numerals),
            Err(ResourceError::NotFound)
        );
        assert!(fonts.load(FontResource::Date).is_ok());
    }

    #[test]
    fn test_slots_exhausted() {
        let mut fonts = FontRegistry::bundled();
        for _ in 0..MAX_FONTS {
            fonts.load(FontResource::Date).unwrap();
        }
        assert_eq!(fonts.load(FontResource::Date), Err(ResourceError::NoFreeSlot));
    }

    #[test]
    fn test_unload_frees_slot() {
        let mut fonts = FontRegistry::bundled();
        let handle = fonts.load(FontResource::Numerals).unwrap();
        fonts.unload(handle);

        assert_eq!(fonts.loaded(), 0);
        assert!(fonts.get(handle).is_none());

        // Stale or bogus handles are harmless
        fonts.unload(handle);
        fonts.unload(FontHandle::new(200));
        assert_eq!(fonts.load(FontResource::Numerals), Ok(handle));
    }
}
