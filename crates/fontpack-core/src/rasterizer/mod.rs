//! Font rasterizer capability.
//!
//! The packer never talks to a font library directly. It needs a handle
//! that can be sized once and then asked for one glyph at a time, returning
//! the raw bitmap and bearings in FreeType glyph-slot terms. Any backend
//! able to fill a [`GlyphSlot`] can drive the pipeline.

mod fontdue_backend;

pub use self::fontdue_backend::FontdueRasterizer;

use serde::Serialize;

use crate::error::RasterError;

/// Rendering mode, selected by the output bits per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// 1 bpp; slot buffers are MSB-first packed bits.
    Mono,
    /// 8 bpp; slot buffers hold one coverage byte per pixel.
    Gray,
}

impl RenderMode {
    /// Map a bits-per-pixel value to a render mode.
    pub fn from_bpp(bpp: u8) -> Result<Self, RasterError> {
        match bpp {
            1 => Ok(RenderMode::Mono),
            8 => Ok(RenderMode::Gray),
            other => Err(RasterError::UnsupportedBpp(other)),
        }
    }

    /// Bits per pixel of the packed output.
    pub fn bpp(self) -> u8 {
        match self {
            RenderMode::Mono => 1,
            RenderMode::Gray => 8,
        }
    }
}

/// Nominal pixel size of the rendered em square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    /// Create a pixel size. A width of 0 means "same as height".
    pub fn new(width: u32, height: u32) -> Self {
        let width = if width == 0 { height } else { width };
        Self { width, height }
    }

    /// Square size.
    pub fn square(height: u32) -> Self {
        Self::new(height, height)
    }
}

/// Raw rasterizer output for one character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphSlot {
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap row count.
    pub rows: u32,
    /// Bytes per bitmap row.
    pub pitch: u32,
    /// Raw bitmap bytes, `rows * pitch` long.
    pub buffer: Vec<u8>,
    /// Distance from the baseline up to the top scanline.
    pub top: i32,
    /// Horizontal bearing; may be negative.
    pub left: i32,
    /// Horizontal advance in 26.6 fixed point.
    pub advance: i64,
}

/// A font handle bound to a pixel size.
pub trait Rasterizer {
    /// Set the pixel size used by every following [`Rasterizer::load_glyph`].
    fn set_pixel_size(&mut self, size: PixelSize) -> Result<(), RasterError>;

    /// Render one character.
    ///
    /// Characters absent from the font are rendered with whatever fallback
    /// the backend applies (usually the notdef box).
    fn load_glyph(&mut self, ch: char, mode: RenderMode) -> Result<GlyphSlot, RasterError>;

    /// Family name embedded in the font, if any.
    fn family_name(&self) -> Option<String> {
        None
    }
}

impl<R: Rasterizer + ?Sized> Rasterizer for Box<R> {
    fn set_pixel_size(&mut self, size: PixelSize) -> Result<(), RasterError> {
        (**self).set_pixel_size(size)
    }

    fn load_glyph(&mut self, ch: char, mode: RenderMode) -> Result<GlyphSlot, RasterError> {
        (**self).load_glyph(ch, mode)
    }

    fn family_name(&self) -> Option<String> {
        (**self).family_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_from_bpp() {
        assert_eq!(RenderMode::from_bpp(1).unwrap(), RenderMode::Mono);
        assert_eq!(RenderMode::from_bpp(8).unwrap(), RenderMode::Gray);
        assert!(matches!(
            RenderMode::from_bpp(4),
            Err(RasterError::UnsupportedBpp(4))
        ));
        assert_eq!(RenderMode::Gray.bpp(), 8);
    }

    #[test]
    fn test_pixel_size_zero_width_follows_height() {
        assert_eq!(PixelSize::new(0, 16), PixelSize::square(16));
        assert_eq!(PixelSize::new(12, 16).width, 12);
    }
}
