//! A rasterizer bound to one pixel size and render mode, plus the
//! aggregate metrics used to size the output canvas.

use std::path::Path;

use tracing::debug;

use crate::bitmap::Bitmap;
use crate::error::{RasterError, RenderError};
use crate::glyph::Glyph;
use crate::rasterizer::{FontdueRasterizer, PixelSize, Rasterizer, RenderMode};

/// Shared vertical metrics and summed cell width of a character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextDimensions {
    /// Sum of all cell widths.
    pub width: u32,
    /// Canvas height, `ascent + descent`.
    pub height: u32,
    /// Maximum ascent over the set.
    pub ascent: u32,
    /// Maximum descent over the set.
    pub descent: u32,
}

impl TextDimensions {
    /// Rows from the canvas bottom to the baseline.
    pub fn baseline(&self) -> u32 {
        self.descent
    }
}

/// A font at a fixed pixel size.
///
/// Glyphs are not cached; asking for the same character twice renders it
/// twice and yields equal glyphs.
#[derive(Debug)]
pub struct Font<R> {
    rasterizer: R,
    size: PixelSize,
    mode: RenderMode,
}

impl Font<FontdueRasterizer> {
    /// Open a font file with the built-in `fontdue` backend.
    pub fn open(
        path: impl AsRef<Path>,
        size: PixelSize,
        mode: RenderMode,
    ) -> Result<Self, RasterError> {
        Self::new(FontdueRasterizer::open(path)?, size, mode)
    }
}

impl<R: Rasterizer> Font<R> {
    /// Bind a rasterizer to a pixel size and render mode.
    pub fn new(mut rasterizer: R, size: PixelSize, mode: RenderMode) -> Result<Self, RasterError> {
        rasterizer.set_pixel_size(size)?;
        Ok(Self {
            rasterizer,
            size,
            mode,
        })
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn family_name(&self) -> Option<String> {
        self.rasterizer.family_name()
    }

    /// Render one character into a [`Glyph`].
    pub fn glyph_for_character(&mut self, ch: char) -> Result<Glyph, RenderError> {
        let code = ch as u32;
        let slot = self
            .rasterizer
            .load_glyph(ch, self.mode)
            .map_err(|source| RenderError::Raster { code, source })?;
        let glyph =
            Glyph::from_slot(&slot, self.mode).map_err(|source| RenderError::Glyph { code, source })?;
        debug!(
            code,
            width = glyph.width(),
            height = glyph.height(),
            top = glyph.top,
            left = glyph.left,
            advance = glyph.advance_width,
            "rendered glyph"
        );
        Ok(glyph)
    }

    /// Render one character and return just its bitmap.
    pub fn render_character(&mut self, ch: char) -> Result<Bitmap, RenderError> {
        Ok(self.glyph_for_character(ch)?.bitmap)
    }

    /// Measure every character of `chars`.
    pub fn text_dimensions(&mut self, chars: &[char]) -> Result<TextDimensions, RenderError> {
        let mut dims = TextDimensions::default();
        for &ch in chars {
            let glyph = self.glyph_for_character(ch)?;
            dims.ascent = dims.ascent.max(glyph.ascent);
            dims.descent = dims.descent.max(glyph.descent);
            dims.width += glyph.cell_layout().width;
        }
        dims.height = dims.ascent + dims.descent;
        Ok(dims)
    }
}
