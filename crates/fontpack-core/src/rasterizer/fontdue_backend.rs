//! Rasterizer backend built on `fontdue`.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{GlyphSlot, PixelSize, RenderMode, Rasterizer};
use crate::error::RasterError;

/// Coverage at or above this value becomes an "on" pixel in mono mode.
const MONO_THRESHOLD: u8 = 128;

/// A TrueType/OpenType face rasterized with `fontdue`.
pub struct FontdueRasterizer {
    font: ::fontdue::Font,
    path: PathBuf,
    size: PixelSize,
}

impl std::fmt::Debug for FontdueRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueRasterizer")
            .field("path", &self.path)
            .field("size", &self.size)
            .finish()
    }
}

impl FontdueRasterizer {
    /// Open and parse a font file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| RasterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data, path)
    }

    /// Parse font data already in memory. `path` is only used in messages.
    pub fn from_bytes(data: Vec<u8>, path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let path = path.as_ref().to_path_buf();
        let font = ::fontdue::Font::from_bytes(data, ::fontdue::FontSettings::default())
            .map_err(|reason| RasterError::Load {
                path: path.clone(),
                reason: reason.to_string(),
            })?;
        debug!(path = %path.display(), glyphs = font.glyph_count(), "loaded font");
        Ok(Self {
            font,
            path,
            size: PixelSize::square(16),
        })
    }

    /// Current pixel size.
    pub fn pixel_size(&self) -> PixelSize {
        self.size
    }
}

impl Rasterizer for FontdueRasterizer {
    fn set_pixel_size(&mut self, size: PixelSize) -> Result<(), RasterError> {
        if size.height == 0 {
            return Err(RasterError::InvalidPixelSize {
                width: size.width,
                height: size.height,
            });
        }
        self.size = PixelSize::new(size.width, size.height);
        Ok(())
    }

    fn load_glyph(&mut self, ch: char, mode: RenderMode) -> Result<GlyphSlot, RasterError> {
        if self.font.lookup_glyph_index(ch) == 0 {
            debug!(code = ch as u32, "character not in font, using notdef glyph");
        }

        let (metrics, coverage) = self.font.rasterize(ch, self.size.height as f32);
        let scale = self.size.width as f32 / self.size.height as f32;

        let (width, coverage) = stretch_horizontal(&coverage, metrics.width, metrics.height, scale);
        let rows = metrics.height as u32;
        let left = (metrics.xmin as f32 * scale).round() as i32;
        let top = metrics.ymin + metrics.height as i32;
        // Whole-pixel advance in 26.6, like a hinted FreeType slot.
        let advance = (metrics.advance_width * scale).round() as i64 * 64;

        let (pitch, buffer) = match mode {
            RenderMode::Mono => pack_mono(&coverage, width, metrics.height),
            RenderMode::Gray => (width, coverage),
        };

        Ok(GlyphSlot {
            width: width as u32,
            rows,
            pitch: pitch as u32,
            buffer,
            top,
            left,
            advance,
        })
    }

    fn family_name(&self) -> Option<String> {
        self.font.name().map(str::to_string)
    }
}

/// Resample a coverage map horizontally by `scale` (nearest sample).
fn stretch_horizontal(
    coverage: &[u8],
    width: usize,
    height: usize,
    scale: f32,
) -> (usize, Vec<u8>) {
    if width == 0 || (scale - 1.0).abs() < f32::EPSILON {
        return (width, coverage.to_vec());
    }

    let new_width = ((width as f32 * scale).round() as usize).max(1);
    let mut out = Vec::with_capacity(new_width * height);
    for y in 0..height {
        let row = &coverage[y * width..(y + 1) * width];
        for x in 0..new_width {
            let sx = (((x as f32 + 0.5) / scale) as usize).min(width - 1);
            out.push(row[sx]);
        }
    }
    (new_width, out)
}

/// Threshold coverage and pack it MSB-first, `ceil(width / 8)` bytes a row.
fn pack_mono(coverage: &[u8], width: usize, height: usize) -> (usize, Vec<u8>) {
    let pitch = width.div_ceil(8);
    let mut buffer = vec![0u8; pitch * height];
    for y in 0..height {
        for x in 0..width {
            if coverage[y * width + x] >= MONO_THRESHOLD {
                buffer[y * pitch + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    (pitch, buffer)
}
