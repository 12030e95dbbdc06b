//! The packed font table and its descriptor record.

use std::path::Path;

use serde::Serialize;

use super::offsets::OffsetWidth;
use crate::bitmap::Bitmap;
use crate::font::TextDimensions;
use crate::rasterizer::RenderMode;
use crate::unpack::{copy_gray, unpack_mono};

/// Descriptor record, in the field order of the consuming `struct font`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontDescriptor {
    pub name: String,
    /// Widest cell in pixels.
    pub max_width: u32,
    /// Shared canvas height.
    pub height: u32,
    /// Rows above the baseline.
    pub ascent: u32,
    pub first_char: u32,
    /// Number of characters.
    pub size: u32,
    pub default_char: u32,
    /// Reserved, always 0.
    pub bits_size: u32,
    pub bpp: u8,
    /// Reserved, always 1.
    pub bits_width: u8,
    pub offset_width: OffsetWidth,
}

/// One character's entry in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedGlyph {
    pub ch: char,
    pub width: u8,
    /// Byte offset of the character's data in the packed stream.
    pub offset: u32,
    /// Composited canvas, `width x height`.
    pub canvas: Bitmap,
}

/// A complete packed raster font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    pub descriptor: FontDescriptor,
    pub mode: RenderMode,
    pub dimensions: TextDimensions,
    pub glyphs: Vec<PackedGlyph>,
    pub bits: Vec<u8>,
}

impl FontTable {
    /// Cell widths in table order.
    pub fn widths(&self) -> Vec<u8> {
        self.glyphs.iter().map(|g| g.width).collect()
    }

    /// Byte offsets in table order.
    pub fn offsets(&self) -> Vec<u32> {
        self.glyphs.iter().map(|g| g.offset).collect()
    }

    /// Offsets encoded with the selected element width, little-endian.
    pub fn offset_bytes(&self) -> Vec<u8> {
        self.descriptor.offset_width.encode_le(&self.offsets())
    }

    /// The characters in table order.
    pub fn char_map(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }

    /// Character `index`'s slice of the packed stream.
    pub fn glyph_bytes(&self, index: usize) -> Option<&[u8]> {
        let start = self.glyphs.get(index)?.offset as usize;
        let end = self
            .glyphs
            .get(index + 1)
            .map_or(self.bits.len(), |g| g.offset as usize);
        self.bits.get(start..end)
    }

    /// Decode character `index`'s packed bytes back into a canvas.
    pub fn unpack_canvas(&self, index: usize) -> Option<Bitmap> {
        let bytes = self.glyph_bytes(index)?;
        let width = self.glyphs[index].width as usize;
        let height = self.descriptor.height as usize;
        let pixels = match self.mode {
            RenderMode::Mono => unpack_mono(height, width, width.div_ceil(8), bytes),
            RenderMode::Gray => copy_gray(height, width, width, bytes),
        }
        .ok()?;
        Bitmap::from_pixels(width as u32, height as u32, pixels)
    }
}

/// Table name: font file stem, requested pixel height, and `_tt` for 8 bpp.
pub fn font_name(font_file: &Path, height: u32, bpp: u8) -> String {
    let stem = font_file
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let mut name = format!("{}_{}", stem, height);
    if bpp == 8 {
        name.push_str("_tt");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_name() {
        assert_eq!(
            font_name(Path::new("fonts/Chango-Regular.ttf"), 32, 1),
            "Chango-Regular_32"
        );
        assert_eq!(font_name(Path::new("cour.ttf"), 16, 8), "cour_16_tt");
    }

    #[test]
    fn test_descriptor_serializes_offset_width_as_number() {
        let descriptor = FontDescriptor {
            name: "f_8".into(),
            max_width: 8,
            height: 8,
            ascent: 6,
            first_char: 65,
            size: 1,
            default_char: 65,
            bits_size: 0,
            bpp: 1,
            bits_width: 1,
            offset_width: OffsetWidth::Two,
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["offset_width"], 2);
        assert_eq!(json["bits_width"], 1);
    }
}
