//! Scripted in-memory rasterizer shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use fontpack_core::{GlyphSlot, PixelSize, RasterError, Rasterizer, RenderMode};

/// Pixel rows plus bearings for one scripted character.
#[derive(Debug, Clone)]
pub struct ScriptedGlyph {
    /// Row-major coverage, 0-255; mono output thresholds at 128.
    pub rows: Vec<Vec<u8>>,
    pub top: i32,
    pub left: i32,
    /// Advance in whole pixels.
    pub advance: i64,
}

impl ScriptedGlyph {
    /// A solid `width x height` block.
    pub fn block(width: usize, height: usize, top: i32, left: i32, advance: i64) -> Self {
        Self {
            rows: vec![vec![0xff; width]; height],
            top,
            left,
            advance,
        }
    }

    /// Parse `#`/`.` art, one string per row.
    pub fn art(rows: &[&str], top: i32, left: i32, advance: i64) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| r.chars().map(|c| if c == '#' { 0xff } else { 0 }).collect())
                .collect(),
            top,
            left,
            advance,
        }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

/// Rasterizer returning pre-scripted glyphs; unknown characters fail.
///
/// Slots are produced with one byte of extra row padding so that the
/// unpacker's pitch handling is exercised.
#[derive(Debug, Default)]
pub struct ScriptedRasterizer {
    pub glyphs: HashMap<char, ScriptedGlyph>,
    pub size: Option<PixelSize>,
    pub loads: usize,
}

impl ScriptedRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ch: char, glyph: ScriptedGlyph) -> Self {
        self.glyphs.insert(ch, glyph);
        self
    }
}

impl Rasterizer for ScriptedRasterizer {
    fn set_pixel_size(&mut self, size: PixelSize) -> Result<(), RasterError> {
        self.size = Some(size);
        Ok(())
    }

    fn load_glyph(&mut self, ch: char, mode: RenderMode) -> Result<GlyphSlot, RasterError> {
        self.loads += 1;
        let glyph = self.glyphs.get(&ch).ok_or_else(|| RasterError::Load {
            path: "scripted".into(),
            reason: format!("no glyph for {:?}", ch),
        })?;

        let width = glyph.width();
        let rows = glyph.rows.len();
        let (pitch, buffer) = match mode {
            RenderMode::Mono => {
                let pitch = width.div_ceil(8) + 1;
                let mut buffer = vec![0u8; pitch * rows];
                for (y, row) in glyph.rows.iter().enumerate() {
                    for (x, &value) in row.iter().enumerate() {
                        if value >= 128 {
                            buffer[y * pitch + x / 8] |= 0x80 >> (x % 8);
                        }
                    }
                }
                (pitch, buffer)
            }
            RenderMode::Gray => {
                let pitch = width + 1;
                let mut buffer = vec![0u8; pitch * rows];
                for (y, row) in glyph.rows.iter().enumerate() {
                    buffer[y * pitch..y * pitch + width].copy_from_slice(row);
                }
                (pitch, buffer)
            }
        };

        Ok(GlyphSlot {
            width: width as u32,
            rows: rows as u32,
            pitch: pitch as u32,
            buffer,
            top: glyph.top,
            left: glyph.left,
            advance: glyph.advance * 64,
        })
    }

    fn family_name(&self) -> Option<String> {
        Some("Scripted".to_string())
    }
}

/// A 16 px "monospace" font: every glyph is a 10x16 block, top 12,
/// left 3, advance 16.
pub fn monospace16(chars: &str) -> ScriptedRasterizer {
    chars.chars().fold(ScriptedRasterizer::new(), |r, ch| {
        r.with(ch, ScriptedGlyph::block(10, 16, 12, 3, 16))
    })
}
