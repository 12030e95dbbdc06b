//! Packing a character set into one shared bit/byte stream.
//!
//! Every character gets its own canvas of the shared height and its own
//! cell width. The glyph bitmap is composited so that its baseline lands on
//! the canvas baseline, the canvas is serialized row by row, and the
//! per-character streams are concatenated. Offsets into the stream form the
//! offset table, whose element width is the smallest that can address the
//! whole stream.

mod offsets;
mod table;

pub use offsets::OffsetWidth;
pub use table::{font_name, FontDescriptor, FontTable, PackedGlyph};

use tracing::info;

use crate::bitmap::Bitmap;
use crate::charset::CharacterSet;
use crate::error::PackError;
use crate::font::Font;
use crate::rasterizer::{Rasterizer, RenderMode};

/// Render and pack every character of `charset`.
///
/// Nothing is emitted here; the returned table is complete and validated, so
/// a caller that only writes on `Ok` never produces partial output.
pub fn pack_font<R: Rasterizer>(
    font: &mut Font<R>,
    charset: &CharacterSet,
    name: &str,
) -> Result<FontTable, PackError> {
    let mode = font.mode();
    let dims = font.text_dimensions(charset.chars())?;
    let height = dims.height;
    let baseline = dims.baseline();

    let mut bits = Vec::new();
    let mut glyphs = Vec::with_capacity(charset.len());
    let mut offset: u64 = 0;

    for &ch in charset.chars() {
        let glyph = font.glyph_for_character(ch)?;
        let cell = glyph.cell_layout();
        let width = u8::try_from(cell.width).map_err(|_| PackError::CellTooWide {
            code: ch as u32,
            width: cell.width,
        })?;

        let mut canvas = Bitmap::new(cell.width, height);
        // Puts the glyph's baseline on the shared baseline row.
        let y = height as i32 - glyph.ascent as i32 - baseline as i32;
        canvas.bitblt(&glyph.bitmap, cell.left as i32, y);

        let emitted = serialize_canvas(&canvas, mode, &mut bits);
        glyphs.push(PackedGlyph {
            ch,
            width,
            offset: u32::try_from(offset).map_err(|_| PackError::OffsetOverflow(offset))?,
            canvas,
        });
        offset += emitted as u64;
    }

    if offset > u32::MAX as u64 {
        return Err(PackError::OffsetOverflow(offset));
    }
    let offset_width = OffsetWidth::for_length(offset);

    let descriptor = FontDescriptor {
        name: name.to_string(),
        max_width: glyphs.iter().map(|g| g.width as u32).max().unwrap_or(0),
        height,
        ascent: height - baseline,
        first_char: charset.first() as u32,
        size: glyphs.len() as u32,
        default_char: charset.first() as u32,
        bits_size: 0,
        bpp: mode.bpp(),
        bits_width: 1,
        offset_width,
    };

    info!(
        table = name,
        chars = descriptor.size,
        height,
        max_width = descriptor.max_width,
        bytes = bits.len(),
        offset_width = offset_width.bytes(),
        "packed font table"
    );

    Ok(FontTable {
        descriptor,
        mode,
        dimensions: dims,
        glyphs,
        bits,
    })
}

/// Append `canvas` to `out` and return the number of bytes written.
///
/// Mono canvases use one bit per pixel, MSB first, each row padded with
/// zero bits to a whole byte. Gray canvases use one byte per pixel with no
/// padding.
pub fn serialize_canvas(canvas: &Bitmap, mode: RenderMode, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    match mode {
        RenderMode::Mono => {
            let row_bytes = canvas.width.div_ceil(8);
            for y in 0..canvas.height {
                for byte_index in 0..row_bytes {
                    let mut byte = 0u8;
                    for bit in 0..8 {
                        if canvas.get(byte_index * 8 + bit, y) != 0 {
                            byte |= 0x80 >> bit;
                        }
                    }
                    out.push(byte);
                }
            }
        }
        RenderMode::Gray => out.extend_from_slice(&canvas.pixels),
    }
    out.len() - start
}
