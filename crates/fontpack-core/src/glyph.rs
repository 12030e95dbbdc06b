//! One rendered character and its layout metrics.

use crate::bitmap::Bitmap;
use crate::error::GlyphError;
use crate::rasterizer::{GlyphSlot, RenderMode};
use crate::unpack::unpack_slot;

/// A rendered glyph bitmap plus bearings relative to the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub bitmap: Bitmap,
    /// Vertical distance from the baseline to the top scanline.
    pub top: i32,
    /// Horizontal bearing; negative for glyphs that hang left (capital J).
    pub left: i32,
    /// Pixels to the next glyph origin.
    pub advance_width: i32,
    /// Rows above the baseline.
    pub ascent: u32,
    /// Rows below the baseline.
    pub descent: u32,
}

/// Horizontal space allocated to a glyph and where its bitmap sits in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub width: u32,
    /// Column of the bitmap's left edge inside the cell.
    pub left: u32,
}

impl Glyph {
    /// Build a glyph from an unpacked bitmap and its metrics.
    pub fn new(bitmap: Bitmap, top: i32, left: i32, advance_width: i32) -> Self {
        let height = bitmap.height as i32;
        let descent = (height - top).max(0);
        let ascent = (top.max(height) - descent).max(0);
        Self {
            bitmap,
            top,
            left,
            advance_width,
            ascent: ascent as u32,
            descent: descent as u32,
        }
    }

    /// Build a glyph from raw rasterizer output.
    pub fn from_slot(slot: &GlyphSlot, mode: RenderMode) -> Result<Self, GlyphError> {
        let pixels = unpack_slot(slot, mode)?;
        let bitmap = Bitmap {
            width: slot.width,
            height: slot.rows,
            pixels,
        };
        // 26.6 fixed point to whole pixels.
        let advance_width = slot.advance.div_euclid(64) as i32;
        Ok(Self::new(bitmap, slot.top, slot.left, advance_width))
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height
    }

    /// Cell width and bitmap placement for this glyph.
    ///
    /// A glyph with a negative left bearing is shifted right so its bitmap
    /// starts at column 0 and the cell grows by the bearing. A glyph whose
    /// bitmap is wider than its advance (K, R) gets a cell wide enough for
    /// the bitmap.
    pub fn cell_layout(&self) -> CellLayout {
        let bitmap_width = self.width() as i64;
        let advance = self.advance_width as i64;
        let left = self.left as i64;
        if left >= 0 {
            CellLayout {
                width: advance.max(bitmap_width + left).max(0) as u32,
                left: left as u32,
            }
        } else {
            CellLayout {
                width: (advance - left).max(bitmap_width).max(0) as u32,
                left: 0,
            }
        }
    }
}
