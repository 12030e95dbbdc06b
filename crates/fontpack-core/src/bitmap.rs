//! Fixed-size pixel buffers with OR-compositing block copy.

use std::fmt;

/// A 2D pixel buffer, one byte per pixel, row-major.
///
/// In 1 bpp mode pixels are 0 or 1; in 8 bpp mode they carry the
/// rasterizer's 0-255 coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data, `width * height` bytes.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a blank bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Wrap existing pixel data.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel. Out-of-bounds reads return 0.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[self.index(x, y)]
    }

    /// Set a pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = value;
        }
    }

    /// True if no pixel is set.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == 0)
    }

    /// Copy all pixels of `src` into this bitmap with its top-left corner at
    /// `(x, y)`.
    ///
    /// Pixels are merged with a logical OR: a destination pixel that is
    /// already non-zero keeps its value, otherwise it takes the source value.
    /// A blank source region never erases ink already drawn. Source pixels
    /// falling outside the destination are clipped.
    pub fn bitblt(&mut self, src: &Bitmap, x: i32, y: i32) {
        for sy in 0..src.height {
            let dy = y + sy as i32;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width {
                let dx = x + sx as i32;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let dst = self.index(dx as u32, dy as u32);
                if self.pixels[dst] == 0 {
                    self.pixels[dst] = src.pixels[src.index(sx, sy)];
                }
            }
        }
    }
}

/// Renders the bitmap as `#`/`.` rows, one line per scanline.
impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.get(x, y) != 0 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
