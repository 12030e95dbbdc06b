//! PNG preview of a packed table: all canvases side by side in one
//! uniform-height grayscale strip.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::bitmap::Bitmap;
use crate::error::PreviewError;
use crate::pack::FontTable;
use crate::rasterizer::RenderMode;

/// Composite every canvas of `table` left to right.
///
/// Mono pixels are scaled to 0/255 so the strip is viewable as-is.
pub fn compose_strip(table: &FontTable) -> Bitmap {
    let width = table.glyphs.iter().map(|g| g.canvas.width).sum();
    let mut strip = Bitmap::new(width, table.descriptor.height);
    let mut x = 0i32;
    for glyph in &table.glyphs {
        strip.bitblt(&glyph.canvas, x, 0);
        x += glyph.canvas.width as i32;
    }
    if table.mode == RenderMode::Mono {
        for pixel in &mut strip.pixels {
            if *pixel != 0 {
                *pixel = 0xff;
            }
        }
    }
    strip
}

/// Write the strip preview to a PNG file.
pub fn write_strip_png(table: &FontTable, path: &Path) -> Result<(), PreviewError> {
    let file = std::fs::File::create(path)?;
    write_strip_png_to_writer(table, std::io::BufWriter::new(file))
}

/// Write the strip preview to any writer.
pub fn write_strip_png_to_writer<W: Write>(table: &FontTable, writer: W) -> Result<(), PreviewError> {
    let strip = compose_strip(table);
    if strip.width == 0 || strip.height == 0 {
        return Err(PreviewError::Empty);
    }

    let mut encoder = Encoder::new(writer, strip.width, strip.height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    // Fixed settings keep the output byte-identical between runs.
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&strip.pixels)?;
    Ok(())
}
