//! fontpack glyph rasterization and packing pipeline.
//!
//! Turns a set of characters from a TrueType/OpenType font into a packed
//! raster font table for firmware and embedded display drivers: per-glyph
//! bitmaps aligned to a shared baseline and height, cell widths, and byte
//! offsets into one bit-packed (1 bpp) or byte-packed (8 bpp) stream.
//!
//! # Pipeline
//!
//! 1. A [`Rasterizer`] renders each character into a [`GlyphSlot`].
//! 2. [`Glyph::from_slot`] unpacks the slot into one byte per pixel.
//! 3. [`Font::text_dimensions`] finds the shared ascent and descent.
//! 4. [`pack_font`] composites every glyph into its own canvas and
//!    serializes the canvases into a [`FontTable`].
//!
//! # Example
//!
//! ```no_run
//! use fontpack_core::{pack_font, font_name, CharacterSet, Font, PixelSize, RenderMode};
//! use std::path::Path;
//!
//! let path = Path::new("Chango-Regular.ttf");
//! let mut font = Font::open(path, PixelSize::square(32), RenderMode::Mono).unwrap();
//! let charset = CharacterSet::parse_ranges("0x20-0x7e").unwrap();
//! let table = pack_font(&mut font, &charset, &font_name(path, 32, 1)).unwrap();
//! assert_eq!(table.glyphs.len(), 95);
//! ```

pub mod bitmap;
pub mod charset;
pub mod error;
pub mod font;
pub mod glyph;
pub mod pack;
pub mod preview;
pub mod rasterizer;
pub mod unpack;

pub use bitmap::Bitmap;
pub use charset::CharacterSet;
pub use error::{
    CharsetError, FontPackError, GlyphError, PackError, PreviewError, RasterError, RenderError,
};
pub use font::{Font, TextDimensions};
pub use glyph::{CellLayout, Glyph};
pub use pack::{font_name, pack_font, FontDescriptor, FontTable, OffsetWidth, PackedGlyph};
pub use rasterizer::{FontdueRasterizer, GlyphSlot, PixelSize, Rasterizer, RenderMode};
