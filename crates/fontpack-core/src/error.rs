//! Error types for font loading, glyph decoding, selection and packing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a rasterizer backend.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The font file could not be read.
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The font file was read but could not be parsed.
    #[error("failed to load font {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// Pixel size is unusable (zero height).
    #[error("invalid pixel size {width}x{height}")]
    InvalidPixelSize { width: u32, height: u32 },

    /// Bits-per-pixel other than 1 or 8.
    #[error("unsupported bits per pixel: {0} (expected 1 or 8)")]
    UnsupportedBpp(u8),
}

/// Errors raised while turning a glyph slot into a [`crate::Glyph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// The slot buffer holds fewer bytes than `rows * pitch`.
    #[error("glyph buffer too short: expected {expected} bytes, got {actual}")]
    ShortBuffer { expected: usize, actual: usize },

    /// The row pitch cannot hold a full row of pixels.
    #[error("glyph pitch {pitch} too small for width {width}")]
    PitchTooSmall { pitch: usize, width: usize },
}

/// Errors raised while rendering one character.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render character {code:#x}: {source}")]
    Raster {
        code: u32,
        #[source]
        source: RasterError,
    },

    #[error("bad bitmap for character {code:#x}: {source}")]
    Glyph {
        code: u32,
        #[source]
        source: GlyphError,
    },
}

/// Errors raised while parsing a character selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharsetError {
    #[error("invalid character code '{0}'")]
    InvalidNumber(String),

    #[error("reversed character range {lo:#x}-{hi:#x}")]
    ReversedRange { lo: u32, hi: u32 },

    #[error("{0:#x} is not a valid Unicode scalar value")]
    InvalidCodePoint(u32),

    #[error("character list and string selection are mutually exclusive")]
    SelectionConflict,

    #[error("one of a character list or a string selection is required")]
    NoSelection,

    #[error("character selection is empty")]
    Empty,

    /// Raised only when contiguity is required by the caller.
    #[error("character selection is not contiguous: gap after {after:#x}")]
    NotContiguous { after: u32 },
}

/// Errors raised by the packer.
#[derive(Debug, Error)]
pub enum PackError {
    /// Cell widths are emitted as single bytes.
    #[error("cell width {width} of character {code:#x} exceeds 255 pixels")]
    CellTooWide { code: u32, width: u32 },

    /// The packed stream no longer fits a 4-byte offset.
    #[error("packed stream of {0} bytes exceeds 4-byte offset range")]
    OffsetOverflow(u64),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors from the PNG strip preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("nothing to preview")]
    Empty,
}

/// Top-level error for the whole conversion pipeline.
#[derive(Debug, Error)]
pub enum FontPackError {
    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Charset(#[from] CharsetError),

    #[error(transparent)]
    Pack(#[from] PackError),

    #[error(transparent)]
    Preview(#[from] PreviewError),
}
