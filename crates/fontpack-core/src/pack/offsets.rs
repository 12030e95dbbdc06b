//! Offset table element width selection and little-endian encoding.

use serde::Serialize;

/// Byte width of each offset table element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum OffsetWidth {
    One,
    Two,
    Four,
}

impl OffsetWidth {
    /// Smallest width able to address a stream of `len` bytes.
    ///
    /// A stream that would need three bytes uses four.
    pub fn for_length(len: u64) -> Self {
        if len <= 0xFF {
            OffsetWidth::One
        } else if len <= 0xFFFF {
            OffsetWidth::Two
        } else {
            OffsetWidth::Four
        }
    }

    pub fn bytes(self) -> u8 {
        match self {
            OffsetWidth::One => 1,
            OffsetWidth::Two => 2,
            OffsetWidth::Four => 4,
        }
    }

    /// Encode `offsets` as consecutive little-endian elements of this width.
    ///
    /// Values must fit the width; use [`OffsetWidth::for_length`] on the
    /// total stream length to guarantee that.
    pub fn encode_le(self, offsets: &[u32]) -> Vec<u8> {
        let width = self.bytes() as usize;
        let mut out = Vec::with_capacity(offsets.len() * width);
        for &offset in offsets {
            out.extend_from_slice(&offset.to_le_bytes()[..width]);
        }
        out
    }
}

impl From<OffsetWidth> for u8 {
    fn from(width: OffsetWidth) -> u8 {
        width.bytes()
    }
}
