//! Conversion of rasterizer bitmaps into one byte per pixel.

use crate::error::GlyphError;
use crate::rasterizer::{GlyphSlot, RenderMode};

/// Unpack a slot bitmap according to the render mode it was produced with.
pub fn unpack_slot(slot: &GlyphSlot, mode: RenderMode) -> Result<Vec<u8>, GlyphError> {
    let rows = slot.rows as usize;
    let width = slot.width as usize;
    let pitch = slot.pitch as usize;
    match mode {
        RenderMode::Mono => unpack_mono(rows, width, pitch, &slot.buffer),
        RenderMode::Gray => copy_gray(rows, width, pitch, &slot.buffer),
    }
}

/// Unpack an MSB-first monochrome bitmap into 0/1 bytes.
///
/// Only the first `width` bits of each row are read; trailing bits of the
/// last byte in a row belong to the padding and are skipped.
pub fn unpack_mono(
    rows: usize,
    width: usize,
    pitch: usize,
    buffer: &[u8],
) -> Result<Vec<u8>, GlyphError> {
    check_buffer(rows, pitch, width.div_ceil(8), width, buffer)?;

    let mut data = vec![0u8; rows * width];
    for y in 0..rows {
        for byte_index in 0..pitch {
            let done = byte_index * 8;
            if done >= width {
                break;
            }
            let byte = buffer[y * pitch + byte_index];
            let row_start = y * width + done;
            for bit in 0..(width - done).min(8) {
                data[row_start + bit] = (byte >> (7 - bit)) & 1;
            }
        }
    }
    Ok(data)
}

/// Copy an 8-bit coverage bitmap, dropping any row padding.
pub fn copy_gray(
    rows: usize,
    width: usize,
    pitch: usize,
    buffer: &[u8],
) -> Result<Vec<u8>, GlyphError> {
    check_buffer(rows, pitch, width, width, buffer)?;

    let mut data = Vec::with_capacity(rows * width);
    for y in 0..rows {
        data.extend_from_slice(&buffer[y * pitch..y * pitch + width]);
    }
    Ok(data)
}

fn check_buffer(
    rows: usize,
    pitch: usize,
    min_pitch: usize,
    width: usize,
    buffer: &[u8],
) -> Result<(), GlyphError> {
    if rows == 0 || width == 0 {
        return Ok(());
    }
    if pitch < min_pitch {
        return Err(GlyphError::PitchTooSmall { pitch, width });
    }
    let expected = rows * pitch;
    if buffer.len() < expected {
        return Err(GlyphError::ShortBuffer {
            expected,
            actual: buffer.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_mono_partial_last_byte() {
        // 10 px wide, 2 rows, pitch 2; stray bits past the width must be ignored.
        let buffer = [0b1010_0000, 0b1111_1111, 0b0000_0001, 0b0100_0000];
        let data = unpack_mono(2, 10, 2, &buffer).unwrap();
        assert_eq!(
            data,
            vec![
                1, 0, 1, 0, 0, 0, 0, 0, 1, 1, //
                0, 0, 0, 0, 0, 0, 0, 1, 0, 1,
            ]
        );
    }

    #[test]
    fn test_unpack_mono_wide_pitch() {
        // Rasterizers may pad rows well beyond ceil(width / 8).
        let buffer = [0xff, 0xaa, 0xaa, 0x00, 0x00, 0x00];
        let data = unpack_mono(2, 3, 3, &buffer).unwrap();
        assert_eq!(data, vec![1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_unpack_mono_short_buffer() {
        let err = unpack_mono(2, 8, 1, &[0xff]).unwrap_err();
        assert_eq!(
            err,
            GlyphError::ShortBuffer {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_unpack_mono_pitch_too_small() {
        let err = unpack_mono(1, 9, 1, &[0xff]).unwrap_err();
        assert_eq!(err, GlyphError::PitchTooSmall { pitch: 1, width: 9 });
    }

    #[test]
    fn test_copy_gray_drops_padding() {
        let buffer = [10, 20, 0, 30, 40, 0];
        assert_eq!(copy_gray(2, 2, 3, &buffer).unwrap(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_empty_glyph() {
        assert!(unpack_mono(0, 0, 0, &[]).unwrap().is_empty());
        assert!(copy_gray(0, 5, 5, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_unpack_slot_dispatches_on_mode() {
        let slot = GlyphSlot {
            width: 2,
            rows: 1,
            pitch: 2,
            buffer: vec![0x80, 0x40],
            ..Default::default()
        };
        assert_eq!(unpack_slot(&slot, RenderMode::Mono).unwrap(), vec![1, 0]);
        assert_eq!(unpack_slot(&slot, RenderMode::Gray).unwrap(), vec![0x80, 0x40]);
    }
}
