//! Row and plane size calculations.

use crate::bitmap::PlanarBitmap;
use crate::error::BitmapError;
use crate::flags::BitmapFlags;
use crate::layout::is_interleaved;

/// Bytes in one row of one plane, `ceil(width / 8)`.
pub fn byte_width_for(width: u16) -> u16 {
    width.div_ceil(8)
}

/// Logical per-plane byte width of `bitmap`, regardless of layout.
///
/// The stored bytes-per-row of an interleaved bitmap spans every plane, so
/// it has to be divided by the depth.
pub fn byte_width<B: PlanarBitmap + ?Sized>(bitmap: &B) -> u16 {
    let stored = bitmap.bytes_per_row();
    if is_interleaved(bitmap) {
        stored / u16::from(bitmap.depth())
    } else {
        stored
    }
}

/// Stored bytes-per-row for a bitmap created with `flags`.
pub fn row_stride(width: u16, depth: u8, flags: BitmapFlags) -> Result<u16, BitmapError> {
    let bw = byte_width_for(width);
    if !flags.contains(BitmapFlags::INTERLEAVED) {
        return Ok(bw);
    }
    bw.checked_mul(u16::from(depth))
        .ok_or(BitmapError::RowTooWide { width, depth })
}

/// Bytes in one whole plane.
pub fn plane_size(width: u16, height: u16) -> usize {
    usize::from(byte_width_for(width)) * usize::from(height)
}

/// Bytes in all planes of a bitmap, identical for both layouts.
pub fn total_size(width: u16, height: u16, depth: u8) -> Result<usize, BitmapError> {
    plane_size(width, height)
        .checked_mul(usize::from(depth))
        .ok_or(BitmapError::DimensionsTooLarge {
            width: u32::from(width),
            height: u32::from(height),
        })
}
