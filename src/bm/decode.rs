//! `.bm` decoder.

use super::BmHeader;
use crate::bitmap::{PlanarBitmap, create_in};
use crate::error::BitmapError;
use crate::geometry::{byte_width, byte_width_for};
use crate::limits::{MemoryProvider, SystemMemory};

/// Create a bitmap from `.bm` bytes using the global allocator.
pub fn decode_bm<B: PlanarBitmap>(data: &[u8]) -> Result<B, BitmapError> {
    decode_bm_in(data, &SystemMemory)
}

/// Create a bitmap from `.bm` bytes, allocating planes from `provider`.
pub fn decode_bm_in<B: PlanarBitmap>(
    data: &[u8],
    provider: &dyn MemoryProvider,
) -> Result<B, BitmapError> {
    let header = BmHeader::parse(data)?;
    // Reject truncated input before allocating.
    payload(data, &header)?;
    let mut bitmap: B = create_in(
        header.width,
        header.height,
        header.depth,
        header.flags,
        provider,
    )?;
    decode_bm_into(&mut bitmap, data, 0, 0)?;
    Ok(bitmap)
}

/// Copy the pixels of a `.bm` file into `bitmap` at (`start_x`, `start_y`).
///
/// The source must fit inside the destination and its depth must not exceed
/// the destination's; planes past the source depth are left untouched. When
/// the source doesn't reach the destination's right edge, destination bits
/// right of the source in its last byte are preserved.
pub fn decode_bm_into<B: PlanarBitmap + ?Sized>(
    bitmap: &mut B,
    data: &[u8],
    start_x: u16,
    start_y: u16,
) -> Result<(), BitmapError> {
    if start_x % 8 != 0 {
        return Err(BitmapError::Misaligned { x: start_x });
    }
    let header = BmHeader::parse(data)?;
    let payload = payload(data, &header)?;

    if header.depth > bitmap.depth() {
        return Err(BitmapError::DepthMismatch {
            file_depth: header.depth,
            bitmap_depth: bitmap.depth(),
        });
    }

    let src_bw = usize::from(byte_width_for(header.width));
    let dst_bw = usize::from(byte_width(&*bitmap));
    let x_byte = usize::from(start_x / 8);
    let fits_x = x_byte + src_bw <= dst_bw;
    let fits_y = u32::from(start_y) + u32::from(header.height) <= u32::from(bitmap.height());
    if !fits_x || !fits_y {
        return Err(BitmapError::OutOfBounds {
            width: header.width,
            height: header.height,
            x: start_x,
            y: start_y,
            dest_width: bitmap.width(),
            dest_height: bitmap.height(),
        });
    }

    // Bits of the last destination byte that belong to pixels right of the
    // source and must survive the copy.
    let reaches_edge = u32::from(start_x) + u32::from(header.width) >= u32::from(bitmap.width());
    let keep: u8 = match header.width % 8 {
        0 => 0,
        _ if reaches_edge => 0,
        rem => 0xFF >> rem,
    };

    let height = usize::from(header.height);
    let depth = usize::from(header.depth);
    for plane in 0..header.depth {
        for y in 0..header.height {
            let p = usize::from(plane);
            let row = usize::from(y);
            let offset = if header.is_interleaved() {
                (row * depth + p) * src_bw
            } else {
                (p * height + row) * src_bw
            };
            let src = &payload[offset..offset + src_bw];
            let dst = &mut bitmap.plane_row_mut(plane, start_y + y)[x_byte..x_byte + src_bw];
            let last = src_bw - 1;
            dst[..last].copy_from_slice(&src[..last]);
            dst[last] = (src[last] & !keep) | (dst[last] & keep);
        }
    }

    log::debug!(
        "decoded {}x{}x{} .bm into {}x{}x{} bitmap at ({start_x}, {start_y})",
        header.width,
        header.height,
        header.depth,
        bitmap.width(),
        bitmap.height(),
        bitmap.depth()
    );
    Ok(())
}

fn payload<'a>(data: &'a [u8], header: &BmHeader) -> Result<&'a [u8], BitmapError> {
    let end = BmHeader::SIZE + header.payload_len();
    let payload = data
        .get(BmHeader::SIZE..end)
        .ok_or(BitmapError::UnexpectedEof)?;
    if data.len() > end {
        log::debug!("ignoring {} trailing bytes after .bm payload", data.len() - end);
    }
    Ok(payload)
}
