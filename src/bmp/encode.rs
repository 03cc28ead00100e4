//! BMP encoder: uncompressed 8-bit palettized BMP.

use super::chunky::convert_row;
use crate::bitmap::PlanarBitmap;
use crate::error::BitmapError;
use crate::palette::Palette;

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;

/// Encode `bitmap` as an 8 bpp BMP with a `2^depth` entry colour table.
///
/// Rows are written bottom-up and padded to 4 bytes. `palette` must hold at
/// least `2^depth` colours; extra entries are dropped.
pub(crate) fn encode_bmp<B: PlanarBitmap + ?Sized>(
    bitmap: &B,
    palette: &Palette,
) -> Result<Vec<u8>, BitmapError> {
    let colors = 1usize << bitmap.depth();
    if palette.len() < colors {
        return Err(BitmapError::PaletteTooSmall {
            needed: colors,
            actual: palette.len(),
        });
    }

    let w = usize::from(bitmap.width());
    let h = usize::from(bitmap.height());
    let row_stride = (w + 3) & !3;
    let pixel_data_size = row_stride * h;
    let data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE + colors * 4;
    let file_size = data_offset + pixel_data_size;
    if u32::try_from(file_size).is_err() {
        return Err(BitmapError::DimensionsTooLarge {
            width: u32::from(bitmap.width()),
            height: u32::from(bitmap.height()),
        });
    }

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(
        &mut out,
        file_size,
        data_offset,
        pixel_data_size,
        bitmap.width(),
        bitmap.height(),
        colors,
    );

    for color in &palette.colors()[..colors] {
        out.extend_from_slice(&[color.b, color.g, color.r, 0]);
    }

    let mut row = vec![0u8; row_stride];
    for y in (0..bitmap.height()).rev() {
        convert_row(bitmap, y, &mut row[..w]);
        out.extend_from_slice(&row);
    }

    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    data_offset: usize,
    pixel_data_size: usize,
    width: u16,
    height: u16,
    colors: usize,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(data_offset as u32).to_le_bytes());

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&i32::from(width).to_le_bytes());
    out.extend_from_slice(&i32::from(height).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&8u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&(colors as u32).to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
