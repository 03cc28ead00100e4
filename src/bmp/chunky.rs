//! Planar to chunky conversion.

use crate::bitmap::PlanarBitmap;

/// Convert to one palette index byte per pixel, rows top to bottom, no
/// padding.
///
/// Every pixel tests one bit in each plane; plane 0 is the least
/// significant bit of the index.
pub fn to_chunky<B: PlanarBitmap + ?Sized>(bitmap: &B) -> Vec<u8> {
    let w = usize::from(bitmap.width());
    let mut out = vec![0u8; w * usize::from(bitmap.height())];
    for (y, out_row) in (0..bitmap.height()).zip(out.chunks_exact_mut(w.max(1))) {
        convert_row(bitmap, y, out_row);
    }
    out
}

/// Compose row `y` into `out`, which holds `width` bytes.
pub(crate) fn convert_row<B: PlanarBitmap + ?Sized>(bitmap: &B, y: u16, out: &mut [u8]) {
    out.fill(0);
    for plane in 0..bitmap.depth() {
        let row = bitmap.plane_row(plane, y);
        for (x, index) in out.iter_mut().enumerate() {
            let bit = (row[x / 8] >> (7 - (x % 8))) & 1;
            *index |= bit << plane;
        }
    }
}

/// Chunky pixels as a typed 2D image.
#[cfg(feature = "imgref")]
pub fn to_chunky_img<B: PlanarBitmap + ?Sized>(bitmap: &B) -> imgref::ImgVec<u8> {
    imgref::ImgVec::new(
        to_chunky(bitmap),
        usize::from(bitmap.width()),
        usize::from(bitmap.height()),
    )
}
