//! `.bm` encoder.

use super::BmHeader;
use crate::bitmap::PlanarBitmap;
use crate::layout::is_interleaved;

/// Serialize `bitmap` as a `.bm` file, plane data in its stored layout.
pub fn encode_bm<B: PlanarBitmap + ?Sized>(bitmap: &B) -> Vec<u8> {
    let header = BmHeader::of(bitmap);
    let mut out = Vec::with_capacity(BmHeader::SIZE + header.payload_len());
    header.write(&mut out);

    let depth = bitmap.depth();
    let height = bitmap.height();
    if is_interleaved(bitmap) {
        for y in 0..height {
            for plane in 0..depth {
                out.extend_from_slice(bitmap.plane_row(plane, y));
            }
        }
    } else {
        for plane in 0..depth {
            for y in 0..height {
                out.extend_from_slice(bitmap.plane_row(plane, y));
            }
        }
    }
    out
}
