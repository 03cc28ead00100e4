//! Interleaved layout detection.

use crate::bitmap::PlanarBitmap;
use crate::flags::BitmapFlags;

/// Whether all planes of a row are stored contiguously.
///
/// Answered from the bitmap's own flags byte through its representation's
/// flag table, never from plane addresses.
pub fn is_interleaved<B: PlanarBitmap + ?Sized>(bitmap: &B) -> bool {
    let bit = B::FLAG_TABLE.bit(BitmapFlags::INTERLEAVED);
    bitmap.raw_flags() & bit != 0
}
