//! Bitmap diagnostics.

use crate::bitmap::PlanarBitmap;
use crate::geometry::byte_width;
use crate::layout::is_interleaved;

/// Log target used by [`dump`].
pub const DUMP_TARGET: &str = "zenplanar::dump";

/// Log a bitmap's geometry, flags and layout at info level.
pub fn dump<B: PlanarBitmap + ?Sized>(bitmap: &B) {
    log::info!(
        target: DUMP_TARGET,
        "bitmap {}x{}x{}: bytes/row {}, byte width {}, flags {:?} (raw {:#04x}), {}, {} planes",
        bitmap.width(),
        bitmap.height(),
        bitmap.depth(),
        bitmap.bytes_per_row(),
        byte_width(bitmap),
        bitmap.flags(),
        bitmap.raw_flags(),
        if is_interleaved(bitmap) {
            "interleaved"
        } else {
            "planar"
        },
        bitmap.planes().count()
    );
}
