//! Export to Windows BMP.
//!
//! The conversion tests `width * height * depth` bits and is meant for
//! debugging and tooling, not per-frame use.

mod chunky;
mod encode;

use std::path::Path;

pub use chunky::to_chunky;
#[cfg(feature = "imgref")]
pub use chunky::to_chunky_img;

use crate::bitmap::PlanarBitmap;
use crate::error::BitmapError;
use crate::palette::Palette;

/// Encode `bitmap` as an 8 bpp palettized BMP in memory.
pub fn encode_bmp<B: PlanarBitmap + ?Sized>(
    bitmap: &B,
    palette: &Palette,
) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(bitmap, palette)
}

/// Write `bitmap` to `path` as an 8 bpp palettized BMP.
pub fn export_bmp<B: PlanarBitmap + ?Sized>(
    bitmap: &B,
    palette: &Palette,
    path: impl AsRef<Path>,
) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let data = encode::encode_bmp(bitmap, palette)?;
    log::debug!(
        "exporting {}x{}x{} bitmap as BMP to {} ({} bytes)",
        bitmap.width(),
        bitmap.height(),
        bitmap.depth(),
        path.display(),
        data.len()
    );
    std::fs::write(path, data)?;
    Ok(())
}
