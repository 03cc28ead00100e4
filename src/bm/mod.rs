//! Native `.bm` bitmap format.
//!
//! Big-endian, uncompressed:
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 2 | width in pixels |
//! | 2 | 2 | height in pixels |
//! | 4 | 1 | depth (plane count, 1..=8) |
//! | 5 | 1 | flags ([`FlagTable::FILE`] layout) |
//! | 6 | `byte_width * height * depth` | plane data |
//!
//! Plane data is stored in the bitmap's own layout. Interleaved files hold
//! each row's planes back to back; planar files hold plane 0 top to bottom,
//! then plane 1, and so on.

mod decode;
mod encode;

use std::path::Path;

pub use decode::{decode_bm, decode_bm_in, decode_bm_into};
pub use encode::encode_bm;

use crate::bitmap::PlanarBitmap;
use crate::error::BitmapError;
use crate::flags::{BitmapFlags, FlagTable};
use crate::geometry::byte_width_for;
use crate::planes::MAX_PLANES;

/// Parsed `.bm` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmHeader {
    pub width: u16,
    pub height: u16,
    pub depth: u8,
    pub flags: BitmapFlags,
}

impl BmHeader {
    /// Encoded header size in bytes.
    pub const SIZE: usize = 6;

    /// Parse and validate the header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        let header = data.get(..Self::SIZE).ok_or(BitmapError::UnexpectedEof)?;
        let width = u16::from_be_bytes([header[0], header[1]]);
        let height = u16::from_be_bytes([header[2], header[3]]);
        let depth = header[4];
        let raw_flags = header[5];

        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidHeader(format!(
                "empty bitmap {width}x{height}"
            )));
        }
        if depth == 0 || usize::from(depth) > MAX_PLANES {
            return Err(BitmapError::InvalidHeader(format!(
                "depth {depth} outside 1..={MAX_PLANES}"
            )));
        }
        let flags = FlagTable::FILE.decode_strict(raw_flags).map_err(|bad| {
            BitmapError::InvalidHeader(format!("unsupported flag bits {bad:#04x}"))
        })?;

        Ok(Self {
            width,
            height,
            depth,
            flags,
        })
    }

    pub(crate) fn of<B: PlanarBitmap + ?Sized>(bitmap: &B) -> Self {
        Self {
            width: bitmap.width(),
            height: bitmap.height(),
            depth: bitmap.depth(),
            flags: bitmap.flags(),
        }
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.width.to_be_bytes());
        out.extend_from_slice(&self.height.to_be_bytes());
        out.push(self.depth);
        out.push(FlagTable::FILE.encode(self.flags));
    }

    pub fn is_interleaved(&self) -> bool {
        self.flags.contains(BitmapFlags::INTERLEAVED)
    }

    /// Bytes of plane data following the header.
    pub fn payload_len(&self) -> usize {
        usize::from(byte_width_for(self.width)) * usize::from(self.height) * usize::from(self.depth)
    }
}

/// Load a `.bm` file into an existing bitmap at pixel offset
/// (`start_x`, `start_y`).
///
/// `start_x` must be a multiple of 8; unaligned offsets are rejected with
/// [`BitmapError::Misaligned`]. See [`decode_bm_into`] for the other rules.
pub fn load<B: PlanarBitmap>(
    bitmap: &mut B,
    path: impl AsRef<Path>,
    start_x: u16,
    start_y: u16,
) -> Result<(), BitmapError> {
    let path = path.as_ref();
    log::debug!("loading {} at ({start_x}, {start_y})", path.display());
    let data = std::fs::read(path)?;
    decode_bm_into(bitmap, &data, start_x, start_y)
}

/// Create a bitmap sized and flagged from a `.bm` file's header and fill it
/// with the file's pixels.
pub fn load_create<B: PlanarBitmap>(path: impl AsRef<Path>) -> Result<B, BitmapError> {
    let path = path.as_ref();
    log::debug!("creating bitmap from {}", path.display());
    let data = std::fs::read(path)?;
    decode_bm(&data)
}

/// Write `bitmap` to `path` as a `.bm` file.
pub fn save<B: PlanarBitmap>(bitmap: &B, path: impl AsRef<Path>) -> Result<(), BitmapError> {
    let path = path.as_ref();
    log::debug!(
        "saving {}x{}x{} bitmap to {}",
        bitmap.width(),
        bitmap.height(),
        bitmap.depth(),
        path.display()
    );
    std::fs::write(path, encode_bm(bitmap))?;
    Ok(())
}
