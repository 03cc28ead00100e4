use core::fmt;

use super::PlanarBitmap;
use super::sealed::FromParts;
use crate::flags::{BitmapFlags, FlagTable};
use crate::geometry::byte_width;
use crate::planes::Planes;

/// Mirror of the host OS `struct BitMap`.
///
/// The OS structure has no pixel width; it is reported as whole bytes,
/// `byte_width * 8`, saturating at `u16::MAX`. Flags are kept in the OS bit
/// layout ([`FlagTable::HOST`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostBitMap {
    bytes_per_row: u16,
    rows: u16,
    flags: u8,
    depth: u8,
    planes: Planes,
}

impl PlanarBitmap for HostBitMap {
    const FLAG_TABLE: FlagTable = FlagTable::HOST;

    fn width(&self) -> u16 {
        byte_width(self).saturating_mul(8)
    }

    fn height(&self) -> u16 {
        self.rows
    }

    fn depth(&self) -> u8 {
        self.depth
    }

    fn bytes_per_row(&self) -> u16 {
        self.bytes_per_row
    }

    fn raw_flags(&self) -> u8 {
        self.flags
    }

    fn planes(&self) -> &Planes {
        &self.planes
    }

    fn planes_mut(&mut self) -> &mut Planes {
        &mut self.planes
    }
}

impl FromParts for HostBitMap {
    fn from_parts(
        _width: u16,
        height: u16,
        depth: u8,
        flags: BitmapFlags,
        bytes_per_row: u16,
        planes: Planes,
    ) -> Self {
        Self {
            bytes_per_row,
            rows: height,
            flags: FlagTable::HOST.encode(flags),
            depth,
            planes,
        }
    }
}

impl fmt::Display for HostBitMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BitMap {} bytes/row x {} rows x {} planes (flags {:#04x})",
            self.bytes_per_row, self.rows, self.depth, self.flags
        )
    }
}
