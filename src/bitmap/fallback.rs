use core::fmt;

use super::PlanarBitmap;
use super::sealed::FromParts;
use crate::flags::{BitmapFlags, FlagTable};
use crate::planes::Planes;

/// Library-owned bitmap, used where the host has no native bitmap structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackBitmap {
    width: u16,
    height: u16,
    bytes_per_row: u16,
    depth: u8,
    flags: BitmapFlags,
    planes: Planes,
}

impl PlanarBitmap for FallbackBitmap {
    const FLAG_TABLE: FlagTable = FlagTable::NATIVE;

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn depth(&self) -> u8 {
        self.depth
    }

    fn bytes_per_row(&self) -> u16 {
        self.bytes_per_row
    }

    fn raw_flags(&self) -> u8 {
        self.flags.bits()
    }

    fn planes(&self) -> &Planes {
        &self.planes
    }

    fn planes_mut(&mut self) -> &mut Planes {
        &mut self.planes
    }
}

impl FromParts for FallbackBitmap {
    fn from_parts(
        width: u16,
        height: u16,
        depth: u8,
        flags: BitmapFlags,
        bytes_per_row: u16,
        planes: Planes,
    ) -> Self {
        Self {
            width,
            height,
            bytes_per_row,
            depth,
            flags,
            planes,
        }
    }
}

impl fmt::Display for FallbackBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{} ({} bytes/row, {:?})",
            self.width, self.height, self.depth, self.bytes_per_row, self.flags
        )
    }
}
