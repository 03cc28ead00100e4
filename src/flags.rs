//! Structural bitmap flags and their per-representation bit layouts.
//!
//! [`BitmapFlags`] is the library's named set. Each place a flag byte is
//! stored (the host `struct BitMap`, the `.bm` file header) uses its own bit
//! positions, described by a [`FlagTable`].

use bitflags::bitflags;

bitflags! {
    /// Structural properties of a planar bitmap.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BitmapFlags: u8 {
        /// Planes are zero-filled on allocation.
        const CLEAR = 1 << 0;
        /// Bitmap may be shown by the display hardware.
        const DISPLAYABLE = 1 << 1;
        /// All planes of one row are stored contiguously.
        const INTERLEAVED = 1 << 2;
        /// Standard (non-extended) layout.
        const STANDARD = 1 << 3;
        /// Only allocate the requested number of planes.
        const MIN_PLANES = 1 << 4;
    }
}

/// Maps every [`BitmapFlags`] capability to a bit position in a raw byte.
#[derive(Debug, Clone, Copy)]
pub struct FlagTable {
    entries: [(BitmapFlags, u8); 5],
    /// Bits that are defined but not supported by this crate.
    reserved: u8,
}

impl FlagTable {
    /// Identity layout used by the library-owned bitmap.
    pub const NATIVE: FlagTable = FlagTable {
        entries: [
            (BitmapFlags::CLEAR, BitmapFlags::CLEAR.bits()),
            (BitmapFlags::DISPLAYABLE, BitmapFlags::DISPLAYABLE.bits()),
            (BitmapFlags::INTERLEAVED, BitmapFlags::INTERLEAVED.bits()),
            (BitmapFlags::STANDARD, BitmapFlags::STANDARD.bits()),
            (BitmapFlags::MIN_PLANES, BitmapFlags::MIN_PLANES.bits()),
        ],
        reserved: 0,
    };

    /// Bit positions of the host OS `struct BitMap` flags field.
    pub const HOST: FlagTable = FlagTable {
        entries: [
            (BitmapFlags::CLEAR, 1 << 0),
            (BitmapFlags::DISPLAYABLE, 1 << 1),
            (BitmapFlags::INTERLEAVED, 1 << 2),
            (BitmapFlags::STANDARD, 1 << 3),
            (BitmapFlags::MIN_PLANES, 1 << 4),
        ],
        reserved: 0,
    };

    /// Bit positions of the `.bm` file header flags byte.
    ///
    /// Bit 1 marks attached mask planes, which aren't supported.
    pub const FILE: FlagTable = FlagTable {
        entries: [
            (BitmapFlags::INTERLEAVED, 1 << 0),
            (BitmapFlags::CLEAR, 1 << 2),
            (BitmapFlags::DISPLAYABLE, 1 << 3),
            (BitmapFlags::STANDARD, 1 << 4),
            (BitmapFlags::MIN_PLANES, 1 << 5),
        ],
        reserved: 1 << 1,
    };

    /// Encode a flag set into this table's raw byte.
    pub fn encode(&self, flags: BitmapFlags) -> u8 {
        self.entries
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .fold(0, |raw, (_, bit)| raw | bit)
    }

    /// Decode a raw byte, ignoring bits this table doesn't know.
    pub fn decode(&self, raw: u8) -> BitmapFlags {
        self.entries
            .iter()
            .filter(|(_, bit)| raw & bit != 0)
            .fold(BitmapFlags::empty(), |flags, (flag, _)| flags | *flag)
    }

    /// Decode a raw byte, returning the offending bits if any are reserved
    /// or unknown.
    pub fn decode_strict(&self, raw: u8) -> Result<BitmapFlags, u8> {
        let known = self.entries.iter().fold(0u8, |acc, (_, bit)| acc | bit);
        let bad = (raw & !known) | (raw & self.reserved);
        if bad != 0 {
            return Err(bad);
        }
        Ok(self.decode(raw))
    }

    /// Raw bit for a single capability.
    pub fn bit(&self, flag: BitmapFlags) -> u8 {
        self.encode(flag)
    }
}
