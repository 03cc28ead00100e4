//! Fixed-capacity plane storage shared by both bitmap representations.

use crate::error::BitmapError;
use crate::flags::BitmapFlags;
use crate::geometry::{byte_width_for, plane_size, total_size};
use crate::limits::MemoryProvider;

/// Maximum number of bitplanes in one bitmap.
pub const MAX_PLANES: usize = 8;

/// One entry of the plane array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaneSlot {
    /// Unused (index >= depth).
    #[default]
    Empty,
    /// Buffer owned by this slot. For an interleaved bitmap, slot 0 owns the
    /// whole contiguous region.
    Owned(Vec<u8>),
    /// Plane stored inside slot 0's region, `offset` bytes into each row.
    Interleaved { offset: usize },
}

impl PlaneSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, PlaneSlot::Empty)
    }
}

/// Up to [`MAX_PLANES`] plane slots; slots `[0, depth)` are populated and the
/// rest are [`PlaneSlot::Empty`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Planes {
    slots: [PlaneSlot; MAX_PLANES],
}

impl Planes {
    /// Allocate zero-filled planes for a `width`x`height`x`depth` bitmap.
    ///
    /// The caller has already validated `depth` and the dimensions. Any plane
    /// allocated before a failure is dropped, so a failure never leaves a
    /// partly populated bitmap behind.
    pub(crate) fn allocate(
        width: u16,
        height: u16,
        depth: u8,
        flags: BitmapFlags,
        provider: &dyn MemoryProvider,
    ) -> Result<Self, BitmapError> {
        let total = total_size(width, height, depth)?;
        provider.reserve(width, height, total)?;

        let mut slots: [PlaneSlot; MAX_PLANES] = Default::default();
        if flags.contains(BitmapFlags::INTERLEAVED) {
            let region = provider
                .allocate(total)
                .ok_or(BitmapError::AllocationFailed { bytes: total })?;
            slots[0] = PlaneSlot::Owned(region);
            let bw = usize::from(byte_width_for(width));
            for (plane, slot) in slots.iter_mut().enumerate().take(usize::from(depth)).skip(1) {
                *slot = PlaneSlot::Interleaved {
                    offset: plane * bw,
                };
            }
        } else {
            let size = plane_size(width, height);
            for slot in slots.iter_mut().take(usize::from(depth)) {
                let buf = provider
                    .allocate(size)
                    .ok_or(BitmapError::AllocationFailed { bytes: size })?;
                *slot = PlaneSlot::Owned(buf);
            }
        }
        Ok(Self { slots })
    }

    /// Number of populated slots.
    pub fn count(&self) -> usize {
        self.slots.iter().take_while(|s| !s.is_empty()).count()
    }

    pub fn slots(&self) -> &[PlaneSlot; MAX_PLANES] {
        &self.slots
    }

    /// Resolve a plane to (slot holding its bytes, offset within each row).
    fn locate(&self, plane: usize) -> (usize, usize) {
        match self.slots.get(plane) {
            Some(PlaneSlot::Owned(_)) => (plane, 0),
            Some(PlaneSlot::Interleaved { offset }) => (0, *offset),
            _ => panic!("plane {plane} is not allocated"),
        }
    }

    fn buffer(&self, slot: usize) -> &[u8] {
        match &self.slots[slot] {
            PlaneSlot::Owned(buf) => buf,
            _ => panic!("plane slot {slot} does not own a buffer"),
        }
    }

    /// Bytes of `plane` in row `y`. `stride` is the stored bytes-per-row,
    /// `byte_width` the per-plane width.
    ///
    /// # Panics
    ///
    /// If `plane` isn't populated or `y` is past the last row.
    pub fn row(&self, plane: usize, y: usize, stride: usize, byte_width: usize) -> &[u8] {
        let (slot, offset) = self.locate(plane);
        let start = y * stride + offset;
        &self.buffer(slot)[start..start + byte_width]
    }

    /// Mutable variant of [`Planes::row`].
    pub fn row_mut(
        &mut self,
        plane: usize,
        y: usize,
        stride: usize,
        byte_width: usize,
    ) -> &mut [u8] {
        let (slot, offset) = self.locate(plane);
        let start = y * stride + offset;
        match &mut self.slots[slot] {
            PlaneSlot::Owned(buf) => &mut buf[start..start + byte_width],
            _ => panic!("plane slot {slot} does not own a buffer"),
        }
    }
}
