//! The planar bitmap capability interface, its two representations, and the
//! allocator.
//!
//! Everything outside this module works against [`PlanarBitmap`]. Which
//! concrete type backs [`Bitmap`] is decided at build time by the
//! `host-bitmap` feature.

mod fallback;
mod host;

pub use fallback::FallbackBitmap;
pub use host::HostBitMap;

use crate::error::BitmapError;
use crate::flags::{BitmapFlags, FlagTable};
use crate::geometry::{byte_width, row_stride};
use crate::limits::{MemoryProvider, SystemMemory};
use crate::planes::{MAX_PLANES, Planes};

/// The bitmap type used by this build.
#[cfg(not(feature = "host-bitmap"))]
pub type Bitmap = FallbackBitmap;

/// The bitmap type used by this build.
#[cfg(feature = "host-bitmap")]
pub type Bitmap = HostBitMap;

mod sealed {
    use crate::flags::BitmapFlags;
    use crate::planes::Planes;

    /// Assembly from already allocated planes. Only the allocator calls this,
    /// after checking that `planes` holds exactly `depth` planes laid out
    /// with `bytes_per_row`.
    pub trait FromParts {
        fn from_parts(
            width: u16,
            height: u16,
            depth: u8,
            flags: BitmapFlags,
            bytes_per_row: u16,
            planes: Planes,
        ) -> Self;
    }
}

/// Read/write access to a planar bitmap, independent of how the host
/// platform lays out its bitmap structure.
///
/// The trait is sealed: bitmaps are only built by [`create_in`] and the
/// `.bm` decoders, so their planes always match their depth and stride.
///
/// ```compile_fail
/// use zenplanar::{BitmapFlags, FallbackBitmap, PlanarBitmap};
///
/// let one = FallbackBitmap::create(8, 1, 1, BitmapFlags::empty()).unwrap();
/// let _ = FallbackBitmap::from_parts(8, 1, 8, BitmapFlags::empty(), 1, one.planes().clone());
/// ```
pub trait PlanarBitmap: sealed::FromParts {
    /// Bit positions of [`PlanarBitmap::raw_flags`].
    const FLAG_TABLE: FlagTable;

    /// Width in pixels.
    fn width(&self) -> u16;
    /// Height in pixels (rows).
    fn height(&self) -> u16;
    /// Number of bitplanes, 1..=8.
    fn depth(&self) -> u8;
    /// Stored bytes per row. Multiplied by the depth when interleaved.
    fn bytes_per_row(&self) -> u16;
    /// Flags byte in this representation's own bit layout.
    fn raw_flags(&self) -> u8;
    fn planes(&self) -> &Planes;
    fn planes_mut(&mut self) -> &mut Planes;

    /// Named flags, decoded through [`PlanarBitmap::FLAG_TABLE`].
    fn flags(&self) -> BitmapFlags {
        Self::FLAG_TABLE.decode(self.raw_flags())
    }

    /// Bytes of `plane` in row `y`, `byte_width` long.
    ///
    /// # Panics
    ///
    /// If `plane >= depth` or `y >= height`.
    fn plane_row(&self, plane: u8, y: u16) -> &[u8] {
        assert!(y < self.height(), "row {y} out of range");
        let stride = usize::from(self.bytes_per_row());
        let bw = usize::from(byte_width(self));
        self.planes()
            .row(usize::from(plane), usize::from(y), stride, bw)
    }

    /// Mutable variant of [`PlanarBitmap::plane_row`].
    fn plane_row_mut(&mut self, plane: u8, y: u16) -> &mut [u8] {
        assert!(y < self.height(), "row {y} out of range");
        let stride = usize::from(self.bytes_per_row());
        let bw = usize::from(byte_width(self));
        self.planes_mut()
            .row_mut(usize::from(plane), usize::from(y), stride, bw)
    }

    /// Palette index at (x, y), plane 0 being the least significant bit.
    ///
    /// # Panics
    ///
    /// If the coordinates are outside the bitmap.
    fn pixel(&self, x: u16, y: u16) -> u8 {
        assert!(x < self.width(), "column {x} out of range");
        let byte = usize::from(x / 8);
        let shift = 7 - (x % 8);
        (0..self.depth()).fold(0u8, |index, plane| {
            let bit = (self.plane_row(plane, y)[byte] >> shift) & 1;
            index | (bit << plane)
        })
    }

    /// Write palette index `index` at (x, y). Bits above the depth are
    /// ignored.
    ///
    /// # Panics
    ///
    /// If the coordinates are outside the bitmap.
    fn set_pixel(&mut self, x: u16, y: u16, index: u8) {
        assert!(x < self.width(), "column {x} out of range");
        let byte = usize::from(x / 8);
        let mask = 0x80u8 >> (x % 8);
        for plane in 0..self.depth() {
            let row = self.plane_row_mut(plane, y);
            if index & (1 << plane) != 0 {
                row[byte] |= mask;
            } else {
                row[byte] &= !mask;
            }
        }
    }

    /// Allocate a bitmap from the global allocator. See [`create_in`].
    fn create(width: u16, height: u16, depth: u8, flags: BitmapFlags) -> Result<Self, BitmapError>
    where
        Self: Sized,
    {
        create_in(width, height, depth, flags, &SystemMemory)
    }
}

/// Allocate a `width`x`height` bitmap with `depth` zero-filled planes.
///
/// With [`BitmapFlags::INTERLEAVED`] one region of
/// `byte_width * depth * height` bytes is allocated and shared by all
/// planes; otherwise each plane gets its own `byte_width * height` buffer.
/// Planes are always zeroed; [`BitmapFlags::CLEAR`] is kept in the flags.
pub fn create_in<B: PlanarBitmap>(
    width: u16,
    height: u16,
    depth: u8,
    flags: BitmapFlags,
    provider: &dyn MemoryProvider,
) -> Result<B, BitmapError> {
    if width == 0 || height == 0 || depth == 0 || usize::from(depth) > MAX_PLANES {
        return Err(BitmapError::InvalidDimensions {
            width,
            height,
            depth,
        });
    }
    let bytes_per_row = row_stride(width, depth, flags)?;
    let planes = Planes::allocate(width, height, depth, flags, provider)?;
    log::debug!(
        "allocated {width}x{height}x{depth} bitmap, {bytes_per_row} bytes per row, flags {flags:?}"
    );
    Ok(<B as sealed::FromParts>::from_parts(
        width,
        height,
        depth,
        flags,
        bytes_per_row,
        planes,
    ))
}

/// Allocate a [`Bitmap`] from the global allocator.
pub fn create(width: u16, height: u16, depth: u8, flags: BitmapFlags) -> Result<Bitmap, BitmapError> {
    Bitmap::create(width, height, depth, flags)
}

/// Release a bitmap and every plane it owns.
pub fn destroy<B: PlanarBitmap>(bitmap: B) {
    log::debug!(
        "destroying {}x{}x{} bitmap",
        bitmap.width(),
        bitmap.height(),
        bitmap.depth()
    );
    drop(bitmap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::byte_width_for;
    use crate::limits::Limits;

    struct NullMemory;

    impl MemoryProvider for NullMemory {
        fn allocate(&self, _size: usize) -> Option<Vec<u8>> {
            None
        }
    }

    fn both_layouts() -> [BitmapFlags; 2] {
        [BitmapFlags::CLEAR, BitmapFlags::CLEAR | BitmapFlags::INTERLEAVED]
    }

    #[test]
    fn rejects_bad_depth_and_empty_dimensions() {
        for (w, h, d) in [(0, 1, 1), (1, 0, 1), (8, 8, 0), (8, 8, 9)] {
            let err = FallbackBitmap::create(w, h, d, BitmapFlags::empty()).unwrap_err();
            assert!(matches!(err, BitmapError::InvalidDimensions { .. }), "{err}");
        }
    }

    #[test]
    fn exactly_depth_slots_populated() {
        for flags in both_layouts() {
            for depth in 1..=8u8 {
                let bm = FallbackBitmap::create(24, 3, depth, flags).unwrap();
                assert_eq!(bm.planes().count(), usize::from(depth));
            }
        }
    }

    #[test]
    fn null_provider_is_an_allocation_error() {
        for flags in both_layouts() {
            let err = create_in::<FallbackBitmap>(64, 64, 4, flags, &NullMemory).unwrap_err();
            assert!(matches!(err, BitmapError::AllocationFailed { .. }));
            assert_eq!(err.kind(), crate::ErrorKind::Allocation);
        }
    }

    #[test]
    fn limits_reject_total_plane_size() {
        // 40 bytes per plane row * 256 rows * 5 planes = 51200
        let limits = Limits {
            max_memory_bytes: Some(51_199),
            ..Default::default()
        };
        for flags in both_layouts() {
            let err = create_in::<FallbackBitmap>(320, 256, 5, flags, &limits).unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::Allocation);
        }
        let limits = Limits {
            max_memory_bytes: Some(51_200),
            ..Default::default()
        };
        assert!(create_in::<FallbackBitmap>(320, 256, 5, BitmapFlags::empty(), &limits).is_ok());
    }

    #[test]
    fn pixels_roundtrip_in_both_layouts() {
        for flags in both_layouts() {
            let mut bm = FallbackBitmap::create(19, 5, 5, flags).unwrap();
            for y in 0..5 {
                for x in 0..19 {
                    bm.set_pixel(x, y, ((x * 3 + y) % 32) as u8);
                }
            }
            for y in 0..5 {
                for x in 0..19 {
                    assert_eq!(bm.pixel(x, y), ((x * 3 + y) % 32) as u8);
                }
            }
        }
    }

    #[test]
    fn set_pixel_ignores_bits_above_depth() {
        let mut bm = FallbackBitmap::create(8, 1, 2, BitmapFlags::empty()).unwrap();
        bm.set_pixel(0, 0, 0xFF);
        assert_eq!(bm.pixel(0, 0), 3);
    }

    #[test]
    fn plane_bits_are_msb_first() {
        let mut bm = FallbackBitmap::create(16, 1, 2, BitmapFlags::INTERLEAVED).unwrap();
        bm.set_pixel(0, 0, 1);
        bm.set_pixel(9, 0, 2);
        assert_eq!(bm.plane_row(0, 0), &[0x80, 0x00]);
        assert_eq!(bm.plane_row(1, 0), &[0x00, 0x40]);
    }

    #[test]
    fn host_representation_behaves_the_same() {
        let mut host = HostBitMap::create(32, 4, 3, BitmapFlags::INTERLEAVED).unwrap();
        assert_eq!(host.bytes_per_row(), 12);
        assert_eq!(byte_width(&host), byte_width_for(32));
        host.set_pixel(31, 3, 6);
        assert_eq!(host.pixel(31, 3), 6);
        destroy(host);
    }

    #[test]
    #[should_panic]
    fn pixel_out_of_range_panics() {
        let bm = FallbackBitmap::create(8, 8, 1, BitmapFlags::empty()).unwrap();
        bm.pixel(8, 0);
    }
}
