//! Memory provider and resource limits for bitmap allocation.

use crate::error::BitmapError;

/// Source of plane memory.
///
/// `allocate` returns a zero-filled buffer of exactly `size` bytes, or `None`
/// if the request can't be satisfied. `None` is reported to the caller as
/// [`BitmapError::AllocationFailed`] and never retried.
pub trait MemoryProvider {
    fn allocate(&self, size: usize) -> Option<Vec<u8>>;

    /// Called once per bitmap with its dimensions and the total plane bytes
    /// it will need, before any buffer is allocated.
    fn reserve(&self, _width: u16, _height: u16, _total: usize) -> Result<(), BitmapError> {
        Ok(())
    }
}

/// Global allocator with fallible reservation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemMemory;

impl MemoryProvider for SystemMemory {
    fn allocate(&self, size: usize) -> Option<Vec<u8>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(size).ok()?;
        buf.resize(size, 0);
        Some(buf)
    }
}

/// Resource limits for bitmap allocation.
///
/// All fields default to `None` (no limit). `Limits` is itself a
/// [`MemoryProvider`] backed by [`SystemMemory`].
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum plane bytes for one bitmap, summed over all planes.
    pub max_memory_bytes: Option<u64>,
}

fn within(what: &str, value: u64, limit: Option<u64>) -> Result<(), BitmapError> {
    match limit {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl MemoryProvider for Limits {
    fn allocate(&self, size: usize) -> Option<Vec<u8>> {
        if self.max_memory_bytes.is_some_and(|max| size as u64 > max) {
            return None;
        }
        SystemMemory.allocate(size)
    }

    /// Refuse the bitmap up front if its dimensions or total plane bytes are
    /// over any configured limit.
    fn reserve(&self, width: u16, height: u16, total: usize) -> Result<(), BitmapError> {
        let (w, h) = (u64::from(width), u64::from(height));
        within("width", w, self.max_width)?;
        within("height", h, self.max_height)?;
        within("pixel count", w * h, self.max_pixels)?;
        within("plane memory", total as u64, self.max_memory_bytes)
    }
}
