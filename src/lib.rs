//! # zenplanar
//!
//! Planar (bitplane) bitmaps for bitplane display hardware.
//!
//! A bitmap of depth `d` stores each pixel's palette index as `d` bits spread
//! over `d` bitplanes, plane 0 holding the least significant bit. Planes are
//! kept either as separate buffers or interleaved, where all planes of one
//! row sit next to each other in a single region.
//!
//! ## Features
//!
//! - Allocation with injectable memory providers and [`Limits`]
//! - Layout-independent geometry ([`byte_width`]) and layout detection
//!   ([`is_interleaved`])
//! - Native `.bm` load, partial load into a larger bitmap, and save
//! - Export to 8-bit palettized BMP for inspection in any image viewer
//!
//! ## Representations
//!
//! Everything is generic over [`PlanarBitmap`]. [`FallbackBitmap`] is the
//! library's own structure; [`HostBitMap`] mirrors the host OS bitmap
//! structure. [`Bitmap`] names whichever one the `host-bitmap` feature
//! selects.
//!
//! ## Usage
//!
//! ```no_run
//! use zenplanar::{Bitmap, BitmapFlags, Palette, PlanarBitmap};
//!
//! let mut bitmap = zenplanar::create(320, 256, 5, BitmapFlags::CLEAR | BitmapFlags::INTERLEAVED)?;
//! bitmap.set_pixel(10, 20, 17);
//! zenplanar::save(&bitmap, "title.bm")?;
//!
//! let mut atlas = zenplanar::create(64, 64, 5, BitmapFlags::CLEAR)?;
//! zenplanar::load(&mut atlas, "tile.bm", 32, 0)?;
//!
//! let copy: Bitmap = zenplanar::load_create("title.bm")?;
//! zenplanar::dump(&copy);
//! zenplanar::export_bmp(&copy, &Palette::grayscale(5), "title.bmp")?;
//! zenplanar::destroy(copy);
//! # Ok::<(), zenplanar::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod dump;
mod error;
mod flags;
mod geometry;
mod layout;
mod limits;
mod palette;
mod planes;

pub mod bm;
pub mod bmp;

// Re-exports
pub use bitmap::{Bitmap, FallbackBitmap, HostBitMap, PlanarBitmap, create, create_in, destroy};
pub use bm::{BmHeader, decode_bm, decode_bm_in, decode_bm_into, encode_bm, load, load_create, save};
pub use bmp::{encode_bmp, export_bmp, to_chunky};
#[cfg(feature = "imgref")]
pub use bmp::to_chunky_img;
pub use dump::{DUMP_TARGET, dump};
pub use error::{BitmapError, ErrorKind};
pub use flags::{BitmapFlags, FlagTable};
pub use geometry::{byte_width, byte_width_for, plane_size, row_stride, total_size};
pub use layout::is_interleaved;
pub use limits::{Limits, MemoryProvider, SystemMemory};
pub use palette::Palette;
pub use planes::{MAX_PLANES, PlaneSlot, Planes};
pub use rgb::RGB8;
