/// Errors from bitmap allocation, `.bm` load/save, and BMP export.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("invalid bitmap dimensions: {width}x{height}x{depth}")]
    InvalidDimensions { width: u16, height: u16, depth: u8 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("interleaved row of {width} pixels x {depth} planes exceeds 65535 bytes")]
    RowTooWide { width: u16, depth: u8 },

    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("file depth {file_depth} exceeds bitmap depth {bitmap_depth}")]
    DepthMismatch { file_depth: u8, bitmap_depth: u8 },

    #[error(
        "{width}x{height} source at ({x}, {y}) does not fit in {dest_width}x{dest_height} destination"
    )]
    OutOfBounds {
        width: u16,
        height: u16,
        x: u16,
        y: u16,
        dest_width: u16,
        dest_height: u16,
    },

    #[error("start x {x} is not 8-pixel aligned")]
    Misaligned { x: u16 },

    #[error("palette too small: need {needed} entries, got {actual}")]
    PaletteTooSmall { needed: usize, actual: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`BitmapError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The memory provider or a configured limit refused the request.
    Allocation,
    /// Missing, unreadable, truncated or malformed file, or a file that
    /// doesn't match the destination bitmap.
    File,
    /// Partial load offset not on an 8-pixel boundary.
    Alignment,
    /// Bad arguments from the caller.
    Usage,
}

impl BitmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailed { .. } | Self::LimitExceeded(_) => ErrorKind::Allocation,
            Self::UnexpectedEof
            | Self::InvalidHeader(_)
            | Self::DepthMismatch { .. }
            | Self::OutOfBounds { .. }
            | Self::Io(_) => ErrorKind::File,
            Self::Misaligned { .. } => ErrorKind::Alignment,
            Self::InvalidDimensions { .. }
            | Self::DimensionsTooLarge { .. }
            | Self::RowTooWide { .. }
            | Self::PaletteTooSmall { .. } => ErrorKind::Usage,
        }
    }
}
