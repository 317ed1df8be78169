use derive_more::Display;
use std::error::Error;

/// Why a buffer could not be decoded.
///
/// Offsets are byte offsets into the buffer given to the decoder,
/// pointing at the start of the read that failed.
#[derive(Display, PartialEq, Eq, Clone, Debug)]
pub enum DecodeError {
    #[display(
        fmt = "Insufficient data at offset {}: {} bytes required, {} available.",
        offset,
        required,
        available
    )]
    InsufficientData {
        offset: usize,
        required: u64,
        available: usize,
    },

    /// A varint announced a size that runs past the end of the buffer.
    #[display(
        fmt = "Invalid varint at offset {}: {} bytes announced, {} available.",
        offset,
        size,
        available
    )]
    InvalidLength {
        offset: usize,
        size: usize,
        available: usize,
    },

    #[display(fmt = "Unknown variant tag {} at offset {}.", tag, offset)]
    UnknownTag { offset: usize, tag: u64 },

    /// Only returned by the strict entry points.
    #[display(fmt = "Trailing data: {} of {} bytes consumed.", consumed, len)]
    TrailingData { consumed: usize, len: usize },
}
impl Error for DecodeError {}
