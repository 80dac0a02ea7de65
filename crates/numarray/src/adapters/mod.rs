//! Layer 5: Adapters
//!
//! # Purpose
//!
//! Stream codecs that move array contents through `std::io` readers and
//! writers: whitespace-separated ASCII and raw-byte binary. Both consume the
//! container strictly through its public surface (cursor, raw storage
//! handle, resize) and follow the recoverable error tier for range
//! arguments: oversized ranges are clamped and note a warning against the
//! array's budget.
//!
//! This layer requires the `std` feature.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Whitespace-separated ASCII codec.
pub mod ascii;

/// Raw-byte binary codec.
pub mod binary;

// ============================================================================
// Codec Error Type
// ============================================================================

/// Error type for stream codecs.
#[derive(Debug)]
pub enum CodecError {
    /// Underlying stream failure.
    Io(io::Error),

    /// Token could not be parsed as an element.
    Parse(String),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Stream error: {err}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(_) => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Clamp a save range against the array size, noting budget warnings.
///
/// Returns the element count to write, or `None` when `start` is unusable.
/// `n = 0` means "to the end of the array".
pub(crate) fn clamp_save_range(
    len: usize,
    start: usize,
    n: usize,
    warnings: &crate::primitives::warnings::RangeWarnings,
) -> Option<usize> {
    if start >= len {
        // Saving from past the end writes nothing; only warn when the array
        // actually has contents (an empty save is not a misuse).
        if len > 0 {
            warnings.note();
        }
        return None;
    }
    if n == 0 {
        return Some(len - start);
    }
    if start + n > len {
        warnings.note();
        return Some(len - start);
    }
    Some(n)
}
