//! Error types for array operations.
//!
//! ## Purpose
//!
//! This module defines the recoverable error conditions reported by the
//! container: out-of-range element access, invalid sub-ranges, and mismatched
//! lengths in elementwise binary operations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values alongside the array
//!   size, so call sites can diagnose without re-querying the container.
//! * **Two tiers**: Only the recoverable tier lives here. Programmer errors
//!   (order statistics on an empty array, cursor creation past the end)
//!   panic at the call site instead.
//! * **No-std**: The enum is plain data; `std::error::Error` is implemented
//!   only when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for recoverable array operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// Element index is at or past the logical size.
    IndexOutOfRange {
        /// The index requested.
        index: usize,
        /// Logical size of the array.
        len: usize,
    },

    /// Inclusive sub-range is inverted or leaves the array.
    InvalidRange {
        /// Start index (inclusive).
        start: usize,
        /// End index (inclusive).
        end: usize,
        /// Logical size of the array.
        len: usize,
    },

    /// Elementwise binary operation over arrays of unequal size.
    LengthMismatch {
        /// Size of the left-hand array.
        left: usize,
        /// Size of the right-hand array.
        right: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for array of size {len}")
            }
            Self::InvalidRange { start, end, len } => {
                write!(
                    f,
                    "Invalid range [{start}, {end}] for array of size {len}"
                )
            }
            Self::LengthMismatch { left, right } => {
                write!(f, "Length mismatch: left has {left} elements, right has {right}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ArrayError {}
