//! Whitespace-separated ASCII codec.
//!
//! ## Purpose
//!
//! Saves array contents as space-separated decimal tokens and loads them
//! back, traversing the array through the cursor protocol.
//!
//! ## Design notes
//!
//! * **Range convention**: `n = 0` means "to the end" on save and "the
//!   current size" on load; a save range past the end is truncated with a
//!   budget warning.
//! * **Load grows the array**: `load_ascii` resizes to `start + n` before
//!   parsing, so data can be appended at an offset.

use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

// Internal dependencies
use crate::adapters::{clamp_save_range, CodecError};
use crate::array::NumArray;
use crate::primitives::element::Element;

/// Write `n` elements starting at `start` as space-separated tokens.
///
/// `n = 0` writes through the end of the array. A `start` at or past the end
/// of a non-empty array writes nothing; an oversized `n` is truncated. Both
/// cases note a warning against the array's budget.
pub fn save_ascii<T, W>(
    array: &NumArray<T>,
    writer: &mut W,
    start: usize,
    n: usize,
) -> Result<(), CodecError>
where
    T: Element + Display,
    W: Write,
{
    let count = match clamp_save_range(array.len(), start, n, array.warnings()) {
        Some(count) => count,
        None => return Ok(()),
    };

    let mut cursor = array.cursor_at(start);
    for left in (1..=count).rev() {
        if let Some(value) = cursor.next() {
            write!(writer, "{value}")?;
            if left > 1 {
                write!(writer, " ")?;
            }
        }
    }

    Ok(())
}

/// Read `n` whitespace-separated tokens into the array starting at `start`.
///
/// `n = 0` reads as many elements as the array currently holds. The array is
/// resized to `start + n` before parsing, zero-filling any gap.
pub fn load_ascii<T, R>(
    array: &mut NumArray<T>,
    reader: &mut R,
    start: usize,
    n: usize,
) -> Result<(), CodecError>
where
    T: Element + FromStr,
    R: Read,
{
    let count = if n == 0 { array.len() } else { n };
    array.resize(start + count);

    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let slice = array.as_mut_slice();
    for i in 0..count {
        let token = tokens.next().ok_or_else(|| {
            CodecError::Parse(format!("expected {count} values, stream ended after {i}"))
        })?;
        slice[start + i] = token
            .parse::<T>()
            .map_err(|_| CodecError::Parse(format!("invalid token '{token}' at position {i}")))?;
    }

    Ok(())
}
