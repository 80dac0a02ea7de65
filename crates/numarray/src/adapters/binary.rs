//! Raw-byte binary codec.
//!
//! ## Purpose
//!
//! Saves and loads array contents as their in-memory byte representation
//! through the raw storage handle. Elements must be plain-old-data
//! (`bytemuck::Pod`), which every primitive numeric type is.
//!
//! ## Design notes
//!
//! * **Byte layout**: Elements are written exactly as stored (native
//!   endianness); the format is only portable between homogeneous hosts.
//! * **Range convention**: Identical clamping and warning policy to the
//!   ASCII codec.

use std::io::{Read, Write};

// External dependencies
use bytemuck::Pod;

// Internal dependencies
use crate::adapters::{clamp_save_range, CodecError};
use crate::array::NumArray;
use crate::primitives::element::Element;

/// Write `n` elements starting at `start` as raw bytes.
///
/// `n = 0` writes through the end of the array; oversized ranges are clamped
/// with a budget warning.
pub fn save_binary<T, W>(
    array: &NumArray<T>,
    writer: &mut W,
    start: usize,
    n: usize,
) -> Result<(), CodecError>
where
    T: Element + Pod,
    W: Write,
{
    let count = match clamp_save_range(array.len(), start, n, array.warnings()) {
        Some(count) => count,
        None => return Ok(()),
    };

    let bytes = bytemuck::cast_slice(&array.as_slice()[start..start + count]);
    writer.write_all(bytes)?;

    Ok(())
}

/// Read `n` elements' worth of raw bytes into the array starting at `start`.
///
/// `n = 0` reads as many elements as the array currently holds. The array is
/// resized to `start + n` before reading, zero-filling any gap.
pub fn load_binary<T, R>(
    array: &mut NumArray<T>,
    reader: &mut R,
    start: usize,
    n: usize,
) -> Result<(), CodecError>
where
    T: Element + Pod,
    R: Read,
{
    let count = if n == 0 { array.len() } else { n };
    array.resize(start + count);

    if count > 0 {
        let bytes = bytemuck::cast_slice_mut(&mut array.as_mut_slice()[start..start + count]);
        reader.read_exact(bytes)?;
    }

    Ok(())
}
