//! Element protocol for array contents.
//!
//! ## Purpose
//!
//! This module defines the trait bound every container element must satisfy:
//! a copyable numeric type with a total order over the values actually stored.
//!
//! ## Design notes
//!
//! * **Blanket impl**: Any type satisfying the bounds is an [`Element`];
//!   integers and floats qualify out of the box.
//! * **Float promotion**: Statistics accumulate in `f64` regardless of the
//!   element type, via [`as_f64`].
//!
//! ## Invariants
//!
//! * Comparisons between stored values are assumed to form a total order.
//!   Floating-point arrays containing NaN break selection and ranking
//!   guarantees (the algorithms still terminate, but results are unspecified).

// External dependencies
use num_traits::{Num, NumCast, ToPrimitive};

/// Trait bound for array element types.
///
/// Satisfied by all primitive integer and floating-point types.
pub trait Element: Num + NumCast + PartialOrd + Copy {}

impl<T: Num + NumCast + PartialOrd + Copy> Element for T {}

/// Widen an element to `f64` for accumulation.
///
/// Values that cannot be represented map to NaN.
#[inline]
pub fn as_f64<T: Element>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
