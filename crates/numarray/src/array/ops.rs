//! Bulk arithmetic and elementwise binary operations.
//!
//! ## Purpose
//!
//! This module provides in-place arithmetic over the whole array (by scalar
//! or by an equal-length array) and the elementwise min/max combination of
//! two arrays.
//!
//! ## Design notes
//!
//! * **Programmer-error tier**: The `*Assign` operator impls assert equal
//!   lengths; operators cannot report recoverable errors. The named
//!   `elementwise_*` methods return `Result` instead.
//! * **Straight iteration**: These are plain elementwise loops with no
//!   algorithmic content; iterators already elide the bounds checks.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

// Internal dependencies
use crate::array::NumArray;
use crate::primitives::element::Element;
use crate::primitives::errors::ArrayError;

// ============================================================================
// Scalar assign operators
// ============================================================================

impl<T: Element> AddAssign<T> for NumArray<T> {
    fn add_assign(&mut self, rhs: T) {
        for v in self.as_mut_slice().iter_mut() {
            *v = *v + rhs;
        }
    }
}

impl<T: Element> SubAssign<T> for NumArray<T> {
    fn sub_assign(&mut self, rhs: T) {
        for v in self.as_mut_slice().iter_mut() {
            *v = *v - rhs;
        }
    }
}

impl<T: Element> MulAssign<T> for NumArray<T> {
    fn mul_assign(&mut self, rhs: T) {
        for v in self.as_mut_slice().iter_mut() {
            *v = *v * rhs;
        }
    }
}

impl<T: Element> DivAssign<T> for NumArray<T> {
    fn div_assign(&mut self, rhs: T) {
        for v in self.as_mut_slice().iter_mut() {
            *v = *v / rhs;
        }
    }
}

// ============================================================================
// Array assign operators
// ============================================================================

/// Assert the operand sizes match (programmer-error tier for operators).
macro_rules! assert_same_len {
    ($lhs:expr, $rhs:expr, $op:literal) => {
        assert!(
            $lhs.len() == $rhs.len(),
            concat!($op, ": arrays not of equal size ({} vs {})"),
            $lhs.len(),
            $rhs.len()
        );
    };
}

impl<T: Element> AddAssign<&NumArray<T>> for NumArray<T> {
    fn add_assign(&mut self, rhs: &NumArray<T>) {
        assert_same_len!(self, rhs, "+=");
        for (v, &r) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *v = *v + r;
        }
    }
}

impl<T: Element> SubAssign<&NumArray<T>> for NumArray<T> {
    fn sub_assign(&mut self, rhs: &NumArray<T>) {
        assert_same_len!(self, rhs, "-=");
        for (v, &r) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *v = *v - r;
        }
    }
}

impl<T: Element> MulAssign<&NumArray<T>> for NumArray<T> {
    fn mul_assign(&mut self, rhs: &NumArray<T>) {
        assert_same_len!(self, rhs, "*=");
        for (v, &r) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *v = *v * r;
        }
    }
}

impl<T: Element> DivAssign<&NumArray<T>> for NumArray<T> {
    fn div_assign(&mut self, rhs: &NumArray<T>) {
        assert_same_len!(self, rhs, "/=");
        for (v, &r) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *v = *v / r;
        }
    }
}

// ============================================================================
// Elementwise binary combinations
// ============================================================================

impl<T: Element> NumArray<T> {
    /// Elementwise minimum of two equal-length arrays.
    pub fn elementwise_min(&self, other: &NumArray<T>) -> Result<NumArray<T>, ArrayError> {
        self.combine(other, |a, b| if b < a { b } else { a })
    }

    /// Elementwise maximum of two equal-length arrays.
    pub fn elementwise_max(&self, other: &NumArray<T>) -> Result<NumArray<T>, ArrayError> {
        self.combine(other, |a, b| if b > a { b } else { a })
    }

    fn combine(
        &self,
        other: &NumArray<T>,
        f: impl Fn(T, T) -> T,
    ) -> Result<NumArray<T>, ArrayError> {
        if self.len() != other.len() {
            return Err(ArrayError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let out: Vec<T> = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(NumArray::from(out))
    }
}
