//! Cumulative sums and products.
//!
//! Single forward cursor pass; results are widened to `f64` so integer
//! arrays do not overflow their own element type. An empty array yields an
//! empty result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::array::NumArray;
use crate::primitives::element::{as_f64, Element};

impl<T: Element> NumArray<T> {
    /// Running sum: `out[i] = sum(self[0..=i])`.
    pub fn cum_sum(&self) -> NumArray<f64> {
        let mut out = Vec::with_capacity(self.len());
        let mut acc = 0.0;
        let mut cursor = self.cursor();
        while let Some(value) = cursor.next() {
            acc += as_f64(value);
            out.push(acc);
        }
        NumArray::from(out)
    }

    /// Running product: `out[i] = prod(self[0..=i])`.
    pub fn cum_prod(&self) -> NumArray<f64> {
        let mut out = Vec::with_capacity(self.len());
        let mut acc = 1.0;
        let mut cursor = self.cursor();
        while let Some(value) = cursor.next() {
            acc *= as_f64(value);
            out.push(acc);
        }
        NumArray::from(out)
    }
}
