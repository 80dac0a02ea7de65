//! In-place editing: removal, clamping, pruning.
//!
//! ## Purpose
//!
//! This module provides the destructive maintenance operations on a
//! [`NumArray`]: removing elements by value or range, clamping values to a
//! floor or ceiling, and pruning non-finite elements from float arrays.
//!
//! ## Design notes
//!
//! * **Compaction**: Removal operations compact in place and shrink the
//!   logical size; capacity is retained.
//! * **Swapped bounds**: Range-valued removals accept `lo > hi` and swap,
//!   matching the container's forgiving recoverable tier.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::array::NumArray;
use crate::primitives::element::Element;

impl<T: Element> NumArray<T> {
    /// Remove every element equal to `value`.
    pub fn remove_all(&mut self, value: T) {
        self.retain(|v| v != value);
    }

    /// Remove every element inside the inclusive range `[lo, hi]`.
    ///
    /// Swaps the bounds if given in reverse order. Returns the number of
    /// elements removed.
    pub fn remove_all_in(&mut self, lo: T, hi: T) -> usize {
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        let before = self.len();
        self.retain(|v| v < lo || v > hi);
        before - self.len()
    }

    /// Remove every element outside the inclusive range `[lo, hi]`.
    ///
    /// Swaps the bounds if given in reverse order. Returns the counts of
    /// removed elements `(below lo, above hi)`.
    pub fn remove_all_not_in(&mut self, lo: T, hi: T) -> (usize, usize) {
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        let mut below = 0;
        let mut above = 0;
        self.retain(|v| {
            if v < lo {
                below += 1;
                false
            } else if v > hi {
                above += 1;
                false
            } else {
                true
            }
        });
        (below, above)
    }

    /// Clamp every element to at most `ceil`.
    pub fn clamp_ceil(&mut self, ceil: T) {
        for v in self.as_mut_slice().iter_mut() {
            if *v > ceil {
                *v = ceil;
            }
        }
    }

    /// Clamp every element to at least `floor`.
    pub fn clamp_floor(&mut self, floor: T) {
        for v in self.as_mut_slice().iter_mut() {
            if *v < floor {
                *v = floor;
            }
        }
    }

    /// In-place compaction keeping the elements `keep` accepts.
    fn retain(&mut self, mut keep: impl FnMut(T) -> bool) {
        // Manual two-index compaction so the logical size shrinks exactly
        // like a resize, independent of Vec internals.
        let mut write = 0;
        for read in 0..self.len() {
            let value = self[read];
            if keep(value) {
                if read != write {
                    self[write] = value;
                }
                write += 1;
            }
        }
        self.resize(write);
    }
}

impl<T: Element + Float> NumArray<T> {
    /// Remove non-finite elements (NaN, infinities), preserving order.
    pub fn prune(&mut self) {
        self.retain(|v| v.is_finite());
    }
}
