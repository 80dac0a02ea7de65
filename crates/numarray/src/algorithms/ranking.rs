//! Sort-by-index permutations.
//!
//! ## Purpose
//!
//! This module produces the index permutation that would sort an array
//! ascending or descending, without touching the array itself, plus the O(n)
//! permutation inverse used to map results back to the original order.
//!
//! ## Design notes
//!
//! * **Transient pairs**: Sorting works on (value, index) pairs that exist
//!   only for the duration of the call.
//! * **Unstable**: Ties preserve no particular relative order; stability is
//!   not part of the contract.
//!
//! ## Invariants
//!
//! * The returned permutation is a valid permutation of `0..n`.
//! * Gathering by the ascending permutation yields a non-decreasing
//!   sequence; by the descending one, non-increasing.
//! * An empty array yields an empty permutation without error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::{self, Equal};

// Internal dependencies
use crate::array::NumArray;
use crate::primitives::element::Element;

/// Permutation of `0..n` that sorts `vals` ascending.
pub fn sorted_indices_ascending<T: Element>(vals: &[T]) -> Vec<usize> {
    sorted_indices_by(vals, |a, b| a.partial_cmp(b).unwrap_or(Equal))
}

/// Permutation of `0..n` that sorts `vals` descending.
pub fn sorted_indices_descending<T: Element>(vals: &[T]) -> Vec<usize> {
    sorted_indices_by(vals, |a, b| b.partial_cmp(a).unwrap_or(Equal))
}

fn sorted_indices_by<T: Element>(
    vals: &[T],
    compare: impl Fn(&T, &T) -> Ordering,
) -> Vec<usize> {
    let mut pairs: Vec<(T, usize)> = vals.iter().copied().zip(0..).collect();
    pairs.sort_unstable_by(|a, b| compare(&a.0, &b.0));
    pairs.into_iter().map(|(_, index)| index).collect()
}

/// Invert a permutation of `0..n` in O(n).
///
/// If `perm[sorted_pos] = original_pos`, the result maps
/// `original_pos -> sorted_pos`, so gathering by `perm` and then by the
/// inverse reproduces the original order exactly.
pub fn invert_permutation(perm: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; perm.len()];
    for (sorted_pos, &original_pos) in perm.iter().enumerate() {
        inverse[original_pos] = sorted_pos;
    }
    inverse
}

// ============================================================================
// NumArray wrappers
// ============================================================================

impl<T: Element> NumArray<T> {
    /// Permutation of `0..len()` that sorts the array ascending.
    pub fn rank_ascending(&self) -> Vec<usize> {
        sorted_indices_ascending(self.as_slice())
    }

    /// Permutation of `0..len()` that sorts the array descending.
    pub fn rank_descending(&self) -> Vec<usize> {
        sorted_indices_descending(self.as_slice())
    }
}
