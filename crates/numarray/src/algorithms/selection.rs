//! Order-statistics selection via randomized quickselect.
//!
//! ## Purpose
//!
//! This module computes the k-th smallest element of an array in expected
//! O(n) time without fully sorting, using randomized quickselect over a
//! Hoare partition. The median convenience functions are built on top of it.
//!
//! ## Design notes
//!
//! * **Destructive by default**: Selection partitions the slice in place;
//!   the element multiset is preserved but the order is not. The pure
//!   wrappers on [`NumArray`] copy first.
//! * **Iterative descent**: Quickselect recurses into exactly one partition,
//!   so the recursion is expressed as a loop and the stack stays O(1) even
//!   on adversarial inputs.
//! * **Randomization**: The pivot is drawn from a process-wide LCG. Results
//!   are rank-deterministic, but the intermediate element order and the
//!   sequence of pivots are not reproducible across runs.
//! * **Lower median**: For even-length arrays the median is the lower of the
//!   two central order statistics, rank `n/2` — not the conventional average
//!   of the two middles. Callers wanting the averaged convention must select
//!   ranks `n/2` and `n/2 + 1` themselves.
//!
//! ## Invariants
//!
//! * Ranks are 1-indexed: `k = 1` is the minimum, `k = n` the maximum.
//! * Partition ranges `[p, r]` are valid by construction; the partition
//!   itself performs no bounds checking beyond the slice's own.
//!
//! ## Non-goals
//!
//! * Worst-case O(n) guarantees (no median-of-medians fallback); the
//!   classical O(n²) worst case of randomized quickselect is accepted.
//! * Reproducible pivot sequences or seedable selection.

// External dependencies
use core::sync::atomic::{AtomicU64, Ordering};

// Internal dependencies
use crate::array::NumArray;
use crate::primitives::element::Element;

// ============================================================================
// Process-wide pivot generator
// ============================================================================

/// Shared LCG state for pivot selection.
static PIVOT_STATE: AtomicU64 = AtomicU64::new(0x93c4_67e3_7db0_c7a4);

/// Advance the process-wide LCG and return 32 uniform bits.
#[inline]
fn next_u32() -> u32 {
    let mut state = PIVOT_STATE.load(Ordering::Relaxed);
    loop {
        let next = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        match PIVOT_STATE.compare_exchange_weak(state, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return (next >> 32) as u32,
            Err(actual) => state = actual,
        }
    }
}

/// Uniform index in the inclusive range `[lo, hi]`.
#[inline]
fn random_index(lo: usize, hi: usize) -> usize {
    lo + next_u32() as usize % (hi - lo + 1)
}

// ============================================================================
// Selection
// ============================================================================

/// Select the k-th smallest element (1-indexed), partitioning `vals` in
/// place.
///
/// The element multiset is unchanged, but the order is not preserved.
///
/// # Panics
///
/// Panics if `vals` is empty or `k` is outside `1..=vals.len()`
/// (programmer-error tier; callers must validate first).
pub fn select_destructive<T: Element>(vals: &mut [T], k: usize) -> T {
    let n = vals.len();
    assert!(n >= 1, "select requires a non-empty array");
    assert!(
        (1..=n).contains(&k),
        "select rank {k} out of range 1..={n}"
    );

    let mut p = 0;
    let mut r = n - 1;
    let mut rank = k;
    loop {
        // A single-element range must hold the sought order statistic.
        if p == r {
            return vals[p];
        }

        // Partition [p, r] so that vals[p..=q] <= vals[q+1..=r]. The sought
        // statistic is either the rank-th of the lower partition or the
        // (rank - k_lower)-th of the upper one.
        let q = randomized_partition(vals, p, r);
        let k_lower = q - p + 1;
        if rank <= k_lower {
            r = q;
        } else {
            p = q + 1;
            rank -= k_lower;
        }
    }
}

/// Swap a uniformly random element of `[p, r]` into the pivot slot, then
/// partition.
fn randomized_partition<T: Element>(vals: &mut [T], p: usize, r: usize) -> usize {
    let i = random_index(p, r);
    vals.swap(p, i);
    partition(vals, p, r)
}

/// Hoare partition of `[p, r]` around the pivot value at `p`.
///
/// Scans inward from both ends, swapping crossing pairs, and returns the
/// split index `q` such that every element of `[p, q]` is `<=` every element
/// of `[q+1, r]`.
fn partition<T: Element>(vals: &mut [T], p: usize, r: usize) -> usize {
    let pivot = vals[p];
    let mut i = p;
    let mut j = r;
    loop {
        while vals[j] > pivot {
            j -= 1;
        }
        while vals[i] < pivot {
            i += 1;
        }
        if i < j {
            vals.swap(i, j);
            i += 1;
            j -= 1;
        } else {
            return j;
        }
    }
}

// ============================================================================
// NumArray wrappers
// ============================================================================

impl<T: Element> NumArray<T> {
    /// The k-th smallest element (1-indexed), reordering the array as a side
    /// effect.
    ///
    /// # Panics
    ///
    /// Panics on an empty array or a rank outside `1..=len()`.
    pub fn select_destructive(&mut self, k: usize) -> T {
        select_destructive(self.as_mut_slice(), k)
    }

    /// The k-th smallest element (1-indexed), leaving the array untouched.
    ///
    /// Selects on a private copy of the contents.
    ///
    /// # Panics
    ///
    /// Panics on an empty array or a rank outside `1..=len()`.
    pub fn select(&self, k: usize) -> T {
        let mut scratch = self.as_slice().to_vec();
        select_destructive(&mut scratch, k)
    }

    /// The median, reordering the array as a side effect.
    ///
    /// Even-length arrays yield the lower of the two central order
    /// statistics (rank `n/2`), not their average.
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn median_destructive(&mut self) -> T {
        let n = self.len();
        assert!(n >= 1, "median requires a non-empty array");
        let rank = if n % 2 == 1 { (n + 1) / 2 } else { n / 2 };
        self.select_destructive(rank)
    }

    /// The median, leaving the array untouched.
    ///
    /// Same lower-median convention as [`NumArray::median_destructive`].
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn median(&self) -> T {
        let mut scratch = NumArray::from_slice(self.as_slice());
        scratch.median_destructive()
    }
}
