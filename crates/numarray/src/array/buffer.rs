//! The growable typed buffer.
//!
//! ## Purpose
//!
//! This module defines [`NumArray`], a single-owner contiguous buffer of
//! numeric elements with a logical size, range-checked element access, and
//! explicit resizing. Every other operation in the crate (selection,
//! statistics, codecs) is built on the surface defined here.
//!
//! ## Design notes
//!
//! * **Single owner**: The array exclusively owns its storage; no other
//!   entity holds a second reference into it.
//! * **Lazy shrinking**: `resize` truncates the logical size but never
//!   eagerly releases excess capacity.
//! * **Zero-fill on growth**: Newly exposed elements are `T::zero()`. This
//!   is a documented guarantee, not an accident of the allocator.
//! * **Raw access**: `as_slice`/`as_mut_slice` expose the contiguous storage
//!   for bulk copies by the codec adapters. Slices are invalidated by a
//!   subsequent `resize`, which the borrow checker enforces for free.
//!
//! ## Invariants
//!
//! * All indices accepted by `get`/`set` satisfy `index < len()`;
//!   out-of-range access is a reported [`ArrayError`], never undefined.
//! * The warning budget is per-instance and survives clones.
//!
//! ## Non-goals
//!
//! * Thread safety. Concurrent mutation must be serialized by the caller.
//! * Shared ownership or views; sub-array extraction copies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::array::cursor::Cursor;
use crate::primitives::element::Element;
use crate::primitives::errors::ArrayError;
use crate::primitives::warnings::RangeWarnings;

// ============================================================================
// NumArray
// ============================================================================

/// Growable, contiguous array of numeric elements.
#[derive(Debug, Clone)]
pub struct NumArray<T> {
    /// Element storage; `data.len()` is the logical size.
    data: Vec<T>,

    /// Per-instance range-warning budget.
    warnings: RangeWarnings,
}

impl<T> Default for NumArray<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            warnings: RangeWarnings::default(),
        }
    }
}

impl<T> From<Vec<T>> for NumArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            data,
            warnings: RangeWarnings::default(),
        }
    }
}

/// Equality compares size and contents only, not warning state.
impl<T: PartialEq> PartialEq for NumArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Element> NumArray<T> {
    /// Create an array of `n` zero-valued elements.
    pub fn new(n: usize) -> Self {
        Self::from(vec![T::zero(); n])
    }

    /// Create an array by copying a slice.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::from(slice.to_vec())
    }

    /// Logical size (count of valid elements).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Range-checked element read.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, ArrayError> {
        self.data
            .get(index)
            .copied()
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Range-checked element write.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ArrayError::IndexOutOfRange { index, len }),
        }
    }

    /// Grow or shrink the logical size.
    ///
    /// Growth zero-fills the newly exposed elements; shrinking truncates
    /// without releasing capacity.
    pub fn resize(&mut self, new_size: usize) {
        self.data.resize(new_size, T::zero());
    }

    /// Append a single element, growing the array by one.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Contiguous storage handle (read-only).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Contiguous storage handle (mutable).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the array, yielding its storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ========================================================================
    // Cursor protocol
    // ========================================================================

    /// Cursor positioned at the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.data, 0)
    }

    /// Cursor positioned at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start > len()` (programmer-error tier).
    pub fn cursor_at(&self, start: usize) -> Cursor<'_, T> {
        assert!(
            start <= self.data.len(),
            "cursor_at: start {start} past array of size {}",
            self.data.len()
        );
        Cursor::new(&self.data, start)
    }

    // ========================================================================
    // Warning budget
    // ========================================================================

    /// The range-warning budget attached to this array.
    pub fn warnings(&self) -> &RangeWarnings {
        &self.warnings
    }

    /// Re-arm the range-warning budget with a fresh allowance.
    pub fn set_warning_budget(&mut self, budget: usize) {
        self.warnings = RangeWarnings::new(budget);
    }

    // ========================================================================
    // Sub-array extraction (clamped, warning-budgeted)
    // ========================================================================

    /// Copy of the first `n` elements.
    ///
    /// Oversized requests are clamped to the array size and note a warning.
    pub fn head(&self, n: usize) -> NumArray<T> {
        let mut n = n;
        if n > self.data.len() {
            self.warnings.note();
            n = self.data.len();
        }
        NumArray::from_slice(&self.data[..n])
    }

    /// Copy of the inclusive sub-range `[start, end]`.
    ///
    /// Inverted ranges or a `start` past the end yield an empty array; an
    /// `end` past the last element is clamped. All three cases note a
    /// warning.
    pub fn subrange(&self, start: usize, end: usize) -> NumArray<T> {
        let len = self.data.len();
        if end < start || start >= len {
            self.warnings.note();
            return NumArray::default();
        }
        let mut end = end;
        if end >= len {
            self.warnings.note();
            end = len - 1;
        }
        NumArray::from_slice(&self.data[start..=end])
    }

    /// Copy elements by index.
    ///
    /// Out-of-range indices are skipped (each noting a warning), so the
    /// result may be shorter than `indices`.
    pub fn gather(&self, indices: &[usize]) -> NumArray<T> {
        let mut out = Vec::with_capacity(indices.len());
        for &index in indices {
            match self.data.get(index) {
                Some(&value) => out.push(value),
                None => {
                    self.warnings.note();
                }
            }
        }
        NumArray::from(out)
    }

    // ========================================================================
    // Elementwise construction
    // ========================================================================

    /// New array with `f` applied to every element.
    pub fn map(&self, f: impl Fn(T) -> T) -> NumArray<T> {
        NumArray::from(self.data.iter().map(|&v| f(v)).collect::<Vec<T>>())
    }

    /// New array of absolute values.
    pub fn abs(&self) -> NumArray<T> {
        self.map(|v| if v < T::zero() { T::zero() - v } else { v })
    }

    /// New array of squared values.
    pub fn sqr(&self) -> NumArray<T> {
        self.map(|v| v * v)
    }
}

// ============================================================================
// Unchecked indexing (internal hot paths, tests)
// ============================================================================

impl<T> core::ops::Index<usize> for NumArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> core::ops::IndexMut<usize> for NumArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}
