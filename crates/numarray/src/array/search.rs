//! Containment and search queries.
//!
//! ## Purpose
//!
//! This module provides value-containment checks, occurrence counting, and
//! index lookup over a [`NumArray`]. Range-scoped variants follow the
//! recoverable error tier: invalid ranges are clamped (or answered with the
//! "not found" default) and note a warning against the array's budget,
//! never panicking.
//!
//! ## Non-goals
//!
//! * No ordering assumptions; every query is a linear scan.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::array::NumArray;
use crate::primitives::element::Element;

/// Scan direction for [`NumArray::index_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Scan from `start` towards the end of the array.
    Forward,
    /// Scan from `start` towards the beginning of the array.
    Backward,
}

impl<T: Element> NumArray<T> {
    /// Whether any element equals `value`.
    pub fn contains(&self, value: T) -> bool {
        self.as_slice().iter().any(|&v| v == value)
    }

    /// Whether any element of the inclusive range `[start, end]` equals
    /// `value`.
    ///
    /// An inverted or out-of-bounds range notes a warning and answers
    /// `false`.
    pub fn contains_in(&self, value: T, start: usize, end: usize) -> bool {
        match self.checked_range(start, end) {
            Some((start, end)) => self.as_slice()[start..=end].iter().any(|&v| v == value),
            None => false,
        }
    }

    /// Whether every element equals `value`.
    ///
    /// Vacuously true for an empty array.
    pub fn contains_only(&self, value: T) -> bool {
        self.as_slice().iter().all(|&v| v == value)
    }

    /// Whether every element of the inclusive range `[start, end]` equals
    /// `value`.
    ///
    /// An inverted or out-of-bounds range notes a warning and answers
    /// `false`.
    pub fn contains_only_in(&self, value: T, start: usize, end: usize) -> bool {
        match self.checked_range(start, end) {
            Some((start, end)) => self.as_slice()[start..=end].iter().all(|&v| v == value),
            None => false,
        }
    }

    /// Count occurrences of `value` in the inclusive range `[start, end]`.
    ///
    /// An `end` past the last element is clamped (noting a warning);
    /// `start > end` after clamping counts nothing.
    pub fn occurrences_of(&self, value: T, start: usize, end: usize) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut end = end;
        if end > self.len() - 1 {
            self.warnings().note();
            end = self.len() - 1;
        }
        if start > end {
            self.warnings().note();
            return 0;
        }

        let mut count = 0;
        let mut cursor = self.cursor_at(start);
        for _ in start..=end {
            if cursor.next() == Some(value) {
                count += 1;
            }
        }
        count
    }

    /// Index of the first occurrence of `value`, scanning from `start` in
    /// the given direction.
    ///
    /// Returns `None` when the value is absent or `start` is past the end.
    pub fn index_of(&self, value: T, dir: ScanDirection, start: usize) -> Option<usize> {
        if start >= self.len() {
            return None;
        }
        match dir {
            ScanDirection::Forward => {
                let mut cursor = self.cursor_at(start);
                let mut index = start;
                while let Some(v) = cursor.next() {
                    if v == value {
                        return Some(index);
                    }
                    index += 1;
                }
                None
            }
            ScanDirection::Backward => {
                // Examine start, start-1, ..., 0.
                let mut cursor = self.cursor_at(start + 1);
                while let Some(v) = cursor.prev() {
                    if v == value {
                        return Some(cursor.position());
                    }
                }
                None
            }
        }
    }

    /// Indices of every occurrence of `value`, in ascending order.
    pub fn indices_of(&self, value: T) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut cursor = self.cursor();
        let mut index = 0;
        while let Some(v) = cursor.next() {
            if v == value {
                indices.push(index);
            }
            index += 1;
        }
        indices
    }

    /// Values present in both arrays, deduplicated, in order of first
    /// appearance in `self`.
    pub fn common(&self, other: &NumArray<T>) -> NumArray<T> {
        let mut shared = NumArray::default();
        for &value in self.as_slice() {
            if other.contains(value) && !shared.contains(value) {
                shared.push(value);
            }
        }
        shared
    }

    /// Validate an inclusive range, noting a warning when it is unusable.
    fn checked_range(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        if end < start || end >= self.len() || start >= self.len() {
            self.warnings().note();
            return None;
        }
        Some((start, end))
    }
}
