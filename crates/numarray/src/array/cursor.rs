//! Cursor traversal protocol.
//!
//! ## Purpose
//!
//! This module defines [`Cursor`], a stateful position pointer supporting
//! sequential forward and backward traversal without index arithmetic at
//! each call site. Single-pass statistics and the ASCII codec consume the
//! array through cursors.
//!
//! ## Design notes
//!
//! * **No raw addresses**: The cursor borrows the storage slice; nothing
//!   pointer-shaped leaves the array layer.
//! * **Bounds by construction**: Stepping past either end yields `None`
//!   instead of undefined behavior.
//!
//! ## Invariants
//!
//! * `0 <= position() <= len` at all times.
//! * `next` yields the element at `position()` then advances; `prev`
//!   retreats then yields the element at the new position.

/// Stateful forward/backward cursor over an array's storage.
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> Cursor<'a, T> {
    pub(crate) fn new(data: &'a [T], start: usize) -> Self {
        debug_assert!(start <= data.len(), "cursor start past end of storage");
        Self { data, pos: start }
    }

    /// Move the cursor to `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the end of the underlying storage.
    pub fn reset(&mut self, start: usize) {
        assert!(
            start <= self.data.len(),
            "reset: start {start} past storage of size {}",
            self.data.len()
        );
        self.pos = start;
    }

    /// Yield the element under the cursor, then advance.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        let value = self.data.get(self.pos).copied();
        if value.is_some() {
            self.pos += 1;
        }
        value
    }

    /// Retreat, then yield the element under the cursor.
    pub fn prev(&mut self) -> Option<T> {
        if self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        Some(self.data[self.pos])
    }

    /// Current position in `[0, len]`.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Elements left ahead of the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
