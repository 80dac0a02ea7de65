//! Single-pass reductions.
//!
//! ## Purpose
//!
//! Extrema, moment sums, and variance, each computed in one forward cursor
//! pass over the array.
//!
//! ## Design notes
//!
//! * **f64 accumulation**: The sum family accumulates in `f64` regardless of
//!   the element type, so integer arrays do not overflow their own type.
//! * **Naive variance**: `variance` uses `E[x²] − E[x]²` in a single pass.
//!   The numerical-stability trade-off against Welford's algorithm is
//!   accepted and documented.
//! * **Empty arrays**: The sum/product family (and `variance`) define the
//!   empty result as 0. Extrema require at least one element and panic
//!   otherwise (programmer-error tier).

// Internal dependencies
use crate::array::NumArray;
use crate::primitives::element::{as_f64, Element};

impl<T: Element> NumArray<T> {
    /// Smallest element.
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn min(&self) -> T {
        assert!(!self.is_empty(), "min requires a non-empty array");
        let mut min = self[0];
        let mut cursor = self.cursor_at(1);
        while let Some(value) = cursor.next() {
            if value < min {
                min = value;
            }
        }
        min
    }

    /// Largest element.
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn max(&self) -> T {
        assert!(!self.is_empty(), "max requires a non-empty array");
        let mut max = self[0];
        let mut cursor = self.cursor_at(1);
        while let Some(value) = cursor.next() {
            if value > max {
                max = value;
            }
        }
        max
    }

    /// Index of the first smallest element.
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn argmin(&self) -> usize {
        assert!(!self.is_empty(), "argmin requires a non-empty array");
        let mut best = self[0];
        let mut best_index = 0;
        let mut cursor = self.cursor_at(1);
        let mut index = 1;
        while let Some(value) = cursor.next() {
            if value < best {
                best = value;
                best_index = index;
            }
            index += 1;
        }
        best_index
    }

    /// Index of the first largest element.
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn argmax(&self) -> usize {
        assert!(!self.is_empty(), "argmax requires a non-empty array");
        let mut best = self[0];
        let mut best_index = 0;
        let mut cursor = self.cursor_at(1);
        let mut index = 1;
        while let Some(value) = cursor.next() {
            if value > best {
                best = value;
                best_index = index;
            }
            index += 1;
        }
        best_index
    }

    /// `(min, max)` in a single pass.
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn extrema(&self) -> (T, T) {
        assert!(!self.is_empty(), "extrema requires a non-empty array");
        let mut min = self[0];
        let mut max = min;
        let mut cursor = self.cursor_at(1);
        while let Some(value) = cursor.next() {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        (min, max)
    }

    /// Spread `max − min`.
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn range(&self) -> T {
        let (min, max) = self.extrema();
        max - min
    }

    /// Sum of all elements (0 for an empty array).
    pub fn sum(&self) -> f64 {
        let mut sum = 0.0;
        let mut cursor = self.cursor();
        while let Some(value) = cursor.next() {
            sum += as_f64(value);
        }
        sum
    }

    /// Sum of squared elements (0 for an empty array).
    pub fn sum2(&self) -> f64 {
        let mut sum2 = 0.0;
        let mut cursor = self.cursor();
        while let Some(value) = cursor.next() {
            let value = as_f64(value);
            sum2 += value * value;
        }
        sum2
    }

    /// Product of all elements (0 for an empty array).
    pub fn prod(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let mut prod = 1.0;
        let mut cursor = self.cursor();
        while let Some(value) = cursor.next() {
            prod *= as_f64(value);
        }
        prod
    }

    /// Product of squared elements (0 for an empty array).
    pub fn prod2(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let mut prod2 = 1.0;
        let mut cursor = self.cursor();
        while let Some(value) = cursor.next() {
            let value = as_f64(value);
            prod2 *= value * value;
        }
        prod2
    }

    /// Arithmetic mean.
    ///
    /// # Panics
    ///
    /// Panics on an empty array.
    pub fn mean(&self) -> f64 {
        assert!(!self.is_empty(), "mean requires a non-empty array");
        self.sum() / self.len() as f64
    }

    /// Population variance via `E[x²] − E[x]²` (0 for an empty array).
    ///
    /// Single pass; the stability trade-off against a two-pass or Welford
    /// formulation is accepted.
    pub fn variance(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let mut sum = 0.0;
        let mut sum2 = 0.0;
        let mut cursor = self.cursor();
        while let Some(value) = cursor.next() {
            let value = as_f64(value);
            sum += value;
            sum2 += value * value;
        }

        let n = self.len() as f64;
        let mean = sum / n;
        sum2 / n - mean * mean
    }
}
