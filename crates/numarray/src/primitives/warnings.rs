//! Range-warning budget for clamped bulk operations.
//!
//! ## Purpose
//!
//! Bulk operations that receive an oversized or partially invalid range
//! (codec save ranges, index gathers, containment queries) clamp the request
//! and keep going. To surface the misuse without flooding diagnostics, each
//! array carries a bounded warning budget: the first violations are counted
//! as emitted, and once the budget is exhausted further violations are
//! silently clamped (still counted, as suppressed).
//!
//! ## Design notes
//!
//! * **Injectable**: The budget is a per-array policy object rather than a
//!   process-wide static, so tests and long-lived pipelines stay isolated.
//! * **Interior mutability**: `note` takes `&self`; read-only bulk operations
//!   can record violations without requiring a mutable container borrow.
//!
//! ## Invariants
//!
//! * `emitted() + remaining() == budget` at all times.
//! * `note` never panics and never blocks.
//!
//! ## Non-goals
//!
//! * No logging or printing; callers inspect the counters if they care.
//! * Not thread-safe, like the container it belongs to.

// External dependencies
use core::cell::Cell;

/// Default number of range warnings emitted before silent clamping.
pub const DEFAULT_WARNING_BUDGET: usize = 25;

// ============================================================================
// Warning Budget
// ============================================================================

/// Bounded counter for range-violation warnings.
#[derive(Debug, Clone)]
pub struct RangeWarnings {
    /// Total budget this policy was armed with.
    budget: usize,

    /// Warnings still available for emission.
    remaining: Cell<usize>,

    /// Violations recorded after the budget ran out.
    suppressed: Cell<usize>,
}

impl Default for RangeWarnings {
    fn default() -> Self {
        Self::new(DEFAULT_WARNING_BUDGET)
    }
}

impl RangeWarnings {
    /// Create a policy with the given warning budget.
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            remaining: Cell::new(budget),
            suppressed: Cell::new(0),
        }
    }

    /// Record a range violation.
    ///
    /// Returns `true` while the budget lasts (the warning counts as emitted)
    /// and `false` once it is exhausted (the violation is silently clamped).
    pub fn note(&self) -> bool {
        let left = self.remaining.get();
        if left > 0 {
            self.remaining.set(left - 1);
            true
        } else {
            self.suppressed.set(self.suppressed.get() + 1);
            false
        }
    }

    /// Warnings emitted so far.
    pub fn emitted(&self) -> usize {
        self.budget - self.remaining.get()
    }

    /// Warnings still available before silent clamping begins.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    /// Violations recorded after the budget ran out.
    pub fn suppressed(&self) -> usize {
        self.suppressed.get()
    }
}
