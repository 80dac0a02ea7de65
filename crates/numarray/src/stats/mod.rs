//! Layer 4: Stats
//!
//! # Purpose
//!
//! This layer provides single-pass statistics over the array: extrema and
//! their indices, moment sums, variance, and cumulative sums/products. All
//! of it is built on the cursor protocol; nothing here mutates the array.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Stats ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Array
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cumulative sums and products.
pub mod cumulative;

/// Single-pass reductions.
pub mod reductions;
