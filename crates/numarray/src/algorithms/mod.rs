//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the order-statistics selection engine (randomized
//! quickselect) and the index-ranking permutations. It is the only part of
//! the crate with genuine algorithmic content.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Stats
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Array
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sort-by-index permutations.
pub mod ranking;

/// Order-statistics selection (quickselect).
pub mod selection;
