//! Layer 2: Array
//!
//! # Purpose
//!
//! This layer provides the growable typed buffer ([`NumArray`]) together with
//! its cursor traversal protocol and the elementwise surface built directly
//! on top of it (search, in-place editing, arithmetic).
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Stats
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Array ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// The growable typed buffer.
pub mod buffer;

/// Cursor traversal protocol.
pub mod cursor;

/// In-place editing (removal, clamping, pruning).
pub mod edit;

/// Bulk arithmetic and elementwise binary operations.
pub mod ops;

/// Containment and search queries.
pub mod search;

pub use buffer::NumArray;
