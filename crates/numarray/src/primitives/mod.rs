//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the element protocol, error types, and warning-budget
//! policy used throughout the crate. It has zero internal dependencies within
//! the crate.
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
//! Layer 2: Array
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Element protocol for container contents.
pub mod element;

/// Shared error types.
pub mod errors;

/// Range-warning budget policy.
pub mod warnings;
