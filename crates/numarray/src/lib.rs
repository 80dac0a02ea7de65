//! # numarray — growable typed numeric arrays for Rust
//!
//! A generic, resizable numeric array container intended as the foundation of
//! scientific and image-processing pipelines. The crate provides range-checked
//! element access, a cursor traversal protocol, bulk arithmetic, single-pass
//! statistics, order-statistics selection (randomized quickselect), index
//! ranking, and ASCII/binary stream codecs.
//!
//! ## Quick Start
//!
//! ```rust
//! use numarray::prelude::*;
//!
//! let a = NumArray::from(vec![5.0, 3.0, 8.0, 1.0, 9.0, 2.0]);
//!
//! // Order statistics (1-indexed ranks; select(1) is the minimum).
//! assert_eq!(a.select(1), 1.0);
//! assert_eq!(a.select(6), 9.0);
//!
//! // Lower median for even-length arrays (no averaging).
//! assert_eq!(a.median(), 3.0);
//!
//! // Index permutation that sorts the array ascending.
//! let order = a.rank_ascending();
//! let sorted = a.gather(&order);
//! assert_eq!(sorted.as_slice(), &[1.0, 2.0, 3.0, 5.0, 8.0, 9.0]);
//! ```
//!
//! ## Destructive vs. pure selection
//!
//! The selection engine works in place: [`NumArray::select_destructive`] and
//! [`NumArray::median_destructive`] reorder the underlying storage as a side
//! effect. The pure variants ([`NumArray::select`], [`NumArray::median`])
//! operate on a private copy and leave the array untouched.
//!
//! ## Error tiers
//!
//! * **Recoverable/reported**: out-of-range indices to `get`/`set` return
//!   [`ArrayError`]; oversized ranges passed to bulk operations (codecs,
//!   containment queries, sub-array extraction) are clamped, and a bounded
//!   per-array warning budget records the violation.
//! * **Programmer error**: order-statistics queries (`select`, `median`,
//!   `min`, `max`) on an empty array panic. Callers must check `len()` first.
//!
//! ## `no_std` support
//!
//! The container, selection engine, and statistics work without the standard
//! library (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! numarray = { version = "0.1", default-features = false }
//! ```
//!
//! The `adapters` layer (stream codecs) requires `std`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - element protocol, errors, warning budget.
pub mod primitives;

// Layer 2: Array - the growable typed buffer and its cursor protocol.
pub mod array;

// Layer 3: Algorithms - order-statistics selection and index ranking.
pub mod algorithms;

// Layer 4: Stats - single-pass reductions and cumulative statistics.
pub mod stats;

// Layer 5: Adapters - ASCII/binary stream codecs.
#[cfg(feature = "std")]
pub mod adapters;

// Standard numarray prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::adapters::{
        ascii::{load_ascii, save_ascii},
        binary::{load_binary, save_binary},
        CodecError,
    };
    pub use crate::algorithms::ranking::{
        invert_permutation, sorted_indices_ascending, sorted_indices_descending,
    };
    pub use crate::algorithms::selection::select_destructive;
    pub use crate::array::cursor::Cursor;
    pub use crate::array::search::ScanDirection;
    pub use crate::array::NumArray;
    pub use crate::primitives::element::Element;
    pub use crate::primitives::errors::ArrayError;
    pub use crate::primitives::warnings::RangeWarnings;
}
