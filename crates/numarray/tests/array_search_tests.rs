//! Tests for containment and search queries.
//!
//! ## Test Organization
//!
//! 1. **Containment** - contains/contains_only, range-scoped variants
//! 2. **Counting and Lookup** - occurrences_of, index_of, indices_of
//! 3. **Set Intersection** - common

use numarray::prelude::*;

// ============================================================================
// Containment Tests
// ============================================================================

/// Test whole-array containment.
#[test]
fn test_contains() {
    let a = NumArray::from(vec![1, 5, 9]);

    assert!(a.contains(5));
    assert!(!a.contains(4));
    assert!(!NumArray::<i32>::default().contains(0));
}

/// Test range-scoped containment with valid ranges.
#[test]
fn test_contains_in_range() {
    let a = NumArray::from(vec![1, 5, 9, 5, 2]);

    assert!(a.contains_in(5, 0, 1));
    assert!(!a.contains_in(5, 2, 2));
    assert!(a.contains_in(5, 2, 4));
}

/// Test that an invalid range answers "not found" and notes a warning.
#[test]
fn test_contains_in_invalid_range() {
    let a = NumArray::from(vec![1, 5, 9]);

    assert!(!a.contains_in(5, 2, 1)); // inverted
    assert!(!a.contains_in(5, 0, 3)); // end past the last element
    assert_eq!(a.warnings().emitted(), 2);
}

/// Test contains_only on uniform, mixed, and empty arrays.
#[test]
fn test_contains_only() {
    assert!(NumArray::from(vec![7, 7, 7]).contains_only(7));
    assert!(!NumArray::from(vec![7, 8, 7]).contains_only(7));
    // Vacuously true.
    assert!(NumArray::<i32>::default().contains_only(7));
}

/// Test range-scoped contains_only.
#[test]
fn test_contains_only_in() {
    let a = NumArray::from(vec![3, 7, 7, 7, 1]);

    assert!(a.contains_only_in(7, 1, 3));
    assert!(!a.contains_only_in(7, 0, 3));
    // Invalid range answers false with a warning.
    assert!(!a.contains_only_in(7, 3, 1));
    assert_eq!(a.warnings().emitted(), 1);
}

// ============================================================================
// Counting and Lookup Tests
// ============================================================================

/// Test occurrence counting, including end clamping.
#[test]
fn test_occurrences_of() {
    let a = NumArray::from(vec![2, 5, 2, 2, 8]);

    assert_eq!(a.occurrences_of(2, 0, 4), 3);
    assert_eq!(a.occurrences_of(2, 1, 3), 2);

    // End past the array is clamped (one warning) but still counted.
    assert_eq!(a.occurrences_of(2, 0, 100), 3);
    assert_eq!(a.warnings().emitted(), 1);

    // start > end yields zero with a warning.
    assert_eq!(a.occurrences_of(2, 4, 1), 0);
    assert_eq!(a.warnings().emitted(), 2);
}

/// Test forward and backward index lookup.
#[test]
fn test_index_of_directions() {
    let a = NumArray::from(vec![4, 9, 4, 1, 4]);

    assert_eq!(a.index_of(4, ScanDirection::Forward, 0), Some(0));
    assert_eq!(a.index_of(4, ScanDirection::Forward, 1), Some(2));
    assert_eq!(a.index_of(4, ScanDirection::Backward, 4), Some(4));
    assert_eq!(a.index_of(4, ScanDirection::Backward, 3), Some(2));
    assert_eq!(a.index_of(7, ScanDirection::Forward, 0), None);
    // Start past the end finds nothing.
    assert_eq!(a.index_of(4, ScanDirection::Forward, 5), None);
}

/// Test collecting every matching index.
#[test]
fn test_indices_of() {
    let a = NumArray::from(vec![4, 9, 4, 1, 4]);

    assert_eq!(a.indices_of(4), vec![0, 2, 4]);
    assert!(a.indices_of(7).is_empty());
}

// ============================================================================
// Set Intersection Tests
// ============================================================================

/// Test that common deduplicates and preserves first-appearance order.
#[test]
fn test_common() {
    let a = NumArray::from(vec![1, 2, 2, 3, 4]);
    let b = NumArray::from(vec![4, 2, 6]);

    let shared = a.common(&b);
    assert_eq!(shared.as_slice(), &[2, 4]);

    assert!(a.common(&NumArray::default()).is_empty());
}
