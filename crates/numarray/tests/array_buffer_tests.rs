//! Tests for the growable typed buffer.
//!
//! These tests verify the core container contract:
//! - Creation, resizing, and the zero-fill guarantee
//! - Range-checked get/set
//! - Sub-array extraction and the warning budget
//!
//! ## Test Organization
//!
//! 1. **Lifecycle** - creation, resize semantics, raw access
//! 2. **Checked Access** - get/set in and out of range
//! 3. **Extraction** - head, subrange, gather, clamping and warnings
//! 4. **Elementwise Construction** - map, abs, sqr

use numarray::prelude::*;

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test that a new array is zero-filled at its requested size.
#[test]
fn test_new_is_zero_filled() {
    let a: NumArray<i64> = NumArray::new(4);
    assert_eq!(a.len(), 4);
    assert!(a.contains_only(0));
}

/// Test that growth zero-fills the newly exposed elements.
#[test]
fn test_resize_grow_zero_fills() {
    let mut a = NumArray::from(vec![7.0, 8.0]);
    a.resize(5);

    assert_eq!(a.len(), 5);
    assert_eq!(a.as_slice(), &[7.0, 8.0, 0.0, 0.0, 0.0]);
}

/// Test that shrinking truncates while keeping the prefix.
#[test]
fn test_resize_shrink_truncates() {
    let mut a = NumArray::from(vec![1, 2, 3, 4, 5]);
    a.resize(2);

    assert_eq!(a.as_slice(), &[1, 2]);

    // Growing again re-exposes zeroed elements, not stale ones.
    a.resize(3);
    assert_eq!(a.as_slice(), &[1, 2, 0]);
}

/// Test push, fill, and raw storage access.
#[test]
fn test_push_fill_raw_access() {
    let mut a = NumArray::default();
    a.push(1.5);
    a.push(2.5);
    assert_eq!(a.as_slice(), &[1.5, 2.5]);

    a.fill(9.0);
    assert_eq!(a.into_vec(), vec![9.0, 9.0]);
}

/// Test that equality compares contents only, not warning state.
#[test]
fn test_equality_ignores_warning_state() {
    let a = NumArray::from(vec![1, 2, 3]);
    let b = NumArray::from(vec![1, 2, 3]);

    // Provoke a warning on one side only.
    let _ = a.head(99);
    assert_eq!(a.warnings().emitted(), 1);
    assert_eq!(a, b);
}

// ============================================================================
// Checked Access Tests
// ============================================================================

/// Test in-range get and set.
#[test]
fn test_get_set_in_range() {
    let mut a = NumArray::from(vec![10, 20, 30]);

    assert_eq!(a.get(1), Ok(20));
    assert_eq!(a.set(2, 99), Ok(()));
    assert_eq!(a.get(2), Ok(99));
}

/// Test that out-of-range access reports the index and size.
#[test]
fn test_get_set_out_of_range() {
    let mut a = NumArray::from(vec![10, 20, 30]);

    assert_eq!(
        a.get(3),
        Err(ArrayError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        a.set(7, 0),
        Err(ArrayError::IndexOutOfRange { index: 7, len: 3 })
    );
    // The failed set must not disturb the contents.
    assert_eq!(a.as_slice(), &[10, 20, 30]);
}

// ============================================================================
// Extraction Tests
// ============================================================================

/// Test head extraction within and past the array size.
#[test]
fn test_head_clamps_and_warns() {
    let a = NumArray::from(vec![1, 2, 3]);

    assert_eq!(a.head(2).as_slice(), &[1, 2]);
    assert_eq!(a.warnings().emitted(), 0);

    let clamped = a.head(10);
    assert_eq!(clamped.as_slice(), &[1, 2, 3]);
    assert_eq!(a.warnings().emitted(), 1);
}

/// Test inclusive subrange extraction and its failure modes.
#[test]
fn test_subrange_extraction() {
    let a = NumArray::from(vec![10, 20, 30, 40, 50]);

    assert_eq!(a.subrange(1, 3).as_slice(), &[20, 30, 40]);
    assert_eq!(a.warnings().emitted(), 0);

    // End past the last element: clamped with a warning.
    assert_eq!(a.subrange(3, 9).as_slice(), &[40, 50]);
    assert_eq!(a.warnings().emitted(), 1);

    // Inverted range and start past the end: empty with a warning each.
    assert!(a.subrange(4, 2).is_empty());
    assert!(a.subrange(5, 6).is_empty());
    assert_eq!(a.warnings().emitted(), 3);
}

/// Test that gather skips out-of-range indices and shrinks the result.
#[test]
fn test_gather_skips_invalid_indices() {
    let a = NumArray::from(vec![10.0, 20.0, 30.0]);

    let picked = a.gather(&[2, 0, 7, 1, 99]);
    assert_eq!(picked.as_slice(), &[30.0, 10.0, 20.0]);
    assert_eq!(a.warnings().emitted(), 2);
}

/// Test that the warning budget saturates into suppression.
#[test]
fn test_warning_budget_exhaustion() {
    let mut a = NumArray::from(vec![1, 2]);
    a.set_warning_budget(1);

    let _ = a.head(5);
    let _ = a.head(5);
    let _ = a.head(5);

    assert_eq!(a.warnings().emitted(), 1);
    assert_eq!(a.warnings().suppressed(), 2);
    assert_eq!(a.warnings().remaining(), 0);
}

// ============================================================================
// Elementwise Construction Tests
// ============================================================================

/// Test map, abs, and sqr.
#[test]
fn test_map_abs_sqr() {
    let a = NumArray::from(vec![-2, 3, -4]);

    assert_eq!(a.map(|v| v * 10).as_slice(), &[-20, 30, -40]);
    assert_eq!(a.abs().as_slice(), &[2, 3, 4]);
    assert_eq!(a.sqr().as_slice(), &[4, 9, 16]);
    // The source is untouched.
    assert_eq!(a.as_slice(), &[-2, 3, -4]);
}
