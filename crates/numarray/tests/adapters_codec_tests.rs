//! Tests for the ASCII and binary stream codecs.
//!
//! ## Test Organization
//!
//! 1. **ASCII Codec** - save/load with offsets, parse failures
//! 2. **Binary Codec** - save/load with offsets, short streams
//! 3. **Range Policy** - clamping and the warning budget

use std::io::Cursor as IoCursor;

use numarray::prelude::*;

// ============================================================================
// ASCII Codec Tests
// ============================================================================

/// Test saving the whole array as space-separated tokens.
#[test]
fn test_ascii_save_whole_array() {
    let a = NumArray::from(vec![1.5, -2.0, 3.0]);
    let mut out = Vec::new();

    save_ascii(&a, &mut out, 0, 0).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1.5 -2 3");
}

/// Test loading tokens at an offset, growing the array.
#[test]
fn test_ascii_load_at_offset() {
    let mut a = NumArray::from(vec![9.0]);
    let mut input = IoCursor::new("10 11 12");

    load_ascii(&mut a, &mut input, 1, 3).unwrap();
    assert_eq!(a.as_slice(), &[9.0, 10.0, 11.0, 12.0]);
}

/// Test an ASCII round-trip of a sub-range.
#[test]
fn test_ascii_subrange_round_trip() {
    let a = NumArray::from(vec![5, 6, 7, 8]);
    let mut out = Vec::new();
    save_ascii(&a, &mut out, 1, 2).unwrap();

    let mut b: NumArray<i32> = NumArray::default();
    load_ascii(&mut b, &mut IoCursor::new(out), 0, 2).unwrap();
    assert_eq!(b.as_slice(), &[6, 7]);
}

/// Test that a malformed token reports a parse error.
#[test]
fn test_ascii_load_parse_error() {
    let mut a: NumArray<f64> = NumArray::default();
    let mut input = IoCursor::new("1.0 oops 3.0");

    let err = load_ascii(&mut a, &mut input, 0, 3).unwrap_err();
    assert!(matches!(err, CodecError::Parse(_)));
}

/// Test that a truncated token stream reports a parse error.
#[test]
fn test_ascii_load_short_stream() {
    let mut a: NumArray<i32> = NumArray::default();
    let mut input = IoCursor::new("1 2");

    let err = load_ascii(&mut a, &mut input, 0, 5).unwrap_err();
    assert!(matches!(err, CodecError::Parse(_)));
}

// ============================================================================
// Binary Codec Tests
// ============================================================================

/// Test a binary round-trip through an offset load.
#[test]
fn test_binary_round_trip_at_offset() {
    let a = NumArray::from(vec![1.0f64, 2.5, -3.25]);
    let mut out = Vec::new();
    save_binary(&a, &mut out, 0, 0).unwrap();

    let mut b = NumArray::from(vec![42.0f64]);
    load_binary(&mut b, &mut IoCursor::new(out), 1, 3).unwrap();
    assert_eq!(b.as_slice(), &[42.0, 1.0, 2.5, -3.25]);
}

/// Test that a short binary stream reports an I/O error.
#[test]
fn test_binary_load_short_stream() {
    let mut a: NumArray<u32> = NumArray::default();
    let bytes = vec![0u8; 6]; // one and a half u32s

    let err = load_binary(&mut a, &mut IoCursor::new(bytes), 0, 2).unwrap_err();
    assert!(matches!(err, CodecError::Io(_)));
}

// ============================================================================
// Range Policy Tests
// ============================================================================

/// Test that an oversized save range is truncated with a budget warning.
#[test]
fn test_save_range_truncation_warns() {
    let a = NumArray::from(vec![1, 2, 3]);
    let mut out = Vec::new();

    save_ascii(&a, &mut out, 1, 10).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2 3");
    assert_eq!(a.warnings().emitted(), 1);
}

/// Test that saving from past the end of a non-empty array writes nothing
/// and notes a warning.
#[test]
fn test_save_start_past_end() {
    let a = NumArray::from(vec![1.0, 2.0]);
    let mut out = Vec::new();

    save_ascii(&a, &mut out, 5, 0).unwrap();
    assert!(out.is_empty());
    assert_eq!(a.warnings().emitted(), 1);

    // An empty array is not a misuse: no warning.
    let empty: NumArray<f64> = NumArray::default();
    save_ascii(&empty, &mut out, 0, 0).unwrap();
    assert!(out.is_empty());
    assert_eq!(empty.warnings().emitted(), 0);
}

/// Test that the budget saturates into suppression across codec calls.
#[test]
fn test_codec_warning_budget_saturation() {
    let mut a = NumArray::from(vec![1, 2]);
    a.set_warning_budget(1);
    let mut out = Vec::new();

    save_ascii(&a, &mut out, 0, 9).unwrap();
    save_binary(&a, &mut out, 0, 9).unwrap();

    assert_eq!(a.warnings().emitted(), 1);
    assert_eq!(a.warnings().suppressed(), 1);
}
