#![cfg(all(feature = "serde", feature = "collection"))]

//! Integration tests for serde support.
//!
//! `Either`, `Try` with a serializable error, and `Pair` serialize as
//! externally tagged values and restore to equal values.

use lambda_companion::collection::Pair;
use lambda_companion::control::{Either, Try};
use rstest::rstest;

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    assert_eq!(left_json, r#"{"Left":"error"}"#);
    assert_eq!(right_json, r#"{"Right":42}"#);

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

// =============================================================================
// Try
// =============================================================================

#[rstest]
fn test_try_json_roundtrip() {
    let success: Try<Vec<u8>, String> = Try::success(vec![1, 2]);
    let failure: Try<Vec<u8>, String> = Try::failure("timeout".to_string());

    let success_json = serde_json::to_string(&success).unwrap();
    let failure_json = serde_json::to_string(&failure).unwrap();

    assert_eq!(success_json, r#"{"Success":[1,2]}"#);
    assert_eq!(failure_json, r#"{"Failure":"timeout"}"#);

    let restored: Try<Vec<u8>, String> = serde_json::from_str(&failure_json).unwrap();
    assert_eq!(restored, failure);
}

#[rstest]
fn test_try_rejects_unknown_variant() {
    let result: Result<Try<i32, String>, _> = serde_json::from_str(r#"{"Pending":1}"#);
    assert!(result.is_err());
}

// =============================================================================
// Pair
// =============================================================================

#[rstest]
fn test_pair_json_roundtrip() {
    let pair = Pair::new("name".to_string(), Either::<u8, bool>::Right(true));
    let json = serde_json::to_string(&pair).unwrap();
    assert_eq!(json, r#"{"left":"name","right":{"Right":true}}"#);

    let restored: Pair<String, Either<u8, bool>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, pair);
}
