//! Integration tests for the collection helpers.
//!
//! Covers `Option` helpers, `Pair` (including partitioning a list of
//! `Either`s and building maps) and the extra iterator operations.

#![cfg(feature = "collection")]

use lambda_companion::collection::{ExtendedIterator, Pair, optionals, pair};
use lambda_companion::control::{Either, Try};
use rstest::rstest;
use std::any::Any;
use std::collections::HashSet;

// =============================================================================
// optionals
// =============================================================================

#[rstest]
fn stream_flattens_present_values() {
    let lookups = vec![Some(1), None, Some(3), None];
    let values: Vec<i32> = lookups.into_iter().flat_map(optionals::stream).collect();
    assert_eq!(values, vec![1, 3]);
}

#[rstest]
fn first_of_falls_through_to_last_supplier() {
    let environment = || None::<String>;
    let config_file = || None::<String>;
    let fallback = || Some("default".to_string());
    let suppliers: Vec<Box<dyn FnOnce() -> Option<String>>> =
        vec![Box::new(environment), Box::new(config_file), Box::new(fallback)];
    assert_eq!(optionals::first_of(suppliers), Some("default".to_string()));
}

#[rstest]
fn of_blankable_with_try_result() {
    let name: Try<String> = Try::success("   ".to_string());
    let owned = name.to_option();
    assert_eq!(optionals::of_blankable(owned.as_deref()), None);
}

#[rstest]
fn filter_type_picks_matching_values() {
    let values: Vec<Box<dyn Any>> = vec![Box::new(1_u8), Box::new("two"), Box::new(3_u8)];
    let bytes: Vec<u8> = values
        .iter()
        .filter_map(|value| optionals::filter_type::<u8>(Some(value.as_ref())))
        .copied()
        .collect();
    assert_eq!(bytes, vec![1, 3]);
}

// =============================================================================
// Pair
// =============================================================================

#[rstest]
fn pair_accessors_and_tuple_conversion() {
    let pair = Pair::new("key", 10);
    assert_eq!(pair.left(), &"key");
    assert_eq!(pair.right(), &10);

    let tuple: (&str, i32) = pair.into();
    assert_eq!(tuple, ("key", 10));
    assert_eq!(Pair::from(tuple), pair);
}

#[rstest]
fn partition_splits_parse_results() {
    let parsed: Vec<Either<String, i32>> = ["1", "x", "3", "y"]
        .into_iter()
        .map(|text| {
            let attempt: Try<i32> = Try::of_fn(str::parse::<i32>, text);
            attempt
                .to_either()
                .left()
                .map(|_| format!("not a number: {text}"))
        })
        .collect();

    let split = Pair::partition(parsed);
    assert_eq!(
        split.left(),
        &vec!["not a number: x".to_string(), "not a number: y".to_string()]
    );
    assert_eq!(split.right(), &vec![1, 3]);
}

#[rstest]
fn partition_of_empty_input_is_two_empty_lists() {
    let split: Pair<Vec<u8>, Vec<u8>> = Pair::partition(Vec::new());
    assert!(split.left().is_empty());
    assert!(split.right().is_empty());
}

#[rstest]
fn to_map_keeps_last_duplicate() {
    let map = pair::to_map([Pair::new(1, "a"), Pair::new(2, "b"), Pair::new(1, "c")]);
    assert_eq!(map.len(), 2);
    assert_eq!(map[&1], "c");
    assert_eq!(map[&2], "b");
}

// =============================================================================
// ExtendedIterator
// =============================================================================

#[rstest]
fn iterator_fold_right_builds_in_order() {
    let list = (1..=3).fold_right(Vec::new(), |n, mut rest| {
        rest.insert(0, n);
        rest
    });
    assert_eq!(list, vec![1, 2, 3]);
}

#[rstest]
#[case(vec![1, 2, 3], Some(3))]
#[case(vec![], None)]
fn iterator_find_last(#[case] values: Vec<i32>, #[case] expected: Option<i32>) {
    assert_eq!(values.into_iter().find_last(), expected);
}

#[rstest]
fn iterator_to_list_and_to_set() {
    let words = ["b", "a", "b"];
    assert_eq!(words.iter().copied().to_list(), vec!["b", "a", "b"]);
    assert_eq!(words.iter().copied().to_set(), HashSet::from(["a", "b"]));
}
