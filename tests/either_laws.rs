#![cfg(feature = "control")]
//! Property-based tests for Either and its projections.
//!
//! - **Identity Law**: `u.left().map(|x| x) == u` and `u.right().map(|x| x) == u`
//! - **Composition Law**: `u.left().map(f).left().map(g) == u.left().map(|x| g(f(x)))`
//! - **Side Symmetry**: mapping the non-matching side never alters the union
//! - **Monad Laws**: the right-biased `Monad` instance

use lambda_companion::control::Either;
use lambda_companion::typeclass::{Functor, Monad};
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        any::<String>().prop_map(Either::Right),
    ]
}

proptest! {
    #[test]
    fn prop_left_projection_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().left().map(|x| x), value);
    }

    #[test]
    fn prop_right_projection_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().right().map(|x| x), value);
    }

    #[test]
    fn prop_left_projection_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().left().map(function1).left().map(function2);
        let right = value.left().map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_right_projection_composition_law(value in either_strategy()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(3);

        let left = value.clone().right().map(function1).right().map(function2);
        let right = value.right().map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_left_map_never_alters_right(payload in any::<String>()) {
        let value: Either<i32, String> = Either::Right(payload);
        prop_assert_eq!(value.clone().left().map(|n| n.wrapping_sub(7)), value);
    }

    #[test]
    fn prop_right_map_never_alters_left(payload in any::<i32>()) {
        let value: Either<i32, String> = Either::Left(payload);
        prop_assert_eq!(value.clone().right().map(|s| s + "!"), value);
    }

    #[test]
    fn prop_filter_never_keeps_other_side(value in either_strategy()) {
        let is_left = value.is_left();
        prop_assert_eq!(value.clone().left().filter(|_| true).is_some(), is_left);
        prop_assert_eq!(value.right().filter(|_| true).is_some(), !is_left);
    }

    #[test]
    fn prop_functor_fmap_agrees_with_right_projection(value in either_strategy()) {
        let by_functor = value.clone().fmap(|s| s.len());
        let by_projection = value.right().map(|s| s.len());
        prop_assert_eq!(by_functor, by_projection);
    }

    #[test]
    fn prop_monad_left_identity(payload in any::<String>()) {
        let function = |s: String| -> Either<i32, usize> {
            if s.is_empty() { Either::Left(0) } else { Either::Right(s.len()) }
        };
        let lifted = <Either<i32, String> as Monad>::pure(payload.clone());
        prop_assert_eq!(Monad::flat_map(lifted, function), function(payload));
    }

    #[test]
    fn prop_monad_right_identity(value in either_strategy()) {
        let result = Monad::flat_map(value.clone(), Either::Right);
        prop_assert_eq!(result, value);
    }
}
