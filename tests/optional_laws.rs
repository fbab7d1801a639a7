#![cfg(feature = "control")]
//! Property-based tests for Optional.
//!
//! - **Fallback**: `Some(v).unwrap_or(f) == v`, `None.unwrap_or(f) == f`
//! - **Functor identity**: `o.map(|x| x) == o`
//! - **Left identity**: `o.bind(Optional::Some) == o`
//! - **Flatten**: nesting collapses exactly one level

use fpkit::control::Optional;
use proptest::prelude::*;
use rstest::rstest;

fn arbitrary_optional() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

proptest! {
    #[test]
    fn prop_unwrap_or_law(value in any::<i32>(), fallback in any::<i32>()) {
        prop_assert_eq!(Optional::Some(value).unwrap_or(fallback), value);
        prop_assert_eq!(Optional::None.unwrap_or(fallback), fallback);
    }

    #[test]
    fn prop_map_identity_law(optional in arbitrary_optional()) {
        prop_assert_eq!(optional.map(|x| x), optional);
    }

    #[test]
    fn prop_map_composition_law(optional in arbitrary_optional()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(
            optional.map(function1).map(function2),
            optional.map(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_bind_left_identity_law(optional in arbitrary_optional()) {
        prop_assert_eq!(optional.bind(Optional::Some), optional);
    }

    #[test]
    fn prop_flatten_law(optional in arbitrary_optional()) {
        prop_assert_eq!(Optional::Some(optional).flatten(), optional);
        prop_assert_eq!(Optional::<Optional<i32>>::None.flatten(), Optional::None);
    }

    #[test]
    fn prop_option_round_trip(optional in arbitrary_optional()) {
        prop_assert_eq!(Optional::from(optional.into_option()), optional);
    }

    #[test]
    fn prop_xor_some_iff_exactly_one(left in arbitrary_optional(), right in arbitrary_optional()) {
        prop_assert_eq!(left.xor(right).is_some(), left.is_some() != right.is_some());
    }
}

#[rstest]
#[case(Optional::Some(2), Optional::Some(1), Optional::None)]
#[case(Optional::None, Optional::Some(1), Optional::Some(1))]
#[case(Optional::Some(2), Optional::None, Optional::Some(2))]
#[case(Optional::None, Optional::None, Optional::None)]
fn test_xor_cases(
    #[case] left: Optional<i32>,
    #[case] right: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(left.xor(right), expected);
}

#[rstest]
#[case(Optional::Some(7), "Some 7")]
#[case(Optional::None, "None")]
fn test_display(#[case] optional: Optional<i32>, #[case] expected: &str) {
    assert_eq!(optional.to_string(), expected);
}

#[rstest]
#[should_panic(expected = "Unwrap called on None")]
fn test_unwrap_none_panics_with_operation_name() {
    let _ = Optional::<i32>::None.unwrap();
}

#[rstest]
#[should_panic(expected = "config must be loaded")]
fn test_expect_panics_with_caller_message() {
    let _ = Optional::<i32>::None.expect("config must be loaded");
}
