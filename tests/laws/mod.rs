//! Algebraic laws checked with generated inputs.

use outcome_rail::outcome::transpose;
use outcome_rail::{Error, Outcome, ZipOutcomes};
use proptest::prelude::*;

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::ok),
        prop::collection::vec("[a-z]{1,6}", 1..4)
            .prop_map(|messages| Outcome::fail_many(messages.into_iter().map(Error::new))),
    ]
}

fn halve(n: i32) -> Outcome<i32> {
    if n % 2 == 0 {
        Outcome::ok(n / 2)
    } else {
        Outcome::fail(format!("{n} is odd"))
    }
}

fn shrink(n: i32) -> Outcome<i32> {
    if n.unsigned_abs() < 1_000 {
        Outcome::ok(n.wrapping_sub(1))
    } else {
        Outcome::fail("too large")
    }
}

proptest! {
    // Left identity: ok(a).and_then(f) == f(a)
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Outcome::ok(value).and_then(halve), halve(value));
    }

    // Right identity: m.and_then(ok) == m
    #[test]
    fn prop_right_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().and_then(Outcome::ok), outcome);
    }

    // Associativity: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
    #[test]
    fn prop_associativity(outcome in outcome_strategy()) {
        let left = outcome.clone().and_then(halve).and_then(shrink);
        let right = outcome.and_then(|x| halve(x).and_then(shrink));
        prop_assert_eq!(left, right);
    }

    // Functor identity and composition.
    #[test]
    fn prop_map_laws(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().map(|x| x), outcome.clone());

        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_add(7);
        prop_assert_eq!(outcome.clone().map(f).map(g), outcome.map(|x| g(f(x))));
    }

    // Zip agrees with bind on success and keeps strictly more errors on failure.
    #[test]
    fn prop_zip_vs_bind(a in outcome_strategy(), b in outcome_strategy()) {
        let zipped = (a.clone(), b.clone()).zip_all();
        let bound = a.clone().and_then(|x| b.clone().map(|y| (x, y)));

        if a.is_ok() && b.is_ok() {
            prop_assert_eq!(zipped, bound);
        } else {
            let mut expected = a.errors().to_vec();
            expected.extend_from_slice(b.errors());
            prop_assert_eq!(zipped.errors(), expected.as_slice());
            prop_assert_eq!(bound.errors(), if a.is_errored() { a.errors() } else { b.errors() });
        }
    }

    // Transpose concatenates all errors in input order.
    #[test]
    fn prop_transpose_accumulates(outcomes in prop::collection::vec(outcome_strategy(), 0..8)) {
        let expected_errors: Vec<Error> =
            outcomes.iter().flat_map(|o| o.errors().to_vec()).collect();
        let expected_values: Vec<i32> =
            outcomes.iter().filter_map(|o| o.value().copied()).collect();

        let all = transpose(outcomes);

        if expected_errors.is_empty() {
            prop_assert_eq!(all, Outcome::ok(expected_values));
        } else {
            prop_assert_eq!(all.errors(), expected_errors.as_slice());
        }
    }

    // Outcome -> Result -> Outcome is lossless.
    #[test]
    fn prop_result_round_trip(outcome in outcome_strategy()) {
        let back: Outcome<i32> = match outcome.clone().into_result() {
            Ok(value) => Outcome::ok(value),
            Err(errors) => Outcome::Errored(errors),
        };
        prop_assert_eq!(back, outcome);
    }
}
