use outcome_rail::convert::*;
use outcome_rail::{Error, Errors, Outcome};

#[test]
fn option_round_trip() {
    assert_eq!(outcome_to_option(option_to_outcome(Some(5), "missing")), Some(5));
    assert_eq!(outcome_to_option(option_to_outcome(None::<i32>, "missing")), None);
    assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::fail("missing"));
}

#[test]
fn result_round_trip_keeps_every_error() {
    let failed = Outcome::<i32>::fail_many([Error::new("a"), Error::new("b")]);
    let result: Result<i32, Errors> = outcome_to_result(failed.clone());

    assert_eq!(result.clone().map_err(|errors| errors.len()), Err(2));
    assert_eq!(Outcome::from(result.map_err(|errors| errors.first().clone())), Outcome::fail("a"));

    assert_eq!(result_to_outcome(Ok::<_, &str>(1)), Outcome::ok(1));
    assert_eq!(result_to_outcome::<i32, _>(Err("x")), Outcome::fail("x"));
}

#[test]
fn collect_errors_is_ok_when_empty() {
    assert_eq!(collect_errors(Vec::new()), Outcome::ok(()));

    let collected = collect_errors(vec![Error::new("a"), Error::new("b")]);
    assert_eq!(collected.errors(), &[Error::new("a"), Error::new("b")]);
}

#[test]
fn split_outcome_errors_yields_one_item_per_error() {
    let ok: Vec<_> = split_outcome_errors(Outcome::ok(1)).collect();
    assert_eq!(ok, vec![Ok(1)]);

    let iter = split_outcome_errors(Outcome::<i32>::fail_many([Error::new("a"), Error::new("b")]));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.collect::<Vec<_>>(), vec![Err(Error::new("a")), Err(Error::new("b"))]);
}
