use outcome_rail::{Error, Outcome};

#[test]
fn iter_yields_value_once() {
    let ok = Outcome::ok(3);
    assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&3]);

    let failed = Outcome::<i32>::fail("x");
    assert_eq!(failed.iter().count(), 0);
}

#[test]
fn iter_mut_updates_in_place() {
    let mut ok = Outcome::ok(3);
    for value in &mut ok {
        *value *= 10;
    }
    assert_eq!(ok, Outcome::ok(30));
}

#[test]
fn into_iter_moves_value() {
    let values: Vec<String> = Outcome::ok(String::from("v")).into_iter().collect();
    assert_eq!(values, ["v"]);

    let flattened: Vec<i32> = vec![Outcome::ok(1), Outcome::fail("x"), Outcome::ok(3)]
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(flattened, [1, 3]);
}

#[test]
fn iter_errors_lists_top_level_errors() {
    let failed =
        Outcome::<()>::fail_many([Error::new("a"), Error::with_causes("b", [Error::new("c")])]);
    let messages: Vec<_> = failed.iter_errors().map(Error::message).collect();
    assert_eq!(messages, ["a", "b"]);

    assert_eq!(Outcome::ok(1).iter_errors().count(), 0);
}
