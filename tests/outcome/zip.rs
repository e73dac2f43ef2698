use outcome_rail::{Error, Outcome, ZipOutcomes};

#[test]
fn zip_all_succeeds_when_every_member_does() {
    assert_eq!((Outcome::ok(1), Outcome::ok("a")).zip_all(), Outcome::ok((1, "a")));
    assert_eq!(
        (Outcome::ok(1), Outcome::ok(2), Outcome::ok(3), Outcome::ok(4), Outcome::ok(5)).zip_all(),
        Outcome::ok((1, 2, 3, 4, 5))
    );
}

#[test]
fn zip_all_accumulates_in_argument_order() {
    let zipped = (
        Outcome::<i32>::fail("first"),
        Outcome::ok('b'),
        Outcome::<u8>::fail_many([Error::new("third a"), Error::new("third b")]),
        Outcome::<bool>::fail("fourth"),
    )
        .zip_all();

    let messages: Vec<_> = zipped.errors().iter().map(Error::message).collect();
    assert_eq!(messages, ["first", "third a", "third b", "fourth"]);
}

#[test]
fn zip_with_skips_zipper_on_failure() {
    let mut called = false;
    let zipped = (Outcome::ok(1), Outcome::<i32>::fail("b"), Outcome::ok(3)).zip_with(|(a, b, c)| {
        called = true;
        a + b + c
    });

    assert!(!called);
    assert_eq!(zipped.errors(), &[Error::new("b")]);
}

#[test]
fn zip_with_combines_values() {
    let full_name = (Outcome::ok("Ada"), Outcome::ok("Lovelace"))
        .zip_with(|(first, last)| format!("{first} {last}"));
    assert_eq!(full_name, Outcome::ok(String::from("Ada Lovelace")));
}
