use std::cell::Cell;
use std::num::ParseIntError;

use outcome_rail::{Error, ErrorClass, Outcome};

#[test]
fn ok_if_and_fail_if_mirror_each_other() {
    assert_eq!(Outcome::ok_if(true, 1, "no"), Outcome::ok(1));
    assert_eq!(Outcome::ok_if(false, 1, "no"), Outcome::fail("no"));
    assert_eq!(Outcome::fail_if(false, 1, "no"), Outcome::ok(1));
    assert_eq!(Outcome::fail_if(true, 1, "no"), Outcome::fail("no"));
}

#[test]
fn lazy_factories_run_only_on_failure() {
    let built = Cell::new(0);
    let factory = || {
        built.set(built.get() + 1);
        Error::new("built")
    };

    assert!(Outcome::ok_if_with(true, 1, factory).is_ok());
    assert!(Outcome::fail_if_with(false, 1, factory).is_ok());
    assert!(Outcome::ok_if_some_with(Some(1), factory).is_ok());
    assert_eq!(built.get(), 0);

    assert!(Outcome::<i32>::ok_if_some_with(None, factory).is_errored());
    assert_eq!(built.get(), 1);
}

#[test]
fn ok_if_some_converts_options() {
    assert_eq!(Outcome::ok_if_some(Some("x"), "missing"), Outcome::ok("x"));
    assert_eq!(Outcome::<&str>::ok_if_some(None, "missing"), Outcome::fail("missing"));
}

#[test]
fn try_with_captures_native_errors() {
    assert_eq!(Outcome::try_with(|| "7".parse::<i32>()), Outcome::ok(7));

    let failed = Outcome::try_with(|| "seven".parse::<i32>());
    let error = &failed.errors()[0];

    assert_eq!(error.class(), ErrorClass::Exceptional);
    assert_eq!(error.message(), "invalid digit found in string");
    assert!(error.exception().is_some_and(|info| info.downcast_ref::<ParseIntError>().is_some()));
}

#[test]
fn try_catch_uses_the_handler() {
    let failed = Outcome::try_catch(|| "x".parse::<u8>(), |e| Error::new(format!("bad byte: {e}")));
    assert_eq!(failed.errors(), &[Error::new("bad byte: invalid digit found in string")]);

    let handled = Cell::new(false);
    let ok = Outcome::try_catch(
        || Ok::<_, ParseIntError>(1),
        |_| {
            handled.set(true);
            Error::new("never")
        },
    );
    assert_eq!(ok, Outcome::ok(1));
    assert!(!handled.get());
}

#[cfg(feature = "std")]
mod unwind {
    use outcome_rail::{Error, Outcome};

    #[test]
    fn try_unwind_returns_value() {
        assert_eq!(Outcome::try_unwind(|| 40 + 2), Outcome::ok(42));
    }

    #[test]
    fn try_unwind_catches_panics() {
        let caught = Outcome::<i32>::try_unwind(|| panic!("Oops!"));

        let error = &caught.errors()[0];
        assert_eq!(error.message(), "Oops!");
        assert!(error.exception().is_some_and(|info| info.is_panic()));
    }

    #[test]
    fn try_unwind_with_uses_the_handler() {
        let caught = Outcome::<i32>::try_unwind_with(
            || panic!("{} failed", "step"),
            |_| Error::new("handled"),
        );
        assert_eq!(caught, Outcome::fail("handled"));
    }
}
