//! Shorthand macros for building and propagating [`Outcome`](crate::Outcome) values.
//!
//! - [`macro@crate::fail`] - Formats a message into a failed outcome.
//! - [`macro@crate::ensure`] - Returns a failed outcome early when a condition does not hold.
//! - [`macro@crate::rail`] - Unwraps a successful outcome or returns its errors early.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, rail, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     let port = rail!(Outcome::try_with(|| raw.parse::<u16>()));
//!     ensure!(port >= 1024, "port {} is reserved", port);
//!     Outcome::ok(port)
//! }
//!
//! assert_eq!(parse_port("8080"), Outcome::ok(8080));
//! assert_eq!(parse_port("80").errors()[0].message(), "port 80 is reserved");
//! assert!(parse_port("http").is_errored());
//! ```

/// Creates a failed [`Outcome`](crate::Outcome) from a formatted message.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let id = 7;
/// let missing: Outcome<()> = fail!("user {} not found", id);
/// assert_eq!(missing.errors()[0].message(), "user 7 not found");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        $crate::Outcome::fail($crate::Error::new($crate::__private::format!($($arg)+)))
    };
}

/// Returns a failed [`Outcome`](crate::Outcome) from the enclosing function
/// unless `cond` holds.
///
/// The message is formatted only when the condition fails.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return $crate::fail!($($arg)+);
        }
    };
}

/// Unwraps a successful [`Outcome`](crate::Outcome) or returns its errors
/// from the enclosing function.
///
/// The enclosing function must return an `Outcome` (of any value type).
///
/// # Examples
///
/// ```
/// use outcome_rail::{rail, Outcome};
///
/// fn double(input: Outcome<i32>) -> Outcome<i32> {
///     let value = rail!(input);
///     Outcome::ok(value * 2)
/// }
///
/// assert_eq!(double(Outcome::ok(4)), Outcome::ok(8));
/// assert!(double(Outcome::fail("nope")).is_errored());
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Errored(errors) => return $crate::Outcome::Errored(errors),
        }
    };
}
