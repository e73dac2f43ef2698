//! Extension trait for moving native `Result` values onto the rail.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//! use outcome_rail::ErrorClass;
//!
//! let port = "80a".parse::<u16>().into_outcome();
//! assert!(port.has_error(ErrorClass::Exceptional));
//! ```

use crate::outcome::Outcome;
use crate::types::Error;

/// Extension trait converting `Result<T, E>` into [`Outcome<T>`].
///
/// Unlike `From<Result<T, E>>`, which needs `E: Into<Error>` and produces a
/// domain error, [`into_outcome`](ResultExt::into_outcome) keeps the native
/// error reachable through [`Error::exception`].
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ResultExt;
/// use outcome_rail::Error;
///
/// let parsed = "x".parse::<i32>().into_outcome_with(|e| Error::new(format!("bad input: {e}")));
/// assert_eq!(parsed.errors()[0].message(), "bad input: invalid digit found in string");
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error as an exceptional [`Error`].
    fn into_outcome(self) -> Outcome<T>
    where
        E: core::error::Error + Send + Sync + 'static;

    /// Converts the error with `handler`; it runs only for `Err`.
    fn into_outcome_with<F>(self, handler: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.into_outcome_with(Error::exceptional)
    }

    #[inline]
    fn into_outcome_with<F>(self, handler: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::fail(handler(error)),
        }
    }
}
