//! Conversion helpers between `Option`, `Result` and [`Outcome`].
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the
//! edges of an existing codebase: wrap a legacy `Result`, or hand an
//! `Outcome` back to an API that expects a plain `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{Error, Outcome};
//!
//! let outcome = result_to_outcome::<i32, &str>(Err("failed"));
//! assert_eq!(outcome, Outcome::fail(Error::new("failed")));
//!
//! assert_eq!(outcome_to_option(Outcome::ok(7)), Some(7));
//! ```

use core::iter::FusedIterator;

use crate::outcome::Outcome;
use crate::types::{Error, Errors};

/// Converts an `Outcome` to an `Option`, discarding the errors.
#[inline]
pub fn outcome_to_option<T>(outcome: Outcome<T>) -> Option<T> {
    outcome.into_option()
}

/// Converts an `Option` to an `Outcome`, failing with `error` for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
///
/// assert!(option_to_outcome(None::<i32>, "missing").is_errored());
/// assert!(option_to_outcome(Some(1), "missing").is_ok());
/// ```
#[inline]
pub fn option_to_outcome<T, E: Into<Error>>(option: Option<T>, error: E) -> Outcome<T> {
    Outcome::ok_if_some(option, error)
}

/// Converts a `Result` to an `Outcome` holding a single error on failure.
#[inline]
pub fn result_to_outcome<T, E: Into<Error>>(result: Result<T, E>) -> Outcome<T> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` to a `Result`, keeping every error.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::{Error, Outcome};
///
/// let failed = Outcome::<i32>::fail_many([Error::new("a"), Error::new("b")]);
/// let errors = outcome_to_result(failed).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Errors> {
    outcome.into_result()
}

/// Collects errors into an `Outcome<()>`.
///
/// # Returns
///
/// * `Outcome::Ok(())` if the iterator is empty
/// * `Outcome::Errored(errors)` otherwise, in iteration order
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_errors;
/// use outcome_rail::Error;
///
/// assert!(collect_errors(Vec::<Error>::new()).is_ok());
/// assert_eq!(collect_errors([Error::new("a"), Error::new("b")]).errors().len(), 2);
/// ```
#[inline]
pub fn collect_errors<I>(errors: I) -> Outcome<()>
where
    I: IntoIterator<Item = Error>,
{
    match Errors::try_from_iter(errors) {
        Some(errors) => Outcome::Errored(errors),
        None => Outcome::Ok(()),
    }
}

/// Iterator returned by [`split_outcome_errors`].
pub enum SplitOutcomeIter<T> {
    Ok(Option<T>),
    Errored(<Errors as IntoIterator>::IntoIter),
}

impl<T> Iterator for SplitOutcomeIter<T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Ok(value) => value.take().map(Ok),
            Self::Errored(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Ok(value) => {
                let len = usize::from(value.is_some());
                (len, Some(len))
            },
            Self::Errored(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for SplitOutcomeIter<T> {}
impl<T> FusedIterator for SplitOutcomeIter<T> {}

/// Splits an `Outcome` into individual `Result` values: one `Ok` for a
/// success, or one `Err` per top-level error.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::split_outcome_errors;
/// use outcome_rail::{Error, Outcome};
///
/// let results: Vec<_> = split_outcome_errors(Outcome::ok(42)).collect();
/// assert_eq!(results, vec![Ok(42)]);
///
/// let failed = Outcome::<i32>::fail_many([Error::new("err1"), Error::new("err2")]);
/// let results: Vec<_> = split_outcome_errors(failed).collect();
/// assert_eq!(results, vec![Err(Error::new("err1")), Err(Error::new("err2"))]);
/// ```
pub fn split_outcome_errors<T>(outcome: Outcome<T>) -> SplitOutcomeIter<T> {
    match outcome {
        Outcome::Ok(value) => SplitOutcomeIter::Ok(Some(value)),
        Outcome::Errored(errors) => SplitOutcomeIter::Errored(errors.into_iter()),
    }
}
