//! Collecting many outcomes into one.

use alloc::vec::Vec;

use crate::outcome::core::absorb;
use crate::outcome::Outcome;
use crate::types::errors::accumulate;
use crate::types::{Error, Errors};

/// Turns a sequence of outcomes into an outcome of a list.
///
/// Every element is visited. The result succeeds with all values in input
/// order only if every element succeeded; otherwise it carries the
/// concatenation of all errors in input order. An empty input yields an
/// empty list.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::transpose;
/// use outcome_rail::{Error, Outcome};
///
/// assert_eq!(transpose(vec![Outcome::ok(1), Outcome::ok(2)]), Outcome::ok(vec![1, 2]));
///
/// let failed = transpose(vec![Outcome::<i32>::fail("e1"), Outcome::ok(2), Outcome::fail("e3")]);
/// assert_eq!(failed.errors(), &[Error::new("e1"), Error::new("e3")]);
///
/// assert_eq!(transpose(Vec::<Outcome<i32>>::new()), Outcome::ok(vec![]));
/// ```
#[inline]
pub fn transpose<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    outcomes.into_iter().collect()
}

/// Combines many outcomes, keeping only their errors.
///
/// Succeeds with `()` when every element succeeded (including for an empty
/// input); otherwise carries all errors in input order.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome::merge;
/// use outcome_rail::{Error, Outcome};
///
/// let merged = merge(vec![Outcome::ok(1), Outcome::fail("a"), Outcome::fail("b")]);
/// assert_eq!(merged.errors(), &[Error::new("a"), Error::new("b")]);
/// ```
pub fn merge<T, I>(outcomes: I) -> Outcome<()>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut errors = None;
    for outcome in outcomes {
        if let Outcome::Errored(e) = outcome {
            accumulate(&mut errors, e);
        }
    }
    finish(errors, ())
}

/// Wraps `value` unless errors were accumulated.
#[inline]
pub(crate) fn finish<T>(errors: Option<Errors>, value: T) -> Outcome<T> {
    match errors {
        Some(errors) => Outcome::Errored(errors),
        None => Outcome::Ok(value),
    }
}

impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut errors = None;
        let values: Vec<T> = iter
            .into_iter()
            .filter_map(|outcome| absorb(&mut errors, outcome))
            .collect();
        finish(errors, ()).map(|()| values.into_iter().collect())
    }
}

/// Collects plain results, turning each error into a single [`Error`].
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let parsed: Outcome<Vec<i32>> = ["1", "x", "3", "y"]
///     .iter()
///     .map(|s| s.parse::<i32>().map_err(|_| format!("bad number '{s}'")))
///     .collect();
///
/// assert_eq!(parsed.errors().len(), 2);
/// assert_eq!(parsed.errors()[1].message(), "bad number 'y'");
/// ```
impl<T, E, C> FromIterator<Result<T, E>> for Outcome<C>
where
    E: Into<Error>,
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        iter.into_iter().map(Outcome::from_result).collect()
    }
}
