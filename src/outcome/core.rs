use alloc::string::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::errors::accumulate;
use crate::types::{Error, ErrorClass, Errors};

/// Message of the sentinel error carried by [`Outcome::default`].
pub const CONSTRUCTED_RESULT_MESSAGE: &str = "Constructed result";

/// The result of a fallible computation: a value or one or more errors.
///
/// `Outcome<T>` is always exactly one of `Ok` or `Errored`. A failed outcome
/// holds a non-empty [`Errors`] list, so there is no third state. The
/// default value is a failure carrying the [`CONSTRUCTED_RESULT_MESSAGE`]
/// sentinel.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Ok(T)` - Contains a successful value
/// * `Errored(Errors)` - Contains one or more errors
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// let ok = Outcome::ok(42);
/// assert!(ok.is_ok());
///
/// let failed = Outcome::<i32>::fail("boom");
/// assert!(failed.is_errored());
/// assert_eq!(failed.errors(), &[Error::new("boom")]);
///
/// let blank = Outcome::<i32>::default();
/// assert_eq!(blank.errors()[0].message(), "Constructed result");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome<T> {
    Ok(T),
    Errored(Errors),
}

impl<T> Default for Outcome<T> {
    #[inline]
    fn default() -> Self {
        Self::Errored(Errors::single(Error::new(CONSTRUCTED_RESULT_MESSAGE)))
    }
}

impl Outcome<()> {
    /// Creates a successful outcome without a value.
    #[inline]
    pub fn unit() -> Self {
        Self::Ok(())
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failed outcome from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let failed = Outcome::<()>::fail("missing field");
    /// assert_eq!(failed.errors(), &[Error::new("missing field")]);
    /// ```
    #[inline]
    pub fn fail<E: Into<Error>>(error: E) -> Self {
        Self::Errored(Errors::single(error.into()))
    }

    /// Creates a failed outcome from many errors.
    ///
    /// An empty iterator carries no information and yields the same sentinel
    /// failure as [`Outcome::default`].
    #[inline]
    pub fn fail_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        match Errors::try_from_iter(errors) {
            Some(errors) => Self::Errored(errors),
            None => Self::default(),
        }
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome holds errors.
    #[must_use]
    #[inline]
    pub fn is_errored(&self) -> bool {
        !self.is_ok()
    }

    /// Returns a reference to the value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Errored(_) => None,
        }
    }

    /// Returns the top-level errors; empty for a successful outcome.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Ok(_) => &[],
            Self::Errored(errors) => errors.as_slice(),
        }
    }

    /// Extracts the value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Errored(_) => None,
        }
    }

    /// Extracts the error list, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<Errors> {
        match self {
            Self::Ok(_) => None,
            Self::Errored(errors) => Some(errors),
        }
    }

    /// Borrows the value; errors are cloned.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Errored(errors) => Outcome::Errored(errors.clone()),
        }
    }

    /// Returns the value or `fallback`.
    #[must_use]
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Errored(_) => fallback,
        }
    }

    /// Returns the value or computes one from the errors.
    ///
    /// `f` runs only for a failed outcome.
    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Errors) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Errored(errors) => f(errors),
        }
    }

    /// Maps the value using the provided function.
    ///
    /// If the outcome is errored, the errors are preserved unchanged and `f`
    /// is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::ok(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::ok(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Errored(errors) => Outcome::Errored(errors),
        }
    }

    /// Chains a dependent computation.
    ///
    /// `f` runs only on success; the first failure is propagated as-is and
    /// no errors are accumulated.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32> {
    ///     if input % 2 == 0 {
    ///         Outcome::ok(input)
    ///     } else {
    ///         Outcome::fail("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(4).and_then(parse_even), Outcome::ok(4));
    /// assert!(Outcome::ok(3).and_then(parse_even).is_errored());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Errored(errors) => Outcome::Errored(errors),
        }
    }

    /// Chains a dependent computation and combines its value with the
    /// original one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let total = Outcome::ok(2).and_then_with(|x| Outcome::ok(x * 10), |x, y| x + y);
    /// assert_eq!(total, Outcome::ok(22));
    /// ```
    #[inline]
    pub fn and_then_with<U, R, F, C>(self, f: F, combine: C) -> Outcome<R>
    where
        F: FnOnce(&T) -> Outcome<U>,
        C: FnOnce(T, U) -> R,
    {
        let value = match self {
            Self::Ok(value) => value,
            Self::Errored(errors) => return Outcome::Errored(errors),
        };
        match f(&value) {
            Outcome::Ok(u) => Outcome::Ok(combine(value, u)),
            Outcome::Errored(errors) => Outcome::Errored(errors),
        }
    }

    /// Runs two dependent generators left to right, stopping at the first
    /// failure, then combines all values.
    #[inline]
    pub fn and_then_with2<U1, U2, R, F1, F2, C>(self, f1: F1, f2: F2, combine: C) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Outcome<U1>,
        F2: FnOnce(&T) -> Outcome<U2>,
        C: FnOnce(T, U1, U2) -> R,
    {
        let value = match self {
            Self::Ok(value) => value,
            Self::Errored(errors) => return Outcome::Errored(errors),
        };
        let u1 = match f1(&value) {
            Outcome::Ok(u1) => u1,
            Outcome::Errored(errors) => return Outcome::Errored(errors),
        };
        match f2(&value) {
            Outcome::Ok(u2) => Outcome::Ok(combine(value, u1, u2)),
            Outcome::Errored(errors) => Outcome::Errored(errors),
        }
    }

    /// Runs three dependent generators left to right, stopping at the first
    /// failure, then combines all values.
    #[inline]
    pub fn and_then_with3<U1, U2, U3, R, F1, F2, F3, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        combine: C,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Outcome<U1>,
        F2: FnOnce(&T) -> Outcome<U2>,
        F3: FnOnce(&T) -> Outcome<U3>,
        C: FnOnce(T, U1, U2, U3) -> R,
    {
        let value = match self {
            Self::Ok(value) => value,
            Self::Errored(errors) => return Outcome::Errored(errors),
        };
        let u1 = match f1(&value) {
            Outcome::Ok(u1) => u1,
            Outcome::Errored(errors) => return Outcome::Errored(errors),
        };
        let u2 = match f2(&value) {
            Outcome::Ok(u2) => u2,
            Outcome::Errored(errors) => return Outcome::Errored(errors),
        };
        match f3(&value) {
            Outcome::Ok(u3) => Outcome::Ok(combine(value, u1, u2, u3)),
            Outcome::Errored(errors) => Outcome::Errored(errors),
        }
    }

    /// Keeps a successful value only if it satisfies `predicate`, otherwise
    /// fails with `error`.
    ///
    /// An errored outcome passes through and `predicate` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let adult = Outcome::ok(20).ensure(|age| *age >= 18, "Too young");
    /// assert_eq!(adult, Outcome::ok(20));
    ///
    /// let child = Outcome::ok(9).ensure(|age| *age >= 18, "Too young");
    /// assert_eq!(child.errors(), &[Error::new("Too young")]);
    /// ```
    #[inline]
    pub fn ensure<P, E>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: Into<Error>,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::fail(error)
                }
            },
            errored => errored,
        }
    }

    /// Like [`Outcome::ensure`], building the error lazily from the rejected
    /// value.
    #[inline]
    pub fn ensure_with<P, F>(self, predicate: P, error_fn: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Error,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::fail(error_fn(&value))
                }
            },
            errored => errored,
        }
    }

    /// Projects every top-level error; causes are not visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let failed = Outcome::<i32>::fail_many([Error::new("a"), Error::new("b")])
    ///     .map_errors(|e| Error::new(format!("ERR:{}", e.message())));
    /// assert_eq!(failed.errors(), &[Error::new("ERR:a"), Error::new("ERR:b")]);
    /// ```
    #[inline]
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Errored(errors) => Self::Errored(errors.map(f)),
        }
    }

    /// Collapses all top-level errors into a single new error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let merged = Outcome::<i32>::fail_many([Error::new("a"), Error::new("b")])
    ///     .merge_errors_with(|errors| Error::with_causes("invalid input", errors));
    ///
    /// assert_eq!(merged.errors().len(), 1);
    /// assert_eq!(merged.errors()[0].inner_errors().len(), 2);
    /// ```
    #[inline]
    pub fn merge_errors_with<F>(self, combine: F) -> Self
    where
        F: FnOnce(Errors) -> Error,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Errored(errors) => Self::fail(combine(errors)),
        }
    }

    /// Nests all top-level errors under one context error.
    #[inline]
    pub fn with_context<L, S>(self, label: L, message: S) -> Self
    where
        L: Into<String>,
        S: Into<String>,
    {
        self.merge_errors_with(|errors| Error::context(label, message, errors))
    }

    /// Calls `op` if the outcome is errored, otherwise returns the value.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(Errors) -> Self,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Errored(errors) => op(errors),
        }
    }

    /// Calls `f` with a reference to the value, if any.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the errors, if any.
    #[inline]
    pub fn inspect_errors<F>(self, f: F) -> Self
    where
        F: FnOnce(&Errors),
    {
        if let Self::Errored(errors) = &self {
            f(errors);
        }
        self
    }

    /// Combines two independent outcomes into a tuple, accumulating all
    /// errors in argument order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::ok(1).zip(Outcome::ok("a")), Outcome::ok((1, "a")));
    ///
    /// let both = Outcome::<i32>::fail("e1").zip(Outcome::<i32>::fail("e2"));
    /// assert_eq!(both.errors(), &[Error::new("e1"), Error::new("e2")]);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok((a, b)),
            (Self::Errored(e), Outcome::Ok(_)) => Outcome::Errored(e),
            (Self::Ok(_), Outcome::Errored(e)) => Outcome::Errored(e),
            (Self::Errored(mut e1), Outcome::Errored(e2)) => {
                e1.append(e2);
                Outcome::Errored(e1)
            },
        }
    }

    /// Zips two outcomes and applies `zipper` when both succeed.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Outcome<U>, zipper: F) -> Outcome<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(a, b)| zipper(a, b))
    }

    /// Returns `true` if any error tree contains an error of `class`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, ErrorClass, Outcome};
    ///
    /// let failed = Outcome::<()>::fail(Error::with_causes("outer", [
    ///     Error::index(3, "bad row", [Error::new("Too young")]),
    /// ]));
    ///
    /// assert!(failed.has_error(ErrorClass::Index));
    /// assert!(failed.has_error_where(ErrorClass::Index, |e| e.index_of() == Some(3)));
    /// assert!(!failed.has_error(ErrorClass::Member));
    /// ```
    #[must_use]
    #[inline]
    pub fn has_error(&self, class: ErrorClass) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Errored(errors) => errors.contains(class),
        }
    }

    /// Returns `true` if any error tree contains an error of `class` that
    /// satisfies `predicate`.
    #[must_use]
    #[inline]
    pub fn has_error_where<P>(&self, class: ErrorClass, predicate: P) -> bool
    where
        P: FnMut(&Error) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Errored(errors) => errors.contains_where(class, predicate),
        }
    }

    /// Returns `true` if any error in any tree satisfies `predicate`.
    #[must_use]
    #[inline]
    pub fn any_error<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Error) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Errored(errors) => errors.flatten().any(predicate),
        }
    }

    /// Converts into an `Option`, discarding errors.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into_value()
    }

    /// Converts into a plain `Result`, keeping all errors.
    #[inline]
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Errored(errors) => Err(errors),
        }
    }

    /// Wraps a plain `Result`, turning the error side into a single error.
    #[inline]
    pub fn from_result<E: Into<Error>>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<T, U> Outcome<(T, U)> {
    /// Splits a tuple outcome, cloning the errors into both halves.
    #[inline]
    pub fn unzip(self) -> (Outcome<T>, Outcome<U>) {
        match self {
            Self::Ok((a, b)) => (Outcome::Ok(a), Outcome::Ok(b)),
            Self::Errored(errors) => (Outcome::Errored(errors.clone()), Outcome::Errored(errors)),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> From<Errors> for Outcome<T> {
    #[inline]
    fn from(errors: Errors) -> Self {
        Self::Errored(errors)
    }
}

impl<T, E: Into<Error>> From<Result<T, E>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_value()
    }
}

impl<T> From<Outcome<T>> for Result<T, Errors> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Folds `errors` from a failed step into an accumulator.
#[inline]
pub(crate) fn absorb<T>(acc: &mut Option<Errors>, outcome: Outcome<T>) -> Option<T> {
    match outcome {
        Outcome::Ok(value) => Some(value),
        Outcome::Errored(errors) => {
            accumulate(acc, errors);
            None
        },
    }
}
