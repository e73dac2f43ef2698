//! Conditional constructors and try-wrapping.
//!
//! The `try_*` functions are the only place where native errors and panics
//! are converted into [`Error`] values. A handler that itself panics is not
//! guarded.

use crate::outcome::Outcome;
use crate::types::Error;

impl<T> Outcome<T> {
    /// Succeeds with `value` when `is_success` holds, otherwise fails with `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::ok_if(true, 1, "nope"), Outcome::ok(1));
    /// assert_eq!(Outcome::ok_if(false, 1, "nope"), Outcome::fail(Error::new("nope")));
    /// ```
    #[inline]
    pub fn ok_if<E: Into<Error>>(is_success: bool, value: T, error: E) -> Self {
        if is_success {
            Self::Ok(value)
        } else {
            Self::fail(error)
        }
    }

    /// Like [`Outcome::ok_if`], building the error only on failure.
    #[inline]
    pub fn ok_if_with<F>(is_success: bool, value: T, error_fn: F) -> Self
    where
        F: FnOnce() -> Error,
    {
        if is_success {
            Self::Ok(value)
        } else {
            Self::fail(error_fn())
        }
    }

    /// Fails with `error` when `is_failure` holds, otherwise succeeds with `value`.
    #[inline]
    pub fn fail_if<E: Into<Error>>(is_failure: bool, value: T, error: E) -> Self {
        Self::ok_if(!is_failure, value, error)
    }

    /// Like [`Outcome::fail_if`], building the error only on failure.
    #[inline]
    pub fn fail_if_with<F>(is_failure: bool, value: T, error_fn: F) -> Self
    where
        F: FnOnce() -> Error,
    {
        Self::ok_if_with(!is_failure, value, error_fn)
    }

    /// Succeeds with the value of `option`, or fails with `error` for `None`.
    #[inline]
    pub fn ok_if_some<E: Into<Error>>(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Self::Ok(value),
            None => Self::fail(error),
        }
    }

    /// Like [`Outcome::ok_if_some`], building the error only for `None`.
    #[inline]
    pub fn ok_if_some_with<F>(option: Option<T>, error_fn: F) -> Self
    where
        F: FnOnce() -> Error,
    {
        match option {
            Some(value) => Self::Ok(value),
            None => Self::fail(error_fn()),
        }
    }

    /// Runs `f`, capturing a native error as an exceptional [`Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorClass, Outcome};
    ///
    /// let parsed = Outcome::try_with(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Outcome::ok(42));
    ///
    /// let failed = Outcome::try_with(|| "x".parse::<i32>());
    /// assert!(failed.has_error(ErrorClass::Exceptional));
    /// ```
    #[inline]
    pub fn try_with<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::try_catch(f, Error::exceptional)
    }

    /// Runs `f`, converting a native error with `handler`.
    #[inline]
    pub fn try_catch<F, E, H>(f: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        H: FnOnce(E) -> Error,
    {
        match f() {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::fail(handler(error)),
        }
    }

    /// Runs `f`, capturing a panic as an exceptional [`Error`].
    ///
    /// The panic hook still runs, so the panic message is reported as usual.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let caught = Outcome::<i32>::try_unwind(|| panic!("Oops!"));
    /// assert_eq!(caught.errors()[0].message(), "Oops!");
    /// assert!(caught.errors()[0].exception().is_some_and(|e| e.is_panic()));
    /// ```
    #[cfg(feature = "std")]
    #[inline]
    pub fn try_unwind<F>(f: F) -> Self
    where
        F: FnOnce() -> T + std::panic::UnwindSafe,
    {
        Self::try_unwind_with(f, Error::panic)
    }

    /// Runs `f`, converting a panic payload with `handler`.
    #[cfg(feature = "std")]
    #[inline]
    pub fn try_unwind_with<F, H>(f: F, handler: H) -> Self
    where
        F: FnOnce() -> T + std::panic::UnwindSafe,
        H: FnOnce(std::boxed::Box<dyn core::any::Any + Send>) -> Error,
    {
        match std::panic::catch_unwind(f) {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::fail(handler(payload)),
        }
    }
}
