//! Combinators over the standard [`Option`].
//!
//! The standard library already covers mapping, binding and filtering. This
//! module adds dependent bind-and-combine chains, conversion into
//! [`Outcome`], tuple zipping and sequence transposition.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{OptionExt, ZipOptions};
//!
//! let area = Some(3).and_then_with(|w| Some(w * 2), |w, h| w * h);
//! assert_eq!(area, Some(18));
//!
//! assert_eq!((Some(1), Some("a")).zip_all(), Some((1, "a")));
//! assert_eq!((Some(1), None::<&str>).zip_all(), None);
//! ```

pub mod zip;

use alloc::vec::Vec;

pub use self::zip::ZipOptions;
use crate::outcome::Outcome;
use crate::types::Error;

/// Extension methods for [`Option`].
///
/// In every `and_then_with*` method the generators receive a reference to
/// the original value and run left to right. The first `None` stops the
/// chain: later generators and the combiner are not called.
pub trait OptionExt<T>: Sized {
    /// Binds one dependent computation and combines both values.
    fn and_then_with<U, R, F, C>(self, f: F, combine: C) -> Option<R>
    where
        F: FnOnce(&T) -> Option<U>,
        C: FnOnce(T, U) -> R;

    fn and_then_with2<U1, U2, R, F1, F2, C>(self, f1: F1, f2: F2, combine: C) -> Option<R>
    where
        F1: FnOnce(&T) -> Option<U1>,
        F2: FnOnce(&T) -> Option<U2>,
        C: FnOnce(T, U1, U2) -> R;

    fn and_then_with3<U1, U2, U3, R, F1, F2, F3, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        combine: C,
    ) -> Option<R>
    where
        F1: FnOnce(&T) -> Option<U1>,
        F2: FnOnce(&T) -> Option<U2>,
        F3: FnOnce(&T) -> Option<U3>,
        C: FnOnce(T, U1, U2, U3) -> R;

    #[allow(clippy::too_many_arguments)]
    fn and_then_with4<U1, U2, U3, U4, R, F1, F2, F3, F4, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
        combine: C,
    ) -> Option<R>
    where
        F1: FnOnce(&T) -> Option<U1>,
        F2: FnOnce(&T) -> Option<U2>,
        F3: FnOnce(&T) -> Option<U3>,
        F4: FnOnce(&T) -> Option<U4>,
        C: FnOnce(T, U1, U2, U3, U4) -> R;

    /// Binds five dependent computations and combines all six values.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::OptionExt;
    ///
    /// let sum = Some(1).and_then_with5(
    ///     |x| Some(x + 1),
    ///     |x| Some(x + 2),
    ///     |x| Some(x + 3),
    ///     |x| Some(x + 4),
    ///     |x| Some(x + 5),
    ///     |a, b, c, d, e, f| a + b + c + d + e + f,
    /// );
    /// assert_eq!(sum, Some(21));
    /// ```
    #[allow(clippy::too_many_arguments)]
    fn and_then_with5<U1, U2, U3, U4, U5, R, F1, F2, F3, F4, F5, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
        f5: F5,
        combine: C,
    ) -> Option<R>
    where
        F1: FnOnce(&T) -> Option<U1>,
        F2: FnOnce(&T) -> Option<U2>,
        F3: FnOnce(&T) -> Option<U3>,
        F4: FnOnce(&T) -> Option<U4>,
        F5: FnOnce(&T) -> Option<U5>,
        C: FnOnce(T, U1, U2, U3, U4, U5) -> R;

    /// Converts into an [`Outcome`], failing with `error` for `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, OptionExt, Outcome};
    ///
    /// assert_eq!(Some(3).ok_or_error("missing"), Outcome::ok(3));
    /// assert_eq!(None::<i32>.ok_or_error("missing"), Outcome::fail(Error::new("missing")));
    /// ```
    fn ok_or_error<E: Into<Error>>(self, error: E) -> Outcome<T>;

    /// Converts into an [`Outcome`], building the error only for `None`.
    fn ok_or_error_with<F>(self, error_fn: F) -> Outcome<T>
    where
        F: FnOnce() -> Error;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn and_then_with<U, R, F, C>(self, f: F, combine: C) -> Option<R>
    where
        F: FnOnce(&T) -> Option<U>,
        C: FnOnce(T, U) -> R,
    {
        let value = self?;
        let u = f(&value)?;
        Some(combine(value, u))
    }

    #[inline]
    fn and_then_with2<U1, U2, R, F1, F2, C>(self, f1: F1, f2: F2, combine: C) -> Option<R>
    where
        F1: FnOnce(&T) -> Option<U1>,
        F2: FnOnce(&T) -> Option<U2>,
        C: FnOnce(T, U1, U2) -> R,
    {
        let value = self?;
        let u1 = f1(&value)?;
        let u2 = f2(&value)?;
        Some(combine(value, u1, u2))
    }

    #[inline]
    fn and_then_with3<U1, U2, U3, R, F1, F2, F3, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        combine: C,
    ) -> Option<R>
    where
        F1: FnOnce(&T) -> Option<U1>,
        F2: FnOnce(&T) -> Option<U2>,
        F3: FnOnce(&T) -> Option<U3>,
        C: FnOnce(T, U1, U2, U3) -> R,
    {
        let value = self?;
        let u1 = f1(&value)?;
        let u2 = f2(&value)?;
        let u3 = f3(&value)?;
        Some(combine(value, u1, u2, u3))
    }

    #[inline]
    fn and_then_with4<U1, U2, U3, U4, R, F1, F2, F3, F4, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
        combine: C,
    ) -> Option<R>
    where
        F1: FnOnce(&T) -> Option<U1>,
        F2: FnOnce(&T) -> Option<U2>,
        F3: FnOnce(&T) -> Option<U3>,
        F4: FnOnce(&T) -> Option<U4>,
        C: FnOnce(T, U1, U2, U3, U4) -> R,
    {
        let value = self?;
        let u1 = f1(&value)?;
        let u2 = f2(&value)?;
        let u3 = f3(&value)?;
        let u4 = f4(&value)?;
        Some(combine(value, u1, u2, u3, u4))
    }

    #[inline]
    fn and_then_with5<U1, U2, U3, U4, U5, R, F1, F2, F3, F4, F5, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
        f5: F5,
        combine: C,
    ) -> Option<R>
    where
        F1: FnOnce(&T) -> Option<U1>,
        F2: FnOnce(&T) -> Option<U2>,
        F3: FnOnce(&T) -> Option<U3>,
        F4: FnOnce(&T) -> Option<U4>,
        F5: FnOnce(&T) -> Option<U5>,
        C: FnOnce(T, U1, U2, U3, U4, U5) -> R,
    {
        let value = self?;
        let u1 = f1(&value)?;
        let u2 = f2(&value)?;
        let u3 = f3(&value)?;
        let u4 = f4(&value)?;
        let u5 = f5(&value)?;
        Some(combine(value, u1, u2, u3, u4, u5))
    }

    #[inline]
    fn ok_or_error<E: Into<Error>>(self, error: E) -> Outcome<T> {
        Outcome::ok_if_some(self, error)
    }

    #[inline]
    fn ok_or_error_with<F>(self, error_fn: F) -> Outcome<T>
    where
        F: FnOnce() -> Error,
    {
        Outcome::ok_if_some_with(self, error_fn)
    }
}

/// Turns a sequence of options into an option of a list.
///
/// Stops at the first `None`; later elements are not pulled from the
/// iterator. An empty input yields `Some(vec![])`.
///
/// # Examples
///
/// ```
/// use outcome_rail::option::transpose;
///
/// assert_eq!(transpose([Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(transpose([Some(1), None, Some(3)]), None);
/// assert_eq!(transpose(Vec::<Option<i32>>::new()), Some(vec![]));
/// ```
#[inline]
pub fn transpose<T, I>(options: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    options.into_iter().collect()
}
