use core::future::Future;

use super::catch_future::CatchFuture;
use crate::outcome::{Outcome, ZipOutcomes};
use crate::types::Error;

impl<T> Outcome<T> {
    /// Maps the value with an async function; `f` is not called on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// # async fn run() {
    /// let doubled = Outcome::ok(21).map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(doubled, Outcome::ok(42));
    /// # }
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value).await),
            Self::Errored(errors) => Outcome::Errored(errors),
        }
    }

    /// Binds an async computation; the first failure is propagated as-is.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Errored(errors) => Outcome::Errored(errors),
        }
    }

    /// Binds an async computation on a borrowed value and combines both
    /// values.
    pub async fn and_then_with_async<U, R, F, Fut, C>(self, f: F, combine: C) -> Outcome<R>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
        C: FnOnce(T, U) -> R,
    {
        let value = match self {
            Self::Ok(value) => value,
            Self::Errored(errors) => return Outcome::Errored(errors),
        };
        match f(&value).await {
            Outcome::Ok(u) => Outcome::Ok(combine(value, u)),
            Outcome::Errored(errors) => Outcome::Errored(errors),
        }
    }

    /// Awaits two dependent generators in order, stopping at the first
    /// failure, then combines all values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// # async fn run() {
    /// let total = Outcome::ok(1)
    ///     .and_then_with2_async(
    ///         |x| core::future::ready(Outcome::ok(*x + 1)),
    ///         |x| core::future::ready(Outcome::ok(*x + 2)),
    ///         |a, b, c| a + b + c,
    ///     )
    ///     .await;
    /// assert_eq!(total, Outcome::ok(6));
    /// # }
    /// ```
    pub async fn and_then_with2_async<U1, U2, R, F1, Fut1, F2, Fut2, C>(
        self,
        f1: F1,
        f2: F2,
        combine: C,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Outcome<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Outcome<U2>>,
        C: FnOnce(T, U1, U2) -> R,
    {
        let value = crate::rail!(self);
        let u1 = crate::rail!(f1(&value).await);
        let u2 = crate::rail!(f2(&value).await);
        Outcome::Ok(combine(value, u1, u2))
    }

    /// Awaits three dependent generators in order, stopping at the first
    /// failure, then combines all values.
    #[allow(clippy::too_many_arguments)]
    pub async fn and_then_with3_async<U1, U2, U3, R, F1, Fut1, F2, Fut2, F3, Fut3, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        combine: C,
    ) -> Outcome<R>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Outcome<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Outcome<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Outcome<U3>>,
        C: FnOnce(T, U1, U2, U3) -> R,
    {
        let value = crate::rail!(self);
        let u1 = crate::rail!(f1(&value).await);
        let u2 = crate::rail!(f2(&value).await);
        let u3 = crate::rail!(f3(&value).await);
        Outcome::Ok(combine(value, u1, u2, u3))
    }

    /// Runs an async fallible operation, capturing its native error as an
    /// exceptional [`Error`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::{ErrorClass, Outcome};
    ///
    /// # async fn run() {
    /// let port = Outcome::try_async(|| async { "http".parse::<u16>() }).await;
    /// assert!(port.has_error(ErrorClass::Exceptional));
    /// # }
    /// ```
    #[inline]
    pub fn try_async<F, Fut, E>(f: F) -> CatchFuture<Fut, fn(E) -> Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: core::error::Error + Send + Sync + 'static,
    {
        CatchFuture::new(f(), Error::exceptional::<E> as fn(E) -> Error)
    }

    /// Runs an async fallible operation, converting its error with `handler`.
    #[inline]
    pub fn try_async_catch<F, Fut, E, H>(f: F, handler: H) -> CatchFuture<Fut, H>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        H: FnOnce(E) -> Error,
    {
        CatchFuture::new(f(), handler)
    }
}

/// Zips a tuple of outcomes and awaits an async zipper on success.
///
/// Error accumulation is the same as [`ZipOutcomes::zip_all`]; the zipper is
/// not called when any member failed.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::ZipOutcomesAsync;
/// use outcome_rail::Outcome;
///
/// # async fn run() {
/// let sum = (Outcome::ok(1), Outcome::ok(2))
///     .zip_with_async(|(a, b)| async move { a + b })
///     .await;
/// assert_eq!(sum, Outcome::ok(3));
/// # }
/// ```
pub trait ZipOutcomesAsync: ZipOutcomes + Sized {
    fn zip_with_async<R, F, Fut>(self, zipper: F) -> impl Future<Output = Outcome<R>>
    where
        F: FnOnce(Self::Output) -> Fut,
        Fut: Future<Output = R>,
    {
        self.zip_all().map_async(zipper)
    }
}

impl<Z: ZipOutcomes> ZipOutcomesAsync for Z {}
