//! Future wrapper that moves a native `Result` onto the rail.
//!
//! This module provides `CatchFuture`, which wraps a `Future<Output = Result<T, E>>`
//! and converts the error into an [`Error`] only when the future resolves to one.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::outcome::Outcome;
use crate::types::Error;

pin_project! {
    /// A future that resolves to an [`Outcome`], converting a native error
    /// with a handler.
    ///
    /// The handler runs at most once, and only when the inner future
    /// resolves to `Err`.
    ///
    /// # Cancel Safety
    ///
    /// `CatchFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::FutureResultExt;
    /// use outcome_rail::Outcome;
    ///
    /// async fn example() -> Outcome<u16> {
    ///     async { "80a".parse::<u16>() }.catch_errors().await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchFuture<Fut, H> {
        #[pin]
        future: Fut,
        handler: Option<H>,
    }
}

impl<Fut, H> CatchFuture<Fut, H> {
    /// Creates a new `CatchFuture` with the given future and error handler.
    #[inline]
    pub fn new(future: Fut, handler: H) -> Self {
        Self { future, handler: Some(handler) }
    }
}

impl<Fut, H, T, E> Future for CatchFuture<Fut, H>
where
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E) -> Error,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| match res {
            Ok(value) => Outcome::Ok(value),
            Err(err) => {
                let handler = this
                    .handler
                    .take()
                    .expect("CatchFuture polled after completion; this is a bug");
                Outcome::fail(handler(err))
            },
        })
    }
}

impl<Fut, H, T, E> FusedFuture for CatchFuture<Fut, H>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    H: FnOnce(E) -> Error,
{
    fn is_terminated(&self) -> bool {
        self.handler.is_none() || self.future.is_terminated()
    }
}

/// Extension trait converting `Result`-returning futures into
/// [`Outcome`]-returning ones.
///
/// This mirrors the sync [`ResultExt`](crate::traits::ResultExt) trait.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::FutureResultExt;
/// use outcome_rail::{Error, Outcome};
///
/// async fn load(id: u32) -> Outcome<String> {
///     async move { Err::<String, _>(id) }
///         .catch_with(|id| Error::new(format!("record {id} not found")))
///         .await
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the error as an exceptional [`Error`].
    fn catch_errors(self) -> CatchFuture<Self, fn(E) -> Error>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.catch_with(Error::exceptional::<E> as fn(E) -> Error)
    }

    /// Converts the error with `handler` when the future resolves to `Err`.
    fn catch_with<H>(self, handler: H) -> CatchFuture<Self, H>
    where
        H: FnOnce(E) -> Error;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn catch_with<H>(self, handler: H) -> CatchFuture<Self, H>
    where
        H: FnOnce(E) -> Error,
    {
        CatchFuture::new(self, handler)
    }
}
