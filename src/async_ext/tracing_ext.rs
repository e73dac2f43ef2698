//! Tracing integration for outcome-rail.
//!
//! This module nests errors under a [`Context`](crate::ErrorKind::Context)
//! error named after a `tracing` span, so a failure records where it
//! happened.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use alloc::format;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::outcome::Outcome;
use crate::types::{Error, Errors};

/// Extension trait for futures that nests their errors under a span context.
///
/// # Example
///
/// ```rust
/// use outcome_rail::async_ext::FutureSpanExt;
/// use outcome_rail::Outcome;
///
/// async fn fetch_user(id: u64) -> Outcome<String> {
///     let span = tracing::info_span!("fetch_user", user_id = id);
///     async { Outcome::fail("not found") }.with_span(span).await
/// }
/// ```
pub trait FutureSpanExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Uses the span that is current when this method is called.
    fn with_span_context(self) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span: Span::current() }
    }

    /// Uses the given span.
    fn with_span(self, span: Span) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span }
    }
}

impl<F, T> FutureSpanExt<T> for F where F: Future<Output = Outcome<T>> {}

pin_project! {
    /// Future wrapper that nests errors under a span context.
    ///
    /// Created by [`FutureSpanExt::with_span_context`] or [`FutureSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanContextFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T> Future for SpanContextFuture<F>
where
    F: Future<Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Outcome::Errored(errors)) => {
                Poll::Ready(Outcome::fail(span_context(this.span, errors)))
            },
            other => other,
        }
    }
}

/// Builds a context error named after `span`.
///
/// [`Span::none()`] has no metadata and is reported as `unknown`.
fn span_context(span: &Span, errors: Errors) -> Error {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    Error::context(name, format!("in span '{}'", name), errors)
}

/// Extension trait for outcomes to nest their errors under a span context.
pub trait OutcomeSpanExt<T> {
    /// Uses the current span.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome_rail::async_ext::OutcomeSpanExt;
    /// use outcome_rail::Outcome;
    ///
    /// let failed = Outcome::<()>::fail("boom").with_current_span();
    /// assert_eq!(failed.errors()[0].context_label(), Some("unknown"));
    /// ```
    fn with_current_span(self) -> Outcome<T>;

    /// Uses the given span.
    fn with_span(self, span: &Span) -> Outcome<T>;
}

impl<T> OutcomeSpanExt<T> for Outcome<T> {
    fn with_current_span(self) -> Outcome<T> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Outcome<T> {
        self.merge_errors_with(|errors| span_context(span, errors))
    }
}

/// Nests a single error under the current span's context.
pub fn instrument_error(error: Error) -> Error {
    span_context(&Span::current(), Errors::single(error))
}
