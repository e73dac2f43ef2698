//! Async sequencing utilities.
//!
//! Provides functions for awaiting many outcome-producing futures and
//! collecting all errors, mirroring [`transpose`](crate::outcome::transpose)
//! and [`merge`](crate::outcome::merge).

use alloc::vec::Vec;
use core::future::Future;

use crate::outcome::core::absorb;
use crate::outcome::sequence::finish;
use crate::outcome::Outcome;

/// Awaits every future in order and collects all values or all errors.
///
/// # Note
///
/// Futures are awaited **sequentially** (not in parallel) to maintain
/// runtime neutrality. For parallel execution, join the futures with a
/// runtime-specific combinator first and pass the results to
/// [`transpose`](crate::outcome::transpose).
///
/// # Example
///
/// ```rust
/// use core::future::ready;
/// use outcome_rail::async_ext::transpose_async;
/// use outcome_rail::{Error, Outcome};
///
/// # async fn run() {
/// let all = transpose_async([
///     ready(Outcome::ok(1)),
///     ready(Outcome::fail("a")),
///     ready(Outcome::fail("b")),
/// ])
/// .await;
/// assert_eq!(all.errors(), &[Error::new("a"), Error::new("b")]);
/// # }
/// ```
pub async fn transpose_async<T, Fut, I>(futures: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T>>,
{
    let iter = futures.into_iter();
    let (lower, upper) = iter.size_hint();
    let mut values = Vec::with_capacity(upper.unwrap_or(lower));
    let mut errors = None;

    for fut in iter {
        if let Some(value) = absorb(&mut errors, fut.await) {
            values.push(value);
        }
    }

    finish(errors, values)
}

/// Awaits every future in order, keeping only the errors.
pub async fn merge_async<T, Fut, I>(futures: I) -> Outcome<()>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T>>,
{
    let mut errors = None;
    for fut in futures {
        absorb(&mut errors, fut.await);
    }
    finish(errors, ())
}

/// Threads a value through async steps, each depending on the previous one.
///
/// Stops at the first failure; later steps are not called.
///
/// # Example
///
/// ```rust
/// use outcome_rail::async_ext::chain_async;
/// use outcome_rail::Outcome;
///
/// # async fn run() {
/// let steps: [fn(i32) -> core::future::Ready<Outcome<i32>>; 2] = [
///     |x| core::future::ready(Outcome::ok(x + 1)),
///     |x| core::future::ready(Outcome::ok(x * 10)),
/// ];
/// assert_eq!(chain_async(1, steps).await, Outcome::ok(20));
/// # }
/// ```
pub async fn chain_async<T, F, Fut>(initial: T, steps: impl IntoIterator<Item = F>) -> Outcome<T>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<T>>,
{
    let mut current = initial;

    for step in steps {
        match step(current).await {
            Outcome::Ok(value) => current = value,
            errored => return errored,
        }
    }

    Outcome::Ok(current)
}
