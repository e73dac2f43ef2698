//! Tests for async sequencing functions.

use std::cell::RefCell;
use std::future::{ready, Ready};

use outcome_rail::prelude_async::*;

fn positive(n: i32) -> Ready<Outcome<i32>> {
    ready(Outcome::ok_if(n > 0, n, "must be positive"))
}

fn even(n: i32) -> Ready<Outcome<i32>> {
    ready(Outcome::ok_if(n % 2 == 0, n, "must be even"))
}

fn small(n: i32) -> Ready<Outcome<i32>> {
    ready(Outcome::ok_if(n < 100, n, "must be less than 100"))
}

#[tokio::test]
async fn transpose_async_all_ok() {
    let result = transpose_async([positive(10), even(10), small(10)]).await;
    assert_eq!(result, Outcome::ok(vec![10, 10, 10]));
}

#[tokio::test]
async fn transpose_async_keeps_error_order() {
    let result = transpose_async([positive(-5), even(3), small(50)]).await;
    assert_eq!(result.errors(), &[Error::new("must be positive"), Error::new("must be even")]);
}

#[tokio::test]
async fn transpose_async_empty() {
    let result = transpose_async(Vec::<Ready<Outcome<i32>>>::new()).await;
    assert_eq!(result, Outcome::ok(vec![]));
}

#[tokio::test]
async fn merge_async_keeps_only_errors() {
    assert_eq!(merge_async([positive(1), even(2)]).await, Outcome::ok(()));

    let merged = merge_async([positive(-1), even(2), small(500)]).await;
    assert_eq!(
        merged.errors(),
        &[Error::new("must be positive"), Error::new("must be less than 100")]
    );
}

#[tokio::test]
async fn chain_async_threads_values() {
    let steps: [fn(i32) -> Ready<Outcome<i32>>; 3] = [
        |x| ready(Outcome::ok(x + 1)),
        |x| ready(Outcome::ok(x * 10)),
        |x| ready(Outcome::ok(x - 5)),
    ];
    assert_eq!(chain_async(1, steps).await, Outcome::ok(15));
}

#[tokio::test]
async fn chain_async_stops_at_first_failure() {
    let ran = RefCell::new(Vec::new());
    let result = chain_async(
        1,
        [0, 1, 2].map(|id| {
            let ran = &ran;
            move |x: i32| {
                ran.borrow_mut().push(id);
                ready(if id == 1 {
                    Outcome::fail(format!("step {id} failed"))
                } else {
                    Outcome::ok(x)
                })
            }
        }),
    )
    .await;

    assert_eq!(result, Outcome::fail("step 1 failed"));
    assert_eq!(*ran.borrow(), [0, 1]);
}
