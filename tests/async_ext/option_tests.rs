use std::cell::{Cell, RefCell};
use std::future::ready;

use outcome_rail::prelude_async::*;

#[tokio::test]
async fn map_async_maps_some() {
    assert_eq!(Some(2).map_async(|x| async move { x * 3 }).await, Some(6));
}

#[tokio::test]
async fn none_never_calls_the_delegate() {
    let calls = Cell::new(0);

    let mapped = None::<i32>
        .map_async(|x| {
            calls.set(calls.get() + 1);
            async move { x }
        })
        .await;
    let bound = None::<i32>
        .and_then_async(|x| {
            calls.set(calls.get() + 1);
            async move { Some(x) }
        })
        .await;
    let combined = None::<i32>
        .and_then_with_async(
            |x| {
                calls.set(calls.get() + 1);
                let x = *x;
                async move { Some(x) }
            },
            |a, b| a + b,
        )
        .await;

    assert_eq!((mapped, bound, combined), (None, None, None));
    assert_eq!(calls.get(), 0);
}

#[tokio::test]
async fn and_then_async_binds() {
    let halved = Some(10)
        .and_then_async(|x| async move { (x % 2 == 0).then_some(x / 2) })
        .await;
    assert_eq!(halved, Some(5));

    let odd = Some(3).and_then_async(|x| async move { (x % 2 == 0).then_some(x / 2) }).await;
    assert_eq!(odd, None);
}

#[tokio::test]
async fn and_then_with_async_skips_combiner_on_none() {
    let combined = Cell::new(false);
    let result = Some(1)
        .and_then_with_async(
            |_| async { None::<i32> },
            |a, b| {
                combined.set(true);
                a + b
            },
        )
        .await;

    assert_eq!(result, None);
    assert!(!combined.get());

    let sum = Some(1)
        .and_then_with_async(
            |x| {
                let x = *x;
                async move { Some(x + 1) }
            },
            |a, b| a + b,
        )
        .await;
    assert_eq!(sum, Some(3));
}

#[tokio::test]
async fn and_then_with_n_async_combines_in_order() {
    let order = RefCell::new(Vec::new());
    let step = |id: i32| {
        let order = &order;
        move |x: &i32| {
            order.borrow_mut().push(id);
            ready(Some(*x * 10 + id))
        }
    };

    let two = Some(1).and_then_with2_async(step(1), step(2), |a, b, c| (a, b, c)).await;
    assert_eq!(two, Some((1, 11, 12)));

    let five = Some(1)
        .and_then_with5_async(
            step(1),
            step(2),
            step(3),
            step(4),
            step(5),
            |a, b, c, d, e, f| a + b + c + d + e + f,
        )
        .await;
    assert_eq!(five, Some(1 + 11 + 12 + 13 + 14 + 15));
    assert_eq!(*order.borrow(), [1, 2, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn and_then_with_n_async_stops_at_first_none() {
    let calls = Cell::new(0);
    let combined = Cell::new(false);
    let counted = |x: &i32| {
        calls.set(calls.get() + 1);
        ready(Some(*x))
    };

    let result = Some(1)
        .and_then_with4_async(
            counted,
            |_| ready(None::<i32>),
            counted,
            counted,
            |a, b, c, d, e| {
                combined.set(true);
                a + b + c + d + e
            },
        )
        .await;

    assert_eq!(result, None);
    assert_eq!(calls.get(), 1);
    assert!(!combined.get());

    let untouched = None::<i32>
        .and_then_with3_async(counted, counted, counted, |a, b, c, d| a + b + c + d)
        .await;
    assert_eq!(untouched, None);
    assert_eq!(calls.get(), 1);
}
