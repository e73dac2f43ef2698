use core::future::Future;

/// Async counterparts of the [`Option`] combinators.
///
/// The continuation is awaited only for `Some`; for `None` it is never
/// called and no future is created. The `and_then_with*_async` generators
/// are awaited one after another in argument order, and the first `None`
/// stops the chain.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::OptionAsyncExt;
///
/// # async fn run() {
/// let doubled = Some(21).map_async(|x| async move { x * 2 }).await;
/// assert_eq!(doubled, Some(42));
///
/// let total = Some(2)
///     .and_then_with_async(|x| { let x = *x; async move { Some(x * 10) } }, |x, y| x + y)
///     .await;
/// assert_eq!(total, Some(22));
/// # }
/// ```
pub trait OptionAsyncExt<T>: Sized {
    /// Maps the value with an async function.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Binds an async computation.
    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>;

    /// Binds an async computation on a borrowed value and combines both
    /// values; the combiner runs only when the computation yields `Some`.
    fn and_then_with_async<U, R, F, Fut, C>(
        self,
        f: F,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Option<U>>,
        C: FnOnce(T, U) -> R;

    fn and_then_with2_async<U1, U2, R, F1, Fut1, F2, Fut2, C>(
        self,
        f1: F1,
        f2: F2,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Option<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Option<U2>>,
        C: FnOnce(T, U1, U2) -> R;

    fn and_then_with3_async<U1, U2, U3, R, F1, Fut1, F2, Fut2, F3, Fut3, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Option<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Option<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Option<U3>>,
        C: FnOnce(T, U1, U2, U3) -> R;

    #[allow(clippy::too_many_arguments)]
    fn and_then_with4_async<U1, U2, U3, U4, R, F1, Fut1, F2, Fut2, F3, Fut3, F4, Fut4, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Option<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Option<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Option<U3>>,
        F4: FnOnce(&T) -> Fut4,
        Fut4: Future<Output = Option<U4>>,
        C: FnOnce(T, U1, U2, U3, U4) -> R;

    /// Awaits five dependent generators and combines all six values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core::future::ready;
    /// use outcome_rail::async_ext::OptionAsyncExt;
    ///
    /// # async fn run() {
    /// let sum = Some(1)
    ///     .and_then_with5_async(
    ///         |x| ready(Some(x + 1)),
    ///         |x| ready(Some(x + 2)),
    ///         |x| ready(Some(x + 3)),
    ///         |x| ready(Some(x + 4)),
    ///         |x| ready(Some(x + 5)),
    ///         |a, b, c, d, e, f| a + b + c + d + e + f,
    ///     )
    ///     .await;
    /// assert_eq!(sum, Some(21));
    /// # }
    /// ```
    #[allow(clippy::too_many_arguments)]
    fn and_then_with5_async<
        U1,
        U2,
        U3,
        U4,
        U5,
        R,
        F1,
        Fut1,
        F2,
        Fut2,
        F3,
        Fut3,
        F4,
        Fut4,
        F5,
        Fut5,
        C,
    >(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
        f5: F5,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Option<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Option<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Option<U3>>,
        F4: FnOnce(&T) -> Fut4,
        Fut4: Future<Output = Option<U4>>,
        F5: FnOnce(&T) -> Fut5,
        Fut5: Future<Output = Option<U5>>,
        C: FnOnce(T, U1, U2, U3, U4, U5) -> R;
}

impl<T> OptionAsyncExt<T> for Option<T> {
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self {
                Some(value) => Some(f(value).await),
                None => None,
            }
        }
    }

    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        async move {
            match self {
                Some(value) => f(value).await,
                None => None,
            }
        }
    }

    fn and_then_with_async<U, R, F, Fut, C>(
        self,
        f: F,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Option<U>>,
        C: FnOnce(T, U) -> R,
    {
        async move {
            let value = self?;
            let u = f(&value).await?;
            Some(combine(value, u))
        }
    }

    fn and_then_with2_async<U1, U2, R, F1, Fut1, F2, Fut2, C>(
        self,
        f1: F1,
        f2: F2,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Option<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Option<U2>>,
        C: FnOnce(T, U1, U2) -> R,
    {
        async move {
            let value = self?;
            let u1 = f1(&value).await?;
            let u2 = f2(&value).await?;
            Some(combine(value, u1, u2))
        }
    }

    fn and_then_with3_async<U1, U2, U3, R, F1, Fut1, F2, Fut2, F3, Fut3, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Option<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Option<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Option<U3>>,
        C: FnOnce(T, U1, U2, U3) -> R,
    {
        async move {
            let value = self?;
            let u1 = f1(&value).await?;
            let u2 = f2(&value).await?;
            let u3 = f3(&value).await?;
            Some(combine(value, u1, u2, u3))
        }
    }

    fn and_then_with4_async<U1, U2, U3, U4, R, F1, Fut1, F2, Fut2, F3, Fut3, F4, Fut4, C>(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Option<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Option<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Option<U3>>,
        F4: FnOnce(&T) -> Fut4,
        Fut4: Future<Output = Option<U4>>,
        C: FnOnce(T, U1, U2, U3, U4) -> R,
    {
        async move {
            let value = self?;
            let u1 = f1(&value).await?;
            let u2 = f2(&value).await?;
            let u3 = f3(&value).await?;
            let u4 = f4(&value).await?;
            Some(combine(value, u1, u2, u3, u4))
        }
    }

    fn and_then_with5_async<
        U1,
        U2,
        U3,
        U4,
        U5,
        R,
        F1,
        Fut1,
        F2,
        Fut2,
        F3,
        Fut3,
        F4,
        Fut4,
        F5,
        Fut5,
        C,
    >(
        self,
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
        f5: F5,
        combine: C,
    ) -> impl Future<Output = Option<R>>
    where
        F1: FnOnce(&T) -> Fut1,
        Fut1: Future<Output = Option<U1>>,
        F2: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = Option<U2>>,
        F3: FnOnce(&T) -> Fut3,
        Fut3: Future<Output = Option<U3>>,
        F4: FnOnce(&T) -> Fut4,
        Fut4: Future<Output = Option<U4>>,
        F5: FnOnce(&T) -> Fut5,
        Fut5: Future<Output = Option<U5>>,
        C: FnOnce(T, U1, U2, U3, U4, U5) -> R,
    {
        async move {
            let value = self?;
            let u1 = f1(&value).await?;
            let u2 = f2(&value).await?;
            let u3 = f3(&value).await?;
            let u4 = f4(&value).await?;
            let u5 = f5(&value).await?;
            Some(combine(value, u1, u2, u3, u4, u5))
        }
    }
}
