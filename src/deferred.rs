//! Deferred values - results that become available once a future completes.
//!
//! A [`Deferred`] is a type-erased, `Send` future resolving to `Result<T, E>`.
//! `Ok` is fulfillment, `Err` is rejection. It is the deferred half of
//! [`Possibly`]; the combinators in this crate only ever produce one level of
//! `Deferred`, never a `Deferred` resolving to another `Deferred`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt, TryFutureExt};

use crate::possibly::Possibly;

/// A result that will become available later, either fulfilled (`Ok`) or
/// rejected (`Err`).
///
/// `Deferred` implements [`Future`], so it can be awaited directly or handed
/// to any executor.
///
/// # Example
///
/// ```rust
/// use possibly_async::Deferred;
///
/// # tokio_test::block_on(async {
/// let deferred = Deferred::<_, String>::new(async { Ok(21) });
/// let doubled = deferred.map(|x| x * 2);
/// assert_eq!(doubled.await, Ok(42));
/// # });
/// ```
pub struct Deferred<'a, T, E> {
    future: BoxFuture<'a, Result<T, E>>,
}

impl<T, E> std::fmt::Debug for Deferred<'_, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("future", &"<future>")
            .finish()
    }
}

impl<'a, T, E> Deferred<'a, T, E> {
    /// Wrap a future as a deferred value.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'a,
    {
        Deferred {
            future: future.boxed(),
        }
    }

    /// A deferred value that fulfills with `value` on first poll.
    pub fn ok(value: T) -> Self
    where
        T: Send + 'a,
        E: Send + 'a,
    {
        Deferred::new(future::ok(value))
    }

    /// A deferred value that rejects with `reason` on first poll.
    pub fn err(reason: E) -> Self
    where
        T: Send + 'a,
        E: Send + 'a,
    {
        Deferred::new(future::err(reason))
    }

    /// Unwrap the underlying boxed future.
    pub fn into_inner(self) -> BoxFuture<'a, Result<T, E>> {
        self.future
    }

    /// Transform the fulfilled value, leaving rejections untouched.
    pub fn map<U, F>(self, f: F) -> Deferred<'a, U, E>
    where
        T: 'a,
        E: 'a,
        F: FnOnce(T) -> U + Send + 'a,
    {
        Deferred::new(self.future.map_ok(f))
    }

    /// Transform the rejection reason, leaving fulfillment untouched.
    pub fn map_err<E2, F>(self, f: F) -> Deferred<'a, T, E2>
    where
        T: 'a,
        E: 'a,
        F: FnOnce(E) -> E2 + Send + 'a,
    {
        Deferred::new(self.future.map_err(f))
    }

    /// Chain a continuation onto fulfillment.
    ///
    /// The continuation's own result is awaited inside the same future, so
    /// an immediate result and a deferred result both come out as a single
    /// level of `Deferred`. Rejections of `self` skip the continuation and
    /// propagate unchanged; an `Err` returned by the continuation becomes the
    /// new rejection.
    pub fn and_then<U, F>(self, on_fulfilled: F) -> Deferred<'a, U, E>
    where
        T: Send + 'a,
        U: Send + 'a,
        E: Send + 'a,
        F: FnOnce(T) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
    {
        Deferred::new(async move {
            let value = self.future.await?;
            on_fulfilled(value)?.await
        })
    }

    /// Chain continuations onto both fulfillment and rejection.
    ///
    /// Exactly one of the two continuations runs. Whatever the chosen
    /// continuation produces, including its own `Err` or a deferred value
    /// that later rejects, replaces the original outcome. A failure raised
    /// by `on_fulfilled` is not routed to `on_rejected`.
    pub fn and_then_or_else<U, F, G>(
        self,
        on_fulfilled: F,
        on_rejected: G,
    ) -> Deferred<'a, U, E>
    where
        T: Send + 'a,
        U: Send + 'a,
        E: Send + 'a,
        F: FnOnce(T) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
        G: FnOnce(E) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
    {
        Deferred::new(async move {
            match self.future.await {
                Ok(value) => on_fulfilled(value)?.await,
                Err(reason) => on_rejected(reason)?.await,
            }
        })
    }
}

impl<T, E> Future for Deferred<'_, T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn later<T: Send + 'static>(value: Result<T, String>) -> Deferred<'static, T, String> {
        Deferred::new(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            value
        })
    }

    #[tokio::test]
    async fn test_ok_and_err_resolve_on_first_poll() {
        assert_eq!(Deferred::<_, String>::ok(1).await, Ok(1));
        assert_eq!(
            Deferred::<i32, _>::err("E".to_string()).await,
            Err("E".to_string())
        );
    }

    #[tokio::test]
    async fn test_map_and_map_err() {
        assert_eq!(later(Ok(2)).map(|x| x * 10).await, Ok(20));
        assert_eq!(
            later::<i32>(Err("E".into()))
                .map_err(|e| format!("{} (mapped)", e))
                .await,
            Err("E (mapped)".to_string())
        );
    }

    #[tokio::test]
    async fn test_and_then_flattens_deferred_continuation() {
        let chained = later(Ok(1)).and_then(|x| Ok(Possibly::Deferred(later(Ok(x + 1)))));
        assert_eq!(chained.await, Ok(2));
    }

    #[tokio::test]
    async fn test_and_then_skips_continuation_on_rejection() {
        let chained = later::<i32>(Err("E".into())).and_then(|_| {
            Err::<Possibly<'static, i32, String>, _>("continuation ran".to_string())
        });
        assert_eq!(chained.await, Err("E".to_string()));
    }

    #[tokio::test]
    async fn test_and_then_or_else_does_not_route_fulfillment_failure_to_handler() {
        let chained = later(Ok(1)).and_then_or_else(
            |_| Err::<Possibly<'static, i32, String>, _>("from fulfilled".to_string()),
            |_| Ok(Possibly::Immediate(0)),
        );
        assert_eq!(chained.await, Err("from fulfilled".to_string()));
    }

    #[tokio::test]
    async fn test_into_inner_round_trips_through_new() {
        let inner = later(Ok(3)).map(|x| x + 1).into_inner();
        assert_eq!(Deferred::new(inner).await, Ok(4));
        assert_eq!(
            Deferred::<i32, _>::err("E".to_string()).into_inner().await,
            Err("E".to_string())
        );
    }

    #[test]
    fn test_debug_hides_future() {
        let deferred = Deferred::<i32, String>::ok(1);
        assert_eq!(format!("{:?}", deferred), "Deferred { future: \"<future>\" }");
    }
}
