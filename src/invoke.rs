//! Guarded invocation - run a producer and dispatch on what it produced.
//!
//! [`invoke_or_else`] gives a single failure contract for both "failed before
//! producing anything" and "produced a deferred value that later rejected":
//! either way the rejection handler sees the reason. [`invoke`] has no
//! handler, so a synchronous failure from the producer reaches the caller
//! unmodified.

use crate::dispatch::{dispatch, dispatch_or_else};
use crate::possibly::Possibly;

/// Call `producer` and dispatch its result to `on_fulfilled`.
///
/// An `Err` returned by `producer` propagates to the caller unchanged.
///
/// # Example
///
/// ```rust
/// use possibly_async::{invoke, Possibly};
///
/// let result = invoke(
///     || Err::<Possibly<'_, i32, String>, _>("1".to_string()),
///     |v| Ok(Possibly::immediate(v + 1)),
/// );
/// assert_eq!(result.unwrap_err(), "1");
/// ```
pub fn invoke<'a, T, U, E, P, F>(
    producer: P,
    on_fulfilled: F,
) -> Result<Possibly<'a, U, E>, E>
where
    T: Send + 'a,
    U: Send + 'a,
    E: Send + 'a,
    P: FnOnce() -> Result<Possibly<'a, T, E>, E>,
    F: FnOnce(T) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
{
    dispatch(producer()?, on_fulfilled)
}

/// Call `producer`, handing any failure to `on_rejected`.
///
/// - `producer` returns `Err(reason)`: `on_rejected(reason)` is called
///   synchronously and its result is the outcome.
/// - `producer` returns a value: it goes through [`dispatch_or_else`] with
///   the same handlers, so a deferred rejection is handled the same way.
///
/// # Example
///
/// ```rust
/// use possibly_async::{invoke_or_else, Possibly};
///
/// let result = invoke_or_else(
///     || Err::<Possibly<'_, i32, String>, _>("1".to_string()),
///     |v| Ok(Possibly::immediate((v + 1).to_string())),
///     |reason| Ok(Possibly::immediate(format!("{} (caught)", reason))),
/// );
/// assert_eq!(result.unwrap().into_immediate(), Some("1 (caught)".to_string()));
/// ```
pub fn invoke_or_else<'a, T, U, E, P, F, G>(
    producer: P,
    on_fulfilled: F,
    on_rejected: G,
) -> Result<Possibly<'a, U, E>, E>
where
    T: Send + 'a,
    U: Send + 'a,
    E: Send + 'a,
    P: FnOnce() -> Result<Possibly<'a, T, E>, E>,
    F: FnOnce(T) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
    G: FnOnce(E) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
{
    match producer() {
        Ok(value) => dispatch_or_else(value, on_fulfilled, on_rejected),
        Err(reason) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("invoke_or_else: producer failed synchronously");
            on_rejected(reason)
        }
    }
}
