//! The core dispatcher.
//!
//! [`dispatch`] applies a continuation to a [`Possibly`] value, staying
//! synchronous when the value is immediate and suspending only when it is
//! deferred. It never wraps a result in more than one level of
//! [`Deferred`](crate::Deferred):
//!
//! - immediate input: the continuation's result is returned as-is, whether it
//!   is itself immediate or deferred;
//! - deferred input: the continuation is chained onto the deferred value and
//!   its result, immediate or deferred, is awaited inside that one chain.
//!
//! # Example
//!
//! ```rust
//! use possibly_async::{dispatch, Possibly};
//!
//! # tokio_test::block_on(async {
//! // Immediate in, immediate out.
//! let now = dispatch(Possibly::<_, String>::immediate(1), |v| {
//!     Ok(Possibly::immediate(v + 1))
//! });
//! assert_eq!(now.unwrap().into_immediate(), Some(2));
//!
//! // Deferred in, deferred out.
//! let later = dispatch(Possibly::<_, String>::deferred(async { Ok(1) }), |v| {
//!     Ok(Possibly::immediate(v + 1))
//! })
//! .unwrap();
//! assert!(later.is_deferred());
//! assert_eq!(later.await, Ok(2));
//! # });
//! ```

use crate::possibly::Possibly;

/// Apply `on_fulfilled` to `value`, synchronously if possible.
///
/// - If `value` is immediate, `on_fulfilled(value)` is called now and its
///   result is returned unchanged. An `Err` from `on_fulfilled` propagates
///   to the caller synchronously.
/// - If `value` is deferred, the result is always `Ok(Possibly::Deferred(_))`.
///   The deferred chain fulfills with `on_fulfilled`'s eventual result, and
///   a rejection of `value` propagates unchanged.
pub fn dispatch<'a, T, U, E, F>(
    value: Possibly<'a, T, E>,
    on_fulfilled: F,
) -> Result<Possibly<'a, U, E>, E>
where
    T: Send + 'a,
    U: Send + 'a,
    E: Send + 'a,
    F: FnOnce(T) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
{
    match value {
        Possibly::Immediate(value) => on_fulfilled(value),
        Possibly::Deferred(deferred) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("dispatch: chaining onto deferred value");
            Ok(Possibly::Deferred(deferred.and_then(on_fulfilled)))
        }
    }
}

/// Apply `on_fulfilled` to `value`, routing a deferred rejection to
/// `on_rejected`.
///
/// Behaves like [`dispatch`] on fulfillment. When `value` is deferred and
/// rejects, `on_rejected(reason)` supplies the outcome instead: its value
/// fulfills the chain, while its own `Err` or a deferred value that later
/// rejects becomes the chain's new rejection reason.
///
/// `on_rejected` is never called for an immediate `value`. A synchronous
/// `Err` from `on_fulfilled` on that path propagates to the caller and is
/// not handed to `on_rejected`.
pub fn dispatch_or_else<'a, T, U, E, F, G>(
    value: Possibly<'a, T, E>,
    on_fulfilled: F,
    on_rejected: G,
) -> Result<Possibly<'a, U, E>, E>
where
    T: Send + 'a,
    U: Send + 'a,
    E: Send + 'a,
    F: FnOnce(T) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
    G: FnOnce(E) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
{
    match value {
        Possibly::Immediate(value) => on_fulfilled(value),
        Possibly::Deferred(deferred) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("dispatch_or_else: chaining onto deferred value");
            Ok(Possibly::Deferred(
                deferred.and_then_or_else(on_fulfilled, on_rejected),
            ))
        }
    }
}
