//! Testing utilities for code built on [`Possibly`].
//!
//! The interesting property of most callers is the *shape* of a result:
//! whether a call stayed synchronous or escalated. The assertion macros here
//! check the shape and hand back the payload.
//!
//! # Examples
//!
//! ```rust
//! use possibly_async::{assert_deferred, assert_immediate, map, Possibly};
//! use possibly_async::testing::yielding;
//!
//! let now = assert_immediate!(map(vec![1, 2], |v, _| {
//!     Ok::<_, String>(Possibly::immediate(v * 2))
//! }));
//! assert_eq!(now, vec![2, 4]);
//!
//! let later = assert_deferred!(map(vec![1, 2], |v, _| Ok::<_, String>(yielding(Ok(v * 2)))));
//! assert_eq!(futures::executor::block_on(later), Ok(vec![2, 4]));
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::possibly::Possibly;

/// Assert that a combinator returned an immediate value, yielding it.
///
/// Panics on a deferred value or a synchronous failure.
#[macro_export]
macro_rules! assert_immediate {
    ($result:expr) => {
        match $result {
            Ok($crate::Possibly::Immediate(value)) => value,
            Ok($crate::Possibly::Deferred(_)) => {
                panic!("Expected Immediate, got Deferred");
            }
            Err(e) => {
                panic!("Expected Immediate, got synchronous failure: {:?}", e);
            }
        }
    };
}

/// Assert that a combinator returned a deferred value, yielding the
/// [`Deferred`](crate::Deferred).
///
/// Panics on an immediate value or a synchronous failure.
#[macro_export]
macro_rules! assert_deferred {
    ($result:expr) => {
        match $result {
            Ok($crate::Possibly::Deferred(deferred)) => deferred,
            Ok($crate::Possibly::Immediate(_)) => {
                panic!("Expected Deferred, got Immediate");
            }
            Err(e) => {
                panic!("Expected Deferred, got synchronous failure: {:?}", e);
            }
        }
    };
}

/// Assert that a combinator failed synchronously, yielding the reason.
#[macro_export]
macro_rules! assert_sync_failure {
    ($result:expr) => {
        match $result {
            Err(e) => e,
            Ok($crate::Possibly::Immediate(_)) => {
                panic!("Expected synchronous failure, got Immediate");
            }
            Ok($crate::Possibly::Deferred(_)) => {
                panic!("Expected synchronous failure, got Deferred");
            }
        }
    };
}

/// A deferred value that is pending on its first poll and settles with
/// `outcome` on the next.
///
/// It needs no timer, so it works under any executor, including
/// `futures::executor::block_on`.
pub fn yielding<'a, T, E>(outcome: Result<T, E>) -> Possibly<'a, T, E>
where
    T: Send + 'a,
    E: Send + 'a,
{
    Possibly::deferred(YieldOnce {
        outcome: Some(outcome),
        yielded: false,
    })
}

struct YieldOnce<T, E> {
    outcome: Option<Result<T, E>>,
    yielded: bool,
}

impl<T, E> Unpin for YieldOnce<T, E> {}

impl<T, E> Future for YieldOnce<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if !self.yielded {
            self.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        match self.outcome.take() {
            Some(outcome) => Poll::Ready(outcome),
            None => panic!("YieldOnce polled after completion"),
        }
    }
}
