//! The step result type: a value that is either here now or arriving later.
//!
//! [`Possibly`] is the explicit two-variant union every combinator in this
//! crate consumes and produces. Callbacks return
//! `Result<Possibly<'a, U, E>, E>`: the outer `Err` is a synchronous failure,
//! raised before any deferred value exists, while a rejection inside the
//! deferred variant surfaces only when it is awaited.
//!
//! # Example
//!
//! ```rust
//! use possibly_async::Possibly;
//!
//! # tokio_test::block_on(async {
//! let now: Possibly<'_, i32, String> = Possibly::immediate(1);
//! assert!(now.is_immediate());
//!
//! let later: Possibly<'_, i32, String> = Possibly::deferred(async { Ok(1) });
//! assert!(later.is_deferred());
//!
//! // Both shapes can be awaited.
//! assert_eq!(now.await, Ok(1));
//! assert_eq!(later.await, Ok(1));
//! # });
//! ```

use std::future::{Future, IntoFuture};

use futures::future::{self, Either, Ready};

use crate::deferred::Deferred;
use crate::dispatch::{dispatch, dispatch_or_else};

/// A value that is available immediately or only after a deferred
/// computation completes.
#[derive(Debug)]
pub enum Possibly<'a, T, E> {
    /// The value is available now.
    Immediate(T),
    /// The value will be available once the deferred computation settles.
    Deferred(Deferred<'a, T, E>),
}

impl<'a, T, E> Possibly<'a, T, E> {
    // ========== Constructors ==========

    /// Create an immediate value.
    #[inline]
    pub fn immediate(value: T) -> Self {
        Possibly::Immediate(value)
    }

    /// Create a deferred value from a future.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'a,
    {
        Possibly::Deferred(Deferred::new(future))
    }

    /// Create a deferred value that rejects with `reason`.
    pub fn rejected(reason: E) -> Self
    where
        T: Send + 'a,
        E: Send + 'a,
    {
        Possibly::Deferred(Deferred::err(reason))
    }

    // ========== Predicates ==========

    /// Returns `true` if the value is available now.
    #[inline]
    pub fn is_immediate(&self) -> bool {
        matches!(self, Possibly::Immediate(_))
    }

    /// Returns `true` if the value is deferred.
    ///
    /// This is the capability check the dispatcher branches on: a deferred
    /// value exposes continuation registration, an immediate one does not.
    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Possibly::Deferred(_))
    }

    // ========== Extractors ==========

    /// Returns the immediate value, if any.
    pub fn into_immediate(self) -> Option<T> {
        match self {
            Possibly::Immediate(value) => Some(value),
            Possibly::Deferred(_) => None,
        }
    }

    /// Returns the deferred value, if any.
    pub fn into_deferred(self) -> Option<Deferred<'a, T, E>> {
        match self {
            Possibly::Immediate(_) => None,
            Possibly::Deferred(deferred) => Some(deferred),
        }
    }

    // ========== Transformations ==========

    /// Transform the value without changing its shape.
    ///
    /// An immediate value is transformed now; a deferred value is
    /// transformed when it fulfills.
    pub fn map<U, F>(self, f: F) -> Possibly<'a, U, E>
    where
        T: 'a,
        E: 'a,
        F: FnOnce(T) -> U + Send + 'a,
    {
        match self {
            Possibly::Immediate(value) => Possibly::Immediate(f(value)),
            Possibly::Deferred(deferred) => Possibly::Deferred(deferred.map(f)),
        }
    }

    /// Transform the rejection reason of a deferred value.
    ///
    /// Immediate values carry no rejection and pass through unchanged.
    pub fn map_err<E2, F>(self, f: F) -> Possibly<'a, T, E2>
    where
        T: 'a,
        E: 'a,
        F: FnOnce(E) -> E2 + Send + 'a,
    {
        match self {
            Possibly::Immediate(value) => Possibly::Immediate(value),
            Possibly::Deferred(deferred) => Possibly::Deferred(deferred.map_err(f)),
        }
    }

    /// Method form of [`dispatch`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use possibly_async::Possibly;
    ///
    /// let result = Possibly::<_, String>::immediate(1)
    ///     .then(|v| Ok(Possibly::immediate(v + 1)));
    /// assert_eq!(result.unwrap().into_immediate(), Some(2));
    /// ```
    pub fn then<U, F>(self, on_fulfilled: F) -> Result<Possibly<'a, U, E>, E>
    where
        T: Send + 'a,
        U: Send + 'a,
        E: Send + 'a,
        F: FnOnce(T) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
    {
        dispatch(self, on_fulfilled)
    }

    /// Method form of [`dispatch_or_else`].
    pub fn then_or_else<U, F, G>(
        self,
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
        dispatch_or_else(self, on_fulfilled, on_rejected)
    }
}

impl<'a, T, E> From<Deferred<'a, T, E>> for Possibly<'a, T, E> {
    fn from(deferred: Deferred<'a, T, E>) -> Self {
        Possibly::Deferred(deferred)
    }
}

impl<'a, T, E> IntoFuture for Possibly<'a, T, E> {
    type Output = Result<T, E>;
    type IntoFuture = Either<Ready<Result<T, E>>, Deferred<'a, T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Possibly::Immediate(value) => Either::Left(future::ok(value)),
            Possibly::Deferred(deferred) => Either::Right(deferred),
        }
    }
}
