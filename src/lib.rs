//! # possibly-async
//!
//! Write a callback once and run it whether its input is here now or only
//! arriving later.
//!
//! A step result is a [`Possibly`]: either [`Possibly::Immediate`] or
//! [`Possibly::Deferred`]. The combinators stay synchronous for as long as
//! every input is immediate and only suspend once something is actually
//! deferred, so callers never pay for a future they did not need and never
//! see a deferred value wrapped inside another.
//!
//! - [`dispatch`] / [`dispatch_or_else`]: apply a continuation to one value.
//! - [`invoke`] / [`invoke_or_else`]: run a producer, catching its
//!   synchronous failure with the same handler as a deferred rejection.
//! - [`for_each`], [`map`], [`map_values`]: strictly sequential collection
//!   combinators that escalate to a single deferred result on the first
//!   deferred step.
//!
//! Failures come in two flavours. A synchronous failure is the outer `Err`
//! of `Result<Possibly<'a, T, E>, E>`; a rejection is the `Err` a deferred
//! value resolves to when awaited.
//!
//! ## Quick Example
//!
//! ```rust
//! use possibly_async::{map, Possibly};
//!
//! # tokio_test::block_on(async {
//! fn lookup(id: u32) -> Result<Possibly<'static, String, String>, String> {
//!     if id == 0 {
//!         // Cached: no need to suspend.
//!         Ok(Possibly::immediate("root".to_string()))
//!     } else {
//!         Ok(Possibly::deferred(async move { Ok(format!("user-{}", id)) }))
//!     }
//! }
//!
//! let cached = map(vec![0, 0], |id, _| lookup(id)).unwrap();
//! assert_eq!(cached.into_immediate(), Some(vec!["root".to_string(), "root".to_string()]));
//!
//! let fetched = map(vec![0, 7], |id, _| lookup(id)).unwrap();
//! assert!(fetched.is_deferred());
//! assert_eq!(fetched.await, Ok(vec!["root".to_string(), "user-7".to_string()]));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod deferred;
pub mod dispatch;
pub mod invoke;
pub mod possibly;
pub mod sequential;
pub mod testing;

// Re-exports
pub use deferred::Deferred;
pub use dispatch::{dispatch, dispatch_or_else};
pub use invoke::{invoke, invoke_or_else};
pub use possibly::Possibly;
pub use sequential::{for_each, map, map_values};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::deferred::Deferred;
    pub use crate::dispatch::{dispatch, dispatch_or_else};
    pub use crate::invoke::{invoke, invoke_or_else};
    pub use crate::possibly::Possibly;
    pub use crate::sequential::{for_each, map, map_values};
}
