//! Sequential collection combinators.
//!
//! [`for_each`], [`map`] and [`map_values`] apply a step to each element in
//! order. They stay synchronous while every step is immediate; the first
//! deferred step escalates the whole call, and the rest of the loop is then
//! driven from inside a single deferred value. Once escalated, the call never
//! reports an immediate result again.
//!
//! At most one step is in flight: element `i + 1` is not started until
//! element `i`'s step has fully resolved.
//!
//! # Example
//!
//! ```rust
//! use possibly_async::{sequential, Possibly};
//!
//! # tokio_test::block_on(async {
//! // Every step immediate: the result is immediate.
//! let now = sequential::map(vec![1, 2], |v, _| Ok::<_, String>(Possibly::immediate(v + 1)));
//! assert_eq!(now.unwrap().into_immediate(), Some(vec![2, 3]));
//!
//! // One deferred step: the result is deferred.
//! let later = sequential::map(vec![1, 2], |v, index| {
//!     Ok::<_, String>(if index == 0 {
//!         Possibly::deferred(async move { Ok(v + 1) })
//!     } else {
//!         Possibly::immediate(v + 1)
//!     })
//! })
//! .unwrap();
//! assert!(later.is_deferred());
//! assert_eq!(later.await, Ok(vec![2, 3]));
//! # });
//! ```

mod for_each;
mod map;
mod map_values;

pub use for_each::for_each;
pub use map::map;
pub use map_values::map_values;

use crate::deferred::Deferred;
use crate::possibly::Possibly;

/// Where a sequential loop stopped running synchronously.
enum Phase<'a, U, E> {
    /// Every step so far was immediate and the input is exhausted.
    Immediate,
    /// A step returned a deferred value; the loop continues inside it.
    Escalated { index: usize, pending: Deferred<'a, U, E> },
}

/// Drive `step` over `items` in index order, folding each result into `acc`.
///
/// Runs synchronously until a step is deferred. From then on the remaining
/// items, `acc`, and both closures move into one deferred future that awaits
/// each step before starting the next. A synchronous `Err` after escalation
/// rejects that future.
///
/// The deferred future is lazy. Dropping it before it settles cancels the
/// remaining steps: no later element's step is ever started.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn drive<'a, I, U, A, E, S, F>(
    combinator: &'static str,
    items: I,
    mut acc: A,
    mut step: S,
    mut fold: F,
) -> Result<Possibly<'a, A, E>, E>
where
    I: Iterator + Send + 'a,
    I::Item: Send + 'a,
    U: Send + 'a,
    A: Send + 'a,
    E: Send + 'a,
    S: FnMut(I::Item, usize) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
    F: FnMut(&mut A, U) + Send + 'a,
{
    let mut items = items.enumerate();

    let phase = loop {
        let Some((index, item)) = items.next() else {
            break Phase::Immediate;
        };
        match step(item, index)? {
            Possibly::Immediate(value) => fold(&mut acc, value),
            Possibly::Deferred(pending) => break Phase::Escalated { index, pending },
        }
    };

    match phase {
        Phase::Immediate => Ok(Possibly::Immediate(acc)),
        Phase::Escalated { index, pending } => {
            #[cfg(feature = "tracing")]
            tracing::trace!(combinator, index, "escalated to deferred phase");

            Ok(Possibly::Deferred(Deferred::new(async move {
                fold(&mut acc, pending.await?);
                for (index, item) in items {
                    let value = step(item, index)?.await?;
                    fold(&mut acc, value);
                }
                Ok(acc)
            })))
        }
    }
}
