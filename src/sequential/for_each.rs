//! Sequential `for_each`.

use crate::possibly::Possibly;

/// Run `step` on each item in order for its side effects.
///
/// `step` receives the item and its index. Results are discarded. If every
/// step is immediate the call returns `Ok(Possibly::Immediate(()))` without
/// suspending; otherwise it returns a single deferred value that fulfills
/// once the last step has resolved.
///
/// A synchronous `Err` before escalation is returned directly. After
/// escalation, an `Err` or a rejection from any step rejects the deferred
/// value and no further steps run.
///
/// # Example
///
/// ```rust
/// use possibly_async::{for_each, Possibly};
/// use std::sync::Mutex;
///
/// let log = Mutex::new(Vec::new());
/// let result = for_each(vec![1, 2], |v, _| {
///     log.lock().unwrap().push(v + 1);
///     Ok::<_, String>(Possibly::immediate(()))
/// });
/// assert!(result.unwrap().is_immediate());
/// assert_eq!(*log.lock().unwrap(), vec![2, 3]);
/// ```
pub fn for_each<'a, I, T, U, E, F>(items: I, step: F) -> Result<Possibly<'a, (), E>, E>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: Send + 'a,
    T: Send + 'a,
    U: Send + 'a,
    E: Send + 'a,
    F: FnMut(T, usize) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
{
    super::drive("for_each", items.into_iter(), (), step, |_, _| {})
}
