//! Sequential `map`.

use crate::possibly::Possibly;

/// Apply `step` to each item in order, collecting the results by index.
///
/// The output has the same length and order as the input. Immediate results
/// are recorded as they are produced; after the first deferred result, each
/// remaining step is awaited before the next one starts. The aggregate is
/// immediate only if every step was.
///
/// Steps that produce differently-typed values per index return a sum type,
/// and each index keeps exactly the variant its step produced.
///
/// # Example
///
/// ```rust
/// use possibly_async::{map, Possibly};
///
/// let result = map(vec![1, 2], |v, _| Ok::<_, String>(Possibly::immediate(v + 1)));
/// assert_eq!(result.unwrap().into_immediate(), Some(vec![2, 3]));
/// ```
pub fn map<'a, I, T, U, E, F>(items: I, step: F) -> Result<Possibly<'a, Vec<U>, E>, E>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: Send + 'a,
    T: Send + 'a,
    U: Send + 'a,
    E: Send + 'a,
    F: FnMut(T, usize) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
{
    let items = items.into_iter();
    let output = Vec::with_capacity(items.size_hint().0);
    super::drive("map", items, output, step, Vec::push)
}
