//! Sequential `map_values` over key-value entries.

use crate::possibly::Possibly;

/// Apply `step` to each value of a mapping, keeping its key.
///
/// Entries are visited in the iteration order of `entries`, so an ordered
/// map is processed in key order and an insertion-ordered collection in
/// insertion order. The caller picks the output collection `M`; it receives
/// every key paired with its transformed value. Escalation follows
/// [`map`](super::map): immediate while every step is immediate, otherwise
/// one deferred value resolving to the complete mapping.
///
/// # Example
///
/// ```rust
/// use possibly_async::{map_values, Possibly};
/// use std::collections::BTreeMap;
///
/// let input = BTreeMap::from([("x", 1), ("y", 2)]);
/// let result: Result<Possibly<'_, BTreeMap<_, _>, String>, String> =
///     map_values(input, |v, _| Ok(Possibly::immediate(v + 1)));
/// assert_eq!(
///     result.unwrap().into_immediate(),
///     Some(BTreeMap::from([("x", 2), ("y", 3)]))
/// );
/// ```
pub fn map_values<'a, I, K, T, U, M, E, F>(
    entries: I,
    mut step: F,
) -> Result<Possibly<'a, M, E>, E>
where
    I: IntoIterator<Item = (K, T)>,
    I::IntoIter: Send + 'a,
    K: Send + 'a,
    T: Send + 'a,
    U: Send + 'a,
    M: FromIterator<(K, U)> + Send + 'a,
    E: Send + 'a,
    F: FnMut(T, &K) -> Result<Possibly<'a, U, E>, E> + Send + 'a,
{
    let entries = entries.into_iter();
    let output = Vec::with_capacity(entries.size_hint().0);
    let collected = super::drive(
        "map_values",
        entries,
        output,
        move |(key, value), _| {
            let result = step(value, &key)?;
            Ok(result.map(move |value| (key, value)))
        },
        Vec::push,
    )?;
    Ok(collected.map(|pairs| pairs.into_iter().collect()))
}
