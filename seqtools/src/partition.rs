// Both return views into the input; nothing is copied.

/// The longest prefix of `seq` whose elements all satisfy `predicate`.
///
/// Stops at the first element that fails, even if later elements would
/// match again.
pub fn take_while<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> &[T] {
    let end = seq
        .iter()
        .position(|item| !predicate(item))
        .unwrap_or(seq.len());
    &seq[..end]
}

/// The suffix of `seq` starting at the first element that does not satisfy
/// `predicate`, inclusive.
///
/// If every element satisfies `predicate` the result is empty.
pub fn skip_while<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> &[T] {
    match seq.iter().position(|item| !predicate(item)) {
        Some(start) => &seq[start..],
        None => &seq[seq.len()..],
    }
}
