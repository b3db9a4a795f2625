/// Count how many elements in `seq` are equal to `value`.
///
/// This always looks at every element.
pub fn count<T>(seq: &[T], value: &T) -> usize
where
    T: PartialEq,
{
    seq.iter().filter(|item| *item == value).count()
}

/// Check whether every element satisfies `predicate`.
///
/// Stops at the first element that fails. An empty slice is vacuously true.
pub fn all<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> bool {
    seq.iter().all(|item| predicate(item))
}

/// Check whether at least one element satisfies `predicate`.
///
/// Stops at the first element that matches. An empty slice is false.
pub fn any<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> bool {
    seq.iter().any(|item| predicate(item))
}
