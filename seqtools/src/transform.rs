/// Call `f` on every element of `seq`, in order.
///
/// A panic in `f` is not caught.
pub fn for_each<T>(seq: &[T], f: impl FnMut(&T)) {
    seq.iter().for_each(f)
}

/// Transform every element of `seq` with `f`.
///
/// The result has the same length as `seq` and `result[i] == f(&seq[i])`.
pub fn map<T, U>(seq: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    seq.iter().map(f).collect()
}

/// The elements of `seq` that satisfy `predicate`, in their original order.
pub fn filter<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T>
where
    T: Clone,
{
    seq.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Concatenate nested sequences into one.
///
/// Works over anything that can be viewed as a slice, so both `&[Vec<T>]`
/// and the chunks of a [`crate::ChunkResult`] can be flattened.
pub fn flatten<T, S>(nested: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let total = nested.iter().map(|inner| inner.as_ref().len()).sum();
    let mut flattened = Vec::with_capacity(total);
    for inner in nested {
        flattened.extend_from_slice(inner.as_ref());
    }
    flattened
}
