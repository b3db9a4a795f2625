use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

/// Elements grouped by key, as produced by [`group_by`].
pub type Groups<K, T> = HashMap<K, Vec<T>>;

/// Group the elements of `seq` by the key `key_fn` computes for them.
///
/// Within a group elements keep the order in which they appear in `seq`.
/// The order of the groups themselves is unspecified.
pub fn group_by<T, K>(seq: &[T], mut key_fn: impl FnMut(&T) -> K) -> Groups<K, T>
where
    T: Clone,
    K: Eq + Hash,
{
    let mut groups: Groups<K, T> = HashMap::new();
    for item in seq {
        groups.entry(key_fn(item)).or_default().push(item.clone());
    }
    groups
}
