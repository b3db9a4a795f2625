// `any` is taken by proptest's prelude, so seqtools::any is called by path
use proptest::prelude::*;

use seqtools::{all, chunk, count, filter, flatten, map, skip_while, take_while, Error};

proptest! {
    #[test]
    fn filter_splits_input(s in prop::collection::vec(any::<i32>(), 0..64), pivot in any::<i32>()) {
        let kept = filter(&s, |x| *x < pivot);
        let dropped = filter(&s, |x| *x >= pivot);
        prop_assert_eq!(kept.len() + dropped.len(), s.len());
    }

    #[test]
    fn all_is_not_any_negated(s in prop::collection::vec(0u8..10, 0..64), limit in 0u8..10) {
        prop_assert_eq!(all(&s, |x| *x < limit), !seqtools::any(&s, |x| *x >= limit));
    }

    #[test]
    fn count_matches_filter(s in prop::collection::vec(0u8..5, 0..64), v in 0u8..5) {
        prop_assert_eq!(count(&s, &v), filter(&s, |x| *x == v).len());
    }

    #[test]
    fn map_keeps_length(s in prop::collection::vec(any::<i64>(), 0..64)) {
        prop_assert_eq!(map(&s, |x| x.to_string()).len(), s.len());
    }

    #[test]
    fn flatten_undoes_chunk(s in prop::collection::vec(any::<u16>(), 0..64), k in 1usize..20) {
        let result = chunk(&s, k).unwrap();
        prop_assert_eq!(flatten(result.chunks()), s.clone());
        prop_assert_eq!(result.len(), s.len().div_ceil(k));
        prop_assert_eq!(result.total(), s.len());
        prop_assert_eq!(result.remainder(), s.len() % k);
    }

    #[test]
    fn chunk_sizes(s in prop::collection::vec(any::<u8>(), 1..64), k in 1usize..20) {
        let result = chunk(&s, k).unwrap();
        let (last, rest) = result.chunks().split_last().unwrap();
        prop_assert!(rest.iter().all(|c| c.len() == k));
        if result.remainder() == 0 {
            prop_assert_eq!(last.len(), k);
        } else {
            prop_assert_eq!(last.len(), result.remainder());
        }
    }

    #[test]
    fn chunk_rejects_zero(s in prop::collection::vec(any::<u8>(), 0..16)) {
        prop_assert_eq!(chunk(&s, 0), Err(Error::InvalidArgument(0)));
    }

    #[test]
    fn take_while_prefix_satisfies(s in prop::collection::vec(0u8..10, 0..64), limit in 0u8..10) {
        let prefix = take_while(&s, |x| *x < limit);
        prop_assert!(prefix.iter().all(|x| *x < limit));
        prop_assert_eq!(prefix, &s[..prefix.len()]);
        if let Some(next) = s.get(prefix.len()) {
            prop_assert!(*next >= limit);
        }
    }

    #[test]
    fn skip_while_starts_at_first_failure(s in prop::collection::vec(0u8..10, 0..64), limit in 0u8..10) {
        let suffix = skip_while(&s, |x| *x < limit);
        let start = s.len() - suffix.len();
        prop_assert_eq!(suffix, &s[start..]);
        prop_assert!(s[..start].iter().all(|x| *x < limit));
        if let Some(first) = suffix.first() {
            prop_assert!(*first >= limit);
        }
    }
}
