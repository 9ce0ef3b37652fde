//! Helpers over flat value sequences, the exchange format between tree kinds.

/// Collapses runs of equal values in a sorted sequence into `(value, occurrences)` pairs.
pub(crate) fn dedup_with_counts<T: PartialEq>(sorted: Vec<T>) -> Vec<(T, usize)> {
    let mut out: Vec<(T, usize)> = Vec::with_capacity(sorted.len());
    for value in sorted {
        match out.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => out.push((value, 1)),
        }
    }
    out
}

/// Merges `(value, count)` pairs that compare equal after sorting them. The input may come from
/// a tree that keeps equal values in separate nodes.
pub(crate) fn sort_and_merge<T: Ord>(mut pairs: Vec<(T, usize)>) -> Vec<(T, usize)> {
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    let mut out: Vec<(T, usize)> = Vec::with_capacity(pairs.len());
    for (value, count) in pairs {
        match out.last_mut() {
            Some((last, total)) if *last == value => *total += count,
            _ => out.push((value, count)),
        }
    }
    out
}

/// Size of the left subtree of the root in a complete binary tree of `n` nodes.
///
/// The levels above the last are full; the last level fills from the left, so the left subtree
/// receives up to half of the last level's capacity before the right subtree gets any.
pub(crate) fn complete_left_size(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    // Index of the last level, counting the root as level 0.
    let last_level = usize::BITS - 1 - n.leading_zeros();
    let above_last = (1usize << last_level) - 1;
    let on_last = n - above_last;
    let half_capacity = 1usize << (last_level - 1);
    (half_capacity - 1) + on_last.min(half_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_counts_runs() {
        assert_eq!(
            dedup_with_counts(vec![1, 1, 3, 5, 5, 5]),
            vec![(1, 2), (3, 1), (5, 3)]
        );
        assert!(dedup_with_counts(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn merge_sums_counts() {
        assert_eq!(
            sort_and_merge(vec![(5, 1), (3, 2), (5, 4), (1, 1)]),
            vec![(1, 1), (3, 2), (5, 5)]
        );
    }

    #[test]
    fn left_sizes_of_complete_trees() {
        // n:        0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
        let expected = [0, 0, 1, 1, 2, 3, 3, 3, 4, 5, 6, 7, 7, 7, 7, 7];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(complete_left_size(n), *want, "n = {}", n);
        }
    }
}
