//! Enumeration of visiting orders.
//!
//! Orderings are produced in lexicographic order of input positions, so the
//! first one is always the input order. The order selector relies on this
//! sequence being stable to break ties.

/// All orderings of `0..n`, lexicographically. Yields a single (possibly
/// empty) ordering when `n < 2`.
fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..n).collect();
    let mut permutations = vec![current.clone()];

    while next_permutation(&mut current) {
        permutations.push(current.clone());
    }

    permutations
}

/// All orderings of `items`. The input slice is left untouched and every
/// ordering is an independent vector.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    index_permutations(items.len())
        .into_iter()
        .map(|order| order.into_iter().map(|index| items[index].clone()).collect())
        .collect()
}

/// Rearranges `indices` into the next lexicographic permutation. Returns
/// `false` once the last permutation has been reached.
fn next_permutation(indices: &mut [usize]) -> bool {
    let Some(pivot) = indices.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };

    let Some(successor) = indices.iter().rposition(|&value| value > indices[pivot]) else {
        return false;
    };

    indices.swap(pivot, successor);
    indices[pivot + 1..].reverse();

    true
}
