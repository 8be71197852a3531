use log::debug;

use crate::{Transposition, counting::num_unique_permutations};

/// Generates every unique length-`l` transposition sequence over `n`
/// elements, in a deterministic order.
///
/// Two sequences that realize the same net rearrangement are duplicates;
/// exactly one representative of each is produced. Duplicates never arise in
/// the first place because the lower indices of each sequence are forced to
/// strictly increase from one swap to the next, which pins down a single
/// ordering for every set of swaps that could otherwise commute.
///
/// Level zero is represented by a single empty sequence, the identity.
/// Levels beyond `n - 1` produce nothing, matching
/// [`num_unique_permutations`].
#[must_use]
pub fn enumerate_unique_permutations(n: usize, l: usize) -> Vec<Vec<Transposition>> {
    let total = num_unique_permutations(n, l);

    if l == 0 {
        return vec![Vec::new()];
    }

    let mut all = Vec::with_capacity(total);
    if total == 0 {
        return all;
    }

    let mut scratch = vec![Transposition::new(0, 1); l];
    fill_level(n, l, 0, 0, &mut scratch, &mut all);

    debug_assert_eq!(all.len(), total);
    debug!("{} unique sequences of {l} swaps over {n} elements", all.len());

    all
}

fn fill_level(
    n: usize,
    l: usize,
    depth: usize,
    min_first: usize,
    scratch: &mut [Transposition],
    all: &mut Vec<Vec<Transposition>>,
) {
    if depth == l {
        all.push(scratch.to_vec());
        return;
    }

    // Leave enough indices above `first` to place the remaining swaps
    let remaining = l - depth;
    for first in min_first..(n - remaining) {
        for second in (first + 1)..n {
            scratch[depth] = Transposition::new(first, second);
            fill_level(n, l, depth + 1, first + 1, scratch, all);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_swap_sequences_are_the_pairs_in_order() {
        let sequences = enumerate_unique_permutations(4, 1);
        let expected = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

        assert_eq!(sequences.len(), expected.len());
        for (sequence, (first, second)) in sequences.iter().zip(expected) {
            assert_eq!(sequence, &[Transposition::new(first, second)]);
        }
    }

    #[test]
    fn level_zero_is_one_empty_sequence() {
        assert_eq!(enumerate_unique_permutations(5, 0), vec![Vec::new()]);
    }

    #[test]
    fn too_deep_levels_have_no_sequences() {
        assert!(enumerate_unique_permutations(4, 4).is_empty());
        assert!(enumerate_unique_permutations(1, 1).is_empty());
    }

    #[test]
    fn lower_indices_strictly_increase_within_a_sequence() {
        for sequence in enumerate_unique_permutations(6, 3) {
            for window in sequence.windows(2) {
                assert!(window[0].first() < window[1].first());
            }
        }
    }
}
