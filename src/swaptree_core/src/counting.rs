//! Closed-form counts for the enumeration in [`crate::enumerate`].
//!
//! Everything here is a `const fn` over `usize` so callers can size
//! fixed-length output arrays at compile time.

/// The number of index pairs `(i, j)` with `i < j` drawable from `n` indices.
#[must_use]
pub const fn num_unique_pairs(n: usize) -> usize {
    if n == 0 {
        return 0;
    }

    n * (n - 1) / 2
}

/// The number of index pairs `(i, j)` with `i < j` and `i >= min`.
#[must_use]
pub const fn num_unique_pairs_with_min(n: usize, min: usize) -> usize {
    if min + 2 > n {
        return 0;
    }

    (n - min) * (n - min - 1) / 2
}

/// The number of index pairs `(i, j)` with `i < j` and `i < max`.
///
/// `max` must be at most `n - 1`.
#[must_use]
pub const fn num_unique_pairs_with_max(n: usize, max: usize) -> usize {
    if n == 0 {
        return 0;
    }

    (2 * n * max - max * max - max) / 2
}

/// The number of unique length-`l` transposition sequences over `n` elements
/// whose lower indices all lie strictly above `min`.
///
/// This is the recurrence behind [`num_unique_permutations`]: each sequence
/// extends a shorter one with a swap whose lower index sits above everything
/// chosen so far, and the factor `n - i - 1` counts the upper indices
/// available to a given lower index `i`.
#[must_use]
pub const fn num_unique_permutations_from_min(n: usize, l: usize, min: usize) -> usize {
    if l == 0 {
        return 1;
    }
    if min + 2 > n {
        return 0;
    }

    let mut total = 0;
    let mut i = min + 1;
    while i + 2 <= n {
        total += (n - i - 1) * num_unique_permutations_from_min(n, l - 1, i);
        i += 1;
    }

    total
}

/// The number of unique net permutations of `n` elements reachable by exactly
/// `l` transpositions.
///
/// Level zero counts the identity alone. Levels beyond `n - 1` count zero
/// because no sequence of that length can keep its lower indices strictly
/// increasing.
#[must_use]
pub const fn num_unique_permutations(n: usize, l: usize) -> usize {
    if l == 0 {
        return 1;
    }
    if l + 1 > n {
        return 0;
    }

    let mut total = 0;
    let mut i = 0;
    while i + 2 <= n {
        total += (n - i - 1) * num_unique_permutations_from_min(n, l - 1, i);
        i += 1;
    }

    total
}
