#![warn(clippy::pedantic)]

use std::fmt;

pub mod counting;
pub mod enumerate;
pub mod execute;

pub use counting::{
    num_unique_pairs, num_unique_pairs_with_max, num_unique_pairs_with_min,
    num_unique_permutations, num_unique_permutations_from_min,
};
pub use enumerate::enumerate_unique_permutations;
pub use execute::{ExecuteError, Permutable, execute_permutation};

/// A swap of the elements at two distinct positions of a collection.
///
/// The lower position always comes first; passing the positions in the other
/// order is a contract violation, not a request to reorder them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transposition {
    first: usize,
    second: usize,
}

impl Transposition {
    /// # Panics
    ///
    /// Panics if `first >= second`.
    #[must_use]
    pub const fn new(first: usize, second: usize) -> Transposition {
        assert!(first < second);

        Transposition { first, second }
    }

    #[must_use]
    pub const fn first(self) -> usize {
        self.first
    }

    #[must_use]
    pub const fn second(self) -> usize {
        self.second
    }
}

impl fmt::Display for Transposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P({},{})", self.first, self.second)
    }
}
