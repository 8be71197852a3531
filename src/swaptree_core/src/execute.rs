use thiserror::Error;

use crate::Transposition;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecuteError {
    #[error("P({first},{second}) is out of bounds for a collection of {len} elements")]
    OutOfBounds {
        first: usize,
        second: usize,
        len: usize,
    },
}

/// Position-wise access for fixed-length collections that can be permuted.
pub trait Permutable {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swaps the elements at positions `first` and `second`.
    fn swap_positions(&mut self, first: usize, second: usize);
}

impl<T> Permutable for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn swap_positions(&mut self, first: usize, second: usize) {
        self.as_mut_slice().swap(first, second);
    }
}

impl<T, const N: usize> Permutable for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn swap_positions(&mut self, first: usize, second: usize) {
        self.as_mut_slice().swap(first, second);
    }
}

impl<T> Permutable for Box<[T]> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn swap_positions(&mut self, first: usize, second: usize) {
        (**self).swap(first, second);
    }
}

/// Applies `sequence` to a copy of `input`, swap by swap in sequence order.
///
/// The input is left untouched and every pair is validated against the
/// collection before any element moves, so a failure never hands back a
/// half-permuted collection.
///
/// # Errors
///
/// [`ExecuteError::OutOfBounds`] if any pair reaches past the end of `input`.
pub fn execute_permutation<C>(sequence: &[Transposition], input: &C) -> Result<C, ExecuteError>
where
    C: Permutable + Clone,
{
    let len = input.len();

    // `first < second` holds by construction, so checking `second` suffices
    if let Some(pair) = sequence.iter().find(|pair| pair.second() >= len) {
        return Err(ExecuteError::OutOfBounds {
            first: pair.first(),
            second: pair.second(),
            len,
        });
    }

    let mut permuted = input.clone();
    for pair in sequence {
        permuted.swap_positions(pair.first(), pair.second());
    }

    Ok(permuted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_swaps_in_sequence_order() {
        let letters = vec!['a', 'b', 'c'];

        let sequence = [Transposition::new(0, 1), Transposition::new(1, 2)];
        let permuted = execute_permutation(&sequence, &letters).unwrap();
        assert_eq!(permuted, vec!['b', 'c', 'a']);

        let reversed = [Transposition::new(1, 2), Transposition::new(0, 1)];
        let permuted = execute_permutation(&reversed, &letters).unwrap();
        assert_eq!(permuted, vec!['c', 'a', 'b']);
    }

    #[test]
    fn input_is_never_mutated() {
        let input = vec![0, 1, 2, 3];
        let permuted = execute_permutation(&[Transposition::new(0, 3)], &input).unwrap();

        assert_eq!(input, vec![0, 1, 2, 3]);
        assert_eq!(permuted, vec![3, 1, 2, 0]);
    }

    #[test]
    fn empty_sequence_is_the_identity() {
        let input = vec![4, 5, 6];
        let permuted = execute_permutation(&[], &input).unwrap();
        assert_eq!(permuted, input);
    }

    #[test]
    fn works_on_arrays_and_boxed_slices() {
        let permuted = execute_permutation(&[Transposition::new(0, 2)], &[1, 2, 3]).unwrap();
        assert_eq!(permuted, [3, 2, 1]);

        let boxed: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
        let permuted = execute_permutation(&[Transposition::new(0, 2)], &boxed).unwrap();
        assert_eq!(permuted.as_ref(), [3, 2, 1]);
    }

    #[test]
    fn rejects_out_of_bounds_pairs() {
        let input = vec![0, 1, 2];
        let sequence = [Transposition::new(0, 1), Transposition::new(1, 5)];
        let result = execute_permutation(&sequence, &input);

        assert_eq!(
            result,
            Err(ExecuteError::OutOfBounds {
                first: 1,
                second: 5,
                len: 3
            })
        );
    }
}
