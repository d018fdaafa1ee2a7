//! Random Latin square construction.

use calcudoku_core::SolutionGrid;
use rand::{Rng, seq::SliceRandom as _};

/// Builds a random Latin square of the given size.
///
/// Starts from the cyclic square `((row + col) mod size) + 1` and applies
/// independent random row, column, and symbol permutations, drawn in that
/// order. Each permutation maps Latin squares to Latin squares, so every row
/// and column of the result is a permutation of `1..=size`.
///
/// # Panics
///
/// Panics if `size` is zero.
pub(crate) fn random_latin_square(size: u8, rng: &mut impl Rng) -> SolutionGrid {
    let n = usize::from(size);
    let row_order = random_permutation(n, rng);
    let col_order = random_permutation(n, rng);
    let symbol_order = random_permutation(n, rng);
    SolutionGrid::from_fn(size, |pos| {
        let base = (row_order[usize::from(pos.row())] + col_order[usize::from(pos.col())]) % n;
        cell_value(symbol_order[base])
    })
}

fn random_permutation(n: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}

/// Converts a zero-based symbol index into a one-based cell value.
const fn cell_value(index: usize) -> u8 {
    #[expect(clippy::cast_possible_truncation)]
    let value = (index + 1) as u8;
    value
}
