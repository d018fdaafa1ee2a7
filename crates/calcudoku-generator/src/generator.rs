//! Puzzle assembly.

use calcudoku_core::Puzzle;
use log::debug;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{PuzzleSeed, carve::carve_cages, latin::random_latin_square};

/// Grid size used when callers do not ask for one.
pub const DEFAULT_SIZE: u8 = 4;

/// Generates Calcudoku puzzles of a fixed grid size.
///
/// Generation runs in three steps: build a random Latin square, carve it
/// into constrained cages, and freeze the result into an immutable
/// [`Puzzle`]. All randomness comes from a [`PuzzleSeed`], so a generator is
/// stateless and the same seed always reproduces the same puzzle. Values are
/// cheap to copy and safe to share across threads.
///
/// # Examples
///
/// ```
/// use calcudoku_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(4);
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
///
/// let puzzle = generator.generate_with_seed(seed);
/// assert_eq!(puzzle.size(), 4);
/// assert_eq!(generator.generate_with_seed(seed), puzzle);
/// # Ok::<(), calcudoku_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    size: u8,
}

impl PuzzleGenerator {
    /// Creates a generator for `size`×`size` puzzles.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size >= 1, "grid size must be at least 1");
        Self { size }
    }

    /// Returns the grid size this generator produces.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> Puzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed always yields the same puzzle, cage layout, constraints,
    /// and identifiers included.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Puzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let solution = random_latin_square(self.size, &mut rng);
        let cages = carve_cages(&solution, &mut rng);
        let size = self.size;
        let id = format!("{size}x{size}-{}", seed.hex_prefix());
        debug!("generated puzzle {id} with {count} cages", count = cages.len());
        Puzzle::new(id, size, cages, solution)
    }
}

impl Default for PuzzleGenerator {
    /// A generator for [`DEFAULT_SIZE`] grids.
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
