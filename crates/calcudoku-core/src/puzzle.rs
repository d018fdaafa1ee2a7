//! Assembled puzzles and the solved-state check.

use serde::{Deserialize, Serialize};

use crate::{Cage, CandidateGrid, Position, SolutionGrid, Square};

/// An assembled puzzle: grid size, cage partition, and the hidden solution.
///
/// Puzzles are immutable once built. Player progress lives in a separate
/// [`CandidateGrid`], which [`is_solved_by`](Self::is_solved_by) checks
/// against the rules; the stored solution is one known answer and is not
/// consulted cell-by-cell during the check.
///
/// # Examples
///
/// ```
/// use calcudoku_core::{Cage, CandidateGrid, Operation, Position, Puzzle, SolutionGrid};
///
/// let solution: SolutionGrid = "12 21".parse()?;
/// let cages = vec![
///     Cage::new("A", 2, Operation::Multiply, vec![
///         Position::new(0, 0),
///         Position::new(0, 1),
///     ]),
///     Cage::new("B", 1, Operation::Subtract, vec![
///         Position::new(1, 0),
///         Position::new(1, 1),
///     ]),
/// ];
/// let puzzle = Puzzle::new("2x2-demo", 2, cages, solution);
///
/// assert!(!puzzle.is_solved_by(&puzzle.empty_candidate()));
/// let filled = CandidateGrid::from(puzzle.solution());
/// assert!(puzzle.is_solved_by(&filled));
/// # Ok::<(), calcudoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    id: String,
    size: u8,
    cages: Vec<Cage>,
    solution: SolutionGrid,
}

impl Puzzle {
    /// Assembles a puzzle from its parts.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero, if the solution grid size differs from
    /// `size`, or if the cages are not an exact partition of the grid (a cell
    /// outside the grid, claimed twice, or claimed by no cage).
    #[must_use]
    pub fn new(id: impl Into<String>, size: u8, cages: Vec<Cage>, solution: SolutionGrid) -> Self {
        assert!(size >= 1, "grid size must be at least 1");
        assert!(
            solution.size() == size,
            "solution size {} does not match puzzle size {size}",
            solution.size(),
        );
        let mut claimed = Square::filled(size, false);
        for cage in &cages {
            for &pos in cage.cells() {
                assert!(claimed.contains(pos), "cage cell {pos} lies outside the grid");
                assert!(!claimed[pos], "cell {pos} belongs to more than one cage");
                claimed[pos] = true;
            }
        }
        assert!(
            claimed.positions().all(|pos| claimed[pos]),
            "cages do not cover every cell of the grid",
        );
        Self { id: id.into(), size, cages, solution }
    }

    /// Returns the identifier of the puzzle.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the number of rows (and columns) of the grid.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the cages of the puzzle.
    #[must_use]
    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    /// Returns the stored solution grid.
    #[must_use]
    pub const fn solution(&self) -> &SolutionGrid {
        &self.solution
    }

    /// Creates an empty candidate grid matching the puzzle size.
    #[must_use]
    pub fn empty_candidate(&self) -> CandidateGrid {
        Square::filled(self.size, None)
    }

    /// Checks whether `candidate` is a complete, rule-satisfying solution.
    ///
    /// The check passes only when every cell is filled with a value in
    /// `1..=size`, no row or column repeats a value, and every cage
    /// constraint holds. A grid of the wrong size never passes. The check is
    /// read-only, so it can be repeated after further edits.
    ///
    /// Any grid meeting the rules is accepted, even if it differs from the
    /// stored solution.
    #[must_use]
    pub fn is_solved_by(&self, candidate: &CandidateGrid) -> bool {
        if candidate.size() != self.size {
            return false;
        }
        for row in 0..self.size {
            let values = (0..self.size).map(|col| candidate[Position::new(row, col)]);
            if !values_complete(values, self.size) {
                return false;
            }
        }
        for col in 0..self.size {
            let values = (0..self.size).map(|row| candidate[Position::new(row, col)]);
            if !values_complete(values, self.size) {
                return false;
            }
        }
        for cage in &self.cages {
            let mut values = Vec::with_capacity(cage.cells().len());
            for &pos in cage.cells() {
                let Some(value) = candidate[pos] else {
                    return false;
                };
                values.push(value);
            }
            if !cage.is_satisfied_by(&values) {
                return false;
            }
        }
        true
    }
}

/// Checks that every value is present, lies in `1..=size`, and never repeats.
fn values_complete(values: impl Iterator<Item = Option<u8>>, size: u8) -> bool {
    let mut seen = vec![false; usize::from(size) + 1];
    for value in values {
        let Some(value) = value else {
            return false;
        };
        if value == 0 || value > size || seen[usize::from(value)] {
            return false;
        }
        seen[usize::from(value)] = true;
    }
    true
}
