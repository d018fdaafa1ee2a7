//! Game sessions over a fixed puzzle.

use calcudoku_core::{CandidateGrid, Position, Puzzle};
use derive_more::{Display, Error};

/// Errors from player input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell lies outside the puzzle grid.
    #[display("position {position} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// The puzzle grid size.
        size: u8,
    },
    /// The entered value lies outside the puzzle's value range.
    #[display("value {value} is outside 1..={size}")]
    ValueOutOfRange {
        /// The rejected value.
        value: u8,
        /// The puzzle grid size.
        size: u8,
    },
}

/// A Calcudoku game session.
///
/// Pairs an immutable [`Puzzle`] with the player's candidate grid. Cell edits
/// are validated against the grid bounds and the puzzle's `1..=size` value
/// range; the session never checks edits against the solution, so wrong
/// entries are allowed and only [`is_solved`](Self::is_solved) judges the
/// grid.
///
/// # Examples
///
/// ```
/// use calcudoku_game::Game;
/// use calcudoku_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::default().generate();
/// let mut game = Game::new(puzzle);
/// assert!(!game.is_solved());
///
/// let solution = game.puzzle().solution().clone();
/// for pos in solution.positions() {
///     game.set_cell(pos, solution[pos]).unwrap();
/// }
/// assert!(game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    grid: CandidateGrid,
}

impl Game {
    /// Starts a new session with an empty candidate grid.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let grid = puzzle.empty_candidate();
        Self { puzzle, grid }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the player's candidate grid.
    #[must_use]
    pub const fn grid(&self) -> &CandidateGrid {
        &self.grid
    }

    /// Returns the player's entry at `pos`.
    ///
    /// Empty cells and positions outside the grid both read as `None`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<u8> {
        self.grid.get(pos).copied().flatten()
    }

    /// Writes `value` into the cell at `pos`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `pos` is outside the grid or `value` is outside
    /// `1..=size`.
    pub fn set_cell(&mut self, pos: Position, value: u8) -> Result<(), GameError> {
        self.check_bounds(pos)?;
        let size = self.puzzle.size();
        if value == 0 || value > size {
            return Err(GameError::ValueOutOfRange { value, size });
        }
        self.grid[pos] = Some(value);
        Ok(())
    }

    /// Empties the cell at `pos`.
    ///
    /// Clearing an already empty cell is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if `pos` is outside the grid.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.check_bounds(pos)?;
        self.grid[pos] = None;
        Ok(())
    }

    /// Empties every cell, restarting the session on the same puzzle.
    pub fn reset(&mut self) {
        self.grid = self.puzzle.empty_candidate();
    }

    /// Returns `true` if the candidate grid currently solves the puzzle.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved_by(&self.grid)
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GameError> {
        if self.grid.contains(pos) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { position: pos, size: self.puzzle.size() })
        }
    }
}
