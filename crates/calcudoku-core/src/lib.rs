//! Core data structures for Calcudoku (KenKen-style) puzzles.
//!
//! This crate provides the shared puzzle model used by generation and game
//! management components: grid coordinates and storage, arithmetic cage
//! constraints, and the assembled puzzle with its solved-state check.
//!
//! # Overview
//!
//! The crate is organized around three main concepts:
//!
//! 1. **Grid geometry** - Coordinates and storage
//!    - [`position`]: Zero-based `(row, col)` cell coordinates and adjacency
//!    - [`square`]: The generic row-major [`Square`] container plus the
//!      [`SolutionGrid`] and [`CandidateGrid`] aliases and their text formats
//!
//! 2. **Constraints** - Arithmetic over cell groups
//!    - [`cage`]: The [`Operation`] arithmetic and the [`Cage`] cell groups
//!      that partition a puzzle grid
//!
//! 3. **Puzzles** - The assembled, immutable artifact
//!    - [`puzzle`]: [`Puzzle`] assembly with partition checking and the
//!      rule-based [`is_solved_by`](Puzzle::is_solved_by) check
//!
//! # Examples
//!
//! ```
//! use calcudoku_core::{Cage, CandidateGrid, Operation, Position, Puzzle, SolutionGrid};
//!
//! let solution: SolutionGrid = "12 21".parse()?;
//! let cages = vec![
//!     Cage::new("A", 2, Operation::Multiply, vec![
//!         Position::new(0, 0),
//!         Position::new(0, 1),
//!     ]),
//!     Cage::new("B", 1, Operation::Subtract, vec![
//!         Position::new(1, 0),
//!         Position::new(1, 1),
//!     ]),
//! ];
//! let puzzle = Puzzle::new("2x2-demo", 2, cages, solution);
//!
//! // An empty grid is not a solution; the full solution is.
//! assert!(!puzzle.is_solved_by(&puzzle.empty_candidate()));
//! assert!(puzzle.is_solved_by(&CandidateGrid::from(puzzle.solution())));
//! # Ok::<(), calcudoku_core::ParseGridError>(())
//! ```

pub mod cage;
pub mod position;
pub mod puzzle;
pub mod square;

// Re-export commonly used types
pub use self::{
    cage::{Cage, Operation},
    position::Position,
    puzzle::Puzzle,
    square::{CandidateGrid, ParseGridError, Positions, SolutionGrid, Square},
};
