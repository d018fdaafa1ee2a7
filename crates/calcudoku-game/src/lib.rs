//! Game session management for Calcudoku puzzles.
//!
//! This crate layers player state on top of the immutable puzzles produced
//! by generation. A [`Game`] owns one puzzle and one candidate grid, accepts
//! validated cell edits, and reports when the grid solves the puzzle. It is
//! UI-agnostic: rendering and input handling belong to the embedding
//! application.
//!
//! # Examples
//!
//! ```
//! use calcudoku_core::Position;
//! use calcudoku_game::Game;
//! use calcudoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let puzzle =
//!     PuzzleGenerator::new(4).generate_with_seed(PuzzleSeed::from_phrase("docs"));
//! let mut game = Game::new(puzzle);
//!
//! game.set_cell(Position::new(0, 0), 3)?;
//! game.clear_cell(Position::new(0, 0))?;
//! assert!(!game.is_solved());
//! # Ok::<(), calcudoku_game::GameError>(())
//! ```

pub use self::game::{Game, GameError};

mod game;
