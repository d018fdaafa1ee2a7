//! Procedural generation of Calcudoku (KenKen-style) puzzles.
//!
//! This crate turns a random seed into a complete, immutable
//! [`Puzzle`](calcudoku_core::Puzzle). Generation runs as a pipeline:
//!
//! 1. **Latin square** - build a fully solved grid by scrambling a cyclic
//!    square with random row, column, and symbol permutations
//! 2. **Cage carving** - partition the grid into contiguous cages of one to
//!    four cells by randomized region growth
//! 3. **Constraint selection** - draw a consistent arithmetic operation and
//!    target for each cage from its solution values
//! 4. **Singleton limiting** - merge excess single-cell cages into adjacent
//!    cages so most of the grid stays arithmetic
//!
//! Every step draws from a single PCG stream keyed by a [`PuzzleSeed`], so
//! generation is fully reproducible: the same seed gives the same puzzle,
//! cage layout and identifiers included. Generators carry no mutable state
//! and can be shared freely across threads.
//!
//! # Examples
//!
//! ```
//! use calcudoku_core::CandidateGrid;
//! use calcudoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! // Replayable generation from a phrase-derived seed.
//! let generator = PuzzleGenerator::new(5);
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("weekly-34"));
//!
//! // The stored solution satisfies the puzzle it came from.
//! assert!(puzzle.is_solved_by(&CandidateGrid::from(puzzle.solution())));
//! ```

pub use self::{
    generator::{DEFAULT_SIZE, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

mod carve;
mod constraint;
mod generator;
mod latin;
mod limit;
mod seed;
