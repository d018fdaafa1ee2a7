//! Generic square grid storage.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::Position;

/// A fully filled grid of cell values `1..=size`.
pub type SolutionGrid = Square<u8>;

/// A player-editable grid; `None` marks an empty cell.
pub type CandidateGrid = Square<Option<u8>>;

/// A square grid of cells stored in row-major order and indexed by
/// [`Position`].
///
/// # Examples
///
/// ```
/// use calcudoku_core::{Position, Square};
///
/// let grid = Square::from_fn(3, |pos| pos.row() + pos.col());
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Position::new(1, 2)], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square<T> {
    size: u8,
    cells: Vec<T>,
}

impl<T> Square<T> {
    /// Builds a grid by calling `f` for every position in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn from_fn(size: u8, f: impl FnMut(Position) -> T) -> Self {
        assert!(size >= 1, "grid size must be at least 1");
        let cells = positions_of(size).map(f).collect();
        Self { size, cells }
    }

    /// Builds a grid with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn filled(size: u8, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(size, |_| value.clone())
    }

    /// Builds a grid from rows of cells.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, holds more than 255 rows, or has rows whose
    /// lengths differ from the row count.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcudoku_core::{Position, Square};
    ///
    /// let grid = Square::from_rows(vec![vec![1, 2], vec![2, 1]]);
    /// assert_eq!(grid[Position::new(1, 0)], 2);
    /// ```
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let size = u8::try_from(rows.len()).expect("at most 255 rows");
        assert!(size >= 1, "grid size must be at least 1");
        let mut cells = Vec::with_capacity(usize::from(size) * usize::from(size));
        for row in rows {
            assert!(
                row.len() == usize::from(size),
                "row length {} does not match grid size {size}",
                row.len(),
            );
            cells.extend(row);
        }
        Self { size, cells }
    }

    /// Returns the number of rows (and columns) of the grid.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Returns the cell at `pos`, or `None` if `pos` is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[linear_index(self.size, pos)])
    }

    /// Iterates over all positions of the grid in row-major order.
    #[must_use]
    pub fn positions(&self) -> Positions {
        positions_of(self.size)
    }

    /// Iterates over the rows of the grid as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(usize::from(self.size))
    }
}

impl<T> Index<Position> for Square<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        assert!(self.contains(pos), "position {pos} out of bounds for size {}", self.size);
        &self.cells[linear_index(self.size, pos)]
    }
}

impl<T> IndexMut<Position> for Square<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        assert!(self.contains(pos), "position {pos} out of bounds for size {}", self.size);
        &mut self.cells[linear_index(self.size, pos)]
    }
}

impl From<&SolutionGrid> for CandidateGrid {
    /// Converts a solved grid into a fully filled candidate grid.
    fn from(solution: &SolutionGrid) -> Self {
        Self {
            size: solution.size,
            cells: solution.cells.iter().copied().map(Some).collect(),
        }
    }
}

const fn linear_index(size: u8, pos: Position) -> usize {
    pos.row() as usize * size as usize + pos.col() as usize
}

/// Row-major iterator over the positions of a `size`×`size` grid.
#[derive(Debug, Clone)]
pub struct Positions {
    size: u8,
    row: u8,
    col: u8,
}

/// Iterates over all positions of a `size`×`size` grid in row-major order.
#[must_use]
pub(crate) const fn positions_of(size: u8) -> Positions {
    Positions { size, row: 0, col: 0 }
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.row >= self.size {
            return None;
        }
        let pos = Position::new(self.row, self.col);
        self.col += 1;
        if self.col >= self.size {
            self.col = 0;
            self.row += 1;
        }
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.row >= self.size {
            0
        } else {
            let size = usize::from(self.size);
            size * size - (usize::from(self.row) * size + usize::from(self.col))
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl fmt::Display for Square<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Square<Option<u8>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match value {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

/// Errors from parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The number of cells is not a positive square number.
    #[display("cell count {count} is not a positive square number")]
    NotSquare {
        /// Number of non-whitespace characters found.
        count: usize,
    },
    /// The text contains a character that is not a digit, an empty-cell
    /// marker, or whitespace.
    #[display("unexpected character {character:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// An empty-cell marker appeared while parsing a fully filled grid.
    #[display("empty cell at {position} in a fully filled grid")]
    EmptyCell {
        /// Position of the empty cell.
        position: Position,
    },
}

impl FromStr for Square<Option<u8>> {
    type Err = ParseGridError;

    /// Parses a candidate grid from text.
    ///
    /// Cells are single characters read in row-major order: `1`-`9` for
    /// values, and `.`, `_`, or `0` for empty cells. Whitespace, including
    /// line breaks, is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcudoku_core::{CandidateGrid, Position};
    ///
    /// let grid: CandidateGrid = "12 2_".parse()?;
    /// assert_eq!(grid[Position::new(0, 1)], Some(2));
    /// assert_eq!(grid[Position::new(1, 1)], None);
    /// # Ok::<(), calcudoku_core::ParseGridError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            match character {
                '.' | '_' | '0' => cells.push(None),
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = (u32::from(character) - u32::from('0')) as u8;
                    cells.push(Some(value));
                }
                _ => return Err(ParseGridError::UnexpectedCharacter { character }),
            }
        }
        let count = cells.len();
        let size = (1..=u8::MAX)
            .find(|&size| usize::from(size) * usize::from(size) == count)
            .ok_or(ParseGridError::NotSquare { count })?;
        Ok(Self { size, cells })
    }
}

impl FromStr for Square<u8> {
    type Err = ParseGridError;

    /// Parses a fully filled grid from text.
    ///
    /// Uses the same format as [`CandidateGrid`] parsing, but every cell must
    /// hold a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcudoku_core::{Position, SolutionGrid};
    ///
    /// let grid: SolutionGrid = "12 21".parse()?;
    /// assert_eq!(grid[Position::new(1, 0)], 2);
    /// assert!("12 2_".parse::<SolutionGrid>().is_err());
    /// # Ok::<(), calcudoku_core::ParseGridError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid: Square<Option<u8>> = s.parse()?;
        let mut cells = Vec::with_capacity(grid.cell_count());
        for pos in grid.positions() {
            cells.push(grid[pos].ok_or(ParseGridError::EmptyCell { position: pos })?);
        }
        Ok(Self { size: grid.size, cells })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_fn_fills_row_major() {
        let grid = Square::from_fn(2, |pos| (pos.row(), pos.col()));
        assert_eq!(grid[Position::new(0, 0)], (0, 0));
        assert_eq!(grid[Position::new(0, 1)], (0, 1));
        assert_eq!(grid[Position::new(1, 0)], (1, 0));
        assert_eq!(grid[Position::new(1, 1)], (1, 1));
    }

    #[test]
    fn test_filled_and_index_mut() {
        let mut grid = Square::filled(3, 0u8);
        grid[Position::new(2, 1)] = 7;
        assert_eq!(grid[Position::new(2, 1)], 7);
        assert_eq!(grid[Position::new(0, 0)], 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Square::filled(2, 0u8);
        assert_eq!(grid.get(Position::new(0, 1)), Some(&0));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.get(Position::new(2, 0)), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let grid = Square::filled(2, 0u8);
        let _ = grid[Position::new(2, 0)];
    }

    #[test]
    #[should_panic(expected = "row length")]
    fn test_from_rows_rejects_ragged_rows() {
        let _ = Square::from_rows(vec![vec![1, 2], vec![3]]);
    }

    #[test]
    #[should_panic(expected = "grid size must be at least 1")]
    fn test_from_fn_rejects_zero_size() {
        let _ = Square::from_fn(0, |_| 0u8);
    }

    #[test]
    fn test_positions_row_major_order() {
        let grid = Square::filled(2, ());
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_positions_len() {
        let grid = Square::filled(3, ());
        let mut positions = grid.positions();
        assert_eq!(positions.len(), 9);
        let _ = positions.next();
        assert_eq!(positions.len(), 8);
    }

    #[test]
    fn test_rows_yields_slices() {
        let grid = Square::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, [&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn test_display_solution_grid() {
        let grid = SolutionGrid::from_rows(vec![vec![1, 2], vec![2, 1]]);
        assert_eq!(grid.to_string(), "1 2\n2 1");
    }

    #[test]
    fn test_display_candidate_grid_marks_empty_cells() {
        let grid: CandidateGrid = "1_ .2".parse().unwrap();
        assert_eq!(grid.to_string(), "1 _\n_ 2");
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let grid: CandidateGrid = "._ 0.".parse().unwrap();
        assert!(grid.positions().all(|pos| grid[pos].is_none()));
    }

    #[test]
    fn test_parse_rejects_non_square_count() {
        assert_eq!(
            "123".parse::<CandidateGrid>(),
            Err(ParseGridError::NotSquare { count: 3 })
        );
        assert_eq!("".parse::<CandidateGrid>(), Err(ParseGridError::NotSquare { count: 0 }));
    }

    #[test]
    fn test_parse_rejects_unexpected_character() {
        assert_eq!(
            "12 2x".parse::<CandidateGrid>(),
            Err(ParseGridError::UnexpectedCharacter { character: 'x' })
        );
    }

    #[test]
    fn test_parse_solution_rejects_empty_cell() {
        assert_eq!(
            "12 2_".parse::<SolutionGrid>(),
            Err(ParseGridError::EmptyCell { position: Position::new(1, 1) })
        );
    }

    #[test]
    fn test_candidate_grid_from_solution() {
        let solution = SolutionGrid::from_rows(vec![vec![1, 2], vec![2, 1]]);
        let candidate = CandidateGrid::from(&solution);
        assert!(solution.positions().all(|pos| candidate[pos] == Some(solution[pos])));
    }

    proptest! {
        #[test]
        fn test_positions_cover_grid_exactly_once(size in 1u8..=16) {
            let mut counts = Square::filled(size, 0u32);
            for pos in counts.positions() {
                counts[pos] += 1;
            }
            prop_assert!(counts.positions().all(|pos| counts[pos] == 1));
            prop_assert_eq!(counts.positions().count(), counts.cell_count());
        }
    }
}
