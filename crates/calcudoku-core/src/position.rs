//! Grid cell coordinates.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A cell coordinate on a square puzzle grid.
///
/// Positions are zero-based `(row, col)` pairs. The type itself does not know
/// the grid size; bounds are checked by the containers and operations that
/// take a position.
///
/// # Examples
///
/// ```
/// use calcudoku_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 2);
/// assert_eq!(pos.to_string(), "(1, 2)");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from zero-based row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Iterates over the positions 4-adjacent to `self` that lie inside a
    /// `size`×`size` grid.
    ///
    /// Diagonal neighbors are not included.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcudoku_core::Position;
    ///
    /// let corner = Position::new(0, 0);
    /// let neighbors: Vec<_> = corner.orthogonal_neighbors(4).collect();
    /// assert_eq!(neighbors, [Position::new(1, 0), Position::new(0, 1)]);
    /// ```
    pub fn orthogonal_neighbors(self, size: u8) -> impl Iterator<Item = Self> {
        let up = self.row.checked_sub(1).map(|row| Self { row, col: self.col });
        let down = self
            .row
            .checked_add(1)
            .filter(|&row| row < size)
            .map(|row| Self { row, col: self.col });
        let left = self.col.checked_sub(1).map(|col| Self { row: self.row, col });
        let right = self
            .col
            .checked_add(1)
            .filter(|&col| col < size)
            .map(|col| Self { row: self.row, col });
        [up, down, left, right].into_iter().flatten()
    }

    /// Returns `true` if `self` and `other` share an edge.
    ///
    /// A position is not adjacent to itself, and diagonal contact does not
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcudoku_core::Position;
    ///
    /// let pos = Position::new(1, 1);
    /// assert!(pos.is_adjacent(Position::new(0, 1)));
    /// assert!(!pos.is_adjacent(Position::new(0, 0)));
    /// assert!(!pos.is_adjacent(pos));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        (row_diff == 0 && col_diff == 1) || (row_diff == 1 && col_diff == 0)
    }
}
