//! Cages and their arithmetic constraints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Position, SolutionGrid};

/// The arithmetic relation a cage enforces over its cell values.
///
/// [`Const`](Self::Const) is reserved for single-cell cages: the cell must
/// equal the target value and no arithmetic is involved. The other operations
/// apply to multi-cell cages; subtraction and division are only defined for
/// exactly two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// The cell values sum to the target.
    Add,
    /// The two cell values differ by the target.
    Subtract,
    /// The cell values multiply to the target.
    Multiply,
    /// The larger of the two cell values divided by the smaller equals the
    /// target.
    Divide,
    /// The single cell equals the target.
    Const,
}

impl Operation {
    /// Returns the display symbol of the operation.
    ///
    /// `Const` has no symbol; a bare target number marks a given cell.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Const => "",
        }
    }

    /// Computes the target this operation yields for `values`, or `None` if
    /// the operation does not apply to them.
    ///
    /// Subtraction uses the absolute difference, so the cell order never
    /// matters. Division applies only when the larger value is an exact
    /// multiple of the smaller. `Const` applies to exactly one value, and
    /// subtraction and division to exactly two. A sum or product too large
    /// for the target width is treated as inapplicable.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcudoku_core::Operation;
    ///
    /// assert_eq!(Operation::Add.target_for(&[3, 4, 2]), Some(9));
    /// assert_eq!(Operation::Subtract.target_for(&[2, 6]), Some(4));
    /// assert_eq!(Operation::Divide.target_for(&[6, 2]), Some(3));
    /// assert_eq!(Operation::Divide.target_for(&[4, 3]), None);
    /// assert_eq!(Operation::Subtract.target_for(&[1, 2, 3]), None);
    /// ```
    #[must_use]
    pub fn target_for(self, values: &[u8]) -> Option<u32> {
        match (self, values) {
            (Self::Const, &[value]) => Some(u32::from(value)),
            (Self::Add, [_, ..]) => values
                .iter()
                .try_fold(0_u32, |sum, &value| sum.checked_add(u32::from(value))),
            (Self::Multiply, [_, ..]) => values
                .iter()
                .try_fold(1_u32, |product, &value| product.checked_mul(u32::from(value))),
            (Self::Subtract, &[a, b]) => Some(u32::from(a.abs_diff(b))),
            (Self::Divide, &[a, b]) => {
                let (hi, lo) = (a.max(b), a.min(b));
                (lo != 0 && hi % lo == 0).then(|| u32::from(hi / lo))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A contiguous group of cells bound by one arithmetic constraint.
///
/// A puzzle's cages partition its grid. Cage cells stay in the order they
/// were claimed during carving, and the identifier is unique within a puzzle.
///
/// # Examples
///
/// ```
/// use calcudoku_core::{Cage, Operation, Position};
///
/// let cage = Cage::new("A", 3, Operation::Add, vec![
///     Position::new(0, 0),
///     Position::new(0, 1),
/// ]);
/// assert!(cage.is_satisfied_by(&[1, 2]));
/// assert!(!cage.is_satisfied_by(&[2, 2]));
/// assert_eq!(cage.label(), "3+");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cage {
    id: String,
    target: u32,
    op: Operation,
    cells: Vec<Position>,
}

impl Cage {
    /// Creates a cage over `cells` with the given constraint.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    #[must_use]
    pub fn new(id: impl Into<String>, target: u32, op: Operation, cells: Vec<Position>) -> Self {
        assert!(!cells.is_empty(), "a cage must hold at least one cell");
        Self { id: id.into(), target, op, cells }
    }

    /// Returns the identifier of the cage.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the target value of the constraint.
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Returns the operation of the constraint.
    #[must_use]
    pub const fn op(&self) -> Operation {
        self.op
    }

    /// Returns the cells of the cage in claim order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns `true` if the cage holds exactly one cell.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.cells.len() == 1
    }

    /// Returns the constraint label shown to players, e.g. `7+` or `3`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.target, self.op)
    }

    /// Collects the cage's cell values from a solution grid, in claim order.
    ///
    /// # Panics
    ///
    /// Panics if a cage cell lies outside the grid.
    #[must_use]
    pub fn values_in(&self, solution: &SolutionGrid) -> Vec<u8> {
        self.cells.iter().map(|&pos| solution[pos]).collect()
    }

    /// Returns `true` if `values` satisfy the cage constraint.
    ///
    /// `values` must line up with the cage cells; a count mismatch never
    /// satisfies the constraint.
    #[must_use]
    pub fn is_satisfied_by(&self, values: &[u8]) -> bool {
        values.len() == self.cells.len() && self.op.target_for(values) == Some(self.target)
    }

    /// Appends a cell to the cage.
    ///
    /// The existing constraint is left untouched; callers grow a cage and
    /// then pick a fresh constraint with [`set_constraint`](Self::set_constraint).
    pub fn push_cell(&mut self, pos: Position) {
        self.cells.push(pos);
    }

    /// Replaces the cage constraint.
    pub fn set_constraint(&mut self, op: Operation, target: u32) {
        self.op = op;
        self.target = target;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_target_for_const() {
        assert_eq!(Operation::Const.target_for(&[5]), Some(5));
        assert_eq!(Operation::Const.target_for(&[1, 2]), None);
        assert_eq!(Operation::Const.target_for(&[]), None);
    }

    #[test]
    fn test_target_for_add_and_multiply() {
        assert_eq!(Operation::Add.target_for(&[4]), Some(4));
        assert_eq!(Operation::Add.target_for(&[2, 1, 4, 3]), Some(10));
        assert_eq!(Operation::Multiply.target_for(&[3, 4]), Some(12));
        assert_eq!(Operation::Multiply.target_for(&[2, 3, 1]), Some(6));
        assert_eq!(Operation::Add.target_for(&[]), None);
        assert_eq!(Operation::Multiply.target_for(&[]), None);
    }

    #[test]
    fn test_target_for_subtract() {
        // Order never matters.
        assert_eq!(Operation::Subtract.target_for(&[6, 2]), Some(4));
        assert_eq!(Operation::Subtract.target_for(&[2, 6]), Some(4));
        assert_eq!(Operation::Subtract.target_for(&[3, 3]), Some(0));
        assert_eq!(Operation::Subtract.target_for(&[5]), None);
        assert_eq!(Operation::Subtract.target_for(&[1, 2, 3]), None);
    }

    #[test]
    fn test_target_for_multiply_checks_the_target_width() {
        // 255^4 still fits a u32; a fifth large factor does not.
        assert_eq!(
            Operation::Multiply.target_for(&[255, 255, 255, 255]),
            Some(4_228_250_625)
        );
        assert_eq!(Operation::Multiply.target_for(&[200, 200, 199, 199, 198]), None);
    }

    #[test]
    fn test_target_for_divide() {
        assert_eq!(Operation::Divide.target_for(&[6, 2]), Some(3));
        assert_eq!(Operation::Divide.target_for(&[2, 6]), Some(3));
        assert_eq!(Operation::Divide.target_for(&[3, 3]), Some(1));
        // 4 is not an exact multiple of 3.
        assert_eq!(Operation::Divide.target_for(&[4, 3]), None);
        assert_eq!(Operation::Divide.target_for(&[8]), None);
        assert_eq!(Operation::Divide.target_for(&[8, 4, 2]), None);
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(Operation::Add.to_string(), "+");
        assert_eq!(Operation::Subtract.to_string(), "-");
        assert_eq!(Operation::Multiply.to_string(), "×");
        assert_eq!(Operation::Divide.to_string(), "÷");
        assert_eq!(Operation::Const.to_string(), "");
    }

    #[test]
    fn test_cage_label() {
        let cage = Cage::new("A", 12, Operation::Multiply, vec![Position::new(0, 0)]);
        assert_eq!(cage.label(), "12×");
        let given = Cage::new("B", 4, Operation::Const, vec![Position::new(1, 1)]);
        assert_eq!(given.label(), "4");
    }

    #[test]
    fn test_is_satisfied_by_checks_value_count() {
        let cage = Cage::new(
            "A",
            6,
            Operation::Add,
            vec![Position::new(0, 0), Position::new(0, 1)],
        );
        assert!(cage.is_satisfied_by(&[2, 4]));
        assert!(!cage.is_satisfied_by(&[6]));
        assert!(!cage.is_satisfied_by(&[1, 2, 3]));
    }

    #[test]
    fn test_values_in_claim_order() {
        let solution = SolutionGrid::from_rows(vec![vec![1, 2], vec![2, 1]]);
        let cage = Cage::new(
            "A",
            1,
            Operation::Subtract,
            vec![Position::new(1, 0), Position::new(0, 0)],
        );
        assert_eq!(cage.values_in(&solution), [2, 1]);
    }

    #[test]
    fn test_is_singleton() {
        let single = Cage::new("A", 3, Operation::Const, vec![Position::new(0, 0)]);
        assert!(single.is_singleton());
        let pair = Cage::new(
            "B",
            3,
            Operation::Add,
            vec![Position::new(0, 1), Position::new(1, 1)],
        );
        assert!(!pair.is_singleton());
    }

    #[test]
    fn test_grow_and_reconstrain() {
        let mut cage = Cage::new("A", 2, Operation::Const, vec![Position::new(0, 0)]);
        cage.push_cell(Position::new(0, 1));
        cage.set_constraint(Operation::Add, 5);
        assert_eq!(cage.cells(), [Position::new(0, 0), Position::new(0, 1)]);
        assert!(cage.is_satisfied_by(&[2, 3]));
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn test_empty_cage_panics() {
        let _ = Cage::new("A", 1, Operation::Add, vec![]);
    }

    proptest! {
        #[test]
        fn test_subtract_and_divide_need_exactly_two_values(
            op in prop::sample::select(vec![Operation::Subtract, Operation::Divide]),
            values in prop::collection::vec(1u8..=9, 0..6),
        ) {
            let target = op.target_for(&values);
            if values.len() != 2 {
                prop_assert_eq!(target, None);
            }
        }

        #[test]
        fn test_subtract_is_absolute_difference(a in 1u8..=9, b in 1u8..=9) {
            prop_assert_eq!(
                Operation::Subtract.target_for(&[a, b]),
                Some(u32::from(a.abs_diff(b)))
            );
        }
    }
}
