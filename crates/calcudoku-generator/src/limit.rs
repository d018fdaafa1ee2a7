//! Limiting the number of single-cell cages.

use calcudoku_core::{Cage, Position, SolutionGrid};
use log::debug;
use rand::Rng;

use crate::constraint::choose_constraint;

/// Most single-cell cages allowed to survive carving.
pub(crate) const MAX_SINGLETONS: usize = 2;

/// Merges excess single-cell cages into adjacent cages.
///
/// Singletons are dissolved tail-first: while more than [`MAX_SINGLETONS`]
/// remain, the last one in cage order joins the first cage with an adjacent
/// cell and the count is retaken. The receiving cage gets a fresh constraint
/// drawn over its enlarged cell set, which may push it past the carver's
/// usual size cap.
///
/// A singleton with no adjacent cage stops limiting early and leaves the cap
/// exceeded. A partitioned grid of size two or more always offers an
/// adjacent cage, so in practice this only guards degenerate inputs.
pub(crate) fn limit_singletons(cages: &mut Vec<Cage>, solution: &SolutionGrid, rng: &mut impl Rng) {
    loop {
        let singletons: Vec<usize> = cages
            .iter()
            .enumerate()
            .filter_map(|(index, cage)| cage.is_singleton().then_some(index))
            .collect();
        if singletons.len() <= MAX_SINGLETONS {
            break;
        }
        let Some(&cage_index) = singletons.last() else {
            break;
        };
        let cell = cages[cage_index].cells()[0];
        let Some(host_index) = adjacent_cage_index(cages, cage_index, cell) else {
            debug!(
                "no adjacent cage for the singleton at {cell}; {count} single-cell cages remain",
                count = singletons.len(),
            );
            break;
        };
        debug!(
            "merging singleton cage {singleton} at {cell} into cage {host}",
            singleton = cages[cage_index].id(),
            host = cages[host_index].id(),
        );
        cages[host_index].push_cell(cell);
        let values = cages[host_index].values_in(solution);
        let (op, target) = choose_constraint(&values, rng);
        cages[host_index].set_constraint(op, target);
        cages.remove(cage_index);
    }
}

/// Finds the first cage other than `skip` holding a cell 4-adjacent to `cell`.
fn adjacent_cage_index(cages: &[Cage], skip: usize, cell: Position) -> Option<usize> {
    cages.iter().enumerate().find_map(|(index, cage)| {
        (index != skip && cage.cells().iter().any(|&other| other.is_adjacent(cell)))
            .then_some(index)
    })
}
