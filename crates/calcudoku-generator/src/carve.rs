//! Carving a solved grid into contiguous cages.

use calcudoku_core::{Cage, Position, SolutionGrid, Square};
use log::debug;
use rand::{Rng, RngExt as _, seq::IndexedRandom as _};

use crate::{constraint::choose_constraint, limit};

/// Largest region the carver aims for. Singleton merges may exceed it.
pub(crate) const MAX_REGION_CELLS: usize = 4;

/// Carves the grid into contiguous cages and attaches their constraints.
///
/// Cells are scanned in row-major order. Each unclaimed cell seeds a region
/// that grows one uniformly chosen frontier cell at a time until it reaches
/// its drawn target size or the frontier empties. Every cage then gets a
/// constraint drawn over its solution values, and excess single-cell cages
/// are merged away.
pub(crate) fn carve_cages(solution: &SolutionGrid, rng: &mut impl Rng) -> Vec<Cage> {
    let mut claimed = Square::filled(solution.size(), false);
    let mut cages = Vec::new();

    for pos in solution.positions() {
        if claimed[pos] {
            continue;
        }
        claimed[pos] = true;
        let target_cells = region_size_for_roll(rng.random()).min(solution.cell_count());
        let mut cells = vec![pos];
        while cells.len() < target_cells {
            let frontier = frontier_of(&cells, &claimed);
            let Some(&next) = frontier.choose(rng) else {
                break;
            };
            claimed[next] = true;
            cells.push(next);
        }
        let values: Vec<u8> = cells.iter().map(|&cell| solution[cell]).collect();
        let (op, target) = choose_constraint(&values, rng);
        cages.push(Cage::new(cage_label(cages.len()), target, op, cells));
    }

    debug!(
        "carved {count} cages on a {size}x{size} grid",
        count = cages.len(),
        size = solution.size(),
    );
    limit::limit_singletons(&mut cages, solution, rng);
    cages
}

/// Maps a uniform `[0, 1)` sample to a target region size.
///
/// Cumulative breakpoints give 15% single cells, 55% pairs, 25% triples, and
/// 5% quads.
pub(crate) fn region_size_for_roll(roll: f64) -> usize {
    if roll < 0.15 {
        1
    } else if roll < 0.70 {
        2
    } else if roll < 0.95 {
        3
    } else {
        MAX_REGION_CELLS
    }
}

/// Collects the unclaimed cells 4-adjacent to any region cell.
///
/// Cells adjacent to several region cells appear once, so the uniform draw
/// over the frontier is not biased toward them.
fn frontier_of(region: &[Position], claimed: &Square<bool>) -> Vec<Position> {
    let mut frontier = Vec::new();
    for &cell in region {
        for neighbor in cell.orthogonal_neighbors(claimed.size()) {
            if !claimed[neighbor] && !frontier.contains(&neighbor) {
                frontier.push(neighbor);
            }
        }
    }
    frontier
}

/// Sequential cage labels: `A`..`Z`, then `AA`, `AB`, and so on.
fn cage_label(mut index: usize) -> String {
    let mut label = String::new();
    loop {
        #[expect(clippy::cast_possible_truncation)]
        let offset = (index % 26) as u8;
        label.insert(0, char::from(b'A' + offset));
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    label
}
