use super::{CellState, CellStore};
use crate::utils::{Coord, Topology, NEIGHBORHOOD};

/// A cell whose alive flag flips in the next generation.
pub(super) type Flip = (Coord, bool);

/// Number of live cells among the eight neighbors of `coord`.
#[inline]
pub(super) fn count_neighbors<C: CellState>(
    cells: &CellStore<C>,
    coord: Coord,
    topology: Topology,
) -> u8 {
    let (rows, cols) = (cells.rows(), cells.cols());
    NEIGHBORHOOD
        .iter()
        .filter(|&&d| d != (0, 0))
        .filter_map(|&d| topology.offset(coord, d, rows, cols))
        .filter(|&(r, c)| cells.get(r, c).is_alive())
        .count() as u8
}

/// Next alive state of `coord`, or `None` for obstacles.
#[inline]
pub(super) fn next_state<C: CellState>(
    cells: &CellStore<C>,
    coord: Coord,
    topology: Topology,
) -> Option<bool> {
    let cell = cells.get(coord.0, coord.1);
    if cell.is_obstacle() {
        return None;
    }
    Some(cell.transitions_given(count_neighbors(cells, coord, topology)))
}

/// Evaluates `candidates` against the current generation and returns only
/// the cells whose state actually changes.
///
/// `cells` is only read, so disjoint candidate slices may be evaluated
/// concurrently.
pub(super) fn evaluate<C: CellState>(
    cells: &CellStore<C>,
    candidates: &[Coord],
    topology: Topology,
) -> Vec<Flip> {
    candidates
        .iter()
        .filter_map(|&coord| {
            let before = cells.get(coord.0, coord.1).is_alive();
            match next_state(cells, coord, topology) {
                Some(after) if after != before => Some((coord, after)),
                _ => None,
            }
        })
        .collect()
}
