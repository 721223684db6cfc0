use crate::utils::{CoordSet, Topology, NEIGHBORHOOD};

/// Collects every coordinate that may change state this tick: each live
/// cell and its eight neighbors.
///
/// A dead cell without live neighbors cannot be born, so nothing outside
/// this frontier needs to be evaluated.
pub(super) fn resolve(living: &CoordSet, topology: Topology, rows: usize, cols: usize) -> CoordSet {
    let mut result = CoordSet::with_capacity(living.len() * 4);
    for coord in living {
        result.extend(
            NEIGHBORHOOD
                .iter()
                .filter_map(|&d| topology.offset(coord, d, rows, cols)),
        );
    }
    result
}
