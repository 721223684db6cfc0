use super::transition::{evaluate, Flip};
use super::{CellState, CellStore};
use crate::utils::{Coord, Topology};

/// Evaluates `candidates` on up to `workers` scoped threads.
///
/// The candidate list is cut into contiguous ranges, one per worker. Every
/// worker reads the shared `cells` and returns its own list of flips, so
/// nothing is locked while cells are evaluated. The returned lists are in
/// range order; applying them after the join gives the same result as a
/// sequential evaluation.
pub(super) fn evaluate_partitioned<C: CellState>(
    cells: &CellStore<C>,
    candidates: &[Coord],
    topology: Topology,
    workers: usize,
) -> Vec<Vec<Flip>> {
    if candidates.is_empty() {
        return vec![];
    }
    let chunk_size = candidates.len().div_ceil(workers.max(1));

    std::thread::scope(|s| {
        let handles = candidates
            .chunks(chunk_size)
            .map(|range| s.spawn(move || evaluate(cells, range, topology)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}
