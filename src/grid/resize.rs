use super::{CellState, Grid};
use crate::utils::CoordSet;

/// Sides of the field touched by at least one live cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct Edges {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Edges {
    fn any(self) -> bool {
        self.north || self.east || self.south || self.west
    }
}

/// Single pass over the live-cell index; a corner cell marks both its sides.
pub(super) fn touched_edges(living: &CoordSet, rows: usize, cols: usize) -> Edges {
    let mut edges = Edges::default();
    for (r, c) in living {
        edges.north |= r == 0;
        edges.south |= r + 1 == rows;
        edges.west |= c == 0;
        edges.east |= c + 1 == cols;
    }
    edges
}

fn remap(set: &CoordSet, north: usize, west: usize, rows: usize, cols: usize) -> CoordSet {
    set.iter()
        .map(|(r, c)| (r + north, c + west))
        .filter(|&(r, c)| r < rows && c < cols)
        .collect()
}

impl<C: CellState> Grid<C> {
    /// Adds rows and columns of dead cells on the given sides.
    ///
    /// Nothing happens if the result would exceed `max_rows x max_cols`; the
    /// return value tells whether the grid was resized. Existing cells keep
    /// their content and are shifted by `(north, west)`.
    pub fn resize(&mut self, north: usize, east: usize, south: usize, west: usize) -> bool {
        let rows = self.rows() + north + south;
        let cols = self.cols() + west + east;
        if rows > self.max_rows || cols > self.max_cols {
            tracing::debug!(
                rows,
                cols,
                max_rows = self.max_rows,
                max_cols = self.max_cols,
                "resize skipped: size limit reached"
            );
            return false;
        }
        if rows == self.rows() && cols == self.cols() {
            return false;
        }

        self.cells = self.cells.grown(north, east, south, west);
        self.next = self.cells.clone();
        self.living = remap(&self.living, north, west, rows, cols);
        self.changed = remap(&self.changed, north, west, rows, cols);
        tracing::debug!(north, east, south, west, rows, cols, "grid resized");
        true
    }

    /// Grows the grid by one layer on every side touched by a live cell.
    pub(super) fn grow_to_fit(&mut self) -> bool {
        let edges = touched_edges(&self.living, self.rows(), self.cols());
        if !edges.any() {
            return false;
        }
        self.resize(
            edges.north as usize,
            edges.east as usize,
            edges.south as usize,
            edges.west as usize,
        )
    }
}
