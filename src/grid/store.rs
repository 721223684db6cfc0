use super::CellState;

/// Row-major dense storage of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct CellStore<C> {
    cells: Vec<C>,
    rows: usize,
    cols: usize,
}

impl<C: CellState> CellStore<C> {
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![C::default(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: C) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = cell;
    }

    #[inline]
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        let i = row * self.cols + col;
        self.cells[i] = self.cells[i].with_alive(alive);
    }

    /// Returns a copy with `north`/`south` rows and `west`/`east` columns of
    /// default cells added around the existing content.
    pub fn grown(&self, north: usize, east: usize, south: usize, west: usize) -> Self {
        let rows = self.rows + north + south;
        let cols = self.cols + west + east;
        let mut result = Self::blank(rows, cols);
        for r in 0..self.rows {
            let src = &self.cells[r * self.cols..(r + 1) * self.cols];
            let start = (r + north) * cols + west;
            result.cells[start..start + self.cols].copy_from_slice(src);
        }
        result
    }

    /// Iterates over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i / cols, i % cols, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn get_set() {
        let mut s = CellStore::<bool>::blank(3, 4);
        s.set(2, 3, true);
        assert!(s.get(2, 3));
        assert!(!s.get(1, 3));
        s.set_alive(2, 3, false);
        assert!(!s.get(2, 3));
    }

    #[test]
    fn grown_keeps_content_in_place() {
        let mut s = CellStore::<Cell>::blank(2, 2);
        s.set(0, 0, Cell::ALIVE);
        s.set(1, 1, Cell::obstacle(false));
        let g = s.grown(1, 2, 0, 1);
        assert_eq!((g.rows(), g.cols()), (3, 5));
        assert_eq!(g.get(1, 1), Cell::ALIVE);
        assert_eq!(g.get(2, 2), Cell::obstacle(false));
        assert_eq!(g.iter().filter(|(_, _, c)| *c != Cell::DEAD).count(), 2);
    }

    #[test]
    fn set_alive_keeps_obstacle_flag() {
        let mut s = CellStore::<Cell>::blank(1, 1);
        s.set(0, 0, Cell::obstacle(false));
        s.set_alive(0, 0, true);
        assert_eq!(s.get(0, 0), Cell::obstacle(true));
    }
}
