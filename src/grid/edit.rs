use super::{CellState, Grid};
use crate::pattern::Pattern;
use anyhow::{anyhow, Result};
use rand::Rng;

impl<C: CellState> Grid<C> {
    /// Replaces a cell in both buffers, keeping the indices in sync.
    fn write(&mut self, row: usize, col: usize, cell: C) {
        let before = self.cells.get(row, col).is_alive();
        self.cells.set(row, col, cell);
        self.next.set(row, col, cell);
        if before != cell.is_alive() {
            if cell.is_alive() {
                self.living.insert((row, col));
            } else {
                self.living.remove((row, col));
            }
            self.changed.insert((row, col));
        }
    }

    /// Replaces the cell at `(row, col)`, e.g. to place an obstacle.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: C) {
        assert!(row < self.rows() && col < self.cols());
        self.write(row, col, cell);
    }

    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        let cell = self.cell(row, col).with_alive(alive);
        self.write(row, col, cell);
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let cell = self.cell(row, col);
        self.write(row, col, cell.with_alive(!cell.is_alive()));
    }

    /// Stamps a boolean pattern with its top-left corner at `(row, col)`.
    ///
    /// With `hollow` set only the live cells of the pattern are written, so
    /// the dead ones leave the grid untouched. Parts of the pattern beyond
    /// the grid are clipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `(row, col)` lies outside the grid.
    pub fn insert(
        &mut self,
        pattern: &Pattern,
        row: usize,
        col: usize,
        hollow: bool,
    ) -> Result<()> {
        self.stamp(row, col, pattern.rows(), pattern.cols(), hollow, |r, c| {
            C::default().with_alive(pattern.get(r, c))
        })
    }

    /// Same as [`insert`](Self::insert), for a matrix of cells.
    pub fn insert_cells(
        &mut self,
        cells: &[Vec<C>],
        row: usize,
        col: usize,
        hollow: bool,
    ) -> Result<()> {
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        self.stamp(row, col, cells.len(), width, hollow, |r, c| {
            cells[r].get(c).copied().unwrap_or_default()
        })
    }

    fn stamp(
        &mut self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        hollow: bool,
        source: impl Fn(usize, usize) -> C,
    ) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(anyhow!(
                "Insert position ({}, {}) is outside the {}x{} grid",
                row,
                col,
                self.rows(),
                self.cols()
            ));
        }
        let rows = rows.min(self.rows() - row);
        let cols = cols.min(self.cols() - col);
        for r in 0..rows {
            for c in 0..cols {
                let cell = source(r, c);
                if !hollow || cell.is_alive() {
                    self.write(row + r, col + c, cell);
                }
            }
        }
        Ok(())
    }

    /// Moves the `num_rows x num_cols` block at `(from_row, from_col)` so that
    /// its top-left corner lands on `(to_row, to_col)`.
    ///
    /// The source block is cleared first, so overlapping moves are fine.
    ///
    /// # Errors
    ///
    /// Returns an error if either block does not fit into the grid.
    pub fn move_region(
        &mut self,
        from_row: usize,
        from_col: usize,
        num_rows: usize,
        num_cols: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<()> {
        let fits = |r: usize, c: usize| {
            r.checked_add(num_rows).is_some_and(|x| x <= self.rows())
                && c.checked_add(num_cols).is_some_and(|x| x <= self.cols())
        };
        if !fits(from_row, from_col) || !fits(to_row, to_col) {
            return Err(anyhow!(
                "Cannot move {}x{} block from ({}, {}) to ({}, {}) within the {}x{} grid",
                num_rows,
                num_cols,
                from_row,
                from_col,
                to_row,
                to_col,
                self.rows(),
                self.cols()
            ));
        }

        let mut block = Vec::with_capacity(num_rows * num_cols);
        for r in 0..num_rows {
            for c in 0..num_cols {
                block.push(self.cells.get(from_row + r, from_col + c));
                self.write(from_row + r, from_col + c, C::default());
            }
        }
        for r in 0..num_rows {
            for c in 0..num_cols {
                self.write(to_row + r, to_col + c, block[r * num_cols + c]);
            }
        }
        Ok(())
    }

    /// Sets every non-obstacle cell alive with probability `alive_probability`.
    ///
    /// # Errors
    ///
    /// Returns an error if `alive_probability` is not within `[0, 1]`.
    pub fn randomize(&mut self, alive_probability: f64, rng: &mut impl Rng) -> Result<()> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(anyhow!(
                "Alive probability {} is not within [0, 1]",
                alive_probability
            ));
        }
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let cell = self.cells.get(r, c);
                if !cell.is_obstacle() {
                    self.write(r, c, cell.with_alive(rng.gen_bool(alive_probability)));
                }
            }
        }
        Ok(())
    }

    /// [`randomize`](Self::randomize) with a `ChaCha8Rng`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize_seeded(&mut self, alive_probability: f64, seed: Option<u64>) -> Result<()> {
        use rand::SeedableRng;

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        self.randomize(alive_probability, &mut rng)
    }

    /// Kills every cell; obstacles stay in place.
    pub fn clear(&mut self) {
        for (r, c) in self.living.to_vec() {
            let cell = self.cells.get(r, c).with_alive(false);
            self.write(r, c, cell);
        }
    }
}
