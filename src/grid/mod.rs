mod candidates;
mod cell;
mod edit;
mod parallel;
mod resize;
mod store;
mod transition;


pub use cell::{Cell, CellState};
pub(crate) use store::CellStore;

use crate::config::{effective_workers, get_config};
use crate::pattern::{decode_rle, encode_rle, Pattern};
use crate::utils::{CoordSet, FormatConfig, Topology};
use anyhow::{anyhow, Result};
use transition::Flip;

/// Grid of the extended variant, supporting obstacle cells.
pub type ExtendedGrid = Grid<Cell>;

/// Game of Life field with a sparse index of live cells.
///
/// Only the neighborhood of live cells is evaluated on every step, so the
/// cost of a step follows the population rather than the area. Two dense
/// buffers of identical shape hold the current and the next generation; they
/// are swapped after every step.
///
/// The grid can optionally grow by one row/column whenever a live cell
/// touches an edge (up to `max_rows x max_cols`), or be stepped as a torus.
/// Populations above the multithreading threshold are evaluated on several
/// threads.
#[derive(Clone, Debug)]
pub struct Grid<C: CellState = bool> {
    cells: CellStore<C>,
    /// Mirrors `cells` between steps; receives the next generation during one.
    next: CellStore<C>,
    living: CoordSet,
    changed: CoordSet,
    max_rows: usize,
    max_cols: usize,
    dynamic: bool,
    multithread_threshold: usize,
    /// `0` means hardware parallelism.
    workers: usize,
    format: FormatConfig,
}

impl<C: CellState> Grid<C> {
    /// Creates a blank dynamic grid using the configured default size limits.
    ///
    /// The limits are raised to `rows x cols` if the grid is already larger.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_store(CellStore::blank(rows, cols))
    }

    /// Creates a blank grid with explicit size limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows x cols` already exceeds the limits.
    pub fn with_limits(
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
        dynamic: bool,
    ) -> Result<Self> {
        let mut grid = Self::new(rows, cols);
        grid.set_max_size(max_rows, max_cols)?;
        grid.dynamic = dynamic;
        Ok(grid)
    }

    /// Builds a grid from a boolean pattern.
    pub fn from_pattern(pattern: &Pattern) -> Self {
        let mut store = CellStore::blank(pattern.rows(), pattern.cols());
        for (r, c) in pattern.living() {
            store.set_alive(r, c, true);
        }
        Self::from_store(store)
    }

    /// Builds a `rows x cols` grid from a matrix of cells.
    ///
    /// Missing cells are dead, cells beyond `rows x cols` are ignored.
    pub fn from_cells(cells: &[Vec<C>], rows: usize, cols: usize) -> Self {
        let mut store = CellStore::blank(rows, cols);
        for (r, row) in cells.iter().take(rows).enumerate() {
            for (c, &cell) in row.iter().take(cols).enumerate() {
                store.set(r, c, cell);
            }
        }
        Self::from_store(store)
    }

    /// Parses an RLE pattern into a new grid.
    pub fn from_rle(data: &[u8]) -> Result<Self> {
        Ok(Self::from_pattern(&decode_rle(data)?))
    }

    fn from_store(cells: CellStore<C>) -> Self {
        let config = get_config();
        let living = cells
            .iter()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect::<CoordSet>();
        Self {
            next: cells.clone(),
            changed: living.clone(),
            living,
            max_rows: config.default_max_rows.max(cells.rows()),
            max_cols: config.default_max_cols.max(cells.cols()),
            cells,
            dynamic: true,
            multithread_threshold: config.multithread_threshold,
            workers: config.worker_count,
            format: FormatConfig::default(),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    /// # Errors
    ///
    /// Returns an error if the grid is already larger than the new limits.
    pub fn set_max_size(&mut self, max_rows: usize, max_cols: usize) -> Result<()> {
        if self.rows() > max_rows || self.cols() > max_cols {
            return Err(anyhow!(
                "Grid {}x{} does not fit into {}x{}",
                self.rows(),
                self.cols(),
                max_rows,
                max_cols
            ));
        }
        self.max_rows = max_rows;
        self.max_cols = max_cols;
        Ok(())
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Allows or forbids growing on [`step`](Self::step).
    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }

    pub fn multithread_threshold(&self) -> usize {
        self.multithread_threshold
    }

    /// Populations strictly above `threshold` are stepped on several threads.
    pub fn set_multithread_threshold(&mut self, threshold: usize) {
        self.multithread_threshold = threshold;
    }

    /// Number of threads for partitioned steps, `0` for hardware parallelism.
    pub fn set_worker_count(&mut self, workers: usize) {
        self.workers = workers;
    }

    pub fn format_config(&self) -> FormatConfig {
        self.format
    }

    pub fn set_format_config(&mut self, format: FormatConfig) {
        self.format = format;
    }

    pub fn cell(&self, row: usize, col: usize) -> C {
        assert!(row < self.rows() && col < self.cols());
        self.cells.get(row, col)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_alive()
    }

    pub fn is_obstacle(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_obstacle()
    }

    /// Number of live cells around `(row, col)`.
    pub fn count_neighbors(&self, row: usize, col: usize, wrap: bool) -> u8 {
        assert!(row < self.rows() && col < self.cols());
        transition::count_neighbors(&self.cells, (row, col), Topology::from_wrap(wrap))
    }

    /// Live-cell index.
    pub fn living(&self) -> &CoordSet {
        &self.living
    }

    /// Cells whose alive state changed since the previous step.
    pub fn changed(&self) -> &CoordSet {
        &self.changed
    }

    /// Snapshot of the live-cell index.
    pub fn living_cells(&self) -> CoordSet {
        self.living.clone()
    }

    /// Snapshot of the cells changed since the previous step.
    pub fn changed_cells(&self) -> CoordSet {
        self.changed.clone()
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.living.len()
    }

    /// Advances the field by one generation.
    ///
    /// If `wrap` is set, the field is treated as a torus and never grows.
    /// Otherwise, if both the grid and the caller allow it (`dynamic`), the
    /// field first grows by one layer on every side touched by a live cell.
    pub fn step(&mut self, wrap: bool, dynamic: bool) {
        self.changed.clear();
        if self.dynamic && dynamic && !wrap {
            self.grow_to_fit();
        }

        let topology = Topology::from_wrap(wrap);
        let candidates =
            candidates::resolve(&self.living, topology, self.rows(), self.cols()).to_vec();

        if self.living.len() > self.multithread_threshold {
            let workers = effective_workers(self.workers);
            tracing::debug!(
                population = self.living.len(),
                candidates = candidates.len(),
                workers,
                "partitioned step"
            );
            for flips in parallel::evaluate_partitioned(&self.cells, &candidates, topology, workers)
            {
                self.apply_flips(&flips);
            }
        } else {
            let flips = transition::evaluate(&self.cells, &candidates, topology);
            self.apply_flips(&flips);
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        // the previous generation now sits in `next`, bring it up to date
        for (r, c) in &self.changed {
            self.next.set(r, c, self.cells.get(r, c));
        }
        self.debug_check_invariants();
    }

    /// Runs `n` steps with the same settings.
    pub fn step_n(&mut self, n: usize, wrap: bool, dynamic: bool) {
        for _ in 0..n {
            self.step(wrap, dynamic);
        }
    }

    fn apply_flips(&mut self, flips: &[Flip]) {
        for &(coord, alive) in flips {
            self.next.set_alive(coord.0, coord.1, alive);
            if alive {
                self.living.insert(coord);
            } else {
                self.living.remove(coord);
            }
            self.changed.insert(coord);
        }
    }

    /// Converts the alive flags into a boolean pattern.
    pub fn to_pattern(&self) -> Pattern {
        let mut result = Pattern::blank(self.rows(), self.cols());
        for (r, c) in &self.living {
            result.set(r, c, true);
        }
        result
    }

    /// Serializes the alive flags into RLE.
    pub fn to_rle(&self) -> String {
        encode_rle(&self.to_pattern())
    }

    /// Renders the grid as text using its [`FormatConfig`].
    pub fn to_text(&self) -> String {
        self.format.render(self.rows(), self.cols(), |r, c| {
            let cell = self.cells.get(r, c);
            (cell.is_alive(), cell.is_obstacle())
        })
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        debug_assert_eq!(
            (self.cells.rows(), self.cells.cols()),
            (self.next.rows(), self.next.cols())
        );
        debug_assert!(self.rows() <= self.max_rows && self.cols() <= self.max_cols);
        let scanned = self
            .cells
            .iter()
            .filter(|(_, _, cell)| cell.is_alive())
            .count();
        debug_assert_eq!(scanned, self.living.len(), "live-cell index diverged");
        debug_assert!(self.living.iter().all(|(r, c)| self.cells.get(r, c).is_alive()));
    }
}
