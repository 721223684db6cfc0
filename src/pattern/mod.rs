mod rle;

pub use rle::{decode_rle, encode_rle};

use anyhow::{anyhow, Result};

/// Rectangular boolean matrix of cells, stored row-major.
///
/// This is the transient form patterns take between the RLE codec and a
/// [`Grid`](crate::Grid): it has no live-cell index and no history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Creates a pattern of dead cells.
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Builds a pattern from nested rows.
    ///
    /// Rows shorter than the longest one are padded with dead cells.
    pub fn from_rows(data: &[Vec<bool>]) -> Self {
        let rows = data.len();
        let cols = data.iter().map(Vec::len).max().unwrap_or(0);
        let mut result = Self::blank(rows, cols);
        for (r, row) in data.iter().enumerate() {
            result.cells[r * cols..r * cols + row.len()].copy_from_slice(row);
        }
        result
    }

    /// Creates a pattern with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(anyhow!("Fill rate {} is not a probability", fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let cells = (0..rows * cols).map(|_| rng.gen_bool(fill_rate)).collect();
        Ok(Self { rows, cols, cells })
    }

    /// Parses RLE data, see [`decode_rle`].
    pub fn from_rle(data: &[u8]) -> Result<Self> {
        decode_rle(data)
    }

    /// Serializes into RLE, see [`encode_rle`].
    pub fn to_rle(&self) -> String {
        encode_rle(self)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = state;
    }

    /// Coordinates of live cells in row-major order.
    pub fn living(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&x| x).count()
    }

    /// Converts into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells.chunks_exact(self.cols).map(<[bool]>::to_vec).collect()
    }
}
