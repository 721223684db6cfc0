#![warn(clippy::all)]

mod config;
mod grid;
mod pattern;
mod utils;

pub use config::{
    get_config, set_default_max_size, set_multithread_threshold, set_worker_count, ConfigSnapshot,
};
pub use grid::{Cell, CellState, ExtendedGrid, Grid};
pub use pattern::{decode_rle, encode_rle, Pattern};
pub use utils::{Coord, CoordSet, FormatConfig};
