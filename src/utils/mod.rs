mod coord_set;
mod format;
mod topology;

pub use coord_set::{Coord, CoordSet};
pub use format::FormatConfig;
pub(crate) use topology::{Topology, NEIGHBORHOOD};
