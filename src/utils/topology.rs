/// Describes how the edges of the field are treated when looking up neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Bounds of the field are stitched together.
    Torus,
    /// Cells beyond the edges are considered dead.
    Bounded,
}

impl Topology {
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            Self::Torus
        } else {
            Self::Bounded
        }
    }

    /// Resolves `(row + dr, col + dc)` on a `rows x cols` field.
    ///
    /// Returns `None` when the position falls off a bounded field.
    #[inline]
    pub fn offset(
        self,
        (row, col): (usize, usize),
        (dr, dc): (isize, isize),
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        Some((
            Self::shift(self, row, dr, rows)?,
            Self::shift(self, col, dc, cols)?,
        ))
    }

    #[inline]
    fn shift(self, x: usize, d: isize, n: usize) -> Option<usize> {
        match self {
            Self::Torus => Some((x as isize + d).rem_euclid(n as isize) as usize),
            Self::Bounded => x.checked_add_signed(d).filter(|&y| y < n),
        }
    }
}

/// Offsets of the 3x3 neighbourhood, the center included.
pub const NEIGHBORHOOD: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn torus_wraps_both_axes() {
        let t = Topology::Torus;
        assert_eq!(t.offset((0, 0), (-1, -1), 5, 7), Some((4, 6)));
        assert_eq!(t.offset((4, 6), (1, 1), 5, 7), Some((0, 0)));
        assert_eq!(t.offset((2, 3), (0, 0), 5, 7), Some((2, 3)));
    }

    #[test]
    fn bounded_clips() {
        let t = Topology::Bounded;
        assert_eq!(t.offset((0, 3), (-1, 0), 5, 7), None);
        assert_eq!(t.offset((4, 3), (1, 0), 5, 7), None);
        assert_eq!(t.offset((2, 6), (0, 1), 5, 7), None);
        assert_eq!(t.offset((2, 3), (1, -1), 5, 7), Some((3, 2)));
    }

    #[test]
    fn torus_of_size_one() {
        let t = Topology::Torus;
        assert_eq!(t.offset((0, 0), (1, -1), 1, 1), Some((0, 0)));
    }
}
