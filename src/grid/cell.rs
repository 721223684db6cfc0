/// Capabilities a cell type needs to live in a [`Grid`](super::Grid).
///
/// `bool` is the plain Game of Life cell; [`Cell`] adds obstacles.
pub trait CellState: Copy + Default + PartialEq + Send + Sync + std::fmt::Debug {
    fn is_alive(&self) -> bool;

    /// Obstacles are never touched by rule evaluation.
    fn is_obstacle(&self) -> bool {
        false
    }

    /// Same cell with its alive flag replaced; other attributes are kept.
    fn with_alive(self, alive: bool) -> Self;

    /// Alive state in the next generation given the number of live neighbors (B3/S23).
    fn transitions_given(&self, neighbors: u8) -> bool {
        if self.is_alive() {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        }
    }
}

impl CellState for bool {
    #[inline]
    fn is_alive(&self) -> bool {
        *self
    }

    #[inline]
    fn with_alive(self, alive: bool) -> Self {
        alive
    }
}

/// Cell of the extended variant: an ordinary cell or a fixed obstacle.
///
/// A "filled" obstacle (`alive == true`) counts as a live neighbor, an
/// "empty" one does not; neither ever changes during a step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub obstacle: bool,
}

impl Cell {
    pub const DEAD: Self = Self::new(false, false);
    pub const ALIVE: Self = Self::new(true, false);

    pub const fn new(alive: bool, obstacle: bool) -> Self {
        Self { alive, obstacle }
    }

    pub const fn obstacle(alive: bool) -> Self {
        Self::new(alive, true)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::new(alive, false)
    }
}

impl CellState for Cell {
    #[inline]
    fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    #[inline]
    fn with_alive(self, alive: bool) -> Self {
        Self { alive, ..self }
    }

    fn transitions_given(&self, neighbors: u8) -> bool {
        if self.obstacle {
            return self.alive;
        }
        self.alive.transitions_given(neighbors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn b3_s23() {
        for n in 0..=8u8 {
            assert_eq!(true.transitions_given(n), n == 2 || n == 3);
            assert_eq!(false.transitions_given(n), n == 3);
            assert_eq!(Cell::ALIVE.transitions_given(n), n == 2 || n == 3);
            assert_eq!(Cell::DEAD.transitions_given(n), n == 3);
        }
    }

    #[test]
    fn obstacles_keep_their_state() {
        for n in 0..=8u8 {
            assert!(!Cell::obstacle(false).transitions_given(n));
            assert!(Cell::obstacle(true).transitions_given(n));
        }
    }

    #[test]
    fn with_alive_keeps_obstacle_flag() {
        let c = Cell::obstacle(false).with_alive(true);
        assert!(c.is_alive() && c.is_obstacle());
        assert_eq!(Cell::from(true), Cell::ALIVE);
        assert!(!Cell::default().is_alive());
    }
}
