use ahash::AHashSet as HashSet;

/// `(row, col)` position inside a grid.
pub type Coord = (usize, usize);

/// Unordered set of grid coordinates with O(1) average membership updates.
///
/// Used both as the live-cell index and as the per-tick changed-cell index.
/// A shared reference may be iterated from several threads at once; all
/// mutation goes through `&mut self`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordSet {
    inner: HashSet<Coord>,
}

impl CoordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` if the coordinate was not present before.
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.inner.insert(coord)
    }

    /// Returns `true` if the coordinate was present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.inner.remove(&coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.inner.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.inner.iter().copied()
    }

    /// Copies the members into a vector, in unspecified order.
    pub fn to_vec(&self) -> Vec<Coord> {
        self.inner.iter().copied().collect()
    }

    /// Members sorted in row-major order; handy for comparisons and output.
    pub fn to_sorted_vec(&self) -> Vec<Coord> {
        let mut v = self.to_vec();
        v.sort_unstable();
        v
    }
}

impl FromIterator<Coord> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for CoordSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CoordSet {
    type Item = Coord;
    type IntoIter = std::iter::Copied<std::collections::hash_set::Iter<'a, Coord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = CoordSet::new();
        assert!(set.insert((1, 2)));
        assert!(!set.insert((1, 2)));
        assert!(set.contains((1, 2)));
        assert!(!set.contains((2, 1)));
        assert_eq!(set.len(), 1);

        assert!(set.remove((1, 2)));
        assert!(!set.remove((1, 2)));
        assert!(set.is_empty());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: CoordSet = [(0, 0), (3, 4), (5, 1)].into_iter().collect();
        let b: CoordSet = [(5, 1), (0, 0), (3, 4)].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.to_sorted_vec(), vec![(0, 0), (3, 4), (5, 1)]);
    }

    #[test]
    fn shared_iteration_across_threads() {
        let set: CoordSet = (0..1000).map(|i| (i / 10, i % 10)).collect();
        let sums = std::thread::scope(|s| {
            let handles = (0..4)
                .map(|_| s.spawn(|| set.iter().map(|(r, c)| r + c).sum::<usize>()))
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });
        assert!(sums.iter().all(|&x| x == sums[0]));
    }
}
