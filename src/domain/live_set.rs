//! Sparse storage of live cells.

use rustc_hash::FxHashSet;

use super::Coordinate;

/// Every live coordinate on the plane; anything absent is dead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: FxHashSet<Coordinate>,
}

impl LiveSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells.contains(&c)
    }

    /// Returns `true` if the cell was dead before.
    pub fn insert(&mut self, c: Coordinate) -> bool {
        self.cells.insert(c)
    }

    /// Flip membership of `c` and return the new state.
    pub fn toggle(&mut self, c: Coordinate) -> bool {
        if self.cells.remove(&c) {
            false
        } else {
            self.cells.insert(c);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate live cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    /// Copy of the set shifted by `(dx, dy)`.
    /// Cells pushed past the `i64` range are dropped.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        self.iter().filter_map(|c| c.checked_offset(dx, dy)).collect()
    }

    /// Smallest and largest corner of the populated region, if any.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let mut cells = self.iter();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), c| {
            (
                Coordinate::new(lo.x.min(c.x), lo.y.min(c.y)),
                Coordinate::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }
}

impl FromIterator<Coordinate> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(i64, i64); N]> for LiveSet {
    fn from(cells: [(i64, i64); N]) -> Self {
        cells.into_iter().map(Coordinate::from).collect()
    }
}

impl Extend<Coordinate> for LiveSet {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
