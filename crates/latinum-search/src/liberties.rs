//! Unresolved cells bucketed by candidate count.

use latinum_core::{Domain, FlatDomain, IndexedSet};

/// Priority index over the open cells of a grid.
///
/// Bucket `k` holds the cells with exactly `k` remaining candidates, stored
/// row by row as sets of columns so that one bucket row fits in a bit set of
/// `order` bits. Cells are addressed by flat index `row * order + col`.
/// Every open cell is filed in exactly one bucket. Bucket `0` collects cells
/// that ran out of candidates, which makes the node dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Liberties {
    order: usize,
    buckets: Vec<Vec<IndexedSet<FlatDomain>>>,
    /// Number of cells in each bucket.
    sizes: Vec<usize>,
}

impl Liberties {
    /// Creates empty buckets `0..=order` over an `order × order` grid.
    pub(crate) fn new(columns: FlatDomain) -> Self {
        let order = columns.size();
        Self {
            order,
            buckets: vec![vec![IndexedSet::new(columns); order]; order + 1],
            sizes: vec![0; order + 1],
        }
    }

    /// Files `cell` under `count`.
    pub(crate) fn insert(&mut self, count: usize, cell: usize) {
        let (row, col) = (cell / self.order, cell % self.order);
        let inserted = self.buckets[count][row].insert_index(col);
        assert!(inserted, "cell {cell} is already filed under {count} candidates");
        self.sizes[count] += 1;
    }

    /// Removes `cell` from the bucket for `count`.
    pub(crate) fn remove(&mut self, count: usize, cell: usize) {
        let (row, col) = (cell / self.order, cell % self.order);
        let removed = self.buckets[count][row].remove_index(col);
        assert!(removed, "cell {cell} is not filed under {count} candidates");
        self.sizes[count] -= 1;
    }

    /// Moves `cell` from bucket `count` to bucket `count - 1`.
    pub(crate) fn demote(&mut self, count: usize, cell: usize) {
        self.remove(count, cell);
        self.insert(count - 1, cell);
    }

    /// Returns the lowest cell with exactly `count` candidates.
    pub(crate) fn first(&self, count: usize) -> Option<usize> {
        if self.sizes[count] == 0 {
            return None;
        }
        self.buckets[count]
            .iter()
            .enumerate()
            .find_map(|(row, cols)| cols.first_index().map(|col| row * self.order + col))
    }

    /// Returns the smallest non-empty bucket and its lowest cell.
    pub(crate) fn most_constrained(&self) -> Option<(usize, usize)> {
        (0..self.sizes.len()).find_map(|count| self.first(count).map(|cell| (count, cell)))
    }

    /// Returns `true` if some cell has no candidates left.
    pub(crate) fn has_dead_cell(&self) -> bool {
        self.sizes[0] > 0
    }

    /// Returns `true` if no open cell remains.
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, count: usize, cell: usize) -> bool {
        self.buckets[count][cell / self.order].contains_index(cell % self.order)
    }

    /// Returns the number of open cells.
    pub(crate) fn len(&self) -> usize {
        self.sizes.iter().sum()
    }
}
