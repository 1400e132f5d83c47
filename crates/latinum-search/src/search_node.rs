//! Partial Latin squares with constraint propagation.
//!
//! A [`SearchNode`] holds one partial assignment of an `n × n` grid. It
//! starts from the reduced-form seed (first row and first column are
//! `0, 1, ..., n-1`) and grows by assigning symbols to cells. Every
//! assignment removes the symbol from the candidates of the cells in the same
//! row and column, and cells left with a single candidate are assigned in
//! turn until nothing is forced any more.
//!
//! Three structures are kept in sync:
//!
//! - `cells`: the fixed symbol or the candidate set of every cell
//! - `placements`: per symbol, the cells that may still take it, as a
//!   [`PossibilitySet`] of shape `(n, n)`; only kept up to
//!   [`MAX_INDEXED_ORDER`], beyond which the row and column are scanned
//! - `liberties`: open cells bucketed by candidate count, used to pick the
//!   most constrained cell to branch on
//!
//! # Examples
//!
//! ```
//! use latinum_search::SearchNode;
//!
//! let root = SearchNode::new(3)?;
//! assert!(!root.is_terminal());
//!
//! let children = root.children();
//! assert_eq!(children.len(), 1);
//! assert!(children[0].is_terminal());
//! assert!(children[0].to_square().unwrap().is_latin());
//! # Ok::<(), latinum_search::SearchError>(())
//! ```

use latinum_core::{BitSet, FlatDomain, IndexedSet, PossibilitySet, ShapeDomain, Square};

use crate::{SearchError, liberties::Liberties};

/// The largest supported order.
///
/// The candidates of a cell are a bit set with one bit per symbol.
pub const MAX_ORDER: usize = BitSet::MAX_CAPACITY;

/// The largest order for which per-symbol placement sets are kept.
///
/// A placement set has one bit per cell, so `n²` must not exceed 128.
pub const MAX_INDEXED_ORDER: usize = 11;

/// State of one cell of a [`SearchNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// The cell holds a symbol.
    Fixed(usize),
    /// The cell is open; these symbols are still possible.
    Open(IndexedSet<FlatDomain>),
}

/// One node of the search tree: a partial assignment of a grid.
///
/// Cloning a node copies all of its state, so sibling branches never share
/// anything mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    order: usize,
    cells: Vec<Cell>,
    placements: Vec<PossibilitySet>,
    liberties: Liberties,
}

impl SearchNode {
    /// Creates the reduced-form root node of order `order`.
    ///
    /// Row 0 and column 0 are fixed to the identity. Interior cell `(r, c)`
    /// starts with every symbol except `r` and `c`. No propagation is run.
    /// Placement sets are built when `order <= MAX_INDEXED_ORDER`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidOrder`] unless `1 <= order <= MAX_ORDER`.
    pub fn new(order: usize) -> Result<Self, SearchError> {
        let invalid = SearchError::InvalidOrder {
            order,
            max: MAX_ORDER,
        };
        if order == 0 || order > MAX_ORDER {
            return Err(invalid);
        }
        let symbols = FlatDomain::new(order).map_err(|_| invalid)?;

        let mut cells = Vec::with_capacity(order * order);
        let mut liberties = Liberties::new(symbols);
        for row in 0..order {
            for col in 0..order {
                let index = row * order + col;
                if row == 0 || col == 0 {
                    cells.push(Cell::Fixed(row.max(col)));
                    continue;
                }
                let mut candidates = IndexedSet::full(symbols);
                candidates.remove_index(row);
                candidates.remove_index(col);
                liberties.insert(candidates.len(), index);
                cells.push(Cell::Open(candidates));
            }
        }

        let mut node = Self {
            order,
            cells,
            placements: Vec::new(),
            liberties,
        };
        if order <= MAX_INDEXED_ORDER {
            node.index_placements();
        }
        Ok(node)
    }

    /// Builds the placement sets of the seed grid.
    fn index_placements(&mut self) {
        let order = self.order;
        let grid = ShapeDomain::new(&[order, order])
            .unwrap_or_else(|err| panic!("order {order} grid is not indexable: {err}"));
        let mut placements = vec![PossibilitySet::from_domain(grid); order];
        for (index, cell) in self.cells.iter().enumerate() {
            if let Cell::Fixed(symbol) = *cell {
                for (s, placement) in placements.iter_mut().enumerate() {
                    if s == symbol {
                        placement.eliminate_index(index);
                    } else {
                        placement.remove_index(index);
                    }
                }
            }
        }
        self.placements = placements;
    }

    /// Returns the order of the grid.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the state of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the order.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        assert!(row < self.order && col < self.order, "cell ({row}, {col}) out of range");
        &self.cells[row * self.order + col]
    }

    /// Returns the cells that may still take `symbol`.
    ///
    /// Returns `None` if `symbol` is not below the order, or if the order
    /// exceeds [`MAX_INDEXED_ORDER`] and no placement sets are kept.
    #[must_use]
    pub fn placements(&self, symbol: usize) -> Option<&PossibilitySet> {
        self.placements.get(symbol)
    }

    /// Returns the number of open cells.
    #[must_use]
    pub fn open_cells(&self) -> usize {
        self.liberties.len()
    }

    /// Returns `true` if every cell holds a symbol.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.liberties.is_empty()
    }

    /// Returns `true` if no cell has run out of candidates.
    #[must_use]
    pub fn is_viable(&self) -> bool {
        !self.liberties.has_dead_cell()
    }

    /// Returns the completed grid of a terminal node.
    #[must_use]
    pub fn to_square(&self) -> Option<Square> {
        let symbols = self
            .cells
            .iter()
            .map(|cell| match cell {
                Cell::Fixed(symbol) => Some(*symbol),
                Cell::Open(_) => None,
            })
            .collect::<Option<Vec<_>>>()?;
        Square::from_symbols(self.order, symbols).ok()
    }

    /// Branches on the most constrained open cell.
    ///
    /// One child is built per candidate of that cell, in ascending symbol
    /// order: the candidate is assigned and forced cells are propagated.
    /// Children left with an empty cell are dropped. A terminal node has no
    /// children.
    ///
    /// # Panics
    ///
    /// Panics if the liberties index disagrees with a cell's candidates,
    /// which indicates corrupted bookkeeping.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.expand().0
    }

    /// Returns the viable children and the number of dead ones.
    pub(crate) fn expand(&self) -> (Vec<Self>, usize) {
        let Some((count, index)) = self.liberties.most_constrained() else {
            return (Vec::new(), 0);
        };
        let candidates = self.open_candidates(index);
        assert_eq!(
            candidates.len(),
            count,
            "cell {index} is filed under {count} candidates but has {}",
            candidates.len()
        );
        log::trace!(
            "branching on ({}, {}) over {candidates}",
            index / self.order,
            index % self.order
        );

        let mut children = Vec::with_capacity(count);
        let mut dead = 0;
        for symbol in candidates.iter_indices() {
            let mut child = self.clone();
            child.assign(index, symbol);
            child.propagate();
            if child.is_viable() {
                children.push(child);
            } else {
                dead += 1;
            }
        }
        (children, dead)
    }

    fn open_candidates(&self, index: usize) -> &IndexedSet<FlatDomain> {
        match &self.cells[index] {
            Cell::Open(candidates) => candidates,
            Cell::Fixed(symbol) => panic!(
                "cell {index} is filed as open but holds symbol {symbol}"
            ),
        }
    }

    /// Assigns forced cells until none is left or a cell runs out of
    /// candidates.
    fn propagate(&mut self) {
        while self.is_viable() {
            let Some(index) = self.liberties.first(1) else {
                break;
            };
            let candidates = self.open_candidates(index);
            assert_eq!(
                candidates.len(),
                1,
                "cell {index} is filed as forced but has {} candidates",
                candidates.len()
            );
            let Some(symbol) = candidates.first_index() else {
                unreachable!("cell {index} has one candidate");
            };
            self.assign(index, symbol);
        }
    }

    /// Fixes `symbol` at the cell with flat index `index`.
    fn assign(&mut self, index: usize, symbol: usize) {
        let Cell::Open(candidates) = std::mem::replace(&mut self.cells[index], Cell::Fixed(symbol))
        else {
            panic!("cell {index} is already fixed");
        };
        assert!(
            candidates.contains_index(symbol),
            "symbol {symbol} is not a candidate of cell {index}"
        );
        self.liberties.remove(candidates.len(), index);

        let attacked = if self.placements.is_empty() {
            self.peers_with(index, symbol)
        } else {
            for other in candidates.iter_indices().filter(|&s| s != symbol) {
                self.placements[other].remove_index(index);
            }
            let placement = &mut self.placements[symbol];
            let before = placement.as_set().clone();
            placement.eliminate_index(index);
            (&before - placement.as_set())
                .iter_indices()
                .filter(|&i| i != index)
                .collect()
        };

        for cell in attacked {
            let Cell::Open(candidates) = &mut self.cells[cell] else {
                panic!("fixed cell {cell} is listed as a placement of {symbol}");
            };
            let count = candidates.len();
            candidates.remove_index(symbol);
            self.liberties.demote(count, cell);
        }
    }

    /// Returns the open cells sharing a row or column with `index` that
    /// still have `symbol` as a candidate.
    fn peers_with(&self, index: usize, symbol: usize) -> Vec<usize> {
        let n = self.order;
        let (row, col) = (index / n, index % n);
        (0..n)
            .map(|c| row * n + c)
            .chain((0..n).map(|r| r * n + col))
            .filter(|&cell| cell != index)
            .filter(|&cell| {
                matches!(&self.cells[cell], Cell::Open(candidates) if candidates.contains_index(symbol))
            })
            .collect()
    }
}
