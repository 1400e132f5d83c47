//! Exhaustive enumeration of Latin squares.
//!
//! [`Generator`] describes an enumeration, and [`Generator::latin_squares`]
//! starts one. The returned [`LatinSquares`] iterator walks the search tree
//! depth first with an explicit stack and produces squares one at a time as
//! the caller pulls them. Dropping it early stops the search.
//!
//! # Examples
//!
//! ```
//! use latinum_search::{Generator, SymmetryMode};
//!
//! let generator = Generator::new(4, SymmetryMode::Reduced)?;
//! let squares: Vec<_> = generator.latin_squares().collect();
//! assert_eq!(squares.len(), 4);
//! assert!(squares.iter().all(|s| s.is_latin() && s.is_reduced()));
//!
//! // A new call starts over.
//! assert_eq!(generator.latin_squares().count(), 4);
//! # Ok::<(), latinum_search::SearchError>(())
//! ```

use std::collections::VecDeque;

use latinum_core::Square;

use crate::{Orbit, SearchError, SearchNode, SymmetryMode};

/// Counters collected while enumerating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes_expanded: usize,
    dead_branches: usize,
    canonical_squares: usize,
}

impl SearchStats {
    /// Returns the number of nodes whose children were computed.
    #[must_use]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Returns the number of children discarded because a cell ran out of
    /// candidates.
    #[must_use]
    pub fn dead_branches(&self) -> usize {
        self.dead_branches
    }

    /// Returns the number of reduced squares found so far.
    #[must_use]
    pub fn canonical_squares(&self) -> usize {
        self.canonical_squares
    }
}

/// Enumerates the Latin squares of one order.
#[derive(Debug, Clone)]
pub struct Generator {
    root: SearchNode,
    mode: SymmetryMode,
}

impl Generator {
    /// Creates a generator for squares of order `order`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidOrder`] unless
    /// `1 <= order <= MAX_ORDER`.
    ///
    /// [`MAX_ORDER`]: crate::MAX_ORDER
    pub fn new(order: usize, mode: SymmetryMode) -> Result<Self, SearchError> {
        Ok(Self {
            root: SearchNode::new(order)?,
            mode,
        })
    }

    /// Returns the order of the generated squares.
    #[must_use]
    pub fn order(&self) -> usize {
        self.root.order()
    }

    /// Returns the symmetry mode.
    #[must_use]
    pub fn mode(&self) -> SymmetryMode {
        self.mode
    }

    /// Starts a new enumeration.
    ///
    /// Each call returns an independent iterator beginning from the root.
    #[must_use]
    pub fn latin_squares(&self) -> LatinSquares {
        LatinSquares::new(self.root.clone(), self.mode)
    }
}

/// Lazy sequence of the squares of one enumeration.
///
/// Created by [`Generator::latin_squares`].
#[derive(Debug, Clone)]
pub struct LatinSquares {
    order: usize,
    mode: SymmetryMode,
    stack: Vec<SearchNode>,
    /// Terminal squares found by the last expansion, in child order.
    pending: VecDeque<Square>,
    orbit: Option<Orbit>,
    stats: SearchStats,
    finished: bool,
}

impl LatinSquares {
    fn new(root: SearchNode, mode: SymmetryMode) -> Self {
        let order = root.order();
        let mut squares = Self {
            order,
            mode,
            stack: Vec::new(),
            pending: VecDeque::new(),
            orbit: None,
            stats: SearchStats::default(),
            finished: false,
        };
        if root.is_terminal() {
            squares.pending.extend(root.to_square());
        } else {
            squares.stack.push(root);
        }
        squares
    }

    /// Returns the counters collected so far.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Returns the next reduced square, expanding nodes as needed.
    fn next_canonical(&mut self) -> Option<Square> {
        loop {
            if let Some(square) = self.pending.pop_front() {
                self.stats.canonical_squares += 1;
                return Some(square);
            }
            let Some(node) = self.stack.pop() else {
                self.finish();
                return None;
            };
            let (children, dead) = node.expand();
            self.stats.nodes_expanded += 1;
            self.stats.dead_branches += dead;
            for child in children {
                if child.is_terminal() {
                    self.pending.extend(child.to_square());
                } else {
                    self.stack.push(child);
                }
            }
        }
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        let stats = self.stats;
        log::debug!(
            "order {} ({}) enumeration finished: {} nodes expanded, {} dead branches, {} reduced squares",
            self.order,
            self.mode,
            stats.nodes_expanded,
            stats.dead_branches,
            stats.canonical_squares
        );
    }
}

impl Iterator for LatinSquares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        loop {
            if let Some(square) = self.orbit.as_mut().and_then(Iterator::next) {
                return Some(square);
            }
            let canonical = self.next_canonical()?;
            self.orbit = Some(Orbit::new(canonical, self.mode));
        }
    }
}

impl std::iter::FusedIterator for LatinSquares {}
