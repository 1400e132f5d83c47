//! Symmetry expansion of reduced squares.
//!
//! The search only produces reduced squares. A [`SymmetryMode`] decides how
//! each of them is expanded before it is handed to the caller, and an
//! [`Orbit`] walks that expansion lazily.

use std::{fmt, iter, ops::Range, str::FromStr};

use itertools::{Itertools, Permutations};
use latinum_core::Square;
use latinum_transform::{permute_rows, relabel_symbols};

/// Which squares an enumeration yields for each reduced square found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymmetryMode {
    /// Only the reduced square itself.
    Reduced,
    /// Every reordering of rows `1..n`, row 0 held fixed: `(n-1)!` squares.
    SymbolIsotropyClasses,
    /// Every symbol relabeling combined with every reordering of rows `1..n`:
    /// `n! · (n-1)!` squares.
    #[default]
    All,
}

impl SymmetryMode {
    /// All modes, from the smallest expansion to the largest.
    pub const ALL: [Self; 3] = [Self::Reduced, Self::SymbolIsotropyClasses, Self::All];

    /// Returns the name used by [`Display`](fmt::Display) and [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reduced => "reduced",
            Self::SymbolIsotropyClasses => "symbol_isotropy_classes",
            Self::All => "all",
        }
    }
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown symmetry mode.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown symmetry mode {name:?}, expected reduced, symbol_isotropy_classes or all")]
pub struct ParseSymmetryModeError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for SymmetryMode {
    type Err = ParseSymmetryModeError;

    /// Parses a mode name. Dashes are accepted in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseSymmetryModeError { name: s.to_owned() })
    }
}

/// A stream of maps: either the identity alone or every permutation.
#[derive(Debug, Clone)]
enum Maps {
    Identity(Option<Vec<usize>>),
    Every(Permutations<Range<usize>>),
}

impl Maps {
    fn new(range: Range<usize>, every: bool) -> Self {
        if every && !range.is_empty() {
            let len = range.len();
            Self::Every(range.permutations(len))
        } else {
            Self::Identity(Some(range.collect()))
        }
    }
}

impl Iterator for Maps {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        match self {
            Self::Identity(map) => map.take(),
            Self::Every(perms) => perms.next(),
        }
    }
}

/// The squares a [`SymmetryMode`] derives from one reduced square.
///
/// Symbol relabelings form the outer loop and row reorderings the inner
/// loop, both in lexicographic order. The first square yielded is always the
/// base square itself.
///
/// # Examples
///
/// ```
/// use latinum_core::Square;
/// use latinum_search::{Orbit, SymmetryMode};
///
/// let square = Square::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]])?;
/// assert_eq!(Orbit::new(square.clone(), SymmetryMode::Reduced).count(), 1);
/// assert_eq!(Orbit::new(square.clone(), SymmetryMode::SymbolIsotropyClasses).count(), 2);
/// assert_eq!(Orbit::new(square, SymmetryMode::All).count(), 12);
/// # Ok::<(), latinum_core::SquareError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Orbit {
    base: Square,
    mode: SymmetryMode,
    symbol_maps: Maps,
    /// `base` under the current symbol map.
    relabeled: Square,
    row_orders: Maps,
}

impl Orbit {
    /// Starts the expansion of `base` under `mode`.
    #[must_use]
    pub fn new(base: Square, mode: SymmetryMode) -> Self {
        let n = base.order();
        Self {
            symbol_maps: Maps::new(0..n, mode == SymmetryMode::All),
            relabeled: base.clone(),
            row_orders: Maps::Identity(None),
            base,
            mode,
        }
    }

    /// Returns the square the orbit is built from.
    #[must_use]
    pub fn base(&self) -> &Square {
        &self.base
    }
}

impl Iterator for Orbit {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        loop {
            if let Some(tail) = self.row_orders.next() {
                let order: Vec<_> = iter::once(0).chain(tail).collect();
                return Some(
                    permute_rows(&self.relabeled, &order)
                        .unwrap_or_else(|err| panic!("row order {order:?} is invalid: {err}")),
                );
            }
            let map = self.symbol_maps.next()?;
            self.relabeled = relabel_symbols(&self.base, &map)
                .unwrap_or_else(|err| panic!("symbol map {map:?} is invalid: {err}"));
            self.row_orders = Maps::new(1..self.base.order(), self.mode != SymmetryMode::Reduced);
        }
    }
}
