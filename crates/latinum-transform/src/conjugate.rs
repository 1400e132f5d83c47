//! Role conjugates of orthogonal arrays.
//!
//! A conjugate reassigns the three roles of every triple. The variant name
//! lists which old field lands in the new row, column and symbol in turn:
//! [`Conjugate::Csr`] maps `(r, c, s)` to `(c, s, r)`.

use std::{fmt, str::FromStr};

use latinum_core::Square;

use crate::{Triple, TransformError, from_orthogonal_array, to_orthogonal_array};

/// One of the six role permutations of a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conjugate {
    /// Identity.
    #[default]
    Rcs,
    /// Swap columns and symbols.
    Rsc,
    /// Transpose: swap rows and columns.
    Crs,
    /// New row is the old column, new column the old symbol.
    Csr,
    /// New row is the old symbol, new column the old row.
    Src,
    /// Swap rows and symbols.
    Scr,
}

impl Conjugate {
    /// All six conjugates, identity first.
    pub const ALL: [Self; 6] = [
        Self::Rcs,
        Self::Rsc,
        Self::Crs,
        Self::Csr,
        Self::Src,
        Self::Scr,
    ];

    /// Returns the lowercase name of the conjugate.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rcs => "rcs",
            Self::Rsc => "rsc",
            Self::Crs => "crs",
            Self::Csr => "csr",
            Self::Src => "src",
            Self::Scr => "scr",
        }
    }

    /// Applies the role permutation to one triple.
    #[must_use]
    pub const fn apply(self, t: Triple) -> Triple {
        let Triple { row, col, symbol } = t;
        match self {
            Self::Rcs => Triple::new(row, col, symbol),
            Self::Rsc => Triple::new(row, symbol, col),
            Self::Crs => Triple::new(col, row, symbol),
            Self::Csr => Triple::new(col, symbol, row),
            Self::Src => Triple::new(symbol, row, col),
            Self::Scr => Triple::new(symbol, col, row),
        }
    }
}

impl fmt::Display for Conjugate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown conjugate name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown conjugate {name:?}, expected one of rcs, rsc, crs, csr, src, scr")]
pub struct ParseConjugateError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Conjugate {
    type Err = ParseConjugateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseConjugateError { name: s.to_owned() })
    }
}

/// Applies `conjugate` to every triple.
#[must_use]
pub fn permute_orthogonal_array(triples: &[Triple], conjugate: Conjugate) -> Vec<Triple> {
    triples.iter().map(|&t| conjugate.apply(t)).collect()
}

/// Returns the conjugate of a square.
///
/// The conjugate of a Latin square is a Latin square.
///
/// # Errors
///
/// For a grid that is not Latin the permuted triples may not describe a
/// square, and the error of [`from_orthogonal_array`] is returned.
pub fn conjugate_square(square: &Square, conjugate: Conjugate) -> Result<Square, TransformError> {
    let triples = permute_orthogonal_array(&to_orthogonal_array(square), conjugate);
    from_orthogonal_array(&triples)
}
