//! Square grids of symbols.
//!
//! [`Square`] is the value exchanged between the search engine, the
//! transforms and the command line. It only guarantees that the grid is
//! `n × n` and that every symbol lies in `0..n`; whether it is a Latin square
//! is checked separately with [`Square::is_latin`].
//!
//! # Examples
//!
//! ```
//! use latinum_core::Square;
//!
//! let square = Square::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]])?;
//! assert!(square.is_latin());
//! assert!(square.is_reduced());
//! assert_eq!(square.get(1, 2), 0);
//! assert_eq!(square.to_string(), "0 1 2\n1 2 0\n2 0 1");
//! # Ok::<(), latinum_core::SquareError>(())
//! ```

use std::fmt::{self, Display};

/// Errors returned when building a [`Square`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SquareError {
    /// The grid has no rows.
    #[display("square must have at least one row")]
    Empty,
    /// A row does not have one entry per row of the grid.
    #[display("row {row} has {len} entries, expected {order}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of entries in that row.
        len: usize,
        /// Order of the grid.
        order: usize,
    },
    /// A symbol is not in `0..order`.
    #[display("symbol {symbol} at ({row}, {col}) is outside 0..{order}")]
    SymbolOutOfRange {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The offending symbol.
        symbol: usize,
        /// Order of the grid.
        order: usize,
    },
    /// A flat symbol list does not hold `order²` entries.
    #[display("{len} symbols cannot fill a square of order {order}")]
    WrongLength {
        /// Number of symbols supplied.
        len: usize,
        /// Requested order.
        order: usize,
    },
}

/// An `n × n` grid of symbols in `0..n`, stored row by row.
///
/// Squares order lexicographically by their row-major symbols after their
/// order, which gives enumeration results a stable sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    order: usize,
    symbols: Vec<usize>,
}

impl Square {
    /// Builds a square from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::Empty`] for no rows,
    /// [`SquareError::RaggedRow`] if a row length differs from the number of
    /// rows, and [`SquareError::SymbolOutOfRange`] for a symbol `>= n`.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, SquareError>
    where
        R: AsRef<[usize]>,
    {
        let order = rows.len();
        if order == 0 {
            return Err(SquareError::Empty);
        }
        let mut symbols = Vec::with_capacity(order * order);
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != order {
                return Err(SquareError::RaggedRow {
                    row,
                    len: entries.len(),
                    order,
                });
            }
            symbols.extend_from_slice(entries);
        }
        Self::from_symbols(order, symbols)
    }

    /// Builds a square of order `order` from its symbols in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::Empty`] for order zero,
    /// [`SquareError::WrongLength`] if `symbols` does not hold `order²`
    /// entries, and [`SquareError::SymbolOutOfRange`] for a symbol `>= order`.
    pub fn from_symbols(order: usize, symbols: Vec<usize>) -> Result<Self, SquareError> {
        if order == 0 {
            return Err(SquareError::Empty);
        }
        if symbols.len() != order * order {
            return Err(SquareError::WrongLength {
                len: symbols.len(),
                order,
            });
        }
        if let Some(i) = symbols.iter().position(|&s| s >= order) {
            return Err(SquareError::SymbolOutOfRange {
                row: i / order,
                col: i % order,
                symbol: symbols[i],
                order,
            });
        }
        Ok(Self { order, symbols })
    }

    /// Returns the order `n` of the grid.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the symbol at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the order.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(col < self.order, "column {col} out of range");
        self.row(row)[col]
    }

    /// Returns the symbols of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below the order.
    #[must_use]
    pub fn row(&self, row: usize) -> &[usize] {
        &self.symbols[row * self.order..(row + 1) * self.order]
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.symbols.chunks_exact(self.order)
    }

    /// Returns the rows as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.rows().map(<[usize]>::to_vec).collect()
    }

    /// Returns all symbols in row-major order.
    #[must_use]
    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    /// Returns `true` if every row and every column holds each symbol once.
    #[must_use]
    pub fn is_latin(&self) -> bool {
        let n = self.order;
        let mut seen = vec![false; n];
        let rows_ok = self.rows().all(|row| {
            seen.fill(false);
            row.iter().all(|&s| !std::mem::replace(&mut seen[s], true))
        });
        rows_ok
            && (0..n).all(|col| {
                seen.fill(false);
                (0..n).all(|row| !std::mem::replace(&mut seen[self.get(row, col)], true))
            })
    }

    /// Returns `true` if the first row and the first column are both
    /// `0, 1, ..., n-1`.
    #[must_use]
    pub fn is_reduced(&self) -> bool {
        (0..self.order).all(|i| self.get(0, i) == i && self.get(i, 0) == i)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, symbol) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let square = Square::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(square.order(), 2);
        assert_eq!(square.symbols(), &[0, 1, 1, 0]);
        assert_eq!(square.row(1), &[1, 0]);
        assert_eq!(square.to_rows(), vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn test_from_rows_errors() {
        let empty: &[[usize; 0]] = &[];
        assert_eq!(Square::from_rows(empty), Err(SquareError::Empty));
        assert_eq!(
            Square::from_rows(&[vec![0, 1], vec![1]]),
            Err(SquareError::RaggedRow {
                row: 1,
                len: 1,
                order: 2
            })
        );
        assert_eq!(
            Square::from_rows(&[[0, 1], [2, 0]]),
            Err(SquareError::SymbolOutOfRange {
                row: 1,
                col: 0,
                symbol: 2,
                order: 2
            })
        );
    }

    #[test]
    fn test_from_symbols_errors() {
        assert_eq!(Square::from_symbols(0, vec![]), Err(SquareError::Empty));
        assert_eq!(
            Square::from_symbols(2, vec![0, 1, 1]),
            Err(SquareError::WrongLength { len: 3, order: 2 })
        );
    }

    #[test]
    fn test_is_latin() {
        let latin = Square::from_rows(&[[1, 2, 0], [0, 1, 2], [2, 0, 1]]).unwrap();
        assert!(latin.is_latin());
        assert!(!latin.is_reduced());

        let bad_column = Square::from_rows(&[[0, 1], [0, 1]]).unwrap();
        assert!(!bad_column.is_latin());

        let bad_row = Square::from_rows(&[[0, 0], [1, 1]]).unwrap();
        assert!(!bad_row.is_latin());

        assert!(Square::from_rows(&[[0]]).unwrap().is_latin());
    }

    #[test]
    fn test_is_reduced() {
        let square = Square::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
        assert!(square.is_reduced());
        let square = Square::from_rows(&[[0, 1, 2], [2, 0, 1], [1, 2, 0]]).unwrap();
        assert!(!square.is_reduced());
    }

    #[test]
    fn test_display() {
        let square = Square::from_rows(&[[0, 1], [1, 0]]).unwrap();
        assert_eq!(square.to_string(), "0 1\n1 0");
    }

    #[test]
    fn test_ordering() {
        let a = Square::from_rows(&[[0, 1], [1, 0]]).unwrap();
        let b = Square::from_rows(&[[1, 0], [0, 1]]).unwrap();
        assert!(a < b);
    }
}
