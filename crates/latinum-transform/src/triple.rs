//! Orthogonal-array representation of squares.
//!
//! An orthogonal array lists one [`Triple`] `(row, col, symbol)` per cell.
//! It is the representation the role conjugates operate on.

use latinum_core::Square;

use crate::TransformError;

/// One cell of a square: its row, column and symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// Symbol at `(row, col)`.
    pub symbol: usize,
}

impl Triple {
    /// Creates a triple.
    #[must_use]
    pub const fn new(row: usize, col: usize, symbol: usize) -> Self {
        Self { row, col, symbol }
    }
}

/// Lists the cells of `square` in row-major order.
#[must_use]
pub fn to_orthogonal_array(square: &Square) -> Vec<Triple> {
    square
        .rows()
        .enumerate()
        .flat_map(|(row, symbols)| {
            symbols
                .iter()
                .enumerate()
                .map(move |(col, &symbol)| Triple::new(row, col, symbol))
        })
        .collect()
}

/// Rebuilds a square from its triples, in any order.
///
/// The order is inferred as one more than the largest row index.
///
/// # Errors
///
/// Returns [`TransformError::EmptyArray`] for no triples,
/// [`TransformError::ColumnOutOfRange`] for a column past the inferred order,
/// [`TransformError::DuplicateCell`] and [`TransformError::MissingCell`] when
/// the triples do not cover every cell exactly once, and
/// [`TransformError::Square`] for a symbol outside `0..n`.
pub fn from_orthogonal_array(triples: &[Triple]) -> Result<Square, TransformError> {
    let order = triples
        .iter()
        .map(|t| t.row)
        .max()
        .ok_or(TransformError::EmptyArray)?
        + 1;

    let mut cells = vec![None; order * order];
    for triple in triples {
        if triple.col >= order {
            return Err(TransformError::ColumnOutOfRange {
                col: triple.col,
                order,
            });
        }
        let cell = &mut cells[triple.row * order + triple.col];
        if cell.is_some() {
            return Err(TransformError::DuplicateCell {
                row: triple.row,
                col: triple.col,
            });
        }
        *cell = Some(triple.symbol);
    }

    let symbols = cells
        .into_iter()
        .enumerate()
        .map(|(i, cell)| {
            cell.ok_or(TransformError::MissingCell {
                row: i / order,
                col: i % order,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Square::from_symbols(order, symbols)?)
}
