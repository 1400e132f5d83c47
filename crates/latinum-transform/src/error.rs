//! Errors reported by the grid transforms.

use latinum_core::SquareError;

/// Errors that can occur when converting or transforming squares.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TransformError {
    /// An orthogonal array with no triples was supplied.
    #[display("orthogonal array is empty")]
    EmptyArray,
    /// A column index is not below the inferred order.
    #[display("column {col} is outside 0..{order}")]
    ColumnOutOfRange {
        /// The offending column.
        col: usize,
        /// The order inferred from the row indices.
        order: usize,
    },
    /// Two triples address the same cell.
    #[display("cell ({row}, {col}) appears more than once")]
    DuplicateCell {
        /// Row of the repeated cell.
        row: usize,
        /// Column of the repeated cell.
        col: usize,
    },
    /// No triple addresses a cell of the grid.
    #[display("cell ({row}, {col}) has no symbol")]
    MissingCell {
        /// Row of the empty cell.
        row: usize,
        /// Column of the empty cell.
        col: usize,
    },
    /// A map is not a permutation of `0..order`.
    #[display("map is not a permutation of 0..{order}")]
    NotAPermutation {
        /// The order the map was applied to.
        order: usize,
    },
    /// A square of this order has more cells than `usize` can count.
    #[display("order {order} is too large to decode")]
    OrderTooLarge {
        /// Requested order.
        order: usize,
    },
    /// A hash value cannot be decoded at order zero.
    #[display("square order must be positive")]
    ZeroOrder,
    /// A hash value is at least `order^(order²)`.
    #[display("hash value is too large for a square of order {order}")]
    HashOutOfRange {
        /// Requested order.
        order: usize,
    },
    /// The resulting grid is malformed.
    #[display("invalid square: {_0}")]
    #[from]
    Square(SquareError),
}
