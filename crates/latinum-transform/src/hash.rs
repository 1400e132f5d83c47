//! Canonical integer encoding of squares.
//!
//! A square of order `n` is read as a base-`n` number whose digits are its
//! symbols in row-major order, cell `(0, 0)` being the most significant.
//! The value identifies the square among all squares of the same order.
//! It has up to `n²` digits, so it is a [`BigUint`].
//!
//! ```
//! use latinum_core::Square;
//! use latinum_transform::{BigUint, from_hash, hash_square};
//!
//! let square = Square::from_rows(&[[0, 1], [1, 0]])?;
//! // digits 0 1 1 0 in base 2
//! assert_eq!(hash_square(&square), BigUint::from(0b0110_u32));
//! assert_eq!(from_hash(BigUint::from(0b0110_u32), 2)?, square);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use latinum_core::Square;
use num_bigint::BigUint;

use crate::{Triple, TransformError, from_orthogonal_array};

/// Encodes a square as a single integer.
#[must_use]
pub fn hash_square(square: &Square) -> BigUint {
    let order = square.order();
    square
        .symbols()
        .iter()
        .fold(BigUint::ZERO, |acc, &symbol| acc * order + symbol)
}

/// Encodes the square described by an orthogonal array.
///
/// # Errors
///
/// Returns the errors of [`from_orthogonal_array`].
pub fn hash_orthogonal_array(triples: &[Triple]) -> Result<BigUint, TransformError> {
    Ok(hash_square(&from_orthogonal_array(triples)?))
}

/// Decodes the square of order `order` encoded by `value`.
///
/// # Errors
///
/// Returns [`TransformError::ZeroOrder`] for order zero,
/// [`TransformError::OrderTooLarge`] if `order²` overflows, and
/// [`TransformError::HashOutOfRange`] if `value` is at least `order^(order²)`.
pub fn from_hash(mut value: BigUint, order: usize) -> Result<Square, TransformError> {
    if order == 0 {
        return Err(TransformError::ZeroOrder);
    }
    let cells = order
        .checked_mul(order)
        .ok_or(TransformError::OrderTooLarge { order })?;
    let base = BigUint::from(order);

    let mut symbols = vec![0; cells];
    for symbol in symbols.iter_mut().rev() {
        let digit = &value % &base;
        value /= &base;
        *symbol = usize::try_from(&digit)
            .unwrap_or_else(|_| unreachable!("base-{order} digit {digit} exceeds usize"));
    }
    if value != BigUint::ZERO {
        return Err(TransformError::HashOutOfRange { order });
    }
    Ok(Square::from_symbols(order, symbols)?)
}
