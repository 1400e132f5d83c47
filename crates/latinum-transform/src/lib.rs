//! Pure transforms between square representations.
//!
//! Nothing here searches. These functions convert and permute finished
//! [`Square`](latinum_core::Square)s:
//!
//! - [`triple`]: grid ⇄ orthogonal array of `(row, col, symbol)` triples
//! - [`conjugate`]: the six role permutations of a triple
//! - [`isotopy`]: symbol relabelings and row reorderings
//! - [`hash`]: canonical base-`n` integer encoding
//!
//! # Examples
//!
//! ```
//! use latinum_core::Square;
//! use latinum_transform::{Conjugate, conjugate_square, to_orthogonal_array};
//!
//! let square = Square::from_rows(&[[0, 1, 2], [2, 0, 1], [1, 2, 0]])?;
//! assert_eq!(to_orthogonal_array(&square).len(), 9);
//!
//! let transposed = conjugate_square(&square, Conjugate::Crs)?;
//! assert_eq!(transposed.row(0), &[0, 2, 1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod conjugate;
pub mod error;
pub mod hash;
pub mod isotopy;
pub mod triple;

pub use self::{
    conjugate::{Conjugate, ParseConjugateError, conjugate_square, permute_orthogonal_array},
    error::TransformError,
    hash::{from_hash, hash_orthogonal_array, hash_square},
    isotopy::{isotope, permute_rows, relabel_symbols},
    triple::{Triple, from_orthogonal_array, to_orthogonal_array},
};

pub use num_bigint::BigUint;
