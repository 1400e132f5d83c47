//! Symbol relabelings and row reorderings.
//!
//! Both maps send Latin squares to Latin squares. The symmetry expansion of
//! the enumerator combines them to walk the orbit of a reduced square.

use latinum_core::Square;

use crate::TransformError;

/// Replaces every symbol `s` of `square` with `map[s]`.
///
/// # Errors
///
/// Returns [`TransformError::NotAPermutation`] if `map` is not a permutation
/// of `0..n`.
pub fn relabel_symbols(square: &Square, map: &[usize]) -> Result<Square, TransformError> {
    check_permutation(map, square.order())?;
    let symbols = square.symbols().iter().map(|&s| map[s]).collect();
    Ok(Square::from_symbols(square.order(), symbols)?)
}

/// Reorders rows so that row `i` of the result is row `order[i]` of `square`.
///
/// # Errors
///
/// Returns [`TransformError::NotAPermutation`] if `order` is not a
/// permutation of `0..n`.
pub fn permute_rows(square: &Square, order: &[usize]) -> Result<Square, TransformError> {
    check_permutation(order, square.order())?;
    let symbols = order
        .iter()
        .flat_map(|&r| square.row(r).iter().copied())
        .collect();
    Ok(Square::from_symbols(square.order(), symbols)?)
}

/// Applies a symbol relabeling, then a row reordering.
///
/// # Errors
///
/// Returns the errors of [`relabel_symbols`] and [`permute_rows`].
pub fn isotope(square: &Square, map: &[usize], order: &[usize]) -> Result<Square, TransformError> {
    permute_rows(&relabel_symbols(square, map)?, order)
}

fn check_permutation(map: &[usize], order: usize) -> Result<(), TransformError> {
    let mut seen = vec![false; order];
    let valid = map.len() == order
        && map
            .iter()
            .all(|&v| v < order && !std::mem::replace(&mut seen[v], true));
    if !valid {
        return Err(TransformError::NotAPermutation { order });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyclic() -> Square {
        Square::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap()
    }

    #[test]
    fn test_relabel_symbols() {
        let image = relabel_symbols(&cyclic(), &[2, 0, 1]).unwrap();
        assert_eq!(
            image,
            Square::from_rows(&[[2, 0, 1], [0, 1, 2], [1, 2, 0]]).unwrap()
        );
        assert!(image.is_latin());
    }

    #[test]
    fn test_permute_rows() {
        let image = permute_rows(&cyclic(), &[0, 2, 1]).unwrap();
        assert_eq!(
            image,
            Square::from_rows(&[[0, 1, 2], [2, 0, 1], [1, 2, 0]]).unwrap()
        );
    }

    #[test]
    fn test_identity_maps() {
        let square = cyclic();
        assert_eq!(isotope(&square, &[0, 1, 2], &[0, 1, 2]).unwrap(), square);
    }

    #[test]
    fn test_isotope_order_of_application() {
        let image = isotope(&cyclic(), &[1, 0, 2], &[2, 1, 0]).unwrap();
        let expected = Square::from_rows(&[[2, 1, 0], [0, 2, 1], [1, 0, 2]]).unwrap();
        assert_eq!(image, expected);
    }

    #[test]
    fn test_rejects_non_permutations() {
        let err = Err(TransformError::NotAPermutation { order: 3 });
        assert_eq!(relabel_symbols(&cyclic(), &[0, 1]), err);
        assert_eq!(relabel_symbols(&cyclic(), &[0, 1, 1]), err);
        assert_eq!(permute_rows(&cyclic(), &[0, 1, 3]), err);
        assert_eq!(permute_rows(&cyclic(), &[0, 1, 2, 0]), err);
    }
}
