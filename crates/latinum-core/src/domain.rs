//! Element domains for indexed sets.
//!
//! A [`Domain`] describes the universe of elements an
//! [`IndexedSet`](crate::IndexedSet) can hold and how each element maps to a
//! bit position. Two domains are provided:
//!
//! - [`FlatDomain`] - plain integers `0..size`
//! - [`ShapeDomain`] - coordinate tuples within a multi-dimensional shape,
//!   flattened with mixed-radix positional encoding (last axis fastest)
//!
//! # Examples
//!
//! ```
//! use latinum_core::{Domain, ShapeDomain, coords};
//!
//! let domain = ShapeDomain::new(&[2, 3, 4])?;
//! assert_eq!(domain.size(), 24);
//!
//! let index = domain.to_index(&coords(&[1, 0, 2]))?;
//! assert_eq!(index, 14);
//! assert_eq!(domain.from_index(14), coords(&[1, 0, 2]));
//! # Ok::<(), latinum_core::SetError>(())
//! ```

use std::{fmt::Debug, hash::Hash};

use tinyvec::TinyVec;

use crate::{BitSet, SetError};

/// Coordinates of an element in a [`ShapeDomain`].
///
/// Up to four coordinates are stored inline.
pub type Coords = TinyVec<[usize; 4]>;

/// Builds [`Coords`] from a slice of coordinates.
#[must_use]
pub fn coords(values: &[usize]) -> Coords {
    values.iter().copied().collect()
}

/// Maps the elements of a bounded universe to bit positions and back.
///
/// Implementations must make [`to_index`](Self::to_index) and
/// [`from_index`](Self::from_index) mutual inverses over `0..size()`, and
/// `size()` must lie in `1..=128`.
pub trait Domain: Debug + Clone + PartialEq + Eq + Hash {
    /// The type of elements in this domain.
    type Element: Debug + Clone + PartialEq + Eq;

    /// Returns the number of elements in the domain.
    fn size(&self) -> usize;

    /// Validates an element and returns its bit position.
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not belong to the domain.
    fn to_index(&self, element: &Self::Element) -> Result<usize, SetError>;

    /// Returns the element stored at a bit position.
    ///
    /// `index` must be in `0..size()`.
    fn from_index(&self, index: usize) -> Self::Element;
}

/// A domain of plain integers `0..size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlatDomain {
    size: usize,
}

impl FlatDomain {
    /// Creates a domain of integers `0..size`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::ZeroDimension`] if `size` is zero and
    /// [`SetError::CapacityTooLarge`] if it exceeds 128.
    pub fn new(size: usize) -> Result<Self, SetError> {
        if size == 0 {
            return Err(SetError::ZeroDimension { axis: 0 });
        }
        check_size(size)?;
        Ok(Self { size })
    }
}

impl Domain for FlatDomain {
    type Element = usize;

    fn size(&self) -> usize {
        self.size
    }

    fn to_index(&self, element: &usize) -> Result<usize, SetError> {
        if *element >= self.size {
            return Err(SetError::CoordinateOutOfRange {
                axis: 0,
                coordinate: *element,
                bound: self.size,
            });
        }
        Ok(*element)
    }

    fn from_index(&self, index: usize) -> usize {
        debug_assert!(index < self.size);
        index
    }
}

/// A domain of coordinate tuples bounded by a shape.
///
/// An element has one coordinate per dimension, each below that dimension's
/// bound. Elements are flattened in row-major order: the last coordinate
/// varies fastest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeDomain {
    dims: Coords,
    size: usize,
}

impl ShapeDomain {
    /// Creates a domain with the given dimension bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptyShape`] if `dims` is empty,
    /// [`SetError::ZeroDimension`] if any bound is zero, and
    /// [`SetError::CapacityTooLarge`] if the product of the bounds exceeds 128.
    pub fn new(dims: &[usize]) -> Result<Self, SetError> {
        if dims.is_empty() {
            return Err(SetError::EmptyShape);
        }
        if let Some(axis) = dims.iter().position(|&n| n == 0) {
            return Err(SetError::ZeroDimension { axis });
        }
        let size = dims.iter().fold(1_usize, |acc, &n| acc.saturating_mul(n));
        check_size(size)?;
        Ok(Self {
            dims: coords(dims),
            size,
        })
    }

    /// Returns the dimension bounds.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Returns the distance in bit positions between neighbours on `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not a dimension of this domain.
    #[must_use]
    pub fn stride(&self, axis: usize) -> usize {
        self.dims[axis + 1..].iter().product()
    }
}

impl Domain for ShapeDomain {
    type Element = Coords;

    fn size(&self) -> usize {
        self.size
    }

    fn to_index(&self, element: &Coords) -> Result<usize, SetError> {
        if element.len() != self.dims.len() {
            return Err(SetError::ArityMismatch {
                expected: self.dims.len(),
                actual: element.len(),
            });
        }
        let mut index = 0;
        for (axis, (&coordinate, &bound)) in element.iter().zip(self.dims.iter()).enumerate() {
            if coordinate >= bound {
                return Err(SetError::CoordinateOutOfRange {
                    axis,
                    coordinate,
                    bound,
                });
            }
            index = index * bound + coordinate;
        }
        Ok(index)
    }

    fn from_index(&self, mut index: usize) -> Coords {
        debug_assert!(index < self.size);
        let mut element = Coords::from_iter(std::iter::repeat_n(0, self.dims.len()));
        for (coordinate, &bound) in element.iter_mut().zip(self.dims.iter()).rev() {
            *coordinate = index % bound;
            index /= bound;
        }
        element
    }
}

fn check_size(size: usize) -> Result<(), SetError> {
    if size > BitSet::MAX_CAPACITY {
        return Err(SetError::CapacityTooLarge {
            capacity: size,
            max: BitSet::MAX_CAPACITY,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    mod flat_domain {
        use super::*;

        #[test]
        fn test_bounds() {
            assert_eq!(FlatDomain::new(0), Err(SetError::ZeroDimension { axis: 0 }));
            assert!(FlatDomain::new(128).is_ok());
            assert!(matches!(
                FlatDomain::new(129),
                Err(SetError::CapacityTooLarge { .. })
            ));
        }

        #[test]
        fn test_identity_mapping() {
            let domain = FlatDomain::new(10).unwrap();
            for i in 0..10 {
                assert_eq!(domain.to_index(&i), Ok(i));
                assert_eq!(domain.from_index(i), i);
            }
            assert_eq!(
                domain.to_index(&10),
                Err(SetError::CoordinateOutOfRange {
                    axis: 0,
                    coordinate: 10,
                    bound: 10
                })
            );
        }
    }

    mod shape_domain {
        use super::*;

        #[test]
        fn test_invalid_shapes() {
            assert_eq!(ShapeDomain::new(&[]), Err(SetError::EmptyShape));
            assert_eq!(
                ShapeDomain::new(&[2, 3, 4, 0]),
                Err(SetError::ZeroDimension { axis: 3 })
            );
            assert!(matches!(
                ShapeDomain::new(&[12, 12]),
                Err(SetError::CapacityTooLarge { capacity: 144, .. })
            ));
            assert!(matches!(
                ShapeDomain::new(&[usize::MAX, usize::MAX]),
                Err(SetError::CapacityTooLarge { .. })
            ));
        }

        #[test]
        fn test_shape_and_size() {
            let domain = ShapeDomain::new(&[2, 3, 4]).unwrap();
            assert_eq!(domain.size(), 24);
            assert_eq!(domain.dims(), &[2, 3, 4]);
            assert_eq!(domain.ndim(), 3);
            assert_eq!(domain.stride(0), 12);
            assert_eq!(domain.stride(1), 4);
            assert_eq!(domain.stride(2), 1);
        }

        #[test]
        fn test_known_indices() {
            let domain = ShapeDomain::new(&[2, 3, 4]).unwrap();
            assert_eq!(domain.to_index(&coords(&[0, 0, 1])), Ok(1));
            assert_eq!(domain.to_index(&coords(&[0, 2, 0])), Ok(8));
            assert_eq!(domain.to_index(&coords(&[1, 0, 2])), Ok(14));
            assert_eq!(domain.to_index(&coords(&[1, 1, 3])), Ok(19));
        }

        #[test]
        fn test_rejects_bad_elements() {
            let domain = ShapeDomain::new(&[2, 3, 4]).unwrap();
            assert_eq!(
                domain.to_index(&coords(&[0, 0])),
                Err(SetError::ArityMismatch {
                    expected: 3,
                    actual: 2
                })
            );
            assert_eq!(
                domain.to_index(&coords(&[0, 0, 0, 0])),
                Err(SetError::ArityMismatch {
                    expected: 3,
                    actual: 4
                })
            );
            assert_eq!(
                domain.to_index(&coords(&[0, 3, 0])),
                Err(SetError::CoordinateOutOfRange {
                    axis: 1,
                    coordinate: 3,
                    bound: 3
                })
            );
        }

        #[test]
        fn test_many_dimensions_spill() {
            let domain = ShapeDomain::new(&[2, 2, 2, 2, 2, 2]).unwrap();
            let element = coords(&[1, 0, 1, 0, 1, 1]);
            let index = domain.to_index(&element).unwrap();
            assert_eq!(index, 0b10_1011);
            assert_eq!(domain.from_index(index), element);
        }
    }

    fn shapes() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..=5, 1..=4)
            .prop_filter("fits in 128 bits", |dims| dims.iter().product::<usize>() <= 128)
    }

    proptest! {
        #[test]
        fn prop_index_is_bijection(dims in shapes()) {
            let domain = ShapeDomain::new(&dims).unwrap();
            let mut seen = vec![false; domain.size()];
            for index in 0..domain.size() {
                let element = domain.from_index(index);
                prop_assert_eq!(domain.to_index(&element), Ok(index));
                prop_assert!(!seen[index]);
                seen[index] = true;
            }
            prop_assert!(seen.into_iter().all(|s| s));
        }
    }
}
