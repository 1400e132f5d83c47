//! Sets of domain elements packed into a single bit set.
//!
//! [`IndexedSet`] layers element addressing onto [`BitSet`]: each element of
//! its [`Domain`] owns one bit. On top of that it offers the usual mutable-set
//! operations and the full set algebra.
//!
//! Element-level methods validate their input and report problems as
//! [`SetError`]. Index-level methods (`*_index`) skip element validation and
//! panic on an out-of-domain index, which suits callers that derive indices
//! from the domain itself.
//!
//! # Examples
//!
//! ```
//! use latinum_core::{FlatDomain, IndexedSet};
//!
//! let domain = FlatDomain::new(8)?;
//! let a = IndexedSet::from_elements(domain, [1_usize, 2, 3])?;
//! let b = IndexedSet::from_elements(domain, [2_usize, 3, 4])?;
//!
//! assert_eq!(&a | &b, IndexedSet::from_elements(domain, [1_usize, 2, 3, 4])?);
//! assert_eq!(&a & &b, IndexedSet::from_elements(domain, [2_usize, 3])?);
//! assert_eq!(a.difference([&b])?, IndexedSet::from_elements(domain, [1_usize])?);
//! assert!(a.is_subset(&(&a | &b))?);
//! # Ok::<(), latinum_core::SetError>(())
//! ```

use std::{
    borrow::Borrow,
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign},
};

use crate::{BitSet, Domain, SetError};

/// A set of elements from a [`Domain`], stored as one bit per element.
///
/// Two sets are equal when they share a domain and hold the same elements.
/// Sets over different domains compare unequal rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexedSet<D: Domain> {
    domain: D,
    bits: BitSet,
}

impl<D: Domain> IndexedSet<D> {
    /// Creates an empty set over `domain`.
    ///
    /// # Panics
    ///
    /// Panics if the domain reports a size outside `1..=128`. The domains in
    /// this crate reject such sizes when they are constructed.
    #[must_use]
    pub fn new(domain: D) -> Self {
        let bits = BitSet::empty_unchecked(domain.size());
        Self { domain, bits }
    }

    /// Creates a set holding every element of `domain`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Self::new`].
    #[must_use]
    pub fn full(domain: D) -> Self {
        let mut set = Self::new(domain);
        set.bits.replace_value(crate::bit_set::low_mask(set.size()));
        set
    }

    /// Creates a set from a raw bitmask, bit `i` standing for the element at
    /// index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::ValueOverflow`] if `value` has bits outside the
    /// domain.
    pub fn from_bits(domain: D, value: u128) -> Result<Self, SetError> {
        let bits = BitSet::with_capacity(domain.size(), value)?;
        Ok(Self { domain, bits })
    }

    /// Creates a set from an existing bit set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::SizeMismatch`] if the bit set capacity differs
    /// from the domain size.
    pub fn from_bit_set(domain: D, bits: BitSet) -> Result<Self, SetError> {
        if bits.capacity() != domain.size() {
            return Err(SetError::SizeMismatch {
                capacity: bits.capacity(),
                size: domain.size(),
            });
        }
        Ok(Self { domain, bits })
    }

    /// Creates a set by adding elements one at a time.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first element that does not
    /// belong to the domain.
    pub fn from_elements<I>(domain: D, elements: I) -> Result<Self, SetError>
    where
        I: IntoIterator,
        I::Item: Borrow<D::Element>,
    {
        let mut set = Self::new(domain);
        for element in elements {
            set.add(element.borrow())?;
        }
        Ok(set)
    }

    /// Returns the domain of this set.
    #[must_use]
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Returns the number of elements in the domain.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bits.capacity()
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns `true` if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.value() == 0
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub fn bits(&self) -> u128 {
        self.bits.value()
    }

    /// Returns the underlying bit set.
    #[must_use]
    pub fn as_bit_set(&self) -> &BitSet {
        &self.bits
    }

    /// Returns whether `element` is in the set.
    ///
    /// # Errors
    ///
    /// Returns an error if `element` does not belong to the domain.
    pub fn contains(&self, element: &D::Element) -> Result<bool, SetError> {
        let index = self.domain.to_index(element)?;
        Ok(self.contains_index(index))
    }

    /// Adds `element` to the set, returning whether it was newly added.
    ///
    /// # Errors
    ///
    /// Returns an error if `element` does not belong to the domain.
    pub fn add(&mut self, element: &D::Element) -> Result<bool, SetError> {
        let index = self.domain.to_index(element)?;
        Ok(self.insert_index(index))
    }

    /// Removes `element` if present, returning whether it was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if `element` does not belong to the domain.
    pub fn discard(&mut self, element: &D::Element) -> Result<bool, SetError> {
        let index = self.domain.to_index(element)?;
        Ok(self.remove_index(index))
    }

    /// Removes `element`, which must be present.
    ///
    /// # Errors
    ///
    /// Returns an error if `element` does not belong to the domain, or
    /// [`SetError::NotFound`] if it is not in the set.
    pub fn remove(&mut self, element: &D::Element) -> Result<(), SetError> {
        let index = self.domain.to_index(element)?;
        if !self.remove_index(index) {
            return Err(SetError::NotFound);
        }
        Ok(())
    }

    /// Adds or removes `element` according to `present`.
    ///
    /// # Errors
    ///
    /// Returns an error if `element` does not belong to the domain.
    pub fn set(&mut self, element: &D::Element, present: bool) -> Result<(), SetError> {
        let index = self.domain.to_index(element)?;
        if present {
            self.insert_index(index);
        } else {
            self.remove_index(index);
        }
        Ok(())
    }

    /// Removes and returns the element with the lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Empty`] if the set is empty.
    pub fn pop(&mut self) -> Result<D::Element, SetError> {
        let index = self.first_index().ok_or(SetError::Empty)?;
        self.remove_index(index);
        Ok(self.domain.from_index(index))
    }

    /// Returns the element with the lowest index.
    #[must_use]
    pub fn first(&self) -> Option<D::Element> {
        self.first_index().map(|i| self.domain.from_index(i))
    }

    /// Returns the element with the highest index.
    #[must_use]
    pub fn last(&self) -> Option<D::Element> {
        self.iter_indices().next_back().map(|i| self.domain.from_index(i))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.bits.replace_value(0);
    }

    /// Returns an iterator over the elements in ascending index order.
    ///
    /// The iterator is double-ended; `.rev()` yields descending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            domain: &self.domain,
            indices: self.iter_indices(),
        }
    }

    /// Returns whether the element at `index` is in the set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the domain size.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        self.bits.value() & self.bit(index) != 0
    }

    /// Adds the element at `index`, returning whether it was newly added.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the domain size.
    pub fn insert_index(&mut self, index: usize) -> bool {
        let bit = self.bit(index);
        let value = self.bits.value();
        self.bits.replace_value(value | bit);
        value & bit == 0
    }

    /// Removes the element at `index`, returning whether it was present.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the domain size.
    pub fn remove_index(&mut self, index: usize) -> bool {
        let bit = self.bit(index);
        let value = self.bits.value();
        self.bits.replace_value(value & !bit);
        value & bit != 0
    }

    /// Returns the lowest index in the set.
    #[must_use]
    pub fn first_index(&self) -> Option<usize> {
        let value = self.bits.value();
        (value != 0).then(|| value.trailing_zeros() as usize)
    }

    /// Returns an iterator over the indices of the elements, ascending.
    #[must_use]
    pub fn iter_indices(&self) -> Indices {
        Indices {
            bits: self.bits.value(),
        }
    }

    /// Keeps only the bits set in `mask`.
    pub(crate) fn retain_mask(&mut self, mask: u128) {
        self.bits.replace_value(self.bits.value() & mask);
    }

    fn bit(&self, index: usize) -> u128 {
        assert!(
            index < self.size(),
            "index {index} is outside a domain of size {}",
            self.size()
        );
        1 << index
    }

    fn check_domain(&self, other: &Self) -> Result<(), SetError> {
        if self.domain != other.domain {
            return Err(SetError::DomainMismatch);
        }
        Ok(())
    }

    /// Folds the bitmasks of `others` into this set's bitmask, validating
    /// every operand before producing a result.
    fn fold<'a, I>(&self, others: I, op: fn(u128, u128) -> u128) -> Result<u128, SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        others.into_iter().try_fold(self.bits.value(), |acc, other| {
            self.check_domain(other)?;
            Ok(op(acc, other.bits.value()))
        })
    }

    fn with_value(&self, value: u128) -> Self {
        let mut set = self.clone();
        set.bits.replace_value(value);
        set
    }

    /// Returns the elements in this set or any of `others`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if any operand has a different
    /// domain.
    pub fn union<'a, I>(&self, others: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        Ok(self.with_value(self.fold(others, |a, b| a | b)?))
    }

    /// Returns the elements in this set and every one of `others`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if any operand has a different
    /// domain.
    pub fn intersection<'a, I>(&self, others: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        Ok(self.with_value(self.fold(others, |a, b| a & b)?))
    }

    /// Returns the elements in this set and none of `others`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if any operand has a different
    /// domain.
    pub fn difference<'a, I>(&self, others: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        Ok(self.with_value(self.fold(others, |a, b| a & !b)?))
    }

    /// Returns the elements in an odd number of the operands (this set
    /// included).
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if any operand has a different
    /// domain.
    pub fn symmetric_difference<'a, I>(&self, others: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        Ok(self.with_value(self.fold(others, |a, b| a ^ b)?))
    }

    /// Adds the elements of every one of `others`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if any operand has a different
    /// domain. The set is unchanged in that case.
    pub fn update<'a, I>(&mut self, others: I) -> Result<(), SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        let value = self.fold(others, |a, b| a | b)?;
        self.bits.replace_value(value);
        Ok(())
    }

    /// Keeps only the elements also present in every one of `others`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if any operand has a different
    /// domain. The set is unchanged in that case.
    pub fn intersection_update<'a, I>(&mut self, others: I) -> Result<(), SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        let value = self.fold(others, |a, b| a & b)?;
        self.bits.replace_value(value);
        Ok(())
    }

    /// Removes the elements present in any of `others`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if any operand has a different
    /// domain. The set is unchanged in that case.
    pub fn difference_update<'a, I>(&mut self, others: I) -> Result<(), SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        let value = self.fold(others, |a, b| a & !b)?;
        self.bits.replace_value(value);
        Ok(())
    }

    /// Toggles the elements of each of `others` in turn.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if any operand has a different
    /// domain. The set is unchanged in that case.
    pub fn symmetric_difference_update<'a, I>(&mut self, others: I) -> Result<(), SetError>
    where
        I: IntoIterator<Item = &'a Self>,
        D: 'a,
    {
        let value = self.fold(others, |a, b| a ^ b)?;
        self.bits.replace_value(value);
        Ok(())
    }

    /// Returns `true` if the two sets share no element.
    ///
    /// Sets over different domains are reported as not disjoint.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.check_domain(other).is_ok() && self.bits() & other.bits() == 0
    }

    /// Returns `true` if every element of this set is in `other`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if the domains differ.
    pub fn is_subset(&self, other: &Self) -> Result<bool, SetError> {
        self.check_domain(other)?;
        Ok(self.bits() & !other.bits() == 0)
    }

    /// Returns `true` if this set is a subset of `other` and not equal to it.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if the domains differ.
    pub fn is_proper_subset(&self, other: &Self) -> Result<bool, SetError> {
        Ok(self.is_subset(other)? && self.bits() != other.bits())
    }

    /// Returns `true` if every element of `other` is in this set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if the domains differ.
    pub fn is_superset(&self, other: &Self) -> Result<bool, SetError> {
        other.is_subset(self)
    }

    /// Returns `true` if this set is a superset of `other` and not equal to it.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DomainMismatch`] if the domains differ.
    pub fn is_proper_superset(&self, other: &Self) -> Result<bool, SetError> {
        other.is_proper_subset(self)
    }

    fn assert_same_domain(&self, other: &Self) {
        assert!(
            self.domain == other.domain,
            "set operator applied to sets over different domains: {:?} and {:?}",
            self.domain,
            other.domain
        );
    }
}

macro_rules! impl_set_operators {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $op:expr;)*) => {
        $(
            /// # Panics
            ///
            /// Panics if the operands are defined over different domains.
            impl<D: Domain> $trait for &IndexedSet<D> {
                type Output = IndexedSet<D>;

                fn $method(self, rhs: Self) -> IndexedSet<D> {
                    let mut out = self.clone();
                    out.$assign_method(rhs);
                    out
                }
            }

            /// # Panics
            ///
            /// Panics if the operands are defined over different domains.
            impl<D: Domain> $assign_trait<&IndexedSet<D>> for IndexedSet<D> {
                fn $assign_method(&mut self, rhs: &IndexedSet<D>) {
                    self.assert_same_domain(rhs);
                    let op: fn(u128, u128) -> u128 = $op;
                    self.bits.replace_value(op(self.bits.value(), rhs.bits.value()));
                }
            }
        )*
    };
}

impl_set_operators! {
    BitOr::bitor, BitOrAssign::bitor_assign => |a, b| a | b;
    BitAnd::bitand, BitAndAssign::bitand_assign => |a, b| a & b;
    BitXor::bitxor, BitXorAssign::bitxor_assign => |a, b| a ^ b;
    Sub::sub, SubAssign::sub_assign => |a, b| a & !b;
}

impl<D: Domain> Display for IndexedSet<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element:?}")?;
        }
        f.write_str("}")
    }
}

impl<'a, D: Domain> IntoIterator for &'a IndexedSet<D> {
    type Item = D::Element;
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the set bit indices of a bitmask.
#[derive(Debug, Clone)]
pub struct Indices {
    bits: u128,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let index = (u128::BITS - 1 - self.bits.leading_zeros()) as usize;
        self.bits &= !(1 << index);
        Some(index)
    }
}

impl ExactSizeIterator for Indices {}
impl FusedIterator for Indices {}

/// Iterator over the elements of an [`IndexedSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a, D: Domain> {
    domain: &'a D,
    indices: Indices,
}

impl<D: Domain> Iterator for Iter<'_, D> {
    type Item = D::Element;

    fn next(&mut self) -> Option<D::Element> {
        self.indices.next().map(|i| self.domain.from_index(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<D: Domain> DoubleEndedIterator for Iter<'_, D> {
    fn next_back(&mut self) -> Option<D::Element> {
        self.indices.next_back().map(|i| self.domain.from_index(i))
    }
}

impl<D: Domain> ExactSizeIterator for Iter<'_, D> {}
impl<D: Domain> FusedIterator for Iter<'_, D> {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Coords, FlatDomain, ShapeDomain, coords};

    // Elements 1, 8, 14 and 19 of the (2, 3, 4) domain.
    const A: [usize; 3] = [0, 0, 1];
    const B: [usize; 3] = [0, 2, 0];
    const C: [usize; 3] = [1, 0, 2];
    const D: [usize; 3] = [1, 1, 3];

    fn domain() -> ShapeDomain {
        ShapeDomain::new(&[2, 3, 4]).unwrap()
    }

    fn set_of(elements: &[[usize; 3]]) -> IndexedSet<ShapeDomain> {
        IndexedSet::from_elements(domain(), elements.iter().map(|e| coords(e))).unwrap()
    }

    #[test]
    fn test_empty_init() {
        let set = IndexedSet::new(domain());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.size(), 24);
        assert_eq!(IndexedSet::from_bits(domain(), 0).unwrap(), set);
        assert_eq!(set_of(&[]), set);
    }

    #[test]
    fn test_bits_init() {
        let set = IndexedSet::from_bits(domain(), (1 << 1) | (1 << 8)).unwrap();
        assert_eq!(set, set_of(&[A, B]));
        assert_eq!(set.bits(), 0b1_0000_0010);
        assert!(matches!(
            IndexedSet::from_bits(domain(), 1 << 24),
            Err(SetError::ValueOverflow { .. })
        ));
    }

    #[test]
    fn test_bit_set_init() {
        let bits = BitSet::with_capacity(24, 0b11).unwrap();
        let set = IndexedSet::from_bit_set(domain(), bits).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            IndexedSet::from_bit_set(domain(), BitSet::new(4).unwrap()),
            Err(SetError::SizeMismatch {
                capacity: 4,
                size: 24
            })
        );
    }

    #[test]
    fn test_invalid_element_in_init() {
        let result = IndexedSet::from_elements(domain(), [coords(&A), coords(&[2, 0, 0])]);
        assert_eq!(
            result,
            Err(SetError::CoordinateOutOfRange {
                axis: 0,
                coordinate: 2,
                bound: 2
            })
        );
    }

    #[test]
    fn test_full() {
        let set = IndexedSet::full(domain());
        assert_eq!(set.len(), 24);
        assert_eq!(set.bits(), (1 << 24) - 1);

        let max = IndexedSet::full(FlatDomain::new(128).unwrap());
        assert_eq!(max.bits(), u128::MAX);
    }

    #[test]
    fn test_iteration_order() {
        let set = set_of(&[D, A, C, B]);
        let forward: Vec<Coords> = set.iter().collect();
        assert_eq!(forward, [A, B, C, D].map(|e| coords(&e)));
        let backward: Vec<Coords> = set.iter().rev().collect();
        assert_eq!(backward, [D, C, B, A].map(|e| coords(&e)));
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_contains() {
        let set = set_of(&[A, C]);
        assert_eq!(set.contains(&coords(&A)), Ok(true));
        assert_eq!(set.contains(&coords(&B)), Ok(false));
        assert!(matches!(
            set.contains(&coords(&[0, 0])),
            Err(SetError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn test_add_discard_remove() {
        let mut set = IndexedSet::new(domain());
        assert_eq!(set.add(&coords(&A)), Ok(true));
        assert_eq!(set.add(&coords(&A)), Ok(false));
        assert_eq!(set.discard(&coords(&B)), Ok(false));
        assert_eq!(set.remove(&coords(&B)), Err(SetError::NotFound));
        assert_eq!(set.remove(&coords(&A)), Ok(()));
        assert!(set.is_empty());
        assert!(set.add(&coords(&[0, 3, 0])).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_element() {
        let mut set = IndexedSet::new(domain());
        set.set(&coords(&C), true).unwrap();
        assert_eq!(set, set_of(&[C]));
        set.set(&coords(&C), false).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_pop() {
        let mut set = set_of(&[C, A]);
        assert_eq!(set.pop(), Ok(coords(&A)));
        assert_eq!(set.pop(), Ok(coords(&C)));
        assert_eq!(set.pop(), Err(SetError::Empty));
    }

    #[test]
    fn test_first_last_clear() {
        let mut set = set_of(&[B, D, A]);
        assert_eq!(set.first(), Some(coords(&A)));
        assert_eq!(set.last(), Some(coords(&D)));
        set.clear();
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = set_of(&[A, B]);
        let mut copy = original.clone();
        copy.add(&coords(&C)).unwrap();
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_index_api() {
        let mut set = IndexedSet::new(FlatDomain::new(10).unwrap());
        assert!(set.insert_index(3));
        assert!(!set.insert_index(3));
        assert!(set.contains_index(3));
        assert_eq!(set.first_index(), Some(3));
        assert!(set.insert_index(9));
        assert_eq!(set.iter_indices().collect::<Vec<_>>(), [3, 9]);
        assert!(set.remove_index(3));
        assert!(!set.remove_index(3));
    }

    #[test]
    #[should_panic(expected = "outside a domain of size 10")]
    fn test_index_api_panics_out_of_range() {
        let mut set = IndexedSet::new(FlatDomain::new(10).unwrap());
        set.insert_index(10);
    }

    #[test]
    fn test_union_and_update() {
        let ab = set_of(&[A, B]);
        let bc = set_of(&[B, C]);
        let cd = set_of(&[C, D]);
        assert_eq!(ab.union([&bc, &cd]).unwrap(), set_of(&[A, B, C, D]));
        assert_eq!(&ab | &bc, set_of(&[A, B, C]));

        let mut set = ab.clone();
        set.update([&cd]).unwrap();
        assert_eq!(set, set_of(&[A, B, C, D]));
        let mut set = ab.clone();
        set |= &bc;
        assert_eq!(set, set_of(&[A, B, C]));
    }

    #[test]
    fn test_intersection_and_update() {
        let abc = set_of(&[A, B, C]);
        let bcd = set_of(&[B, C, D]);
        let cd = set_of(&[C, D]);
        assert_eq!(abc.intersection([&bcd, &cd]).unwrap(), set_of(&[C]));
        assert_eq!(&abc & &bcd, set_of(&[B, C]));

        let mut set = abc.clone();
        set.intersection_update([&bcd]).unwrap();
        assert_eq!(set, set_of(&[B, C]));
        let mut set = abc.clone();
        set &= &cd;
        assert_eq!(set, set_of(&[C]));
    }

    #[test]
    fn test_difference_and_update() {
        let abcd = set_of(&[A, B, C, D]);
        let a = set_of(&[A]);
        let cd = set_of(&[C, D]);
        assert_eq!(abcd.difference([&a, &cd]).unwrap(), set_of(&[B]));
        assert_eq!(&cd - &abcd, set_of(&[]));

        let mut set = abcd.clone();
        set.difference_update([&cd]).unwrap();
        assert_eq!(set, set_of(&[A, B]));
        let mut set = abcd.clone();
        set -= &a;
        assert_eq!(set, set_of(&[B, C, D]));
    }

    #[test]
    fn test_symmetric_difference_and_update() {
        let abc = set_of(&[A, B, C]);
        let bcd = set_of(&[B, C, D]);
        assert_eq!(abc.symmetric_difference([&bcd]).unwrap(), set_of(&[A, D]));
        assert_eq!(&abc ^ &bcd, set_of(&[A, D]));

        let mut set = abc.clone();
        set.symmetric_difference_update([&bcd]).unwrap();
        assert_eq!(set, set_of(&[A, D]));
        set ^= &set_of(&[A]);
        assert_eq!(set, set_of(&[D]));
    }

    #[test]
    fn test_no_operands_is_copy() {
        let set = set_of(&[A, D]);
        assert_eq!(set.union([]).unwrap(), set);
        assert_eq!(set.difference(std::iter::empty()).unwrap(), set);
    }

    #[test]
    fn test_predicates() {
        let ab = set_of(&[A, B]);
        let abc = set_of(&[A, B, C]);
        let d = set_of(&[D]);

        assert!(ab.is_subset(&abc).unwrap());
        assert!(ab.is_subset(&ab).unwrap());
        assert!(ab.is_proper_subset(&abc).unwrap());
        assert!(!ab.is_proper_subset(&ab).unwrap());
        assert!(!abc.is_subset(&ab).unwrap());

        assert!(abc.is_superset(&ab).unwrap());
        assert!(abc.is_proper_superset(&ab).unwrap());
        assert!(!abc.is_proper_superset(&abc).unwrap());

        assert!(ab.is_disjoint(&d));
        assert!(!ab.is_disjoint(&abc));
        assert!(IndexedSet::new(domain()).is_disjoint(&IndexedSet::new(domain())));
    }

    #[test]
    fn test_domain_mismatch() {
        let mut set = set_of(&[A]);
        let other = IndexedSet::full(ShapeDomain::new(&[4, 3, 2]).unwrap());

        assert_ne!(set, other);
        assert!(!set.is_disjoint(&other));
        assert_eq!(set.is_subset(&other), Err(SetError::DomainMismatch));
        assert_eq!(set.is_superset(&other), Err(SetError::DomainMismatch));
        assert_eq!(set.union([&other]), Err(SetError::DomainMismatch));

        let before = set.clone();
        let same = set_of(&[B]);
        assert_eq!(set.update([&same, &other]), Err(SetError::DomainMismatch));
        assert_eq!(set, before);
    }

    #[test]
    #[should_panic(expected = "different domains")]
    fn test_operator_panics_on_domain_mismatch() {
        let set = set_of(&[A]);
        let other = IndexedSet::new(ShapeDomain::new(&[24]).unwrap());
        let _ = &set | &other;
    }

    #[test]
    fn test_display() {
        let set = set_of(&[B, A]);
        assert_eq!(set.to_string(), "{[0, 0, 1], [0, 2, 0]}");
        let flat = IndexedSet::from_elements(FlatDomain::new(4).unwrap(), [3_usize, 0]).unwrap();
        assert_eq!(flat.to_string(), "{0, 3}");
        assert_eq!(IndexedSet::new(FlatDomain::new(4).unwrap()).to_string(), "{}");
    }

    fn triple() -> impl Strategy<Value = (u128, u128, u128)> {
        let mask = (1_u128 << 24) - 1;
        (any::<u128>(), any::<u128>(), any::<u128>())
            .prop_map(move |(a, b, c)| (a & mask, b & mask, c & mask))
    }

    proptest! {
        #[test]
        fn prop_algebra_laws((a, b, c) in triple()) {
            let a = IndexedSet::from_bits(domain(), a).unwrap();
            let b = IndexedSet::from_bits(domain(), b).unwrap();
            let c = IndexedSet::from_bits(domain(), c).unwrap();
            let empty = IndexedSet::new(domain());

            prop_assert_eq!(&a | &a, a.clone());
            prop_assert_eq!(&a & &a, a.clone());
            prop_assert_eq!(&a - &a, empty.clone());
            prop_assert_eq!(&a ^ &a, empty);
            prop_assert_eq!(&(&a | &b) & &c, &(&a & &c) | &(&b & &c));
            prop_assert!((&a & &b).is_subset(&a).unwrap());
            prop_assert!((&a | &b).is_superset(&b).unwrap());
            prop_assert!((&a - &b).is_disjoint(&b));
            prop_assert_eq!((&a | &b).len() + (&a & &b).len(), a.len() + b.len());
        }

        #[test]
        fn prop_iteration_matches_contains(raw in any::<u128>()) {
            let set = IndexedSet::from_bits(domain(), raw & ((1 << 24) - 1)).unwrap();
            let elements: Vec<Coords> = set.iter().collect();
            prop_assert_eq!(elements.len(), set.len());
            for element in &elements {
                prop_assert!(set.contains(element).unwrap());
            }
            let mut reversed: Vec<Coords> = set.iter().rev().collect();
            reversed.reverse();
            prop_assert_eq!(reversed, elements);
        }
    }
}
