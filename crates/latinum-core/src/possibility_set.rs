//! Full-start sets with bulk elimination along every axis.
//!
//! A [`PossibilitySet`] is an [`IndexedSet`] over a [`ShapeDomain`] that
//! starts with every element present. Its [`eliminate`](PossibilitySet::eliminate)
//! operation removes all elements that share at least one coordinate with a
//! given element. For a `(n, n)` grid of cells this is the row-and-column
//! "attack" of a placed symbol.
//!
//! One mask per axis is computed up front, so elimination costs one shift
//! and one AND per axis regardless of the domain size.
//!
//! # Examples
//!
//! ```
//! use latinum_core::{PossibilitySet, coords};
//!
//! let mut cells = PossibilitySet::new(&[4, 4])?;
//! cells.eliminate(&coords(&[1, 2]))?;
//!
//! // Row 1 and column 2 are gone: 16 - 4 - 4 + 1 cells remain.
//! assert_eq!(cells.len(), 9);
//! assert!(!cells.contains(&coords(&[1, 0]))?);
//! assert!(!cells.contains(&coords(&[3, 2]))?);
//! assert!(cells.contains(&coords(&[0, 0]))?);
//! # Ok::<(), latinum_core::SetError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::{Deref, DerefMut},
};

use tinyvec::TinyVec;

use crate::{Coords, Domain, IndexedSet, SetError, ShapeDomain, bit_set::low_mask};

/// Per-axis masks and strides.
type AxisMasks = TinyVec<[(u128, usize); 4]>;

/// An [`IndexedSet`] over a shaped domain supporting coordinate elimination.
///
/// Dereferences to the underlying [`IndexedSet`], so every set operation is
/// available directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PossibilitySet {
    set: IndexedSet<ShapeDomain>,
    /// `(mask, stride)` per axis; `mask` selects coordinate 0 on that axis.
    axes: AxisMasks,
}

impl PossibilitySet {
    /// Creates a full set over a domain with the given dimension bounds.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ShapeDomain::new`].
    pub fn new(dims: &[usize]) -> Result<Self, SetError> {
        Ok(Self::from_domain(ShapeDomain::new(dims)?))
    }

    /// Creates a full set over `domain`.
    #[must_use]
    pub fn from_domain(domain: ShapeDomain) -> Self {
        Self::from_set(IndexedSet::full(domain))
    }

    /// Wraps an existing set, keeping its current contents.
    #[must_use]
    pub fn from_set(set: IndexedSet<ShapeDomain>) -> Self {
        let domain = set.domain();
        let axes = (0..domain.ndim())
            .map(|axis| {
                let stride = domain.stride(axis);
                let block = stride * domain.dims()[axis];
                let mask = (0..domain.size() / block)
                    .fold(0, |mask, outer| mask | (low_mask(stride) << (outer * block)));
                (mask, stride)
            })
            .collect();
        Self { set, axes }
    }

    /// Returns the underlying set.
    #[must_use]
    pub fn as_set(&self) -> &IndexedSet<ShapeDomain> {
        &self.set
    }

    /// Consumes this value and returns the underlying set.
    #[must_use]
    pub fn into_set(self) -> IndexedSet<ShapeDomain> {
        self.set
    }

    /// Removes every element sharing at least one coordinate with `element`.
    ///
    /// `element` itself is removed too.
    ///
    /// # Errors
    ///
    /// Returns an error if `element` does not belong to the domain. The set
    /// is unchanged in that case.
    pub fn eliminate(&mut self, element: &Coords) -> Result<(), SetError> {
        let index = self.set.domain().to_index(element)?;
        self.eliminate_index(index);
        Ok(())
    }

    /// Index-level form of [`eliminate`](Self::eliminate).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the domain size.
    pub fn eliminate_index(&mut self, index: usize) {
        assert!(
            index < self.set.size(),
            "index {index} is outside a domain of size {}",
            self.set.size()
        );
        let domain = self.set.domain();
        let attacked = self
            .axes
            .iter()
            .zip(domain.dims())
            .fold(0, |attacked, (&(mask, stride), &bound)| {
                let coordinate = (index / stride) % bound;
                attacked | (mask << (coordinate * stride))
            });
        self.set.retain_mask(!attacked);
    }
}

impl Deref for PossibilitySet {
    type Target = IndexedSet<ShapeDomain>;

    fn deref(&self) -> &Self::Target {
        &self.set
    }
}

impl DerefMut for PossibilitySet {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.set
    }
}

impl From<PossibilitySet> for IndexedSet<ShapeDomain> {
    fn from(value: PossibilitySet) -> Self {
        value.into_set()
    }
}

impl Display for PossibilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.set, f)
    }
}
