//! A fixed-capacity bit set stored in a single `u128`.
//!
//! [`BitSet`] is the storage layer under every set in this crate. It only
//! knows about bit positions; mapping elements to positions is the job of a
//! [`Domain`](crate::Domain).
//!
//! # Examples
//!
//! ```
//! use latinum_core::BitSet;
//!
//! let mut bits = BitSet::new(8)?;
//! bits.set(3)?;
//! bits.flip(5)?;
//! assert_eq!(bits.value(), 0b0010_1000);
//!
//! bits.clear(3)?;
//! assert!(!bits.get(3)?);
//! assert_eq!(bits.capacity(), 8);
//! # Ok::<(), latinum_core::SetError>(())
//! ```

use crate::SetError;

/// Returns a mask with the lowest `width` bits set.
#[inline]
pub(crate) const fn low_mask(width: usize) -> u128 {
    if width >= BitSet::MAX_CAPACITY {
        u128::MAX
    } else {
        (1 << width) - 1
    }
}

/// A set of bit positions `0..capacity` backed by one unsigned integer.
///
/// The capacity is fixed at construction. The stored value never has a bit
/// set at or above the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSet {
    capacity: usize,
    value: u128,
}

impl BitSet {
    /// The largest supported capacity.
    pub const MAX_CAPACITY: usize = u128::BITS as usize;

    /// Creates an empty bit set with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::ZeroCapacity`] if `capacity` is zero and
    /// [`SetError::CapacityTooLarge`] if it exceeds [`Self::MAX_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self, SetError> {
        Self::with_capacity(capacity, 0)
    }

    /// Creates a bit set with the given capacity and initial value.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::new`], or [`SetError::ValueOverflow`]
    /// if `value` has a bit set at or above `capacity`.
    pub fn with_capacity(capacity: usize, value: u128) -> Result<Self, SetError> {
        if capacity == 0 {
            return Err(SetError::ZeroCapacity);
        }
        if capacity > Self::MAX_CAPACITY {
            return Err(SetError::CapacityTooLarge {
                capacity,
                max: Self::MAX_CAPACITY,
            });
        }
        check_fits(value, capacity)?;
        Ok(Self { capacity, value })
    }

    /// Creates a bit set whose capacity is the minimum number of bits needed
    /// to represent `value` (at least one).
    ///
    /// ```
    /// use latinum_core::BitSet;
    ///
    /// assert_eq!(BitSet::from_value(0b1011).capacity(), 4);
    /// assert_eq!(BitSet::from_value(0).capacity(), 1);
    /// ```
    #[must_use]
    pub const fn from_value(value: u128) -> Self {
        let width = (u128::BITS - value.leading_zeros()) as usize;
        Self {
            capacity: if width == 0 { 1 } else { width },
            value,
        }
    }

    /// Creates an empty bit set for a capacity the caller has already checked.
    pub(crate) const fn empty_unchecked(capacity: usize) -> Self {
        assert!(
            capacity > 0 && capacity <= Self::MAX_CAPACITY,
            "bit set capacity must be in 1..=128"
        );
        Self { capacity, value: 0 }
    }

    /// Returns the number of bit positions, which is also the length of the
    /// bit set.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the stored value.
    #[must_use]
    pub const fn value(&self) -> u128 {
        self.value
    }

    /// Replaces the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::ValueOverflow`] if `value` does not fit in the
    /// capacity. The bit set is left unchanged in that case.
    pub fn set_value(&mut self, value: u128) -> Result<(), SetError> {
        check_fits(value, self.capacity)?;
        self.value = value;
        Ok(())
    }

    /// Replaces the stored value with one derived from values that already fit.
    #[inline]
    pub(crate) fn replace_value(&mut self, value: u128) {
        debug_assert_eq!(value & !low_mask(self.capacity), 0);
        self.value = value;
    }

    /// Returns the number of set bits.
    #[must_use]
    pub const fn count_ones(&self) -> usize {
        self.value.count_ones() as usize
    }

    /// Returns whether bit `i` is set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::IndexOutOfRange`] if `i >= capacity`.
    pub fn get(&self, i: usize) -> Result<bool, SetError> {
        let bit = self.bit(i)?;
        Ok(self.value & bit != 0)
    }

    /// Sets bit `i`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::IndexOutOfRange`] if `i >= capacity`.
    pub fn set(&mut self, i: usize) -> Result<(), SetError> {
        let bit = self.bit(i)?;
        self.value |= bit;
        Ok(())
    }

    /// Clears bit `i`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::IndexOutOfRange`] if `i >= capacity`.
    pub fn clear(&mut self, i: usize) -> Result<(), SetError> {
        let bit = self.bit(i)?;
        self.value &= !bit;
        Ok(())
    }

    /// Toggles bit `i`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::IndexOutOfRange`] if `i >= capacity`.
    pub fn flip(&mut self, i: usize) -> Result<(), SetError> {
        let bit = self.bit(i)?;
        self.value ^= bit;
        Ok(())
    }

    /// Sets bit `i` to `bit`, which must be `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::IndexOutOfRange`] if `i >= capacity` and
    /// [`SetError::InvalidBit`] if `bit` is neither `0` nor `1`.
    pub fn update(&mut self, i: usize, bit: u8) -> Result<(), SetError> {
        self.bit(i)?;
        match bit {
            0 => self.clear(i),
            1 => self.set(i),
            _ => Err(SetError::InvalidBit { bit }),
        }
    }

    fn bit(&self, i: usize) -> Result<u128, SetError> {
        if i >= self.capacity {
            return Err(SetError::IndexOutOfRange {
                index: i,
                capacity: self.capacity,
            });
        }
        Ok(1 << i)
    }
}

fn check_fits(value: u128, capacity: usize) -> Result<(), SetError> {
    if value & !low_mask(capacity) != 0 {
        return Err(SetError::ValueOverflow { value, capacity });
    }
    Ok(())
}
