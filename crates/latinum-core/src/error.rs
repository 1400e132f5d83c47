//! Errors reported by bit sets, domains and indexed sets.

/// Errors that can occur when constructing or manipulating bit-packed sets.
///
/// Every fallible operation validates its arguments before touching the
/// receiver, so a returned error always leaves the set unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetError {
    /// A bit index was outside `0..capacity`.
    #[display("bit index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The capacity of the bit set.
        capacity: usize,
    },
    /// A bit value other than `0` or `1` was supplied.
    #[display("bit value must be 0 or 1, got {bit}")]
    InvalidBit {
        /// The offending bit value.
        bit: u8,
    },
    /// A raw value does not fit in the available bits.
    #[display("value {value:#x} does not fit in {capacity} bits")]
    ValueOverflow {
        /// The offending value.
        value: u128,
        /// The number of available bits.
        capacity: usize,
    },
    /// A bit set or domain would need more bits than a single `u128` holds.
    #[display("capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge {
        /// The requested capacity.
        capacity: usize,
        /// The largest supported capacity.
        max: usize,
    },
    /// A bit set was requested with no bits at all.
    #[display("bit set capacity must be at least 1")]
    ZeroCapacity,
    /// An element has the wrong number of coordinates for the domain.
    #[display("element has {actual} coordinates, expected {expected}")]
    ArityMismatch {
        /// Number of dimensions of the domain.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },
    /// A coordinate lies outside its dimension bound.
    #[display("coordinate {coordinate} on axis {axis} is outside 0..{bound}")]
    CoordinateOutOfRange {
        /// The axis of the offending coordinate.
        axis: usize,
        /// The offending coordinate.
        coordinate: usize,
        /// The bound of that axis.
        bound: usize,
    },
    /// A domain dimension was zero.
    #[display("dimension on axis {axis} must be positive")]
    ZeroDimension {
        /// The axis with a zero bound.
        axis: usize,
    },
    /// A shaped domain was given no dimensions.
    #[display("shape must have at least one dimension")]
    EmptyShape,
    /// A bit set does not have the capacity a domain requires.
    #[display("bit set capacity {capacity} does not match domain size {size}")]
    SizeMismatch {
        /// Capacity of the supplied bit set.
        capacity: usize,
        /// Size of the domain.
        size: usize,
    },
    /// The element to remove is not a member of the set.
    #[display("element is not a member of the set")]
    NotFound,
    /// The set has no element to pop.
    #[display("set is empty")]
    Empty,
    /// Two sets defined over different domains were combined or compared.
    #[display("sets are defined over different domains")]
    DomainMismatch,
}
