//! Errors reported by the search engine.

/// Errors that can occur when setting up an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The requested order is zero or too large for the bit-packed cell sets.
    #[display("order {order} is outside the supported range 1..={max}")]
    InvalidOrder {
        /// The requested order.
        order: usize,
        /// The largest supported order.
        max: usize,
    },
}
