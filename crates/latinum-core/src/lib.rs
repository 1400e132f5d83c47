//! Bit-packed sets and grid types for Latin square enumeration.
//!
//! This crate provides the data structures the search engine is built on.
//!
//! # Overview
//!
//! The crate is organized in layers, each building on the previous one:
//!
//! 1. **Storage** - [`bit_set`]: [`BitSet`], a fixed-capacity set of bit
//!    positions stored in one `u128`.
//!
//! 2. **Domains** - [`domain`]: how elements map to bit positions.
//!    [`FlatDomain`] holds plain integers, [`ShapeDomain`] holds coordinate
//!    tuples within a multi-dimensional shape.
//!
//! 3. **Sets** - [`indexed_set`]: [`IndexedSet`], a set of domain elements
//!    with the full set algebra, and [`possibility_set`]: [`PossibilitySet`],
//!    a full-start set with bulk elimination along every axis.
//!
//! 4. **Grids** - [`square`]: [`Square`], an `n × n` grid of symbols.
//!
//! # Examples
//!
//! ```
//! use latinum_core::{FlatDomain, IndexedSet, PossibilitySet, coords};
//!
//! // Candidate symbols of one cell
//! let mut candidates = IndexedSet::full(FlatDomain::new(4)?);
//! candidates.discard(&2)?;
//! assert_eq!(candidates.iter().collect::<Vec<_>>(), [0, 1, 3]);
//!
//! // Cells that may still take one symbol
//! let mut placements = PossibilitySet::new(&[4, 4])?;
//! placements.eliminate(&coords(&[0, 0]))?;
//! assert_eq!(placements.len(), 9);
//! # Ok::<(), latinum_core::SetError>(())
//! ```

pub mod bit_set;
pub mod domain;
pub mod error;
pub mod indexed_set;
pub mod possibility_set;
pub mod square;

// Re-export commonly used types
pub use self::{
    bit_set::BitSet,
    domain::{Coords, Domain, FlatDomain, ShapeDomain, coords},
    error::SetError,
    indexed_set::IndexedSet,
    possibility_set::PossibilitySet,
    square::{Square, SquareError},
};
