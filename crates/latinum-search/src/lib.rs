//! Constraint-propagation search for Latin squares.
//!
//! This crate enumerates every Latin square of a given order, exactly and
//! deterministically.
//!
//! # Overview
//!
//! - [`search_node`]: [`SearchNode`], one partial grid. Branches on the most
//!   constrained cell and propagates forced assignments.
//! - [`generator`]: [`Generator`] and its lazy [`LatinSquares`] iterator,
//!   which drive the depth-first search with an explicit stack.
//! - [`symmetry`]: [`SymmetryMode`] and [`Orbit`], which turn each reduced
//!   square into the squares the caller asked for.
//!
//! The search itself only builds reduced squares (first row and first column
//! are `0, 1, ..., n-1`). Every other square is obtained from one of them by
//! relabeling symbols and reordering rows `1..n`.
//!
//! # Examples
//!
//! ```
//! use latinum_search::{Generator, SymmetryMode};
//!
//! let generator = Generator::new(3, SymmetryMode::All)?;
//! assert_eq!(generator.latin_squares().count(), 12);
//! # Ok::<(), latinum_search::SearchError>(())
//! ```

pub mod error;
pub mod generator;
mod liberties;
pub mod search_node;
pub mod symmetry;

pub use self::{
    error::SearchError,
    generator::{Generator, LatinSquares, SearchStats},
    search_node::{Cell, MAX_INDEXED_ORDER, MAX_ORDER, SearchNode},
    symmetry::{Orbit, ParseSymmetryModeError, SymmetryMode},
};
