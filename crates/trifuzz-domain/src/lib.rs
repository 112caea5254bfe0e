//! Trifuzz Domain Layer
//!
//! Triangular fuzzy numbers: uncertain quantities described by a lower bound,
//! a modal value and an upper bound. This crate holds the value type, its
//! arithmetic and ranking-based ordering, and a multiset that aggregates
//! numbers by arithmetic mean.
//!
//! ## Key Concepts
//!
//! - **TriFuzzyNum**: sorted triple `(l, m, u)` with value semantics
//! - **Rank key**: centroid-style projection used for equality and ordering
//! - **TriFuzzyNumSet**: multiset keyed by the rank order, with `arithmetic_mean`
//!
//! ## Architecture
//!
//! - Pure computation, no I/O
//! - Only `thiserror` for errors and `tracing` for events
//! - Formatting and user interaction live in `trifuzz-cli`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod error;
pub mod fuzzy_number;
mod rank;

// Re-exports for convenience
pub use collection::TriFuzzyNumSet;
pub use error::{FuzzyError, Result};
pub use fuzzy_number::TriFuzzyNum;
