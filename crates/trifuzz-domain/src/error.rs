//! Domain error types

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, FuzzyError>;

/// Errors raised by fuzzy number construction, division, parsing and aggregation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    /// Arithmetic mean requested on a collection with no elements
    #[error("Cannot compute the arithmetic mean of an empty collection")]
    EmptyCollection,

    /// Scalar division by zero or NaN
    #[error("Division by zero")]
    DivisionByZero,

    /// NaN or infinite bound given to a checked constructor
    #[error("Non-finite bounds: ({lower}, {modal}, {upper})")]
    NonFinite {
        /// Lower bound as given
        lower: f64,
        /// Modal value as given
        modal: f64,
        /// Upper bound as given
        upper: f64,
    },

    /// Textual triple could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}
