//! Layout configuration errors.
//!
//! Arrangers accept all well-formed input unconditionally; the only failure
//! modes are configuration mistakes, rejected eagerly before any
//! accumulation begins.

use thiserror::Error;

/// Errors raised by arranger constructors and fallible helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// The row count of a cycle grid was not a positive integer.
    #[error("row count must be a positive integer (got {got})")]
    InvalidRowCount {
        /// The rejected row count.
        got: usize,
    },

    /// A baseline arranger was applied to a child that exposes no baseline.
    #[error("child exposes no text baseline")]
    MissingBaseline,
}
