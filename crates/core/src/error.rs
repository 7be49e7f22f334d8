//! Error types for hilite rect consolidation.

use thiserror::Error;

/// Errors reported at the `optimize` boundary.
///
/// The stages themselves are total over well-formed input; every variant here
/// is a rejected precondition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HiliteError {
    #[error("rect {index}: {field} is not finite")]
    NonFinite { index: usize, field: &'static str },

    #[error("rect {index}: negative {field} ({value})")]
    NegativeExtent {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("invalid merge parameters: {0}")]
    InvalidParams(String),
}

/// Convenience Result type alias for HiliteError.
pub type Result<T> = std::result::Result<T, HiliteError>;
