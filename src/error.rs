//! Error types for matiz operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing, transforming, or formatting colors.
///
/// Every variant is a caller-input validation failure. The pipeline is pure
/// and deterministic, so none of these are transient and none are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Color string is malformed: wrong hex digit count or non-hex characters.
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Resolved opacity falls outside the unit interval.
    #[error("Opacity out of range: {value} (expected 0.0..=1.0)")]
    InvalidOpacityRange {
        /// The offending opacity value.
        value: f32,
    },

    /// Output format name is not one of `hex`, `rgb`, or `hsl`.
    #[error("Invalid output format: {0:?}")]
    InvalidFormat(String),
}
