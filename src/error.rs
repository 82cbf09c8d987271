//! Error types for the input and configuration boundaries.
//!
//! The generation engine itself is total and never fails.

use thiserror::Error;

/// A screen or plane position that cannot name a cell.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// One of the components is NaN or infinite.
    #[error("non-finite position ({x}, {y})")]
    NotFinite { x: f32, y: f32 },

    /// The position lies outside the representable plane.
    #[error("position ({x}, {y}) is outside the i64 plane")]
    OutOfRange { x: f32, y: f32 },
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The value could not be parsed as the expected type.
    #[error("{key}: cannot parse {value:?}")]
    Parse { key: &'static str, value: String },

    /// The value parsed but is outside the accepted range.
    #[error("{key}: {value} is outside {min}..={max}")]
    OutOfRange {
        key: &'static str,
        value: String,
        min: String,
        max: String,
    },

    /// Unknown engine strategy name.
    #[error("unknown algorithm {0:?} (expected candidate-scan or neighbor-tally)")]
    UnknownAlgorithm(String),
}
