//! Error types for the placer crates.
//!
//! Placement itself never fails. These errors surface only from the strict
//! parsing and validation entry points; the lenient configuration path maps
//! them to documented defaults instead.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacerError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors while parsing textual configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid number format: {value:?}")]
    InvalidNumber { value: String },

    #[error("Invalid track size: {value:?}")]
    InvalidTrackSize { value: String },

    #[error("Unknown {kind} value: {value:?}")]
    UnknownKeyword { kind: &'static str, value: String },
}

/// Errors raised by configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1, got {value}")]
    CountTooSmall { field: &'static str, value: usize },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Invalid track size for {field}: {reason}")]
    InvalidTrackSize { field: &'static str, reason: String },
}
