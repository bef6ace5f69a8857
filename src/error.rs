//! Error types for the Voltfit resistor fitter.
//!
//! This module provides a unified error type [`VoltfitError`] that covers
//! all error conditions that can occur while building a resistor catalog
//! and setting up a search.
//!
//! Note that "no safe configuration exists" is not an error: the search
//! reports it as `Ok(None)`, and the CLI turns it into a nonzero exit.

use thiserror::Error;

/// Result type alias using [`VoltfitError`].
pub type Result<T> = std::result::Result<T, VoltfitError>;

/// Unified error type for all Voltfit operations.
#[derive(Error, Debug)]
pub enum VoltfitError {
    // ============ Catalog Errors ============
    /// A resistance value could not be parsed
    #[error("Invalid resistance value '{input}': {message}")]
    InvalidValue { input: String, message: String },

    /// A resistance value was zero or negative
    #[error("Non-positive resistance {value} ohms - every catalog value must be > 0")]
    NonPositiveResistance { value: f64 },

    /// The catalog contains no values
    #[error("Catalog is empty - the search needs at least one resistor value")]
    EmptyCatalog,

    // ============ Search Errors ============
    /// The voltage extremes are inverted or degenerate
    #[error("Invalid input range: v_lo ({v_lo}V) must be below v_hi ({v_hi}V)")]
    InvalidRange { v_lo: f64, v_hi: f64 },

    // ============ I/O Errors ============
    /// Error reading a catalog file
    #[error("Failed to read catalog file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl VoltfitError {
    /// Create an invalid-value error.
    pub fn invalid_value(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-range error.
    pub fn invalid_range(v_lo: f64, v_hi: f64) -> Self {
        Self::InvalidRange { v_lo, v_hi }
    }
}
