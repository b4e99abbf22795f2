//! Error types for histogram binning
//!
//! Provides a unified error type for all binner crates.

use thiserror::Error;

/// Core error type for binning operations
#[derive(Error, Debug)]
pub enum Error {
    /// Empty input where at least one value is required
    #[error("Empty input: {0} requires a non-empty sequence")]
    EmptyInput(&'static str),

    /// Equal-width bins cannot be derived from a zero-width or inverted range
    #[error("Degenerate range: [{min}, {max}] cannot be split into {bins} bins")]
    DegenerateRange { min: f64, max: f64, bins: usize },

    /// The bin specification itself is unusable
    #[error("Invalid bin specification: {0}")]
    InvalidBinSpec(String),

    /// Parallel sequences disagree on length
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Quartile split index fell outside the sorted sequence
    #[error("Quartile index {index} out of range for {len} sorted values")]
    QuartileRange { index: isize, len: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput(operation)
    }

    /// Create an error for a range that cannot support the requested bins
    pub fn degenerate_range(min: f64, max: f64, bins: usize) -> Self {
        Self::DegenerateRange { min, max, bins }
    }

    /// Create an error for an unusable bin specification
    pub fn invalid_bin_spec(reason: impl Into<String>) -> Self {
        Self::InvalidBinSpec(reason.into())
    }

    /// Create an error for mismatched parallel sequence lengths
    pub fn length_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for a quartile index outside the sorted data
    pub fn quartile_range(index: isize, len: usize) -> Self {
        Self::QuartileRange { index, len }
    }
}
