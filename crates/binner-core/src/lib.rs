//! Core traits and types for histogram binning
//!
//! This crate carries the pieces every binner crate leans on: the [`Numeric`]
//! capability trait that lets any numeric slice be binned, the unified
//! [`Error`] type, and the leaf statistics (min/max, mean and deviation,
//! interquartile range) that bin-edge resolution is built from.
//!
//! # Example
//!
//! ```rust
//! use binner_core::stats::{min_max, sample_stats};
//!
//! let data: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let (min, max) = min_max(&data).unwrap();
//! let (mean, sd) = sample_stats(&data).unwrap();
//!
//! assert_eq!((min, max), (2.0, 9.0));
//! assert_eq!(mean, 5.0);
//! assert!((sd - 2.138089935).abs() < 1e-6);
//! ```

// Re-export submodules
pub mod error;
pub mod numeric;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};

// Numeric traits
pub use numeric::Numeric;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
