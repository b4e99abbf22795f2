//! Shared-edge histogram binning for numeric sequences
//!
//! This crate re-exports the binner workspace: [`binner_core`] for the
//! numeric capability trait, errors, and leaf statistics, and
//! [`binner_histogram`] for building histograms over shared bin edges.
//!
//! # Example
//!
//! ```rust
//! use binner::{histogram, BinSpec, Binner, BoundaryPolicy, Sample};
//!
//! let data: Vec<f64> = (0..11).map(f64::from).collect();
//!
//! // Default policy: bin centers, nothing dropped
//! let hist = histogram(&data, 5).unwrap();
//! assert_eq!(hist.bins(), [1.0, 3.0, 5.0, 7.0, 9.0]);
//!
//! // Min policy: lower edges
//! let hist = Binner::new(BinSpec::Count(5))
//!     .policy(BoundaryPolicy::Min)
//!     .build(&Sample::new(&data), &[])
//!     .unwrap();
//! assert_eq!(hist.bins(), [0.0, 2.0, 4.0, 6.0, 8.0]);
//! ```

pub use binner_core::{stats, Error, Numeric, Result};

pub use binner_histogram::{
    bin_count, histogram, histogram_with_edges, BinCountMethod, BinSpec, Binner, BoundaryPolicy,
    Histogram, Sample,
};
