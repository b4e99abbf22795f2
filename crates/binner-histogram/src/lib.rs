//! Shared-edge histogram binning over numeric sequences
//!
//! This crate bins one primary sequence, and optionally further auxiliary
//! sequences, against a single shared set of bin edges, so that all the
//! resulting frequency rows line up bin for bin. Edges can be given
//! explicitly, derived as a fixed number of equal-width bins, or sized by a
//! statistical rule applied to the data.
//!
//! # Key Features
//!
//! - **Three bin specifications**: explicit edges, fixed count, or an
//!   estimated count (Sturges, Scott, Freedman-Diaconis, or their median)
//! - **Two boundary policies**: `Avg` places boundaries halfway between bin
//!   values and never drops a value; `Min` treats bin values as lower edges
//!   and drops values below the first one
//! - **Weighted accumulation**: per-value weights, fractional or zero,
//!   summed into float frequencies
//! - **Generic design**: works with any slice of [`Numeric`] values
//!
//! # Examples
//!
//! ## Equal-width bins over the data range
//!
//! ```rust
//! use binner_histogram::histogram;
//!
//! let data: Vec<f64> = (0..11).map(f64::from).collect();
//! let hist = histogram(&data, 5).unwrap();
//!
//! // Bin values are the centers of five width-2 bins
//! assert_eq!(hist.bins(), [1.0, 3.0, 5.0, 7.0, 9.0]);
//! assert_eq!(hist.primary(), [2.0, 2.0, 2.0, 2.0, 3.0]);
//! ```
//!
//! ## Explicit edges shared by several samples
//!
//! ```rust
//! use binner_histogram::{BinSpec, Binner, BoundaryPolicy, Sample};
//!
//! let primary = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 4.0];
//! let other = [2.0, 2.0, 2.0, 2.0, 2.0, 4.0];
//!
//! let hist = Binner::new(BinSpec::Edges(vec![1.0, 2.0, 3.0, 4.0]))
//!     .build(&Sample::new(&primary), &[Sample::new(&other)])
//!     .unwrap();
//!
//! assert_eq!(hist.primary(), [2.0, 2.0, 2.0, 3.0]);
//! assert_eq!(hist.freqs(1), [0.0, 5.0, 0.0, 1.0]);
//! ```
//!
//! ## Weighted values
//!
//! ```rust
//! use binner_histogram::{BinSpec, Binner, Sample};
//!
//! let values = [0.0, 1.0, 1.5, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0, 9.0];
//! let weights = [10.0, 0.0, 0.0, 0.0, 50.0, 0.0, 0.0, 0.0, 0.2, 0.2];
//!
//! let hist = Binner::new(BinSpec::Edges(vec![1.0, 3.0, 5.0, 7.0, 9.0]))
//!     .build(&Sample::weighted(&values, &weights), &[])
//!     .unwrap();
//!
//! assert_eq!(hist.primary(), [10.0, 0.0, 50.0, 0.0, 0.4]);
//! ```
//!
//! ## Letting the data choose its bin count
//!
//! ```rust
//! use binner_histogram::{bin_count, BinCountMethod};
//!
//! let data: Vec<f64> = (0..32).map(f64::from).collect();
//! let method: BinCountMethod = "sturges".parse().unwrap();
//! assert_eq!(bin_count(method, &data).unwrap(), 6);
//! ```

pub mod binner;
pub mod estimators;
pub mod sample;
pub mod types;

// Re-export main types
pub use binner::Binner;
pub use estimators::BinCountMethod;
pub use sample::Sample;
pub use types::{BinSpec, BoundaryPolicy, Histogram};

pub use binner_core::{Error, Numeric, Result};

// Convenience functions

/// Histogram of `values` in `bins` equal-width bins under the default policy
pub fn histogram<T: Numeric>(values: &[T], bins: usize) -> Result<Histogram<T>> {
    Binner::new(BinSpec::Count(bins)).build(&Sample::new(values), &[])
}

/// Histogram of `values` over caller-supplied bin values
pub fn histogram_with_edges<T: Numeric>(values: &[T], edges: Vec<T::Float>) -> Result<Histogram<T>> {
    Binner::new(BinSpec::Edges(edges)).build(&Sample::new(values), &[])
}

/// Evaluate a bin-count rule on its own, without building a histogram
pub fn bin_count<T: Numeric>(method: BinCountMethod, values: &[T]) -> Result<usize> {
    method.bin_count(values)
}
