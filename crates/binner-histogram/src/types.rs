//! Core types for shared-edge histogram representation

use crate::estimators::BinCountMethod;
use binner_core::{Error, Numeric, Result};
use num_traits::Zero;
use std::fmt;

/// How bin edges are obtained
#[derive(Debug, Clone)]
pub enum BinSpec<T: Numeric = f64> {
    /// A fixed number of equal-width bins spanning the data range
    Count(usize),
    /// Caller-supplied bin values, used verbatim; must be strictly increasing
    Edges(Vec<T::Float>),
    /// Bin count chosen by a statistical rule applied to the primary values
    Estimated(BinCountMethod),
}

impl<T: Numeric> BinSpec<T> {
    /// Reject specifications that cannot produce a histogram
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            BinSpec::Count(0) => Err(Error::invalid_bin_spec("bin count must be positive")),
            BinSpec::Count(_) | BinSpec::Estimated(_) => Ok(()),
            BinSpec::Edges(edges) => {
                if edges.is_empty() {
                    return Err(Error::invalid_bin_spec("explicit edges must be non-empty"));
                }
                for pair in edges.windows(2) {
                    if pair[1] <= pair[0] {
                        let (a, b): (f64, f64) = (pair[0].into(), pair[1].into());
                        return Err(Error::invalid_bin_spec(format!(
                            "explicit edges must be strictly increasing, got {a} then {b}"
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

/// How values sitting between two bins are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Bin boundaries sit halfway between neighboring bin values; reported
    /// bins are the bin centers and every value lands somewhere.
    #[default]
    Avg,
    /// Bin values are lower edges; the last edge at or below a value wins,
    /// and values below the first edge are dropped.
    Min,
}

/// A computed histogram: one shared set of bin values, one frequency row per
/// input sample set (the primary row first).
///
/// What a bin value means depends on the policy it was built with: bin
/// centers under [`BoundaryPolicy::Avg`], lower edges under
/// [`BoundaryPolicy::Min`]. Frequencies are weight sums, so they are floats
/// even for unweighted input.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<T: Numeric = f64> {
    bins: Vec<T::Float>,
    freqs: Vec<Vec<T::Float>>,
}

impl<T: Numeric> Histogram<T> {
    /// Assemble a histogram; rows are already aligned to `bins`
    pub(crate) fn new(bins: Vec<T::Float>, freqs: Vec<Vec<T::Float>>) -> Self {
        Self { bins, freqs }
    }

    /// The shared bin values
    pub fn bins(&self) -> &[T::Float] {
        &self.bins
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of sample sets that were binned
    pub fn num_sets(&self) -> usize {
        self.freqs.len()
    }

    /// Frequency row of the primary sample
    pub fn primary(&self) -> &[T::Float] {
        &self.freqs[0]
    }

    /// Frequency row of the sample set at `set` (0 is the primary)
    pub fn freqs(&self, set: usize) -> &[T::Float] {
        &self.freqs[set]
    }

    /// All frequency rows, primary first
    pub fn rows(&self) -> &[Vec<T::Float>] {
        &self.freqs
    }

    /// Sum of the frequencies in one row
    pub fn total_weight(&self, set: usize) -> T::Float {
        self.freqs[set]
            .iter()
            .fold(T::Float::zero(), |acc, &f| acc + f)
    }

    /// Decompose into `(bins, freqs)`
    pub fn into_parts(self) -> (Vec<T::Float>, Vec<Vec<T::Float>>) {
        (self.bins, self.freqs)
    }
}

impl<T: Numeric> fmt::Display for Histogram<T>
where
    T::Float: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Histogram({} bins, {} sets)", self.len(), self.num_sets())
    }
}
