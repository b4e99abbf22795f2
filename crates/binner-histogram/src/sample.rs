//! Tagged sample sets: plain values, or values with parallel weights

use binner_core::{Error, Numeric, Result};
use num_traits::{NumCast, One, Zero};

/// A borrowed sample set to be binned.
///
/// Either a plain sequence of values, each contributing weight 1, or a
/// sequence of values with a parallel weight sequence of the same length.
/// Which of the two a set is, is explicit in how it was constructed; the
/// lengths are checked before any accumulation happens.
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a, T: Numeric = f64> {
    values: &'a [T],
    weights: Option<&'a [T::Float]>,
}

impl<'a, T: Numeric> Sample<'a, T> {
    /// An unweighted sample: every value counts 1
    pub fn new(values: &'a [T]) -> Self {
        Self {
            values,
            weights: None,
        }
    }

    /// A weighted sample: `weights[i]` is the contribution of `values[i]`.
    ///
    /// Weights may be fractional, zero, or negative; they are summed as-is.
    pub fn weighted(values: &'a [T], weights: &'a [T::Float]) -> Self {
        Self {
            values,
            weights: Some(weights),
        }
    }

    /// The values to bin
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// The parallel weights, if this sample is weighted
    pub fn weights(&self) -> Option<&'a [T::Float]> {
        self.weights
    }

    /// Number of values in the sample
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Weight contributed by the value at `index`
    pub fn weight_of(&self, index: usize) -> T::Float {
        match self.weights {
            Some(weights) => weights[index],
            None => T::Float::one(),
        }
    }

    /// Sum of all weights (the sample length when unweighted)
    pub fn total_weight(&self) -> T::Float {
        match self.weights {
            Some(weights) => weights.iter().fold(T::Float::zero(), |acc, &w| acc + w),
            None => <T::Float as NumCast>::from(self.values.len()).unwrap(),
        }
    }

    /// Check that a weighted sample's sequences agree on length
    pub(crate) fn validate(&self, context: &str) -> Result<()> {
        if let Some(weights) = self.weights {
            if weights.len() != self.values.len() {
                return Err(Error::length_mismatch(
                    context,
                    self.values.len(),
                    weights.len(),
                ));
            }
        }
        Ok(())
    }
}

impl<'a, T: Numeric> From<&'a [T]> for Sample<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Self::new(values)
    }
}

impl<'a, T: Numeric> From<&'a Vec<T>> for Sample<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<'a, T: Numeric, const N: usize> From<&'a [T; N]> for Sample<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Self::new(values)
    }
}
