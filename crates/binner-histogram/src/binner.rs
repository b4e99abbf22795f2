//! The binner: resolves shared bin edges, assigns values, accumulates weights

use crate::sample::Sample;
use crate::types::{BinSpec, BoundaryPolicy, Histogram};
use binner_core::{stats, Error, Numeric, Result};
use num_traits::{Float, NumCast, Zero};
use tracing::debug;

/// Configuration for one histogram computation.
///
/// A `Binner` pairs a [`BinSpec`] with a [`BoundaryPolicy`] and optional
/// range overrides, then bins a primary sample and any number of auxiliary
/// samples against one shared set of edges:
///
/// ```rust
/// use binner_histogram::{BinSpec, Binner, BoundaryPolicy, Sample};
///
/// let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let hist = Binner::new(BinSpec::Count(5))
///     .policy(BoundaryPolicy::Min)
///     .build(&Sample::new(&data), &[])
///     .unwrap();
///
/// assert_eq!(hist.bins(), [0.0, 2.0, 4.0, 6.0, 8.0]);
/// assert_eq!(hist.primary(), [2.0, 2.0, 2.0, 2.0, 3.0]);
/// ```
///
/// Validation is eager: unusable specs, mismatched weight lengths, and
/// degenerate ranges all fail before any frequency is accumulated, so a
/// returned histogram is always fully formed.
#[derive(Debug, Clone)]
pub struct Binner<T: Numeric = f64> {
    spec: BinSpec<T>,
    policy: BoundaryPolicy,
    min: Option<T::Float>,
    max: Option<T::Float>,
}

impl<T: Numeric> Binner<T> {
    /// A binner for the given bin specification, with the default
    /// [`BoundaryPolicy::Avg`] policy and the data's own range
    pub fn new(spec: BinSpec<T>) -> Self {
        Self {
            spec,
            policy: BoundaryPolicy::default(),
            min: None,
            max: None,
        }
    }

    /// Choose how boundary values are resolved
    pub fn policy(mut self, policy: BoundaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the lower end of the binned range.
    ///
    /// Only affects derived edges. Values falling outside the overridden
    /// range are clamped into the first or last bin.
    pub fn min(mut self, min: T::Float) -> Self {
        self.min = Some(min);
        self
    }

    /// Override the upper end of the binned range
    pub fn max(mut self, max: T::Float) -> Self {
        self.max = Some(max);
        self
    }

    /// Bin the primary sample and any auxiliary samples over shared edges.
    ///
    /// Edges come from the bin specification: verbatim for
    /// [`BinSpec::Edges`], derived from the combined range of all samples
    /// for [`BinSpec::Count`] and
    /// [`BinSpec::Estimated`]. The returned histogram holds one frequency
    /// row per sample, primary first.
    pub fn build(&self, primary: &Sample<'_, T>, others: &[Sample<'_, T>]) -> Result<Histogram<T>> {
        self.spec.validate()?;
        primary.validate("primary sample")?;
        for (i, other) in others.iter().enumerate() {
            other.validate(&format!("auxiliary sample {i}"))?;
        }

        let resolved = self.resolve(primary, others)?;
        debug!(
            "resolved {} bins for {} sample sets",
            resolved.bins.len(),
            1 + others.len()
        );

        let mut freqs = Vec::with_capacity(1 + others.len());
        freqs.push(accumulate(primary, &resolved));
        for other in others {
            freqs.push(accumulate(other, &resolved));
        }
        Ok(Histogram::new(resolved.bins, freqs))
    }

    fn resolve(&self, primary: &Sample<'_, T>, others: &[Sample<'_, T>]) -> Result<Resolved<T>> {
        match &self.spec {
            BinSpec::Edges(anchors) => {
                let bins = anchors.clone();
                let kind = match self.policy {
                    BoundaryPolicy::Avg => EdgeKind::Midpoints(midpoints::<T>(&bins)),
                    BoundaryPolicy::Min => EdgeKind::LowerAnchors(bins.clone()),
                };
                Ok(Resolved { bins, kind })
            }
            BinSpec::Count(count) => self.resolve_derived(*count, primary, others),
            BinSpec::Estimated(method) => {
                let count = method.bin_count(primary.values())?;
                self.resolve_derived(count, primary, others)
            }
        }
    }

    fn resolve_derived(
        &self,
        count: usize,
        primary: &Sample<'_, T>,
        others: &[Sample<'_, T>],
    ) -> Result<Resolved<T>> {
        let (min, max) = match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            (lo, hi) => {
                let (data_min, data_max) = combined_min_max(primary, others)?;
                (lo.unwrap_or(data_min), hi.unwrap_or(data_max))
            }
        };
        // A single bin may cover a zero-width range; more than one cannot
        if max < min || (max == min && count > 1) {
            return Err(Error::degenerate_range(min.into(), max.into(), count));
        }

        let count_f = <T::Float as NumCast>::from(count).unwrap();
        let half = <T::Float as NumCast>::from(0.5).unwrap();
        let step = (max - min) / count_f;
        let bins = (0..count)
            .map(|i| {
                let i_f = <T::Float as NumCast>::from(i).unwrap();
                match self.policy {
                    BoundaryPolicy::Avg => min + (i_f + half) * step,
                    BoundaryPolicy::Min => min + i_f * step,
                }
            })
            .collect();
        Ok(Resolved {
            bins,
            kind: EdgeKind::Derived { min, max, count },
        })
    }
}

/// Shared edges in the form the assignment step consumes
struct Resolved<T: Numeric> {
    bins: Vec<T::Float>,
    kind: EdgeKind<T>,
}

enum EdgeKind<T: Numeric> {
    /// Explicit anchors under `Avg`: boundaries halfway between anchors
    Midpoints(Vec<T::Float>),
    /// Explicit anchors under `Min`: last anchor at or below the value wins
    LowerAnchors(Vec<T::Float>),
    /// Equal-width edges: direct index arithmetic over `[min, max]`
    Derived {
        min: T::Float,
        max: T::Float,
        count: usize,
    },
}

impl<T: Numeric> Resolved<T> {
    /// Bin index for `value`, or `None` if the value is not counted
    fn assign(&self, value: T::Float) -> Option<usize> {
        match &self.kind {
            EdgeKind::Midpoints(bounds) => {
                if bounds.is_empty() {
                    return Some(0);
                }
                if value < bounds[0] {
                    return Some(0);
                }
                if value >= bounds[bounds.len() - 1] {
                    return Some(self.bins.len() - 1);
                }
                for i in 0..bounds.len() - 1 {
                    // A value on a boundary rounds up into the higher bin
                    if value >= bounds[i] && value < bounds[i + 1] {
                        return Some(i + 1);
                    }
                }
                None
            }
            EdgeKind::LowerAnchors(anchors) => {
                let mut hit = None;
                for (i, &anchor) in anchors.iter().enumerate() {
                    if value >= anchor {
                        hit = Some(i);
                    } else {
                        break;
                    }
                }
                hit
            }
            EdgeKind::Derived { min, max, count } => {
                if value.is_nan() {
                    return None;
                }
                if *count == 1 {
                    return Some(0);
                }
                let count_f = <T::Float as NumCast>::from(*count).unwrap();
                let raw = ((value - *min) * count_f / (*max - *min)).floor();
                // Out-of-range values (possible under overrides) clamp to
                // the extreme bins; so does max itself, which would
                // otherwise land one past the end
                if raw < T::Float::zero() {
                    return Some(0);
                }
                match <usize as NumCast>::from(raw) {
                    Some(index) if index < *count => Some(index),
                    _ => Some(*count - 1),
                }
            }
        }
    }
}

fn accumulate<T: Numeric>(sample: &Sample<'_, T>, resolved: &Resolved<T>) -> Vec<T::Float> {
    let mut row = vec![T::Float::zero(); resolved.bins.len()];
    for (i, &value) in sample.values().iter().enumerate() {
        if let Some(index) = resolved.assign(value.to_float()) {
            row[index] += sample.weight_of(i);
        }
    }
    row
}

/// min/max over the values of every sample set combined
fn combined_min_max<T: Numeric>(
    primary: &Sample<'_, T>,
    others: &[Sample<'_, T>],
) -> Result<(T::Float, T::Float)> {
    let (mut min, mut max) = stats::min_max(primary.values())?;
    for other in others {
        let (lo, hi) = stats::min_max(other.values())?;
        if lo < min {
            min = lo;
        }
        if hi > max {
            max = hi;
        }
    }
    Ok((min.to_float(), max.to_float()))
}

fn midpoints<T: Numeric>(anchors: &[T::Float]) -> Vec<T::Float> {
    let two = <T::Float as NumCast>::from(2.0).unwrap();
    anchors
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / two)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::BinCountMethod;

    fn zero_to_ten() -> Vec<f64> {
        (0..11).map(<f64 as From<i32>>::from).collect()
    }

    #[test]
    fn test_count_spec_avg_policy() {
        let data = zero_to_ten();
        let hist = Binner::new(BinSpec::Count(5))
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.bins(), [1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(hist.primary(), [2.0, 2.0, 2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_count_spec_min_policy() {
        let data = zero_to_ten();
        let hist = Binner::new(BinSpec::Count(5))
            .policy(BoundaryPolicy::Min)
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.bins(), [0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(hist.primary(), [2.0, 2.0, 2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        // The formula would put max one past the end
        let data = [0.0, 10.0];
        let hist = Binner::new(BinSpec::Count(2))
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.primary(), [1.0, 1.0]);
    }

    #[test]
    fn test_explicit_edges_avg_policy() {
        let data = [0.0, 1.0, 1.5, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0, 9.0];
        let hist = Binner::new(BinSpec::Edges(vec![1.0, 3.0, 5.0, 7.0, 9.0]))
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.bins(), [1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(hist.primary(), [3.0, 1.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_explicit_edges_min_policy_drops_low_values() {
        let data = [-1.0, 0.0, 1.0, 1.5, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0, 9.0, 10.0];
        let hist = Binner::new(BinSpec::Edges(vec![1.0, 3.0, 5.0, 7.0, 9.0]))
            .policy(BoundaryPolicy::Min)
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.primary(), [3.0, 0.0, 2.0, 2.0, 3.0]);
        // -1 and 0 sit below the first edge and are not counted
        assert_eq!(hist.total_weight(0), 10.0);
    }

    #[test]
    fn test_avg_policy_boundary_rounds_up() {
        // Midpoint between anchors 1 and 3 is 2; a value dead on it goes up
        let data = [2.0];
        let hist = Binner::new(BinSpec::Edges(vec![1.0, 3.0]))
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.primary(), [0.0, 1.0]);
    }

    #[test]
    fn test_single_explicit_edge() {
        let data = [-5.0, 0.0, 5.0];
        let hist = Binner::new(BinSpec::Edges(vec![1.0]))
            .build(&Sample::new(&data), &[])
            .unwrap();
        // Avg with one anchor has no boundaries: everything lands in bin 0
        assert_eq!(hist.primary(), [3.0]);

        let hist = Binner::new(BinSpec::Edges(vec![1.0]))
            .policy(BoundaryPolicy::Min)
            .build(&Sample::new(&data), &[])
            .unwrap();
        // Min with one anchor keeps only values at or above it
        assert_eq!(hist.primary(), [1.0]);
    }

    #[test]
    fn test_auxiliary_sets_share_edges() {
        let primary = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 4.0];
        let other = [2.0, 2.0, 2.0, 2.0, 2.0, 4.0];
        let hist = Binner::new(BinSpec::Edges(vec![1.0, 2.0, 3.0, 4.0]))
            .build(&Sample::new(&primary), &[Sample::new(&other)])
            .unwrap();
        assert_eq!(hist.num_sets(), 2);
        assert_eq!(hist.primary(), [2.0, 2.0, 2.0, 3.0]);
        assert_eq!(hist.freqs(1), [0.0, 5.0, 0.0, 1.0]);
    }

    #[test]
    fn test_auxiliary_set_widens_derived_range() {
        let primary = [2.0, 3.0];
        let other = [0.0, 10.0];
        let hist = Binner::new(BinSpec::Count(5))
            .policy(BoundaryPolicy::Min)
            .build(&Sample::new(&primary), &[Sample::new(&other)])
            .unwrap();
        // Edges span the combined range, not the primary's
        assert_eq!(hist.bins(), [0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(hist.primary(), [0.0, 2.0, 0.0, 0.0, 0.0]);
        assert_eq!(hist.freqs(1), [1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_weighted_accumulation() {
        let values = [0.0, 1.0, 1.5, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0, 9.0];
        let weights = [10.0, 0.0, 0.0, 0.0, 50.0, 0.0, 0.0, 0.0, 0.2, 0.2];
        let hist = Binner::new(BinSpec::Edges(vec![1.0, 3.0, 5.0, 7.0, 9.0]))
            .build(&Sample::weighted(&values, &weights), &[])
            .unwrap();
        assert_eq!(hist.primary(), [10.0, 0.0, 50.0, 0.0, 0.4]);
    }

    #[test]
    fn test_mixed_weighted_and_unweighted_sets() {
        let primary = [1.0, 2.0, 3.0];
        let aux_values = [1.0, 3.0];
        let aux_weights = [0.5, 0.5];
        let hist = Binner::new(BinSpec::Edges(vec![1.0, 2.0, 3.0]))
            .build(
                &Sample::new(&primary),
                &[Sample::weighted(&aux_values, &aux_weights)],
            )
            .unwrap();
        assert_eq!(hist.primary(), [1.0, 1.0, 1.0]);
        assert_eq!(hist.freqs(1), [0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_range_overrides_clamp_outliers() {
        let data = [-5.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 50.0];
        let hist = Binner::new(BinSpec::Count(5))
            .policy(BoundaryPolicy::Min)
            .min(0.0)
            .max(5.0)
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.bins(), [0.0, 1.0, 2.0, 3.0, 4.0]);
        // -5 clamps into the first bin, 50 into the last
        assert_eq!(hist.primary(), [2.0, 1.0, 1.0, 1.0, 3.0]);
        assert_eq!(hist.total_weight(0), 8.0);
    }

    #[test]
    fn test_partial_override_keeps_data_extreme() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0];
        let hist = Binner::new(BinSpec::Count(4))
            .policy(BoundaryPolicy::Min)
            .min(-4.0)
            .build(&Sample::new(&data), &[])
            .unwrap();
        // max still comes from the data
        assert_eq!(hist.bins(), [-4.0, -2.0, 0.0, 2.0]);
        assert_eq!(hist.primary(), [0.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_degenerate_range_errors() {
        let data = [4.0, 4.0, 4.0];
        let err = Binner::new(BinSpec::Count(5))
            .build(&Sample::new(&data), &[])
            .unwrap_err();
        match err {
            Error::DegenerateRange { min, max, bins } => {
                assert_eq!(min, 4.0);
                assert_eq!(max, 4.0);
                assert_eq!(bins, 5);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_single_bin_tolerates_zero_width_range() {
        let data = [4.0, 4.0, 4.0];
        let hist = Binner::new(BinSpec::Count(1))
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.bins(), [4.0]);
        assert_eq!(hist.primary(), [3.0]);
    }

    #[test]
    fn test_inverted_override_errors() {
        let data = [1.0, 2.0];
        let err = Binner::new(BinSpec::Count(2))
            .min(10.0)
            .max(0.0)
            .build(&Sample::new(&data), &[])
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { .. }));
    }

    #[test]
    fn test_empty_primary_with_count_spec_errors() {
        let data: [f64; 0] = [];
        let err = Binner::new(BinSpec::Count(3))
            .build(&Sample::new(&data), &[])
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
    }

    #[test]
    fn test_empty_sample_with_explicit_edges_is_all_zero() {
        // Explicit edges need no range, so empty sets simply count nothing
        let empty: [f64; 0] = [];
        let hist = Binner::new(BinSpec::Edges(vec![1.0, 2.0]))
            .build(&Sample::new(&empty), &[])
            .unwrap();
        assert_eq!(hist.primary(), [0.0, 0.0]);
    }

    #[test]
    fn test_zero_count_spec_rejected() {
        let data = [1.0, 2.0];
        let err = Binner::new(BinSpec::Count(0))
            .build(&Sample::new(&data), &[])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBinSpec(_)));
    }

    #[test]
    fn test_weight_mismatch_fails_before_binning() {
        let values = [1.0, 2.0, 3.0];
        let weights = [1.0];
        let err = Binner::new(BinSpec::Count(2))
            .build(&Sample::weighted(&values, &weights), &[])
            .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[test]
    fn test_auxiliary_weight_mismatch_names_the_set() {
        let primary = [1.0, 2.0];
        let aux_values = [1.0, 2.0];
        let aux_weights = [1.0];
        let err = Binner::new(BinSpec::Count(2))
            .build(
                &Sample::new(&primary),
                &[
                    Sample::new(&aux_values),
                    Sample::weighted(&aux_values, &aux_weights),
                ],
            )
            .unwrap_err();
        assert!(err.to_string().contains("auxiliary sample 1"));
    }

    #[test]
    fn test_estimated_spec_uses_primary_only() {
        // 32 primary values: Sturges says 6 bins regardless of the auxiliary set
        let primary: Vec<f64> = (0..32).map(<f64 as From<i32>>::from).collect();
        let other = [100.0, 200.0];
        let hist = Binner::new(BinSpec::Estimated(BinCountMethod::Sturges))
            .build(&Sample::new(&primary), &[Sample::new(&other)])
            .unwrap();
        assert_eq!(hist.len(), 6);
        // The range still covers the auxiliary values
        assert_eq!(hist.total_weight(1), 2.0);
        let last = *hist.bins().last().unwrap();
        assert!(last > 100.0);
    }

    #[test]
    fn test_same_input_same_output() {
        let data = [0.3, 1.7, 2.2, 4.9, 4.9, 8.1];
        let binner = Binner::new(BinSpec::Count(4)).policy(BoundaryPolicy::Min);
        let a = binner.build(&Sample::new(&data), &[]).unwrap();
        let b = binner.build(&Sample::new(&data), &[]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_integer_values() {
        let data: Vec<i32> = (0..11).collect();
        let hist = Binner::new(BinSpec::Count(5))
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.bins(), [1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(hist.primary(), [2.0, 2.0, 2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_f32_values() {
        let data: Vec<f32> = vec![0.0, 1.0, 2.0, 3.0];
        let hist = Binner::new(BinSpec::Count(2))
            .build(&Sample::new(&data), &[])
            .unwrap();
        assert_eq!(hist.bins(), [0.75f32, 2.25f32]);
        assert_eq!(hist.primary(), [2.0f32, 2.0f32]);
    }
}
