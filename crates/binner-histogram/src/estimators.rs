//! Statistical rules for choosing a bin count from the data

use binner_core::{stats, Error, Numeric, Result};
use std::str::FromStr;
use tracing::debug;

/// A rule for estimating how many equal-width bins a sample deserves.
///
/// All rules look only at the values of the primary sample, never at
/// weights or auxiliary sets. A rule whose width formula collapses (zero
/// spread in the data) degrades to a single bin instead of propagating a
/// non-finite count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinCountMethod {
    /// Sturges' formula: ceil(log2(n) + 1)
    Sturges,
    /// Scott's rule: bin width h = 3.5 * sd * n^(-1/3)
    Scott,
    /// Freedman-Diaconis rule: bin width h = 2 * IQR * n^(-1/3)
    FreedmanDiaconis,
    /// The median of the other three rules
    Middle,
}

impl BinCountMethod {
    /// Stable tag for this rule
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sturges => "sturges",
            Self::Scott => "scott",
            Self::FreedmanDiaconis => "freedman_diaconis",
            Self::Middle => "middle",
        }
    }

    /// Number of bins this rule chooses for `values`.
    ///
    /// Fails on empty input, and for the IQR-based rules on sequences too
    /// short to split into quartiles.
    pub fn bin_count<T: Numeric>(self, values: &[T]) -> Result<usize> {
        if values.is_empty() {
            return Err(Error::empty_input("bin_count"));
        }
        let count = match self {
            Self::Sturges => sturges(values.len()),
            Self::Scott => scott(values)?,
            Self::FreedmanDiaconis => freedman_diaconis(values)?,
            Self::Middle => {
                let mut counts = [sturges(values.len()), scott(values)?, freedman_diaconis(values)?];
                counts.sort_unstable();
                counts[1]
            }
        };
        debug!(
            "{} rule chose {} bins from {} values",
            self.name(),
            count,
            values.len()
        );
        Ok(count)
    }
}

impl FromStr for BinCountMethod {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "sturges" => Ok(Self::Sturges),
            "scott" => Ok(Self::Scott),
            "fd" | "freedman_diaconis" => Ok(Self::FreedmanDiaconis),
            "middle" => Ok(Self::Middle),
            other => Err(Error::invalid_bin_spec(format!(
                "unrecognized bin count rule {other:?}"
            ))),
        }
    }
}

fn sturges(n: usize) -> usize {
    clamp_count(((n as f64).log2() + 1.0).ceil())
}

fn scott<T: Numeric>(values: &[T]) -> Result<usize> {
    let (_, sd) = stats::sample_stats(values)?;
    let width = 3.5 * Into::<f64>::into(sd) * (values.len() as f64).powf(-1.0 / 3.0);
    Ok(clamp_count((range_of(values)? / width).ceil()))
}

fn freedman_diaconis<T: Numeric>(values: &[T]) -> Result<usize> {
    let iqr: f64 = stats::iqrange(values)?.into();
    let width = 2.0 * iqr * (values.len() as f64).powf(-1.0 / 3.0);
    Ok(clamp_count((range_of(values)? / width).ceil()))
}

fn range_of<T: Numeric>(values: &[T]) -> Result<f64> {
    let (min, max) = stats::min_max(values)?;
    Ok(max.to_f64() - min.to_f64())
}

// Zero spread makes the width formulas divide by zero; a single bin is the
// only count that still describes such data.
fn clamp_count(raw: f64) -> usize {
    if raw.is_finite() && raw >= 1.0 {
        raw as usize
    } else {
        1
    }
}
